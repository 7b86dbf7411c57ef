pub mod run;
pub mod utils;
