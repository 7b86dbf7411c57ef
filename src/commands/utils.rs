use colored::Colorize;
use std::io;
use std::process::{Command, ExitStatus, Stdio};

pub fn log_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

pub fn log_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

pub fn log_error(msg: &str) {
    eprintln!("{} {}", "[ERROR]".red().bold(), msg);
}

pub fn failure_line(identity: &str) -> String {
    format!("{} Host {} Failed!", "[FAIL]".red().bold(), identity)
}

/// Run with the parent's stdio attached and wait for the child to exit.
pub fn run_command_status(cmd: &mut Command) -> io::Result<ExitStatus> {
    cmd.stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
}
