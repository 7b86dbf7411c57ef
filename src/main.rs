use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod commands;
mod config;
mod invocation;
mod outcome;
mod roster;

#[derive(Parser)]
#[command(name = "fleetcmd")]
#[command(about = "Run one command on every host in a roster over SSH", long_about = None)]
#[command(version)]
struct Cli {
    /// Roster file: one `<user> <host>` pair per line
    roster: PathBuf,

    /// Command to run on every host (quote it if it contains spaces)
    #[arg(allow_hyphen_values = true)]
    command: String,
}

fn load_config() -> Result<config::FleetConfig> {
    let dir = std::env::var("FLEETCMD_CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));
    config::FleetConfig::load(&dir)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config()?;

    commands::run::run(&cli.roster, &cli.command, &config)
}
