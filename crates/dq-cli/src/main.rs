//! Command-line frontend for Detetive Quest.

mod commands;

use std::process;

use clap::Parser;
use colored::Colorize;

#[derive(Parser)]
#[command(
    name = "detective-quest",
    about = "Detetive Quest: explore the mansion one room at a time",
    version
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = commands::play::run() {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}
