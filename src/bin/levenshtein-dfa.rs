//! levenshtein-dfa - compile Levenshtein automata into explicit DFAs

use clap::Parser;
use colored::Colorize;
use std::process;

use levenshtein_dfa::cli::commands;
use levenshtein_dfa::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // RUST_LOG takes precedence over -v
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    if let Err(e) = commands::execute(cli.command) {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }
}
