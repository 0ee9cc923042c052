mod callsite;
mod cli;
mod commands;
mod discover;
mod error;
mod fs;
mod inject;
mod output;

use clap::Parser;

fn main() {
    let cli = cli::Cli::parse();

    if let Err(err) = commands::dispatch(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
