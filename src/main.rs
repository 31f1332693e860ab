//! json2rss - convert JSON Feed documents into RSS 2.0.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    match &cli.command {
        Commands::Convert(args) => cli::convert::run(args),
        Commands::Build(args) => cli::build::run(args),
    }
}
