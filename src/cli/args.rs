//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// json2rss CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Convert a JSON Feed document to RSS 2.0
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Build a JSON Feed from site and post data
    #[command(visible_alias = "b")]
    Build(BuildArgs),
}

/// Convert command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Input JSON Feed file, `-` for stdin
    #[arg(value_name = "INPUT", default_value = "-", value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Output file (stdout if omitted)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Self-link URL override for the generated channel
    #[arg(long)]
    pub feed_url: Option<String>,

    /// Channel language tag (e.g. "en-us")
    #[arg(long)]
    pub language: Option<String>,
}

/// Build command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Input site source file (`{"site": …, "posts": […]}`), `-` for stdin
    #[arg(value_name = "INPUT", default_value = "-", value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Output file (stdout if omitted)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Render RSS directly instead of emitting the JSON Feed
    #[arg(long)]
    pub rss: bool,
}
