//! Command-line interface definitions.

use clap::Parser;
use std::path::PathBuf;

/// YUI Compressor build-step adapter CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Files to compress (js/css; anything else passes through untouched)
    #[arg(value_name = "FILE", required = true, value_hint = clap::ValueHint::FilePath)]
    pub files: Vec<PathBuf>,

    /// Config file path (default: yuic.toml)
    #[arg(short = 'C', long, default_value = "yuic.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Override the build mode from config (e.g., "development")
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Rewrite files in place instead of printing to stdout
    #[arg(short, long)]
    pub write: bool,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    pub verbose: bool,
}
