// src/args.rs
use crate::options::{OutputFormat, OutputMode};
use clap::{Args as ClapArgs, Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "count_syllables",
    version,
    about = "Script-aware syllable counting for lyric lines"
)]
pub struct Args {
    #[command(flatten)]
    pub output: OutputOptions,

    /// Lyric text files; reads stdin when none are given
    #[arg(value_hint = ValueHint::FilePath, help_heading = "Input")]
    pub paths: Vec<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// Output format
    #[arg(long, value_enum, default_value = "table", help_heading = "Output")]
    pub format: OutputFormat,

    /// Output mode (full, summary, total-only)
    #[arg(long, value_enum, default_value = "full", help_heading = "Output")]
    pub output_mode: OutputMode,

    /// Write to a file instead of stdout
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "Output")]
    pub output: Option<PathBuf>,
}
