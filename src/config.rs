// src/config.rs
use crate::args::Args;
use crate::options::{OutputFormat, OutputMode};
use std::path::PathBuf;

/// Runtime configuration derived from CLI arguments.
#[derive(Debug)]
pub struct Config {
    pub paths: Vec<PathBuf>,
    pub format: OutputFormat,
    pub output_mode: OutputMode,
    pub output: Option<PathBuf>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            paths: args.paths,
            format: args.output.format,
            output_mode: args.output.output_mode,
            output: args.output.output,
        }
    }
}
