// src/engine.rs
//! Reads lyric sources and runs the counter over them.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::SyllableError;
use crate::lyrics::parse_lyrics;
use crate::stats::DocumentStats;

/// One analyzed lyric source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentReport {
    /// File path, or `-` for stdin.
    pub file: String,
    #[serde(flatten)]
    pub stats: DocumentStats,
}

/// Outcome of a run. Unreadable sources land in `errors`; the rest of
/// the run proceeds.
#[derive(Debug, Default)]
pub struct RunResult {
    pub reports: Vec<DocumentReport>,
    pub errors: Vec<(PathBuf, SyllableError)>,
}

/// Analyze every configured source. With no paths, reads stdin.
#[must_use]
pub fn run(config: &Config) -> RunResult {
    if config.paths.is_empty() {
        return run_stdin();
    }

    let mut result = RunResult::default();
    for path in &config.paths {
        match fs::read_to_string(path) {
            Ok(text) => result.reports.push(analyze(path.display().to_string(), &text)),
            Err(source) => result.errors.push((
                path.clone(),
                SyllableError::Read {
                    path: path.clone(),
                    source,
                },
            )),
        }
    }
    result
}

fn run_stdin() -> RunResult {
    let mut result = RunResult::default();
    let mut text = String::new();
    match std::io::stdin().read_to_string(&mut text) {
        Ok(_) => result.reports.push(analyze("-".to_string(), &text)),
        Err(source) => result.errors.push((
            PathBuf::from("-"),
            SyllableError::Read {
                path: PathBuf::from("-"),
                source,
            },
        )),
    }
    result
}

fn analyze(file: String, text: &str) -> DocumentReport {
    let lines = parse_lyrics(text);
    DocumentReport {
        file,
        stats: DocumentStats::compute(&lines),
    }
}
