// src/stats.rs
//! Per-line and per-document syllable statistics.
//!
//! These feed the CLI output and, upstream, a flow-density visualization.
//! Counts here are always recomputed from text so an edited line and its
//! sheet-level aggregates can never disagree.

use serde::{Deserialize, Serialize};

use crate::lyrics::{LineKind, LyricLine};
use crate::syllable::count_line_syllables;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStats {
    pub index: usize,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: LineKind,
    pub syllables: usize,
}

/// Aggregated counts over one lyric sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentStats {
    pub lines: Vec<LineStats>,
    pub total: usize,
    pub max: usize,
    pub mean: f64,
}

impl DocumentStats {
    /// Compute stats for a sheet. Headers appear in `lines` with a count
    /// of 0 but are excluded from `total`, `max` and `mean`.
    #[must_use]
    pub fn compute(lines: &[LyricLine]) -> Self {
        let lines: Vec<LineStats> = lines
            .iter()
            .enumerate()
            .map(|(index, line)| LineStats {
                index,
                text: line.text.clone(),
                kind: line.kind,
                syllables: match line.kind {
                    LineKind::Header => 0,
                    LineKind::Lyric => count_line_syllables(&line.text),
                },
            })
            .collect();

        let lyric_counts: Vec<usize> = lines
            .iter()
            .filter(|l| l.kind == LineKind::Lyric)
            .map(|l| l.syllables)
            .collect();

        let total: usize = lyric_counts.iter().sum();
        let max = lyric_counts.iter().copied().max().unwrap_or(0);
        let mean = if lyric_counts.is_empty() {
            0.0
        } else {
            total as f64 / lyric_counts.len() as f64
        };

        Self {
            lines,
            total,
            max,
            mean,
        }
    }

    /// Density bars for the lyric lines: each count normalized by the
    /// sheet max, which is clamped to at least 1 so an all-zero sheet
    /// yields zero-height bars instead of dividing by zero.
    #[must_use]
    pub fn density(&self) -> Vec<f64> {
        let max = self.max.max(1) as f64;
        self.lines
            .iter()
            .filter(|l| l.kind == LineKind::Lyric)
            .map(|l| l.syllables as f64 / max)
            .collect()
    }
}

/// Signed syllable delta of a suggested replacement against the current
/// line: the "+2" badge next to a suggestion.
#[must_use]
pub fn suggestion_diff(current: &str, candidate: &str) -> i64 {
    count_line_syllables(candidate) as i64 - count_line_syllables(current) as i64
}
