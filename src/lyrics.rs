// src/lyrics.rs
//! Lyric line model: header vs singable line, with optional externally
//! supplied syllable counts.
//!
//! A generative-model payload may carry its own per-line count. The local
//! counter is the fallback when that count is absent, and the sole source
//! of truth once a line has been edited after the payload arrived.

use serde::{Deserialize, Serialize};

use crate::syllable::count_line_syllables;

/// Structural role of a line inside a lyric sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Section marker such as `[Chorus]`; never counted.
    Header,
    /// A singable line.
    Lyric,
}

/// One line of a lyric sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LyricLine {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: LineKind,
    /// Precomputed count from an external payload, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syllables: Option<usize>,
}

impl LyricLine {
    #[must_use]
    pub fn new(text: impl Into<String>, kind: LineKind) -> Self {
        Self {
            text: text.into(),
            kind,
            syllables: None,
        }
    }

    /// Classify raw text: a trimmed line that is exactly one bracket group
    /// is a section header, anything else is a lyric line.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let kind = if is_header(&text) {
            LineKind::Header
        } else {
            LineKind::Lyric
        };
        Self {
            text,
            kind,
            syllables: None,
        }
    }

    /// The count to display: the externally supplied one when present,
    /// otherwise a fresh local count. Headers always report 0.
    #[must_use]
    pub fn effective_syllables(&self) -> usize {
        if self.kind == LineKind::Header {
            return 0;
        }
        self.syllables
            .unwrap_or_else(|| count_line_syllables(&self.text))
    }

    /// Replace the text after an edit. Any stale external count is
    /// discarded so the local counter becomes the source of truth.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.syllables = None;
    }
}

fn is_header(text: &str) -> bool {
    let t = text.trim();
    t.len() >= 2
        && t.starts_with('[')
        && t.ends_with(']')
        && !t[1..t.len() - 1].contains(['[', ']'])
}

/// Parse a plain-text lyric sheet into classified lines. Blank lines are
/// dropped; they carry no structure the counter cares about.
#[must_use]
pub fn parse_lyrics(text: &str) -> Vec<LyricLine> {
    text.lines()
        .filter(|l| !l.trim().is_empty())
        .map(LyricLine::from_text)
        .collect()
}
