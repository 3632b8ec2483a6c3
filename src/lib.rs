//! Script-aware syllable counting for lyric lines.
//!
//! The core is [`syllable::count_line_syllables`], a pure function that
//! strips bracketed section markers, splits on whitespace, and counts each
//! token under its own script's rule: Devanagari tokens as aksharas, Latin
//! tokens with a vowel-group heuristic. Around it sit a lyric line model
//! with external-count fallback ([`lyrics`]), sheet statistics ([`stats`]),
//! and a small CLI.

pub mod args;
pub mod config;
pub mod engine;
pub mod error;
pub mod lyrics;
pub mod options;
pub mod output;
pub mod stats;
pub mod syllable;

pub use syllable::{count_line_syllables, count_syllables};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
