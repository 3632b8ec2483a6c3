// src/syllable.rs
//! The counting core: script dispatch plus the line-level entry point.
//!
//! Everything in this module is a pure function of its input string. No
//! allocation outlives a call, no table is mutable, and no input can make
//! any of these functions panic or error; malformed tokens count 0.

pub mod devanagari;
pub mod english;
pub mod script;

use script::Script;

/// Count syllables in a single whitespace-free token, picking the rule by
/// script. A token with any Devanagari scalar is counted as aksharas;
/// everything else goes through the English vowel-group heuristic.
#[must_use]
pub fn count_syllables(token: &str) -> usize {
    match script::detect(token) {
        Script::Devanagari => devanagari::count_aksharas(token),
        Script::Latin => english::count_word(token),
    }
}

/// Count syllables in a full lyric line.
///
/// Bracketed annotations (`[Chorus]`, inline cue marks) are removed first
/// so section headers count 0 and annotations never inflate a line. The
/// remainder is split on whitespace runs and each token is counted under
/// its own script, so mixed Hinglish lines sum naturally.
#[must_use]
pub fn count_line_syllables(line: &str) -> usize {
    strip_bracket_groups(line)
        .split_whitespace()
        .map(count_syllables)
        .sum()
}

/// Remove every `[...]` group, matching each `[` with the nearest `]`
/// after it. An unmatched `[` is ordinary text.
fn strip_bracket_groups(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    while let Some(open) = rest.find('[') {
        match rest[open..].find(']') {
            Some(close) => {
                out.push_str(&rest[..open]);
                rest = &rest[open + close + 1..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_only_line_counts_zero() {
        assert_eq!(count_line_syllables("[Chorus]"), 0);
        assert_eq!(count_line_syllables("  [Verse 2]  "), 0);
    }

    #[test]
    fn inline_annotation_is_ignored() {
        assert_eq!(
            count_line_syllables("[Verse] I love you"),
            count_line_syllables("I love you")
        );
        assert_eq!(
            count_line_syllables("I love [whisper] you"),
            count_line_syllables("I love you")
        );
    }

    #[test]
    fn multiple_bracket_groups() {
        assert_eq!(count_line_syllables("[Intro] [Chorus] go"), 1);
    }

    #[test]
    fn unmatched_bracket_is_plain_text() {
        // "[Cho" has no closing bracket; the token survives cleaning
        // and counts under the English rule ("cho" → 1).
        assert_eq!(count_line_syllables("[Cho rus"), 2);
    }

    #[test]
    fn empty_and_whitespace() {
        assert_eq!(count_line_syllables(""), 0);
        assert_eq!(count_line_syllables("   \t  "), 0);
    }

    #[test]
    fn mixed_script_line_sums_per_token() {
        let expected = count_syllables("hello") + count_syllables("नमस्ते");
        assert_eq!(count_line_syllables("hello नमस्ते"), expected);
        assert_eq!(count_line_syllables("hello नमस्ते"), 2 + 3);
    }

    #[test]
    fn whitespace_runs_do_not_change_counts() {
        assert_eq!(
            count_line_syllables("  I   love\t you "),
            count_line_syllables("I love you")
        );
    }

    #[test]
    fn punctuation_tokens_count_zero() {
        assert_eq!(count_line_syllables("— … !!"), 0);
    }
}
