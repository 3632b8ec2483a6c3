// src/syllable/devanagari.rs
//! Akshara (orthographic syllable) counting for Devanagari tokens.
//!
//! Hindi akshara boundaries track spoken syllables closely enough for lyric
//! metering. The rule set is orthographic on purpose: schwa deletion and
//! other pronunciation effects are ignored.

/// Virama/halant: suppresses the inherent vowel of the preceding consonant
/// to form a conjunct cluster.
const VIRAMA: char = '\u{094D}';

/// Independent vowel letters: the standalone vowel block plus the vocalic
/// R/L letters and the extended vowels for Kashmiri/Bihari notation.
#[inline]
fn is_independent_vowel(c: char) -> bool {
    matches!(c as u32, 0x0904..=0x0914 | 0x0960..=0x0961 | 0x0972..=0x0977)
}

/// Consonant letters: the main block plus nukta forms and the extended
/// block additions.
#[inline]
fn is_consonant(c: char) -> bool {
    matches!(c as u32, 0x0915..=0x0939 | 0x0958..=0x095F | 0x0979..=0x097F)
}

/// Count aksharas in a token.
///
/// Each independent vowel contributes one. A consonant contributes one
/// unless the next scalar is a virama, in which case it is a half-form
/// inside a conjunct and the cluster-final consonant carries the syllable.
/// Dependent vowel signs, anusvara, nukta and the rest modify an existing
/// akshara and contribute nothing. A token of only such marks counts 0.
#[must_use]
pub fn count_aksharas(token: &str) -> usize {
    let mut count = 0;
    let mut chars = token.chars().peekable();

    while let Some(c) = chars.next() {
        if is_independent_vowel(c) {
            count += 1;
        } else if is_consonant(c) {
            if chars.peek() == Some(&VIRAMA) {
                continue;
            }
            count += 1;
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_consonants_carry_inherent_vowel() {
        // क म ल, three consonants with no marks: 3 aksharas.
        assert_eq!(count_aksharas("कमल"), 3);
    }

    #[test]
    fn matra_does_not_add() {
        // की = क + ी: one akshara, the matra only recolors it.
        assert_eq!(count_aksharas("की"), 1);
    }

    #[test]
    fn virama_suppresses_cluster_head() {
        // क + ् + य: conjunct क्य is a single akshara.
        assert_eq!(count_aksharas("क\u{094D}य"), 1);
        // नमस्ते = न म स ् त े: न, म, स्ते → 3.
        assert_eq!(count_aksharas("नमस्ते"), 3);
    }

    #[test]
    fn stacked_viramas() {
        // स + ् + त + ् + र: a three-consonant cluster is one akshara.
        assert_eq!(count_aksharas("स\u{094D}त\u{094D}र"), 1);
    }

    #[test]
    fn independent_vowel_always_counts() {
        assert_eq!(count_aksharas("आ"), 1);
        // आओ: two independent vowels.
        assert_eq!(count_aksharas("आओ"), 2);
        // Vowel adjacent to a conjunct keeps its own count.
        assert_eq!(count_aksharas("आक\u{094D}य"), 2);
    }

    #[test]
    fn trailing_virama() {
        // A dead consonant at word end contributes nothing.
        assert_eq!(count_aksharas("क\u{094D}"), 0);
    }

    #[test]
    fn modifier_only_token_counts_zero() {
        // Anusvara and a bare matra with no base consonant.
        assert_eq!(count_aksharas("\u{0902}\u{093E}"), 0);
        assert_eq!(count_aksharas(""), 0);
    }

    #[test]
    fn devanagari_digits_count_zero() {
        assert_eq!(count_aksharas("\u{0967}\u{0968}"), 0);
    }

    #[test]
    fn vocalic_and_extended_vowels() {
        assert_eq!(count_aksharas("\u{0960}"), 1); // vocalic RR
        assert_eq!(count_aksharas("\u{0972}"), 1); // candra A
    }
}
