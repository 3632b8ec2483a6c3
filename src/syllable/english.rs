// src/syllable/english.rs
//! Vowel-group syllable heuristic for Latin-script words.
//!
//! The classic dictionary-free estimate: normalize, strip silent endings,
//! count vowel clusters. Known-irregular words come from a small exception
//! table. The exact stripping and clustering rules are load-bearing; the
//! counts they produce are the contract for everything downstream (badges,
//! density maps, suggestion diffs), so deviations here change output
//! silently.

/// Words the vowel-cluster rule gets wrong often enough to special-case.
const EXCEPTIONS: &[(&str, usize)] = &[
    ("every", 2),
    ("different", 2),
    ("family", 2),
    ("interest", 2),
];

/// Letters treated as vowels by the cluster rule. `y` counts as a vowel
/// except as the word opener.
#[inline]
fn is_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'e' | b'i' | b'o' | b'u' | b'y')
}

/// The character class guarding the silent-ending rules: a silent `e`/`es`
/// only drops after a letter outside this set (`l` plus the vowels).
#[inline]
fn blocks_silent_ending(b: u8) -> bool {
    b == b'l' || is_vowel(b)
}

/// Drop a silent or inflectional ending. The three rules apply in the
/// order the original alternation resolves: consonant+`es` (all three
/// bytes go), then bare `ed`, then consonant+`e` (both bytes go).
fn strip_silent_ending(word: &str) -> &str {
    let b = word.as_bytes();
    let n = b.len();
    if n >= 3 && !blocks_silent_ending(b[n - 3]) && b[n - 2] == b'e' && b[n - 1] == b's' {
        return &word[..n - 3];
    }
    if n >= 2 && b[n - 2] == b'e' && b[n - 1] == b'd' {
        return &word[..n - 2];
    }
    if n >= 2 && !blocks_silent_ending(b[n - 2]) && b[n - 1] == b'e' {
        return &word[..n - 2];
    }
    word
}

/// Count vowel runs, where each greedy slice of at most two vowels counts
/// one syllable: a run of length L contributes ceil(L / 2).
fn count_vowel_groups(word: &str) -> usize {
    let mut groups = 0;
    let mut run = 0usize;
    for &b in word.as_bytes() {
        if is_vowel(b) {
            run += 1;
        } else if run > 0 {
            groups += run.div_ceil(2);
            run = 0;
        }
    }
    if run > 0 {
        groups += run.div_ceil(2);
    }
    groups
}

/// Estimate the syllable count of a Latin-script word.
///
/// Everything outside `a`–`z` is discarded up front, so hyphens,
/// apostrophes and stray digits never affect the estimate. An empty
/// residue counts 0; residues of up to three letters count 1 without
/// further analysis.
#[must_use]
pub fn count_word(word: &str) -> usize {
    let cleaned: String = word
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_lowercase)
        .collect();

    if cleaned.is_empty() {
        return 0;
    }
    if cleaned.len() <= 3 {
        return 1;
    }

    if let Some(&(_, count)) = EXCEPTIONS.iter().find(|(w, _)| *w == cleaned) {
        return count;
    }

    let stripped = strip_silent_ending(&cleaned);
    let stripped = stripped.strip_prefix('y').unwrap_or(stripped);

    match count_vowel_groups(stripped) {
        0 => 1,
        n => n,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_word_floor() {
        assert_eq!(count_word("a"), 1);
        assert_eq!(count_word("the"), 1);
        assert_eq!(count_word("at"), 1);
        // Punctuation cleans away before the length check.
        assert_eq!(count_word("it's"), 1);
    }

    #[test]
    fn empty_and_symbol_only() {
        assert_eq!(count_word(""), 0);
        assert_eq!(count_word("..."), 0);
        assert_eq!(count_word("1234"), 0);
        assert_eq!(count_word("🎵"), 0);
    }

    #[test]
    fn exception_table() {
        assert_eq!(count_word("every"), 2);
        assert_eq!(count_word("different"), 2);
        assert_eq!(count_word("family"), 2);
        assert_eq!(count_word("interest"), 2);
        // Case and punctuation still hit the table.
        assert_eq!(count_word("Family,"), 2);
    }

    #[test]
    fn plain_polysyllables() {
        assert_eq!(count_word("hello"), 2);
        assert_eq!(count_word("beautiful"), 4);
        assert_eq!(count_word("syllable"), 3);
        assert_eq!(count_word("banana"), 3);
    }

    #[test]
    fn silent_endings() {
        // consonant+e drops with its consonant: "there" → "the" → 1.
        assert_eq!(count_word("there"), 1);
        // consonant+es drops all three: "makes" → "ma" → 1.
        assert_eq!(count_word("makes"), 1);
        // bare ed: "wanted" → "want" → 1.
        assert_eq!(count_word("wanted"), 1);
        // l blocks the silent-e rule: "table" keeps its ending → 2.
        assert_eq!(count_word("table"), 2);
    }

    #[test]
    fn leading_y_is_not_a_vowel() {
        // "yellow" → "ellow": e, o → 2.
        assert_eq!(count_word("yellow"), 2);
        // Internal y still counts: "rhythm" has the run "y" → 1.
        assert_eq!(count_word("rhythm"), 1);
    }

    #[test]
    fn long_vowel_runs_split_in_pairs() {
        // "queueing": run "ueuei" of length 5 → 3 groups.
        assert_eq!(count_word("queueing"), 3);
    }

    #[test]
    fn no_vowel_residue_floors_to_one() {
        // "hmphs" parses to zero vowel groups but is still one syllable.
        assert_eq!(count_word("hmphs"), 1);
    }
}
