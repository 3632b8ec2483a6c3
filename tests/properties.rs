// tests/properties.rs
//! Property tests for the contract the counter must never break:
//! total over all strings, deterministic, and insensitive to whitespace
//! normalization.

use count_syllables::count_line_syllables;
use proptest::prelude::*;

proptest! {
    #[test]
    fn never_panics_on_any_string(s in "\\PC*") {
        let _ = count_line_syllables(&s);
    }

    #[test]
    fn never_panics_on_arbitrary_scalars(s in proptest::collection::vec(any::<char>(), 0..64)) {
        let s: String = s.into_iter().collect();
        let _ = count_line_syllables(&s);
    }

    #[test]
    fn deterministic(s in "\\PC*") {
        prop_assert_eq!(count_line_syllables(&s), count_line_syllables(&s));
    }

    #[test]
    fn whitespace_padding_is_irrelevant(s in "[a-zA-Z ]{0,40}") {
        let padded = format!("  {}  ", s.replace(' ', "   "));
        prop_assert_eq!(count_line_syllables(&padded), count_line_syllables(&s));
    }

    #[test]
    fn line_count_is_sum_of_token_counts(s in "[a-zA-Z' ]{0,40}") {
        let sum: usize = s.split_whitespace()
            .map(count_syllables_token)
            .sum();
        prop_assert_eq!(count_line_syllables(&s), sum);
    }

    #[test]
    fn nonempty_english_word_counts_at_least_one(s in "[a-z]{1,12}") {
        prop_assert!(count_line_syllables(&s) >= 1);
    }
}

fn count_syllables_token(token: &str) -> usize {
    count_syllables::count_syllables(token)
}
