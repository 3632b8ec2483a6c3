// src/syllable/script.rs

/// Writing system of a token, used to pick the counting rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    /// Contains at least one scalar in the principal Devanagari block.
    Devanagari,
    /// Everything else: Latin text, digits, punctuation, emoji.
    Latin,
}

const DEVANAGARI_BLOCK: std::ops::RangeInclusive<u32> = 0x0900..=0x097F;

/// True when `c` lies in the principal Devanagari block (U+0900–U+097F).
#[inline]
#[must_use]
pub fn is_devanagari(c: char) -> bool {
    DEVANAGARI_BLOCK.contains(&(c as u32))
}

/// Classify a token. A single Devanagari scalar anywhere routes the whole
/// token through the akshara counter, so transliterated Hinglish lines mix
/// freely with native-script words.
#[must_use]
pub fn detect(token: &str) -> Script {
    if token.chars().any(is_devanagari) {
        Script::Devanagari
    } else {
        Script::Latin
    }
}
