//! Punctuation stripping and accented-Latin approximation.

use crate::tables::Tables;
use crate::unicode::{is_space_char, is_word_char};

/// Remove punctuation, then replace accented letters with plain-Latin
/// approximations ("è" → "eh", "ñ" → "ny"). Unrecognized characters pass
/// through unchanged.
pub fn normalize(text: &str) -> String {
    normalize_with(Tables::global(), text)
}

pub(crate) fn normalize_with(tables: &Tables, text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text
        .chars()
        .filter(|&c| is_word_char(c) || is_space_char(c))
    {
        match tables.accent(c) {
            Some(plain) => out.push_str(plain),
            None => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_punctuation() {
        assert_eq!(normalize("Molo, sisi!"), "Molo sisi");
        assert_eq!(normalize("a-b.c?"), "abc");
    }

    #[test]
    fn test_keeps_digits_and_whitespace() {
        assert_eq!(normalize("2 x\t3_4"), "2 x\t3_4");
    }

    #[test]
    fn test_accent_substitutions() {
        assert_eq!(normalize("café"), "cafe");
        assert_eq!(normalize("très"), "trehs");
        assert_eq!(normalize("où"), "oou");
        assert_eq!(normalize("français"), "fransais");
        assert_eq!(normalize("château"), "chahteau");
        assert_eq!(normalize("Noël"), "Noel");
        assert_eq!(normalize("naïf"), "naif");
    }

    #[test]
    fn test_enye_expands() {
        assert_eq!(normalize("mañana"), "manyana");
        assert_eq!(normalize("señor."), "senyor");
    }

    #[test]
    fn test_unrecognized_pass_through() {
        // Uppercase accents are not in the table.
        assert_eq!(normalize("École"), "École");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_combining_marks_are_stripped() {
        // Alphabetic marks (Arabic harakat, Devanagari vowel signs) are not
        // word characters.
        assert_eq!(normalize("ka\u{093E} b\u{064E}"), "ka b");
    }

    #[test]
    fn test_information_separators_kept() {
        assert_eq!(normalize("x\u{1C}y"), "x\u{1C}y");
        assert_eq!(normalize("x\u{1F}y!"), "x\u{1F}y");
    }

    #[test]
    fn test_decomposed_accent_is_stripped() {
        // A combining acute is not a word character.
        assert_eq!(normalize("e\u{0301}te"), "ete");
    }
}
