use proptest::prelude::*;

use super::*;
use crate::unicode::{DAMMA, FATHA, FATHATAN, KASRA};

fn t(s: &str) -> String {
    transliterate(s)
}

/// Consonants whose Ge'ez base has a vowel family.
fn vowelled_consonants() -> Vec<char> {
    let tables = Tables::global();
    let mut keys: Vec<char> = tables
        .consonants
        .iter()
        .filter(|(_, base)| tables.families.contains_key(base.as_str()))
        .map(|(c, _)| *c)
        .collect();
    keys.sort_unstable();
    keys
}

#[test]
fn test_salam_without_diacritics() {
    // س → ስ, ل → ል, ا → እ, trailing م → ም
    assert_eq!(t("سلام"), "ስልእም");
}

#[test]
fn test_salam_with_fatha() {
    assert_eq!(t("سَلام"), "ሳልእም");
}

#[test]
fn test_kitab() {
    // Trailing tanwin damm is not in any table and is dropped.
    assert_eq!(t("كِتَابٌ"), "ኪታእብ");
}

#[test]
fn test_vowel_ordinals() {
    assert_eq!(t(&format!("ب{FATHA}")), "ባ");
    assert_eq!(t(&format!("ب{DAMMA}")), "ቡ");
    assert_eq!(t(&format!("ب{KASRA}")), "ቢ");
}

#[test]
fn test_homophones_resolve_identically() {
    for c in ['د', 'ذ', 'ض'] {
        assert_eq!(t(&format!("{c}{DAMMA}")), "ዱ");
    }
}

#[test]
fn test_consumed_diacritic_is_absorbed() {
    // The fatha is seen as lookahead for ب, then revisited and dropped.
    assert_eq!(t(&format!("ب{FATHA}ت")), "ባት");
}

#[test]
fn test_nunation_final() {
    assert_eq!(t(&format!("كتاب{FATHATAN}")), "ክትእብን");
}

#[test]
fn test_nunation_mid_string() {
    assert_eq!(t(&format!("ب{FATHATAN} ب")), "ብን ብ");
}

#[test]
fn test_nunation_followed_by_vowel_uses_family() {
    // Nunation maps to ን in the consonant table, which has a family.
    assert_eq!(t(&format!("{FATHATAN}{FATHA}")), "ና");
}

#[test]
fn test_bare_diacritics_emit_nothing() {
    assert_eq!(t(&FATHA.to_string()), "");
    assert_eq!(t(&format!("{KASRA}ب")), "ብ");
    assert_eq!(t(&format!("{FATHA}{DAMMA}{KASRA}")), "");
}

#[test]
fn test_stacked_vowels() {
    // The second mark looks up a diacritic as a consonant, which misses.
    assert_eq!(t(&format!("ب{FATHA}{DAMMA}")), "ባ");
}

#[test]
fn test_base_without_family_drops_vowelled_form() {
    // ء → አ has no family; the vowelled form is lost.
    assert_eq!(t(&format!("ء{FATHA}")), "");
    assert_eq!(t(&format!("ة{KASRA}ب")), "ብ");
    // Without a vowel the base is emitted, including multi-character values.
    assert_eq!(t("ةب"), "አተብ");
}

#[test]
fn test_spaces_and_punctuation() {
    assert_eq!(t("من؟"), "ምን?");
    assert_eq!(t("لا لا"), "ልእ ልእ");
}

#[test]
fn test_unmapped_characters_are_dropped() {
    assert_eq!(t("پ"), "");
    assert_eq!(t("xبy"), "ብ");
    assert_eq!(t(""), "");
}

#[test]
fn test_trailing_space_is_dropped() {
    // At the last position only the consonant table applies.
    assert_eq!(t("ب "), "ብ");
}

#[test]
fn test_graphemes_iterator() {
    let pieces: Vec<&str> = Graphemes::global(&format!("س{FATHA}لام")).collect();
    assert_eq!(pieces, vec!["ሳ", "ል", "እ", "ም"]);
}

proptest! {
    #[test]
    fn prop_vowel_selects_family_member(
        c in proptest::sample::select(vowelled_consonants()),
        (mark, index) in proptest::sample::select(vec![(FATHA, 0usize), (DAMMA, 1), (KASRA, 2)]),
    ) {
        let tables = Tables::global();
        let base = tables.consonant(c).unwrap();
        let expected = tables.family_variant(base, index).unwrap();
        prop_assert_eq!(t(&format!("{c}{mark}")), expected);
    }

    #[test]
    fn prop_bare_consonant_emits_base(
        c in proptest::sample::select(vowelled_consonants()),
        d in proptest::sample::select(vowelled_consonants()),
    ) {
        let tables = Tables::global();
        let expected = format!("{}{}", tables.consonant(c).unwrap(), tables.consonant(d).unwrap());
        prop_assert_eq!(t(&format!("{c}{d}")), expected);
    }

    #[test]
    fn prop_deterministic(s in "[سلامكتبً َُِ؟x]{0,24}") {
        prop_assert_eq!(t(&s), t(&s));
    }
}
