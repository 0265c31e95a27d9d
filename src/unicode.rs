//! Character-level classification for Arabic and Latin text.

use unicode_general_category::{get_general_category, GeneralCategory};

pub const FATHA: char = '\u{064E}';
pub const DAMMA: char = '\u{064F}';
pub const KASRA: char = '\u{0650}';
/// Tanwin fath, the nunation mark.
pub const FATHATAN: char = '\u{064B}';

/// Fixed rendering of nunation.
pub const NUNATION_GEEZ: &str = "ን";

/// Check the main Arabic block (U+0600..U+06FF).
pub fn is_arabic(c: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&c)
}

/// Fatha, damma or kasra.
pub fn is_arabic_vowel_mark(c: char) -> bool {
    matches!(c, FATHA | DAMMA | KASRA)
}

pub fn is_nunation(c: char) -> bool {
    c == FATHATAN
}

/// Word characters in the regex `\w` sense: letters (L*), numbers (N*) and
/// underscore. Combining marks (Mn/Mc/Me) are not word characters even when
/// they carry the Alphabetic property.
pub fn is_word_char(c: char) -> bool {
    if c == '_' {
        return true;
    }
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
            | GeneralCategory::LetterNumber
            | GeneralCategory::OtherNumber
    )
}

/// Whitespace in the regex `\s` sense: `White_Space` plus the information
/// separators U+001C..U+001F.
pub fn is_space_char(c: char) -> bool {
    c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c)
}
