//! Arabic-script transliteration into Ge'ez.
//!
//! Arabic writes short vowels as diacritics after the consonant, while Ge'ez
//! folds the vowel into the consonant glyph. The scan therefore looks one
//! character ahead: a consonant followed by fatha, damma or kasra is emitted
//! as the matching member of its Ge'ez family, otherwise as its base form.
//!
//! The window slides one character at a time. A diacritic consumed as
//! lookahead is visited again as the current character and absorbed there.

#[cfg(test)]
mod tests;

use std::iter::Peekable;
use std::str::Chars;

use tracing::debug_span;

use crate::tables::Tables;
use crate::unicode::{is_nunation, NUNATION_GEEZ};

/// Transliterate Arabic-script `text`. Characters that no table covers are
/// dropped; this never fails.
pub fn transliterate(text: &str) -> String {
    transliterate_with(Tables::global(), text)
}

pub(crate) fn transliterate_with(tables: &Tables, text: &str) -> String {
    let _span = debug_span!("arabic_transliterate", len = text.len()).entered();
    Graphemes::new(tables, text).collect()
}

/// Lazy sequence of the Ge'ez pieces emitted for an Arabic string.
pub struct Graphemes<'t, 's> {
    tables: &'t Tables,
    chars: Peekable<Chars<'s>>,
}

impl<'t, 's> Graphemes<'t, 's> {
    pub fn new(tables: &'t Tables, text: &'s str) -> Self {
        Self {
            tables,
            chars: text.chars().peekable(),
        }
    }
}

impl<'s> Graphemes<'static, 's> {
    /// Iterate over `text` with the global tables.
    pub fn global(text: &'s str) -> Self {
        Self::new(Tables::global(), text)
    }
}

impl<'t> Iterator for Graphemes<'t, '_> {
    type Item = &'t str;

    fn next(&mut self) -> Option<&'t str> {
        loop {
            let current = self.chars.next()?;
            let next = self.chars.peek().copied();
            if let Some(piece) = resolve(self.tables, current, next) {
                return Some(piece);
            }
        }
    }
}

/// Output for the window `(current, next)`, or `None` when nothing is emitted.
fn resolve(tables: &Tables, current: char, next: Option<char>) -> Option<&str> {
    let Some(next) = next else {
        // Last character: a trailing vowel has nothing to attach to.
        if tables.is_vowel_mark(current) {
            return None;
        }
        if is_nunation(current) {
            return Some(NUNATION_GEEZ);
        }
        return tables.consonant(current);
    };

    if let Some(index) = tables.vowel_index(next) {
        let base = tables.consonant(current)?;
        return tables.family_variant(base, index);
    }
    if tables.is_vowel_mark(current) {
        return None;
    }
    if current == ' ' {
        return Some(" ");
    }
    if is_nunation(current) {
        return Some(NUNATION_GEEZ);
    }
    tables.consonant(current)
}
