//! Mapping tables between Arabic, Latin and Ge'ez scripts.
//!
//! The tables are embedded as TOML and parsed once into a process-wide
//! singleton. A custom table file can be installed with
//! [`Tables::init_custom`] before the first [`Tables::global`] call.

mod config;

use std::collections::HashMap;
use std::sync::OnceLock;

pub use config::{parse_tables_toml, TableConfigError};

pub const DEFAULT_TOML: &str = include_str!("default_tables.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Returns the embedded default tables TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

#[derive(Debug, Clone)]
pub struct Tables {
    /// Arabic grapheme → Ge'ez base (several letters may share a base).
    pub(crate) consonants: HashMap<char, String>,
    /// Short-vowel diacritic → family ordinal.
    pub(crate) vowels: HashMap<char, usize>,
    /// Ge'ez base → [a, u, i] variants.
    pub(crate) families: HashMap<String, [String; 3]>,
    pub(crate) letters: HashMap<char, String>,
    pub(crate) accents: HashMap<char, String>,
}

impl Tables {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), TableConfigError> {
        // Validate eagerly
        parse_tables_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| TableConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static Tables {
        static INSTANCE: OnceLock<Tables> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            parse_tables_toml(toml_str).expect("tables TOML must be valid")
        })
    }

    pub fn consonant(&self, c: char) -> Option<&str> {
        self.consonants.get(&c).map(String::as_str)
    }

    pub fn vowel_index(&self, c: char) -> Option<usize> {
        self.vowels.get(&c).copied()
    }

    pub fn is_vowel_mark(&self, c: char) -> bool {
        self.vowels.contains_key(&c)
    }

    /// Vowelled variant of a Ge'ez base, or `None` when the base has no family.
    pub fn family_variant(&self, base: &str, index: usize) -> Option<&str> {
        self.families
            .get(base)
            .and_then(|variants| variants.get(index))
            .map(String::as_str)
    }

    /// Ge'ez grapheme for an ASCII letter, case-insensitive.
    pub fn latin(&self, c: char) -> Option<&str> {
        self.letters
            .get(&c.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn accent(&self, c: char) -> Option<&str> {
        self.accents.get(&c).map(String::as_str)
    }

    pub fn consonant_count(&self) -> usize {
        self.consonants.len()
    }

    pub fn family_count(&self) -> usize {
        self.families.len()
    }

    pub fn letter_count(&self) -> usize {
        self.letters.len()
    }
}
