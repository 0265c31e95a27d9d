use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use super::Tables;
use crate::unicode::is_arabic_vowel_mark;

#[derive(Deserialize)]
struct TablesConfig {
    arabic: ArabicConfig,
    latin: LatinConfig,
}

#[derive(Deserialize)]
struct ArabicConfig {
    consonants: BTreeMap<String, String>,
    vowels: BTreeMap<String, u8>,
    families: BTreeMap<String, Vec<String>>,
}

#[derive(Deserialize)]
struct LatinConfig {
    letters: BTreeMap<String, String>,
    #[serde(default)]
    accents: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum TableConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{0}] table is empty")]
    Empty(&'static str),
    #[error("[{table}] key must be a single character: {key:?}")]
    MultiCharKey { table: &'static str, key: String },
    #[error("[{table}] empty value for key: {key:?}")]
    EmptyValue { table: &'static str, key: String },
    #[error("vowel index out of range for {key:?}: {index} (expected 0..=2)")]
    VowelIndex { key: String, index: u8 },
    #[error("[arabic.vowels] key is not fatha, damma or kasra: {0:?}")]
    NotVowelMark(String),
    #[error("family for {0:?} must list exactly three variants")]
    FamilyArity(String),
    #[error("no mapping for latin letter '{0}'")]
    MissingLetter(char),
    #[error("mapping tables already initialized")]
    AlreadyInitialized,
}

fn single_char(table: &'static str, key: &str) -> Result<char, TableConfigError> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(TableConfigError::MultiCharKey {
            table,
            key: key.to_string(),
        }),
    }
}

/// Convert a `single char -> non-empty string` section into a lookup map.
fn char_map(
    table: &'static str,
    raw: BTreeMap<String, String>,
    allow_empty: bool,
) -> Result<HashMap<char, String>, TableConfigError> {
    if raw.is_empty() && !allow_empty {
        return Err(TableConfigError::Empty(table));
    }
    let mut map = HashMap::with_capacity(raw.len());
    for (key, value) in raw {
        let c = single_char(table, &key)?;
        if value.is_empty() {
            return Err(TableConfigError::EmptyValue { table, key });
        }
        map.insert(c, value);
    }
    Ok(map)
}

/// Parse and validate TOML text into mapping tables.
pub fn parse_tables_toml(toml_str: &str) -> Result<Tables, TableConfigError> {
    let config: TablesConfig =
        toml::from_str(toml_str).map_err(|e| TableConfigError::Parse(e.to_string()))?;

    let consonants = char_map("arabic.consonants", config.arabic.consonants, false)?;

    if config.arabic.vowels.is_empty() {
        return Err(TableConfigError::Empty("arabic.vowels"));
    }
    let mut vowels = HashMap::with_capacity(config.arabic.vowels.len());
    for (key, index) in config.arabic.vowels {
        if index > 2 {
            return Err(TableConfigError::VowelIndex { key, index });
        }
        let mark = single_char("arabic.vowels", &key)?;
        if !is_arabic_vowel_mark(mark) {
            return Err(TableConfigError::NotVowelMark(key));
        }
        vowels.insert(mark, index as usize);
    }

    if config.arabic.families.is_empty() {
        return Err(TableConfigError::Empty("arabic.families"));
    }
    let mut families = HashMap::with_capacity(config.arabic.families.len());
    for (base, variants) in config.arabic.families {
        let variants: [String; 3] = match variants.try_into() {
            Ok(v) => v,
            Err(_) => return Err(TableConfigError::FamilyArity(base)),
        };
        if variants.iter().any(String::is_empty) {
            return Err(TableConfigError::EmptyValue {
                table: "arabic.families",
                key: base,
            });
        }
        families.insert(base, variants);
    }

    let letters = char_map("latin.letters", config.latin.letters, false)?;
    if let Some(missing) = ('a'..='z').find(|c| !letters.contains_key(c)) {
        return Err(TableConfigError::MissingLetter(missing));
    }

    let accents = char_map("latin.accents", config.latin.accents, true)?;

    Ok(Tables {
        consonants,
        vowels,
        families,
        letters,
        accents,
    })
}
