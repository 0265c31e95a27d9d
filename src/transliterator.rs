//! Script dispatch: one entry point for Latin- and Arabic-script input.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug_span;

use crate::latin::{InputToolsClient, OfflineService, PhoneticService, ServiceError};
use crate::settings::settings;
use crate::unicode::is_arabic;
use crate::{arabic, latin};

/// Source script of a transcription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    #[default]
    Latin,
    Arabic,
}

impl Script {
    pub fn as_str(self) -> &'static str {
        match self {
            Script::Latin => "latin",
            Script::Arabic => "arabic",
        }
    }

    /// Guess the script: Arabic if any character is in the Arabic block.
    pub fn detect(text: &str) -> Self {
        if text.chars().any(is_arabic) {
            Script::Arabic
        } else {
            Script::Latin
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Script {
    type Err = TransliterateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "latin" => Ok(Script::Latin),
            "arabic" => Ok(Script::Arabic),
            _ => Err(TransliterateError::UnknownScript(s.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransliterateError {
    #[error("unknown script tag {0:?} (expected \"latin\" or \"arabic\")")]
    UnknownScript(String),
    #[error("phonetic service failed: {0}")]
    Service(#[from] ServiceError),
}

/// Transliterate `text` written in `script` into Ge'ez.
///
/// Latin input is accent-normalized and sent to `service`; Arabic input is
/// transliterated from the raw text by the table-driven scan.
pub fn transliterate(
    text: &str,
    script: Script,
    service: &dyn PhoneticService,
) -> Result<String, TransliterateError> {
    let _span = debug_span!("transliterate", script = script.as_str()).entered();
    match script {
        Script::Latin => Ok(latin::transliterate(text, service)?),
        Script::Arabic => Ok(arabic::transliterate(text)),
    }
}

/// Owns the phonetic service used for Latin-script input.
pub struct Transliterator {
    service: Box<dyn PhoneticService>,
}

impl Transliterator {
    pub fn new(service: impl PhoneticService + 'static) -> Self {
        Self {
            service: Box::new(service),
        }
    }

    /// Live Input Tools client configured from global settings.
    pub fn live() -> Self {
        Self::new(InputToolsClient::from_settings(&settings().service))
    }

    /// Rule-based only; Latin input always takes the table fallback.
    pub fn offline() -> Self {
        Self::new(OfflineService)
    }

    pub fn transliterate(&self, text: &str, script: Script) -> Result<String, TransliterateError> {
        transliterate(text, script, self.service.as_ref())
    }

    /// Like [`Transliterator::transliterate`], taking the script as a textual
    /// tag. Unknown tags are rejected.
    pub fn transliterate_tagged(&self, text: &str, tag: &str) -> Result<String, TransliterateError> {
        self.transliterate(text, tag.parse()?)
    }
}
