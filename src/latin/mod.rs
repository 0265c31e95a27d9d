//! Latin-script transliteration into Ge'ez.
//!
//! Accent-normalized text goes to a [`PhoneticService`] first; when it has no
//! candidate, each ASCII letter is substituted through the Latin table.

mod service;


use tracing::{debug, debug_span};

use crate::accent;
use crate::settings::settings;
use crate::tables::Tables;

pub use service::{InputToolsClient, OfflineService, PhoneticService, ServiceError};

/// Transliterate Latin-script `text`, asking `service` for an Amharic
/// rendering before falling back to the character table.
///
/// Service failures are returned unchanged; only an empty candidate list
/// triggers the fallback.
pub fn transliterate(text: &str, service: &dyn PhoneticService) -> Result<String, ServiceError> {
    transliterate_with(
        Tables::global(),
        text,
        service,
        &settings().service.language,
    )
}

pub(crate) fn transliterate_with(
    tables: &Tables,
    text: &str,
    service: &dyn PhoneticService,
    language: &str,
) -> Result<String, ServiceError> {
    let _span = debug_span!("latin_transliterate", len = text.len()).entered();
    let normalized = accent::normalize_with(tables, text);

    let candidates = service.candidates(&normalized, language)?;
    if let Some(first) = candidates.into_iter().next() {
        debug!("service candidate accepted");
        return Ok(first);
    }

    debug!("no service candidate, table fallback");
    Ok(fallback_with(tables, &normalized))
}

/// Character-by-character substitution: ASCII letters go through the Latin
/// table (case-insensitively), everything else is kept as-is.
pub fn fallback(text: &str) -> String {
    fallback_with(Tables::global(), text)
}

pub(crate) fn fallback_with(tables: &Tables, text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 3);
    for c in text.chars() {
        match tables.latin(c).filter(|_| c.is_ascii_alphabetic()) {
            Some(geez) => out.push_str(geez),
            None => out.push(c),
        }
    }
    out
}
