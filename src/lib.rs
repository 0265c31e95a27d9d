//! Approximate transliteration of Latin- and Arabic-script transcriptions
//! into Ge'ez (Amharic fidel).

pub mod accent;
pub mod arabic;
pub mod latin;
pub mod settings;
pub mod tables;
pub mod trace_init;
mod transliterator;
pub mod unicode;

pub use latin::{InputToolsClient, OfflineService, PhoneticService, ServiceError};
pub use transliterator::{transliterate, Script, TransliterateError, Transliterator};
