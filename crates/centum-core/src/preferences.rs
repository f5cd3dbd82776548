//! Process-wide display-locale state.
//!
//! No component reads storage for the language directly: resolution happens
//! once at startup through [`init_locale`], and every later read goes through
//! [`active_locale`]. Changing the language updates the live state and the
//! persisted key in one step.

use crate::error::CentumResult;
use crate::storage::{LANGUAGE_KEY, StorageProvider};
use centum_types::Locale;
use std::sync::RwLock;
use tracing::debug;

static ACTIVE_LOCALE: RwLock<Locale> = RwLock::new(Locale::En);

/// Resolve and install the startup locale.
///
/// Order: a persisted user choice wins; otherwise a reported language tag
/// (e.g. the `LANG` environment variable) containing Vietnamese selects
/// Vietnamese; otherwise English. A malformed persisted value is treated as
/// absent.
pub fn init_locale(storage: &dyn StorageProvider, env_tag: Option<&str>) -> Locale {
    let resolved = match read_stored(storage) {
        Some(locale) => locale,
        None => env_tag.map(Locale::from_tag).unwrap_or(Locale::En),
    };
    install(resolved);
    debug!(locale = resolved.as_str(), "Resolved display locale");
    resolved
}

/// Override the active locale and persist the choice.
pub fn set_locale(storage: &dyn StorageProvider, locale: Locale) -> CentumResult<()> {
    install(locale);
    storage.set(LANGUAGE_KEY, locale.as_str())
}

/// The locale every display and explanation currently renders in.
pub fn active_locale() -> Locale {
    ACTIVE_LOCALE.read().map(|guard| *guard).unwrap_or(Locale::En)
}

fn install(locale: Locale) {
    if let Ok(mut guard) = ACTIVE_LOCALE.write() {
        *guard = locale;
    }
}

fn read_stored(storage: &dyn StorageProvider) -> Option<Locale> {
    match storage.get(LANGUAGE_KEY).ok().flatten()?.as_str() {
        "vi" => Some(Locale::Vi),
        "en" => Some(Locale::En),
        _ => None,
    }
}
