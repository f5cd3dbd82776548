//! Environment-based runtime configuration.

use std::path::PathBuf;

/// Configuration resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the persisted history and language files.
    pub data_dir: PathBuf,
    /// Reported language tag used for first-run locale detection.
    pub language_tag: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { data_dir: PathBuf::from(".centum"), language_tag: None }
    }
}

impl AppConfig {
    /// Create configuration from environment variables.
    ///
    /// `CENTUM_DATA_DIR` overrides the storage directory; `CENTUM_LANG`
    /// overrides the reported language tag, falling back to the standard
    /// `LANG` variable.
    pub fn from_environment() -> Self {
        let data_dir = std::env::var("CENTUM_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".centum"));
        let language_tag =
            std::env::var("CENTUM_LANG").or_else(|_| std::env::var("LANG")).ok();
        Self { data_dir, language_tag }
    }
}
