//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. The intent is to avoid reading process-wide environment variables
//! during normal operation, which can lead to inconsistent behaviour in test harnesses.

use crate::constants::{DEFAULT_DATA_DIR, DEFAULT_EDITOR_PASSPHRASE};
use crate::error::{StoryError, StoryResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    data_dir: PathBuf,
    editor_passphrase: String,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`StoryError::InvalidInput`] if `editor_passphrase` is empty or
    /// whitespace-only.
    pub fn new(data_dir: PathBuf, editor_passphrase: String) -> StoryResult<Self> {
        if editor_passphrase.trim().is_empty() {
            return Err(StoryError::InvalidInput(
                "editor_passphrase cannot be empty".into(),
            ));
        }

        Ok(Self {
            data_dir,
            editor_passphrase,
        })
    }

    /// Directory under which the file-backed storage slot lives.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Passphrase the editor gate unlocks on.
    pub fn editor_passphrase(&self) -> &str {
        &self.editor_passphrase
    }
}

impl Default for CoreConfig {
    /// Default data directory and the stock editor passphrase.
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            editor_passphrase: DEFAULT_EDITOR_PASSPHRASE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_valid_passphrase() {
        let config = CoreConfig::new(PathBuf::from("/tmp/data"), "secret".to_string()).unwrap();
        assert_eq!(config.data_dir(), Path::new("/tmp/data"));
        assert_eq!(config.editor_passphrase(), "secret");
    }

    #[test]
    fn test_new_rejects_empty_passphrase() {
        let result = CoreConfig::new(PathBuf::from("/tmp/data"), "   ".to_string());
        assert!(matches!(result, Err(StoryError::InvalidInput(_))));
    }

    #[test]
    fn test_default_uses_stock_values() {
        let config = CoreConfig::default();
        assert_eq!(config.data_dir(), Path::new(DEFAULT_DATA_DIR));
        assert_eq!(config.editor_passphrase(), DEFAULT_EDITOR_PASSPHRASE);
    }
}
