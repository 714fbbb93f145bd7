//! User settings for bucket-cli
//!
//! A small JSON settings file next to the data directory. Currently holds
//! the currency symbol used when rendering prices and budget summaries.

use serde::{Deserialize, Serialize};

use super::paths::BucketPaths;
use crate::error::BucketError;
use crate::storage::file_io::{read_json, write_json_atomic};

/// User settings for bucket-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol prefixed to rendered amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "Rp.".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from disk, creating the file with defaults if missing
    pub fn load_or_create(paths: &BucketPaths) -> Result<Self, BucketError> {
        let path = paths.settings_file();
        if path.exists() {
            read_json(&path)
        } else {
            let settings = Self::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BucketPaths) -> Result<(), BucketError> {
        write_json_atomic(paths.settings_file(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.currency_symbol, "Rp.");
    }

    #[test]
    fn test_load_or_create_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BucketPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();

        let settings = Settings::load_or_create(&paths).unwrap();
        assert!(paths.settings_file().exists());
        assert_eq!(settings.currency_symbol, "Rp.");

        // Second load reads the same file back
        let again = Settings::load_or_create(&paths).unwrap();
        assert_eq!(again.schema_version, settings.schema_version);
    }

    #[test]
    fn test_save_and_reload_custom_symbol() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BucketPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();

        let mut settings = Settings::default();
        settings.currency_symbol = "$".to_string();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "$");
    }
}
