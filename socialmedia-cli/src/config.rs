//! CLI Configuration

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use socialmedia_core::{Catalog, FileStore, Locale};

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Data directory for block configuration.
    pub data_dir: PathBuf,
    /// Locale for platform names and form labels.
    pub locale: Locale,
    /// Block instance id.
    pub block_id: String,
}

impl CliConfig {
    /// Builds the config from raw flag values.
    pub fn new(data_dir: Option<PathBuf>, locale: &str, block_id: String) -> Result<Self> {
        let data_dir = data_dir.unwrap_or_else(default_data_dir);
        let locale =
            Locale::from_code(locale).ok_or_else(|| anyhow!("Unsupported locale: {}", locale))?;

        Ok(Self {
            data_dir,
            locale,
            block_id,
        })
    }

    /// Returns the directory holding block records.
    pub fn blocks_path(&self) -> PathBuf {
        self.data_dir.join("blocks")
    }

    /// Opens the configuration store.
    pub fn store(&self) -> FileStore {
        FileStore::new(self.blocks_path())
    }

    /// Returns the string catalog for the configured locale.
    pub fn catalog(&self) -> Catalog {
        Catalog::new(self.locale)
    }
}

/// `~/.socialmedia`, or `./.socialmedia` without a home directory.
fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".socialmedia")
}

// INLINE_TEST_REQUIRED: Binary crate without lib.rs - tests cannot be external
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_explicit_data_dir() {
        let temp_dir = tempdir().unwrap();
        let config = CliConfig::new(
            Some(temp_dir.path().to_path_buf()),
            "de",
            "footer".to_string(),
        )
        .expect("valid config");

        assert_eq!(config.locale, Locale::German);
        assert_eq!(config.blocks_path(), temp_dir.path().join("blocks"));
    }

    #[test]
    fn test_default_data_dir() {
        let config = CliConfig::new(None, "en", "default".to_string()).unwrap();
        assert!(config.data_dir.ends_with(".socialmedia"));
    }

    #[test]
    fn test_unknown_locale_rejected() {
        assert!(CliConfig::new(None, "tlh", "default".to_string()).is_err());
    }
}
