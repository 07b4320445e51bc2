//! Configuration file handling.
//!
//! The config is a small TOML document read once at construction and passed
//! to [`crate::cache::CompanyInfoCache`] as an explicit struct — there is no
//! ambient global lookup.
//!
//! ```toml
//! data_export_dir = "data/exports"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the company info store inside the export directory.
pub const STORE_FILE_NAME: &str = "company_info.csv";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Runtime configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Directory the company info store lives in. Created on first use.
    pub data_export_dir: PathBuf,
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// A missing file, unparseable content, or an absent `data_export_dir`
    /// key all fail construction.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Full path of the store file: `{data_export_dir}/company_info.csv`.
    pub fn store_path(&self) -> PathBuf {
        self.data_export_dir.join(STORE_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_config() {
        let config = Config::from_toml("data_export_dir = \"exports\"").unwrap();
        assert_eq!(config.data_export_dir, PathBuf::from("exports"));
    }

    #[test]
    fn missing_export_dir_key_fails() {
        assert!(Config::from_toml("other_key = 1").is_err());
    }

    #[test]
    fn store_path_joins_file_name() {
        let config = Config {
            data_export_dir: PathBuf::from("exports"),
        };
        assert_eq!(
            config.store_path(),
            PathBuf::from("exports").join("company_info.csv")
        );
    }

    #[test]
    fn missing_file_fails_construction() {
        let result = Config::from_file(Path::new("/nonexistent/config.toml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
