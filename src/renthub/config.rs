use crate::error::{RentHubError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CURRENCY: &str = "$";
const DEFAULT_DATE_FORMAT: &str = "%B %-d, %Y";

/// Display configuration, stored as config.json in the data directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RentHubConfig {
    /// Currency symbol prefixed to rent and deposit amounts.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// chrono format string for calendar dates (lease terms, availability).
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Default for RentHubConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            date_format: default_date_format(),
        }
    }
}

impl RentHubConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RentHubError::Io)?;
        let config: RentHubConfig =
            serde_json::from_str(&content).map_err(RentHubError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RentHubError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RentHubError::Serialization)?;
        fs::write(config_path, content).map_err(RentHubError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "currency" => Some(self.currency.clone()),
            "date-format" => Some(self.date_format.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "currency" => {
                self.currency = value.to_string();
                Ok(())
            }
            "date-format" => {
                self.date_format = value.to_string();
                Ok(())
            }
            other => Err(format!("Unknown config key: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = RentHubConfig::default();
        assert_eq!(config.currency, "$");
        assert_eq!(config.date_format, "%B %-d, %Y");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempdir().unwrap();
        let config = RentHubConfig::load(dir.path().join("absent")).unwrap();
        assert_eq!(config, RentHubConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();

        let mut config = RentHubConfig::default();
        config.set("currency", "€").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = RentHubConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.currency, "€");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let mut config = RentHubConfig::default();
        assert!(config.set("font", "mono").is_err());
        assert!(config.get("font").is_none());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = RentHubConfig {
            currency: "£".to_string(),
            date_format: "%Y-%m-%d".to_string(),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: RentHubConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, parsed);
    }
}
