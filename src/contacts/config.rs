use crate::error::{ContactsError, Result};
use crate::storage::adapter::DEFAULT_STORAGE_KEY;
use crate::storage::validate_key;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LOG_LEVEL: &str = "info";
const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Keys accepted by [`ContactsConfig::get`] and [`ContactsConfig::set`].
pub const CONFIG_KEYS: &[&str] = &["storage-key", "persist", "log-level"];

/// Configuration for contacts, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactsConfig {
    /// Key of the slot holding the contact collection
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// When false the session runs from memory and nothing is written
    #[serde(default = "default_persist")]
    pub persist: bool,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_persist() -> bool {
    true
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for ContactsConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            persist: default_persist(),
            log_level: default_log_level(),
        }
    }
}

impl ContactsConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ContactsError::Io)?;
        let config: ContactsConfig =
            serde_json::from_str(&content).map_err(ContactsError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ContactsError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ContactsError::Serialization)?;
        fs::write(config_path, content).map_err(ContactsError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage-key" => Some(self.storage_key.clone()),
            "persist" => Some(self.persist.to_string()),
            "log-level" => Some(self.log_level.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "storage-key" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(ContactsError::Config(
                        "storage-key cannot be empty".to_string(),
                    ));
                }
                validate_key(value).map_err(|_| {
                    ContactsError::Config(format!(
                        "storage-key '{}' may only use letters, digits, '-', '_' and '.', and must not start with '.'",
                        value
                    ))
                })?;
                self.storage_key = value.to_string();
            }
            "persist" => {
                self.persist = match value.trim().to_ascii_lowercase().as_str() {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    other => {
                        return Err(ContactsError::Config(format!(
                            "persist expects true or false, got '{}'",
                            other
                        )))
                    }
                };
            }
            "log-level" => {
                let level = value.trim().to_ascii_lowercase();
                if !LOG_LEVELS.contains(&level.as_str()) {
                    return Err(ContactsError::Config(format!(
                        "log-level must be one of {}",
                        LOG_LEVELS.join(", ")
                    )));
                }
                self.log_level = level;
            }
            other => {
                return Err(ContactsError::Config(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ContactsConfig::default();
        assert_eq!(config.storage_key, "lorem_contacts");
        assert!(config.persist);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = ContactsConfig::load(temp_dir.path().join("absent")).unwrap();
        assert_eq!(config, ContactsConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();

        let mut config = ContactsConfig::default();
        config.set("persist", "off").unwrap();
        config.set("storage-key", "crm").unwrap();
        config.save(temp_dir.path()).unwrap();

        let loaded = ContactsConfig::load(temp_dir.path()).unwrap();
        assert!(!loaded.persist);
        assert_eq!(loaded.storage_key, "crm");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"persist": false}"#).unwrap();

        let loaded = ContactsConfig::load(temp_dir.path()).unwrap();
        assert!(!loaded.persist);
        assert_eq!(loaded.storage_key, "lorem_contacts");
        assert_eq!(loaded.log_level, "info");
    }

    #[test]
    fn test_get_known_and_unknown_keys() {
        let config = ContactsConfig::default();
        for key in CONFIG_KEYS {
            assert!(config.get(key).is_some(), "missing {}", key);
        }
        assert_eq!(config.get("nope"), None);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = ContactsConfig::default();
        assert!(config.set("persist", "maybe").is_err());
        assert!(config.set("log-level", "loud").is_err());
        assert!(config.set("storage-key", "  ").is_err());
        assert!(config.set("storage-key", "a/b").is_err());
        assert!(config.set("storage-key", ".hidden").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config, ContactsConfig::default());
    }

    #[test]
    fn test_set_log_level_normalizes_case() {
        let mut config = ContactsConfig::default();
        config.set("log-level", "DEBUG").unwrap();
        assert_eq!(config.log_level, "debug");
    }
}
