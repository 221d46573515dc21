use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "clients.json";

/// Keys accepted by [`ClientRegConfig::get`] and [`ClientRegConfig::set`].
pub const KEYS: [&str; 3] = ["data-file", "seed-demo", "simulate-latency"];

/// Configuration for clientreg, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientRegConfig {
    /// Records file, relative to the data dir unless absolute
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Start a registry that has no records file with the two demo clients
    #[serde(default = "default_true")]
    pub seed_demo: bool,

    /// Delay every records call as a slow remote backend would
    #[serde(default)]
    pub simulate_latency: bool,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ClientRegConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            seed_demo: true,
            simulate_latency: false,
        }
    }
}

impl ClientRegConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);
        if !config_path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&config_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Where the records file lives for a given data dir.
    pub fn data_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.data_file)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.clone()),
            "seed-demo" => Some(self.seed_demo.to_string()),
            "simulate-latency" => Some(self.simulate_latency.to_string()),
            _ => None,
        }
    }

    /// Sets a key from its command-line spelling. Errors are user-facing.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "data-file" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err("data-file cannot be empty".to_string());
                }
                self.data_file = value.to_string();
            }
            "seed-demo" => self.seed_demo = parse_bool(key, value)?,
            "simulate-latency" => self.simulate_latency = parse_bool(key, value)?,
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> std::result::Result<bool, String> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(format!("{} expects true or false, got {}", key, other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ClientRegConfig::default();
        assert_eq!(config.data_file, "clients.json");
        assert!(config.seed_demo);
        assert!(!config.simulate_latency);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = ClientRegConfig::load(dir.path().join("nowhere")).unwrap();
        assert_eq!(config, ClientRegConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let mut config = ClientRegConfig::default();
        config.set("seed-demo", "no").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = ClientRegConfig::load(dir.path()).unwrap();
        assert!(!loaded.seed_demo);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"simulate_latency": true}"#).unwrap();

        let loaded = ClientRegConfig::load(dir.path()).unwrap();
        assert!(loaded.simulate_latency);
        assert_eq!(loaded.data_file, "clients.json");
        assert!(loaded.seed_demo);
    }

    #[test]
    fn test_get_and_set_by_key() {
        let mut config = ClientRegConfig::default();
        for key in KEYS {
            assert!(config.get(key).is_some(), "{}", key);
        }
        assert_eq!(config.get("nope"), None);

        config.set("data-file", "frota.json").unwrap();
        config.set("simulate-latency", "TRUE").unwrap();
        assert_eq!(config.get("data-file").as_deref(), Some("frota.json"));
        assert_eq!(config.get("simulate-latency").as_deref(), Some("true"));

        assert!(config.set("seed-demo", "maybe").is_err());
        assert!(config.set("data-file", "  ").is_err());
        assert!(config.set("color", "red").is_err());
    }

    #[test]
    fn test_data_path_is_relative_to_data_dir() {
        let config = ClientRegConfig::default();
        assert_eq!(
            config.data_path(Path::new("/srv/reg")),
            PathBuf::from("/srv/reg/clients.json")
        );
    }
}
