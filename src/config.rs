use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_BASE_URL;

/// Client configuration loaded from `~/.vaxadmin/config.yaml`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: String::from(DEFAULT_BASE_URL),
        }
    }
}

impl Config {
    /// Load the config from the user's home directory, falling back to
    /// defaults when the file is missing or unreadable.
    pub fn load() -> Self {
        let config_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".vaxadmin");
        Self::load_from(&config_dir.join("config.yaml")).unwrap_or_default()
    }

    fn load_from(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        serde_yaml::from_str(&content).ok()
    }

    /// Write the config, creating the parent directory if needed
    #[allow(dead_code)] // Used by a future `config init` flow
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Joins an endpoint path onto the configured base address
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.yaml"));
        assert!(config.is_none());
        assert_eq!(Config::default().base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let config = Config {
            base_url: "http://10.0.0.5:9090/".to_string(),
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.base_url, "http://10.0.0.5:9090/");
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let config = Config {
            base_url: "http://localhost:8080/".to_string(),
        };
        assert_eq!(config.endpoint("/vacinas"), "http://localhost:8080/vacinas");
    }
}
