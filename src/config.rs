// Application configuration: optional TOML file plus METRO_* environment variables

use std::path::PathBuf;

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Topology file, JSON or TOML
    #[serde(default = "default_network_path")]
    pub network_path: PathBuf,

    /// Default `env_logger` filter, overridden by RUST_LOG
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Number of entries shown on a leaderboard
    #[serde(default = "default_highscore_limit")]
    pub highscore_limit: usize,
}

fn default_network_path() -> PathBuf {
    PathBuf::from("data/paris_metro.json")
}

fn default_log_level() -> String {
    String::from("info")
}

fn default_highscore_limit() -> usize {
    10
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            network_path: default_network_path(),
            log_level: default_log_level(),
            highscore_limit: default_highscore_limit(),
        }
    }
}

impl AppConfig {
    /// Load configuration; values from the environment win over the file
    pub fn load(config_file: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = config_file {
            builder = builder.add_source(File::new(path, FileFormat::Toml));
        }
        let config = builder
            .add_source(Environment::with_prefix("METRO"))
            .build()?;
        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults_without_file() {
        let config = AppConfig::load(None).unwrap();
        assert_eq!(config.highscore_limit, 10);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let path = std::env::temp_dir().join(format!("metro_route_config_{}.toml", std::process::id()));
        fs::write(
            &path,
            "network_path = \"maps/lyon.toml\"\nhighscore_limit = 3\n",
        )
        .unwrap();

        let config = AppConfig::load(path.to_str()).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.network_path, PathBuf::from("maps/lyon.toml"));
        assert_eq!(config.highscore_limit, 3);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(AppConfig::load(Some("does/not/exist.toml")).is_err());
    }
}
