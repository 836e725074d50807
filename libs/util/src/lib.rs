use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::de::DeserializeOwned;
use tracing::warn;

pub const CONFIG_ENV: &str = "CAMPUS_PULSE_CONFIG";
const DEFAULT_CONFIG: &str = "Config.toml";

/// `$CAMPUS_PULSE_CONFIG`, or `Config.toml` in the working directory.
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG))
}

/// Reads a TOML file into `T`. A missing file yields `T::default()`, so
/// every setting needs a default.
pub fn load_config<T>(path: &Path) -> anyhow::Result<T>
where
    T: DeserializeOwned + Default,
{
    if !path.exists() {
        warn!(
            task = "load config",
            path = %path.display(),
            "config file not found, using defaults"
        );
        return Ok(T::default());
    }

    let config = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    toml::from_str::<T>(&config)
        .with_context(|| format!("failed to parse {}", path.display()))
}

#[cfg(test)]
mod test {
    use serde::Deserialize;

    use super::load_config;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    #[serde(default)]
    struct Server {
        port: u16,
        host: String,
    }

    #[derive(Debug, Default, PartialEq, Deserialize)]
    #[serde(default)]
    struct Config {
        server: Server,
    }

    #[test]
    fn test_load_config() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Config.toml");
        std::fs::write(&path, "[server]\nport = 4000\n").unwrap();

        // Act
        let config = load_config::<Config>(&path).unwrap();

        // Assert
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.host, "");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let config = load_config::<Config>(&dir.path().join("nope.toml"));

        assert_eq!(config.unwrap(), Config::default());
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Config.toml");
        std::fs::write(&path, "[server\nport = ").unwrap();

        assert!(load_config::<Config>(&path).is_err());
    }
}
