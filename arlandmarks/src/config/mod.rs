//! Application configuration.
//!
//! Combines the typed per-component configs into one `AppConfig`, loaded
//! from an INI file under the user's configuration directory:
//!
//! ```ini
//! [datasource]
//! url = https://backend.example.com
//! api_key = anon-key
//!
//! [weather]
//! api_key = owm-key
//!
//! [session]
//! radius_meters = 2000
//! min_movement_meters = 5
//! ```
//!
//! Every key is optional; a missing file yields the defaults. The data
//! source and weather URLs/keys default to empty, which downstream
//! surfaces treat as "not configured" (fixture mode, weather omitted).

use std::fmt;
use std::path::{Path, PathBuf};

use ini::Ini;

use crate::session::SessionConfig;

/// Config file location relative to the user config directory.
const CONFIG_DIR: &str = "arlandmarks";
const CONFIG_FILE: &str = "config.ini";

/// Data-source backend settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataSourceSettings {
    /// Backend root URL. Empty = not configured.
    pub url: String,
    /// API key sent with every request.
    pub api_key: String,
}

impl DataSourceSettings {
    /// Whether enough is configured to build a REST source.
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.api_key.is_empty()
    }
}

/// Weather collaborator settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherSettings {
    /// API key for the weather endpoint. Empty = weather omitted.
    pub api_key: String,
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Data-source backend settings.
    pub datasource: DataSourceSettings,
    /// Weather collaborator settings.
    pub weather: WeatherSettings,
    /// AR session settings.
    pub session: SessionConfig,
}

impl AppConfig {
    /// The default config file path, when a user config directory exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load configuration from the default location.
    ///
    /// A missing file is not an error: defaults apply.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit path.
    ///
    /// A missing file yields defaults; an unreadable or malformed file is
    /// an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let mut config = Self::default();

        if let Some(section) = ini.section(Some("datasource")) {
            if let Some(url) = section.get("url") {
                config.datasource.url = url.to_string();
            }
            if let Some(api_key) = section.get("api_key") {
                config.datasource.api_key = api_key.to_string();
            }
        }

        if let Some(section) = ini.section(Some("weather")) {
            if let Some(api_key) = section.get("api_key") {
                config.weather.api_key = api_key.to_string();
            }
        }

        if let Some(section) = ini.section(Some("session")) {
            if let Some(radius) = section.get("radius_meters") {
                config.session.radius_meters =
                    parse_meters(path, "radius_meters", radius)?;
            }
            if let Some(movement) = section.get("min_movement_meters") {
                config.session.min_movement_meters =
                    parse_meters(path, "min_movement_meters", movement)?;
            }
        }

        Ok(config)
    }
}

fn parse_meters(path: &Path, key: &str, value: &str) -> Result<f64, ConfigError> {
    let parsed: f64 = value.parse().map_err(|_| ConfigError::InvalidValue {
        path: path.to_path_buf(),
        key: key.to_string(),
        value: value.to_string(),
    })?;

    if !parsed.is_finite() || parsed < 0.0 {
        return Err(ConfigError::InvalidValue {
            path: path.to_path_buf(),
            key: key.to_string(),
            value: value.to_string(),
        });
    }

    Ok(parsed)
}

/// Errors that can occur while loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// The file exists but could not be read or parsed as INI.
    Read { path: PathBuf, reason: String },

    /// A key holds a value of the wrong shape.
    InvalidValue {
        path: PathBuf,
        key: String,
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, reason } => {
                write!(f, "failed to read config {}: {}", path.display(), reason)
            }
            ConfigError::InvalidValue { path, key, value } => {
                write!(
                    f,
                    "invalid value for {} in {}: {:?}",
                    key,
                    path.display(),
                    value
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("absent.ini")).unwrap();

        assert!(!config.datasource.is_configured());
        assert_eq!(config.session.radius_meters, 2000.0);
    }

    #[test]
    fn test_full_file_round_trip() {
        let (_dir, path) = write_config(
            "[datasource]\n\
             url = https://backend.example.com\n\
             api_key = anon-key\n\
             \n\
             [weather]\n\
             api_key = owm-key\n\
             \n\
             [session]\n\
             radius_meters = 1500\n\
             min_movement_meters = 10\n",
        );

        let config = AppConfig::load_from(&path).unwrap();
        assert!(config.datasource.is_configured());
        assert_eq!(config.datasource.url, "https://backend.example.com");
        assert_eq!(config.weather.api_key, "owm-key");
        assert_eq!(config.session.radius_meters, 1500.0);
        assert_eq!(config.session.min_movement_meters, 10.0);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let (_dir, path) = write_config("[session]\nradius_meters = 800\n");

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.session.radius_meters, 800.0);
        assert_eq!(config.session.min_movement_meters, 5.0);
        assert!(!config.datasource.is_configured());
    }

    #[test]
    fn test_invalid_radius_is_an_error() {
        let (_dir, path) = write_config("[session]\nradius_meters = a lot\n");

        match AppConfig::load_from(&path) {
            Err(ConfigError::InvalidValue { key, .. }) => {
                assert_eq!(key, "radius_meters");
            }
            other => panic!("Expected invalid value error, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_movement_is_an_error() {
        let (_dir, path) = write_config("[session]\nmin_movement_meters = -3\n");
        assert!(AppConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::InvalidValue {
            path: PathBuf::from("/tmp/config.ini"),
            key: "radius_meters".to_string(),
            value: "nope".to_string(),
        };
        assert!(err.to_string().contains("radius_meters"));
        assert!(err.to_string().contains("nope"));
    }
}
