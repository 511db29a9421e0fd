//! Configuration file support for the BMI calculator.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/bmi-calc/config.toml`.
//! Every key is optional; missing keys take their defaults.

use crate::{Error, Result, UnitSystem};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the history file inside the data directory
pub const HISTORY_FILE_NAME: &str = "bmi_history.json";

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub units: UnitsConfig,

    #[serde(default)]
    pub history: HistoryConfig,
}

/// Data storage configuration
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Unit system preferences
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct UnitsConfig {
    #[serde(default)]
    pub default: UnitSystem,
}

/// History retention and display configuration
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HistoryConfig {
    /// Maximum number of retained entries; 0 keeps everything
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,

    /// Persist after every append/clear
    #[serde(default = "default_auto_save")]
    pub auto_save: bool,

    #[serde(default = "default_show_recent_count")]
    pub show_recent_count: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
            auto_save: default_auto_save(),
            show_recent_count: default_show_recent_count(),
        }
    }
}

// Default value functions
fn default_data_dir() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| {
        std::env::var_os("HOME")
            .map(|home| PathBuf::from(home).join(".local/share"))
            .unwrap_or_else(|| PathBuf::from("."))
    });
    base.join("bmi-calc")
}

fn default_max_entries() -> usize {
    100
}

fn default_auto_save() -> bool {
    true
}

fn default_show_recent_count() -> usize {
    5
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        Self::load_or_default(&Self::default_config_path())
    }

    /// Load configuration from `path`, falling back to defaults if it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            std::env::var_os("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .unwrap_or_else(|| PathBuf::from("."))
        });
        base.join("bmi-calc").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Path of the history file under the configured data directory
    pub fn history_path(&self) -> PathBuf {
        self.data.data_dir.join(HISTORY_FILE_NAME)
    }

    /// Look up a value by dotted key, e.g. `history.max_entries`
    pub fn get(&self, key: &str) -> Option<toml::Value> {
        let root = toml::Value::try_from(self).ok()?;
        key.split('.')
            .try_fold(&root, |value, part| value.get(part))
            .cloned()
    }

    /// Set a value by dotted key
    ///
    /// `raw` is parsed as a TOML literal (`50`, `false`, `"imperial"`); text
    /// that is not a valid literal is taken as a plain string. Only existing
    /// keys can be set, and the result must still deserialize into a
    /// `Config`, so `set("history.max_entries", "lots")` fails and leaves
    /// `self` untouched.
    pub fn set(&mut self, key: &str, raw: &str) -> Result<()> {
        let mut root = toml::Value::try_from(&*self)?;

        let mut parts = key.split('.').peekable();
        let mut table = root
            .as_table_mut()
            .ok_or_else(|| Error::Config("config root is not a table".into()))?;
        let mut leaf = None;

        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                leaf = Some(part);
                break;
            }
            table = table
                .get_mut(part)
                .and_then(|v| v.as_table_mut())
                .ok_or_else(|| Error::Config(format!("Unknown config section: {}", part)))?;
        }

        let leaf = leaf
            .filter(|l| !l.is_empty())
            .ok_or_else(|| Error::Config(format!("Invalid config key: {:?}", key)))?;
        let slot = table
            .get_mut(leaf)
            .ok_or_else(|| Error::Config(format!("Unknown config key: {}", key)))?;
        *slot = parse_literal(raw);

        let updated: Config = root
            .try_into()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", key, e)))?;
        *self = updated;
        tracing::debug!("Set config {} = {}", key, raw);
        Ok(())
    }

    /// Restore every setting to its default
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn parse_literal(raw: &str) -> toml::Value {
    format!("value = {}", raw)
        .parse::<toml::Table>()
        .ok()
        .and_then(|mut t| t.remove("value"))
        .unwrap_or_else(|| toml::Value::String(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.units.default, UnitSystem::Metric);
        assert_eq!(config.history.max_entries, 100);
        assert!(config.history.auto_save);
        assert_eq!(config.history.show_recent_count, 5);
        assert!(config.data.data_dir.ends_with("bmi-calc"));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[units]
default = "imperial"

[history]
max_entries = 10
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.units.default, UnitSystem::Imperial);
        assert_eq!(config.history.max_entries, 10);
        assert_eq!(config.history.show_recent_count, 5); // default
        assert!(config.history.auto_save); // default
    }

    #[test]
    fn test_get_dotted_key() {
        let config = Config::default();
        assert_eq!(
            config.get("history.max_entries"),
            Some(toml::Value::Integer(100))
        );
        assert_eq!(
            config.get("units.default"),
            Some(toml::Value::String("metric".into()))
        );
        assert_eq!(config.get("history.nope"), None);
        assert_eq!(config.get("theme.primary_color"), None);
    }

    #[test]
    fn test_set_dotted_key() {
        let mut config = Config::default();
        config.set("history.max_entries", "25").unwrap();
        config.set("history.auto_save", "false").unwrap();
        config.set("units.default", "imperial").unwrap();

        assert_eq!(config.history.max_entries, 25);
        assert!(!config.history.auto_save);
        assert_eq!(config.units.default, UnitSystem::Imperial);
    }

    #[test]
    fn test_set_rejects_bad_input() {
        let mut config = Config::default();
        assert!(config.set("history.max_entries", "lots").is_err());
        assert!(config.set("units.default", "stones").is_err());
        assert!(config.set("history.unknown", "1").is_err());
        assert!(config.set("theme.primary_color", "#fff").is_err());
        assert!(config.set("", "1").is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_reset() {
        let mut config = Config::default();
        config.history.max_entries = 3;
        config.reset();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.history.show_recent_count = 8;
        config.save_to(&path).unwrap();

        let loaded = Config::load_or_default(&path).unwrap();
        assert_eq!(loaded.history.show_recent_count, 8);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let loaded = Config::load_or_default(&temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[history\nmax_entries = ").unwrap();
        assert!(matches!(Config::load_or_default(&path), Err(Error::Toml(_))));
    }
}
