//! Global dayplan configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PORT;
use crate::error::{DayplanError, DayplanResult};
use crate::holiday::HolidayTable;
use crate::repository::InMemoryEventRepository;

fn default_server_url() -> String {
    format!("http://127.0.0.1:{}", DEFAULT_PORT)
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

/// Configuration at ~/.config/dayplan/config.toml
///
/// Every key can be overridden with a `DAYPLAN_` environment variable,
/// e.g. `DAYPLAN_PORT=8080`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DayplanConfig {
    /// Where the CLI reaches dayplan-server
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Port dayplan-server listens on
    #[serde(default = "default_port")]
    pub port: u16,

    /// JSON file of events loaded when the server starts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_file: Option<PathBuf>,

    /// TOML holiday table; the built-in 2024 table is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holidays_file: Option<PathBuf>,
}

impl Default for DayplanConfig {
    fn default() -> Self {
        DayplanConfig {
            server_url: default_server_url(),
            port: default_port(),
            seed_file: None,
            holidays_file: None,
        }
    }
}

impl DayplanConfig {
    pub fn config_path() -> DayplanResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DayplanError::Config("Could not determine config directory".into()))?
            .join("dayplan");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, writing a commented template first
    /// if no config file exists yet.
    pub fn load() -> DayplanResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from an explicit path. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> DayplanResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("DAYPLAN"))
            .build()
            .map_err(|e| DayplanError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DayplanError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> DayplanResult<()> {
        let contents = format!(
            "\
# dayplan configuration

# Where the CLI reaches dayplan-server:
# server_url = \"{}\"

# Port dayplan-server listens on:
# port = {}

# Events loaded when the server starts ({{ \"events\": [...] }}):
# seed_file = \"~/dayplan/events.json\"

# Holiday table ([holidays] \"YYYY-MM-DD\" = \"name\"):
# holidays_file = \"~/dayplan/holidays.toml\"
",
            default_server_url(),
            DEFAULT_PORT
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DayplanError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| DayplanError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// The configured holiday table, or the built-in one.
    pub fn holidays(&self) -> DayplanResult<HolidayTable> {
        match &self.holidays_file {
            Some(path) => HolidayTable::load(&expand(path)),
            None => Ok(HolidayTable::korean_2024()),
        }
    }

    /// The repository the server starts with: seeded if a seed file is set.
    pub fn repository(&self) -> DayplanResult<InMemoryEventRepository> {
        match &self.seed_file {
            Some(path) => InMemoryEventRepository::load(&expand(path)),
            None => Ok(InMemoryEventRepository::new()),
        }
    }
}

fn expand(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holiday::HolidayLookup;
    use chrono::NaiveDate;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = DayplanConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.port, 4096);
        assert_eq!(config.server_url, "http://127.0.0.1:4096");
        assert!(config.seed_file.is_none());
    }

    #[test]
    fn test_default_template_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        DayplanConfig::create_default_config(&path).unwrap();

        let config = DayplanConfig::load_from(&path).unwrap();
        assert_eq!(config.server_url, DayplanConfig::default().server_url);
        assert_eq!(config.port, DayplanConfig::default().port);
    }

    #[test]
    fn test_values_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let holidays = dir.path().join("holidays.toml");
        std::fs::write(&holidays, "[holidays]\n\"2025-05-05\" = \"어린이날\"\n").unwrap();

        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            format!(
                "server_url = \"http://localhost:9000\"\nholidays_file = \"{}\"\n",
                holidays.display()
            ),
        )
        .unwrap();

        let config = DayplanConfig::load_from(&path).unwrap();
        assert_eq!(config.server_url, "http://localhost:9000");

        let table = config.holidays().unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 5, 5).unwrap();
        assert_eq!(table.holiday_name(date), Some("어린이날"));
    }

    #[test]
    fn test_builtin_holidays_and_empty_repository_by_default() {
        let config = DayplanConfig::default();
        assert_eq!(config.holidays().unwrap().len(), 14);
        assert!(config.repository().unwrap().is_empty());
    }
}
