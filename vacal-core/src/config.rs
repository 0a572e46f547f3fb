//! User configuration at ~/.config/vacal/config.toml.
//!
//! Only presentation defaults live here. The roster, events and holidays are
//! never read from disk.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{VacalError, VacalResult};
use crate::event::Location;
use crate::holiday::DEFAULT_HOLIDAY_NAME;
use crate::view::ViewSettings;

static DEFAULT_LOG_LEVEL: &str = "warn";

fn default_holiday_name() -> String {
    DEFAULT_HOLIDAY_NAME.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacalConfig {
    /// Preselected location in the event form.
    #[serde(default)]
    pub default_location: Location,

    /// Name given to newly marked holidays.
    #[serde(default = "default_holiday_name")]
    pub holiday_name: String,

    #[serde(default = "default_true")]
    pub sidebar_open: bool,

    /// Tracing filter used when RUST_LOG is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for VacalConfig {
    fn default() -> Self {
        VacalConfig {
            default_location: Location::default(),
            holiday_name: default_holiday_name(),
            sidebar_open: true,
            log_level: default_log_level(),
        }
    }
}

impl VacalConfig {
    pub fn config_path() -> VacalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| VacalError::Config("Could not determine config directory".into()))?
            .join("vacal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the user's config, writing a commented default file on first run.
    pub fn load() -> VacalResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from `path` (optional) with `VACAL_*` environment overrides.
    pub fn load_from(path: &Path) -> VacalResult<Self> {
        Self::load_with_env(path, Environment::with_prefix("VACAL"))
    }

    fn load_with_env(path: &Path, env: Environment) -> VacalResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(env.try_parsing(true))
            .build()
            .map_err(|e| VacalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| VacalError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> VacalResult<()> {
        let contents = format!(
            "\
# vacal configuration

# Location preselected when creating an event
# (south-miami, calle-ocho, bird-road, doral, remote):
# default_location = \"{}\"

# Name given to new holidays:
# holiday_name = \"{}\"

# Start with the sidebar open:
# sidebar_open = true

# Log filter when RUST_LOG is not set:
# log_level = \"{}\"
",
            Location::default().key(),
            DEFAULT_HOLIDAY_NAME,
            DEFAULT_LOG_LEVEL
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;

        Ok(())
    }

    pub fn view_settings(&self) -> ViewSettings {
        ViewSettings {
            default_location: self.default_location,
            holiday_name: self.holiday_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_file_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vacal").join("config.toml");

        VacalConfig::create_default_config(&path).unwrap();
        let config = VacalConfig::load_from(&path).unwrap();

        assert_eq!(config, VacalConfig::default());
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "default_location = \"doral\"\nholiday_name = \"Office closed\"\nsidebar_open = false\n",
        )
        .unwrap();

        let config = VacalConfig::load_from(&path).unwrap();

        assert_eq!(config.default_location, Location::Doral);
        assert_eq!(config.holiday_name, "Office closed");
        assert!(!config.sidebar_open);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.view_settings().default_location, Location::Doral);
    }

    #[test]
    fn environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "default_location = \"remote\"\n").unwrap();

        let vars: ::config::Map<String, String> = [
            ("VACAL_DEFAULT_LOCATION", "doral"),
            ("VACAL_SIDEBAR_OPEN", "false"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        let env = Environment::with_prefix("VACAL").source(Some(vars));

        let config = VacalConfig::load_with_env(&path, env).unwrap();

        assert_eq!(config.default_location, Location::Doral);
        assert!(!config.sidebar_open);
        assert_eq!(config.holiday_name, "HOLIDAY");
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = VacalConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.holiday_name, "HOLIDAY");
    }

    #[test]
    fn unknown_location_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "default_location = \"downtown\"\n").unwrap();

        assert!(matches!(
            VacalConfig::load_from(&path),
            Err(VacalError::Config(_))
        ));
    }

    #[test]
    fn unwritable_config_path_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("vacal");
        std::fs::write(&blocker, "not a directory").unwrap();

        assert!(matches!(
            VacalConfig::create_default_config(&blocker.join("config.toml")),
            Err(VacalError::Io(_))
        ));
    }
}
