pub mod models;

use std::fs;
use std::ops::Index;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::config::models::{
    ConfigItem, FileLoggingConfigItem, SetupAllowanceConfigItem, TravelModeConfigItem,
    TravelServiceConfigItem,
};
use crate::core::types::{MINUTES_PER_DAY, TransportMode, TravelServiceKind};
use crate::errors::{Error, Result};
use crate::extensions::enums::parse_enum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIterDerive, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ConfigKey {
    TravelMode,
    TravelService,
    SetupAllowance,
    FileLoggingEnabled,
}

/// On-disk layout. Every item is optional and falls back to its default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub travel_mode: TravelModeConfigItem,
    #[serde(default)]
    pub travel_service: TravelServiceConfigItem,
    #[serde(default)]
    pub setup_allowance: SetupAllowanceConfigItem,
    #[serde(default)]
    pub file_logging_enabled: FileLoggingConfigItem,
}

/// A single applied change: key, old value, new value.
pub type ConfigChange = (String, String, String);

#[derive(Debug, Clone)]
pub struct Config {
    path: PathBuf,
    data: ConfigFile,
    last_change: Option<ConfigChange>,
}

/// Display rows: key, description, current value.
#[derive(Debug, Clone)]
pub struct ConfigRows(Vec<(String, String, String)>);

impl ConfigRows {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &(String, String, String)> {
        self.0.iter()
    }
}
impl Index<usize> for ConfigRows {
    type Output = (String, String, String);
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl Config {
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(Error::config(format!(
                "Configuration file '{}' not found.",
                path.display()
            )));
        }
        let text = fs::read_to_string(&path)
            .map_err(|e| Error::config(format!("Failed to read {}: {}", path.display(), e)))?;
        let data: ConfigFile = serde_json::from_str(&text)
            .map_err(|e| Error::config(format!("Invalid JSON in '{}': {}", path.display(), e)))?;
        SetupAllowanceConfigItem::check(data.setup_allowance.value)
            .map_err(|e| Error::config(format!("Invalid '{}': {e}", path.display())))?;
        Ok(Self {
            path,
            data,
            last_change: None,
        })
    }

    /// Writes a config file holding only defaults.
    pub fn write_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Self {
            path: path.as_ref().to_path_buf(),
            data: ConfigFile::default(),
            last_change: None,
        };
        config.save()?;
        Ok(config)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn travel_mode(&self) -> TransportMode {
        *self.data.travel_mode.get_value()
    }
    pub fn travel_service(&self) -> TravelServiceKind {
        *self.data.travel_service.get_value()
    }
    pub fn setup_allowance(&self) -> i32 {
        i32::try_from(*self.data.setup_allowance.get_value()).unwrap_or(MINUTES_PER_DAY)
    }
    pub fn file_logging_enabled(&self) -> bool {
        self.data.file_logging_enabled.get_value().0
    }

    fn describe(&self, key: ConfigKey) -> (String, String) {
        match key {
            ConfigKey::TravelMode => (
                self.data.travel_mode.description().to_string(),
                self.data.travel_mode.get_value().to_string(),
            ),
            ConfigKey::TravelService => (
                self.data.travel_service.description().to_string(),
                self.data.travel_service.get_value().to_string(),
            ),
            ConfigKey::SetupAllowance => (
                self.data.setup_allowance.description().to_string(),
                self.data.setup_allowance.get_value().to_string(),
            ),
            ConfigKey::FileLoggingEnabled => (
                self.data.file_logging_enabled.description().to_string(),
                self.data.file_logging_enabled.get_value().to_string(),
            ),
        }
    }

    pub fn rows(&self) -> ConfigRows {
        ConfigRows(
            ConfigKey::iter()
                .map(|key| {
                    let (description, value) = self.describe(key);
                    (key.to_string(), description, value)
                })
                .collect(),
        )
    }

    pub fn set_key(&mut self, key: ConfigKey, new_value: &str) -> Result<()> {
        let (_, old) = self.describe(key);
        self.edit(|cfg| match key {
            ConfigKey::TravelMode => cfg.travel_mode.set_value(new_value),
            ConfigKey::TravelService => cfg.travel_service.set_value(new_value),
            ConfigKey::SetupAllowance => cfg.setup_allowance.set_value(new_value),
            ConfigKey::FileLoggingEnabled => cfg.file_logging_enabled.set_value(new_value),
        })?;
        let (_, new_val) = self.describe(key);
        self.last_change = Some((key.to_string(), old, new_val));
        Ok(())
    }

    pub fn take_last_change(&mut self) -> Option<ConfigChange> {
        self.last_change.take()
    }

    pub fn set(&mut self, key_str: &str, new_value: &str) -> Result<()> {
        let key = parse_enum::<ConfigKey>(key_str, "configuration key")?;
        self.set_key(key, new_value)
    }

    /// Applies `f` and persists. On a validation error nothing is written
    /// and the in-memory values stay as they were.
    fn edit<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ConfigFile) -> Result<()>,
    {
        let mut draft = self.data.clone();
        f(&mut draft)?;
        let previous = std::mem::replace(&mut self.data, draft);
        if let Err(err) = self.save() {
            self.data = previous;
            return Err(err);
        }
        Ok(())
    }

    fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| Error::config(format!("Failed to encode config: {}", e)))?;
        fs::write(&self.path, json)
            .map_err(|e| Error::config(format!("Failed to write {}: {}", self.path.display(), e)))
    }
}
