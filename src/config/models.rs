use crate::core::types::{Bool, MIN_SETUP_MINUTES, MINUTES_PER_DAY, TransportMode, TravelServiceKind};
use crate::errors::Error;
use serde::{Deserialize, Serialize};

pub trait ConfigItem<T> {
    fn get_value(&self) -> &T;
    fn set_value(&mut self, new_value: &str) -> Result<(), Error>;
    fn description(&self) -> &str;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelModeConfigItem {
    pub value: TransportMode,
    pub description: String,
}

impl Default for TravelModeConfigItem {
    fn default() -> Self {
        Self {
            value: TransportMode::Driving,
            description: "Transport mode used between consecutive shots.".into(),
        }
    }
}

impl ConfigItem<TransportMode> for TravelModeConfigItem {
    fn get_value(&self) -> &TransportMode {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        self.value = TransportMode::try_from(new_value)?;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelServiceConfigItem {
    pub value: TravelServiceKind,
    pub description: String,
}

impl Default for TravelServiceConfigItem {
    fn default() -> Self {
        Self {
            value: TravelServiceKind::Estimate,
            description: "Where travel distances come from (estimate, offline).".into(),
        }
    }
}

impl ConfigItem<TravelServiceKind> for TravelServiceConfigItem {
    fn get_value(&self) -> &TravelServiceKind {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        self.value = TravelServiceKind::try_from(new_value)?;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

/// Minutes reserved for teardown and setup between shots at one location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetupAllowanceConfigItem {
    pub value: u32,
    pub description: String,
}

impl Default for SetupAllowanceConfigItem {
    fn default() -> Self {
        Self {
            value: MIN_SETUP_MINUTES as u32,
            description: "Minimum minutes between shots at the same location.".into(),
        }
    }
}

impl SetupAllowanceConfigItem {
    /// Allowances run from [`MIN_SETUP_MINUTES`] up to a full day.
    pub fn check(minutes: u32) -> Result<u32, Error> {
        if minutes < MIN_SETUP_MINUTES as u32 || minutes > MINUTES_PER_DAY as u32 {
            return Err(Error::parse(format!(
                "Setup allowance must be between {MIN_SETUP_MINUTES} and {MINUTES_PER_DAY} minutes, got {minutes}."
            )));
        }
        Ok(minutes)
    }
}

impl ConfigItem<u32> for SetupAllowanceConfigItem {
    fn get_value(&self) -> &u32 {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        let minutes: u32 = new_value.trim().parse().map_err(|_| {
            Error::parse(format!(
                "Invalid setup allowance: '{}'. Expected whole minutes.",
                new_value.trim()
            ))
        })?;
        self.value = Self::check(minutes)?;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLoggingConfigItem {
    pub value: Bool,
    pub description: String,
}

impl Default for FileLoggingConfigItem {
    fn default() -> Self {
        Self {
            value: Bool(true),
            description: "Enable writing log messages to file.".into(),
        }
    }
}

impl ConfigItem<Bool> for FileLoggingConfigItem {
    fn get_value(&self) -> &Bool {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        self.value = Bool::try_from_str(new_value)?;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}
