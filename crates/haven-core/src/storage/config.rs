//! TOML-based application configuration.
//!
//! Stores:
//! - Backend API location
//! - SOS gesture and dispatch tunables
//! - An optional fixed position used when the host has no location service
//!
//! Configuration is stored at `~/.config/haven/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::data_dir;
use crate::api::DEFAULT_REQUEST_TIMEOUT;
use crate::dispatch::{
    DispatchSettings, GeoPoint, DEFAULT_EMERGENCY_NUMBER, DEFAULT_LOCATION_TIMEOUT,
};
use crate::error::ConfigError;
use crate::gesture::DEFAULT_HOLD_THRESHOLD_MS;

/// Backend API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request bound. A backend that stalls past it is a failed send.
    #[serde(default = "default_request_timeout_ms")]
    pub timeout_ms: u64,
}

/// SOS control configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SosConfig {
    #[serde(default = "default_hold_threshold_ms")]
    pub hold_threshold_ms: u64,
    #[serde(default = "default_location_timeout_ms")]
    pub location_timeout_ms: u64,
    #[serde(default = "default_emergency_number")]
    pub emergency_number: String,
}

/// Fixed position. Both coordinates must be set for it to be used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationConfig {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/haven/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub sos: SosConfig,
    #[serde(default)]
    pub location: LocationConfig,
}

fn default_base_url() -> String {
    "http://localhost:3000".into()
}
fn default_request_timeout_ms() -> u64 {
    DEFAULT_REQUEST_TIMEOUT.as_millis() as u64
}
fn default_hold_threshold_ms() -> u64 {
    DEFAULT_HOLD_THRESHOLD_MS
}
fn default_location_timeout_ms() -> u64 {
    DEFAULT_LOCATION_TIMEOUT.as_millis() as u64
}
fn default_emergency_number() -> String {
    DEFAULT_EMERGENCY_NUMBER.into()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl Default for SosConfig {
    fn default() -> Self {
        Self {
            hold_threshold_ms: default_hold_threshold_ms(),
            location_timeout_ms: default_location_timeout_ms(),
            emergency_number: default_emergency_number(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() || key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = if value == "null" {
                    serde_json::Value::Null
                } else {
                    match existing {
                        serde_json::Value::Bool(_) => serde_json::Value::Bool(
                            value.parse::<bool>().map_err(|e| invalid(e.to_string()))?,
                        ),
                        serde_json::Value::Number(_) | serde_json::Value::Null => {
                            parse_number(value).ok_or_else(|| {
                                invalid(format!("cannot parse '{value}' as number"))
                            })?
                        }
                        _ => serde_json::Value::String(value.into()),
                    }
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config/haven"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from the default location, writing defaults there if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, writing defaults there if absent.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content)?;
                cfg.validate()?;
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Persist to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))
    }

    /// Reject values the dispatch flows cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |key: &str, message: &str| ConfigError::InvalidValue {
            key: key.to_string(),
            message: message.to_string(),
        };
        if let Err(e) = url::Url::parse(&self.api.base_url) {
            return Err(invalid("api.base_url", &e.to_string()));
        }
        if self.api.timeout_ms == 0 {
            return Err(invalid("api.timeout_ms", "must be greater than 0"));
        }
        if self.sos.hold_threshold_ms == 0 {
            return Err(invalid("sos.hold_threshold_ms", "must be greater than 0"));
        }
        if self.sos.location_timeout_ms == 0 {
            return Err(invalid("sos.location_timeout_ms", "must be greater than 0"));
        }
        if self.sos.emergency_number.trim().is_empty() {
            return Err(invalid("sos.emergency_number", "must not be empty"));
        }
        if self
            .location
            .latitude
            .is_some_and(|lat| !(-90.0..=90.0).contains(&lat))
        {
            return Err(invalid("location.latitude", "must be within -90..=90"));
        }
        if self
            .location
            .longitude
            .is_some_and(|lng| !(-180.0..=180.0).contains(&lng))
        {
            return Err(invalid("location.longitude", "must be within -180..=180"));
        }
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key without saving.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value cannot be parsed
    /// or fails validation. On error `self` is unchanged.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self)
            .map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config =
            serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Set a config value by key and save to the default location.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        self.apply(key, value)?;
        self.save()
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.api.timeout_ms)
    }

    pub fn dispatch_settings(&self) -> DispatchSettings {
        DispatchSettings {
            location_timeout: Duration::from_millis(self.sos.location_timeout_ms),
            emergency_number: self.sos.emergency_number.clone(),
        }
    }

    pub fn fixed_location(&self) -> Option<GeoPoint> {
        match (self.location.latitude, self.location.longitude) {
            (Some(lat), Some(lng)) => Some(GeoPoint::new(lat, lng)),
            _ => None,
        }
    }
}

fn parse_number(value: &str) -> Option<serde_json::Value> {
    if let Ok(n) = value.parse::<u64>() {
        return Some(serde_json::Value::Number(n.into()));
    }
    value
        .parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map(serde_json::Value::Number)
}
