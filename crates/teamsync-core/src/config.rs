//! Dashboard configuration
//!
//! Loaded from TOML; every field has a default so an empty file is valid.
//!
//! ```toml
//! display_name = "John Doe"
//! activity_actor = "You"
//! activity_capacity = 10
//!
//! [live]
//! enabled = true
//! tick_secs = 10
//! fire_threshold = 0.7
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default Activity Log capacity
pub const DEFAULT_ACTIVITY_CAPACITY: usize = 10;

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Author of comments and sent messages
    pub display_name: String,
    /// User recorded on task-move activities
    pub activity_actor: String,
    /// Maximum entries kept in the activity feed
    pub activity_capacity: usize,
    /// Simulated live feed settings
    pub live: LiveSettings,
}

impl DashboardConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With display name
    #[inline]
    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    /// With activity capacity
    #[inline]
    #[must_use]
    pub fn with_activity_capacity(mut self, capacity: usize) -> Self {
        self.activity_capacity = capacity;
        self
    }

    /// With live feed settings
    #[inline]
    #[must_use]
    pub fn with_live(mut self, live: LiveSettings) -> Self {
        self.live = live;
        self
    }

    /// Parse and validate TOML text
    ///
    /// # Errors
    /// - `ConfigError::Parse` on malformed TOML
    /// - `ConfigError::InvalidValue` if a value is out of range
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    ///
    /// # Errors
    /// - `ConfigError::Io` if the file cannot be read
    /// - see [`DashboardConfig::from_toml_str`]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text =
            std::fs::read_to_string(path).map_err(|e| ConfigError::io_error(path, e))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    /// `ConfigError::InvalidValue` naming the first offending field
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.activity_capacity == 0 {
            return Err(ConfigError::invalid("activity_capacity", "must be at least 1"));
        }
        self.live.validate()
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            display_name: "John Doe".to_string(),
            activity_actor: "You".to_string(),
            activity_capacity: DEFAULT_ACTIVITY_CAPACITY,
            live: LiveSettings::default(),
        }
    }
}

/// Simulated live feed settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveSettings {
    /// Whether the feed runs at all
    pub enabled: bool,
    /// Seconds between timer firings
    pub tick_secs: u64,
    /// A firing produces an event only when its draw is strictly above this
    pub fire_threshold: f64,
}

impl LiveSettings {
    /// Timer period
    #[inline]
    #[must_use]
    pub fn period(&self) -> Duration {
        Duration::from_secs(self.tick_secs)
    }

    /// With tick period in seconds
    #[inline]
    #[must_use]
    pub fn with_tick_secs(mut self, secs: u64) -> Self {
        self.tick_secs = secs;
        self
    }

    /// With firing threshold
    #[inline]
    #[must_use]
    pub fn with_fire_threshold(mut self, threshold: f64) -> Self {
        self.fire_threshold = threshold;
        self
    }

    /// Check the period is non-zero and the threshold lies in `[0, 1]`
    ///
    /// # Errors
    /// `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_secs == 0 {
            return Err(ConfigError::invalid("live.tick_secs", "must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.fire_threshold) {
            return Err(ConfigError::invalid(
                "live.fire_threshold",
                format!("{} is outside [0, 1]", self.fire_threshold),
            ));
        }
        Ok(())
    }
}

impl Default for LiveSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            tick_secs: 10,
            fire_threshold: 0.7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.activity_capacity, 10);
        assert_eq!(config.activity_actor, "You");
        assert_eq!(config.live.period(), Duration::from_secs(10));
        assert!((config.live.fire_threshold - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_toml_is_default() {
        let config = DashboardConfig::from_toml_str("").unwrap();
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn partial_toml_overrides() {
        let config = DashboardConfig::from_toml_str(
            r#"
            display_name = "Ada"
            [live]
            tick_secs = 2
            "#,
        )
        .unwrap();
        assert_eq!(config.display_name, "Ada");
        assert_eq!(config.live.tick_secs, 2);
        assert!(config.live.enabled);
    }

    #[test]
    fn rejects_zero_capacity() {
        let err = DashboardConfig::from_toml_str("activity_capacity = 0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "activity_capacity", .. }));
    }

    #[test]
    fn rejects_threshold_out_of_range() {
        let err = DashboardConfig::from_toml_str("[live]\nfire_threshold = 1.5").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "live.fire_threshold", .. }));
    }

    #[test]
    fn builder_settings_are_validated() {
        assert!(LiveSettings::default().validate().is_ok());

        let err = LiveSettings::default().with_tick_secs(0).validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "live.tick_secs", .. }));

        for threshold in [f64::NAN, f64::INFINITY, -0.1] {
            let err = LiveSettings::default()
                .with_fire_threshold(threshold)
                .validate()
                .unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue { field: "live.fire_threshold", .. }));
        }
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(matches!(
            DashboardConfig::from_toml_str("activity_capacity = \"ten\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "activity_actor = \"Me\"").unwrap();

        let config = DashboardConfig::load(file.path()).unwrap();
        assert_eq!(config.activity_actor, "Me");
    }

    #[test]
    fn load_missing_file() {
        let err = DashboardConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
