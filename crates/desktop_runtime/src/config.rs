//! Desktop tuning knobs: window cascade placement and click debounce.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Point;

/// Default placement cursor before the first window opens.
pub const DEFAULT_WINDOW_ORIGIN: Point = Point::new(100, 100);
/// Default offset between consecutively opened windows.
pub const DEFAULT_CASCADE_STEP: Point = Point::new(20, 20);
/// Clicks closer together than this are treated as part of a double-click.
pub const DEFAULT_CLICK_DEBOUNCE_MS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Runtime configuration for a desktop session.
pub struct DesktopConfig {
    /// Placement cursor before the first window; the first window lands at
    /// `window_origin + cascade_step`.
    pub window_origin: Point,
    /// Offset applied to the placement cursor for each new window.
    pub cascade_step: Point,
    /// Debounce window for shortcut clicks, in milliseconds.
    pub click_debounce_ms: u64,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            window_origin: DEFAULT_WINDOW_ORIGIN,
            cascade_step: DEFAULT_CASCADE_STEP,
            click_debounce_ms: DEFAULT_CLICK_DEBOUNCE_MS,
        }
    }
}

#[derive(Debug, Error)]
/// Errors raised while loading a [`DesktopConfig`].
pub enum ConfigError {
    #[error("failed to parse desktop config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid desktop config: {0}")]
    Invalid(String),
}

impl DesktopConfig {
    /// Parses a TOML document. Missing keys fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and [`ConfigError::Invalid`] when the
    /// debounce window is zero.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.click_debounce_ms == 0 {
            return Err(ConfigError::Invalid(
                "click_debounce_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
