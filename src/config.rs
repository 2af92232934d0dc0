//! Compiler configuration parsed from environment variables.

use crate::graph::Position;
use crate::layout::LayoutConfig;
use crate::parse::{DEFAULT_INDENT_WIDTH, ParseOptions};

pub const ENV_INDENT_WIDTH: &str = "MINDMAP_INDENT_WIDTH";
pub const ENV_PRIMARY_RADIUS: &str = "MINDMAP_PRIMARY_RADIUS";
pub const ENV_CHILD_DISTANCE: &str = "MINDMAP_CHILD_DISTANCE";
pub const ENV_WEDGE_DEGREES: &str = "MINDMAP_WEDGE_DEGREES";
pub const ENV_DISTANCE_DECAY: &str = "MINDMAP_DISTANCE_DECAY";
pub const ENV_ORIGIN_X: &str = "MINDMAP_ORIGIN_X";
pub const ENV_ORIGIN_Y: &str = "MINDMAP_ORIGIN_Y";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The variable is set but does not parse as a number.
    #[error("{var} must be a number, got {value:?}")]
    NotANumber { var: &'static str, value: String },
    /// The variable parses but is outside its allowed range.
    #[error("{var} out of range: {reason}")]
    OutOfRange { var: &'static str, reason: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompilerConfig {
    pub indent_width: usize,
    pub layout: LayoutConfig,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self { indent_width: DEFAULT_INDENT_WIDTH, layout: LayoutConfig::default() }
    }
}

impl CompilerConfig {
    /// Build config from the process environment.
    ///
    /// Optional, defaults in parentheses:
    /// - `MINDMAP_INDENT_WIDTH`: columns per level (2)
    /// - `MINDMAP_PRIMARY_RADIUS`: root to primary branch distance (300)
    /// - `MINDMAP_CHILD_DISTANCE`: primary branch to child distance (200)
    /// - `MINDMAP_WEDGE_DEGREES`: sector shared by a node's children (60)
    /// - `MINDMAP_DISTANCE_DECAY`: per-depth distance factor (0.7)
    /// - `MINDMAP_ORIGIN_X` / `MINDMAP_ORIGIN_Y`: root position (0, 0)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for unparseable or out-of-range values.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for unparseable or out-of-range values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = LayoutConfig::default();

        let indent_width = match lookup(ENV_INDENT_WIDTH) {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::NotANumber { var: ENV_INDENT_WIDTH, value: raw.clone() })?,
            None => DEFAULT_INDENT_WIDTH,
        };
        if indent_width == 0 {
            return Err(ConfigError::OutOfRange { var: ENV_INDENT_WIDTH, reason: "must be at least 1" });
        }

        let primary_radius = env_f64(&lookup, ENV_PRIMARY_RADIUS, defaults.primary_radius)?;
        let child_distance = env_f64(&lookup, ENV_CHILD_DISTANCE, defaults.child_distance)?;
        let wedge_degrees = env_f64(&lookup, ENV_WEDGE_DEGREES, defaults.wedge_degrees)?;
        let distance_decay = env_f64(&lookup, ENV_DISTANCE_DECAY, defaults.distance_decay)?;
        let origin = Position {
            x: env_f64(&lookup, ENV_ORIGIN_X, defaults.origin.x)?,
            y: env_f64(&lookup, ENV_ORIGIN_Y, defaults.origin.y)?,
        };

        if primary_radius <= 0.0 {
            return Err(ConfigError::OutOfRange { var: ENV_PRIMARY_RADIUS, reason: "must be positive" });
        }
        if child_distance <= 0.0 {
            return Err(ConfigError::OutOfRange { var: ENV_CHILD_DISTANCE, reason: "must be positive" });
        }
        // At 0 siblings stack on one point; at 360 the first and last meet.
        if wedge_degrees <= 0.0 || wedge_degrees >= 360.0 {
            return Err(ConfigError::OutOfRange { var: ENV_WEDGE_DEGREES, reason: "must be between 0 and 360, exclusive" });
        }
        if distance_decay <= 0.0 || distance_decay > 1.0 {
            return Err(ConfigError::OutOfRange { var: ENV_DISTANCE_DECAY, reason: "must be in (0, 1]" });
        }

        Ok(Self {
            indent_width,
            layout: LayoutConfig { origin, primary_radius, child_distance, wedge_degrees, distance_decay },
        })
    }

    #[must_use]
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions { indent_width: self.indent_width }
    }
}

fn env_f64(lookup: &impl Fn(&str) -> Option<String>, var: &'static str, default: f64) -> Result<f64, ConfigError> {
    let Some(raw) = lookup(var) else {
        return Ok(default);
    };
    let parsed = raw.trim().parse::<f64>();
    match parsed {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ConfigError::NotANumber { var, value: raw }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
