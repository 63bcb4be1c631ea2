use std::collections::HashMap;
use std::path::Path;

use nav_core::instruction_filter::ScriptFilter;
use nav_core::model::Locale;
use nav_core::style::{
    Color, Expression, route_line_gradient_expression, route_line_width_expression,
};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::strings::LocalizedStrings;

/// One color stop along the route line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub progress: f64,
    pub color: Color,
}

/// Presentation settings for the navigation UI, loaded from TOML.
///
/// Every field has a default, so an empty file (or no file) is valid.
///
/// ```toml
/// locale = "zh-Hans-CN"
/// route_line_width_multiplier = 1.2
///
/// [sanitizer]
/// delimiter = "/"
///
/// [strings]
/// WAYPOINT_SOURCE_DESTINATION_FORMAT = "%@ to %@"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavUiConfig {
    /// Language used to pick the current road name.
    pub locale: Locale,
    pub route_line_width_multiplier: f64,
    pub route_line_gradient: Vec<GradientStop>,
    pub sanitizer: ScriptFilter,
    /// Overrides for the built-in string table.
    pub strings: HashMap<String, String>,
}

impl Default for NavUiConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            route_line_width_multiplier: 1.0,
            route_line_gradient: vec![
                GradientStop {
                    progress: 0.0,
                    color: Color::rgb(0x2f, 0x7a, 0xf8),
                },
                GradientStop {
                    progress: 1.0,
                    color: Color::rgb(0x56, 0xa8, 0xfb),
                },
            ],
            sanitizer: ScriptFilter::default(),
            strings: HashMap::new(),
        }
    }
}

impl NavUiConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::Toml` when the document does not match the schema.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Loads `path`, or the defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` when the file exists but cannot be read and
    /// `ConfigError::Toml` when it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::info!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let config = Self::from_toml_str(&raw)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    #[must_use]
    pub fn localized_strings(&self) -> LocalizedStrings {
        LocalizedStrings::with_overrides(&self.strings)
    }

    #[must_use]
    pub fn route_line_width(&self) -> Expression {
        route_line_width_expression(self.route_line_width_multiplier)
    }

    #[must_use]
    pub fn route_line_gradient(&self) -> Expression {
        let stops: Vec<(f64, Color)> = self
            .route_line_gradient
            .iter()
            .map(|stop| (stop.progress, stop.color))
            .collect();
        route_line_gradient_expression(&stops)
    }
}
