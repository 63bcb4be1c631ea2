//! Declarative style expressions for the route line layer.
//!
//! The rendering engine evaluates these; nothing here draws.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Route line width in pixels at each zoom level, before scaling.
pub const ROUTE_LINE_WIDTH_BY_ZOOM_LEVEL: [(f64, f64); 5] = [
    (10.0, 8.0),
    (13.0, 9.0),
    (16.0, 11.0),
    (19.0, 22.0),
    (22.0, 28.0),
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
}

//
// ─── COLOR ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in `0.0..=1.0`.
    pub a: f32,
}

impl Color {
    #[must_use]
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    #[must_use]
    pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self {
            r,
            g,
            b,
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Parses `#rrggbb` or `#rrggbbaa`.
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidHex` for any other shape.
    pub fn from_hex(raw: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidHex(raw.to_owned());
        let hex = raw.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !matches!(hex.len(), 6 | 8) || !hex.is_ascii() {
            return Err(invalid());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        let alpha = if hex.len() == 8 {
            f32::from(byte(6)?) / 255.0
        } else {
            1.0
        };
        Ok(Self::rgba(byte(0)?, byte(2)?, byte(4)?, alpha))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        let Color { r, g, b, a } = value;
        // alpha is clamped on construction, so the cast stays in range
        let alpha = (a * 255.0).round() as u8;
        format!("#{r:02x}{g:02x}{b:02x}{alpha:02x}")
    }
}

//
// ─── EXPRESSIONS ──────────────────────────────────────────────────────────────
//

/// A style expression tree in the renderer's JSON form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Expression(Value);

impl Expression {
    #[must_use]
    pub fn as_json(&self) -> &Value {
        &self.0
    }

    #[must_use]
    pub fn into_json(self) -> Value {
        self.0
    }

    fn interpolate_linear(input: Value, stops: Vec<Value>) -> Self {
        let mut tree = vec![json!("interpolate"), json!(["linear"]), input];
        tree.extend(stops);
        Self(Value::Array(tree))
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Line width interpolated linearly over zoom, scaled by `multiplier`.
#[must_use]
pub fn route_line_width_expression(multiplier: f64) -> Expression {
    let stops = ROUTE_LINE_WIDTH_BY_ZOOM_LEVEL
        .iter()
        .flat_map(|&(zoom, width)| [json!(zoom), json!(width * multiplier)])
        .collect();
    Expression::interpolate_linear(json!(["zoom"]), stops)
}

#[must_use]
pub fn route_line_width_expression_default() -> Expression {
    route_line_width_expression(1.0)
}

/// Line color interpolated over normalized line progress.
///
/// Stops are sorted; non-finite progress values are dropped, the rest are
/// clamped to `0.0..=1.0`, and for duplicate progress values the color given
/// last wins.
#[must_use]
pub fn route_line_gradient_expression(gradient_stops: &[(f64, Color)]) -> Expression {
    let mut stops: Vec<(f64, Color)> = Vec::with_capacity(gradient_stops.len());
    for &(progress, color) in gradient_stops {
        if !progress.is_finite() {
            log::debug!("dropping gradient stop with non-finite progress {progress}");
            continue;
        }
        // adding zero folds -0.0 into 0.0
        stops.push((progress.clamp(0.0, 1.0) + 0.0, color));
    }
    // stable sort keeps input order among equal keys
    stops.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut deduped: Vec<(f64, Color)> = Vec::with_capacity(stops.len());
    for (progress, color) in stops {
        match deduped.last_mut() {
            Some(last) if last.0.total_cmp(&progress).is_eq() => last.1 = color,
            _ => deduped.push((progress, color)),
        }
    }

    let stops = deduped
        .into_iter()
        .flat_map(|(progress, color)| [json!(progress), json!(color.to_string())])
        .collect();
    Expression::interpolate_linear(json!(["line-progress"]), stops)
}
