//! Stroke and line-style definitions.
//!
//! # Overview
//!
//! - [`StrokeDefinition`]: color, width and pattern of a border or connector
//! - [`StrokeStyle`]: line pattern (solid, dashed, dotted or a custom pattern)
//!
//! # mxGraph Style Mapping
//!
//! | Rust Property | Style Key | Example Values |
//! |--------------|-----------|----------------|
//! | `color` | `strokeColor` | `"#6c8ebf"`, `"none"` |
//! | `width` | `strokeWidth` | `2` |
//! | `style` | `dashed`, `dashPattern` | `1`, `"2 3"` |

use std::str::FromStr;

use crate::draw::Style;

/// Defines the visual pattern of a stroke.
///
/// # Style Mapping
///
/// - `Solid`: no `dashed` key
/// - `Dashed`: `dashed=1` with the viewer's default pattern
/// - `Dotted`: `dashed=1;dashPattern=1 3`
/// - `Custom(pattern)`: `dashed=1;dashPattern=<pattern>`
#[derive(Debug, Default, Clone, PartialEq)]
pub enum StrokeStyle {
    /// Solid continuous line (default)
    #[default]
    Solid,
    /// Dashed line
    Dashed,
    /// Dotted line
    Dotted,
    /// Custom space-separated dash pattern, e.g. `"8 4 2 4"`
    Custom(String),
}

impl FromStr for StrokeStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(Self::Solid),
            "dashed" => Ok(Self::Dashed),
            "dotted" => Ok(Self::Dotted),
            "" => Err("empty stroke style".to_string()),
            // Any other value is treated as a custom dash pattern
            _ => Ok(Self::Custom(s.to_string())),
        }
    }
}

impl StrokeStyle {
    /// Returns the dash pattern for this style, or None when the viewer default applies
    fn dash_pattern(&self) -> Option<&str> {
        match self {
            Self::Solid | Self::Dashed => None,
            Self::Dotted => Some("1 3"),
            Self::Custom(pattern) => Some(pattern),
        }
    }

    pub fn is_solid(&self) -> bool {
        matches!(self, Self::Solid)
    }
}

/// A stroke definition for borders and connectors.
///
/// # Examples
///
/// ```
/// use archboard_core::draw::{StrokeDefinition, StrokeStyle};
///
/// // Default stroke (black, 1px, solid)
/// let stroke = StrokeDefinition::default();
/// assert!(stroke.style().is_solid());
///
/// // Dashed stroke
/// let stroke = StrokeDefinition::dashed("#82b366", 1.5);
/// assert_eq!(*stroke.style(), StrokeStyle::Dashed);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: String,
    width: f32,
    style: StrokeStyle,
}

impl StrokeDefinition {
    /// Creates a new solid stroke with the given color and width.
    pub fn new(color: impl Into<String>, width: f32) -> Self {
        Self {
            color: color.into(),
            width,
            style: StrokeStyle::Solid,
        }
    }

    /// Creates a solid stroke (convenience constructor).
    pub fn solid(color: impl Into<String>, width: f32) -> Self {
        Self::new(color, width)
    }

    /// Creates a dashed stroke (convenience constructor).
    pub fn dashed(color: impl Into<String>, width: f32) -> Self {
        Self::new(color, width).with_style(StrokeStyle::Dashed)
    }

    /// Creates a stroke that is not drawn at all.
    pub fn none() -> Self {
        Self::new("none", 0.0)
    }

    /// Returns the stroke color.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the stroke style.
    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    /// Sets the stroke color.
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    /// Sets the stroke width.
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    /// Sets the stroke style.
    pub fn set_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }

    /// Sets the stroke style (builder style).
    pub fn with_style(mut self, style: StrokeStyle) -> Self {
        self.style = style;
        self
    }

    /// Writes the stroke properties into an mxGraph style.
    pub fn apply(&self, style: &mut Style) {
        style.set("strokeColor", &self.color);
        if self.color != "none" {
            style.set("strokeWidth", self.width);
        }
        if !self.style.is_solid() {
            style.set("dashed", 1);
            if let Some(pattern) = self.style.dash_pattern() {
                style.set("dashPattern", pattern);
            }
        }
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::new("#000000", 1.0)
    }
}
