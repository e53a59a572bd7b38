//! Rectangle (box) definitions.

use crate::draw::{StrokeDefinition, Style, TextDefinition};

/// Defines the appearance of a filled and stroked box.
///
/// A rectangle may carry a label; its text style is applied to the same
/// cell so the label renders inside the box.
///
/// # Examples
///
/// ```
/// # use archboard_core::draw::{RectangleDefinition, StrokeDefinition};
/// let definition = RectangleDefinition::new()
///     .with_fill_color("#dae8fc")
///     .with_stroke(StrokeDefinition::solid("#6c8ebf", 1.0))
///     .with_rounded(true);
/// assert!(definition.is_rounded());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RectangleDefinition {
    fill_color: Option<String>,
    stroke: StrokeDefinition,
    rounded: bool,
    corner_radius: Option<u16>,
    text: TextDefinition,
}

impl RectangleDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill_color(&self) -> Option<&str> {
        self.fill_color.as_deref()
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn is_rounded(&self) -> bool {
        self.rounded
    }

    pub fn text(&self) -> &TextDefinition {
        &self.text
    }

    /// Sets the fill color. `None` leaves the box unfilled.
    pub fn set_fill_color(&mut self, color: Option<String>) {
        self.fill_color = color;
    }

    pub fn set_stroke(&mut self, stroke: StrokeDefinition) {
        self.stroke = stroke;
    }

    pub fn set_rounded(&mut self, rounded: bool) {
        self.rounded = rounded;
    }

    /// Sets the corner radius as an mxGraph `arcSize` percentage.
    ///
    /// Only meaningful for rounded rectangles.
    pub fn set_corner_radius(&mut self, radius: Option<u16>) {
        self.corner_radius = radius;
    }

    pub fn set_text(&mut self, text: TextDefinition) {
        self.text = text;
    }

    pub fn with_fill_color(mut self, color: impl Into<String>) -> Self {
        self.fill_color = Some(color.into());
        self
    }

    pub fn with_stroke(mut self, stroke: StrokeDefinition) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn with_rounded(mut self, rounded: bool) -> Self {
        self.rounded = rounded;
        self
    }

    pub fn with_corner_radius(mut self, radius: u16) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    pub fn with_text(mut self, text: TextDefinition) -> Self {
        self.text = text;
        self
    }

    /// Builds the mxGraph style for this rectangle.
    pub fn to_style(&self) -> Style {
        let mut style = Style::new();
        if self.rounded {
            style.set("rounded", 1);
            if let Some(radius) = self.corner_radius {
                style.set("arcSize", radius);
            }
        } else {
            style.set("rounded", 0);
        }
        style.set(
            "fillColor",
            self.fill_color.as_deref().unwrap_or("none"),
        );
        self.stroke.apply(&mut style);
        self.text.apply(&mut style);
        style
    }
}
