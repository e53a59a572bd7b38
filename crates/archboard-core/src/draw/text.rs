//! Text style definitions for labels and cell values.
//!
//! # Overview
//!
//! - [`TextDefinition`] - Reusable text style configuration
//! - [`FontStyle`] - Bold/italic/underline flags
//! - [`HorizontalAlign`] / [`VerticalAlign`] - Label alignment inside a cell
//!
//! # Quick Start
//!
//! ```
//! # use archboard_core::draw::{FontStyle, HorizontalAlign, TextDefinition};
//! let mut style = TextDefinition::new();
//! style.set_font_size(14);
//! style.set_font_style(FontStyle::BOLD);
//! style.set_align(HorizontalAlign::Left);
//! assert_eq!(style.font_size(), 14);
//! ```

use std::ops::BitOr;

use crate::draw::Style;

/// Font style flags, serialized as the mxGraph `fontStyle` bit mask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FontStyle(u8);

impl FontStyle {
    pub const NORMAL: FontStyle = FontStyle(0);
    pub const BOLD: FontStyle = FontStyle(1);
    pub const ITALIC: FontStyle = FontStyle(2);
    pub const UNDERLINE: FontStyle = FontStyle(4);

    /// Returns the mxGraph bit mask.
    pub fn mask(self) -> u8 {
        self.0
    }

    /// Returns true if every flag in `other` is set in `self`.
    pub fn contains(self, other: FontStyle) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for FontStyle {
    type Output = FontStyle;

    fn bitor(self, rhs: Self) -> Self::Output {
        FontStyle(self.0 | rhs.0)
    }
}

/// Horizontal alignment of a label inside its cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HorizontalAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl HorizontalAlign {
    fn to_style_value(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Vertical alignment of a label inside its cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VerticalAlign {
    Top,
    #[default]
    Middle,
    Bottom,
}

impl VerticalAlign {
    fn to_style_value(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Middle => "middle",
            Self::Bottom => "bottom",
        }
    }
}

/// Defines the visual style for text in diagram cells.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `None` (viewer default) |
/// | Font size | `12` |
/// | Font style | normal |
/// | Font color | `None` (viewer default) |
/// | Alignment | center / middle |
/// | Background, border | `None` |
/// | Wrap | `true` |
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: Option<String>,
    font_size: u16,
    font_style: FontStyle,
    font_color: Option<String>,
    align: HorizontalAlign,
    vertical_align: VerticalAlign,
    background_color: Option<String>,
    border_color: Option<String>,
    wrap: bool,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn font_style(&self) -> FontStyle {
        self.font_style
    }

    pub fn font_color(&self) -> Option<&str> {
        self.font_color.as_deref()
    }

    pub fn align(&self) -> HorizontalAlign {
        self.align
    }

    pub fn vertical_align(&self) -> VerticalAlign {
        self.vertical_align
    }

    /// Sets the font size in points.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    /// Sets the font family, e.g. `"Helvetica"`.
    pub fn set_font_family(&mut self, family: Option<String>) {
        self.font_family = family;
    }

    pub fn set_font_style(&mut self, font_style: FontStyle) {
        self.font_style = font_style;
    }

    pub fn set_font_color(&mut self, color: Option<String>) {
        self.font_color = color;
    }

    pub fn set_align(&mut self, align: HorizontalAlign) {
        self.align = align;
    }

    pub fn set_vertical_align(&mut self, vertical_align: VerticalAlign) {
        self.vertical_align = vertical_align;
    }

    /// Sets the label background. `None` leaves the label transparent.
    pub fn set_background_color(&mut self, color: Option<String>) {
        self.background_color = color;
    }

    /// Sets the label border. `None` draws no border.
    pub fn set_border_color(&mut self, color: Option<String>) {
        self.border_color = color;
    }

    pub fn set_wrap(&mut self, wrap: bool) {
        self.wrap = wrap;
    }

    /// Returns a copy with a different font size.
    pub fn with_font_size(mut self, size: u16) -> Self {
        self.font_size = size;
        self
    }

    /// Returns a copy with a different font style.
    pub fn with_font_style(mut self, font_style: FontStyle) -> Self {
        self.font_style = font_style;
        self
    }

    /// Returns a copy with a different font color.
    pub fn with_font_color(mut self, color: impl Into<String>) -> Self {
        self.font_color = Some(color.into());
        self
    }

    /// Returns a copy with different alignment.
    pub fn with_align(mut self, align: HorizontalAlign, vertical_align: VerticalAlign) -> Self {
        self.align = align;
        self.vertical_align = vertical_align;
        self
    }

    /// Writes the text properties into an mxGraph style.
    pub fn apply(&self, style: &mut Style) {
        if self.wrap {
            style.set("whiteSpace", "wrap");
        }
        style.set("align", self.align.to_style_value());
        style.set("verticalAlign", self.vertical_align.to_style_value());
        style.set("fontSize", self.font_size);
        if self.font_style != FontStyle::NORMAL {
            style.set("fontStyle", self.font_style.mask());
        }
        if let Some(color) = &self.font_color {
            style.set("fontColor", color);
        }
        if let Some(family) = &self.font_family {
            style.set("fontFamily", family);
        }
        if let Some(color) = &self.background_color {
            style.set("labelBackgroundColor", color);
        }
        if let Some(color) = &self.border_color {
            style.set("labelBorderColor", color);
        }
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: None,
            font_size: 12,
            font_style: FontStyle::NORMAL,
            font_color: None,
            align: HorizontalAlign::Center,
            vertical_align: VerticalAlign::Middle,
            background_color: None,
            border_color: None,
            wrap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_style_mask() {
        assert_eq!(FontStyle::NORMAL.mask(), 0);
        let style = FontStyle::BOLD | FontStyle::ITALIC;
        assert_eq!(style.mask(), 3);
        assert!(style.contains(FontStyle::BOLD));
        assert!(!style.contains(FontStyle::UNDERLINE));
    }

    #[test]
    fn test_text_default_apply() {
        let mut style = Style::named("text");
        TextDefinition::default().apply(&mut style);
        assert_eq!(
            style.to_string(),
            "text;whiteSpace=wrap;align=center;verticalAlign=middle;fontSize=12;"
        );
    }

    #[test]
    fn test_text_full_apply() {
        let mut text = TextDefinition::new()
            .with_font_size(16)
            .with_font_style(FontStyle::BOLD)
            .with_font_color("#333333")
            .with_align(HorizontalAlign::Left, VerticalAlign::Top);
        text.set_font_family(Some("Helvetica".to_string()));
        text.set_background_color(Some("#ffffff".to_string()));
        text.set_border_color(Some("#cccccc".to_string()));
        text.set_wrap(false);

        let mut style = Style::new();
        text.apply(&mut style);

        assert_eq!(style.get("whiteSpace"), None);
        assert_eq!(style.get("align"), Some("left"));
        assert_eq!(style.get("verticalAlign"), Some("top"));
        assert_eq!(style.get("fontSize"), Some("16"));
        assert_eq!(style.get("fontStyle"), Some("1"));
        assert_eq!(style.get("fontColor"), Some("#333333"));
        assert_eq!(style.get("fontFamily"), Some("Helvetica"));
        assert_eq!(style.get("labelBackgroundColor"), Some("#ffffff"));
        assert_eq!(style.get("labelBorderColor"), Some("#cccccc"));
    }

    #[test]
    fn test_text_setters() {
        let mut text = TextDefinition::new();
        text.set_font_size(9);
        text.set_font_style(FontStyle::ITALIC);
        text.set_font_color(Some("red".to_string()));
        text.set_align(HorizontalAlign::Right);
        text.set_vertical_align(VerticalAlign::Bottom);

        assert_eq!(text.font_size(), 9);
        assert_eq!(text.font_style(), FontStyle::ITALIC);
        assert_eq!(text.font_color(), Some("red"));
        assert_eq!(text.align(), HorizontalAlign::Right);
        assert_eq!(text.vertical_align(), VerticalAlign::Bottom);
    }
}
