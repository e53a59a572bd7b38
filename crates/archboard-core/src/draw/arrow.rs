//! Arrow (edge) definitions.
//!
//! This module provides the types for styling edges: the stroke, the path
//! style, the end marker and the text style of an optional label.

use std::str;

use crate::draw::{StrokeDefinition, Style, TextDefinition};

/// Defines the path style of an edge.
///
/// # Variants
///
/// - `Straight`: a direct segment between the endpoints
/// - `Curved`: a smooth curve between the endpoints
/// - `Orthogonal`: only horizontal and vertical segments
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ArrowStyle {
    #[default]
    Straight,
    Curved,
    Orthogonal,
}

impl str::FromStr for ArrowStyle {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "straight" => Ok(Self::Straight),
            "curved" => Ok(Self::Curved),
            "orthogonal" => Ok(Self::Orthogonal),
            _ => Err("Invalid arrow style"),
        }
    }
}

/// Defines the marker drawn at the target end of an edge.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ArrowHead {
    #[default]
    Classic,
    Block,
    Open,
    None,
}

impl ArrowHead {
    fn to_style_value(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Block => "block",
            Self::Open => "open",
            Self::None => "none",
        }
    }
}

/// Defines the visual properties of an edge.
///
/// # Examples
///
/// ```
/// # use archboard_core::draw::{ArrowDefinition, ArrowStyle, StrokeDefinition};
/// let mut arrow = ArrowDefinition::new(StrokeDefinition::dashed("#666666", 1.5));
/// arrow.set_style(ArrowStyle::Curved);
/// assert_eq!(arrow.style(), ArrowStyle::Curved);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrowDefinition {
    stroke: StrokeDefinition,
    style: ArrowStyle,
    head: ArrowHead,
    text: TextDefinition,
}

impl ArrowDefinition {
    /// Creates a new definition with the given stroke.
    /// Style defaults to Straight with a classic arrow head.
    pub fn new(stroke: StrokeDefinition) -> Self {
        Self {
            stroke,
            ..Self::default()
        }
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn style(&self) -> ArrowStyle {
        self.style
    }

    pub fn head(&self) -> ArrowHead {
        self.head
    }

    /// Gets the label text definition.
    pub fn text(&self) -> &TextDefinition {
        &self.text
    }

    pub fn set_stroke(&mut self, stroke: StrokeDefinition) {
        self.stroke = stroke;
    }

    pub fn set_style(&mut self, style: ArrowStyle) {
        self.style = style;
    }

    pub fn set_head(&mut self, head: ArrowHead) {
        self.head = head;
    }

    pub fn set_text(&mut self, text: TextDefinition) {
        self.text = text;
    }

    pub fn with_style(mut self, style: ArrowStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_head(mut self, head: ArrowHead) -> Self {
        self.head = head;
        self
    }

    pub fn with_text(mut self, text: TextDefinition) -> Self {
        self.text = text;
        self
    }

    /// Builds the mxGraph style for the edge itself.
    pub fn to_style(&self) -> Style {
        let mut style = Style::new();
        match self.style {
            ArrowStyle::Straight => style.set("edgeStyle", "none"),
            ArrowStyle::Curved => {
                style.set("edgeStyle", "none");
                style.set("curved", 1);
            }
            ArrowStyle::Orthogonal => {
                style.set("edgeStyle", "orthogonalEdgeStyle");
                style.set("rounded", 0);
            }
        }
        style.set("endArrow", self.head.to_style_value());
        if self.head != ArrowHead::None {
            style.set("endFill", u8::from(self.head != ArrowHead::Open));
        }
        style.set("html", 0);
        self.stroke.apply(&mut style);
        style
    }

    /// Builds the mxGraph style for the edge's nested label cell.
    pub fn label_style(&self) -> Style {
        let mut style = Style::named("edgeLabel");
        style.set("resizable", 0);
        self.text.apply(&mut style);
        style
    }
}
