//! Visual definitions for diagram cells.
//!
//! Definitions are reusable style descriptors. The [`CellBuilder`] combines a
//! definition with a position and content to produce a cell; the definition
//! itself knows how to write its properties into an mxGraph [`Style`].
//!
//! [`CellBuilder`]: crate::builder::CellBuilder

mod arrow;
mod layer;
mod rectangle;
mod stroke;
mod style;
mod text;

pub use arrow::{ArrowDefinition, ArrowHead, ArrowStyle};
pub use layer::{LayeredCells, RenderLayer};
pub use rectangle::RectangleDefinition;
pub use stroke::{StrokeDefinition, StrokeStyle};
pub use style::Style;
pub use text::{FontStyle, HorizontalAlign, TextDefinition, VerticalAlign};
