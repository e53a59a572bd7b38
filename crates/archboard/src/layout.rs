//! Layout algorithms.
//!
//! - [`grid`] places a variable number of fixed-size boxes inside a region.
//! - [`anchor`] chooses which sides of two boxes a connector attaches to.

pub mod anchor;
pub mod grid;

pub use anchor::select_anchors;
pub use grid::{Columns, GridPlacement, GridSpec};
