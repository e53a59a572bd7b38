//! Geometric primitives for diagram assembly.
//!
//! This module provides the geometric types used throughout Archboard to
//! place cells on the page and to attach connectors to boxes.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in document space
//! - [`Size`] - Width and height dimensions
//! - [`Insets`] - Padding/margin values for four sides
//! - [`Position`] - An axis-aligned rectangle with a derived center
//! - [`Anchor`] - A normalized point on a box, relative to its own geometry
//! - [`AnchorPair`] - The exit and entry anchors of one connector
//!
//! # Coordinate System
//!
//! Archboard uses the mxGraph page coordinate system:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Unlike center-based layout systems, a [`Position`] is anchored at its
//! top-left corner, which is how mxGraph stores vertex geometry.

use crate::Error;

/// A 2D point representing a location in document coordinate space.
///
/// # Examples
///
/// ```
/// # use archboard_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(30.0, 40.0);
///
/// let mid = p1.midpoint(p2);
/// assert_eq!(mid.x(), 20.0);
/// assert_eq!(mid.y(), 30.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns a new Size with the maximum width and height between this size and another
    pub fn max(self, other: Size) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Returns true if both width and height are zero
    pub fn is_zero(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

/// Represents spacing around an element (padding, margin, etc.)
/// with potentially different values for each side
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Creates new insets with specified values for each side
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates uniform insets with the same value for all sides
    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Creates insets with one value for top/bottom and another for left/right
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Returns the top inset value
    pub fn top(self) -> f32 {
        self.top
    }

    /// Returns the right inset value
    pub fn right(self) -> f32 {
        self.right
    }

    /// Returns the bottom inset value
    pub fn bottom(self) -> f32 {
        self.bottom
    }

    /// Returns the left inset value
    pub fn left(self) -> f32 {
        self.left
    }

    /// Returns the sum of left and right insets
    pub fn horizontal_sum(self) -> f32 {
        self.left + self.right
    }

    /// Returns the sum of top and bottom insets
    pub fn vertical_sum(self) -> f32 {
        self.top + self.bottom
    }
}

/// An axis-aligned rectangle in document coordinates.
///
/// The rectangle is stored by its top-left corner and its dimensions. The
/// center is derived and read-only. A `Position` is immutable: every helper
/// returns a new value.
///
/// # Examples
///
/// ```
/// # use archboard_core::geometry::Position;
/// let position = Position::new(100.0, 100.0, 140.0, 45.0);
/// assert_eq!(position.center_x(), 170.0);
/// assert_eq!(position.center_y(), 122.5);
/// assert_eq!(position.right(), 240.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl Position {
    /// Creates a new position from its top-left corner and dimensions.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a new position, rejecting non-finite values and negative sizes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Geometry`] when a coordinate is NaN or infinite, or
    /// when the width or height is negative.
    pub fn checked(x: f32, y: f32, width: f32, height: f32) -> Result<Self, Error> {
        if ![x, y, width, height].iter().all(|v| v.is_finite()) {
            return Err(Error::Geometry(format!(
                "non-finite position ({x}, {y}, {width}, {height})"
            )));
        }
        if width < 0.0 || height < 0.0 {
            return Err(Error::Geometry(format!(
                "negative size {width}x{height}"
            )));
        }
        Ok(Self::new(x, y, width, height))
    }

    /// Creates a position from a top-left point and a size.
    pub fn from_origin(origin: Point, size: Size) -> Self {
        Self::new(origin.x(), origin.y(), size.width(), size.height())
    }

    pub fn x(self) -> f32 {
        self.x
    }

    pub fn y(self) -> f32 {
        self.y
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the x-coordinate of the right edge
    pub fn right(self) -> f32 {
        self.x + self.width
    }

    /// Returns the y-coordinate of the bottom edge
    pub fn bottom(self) -> f32 {
        self.y + self.height
    }

    /// Returns the x-coordinate of the center
    pub fn center_x(self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Returns the y-coordinate of the center
    pub fn center_y(self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Returns the center as a Point
    pub fn center(self) -> Point {
        Point::new(self.center_x(), self.center_y())
    }

    /// Returns the top-left corner as a Point
    pub fn origin(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns the dimensions as a Size
    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Shrinks the rectangle by the given insets.
    ///
    /// Width and height never go below zero.
    pub fn inset(self, insets: Insets) -> Self {
        Self {
            x: self.x + insets.left(),
            y: self.y + insets.top(),
            width: (self.width - insets.horizontal_sum()).max(0.0),
            height: (self.height - insets.vertical_sum()).max(0.0),
        }
    }

    /// Splits off a strip of the given height from the top.
    ///
    /// Returns `(top, rest)`. The strip is clamped to the available height.
    pub fn split_top(self, height: f32) -> (Self, Self) {
        let height = height.clamp(0.0, self.height);
        (
            Self::new(self.x, self.y, self.width, height),
            Self::new(self.x, self.y + height, self.width, self.height - height),
        )
    }

    /// Splits off a strip of the given width from the left.
    ///
    /// Returns `(left, rest)`. The strip is clamped to the available width.
    pub fn split_left(self, width: f32) -> (Self, Self) {
        let width = width.clamp(0.0, self.width);
        (
            Self::new(self.x, self.y, width, self.height),
            Self::new(self.x + width, self.y, self.width - width, self.height),
        )
    }

    /// Returns a copy with a different height, keeping the top-left corner.
    pub fn with_height(self, height: f32) -> Self {
        Self { height, ..self }
    }

    /// Returns a copy with a different width, keeping the top-left corner.
    pub fn with_width(self, width: f32) -> Self {
        Self { width, ..self }
    }

    /// Returns true if the two rectangles share an area of positive size.
    ///
    /// Rectangles that only touch along an edge do not intersect.
    pub fn intersects(&self, other: &Self) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Returns true if `other` lies entirely within this rectangle.
    pub fn contains(&self, other: &Self) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Resolves a normalized anchor to an absolute point on this rectangle.
    pub fn point_at(self, anchor: Anchor) -> Point {
        Point::new(
            self.x + anchor.x() * self.width,
            self.y + anchor.y() * self.height,
        )
    }
}

/// A side of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// Returns the center anchor of this side.
    pub fn center_anchor(self) -> Anchor {
        match self {
            Self::Top => Anchor::TOP_CENTER,
            Self::Right => Anchor::RIGHT_CENTER,
            Self::Bottom => Anchor::BOTTOM_CENTER,
            Self::Left => Anchor::LEFT_CENTER,
        }
    }

    /// Returns the side facing this one.
    pub fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }
}

/// A point on a box expressed as fractions of the box's own geometry.
///
/// `(0, 0)` is the top-left corner and `(1, 1)` the bottom-right corner.
/// Because anchors are relative, a viewer keeps connectors attached when a
/// box is moved after the document is written.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    x: f32,
    y: f32,
}

impl Anchor {
    pub const TOP_CENTER: Anchor = Anchor { x: 0.5, y: 0.0 };
    pub const RIGHT_CENTER: Anchor = Anchor { x: 1.0, y: 0.5 };
    pub const BOTTOM_CENTER: Anchor = Anchor { x: 0.5, y: 1.0 };
    pub const LEFT_CENTER: Anchor = Anchor { x: 0.0, y: 0.5 };

    /// Creates a new anchor, clamping both fractions into `[0, 1]`.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: x.clamp(0.0, 1.0),
            y: y.clamp(0.0, 1.0),
        }
    }

    pub fn x(self) -> f32 {
        self.x
    }

    pub fn y(self) -> f32 {
        self.y
    }

    /// Returns true if the anchor is the center of a vertical side.
    pub fn is_horizontal_center(self) -> bool {
        self.y == 0.5 && (self.x == 0.0 || self.x == 1.0)
    }

    /// Returns true if the anchor is the center of a horizontal side.
    pub fn is_vertical_center(self) -> bool {
        self.x == 0.5 && (self.y == 0.0 || self.y == 1.0)
    }
}

/// The exit anchor on the source box and the entry anchor on the target box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorPair {
    source: Anchor,
    target: Anchor,
}

impl AnchorPair {
    pub fn new(source: Anchor, target: Anchor) -> Self {
        Self { source, target }
    }

    /// Builds the pair from the two facing sides.
    pub fn from_sides(source: Side, target: Side) -> Self {
        Self::new(source.center_anchor(), target.center_anchor())
    }

    pub fn source(self) -> Anchor {
        self.source
    }

    pub fn target(self) -> Anchor {
        self.target
    }
}
