//! Cells: the atomic output unit of a diagram.
//!
//! A [`Cell`] is one rendered primitive: a rectangle, a text label, an edge,
//! or the nested label of an edge. Cells are created by the
//! [`CellBuilder`](crate::builder::CellBuilder) and have no behavior once
//! emitted; all fields are private and read-only.

use std::fmt;

use crate::{
    draw::Style,
    escape::Markup,
    geometry::{AnchorPair, Point, Position},
};

/// Unique identifier of a cell within one document.
///
/// Ids `0` and `1` are reserved for the mxGraph root cell and the default
/// layer cell that every document starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(u32);

impl CellId {
    /// The mxGraph root cell.
    pub const ROOT: CellId = CellId(0);
    /// The default layer; parent of every top-level cell.
    pub const LAYER: CellId = CellId(1);

    pub(crate) fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A reference to an already emitted vertex, used to attach edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRef {
    id: CellId,
    position: Position,
}

impl CellRef {
    pub fn new(id: CellId, position: Position) -> Self {
        Self { id, position }
    }

    pub fn id(self) -> CellId {
        self.id
    }

    pub fn position(self) -> Position {
        self.position
    }
}

/// Geometry of an edge.
///
/// The absolute endpoints are always present. Edges attached to vertices
/// additionally carry the source/target cell ids and the normalized anchors
/// on each vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeGeometry {
    source_point: Point,
    target_point: Point,
    source: Option<CellId>,
    target: Option<CellId>,
    anchors: Option<AnchorPair>,
}

impl EdgeGeometry {
    /// A free-floating edge between two absolute points.
    pub fn floating(source_point: Point, target_point: Point) -> Self {
        Self {
            source_point,
            target_point,
            source: None,
            target: None,
            anchors: None,
        }
    }

    /// An edge attached to two vertices at the given anchors.
    pub fn attached(source: CellRef, target: CellRef, anchors: AnchorPair) -> Self {
        Self {
            source_point: source.position().point_at(anchors.source()),
            target_point: target.position().point_at(anchors.target()),
            source: Some(source.id()),
            target: Some(target.id()),
            anchors: Some(anchors),
        }
    }

    pub fn source_point(&self) -> Point {
        self.source_point
    }

    pub fn target_point(&self) -> Point {
        self.target_point
    }

    pub fn source(&self) -> Option<CellId> {
        self.source
    }

    pub fn target(&self) -> Option<CellId> {
        self.target
    }

    pub fn anchors(&self) -> Option<AnchorPair> {
        self.anchors
    }
}

/// The kind of a cell, with its kind-specific geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum CellKind {
    /// A filled and stroked box, optionally with a label inside.
    Rectangle(Position),
    /// A free-standing text label.
    Text(Position),
    /// A connector line.
    Edge(EdgeGeometry),
    /// The label of an edge; positioned relative to its parent edge.
    EdgeLabel,
}

/// One rendered primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    id: CellId,
    parent: CellId,
    kind: CellKind,
    value: Markup,
    style: Style,
}

impl Cell {
    pub(crate) fn new(
        id: CellId,
        parent: CellId,
        kind: CellKind,
        value: Markup,
        style: Style,
    ) -> Self {
        Self {
            id,
            parent,
            kind,
            value,
            style,
        }
    }

    pub fn id(&self) -> CellId {
        self.id
    }

    pub fn parent(&self) -> CellId {
        self.parent
    }

    pub fn kind(&self) -> &CellKind {
        &self.kind
    }

    /// Returns the escaped value of the cell.
    pub fn value(&self) -> &Markup {
        &self.value
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Returns true for rectangles and text labels.
    pub fn is_vertex(&self) -> bool {
        matches!(
            self.kind,
            CellKind::Rectangle(_) | CellKind::Text(_) | CellKind::EdgeLabel
        )
    }

    pub fn is_edge(&self) -> bool {
        matches!(self.kind, CellKind::Edge(_))
    }

    /// Returns the absolute position of rectangles and text labels.
    pub fn position(&self) -> Option<Position> {
        match self.kind {
            CellKind::Rectangle(position) | CellKind::Text(position) => Some(position),
            CellKind::Edge(_) | CellKind::EdgeLabel => None,
        }
    }

    /// Returns the edge geometry of edges.
    pub fn edge(&self) -> Option<&EdgeGeometry> {
        match &self.kind {
            CellKind::Edge(edge) => Some(edge),
            _ => None,
        }
    }

    /// Returns a reference usable as an edge endpoint, for positioned cells.
    pub fn to_ref(&self) -> Option<CellRef> {
        self.position().map(|position| CellRef::new(self.id, position))
    }
}
