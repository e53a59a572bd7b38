//! The identifier-allocating cell factory.
//!
//! One [`CellBuilder`] is shared across an entire diagram build. Every cell
//! it emits takes the next value of a monotonic counter, which is what makes
//! cell ids unique within a document. The counter is never reset; build a new
//! builder for each document and never share one across concurrent builds.

use log::trace;

use crate::{
    cell::{Cell, CellId, CellKind, CellRef, EdgeGeometry},
    draw::{ArrowDefinition, RectangleDefinition, Style, TextDefinition},
    escape::Markup,
    geometry::{AnchorPair, Point, Position},
};

/// First id handed out; `0` and `1` are the document root and layer.
const FIRST_ID: u32 = 2;

/// Stateful factory for cells.
///
/// # Examples
///
/// ```
/// # use archboard_core::builder::CellBuilder;
/// # use archboard_core::draw::{RectangleDefinition, TextDefinition};
/// # use archboard_core::geometry::Position;
/// let mut builder = CellBuilder::new();
/// let boxed = builder.rectangle(Position::new(0.0, 0.0, 100.0, 40.0), &RectangleDefinition::new());
/// let label = builder.text(Position::new(0.0, 50.0, 100.0, 20.0), "a < b", &TextDefinition::new());
///
/// assert_ne!(boxed.id(), label.id());
/// assert_eq!(label.value().as_str(), "a &lt; b");
/// assert_eq!(builder.cells_emitted(), 2);
/// ```
#[derive(Debug)]
pub struct CellBuilder {
    next_id: u32,
}

impl Default for CellBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CellBuilder {
    pub fn new() -> Self {
        Self { next_id: FIRST_ID }
    }

    /// Returns how many cells this builder has emitted.
    pub fn cells_emitted(&self) -> usize {
        (self.next_id - FIRST_ID) as usize
    }

    fn allocate(&mut self) -> CellId {
        let id = CellId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emits an unlabeled rectangle.
    pub fn rectangle(&mut self, position: Position, definition: &RectangleDefinition) -> Cell {
        self.labeled_rectangle(position, "", definition)
    }

    /// Emits a rectangle whose label renders inside the box.
    ///
    /// The label is escaped before it is stored.
    pub fn labeled_rectangle(
        &mut self,
        position: Position,
        label: &str,
        definition: &RectangleDefinition,
    ) -> Cell {
        let id = self.allocate();
        trace!(id = id.value(), label; "Emitting rectangle");
        Cell::new(
            id,
            CellId::LAYER,
            CellKind::Rectangle(position),
            Markup::escape(label),
            definition.to_style(),
        )
    }

    /// Emits a free-standing text label.
    ///
    /// The content is escaped before it is stored.
    pub fn text(&mut self, position: Position, content: &str, definition: &TextDefinition) -> Cell {
        let id = self.allocate();
        trace!(id = id.value(), content; "Emitting text");
        let mut style = Style::named("text");
        style.set("strokeColor", "none");
        style.set("fillColor", "none");
        definition.apply(&mut style);
        Cell::new(
            id,
            CellId::LAYER,
            CellKind::Text(position),
            Markup::escape(content),
            style,
        )
    }

    /// Emits an edge between two absolute points.
    ///
    /// When `label` is non-blank, a second cell holding the label is emitted
    /// as a child of the edge.
    pub fn arrow(
        &mut self,
        source: Point,
        target: Point,
        definition: &ArrowDefinition,
        label: Option<&str>,
    ) -> Vec<Cell> {
        self.edge(EdgeGeometry::floating(source, target), definition, label)
    }

    /// Emits an edge attached to two existing vertices at the given anchors.
    ///
    /// Anchors are written as exit/entry fractions so that the edge stays
    /// attached when a viewer moves either box.
    pub fn connector(
        &mut self,
        source: CellRef,
        target: CellRef,
        anchors: AnchorPair,
        definition: &ArrowDefinition,
        label: Option<&str>,
    ) -> Vec<Cell> {
        self.edge(
            EdgeGeometry::attached(source, target, anchors),
            definition,
            label,
        )
    }

    fn edge(
        &mut self,
        geometry: EdgeGeometry,
        definition: &ArrowDefinition,
        label: Option<&str>,
    ) -> Vec<Cell> {
        let id = self.allocate();
        let mut style = definition.to_style();
        if let Some(anchors) = geometry.anchors() {
            style.set("exitX", anchors.source().x());
            style.set("exitY", anchors.source().y());
            style.set("exitDx", 0);
            style.set("exitDy", 0);
            style.set("entryX", anchors.target().x());
            style.set("entryY", anchors.target().y());
            style.set("entryDx", 0);
            style.set("entryDy", 0);
        }
        trace!(id = id.value(), geometry:?; "Emitting edge");

        let mut cells = vec![Cell::new(
            id,
            CellId::LAYER,
            CellKind::Edge(geometry),
            Markup::empty(),
            style,
        )];

        if let Some(label) = label.filter(|label| !label.trim().is_empty()) {
            let label_id = self.allocate();
            cells.push(Cell::new(
                label_id,
                id,
                CellKind::EdgeLabel,
                Markup::escape(label),
                definition.label_style(),
            ));
        }

        cells
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;
    use crate::geometry::Anchor;

    #[test]
    fn test_builder_starts_after_reserved_ids() {
        let mut builder = CellBuilder::new();
        let cell = builder.rectangle(Position::default(), &RectangleDefinition::new());
        assert_eq!(cell.id().value(), 2);
        assert_eq!(cell.parent(), CellId::LAYER);
    }

    #[test]
    fn test_text_cell_style_and_escaping() {
        let mut builder = CellBuilder::new();
        let cell = builder.text(
            Position::new(0.0, 0.0, 50.0, 20.0),
            "Cost \"total\"\n& more",
            &TextDefinition::new(),
        );
        assert_eq!(cell.value().as_str(), "Cost &quot;total&quot;&#10;&amp; more");
        assert_eq!(cell.style().name(), Some("text"));
        assert_eq!(cell.style().get("strokeColor"), Some("none"));
    }

    #[test]
    fn test_labeled_rectangle_escapes_label() {
        let mut builder = CellBuilder::new();
        let cell = builder.labeled_rectangle(
            Position::new(0.0, 0.0, 50.0, 20.0),
            "<API>",
            &RectangleDefinition::new(),
        );
        assert_eq!(cell.value().as_str(), "&lt;API&gt;");
    }

    #[test]
    fn test_arrow_without_label_emits_one_cell() {
        let mut builder = CellBuilder::new();
        let cells = builder.arrow(
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            &ArrowDefinition::default(),
            None,
        );
        assert_eq!(cells.len(), 1);
        assert!(cells[0].is_edge());

        let blank = builder.arrow(
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            &ArrowDefinition::default(),
            Some("   "),
        );
        assert_eq!(blank.len(), 1);
    }

    #[test]
    fn test_arrow_with_label_emits_nested_label() {
        let mut builder = CellBuilder::new();
        let cells = builder.arrow(
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            &ArrowDefinition::default(),
            Some("REST"),
        );
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[1].kind(), &CellKind::EdgeLabel);
        assert_eq!(cells[1].parent(), cells[0].id());
        assert_eq!(cells[1].value().as_str(), "REST");
    }

    #[test]
    fn test_connector_writes_anchor_style() {
        let mut builder = CellBuilder::new();
        let a = builder.rectangle(
            Position::new(100.0, 100.0, 140.0, 45.0),
            &RectangleDefinition::new(),
        );
        let b = builder.rectangle(
            Position::new(500.0, 110.0, 140.0, 45.0),
            &RectangleDefinition::new(),
        );
        let anchors = AnchorPair::new(Anchor::RIGHT_CENTER, Anchor::LEFT_CENTER);

        let cells = builder.connector(
            a.to_ref().unwrap(),
            b.to_ref().unwrap(),
            anchors,
            &ArrowDefinition::default(),
            None,
        );

        let edge = cells[0].edge().expect("edge geometry");
        assert_eq!(edge.source(), Some(a.id()));
        assert_eq!(edge.target(), Some(b.id()));
        assert_eq!(cells[0].style().get("exitX"), Some("1"));
        assert_eq!(cells[0].style().get("exitY"), Some("0.5"));
        assert_eq!(cells[0].style().get("entryX"), Some("0"));
        assert_eq!(cells[0].style().get("entryY"), Some("0.5"));
    }

    #[derive(Debug, Clone)]
    enum Op {
        Rectangle,
        Text,
        Arrow(bool),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::Rectangle),
            Just(Op::Text),
            any::<bool>().prop_map(Op::Arrow),
        ]
    }

    proptest! {
        #[test]
        fn emitted_ids_are_pairwise_distinct(ops in prop::collection::vec(op_strategy(), 0..64)) {
            let mut builder = CellBuilder::new();
            let mut cells = Vec::new();
            for op in ops {
                match op {
                    Op::Rectangle => cells.push(builder.rectangle(Position::default(), &RectangleDefinition::new())),
                    Op::Text => cells.push(builder.text(Position::default(), "t", &TextDefinition::new())),
                    Op::Arrow(labeled) => cells.extend(builder.arrow(
                        Point::default(),
                        Point::new(1.0, 1.0),
                        &ArrowDefinition::default(),
                        labeled.then_some("label"),
                    )),
                }
            }

            let ids: HashSet<_> = cells.iter().map(Cell::id).collect();
            prop_assert_eq!(ids.len(), cells.len());
            prop_assert_eq!(builder.cells_emitted(), cells.len());
            prop_assert!(!ids.contains(&CellId::ROOT));
            prop_assert!(!ids.contains(&CellId::LAYER));
        }
    }
}
