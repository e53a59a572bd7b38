//! Layer-based ordering of emitted cells.
//!
//! mxGraph draws cells in document order, so z-order is decided by the order
//! of the flat cell list. Panels tag each cell with a [`RenderLayer`] and the
//! assembler flattens all panels' output with [`LayeredCells::into_cells`],
//! which keeps backgrounds under boxes, boxes under connectors, and
//! connectors under free-standing labels.
//!
//! # Example
//!
//! ```
//! # use archboard_core::builder::CellBuilder;
//! # use archboard_core::draw::{LayeredCells, RectangleDefinition, RenderLayer, TextDefinition};
//! # use archboard_core::geometry::Position;
//! let mut builder = CellBuilder::new();
//! let mut output = LayeredCells::new();
//!
//! let label = builder.text(Position::new(0.0, 0.0, 80.0, 20.0), "Title", &TextDefinition::new());
//! let frame = builder.rectangle(Position::new(0.0, 0.0, 200.0, 100.0), &RectangleDefinition::new());
//! output.add_to_layer(RenderLayer::Text, label);
//! output.add_to_layer(RenderLayer::Background, frame);
//!
//! let cells = output.into_cells();
//! assert_eq!(cells.len(), 2);
//! ```

use crate::cell::Cell;

/// Defines the z-order layers of a diagram.
///
/// Layers are emitted from bottom to top in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Page and panel backgrounds - emitted first
    Background,
    /// Lanes and group frames inside a panel
    Frame,
    /// Boxes, tiles and badges - default layer
    Content,
    /// Edges between boxes, with their nested labels
    Connector,
    /// Free-standing text labels - emitted last
    Text,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Frame => "frame",
            Self::Content => "content",
            Self::Connector => "connector",
            Self::Text => "text",
        }
    }
}

/// Cells grouped by rendering layer.
#[derive(Debug, Default)]
pub struct LayeredCells {
    items: Vec<(RenderLayer, Cell)>,
}

impl LayeredCells {
    /// Creates a new empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single cell to the specified layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, cell: Cell) {
        self.items.push((layer, cell));
    }

    /// Adds several cells to the specified layer, preserving their order.
    pub fn extend_layer(&mut self, layer: RenderLayer, cells: impl IntoIterator<Item = Cell>) {
        self.items
            .extend(cells.into_iter().map(|cell| (layer, cell)));
    }

    /// Merges all cells from another collection into this one.
    pub fn merge(&mut self, other: LayeredCells) {
        self.items.extend(other.items);
    }

    /// Returns `true` if no cell has been added.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of cells across all layers.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterates over the cells in insertion order, with their layer.
    pub fn iter(&self) -> impl Iterator<Item = (RenderLayer, &Cell)> {
        self.items.iter().map(|(layer, cell)| (*layer, cell))
    }

    /// Flattens the collection into a cell list in z-order, consuming it.
    ///
    /// The sort is stable: cells of the same layer keep their insertion order,
    /// so an edge label always follows its edge.
    pub fn into_cells(mut self) -> Vec<Cell> {
        self.items.sort_by_key(|(layer, _)| *layer);
        self.items.into_iter().map(|(_, cell)| cell).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        builder::CellBuilder,
        draw::{RectangleDefinition, TextDefinition},
        geometry::Position,
    };

    fn rect(builder: &mut CellBuilder) -> Cell {
        builder.rectangle(
            Position::new(0.0, 0.0, 10.0, 10.0),
            &RectangleDefinition::new(),
        )
    }

    #[test]
    fn test_layered_cells_new() {
        let output = LayeredCells::new();
        assert!(output.is_empty());
        assert_eq!(output.len(), 0);
    }

    #[test]
    fn test_layered_cells_orders_by_layer() {
        let mut builder = CellBuilder::new();
        let mut output = LayeredCells::new();

        let text = builder.text(
            Position::new(0.0, 0.0, 10.0, 10.0),
            "label",
            &TextDefinition::new(),
        );
        let content = rect(&mut builder);
        let background = rect(&mut builder);
        let (text_id, content_id, background_id) = (text.id(), content.id(), background.id());

        output.add_to_layer(RenderLayer::Text, text);
        output.add_to_layer(RenderLayer::Content, content);
        output.add_to_layer(RenderLayer::Background, background);

        let ids: Vec<_> = output.into_cells().iter().map(Cell::id).collect();
        assert_eq!(ids, vec![background_id, content_id, text_id]);
    }

    #[test]
    fn test_layered_cells_stable_within_layer() {
        let mut builder = CellBuilder::new();
        let mut output = LayeredCells::new();

        let first = rect(&mut builder);
        let second = rect(&mut builder);
        let expected = vec![first.id(), second.id()];
        output.extend_layer(RenderLayer::Connector, vec![first, second]);

        let ids: Vec<_> = output.into_cells().iter().map(Cell::id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_layered_cells_merge() {
        let mut builder = CellBuilder::new();
        let mut output1 = LayeredCells::new();
        output1.add_to_layer(RenderLayer::Content, rect(&mut builder));

        let mut output2 = LayeredCells::new();
        output2.add_to_layer(RenderLayer::Frame, rect(&mut builder));

        output1.merge(output2);
        assert_eq!(output1.len(), 2);
        let layers: Vec<_> = output1.iter().map(|(layer, _)| layer).collect();
        assert_eq!(layers, vec![RenderLayer::Content, RenderLayer::Frame]);
    }

    #[test]
    fn test_render_layer_names() {
        assert_eq!(RenderLayer::Background.name(), "background");
        assert_eq!(RenderLayer::Connector.name(), "connector");
        assert!(RenderLayer::Background < RenderLayer::Text);
    }
}
