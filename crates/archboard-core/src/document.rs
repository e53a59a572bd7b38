//! The mxGraph document and its XML serialization.
//!
//! A [`DiagramDocument`] is a header plus a flat list of cells in z-order.
//! Serialization writes the standard draw.io envelope:
//!
//! ```text
//! mxfile
//! └── diagram
//!     └── mxGraphModel
//!         └── root
//!             ├── mxCell id="0"
//!             ├── mxCell id="1" parent="0"
//!             └── mxCell ... (one per emitted cell)
//! ```
//!
//! Cell values are already escaped by construction; style strings and header
//! attributes are escaped here.

use std::fmt::Write;

use log::debug;

use crate::{
    cell::{Cell, CellId, CellKind},
    error::Error,
    escape::escape_attr,
    geometry::{Position, Size},
};

/// Diagram-level metadata written into the document envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentHeader {
    name: String,
    diagram_id: String,
    page: Size,
    agent: String,
    background: Option<String>,
}

impl DocumentHeader {
    pub fn new(name: impl Into<String>, page: Size) -> Self {
        Self {
            name: name.into(),
            diagram_id: "archboard-diagram".to_string(),
            page,
            agent: concat!("archboard/", env!("CARGO_PKG_VERSION")).to_string(),
            background: None,
        }
    }

    pub fn with_diagram_id(mut self, id: impl Into<String>) -> Self {
        self.diagram_id = id.into();
        self
    }

    pub fn with_agent(mut self, agent: impl Into<String>) -> Self {
        self.agent = agent.into();
        self
    }

    /// Sets the page background color.
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn diagram_id(&self) -> &str {
        &self.diagram_id
    }

    pub fn page(&self) -> Size {
        self.page
    }

    pub fn agent(&self) -> &str {
        &self.agent
    }

    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }
}

impl Default for DocumentHeader {
    fn default() -> Self {
        Self::new("Page-1", Size::new(1920.0, 1080.0))
    }
}

/// A complete diagram, ready to serialize.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramDocument {
    header: DocumentHeader,
    cells: Vec<Cell>,
}

impl DiagramDocument {
    /// Creates a document from cells already flattened into z-order.
    pub fn new(header: DocumentHeader, cells: Vec<Cell>) -> Self {
        Self { header, cells }
    }

    pub fn header(&self) -> &DocumentHeader {
        &self.header
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Looks up a cell by id.
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.iter().find(|cell| cell.id() == id)
    }

    /// Iterates over the edge cells.
    pub fn edges(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|cell| cell.is_edge())
    }

    /// Serializes the document to draw.io XML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Write`] if formatting fails.
    pub fn to_xml(&self) -> Result<String, Error> {
        let mut out = String::with_capacity(256 + self.cells.len() * 256);
        let header = &self.header;

        writeln!(
            out,
            r#"<mxfile host="{agent}" agent="{agent}" type="device">"#,
            agent = escape_attr(header.agent()),
        )?;
        writeln!(
            out,
            r#"  <diagram id="{}" name="{}">"#,
            escape_attr(header.diagram_id()),
            escape_attr(header.name()),
        )?;
        writeln!(
            out,
            concat!(
                r#"    <mxGraphModel dx="{w}" dy="{h}" grid="1" gridSize="10" guides="1" "#,
                r#"tooltips="1" connect="1" arrows="1" fold="1" page="1" pageScale="1" "#,
                r#"pageWidth="{w}" pageHeight="{h}"{background} math="0" shadow="0">"#
            ),
            w = number(header.page().width()),
            h = number(header.page().height()),
            background = header
                .background()
                .map(|color| format!(r#" background="{}""#, escape_attr(color)))
                .unwrap_or_default(),
        )?;
        writeln!(out, "      <root>")?;
        writeln!(out, r#"        <mxCell id="{}"/>"#, CellId::ROOT)?;
        writeln!(
            out,
            r#"        <mxCell id="{}" parent="{}"/>"#,
            CellId::LAYER,
            CellId::ROOT
        )?;

        for cell in &self.cells {
            write_cell(&mut out, cell)?;
        }

        writeln!(out, "      </root>")?;
        writeln!(out, "    </mxGraphModel>")?;
        writeln!(out, "  </diagram>")?;
        writeln!(out, "</mxfile>")?;

        debug!(cells = self.cells.len(), bytes = out.len(); "Serialized document");
        Ok(out)
    }
}

fn write_cell(out: &mut String, cell: &Cell) -> Result<(), Error> {
    let style = escape_attr(&cell.style().to_string());
    match cell.kind() {
        CellKind::Rectangle(position) | CellKind::Text(position) => {
            writeln!(
                out,
                r#"        <mxCell id="{}" value="{}" style="{}" vertex="1" parent="{}">"#,
                cell.id(),
                cell.value(),
                style,
                cell.parent(),
            )?;
            write_vertex_geometry(out, *position)?;
        }
        CellKind::Edge(edge) => {
            write!(
                out,
                r#"        <mxCell id="{}" value="{}" style="{}" edge="1" parent="{}""#,
                cell.id(),
                cell.value(),
                style,
                cell.parent(),
            )?;
            if let Some(source) = edge.source() {
                write!(out, r#" source="{source}""#)?;
            }
            if let Some(target) = edge.target() {
                write!(out, r#" target="{target}""#)?;
            }
            writeln!(out, ">")?;
            writeln!(out, r#"          <mxGeometry relative="1" as="geometry">"#)?;
            writeln!(
                out,
                r#"            <mxPoint x="{}" y="{}" as="sourcePoint"/>"#,
                number(edge.source_point().x()),
                number(edge.source_point().y()),
            )?;
            writeln!(
                out,
                r#"            <mxPoint x="{}" y="{}" as="targetPoint"/>"#,
                number(edge.target_point().x()),
                number(edge.target_point().y()),
            )?;
            writeln!(out, "          </mxGeometry>")?;
        }
        CellKind::EdgeLabel => {
            writeln!(
                out,
                r#"        <mxCell id="{}" value="{}" style="{}" vertex="1" connectable="0" parent="{}">"#,
                cell.id(),
                cell.value(),
                style,
                cell.parent(),
            )?;
            writeln!(out, r#"          <mxGeometry relative="1" as="geometry">"#)?;
            writeln!(out, r#"            <mxPoint as="offset"/>"#)?;
            writeln!(out, "          </mxGeometry>")?;
        }
    }
    writeln!(out, "        </mxCell>")?;
    Ok(())
}

fn write_vertex_geometry(out: &mut String, position: Position) -> Result<(), Error> {
    writeln!(
        out,
        r#"          <mxGeometry x="{}" y="{}" width="{}" height="{}" as="geometry"/>"#,
        number(position.x()),
        number(position.y()),
        number(position.width()),
        number(position.height()),
    )?;
    Ok(())
}

/// Formats a coordinate with at most two decimals.
fn number(value: f32) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        // Avoid "-0".
        return "0".to_string();
    }
    rounded.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        builder::CellBuilder,
        draw::{ArrowDefinition, RectangleDefinition, TextDefinition},
        geometry::{Anchor, AnchorPair, Point},
    };

    fn sample_document() -> DiagramDocument {
        let mut builder = CellBuilder::new();
        let a = builder.labeled_rectangle(
            Position::new(100.0, 100.0, 140.0, 45.0),
            "Auth & Users",
            &RectangleDefinition::new().with_fill_color("#dae8fc"),
        );
        let b = builder.labeled_rectangle(
            Position::new(500.0, 110.0, 140.0, 45.0),
            "Billing",
            &RectangleDefinition::new(),
        );
        let title = builder.text(
            Position::new(0.0, 0.0, 300.0, 30.0),
            "Line 1\nLine <2>",
            &TextDefinition::new(),
        );
        let edge = builder.connector(
            a.to_ref().unwrap(),
            b.to_ref().unwrap(),
            AnchorPair::new(Anchor::RIGHT_CENTER, Anchor::LEFT_CENTER),
            &ArrowDefinition::default(),
            Some("REST \"v2\""),
        );

        let mut cells = vec![a, b, title];
        cells.extend(edge);
        DiagramDocument::new(DocumentHeader::default(), cells)
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(number(100.0), "100");
        assert_eq!(number(122.5), "122.5");
        assert_eq!(number(33.333_33), "33.33");
        assert_eq!(number(-0.001), "0");
    }

    #[test]
    fn test_document_lookup() {
        let document = sample_document();
        assert_eq!(document.cells().len(), 5);
        assert_eq!(document.edges().count(), 1);
        assert!(document.cell(CellId::new(2)).is_some());
        assert!(document.cell(CellId::ROOT).is_none());
    }

    #[test]
    fn test_xml_is_well_formed_and_has_reserved_cells() {
        let xml = sample_document().to_xml().unwrap();
        let doc = roxmltree::Document::parse(&xml).expect("well-formed XML");

        let root = doc.root_element();
        assert_eq!(root.tag_name().name(), "mxfile");

        let model = root
            .descendants()
            .find(|n| n.has_tag_name("mxGraphModel"))
            .unwrap();
        assert_eq!(model.attribute("pageWidth"), Some("1920"));
        assert_eq!(model.attribute("pageHeight"), Some("1080"));

        let cells: Vec<_> = doc
            .descendants()
            .filter(|n| n.has_tag_name("mxCell"))
            .collect();
        assert_eq!(cells[0].attribute("id"), Some("0"));
        assert_eq!(cells[1].attribute("id"), Some("1"));
        assert_eq!(cells[1].attribute("parent"), Some("0"));
        assert_eq!(cells.len(), 7);
    }

    #[test]
    fn test_xml_values_round_trip_through_parser() {
        let xml = sample_document().to_xml().unwrap();
        let doc = roxmltree::Document::parse(&xml).unwrap();
        let values: Vec<_> = doc
            .descendants()
            .filter(|n| n.has_tag_name("mxCell"))
            .filter_map(|n| n.attribute("value"))
            .collect();

        assert!(values.contains(&"Auth & Users"));
        assert!(values.contains(&"Line 1\nLine <2>"));
        assert!(values.contains(&"REST \"v2\""));
    }

    #[test]
    fn test_xml_edge_shape() {
        let xml = sample_document().to_xml().unwrap();
        let doc = roxmltree::Document::parse(&xml).unwrap();

        let edge = doc
            .descendants()
            .find(|n| n.has_tag_name("mxCell") && n.attribute("edge") == Some("1"))
            .unwrap();
        assert_eq!(edge.attribute("source"), Some("2"));
        assert_eq!(edge.attribute("target"), Some("3"));
        let style = edge.attribute("style").unwrap();
        assert!(style.contains("exitX=1;"));
        assert!(style.contains("entryX=0;"));

        let points: Vec<_> = edge
            .descendants()
            .filter(|n| n.has_tag_name("mxPoint"))
            .map(|n| {
                (
                    n.attribute("as").unwrap(),
                    n.attribute("x").unwrap(),
                    n.attribute("y").unwrap(),
                )
            })
            .collect();
        assert_eq!(
            points,
            vec![("sourcePoint", "240", "122.5"), ("targetPoint", "500", "132.5")]
        );

        let label = doc
            .descendants()
            .find(|n| n.has_tag_name("mxCell") && n.attribute("connectable") == Some("0"))
            .unwrap();
        assert_eq!(label.attribute("parent"), edge.attribute("id"));
    }

    #[test]
    fn test_floating_arrow_has_no_endpoints() {
        let mut builder = CellBuilder::new();
        let cells = builder.arrow(
            Point::new(0.0, 0.0),
            Point::new(50.0, 0.0),
            &ArrowDefinition::default(),
            None,
        );
        let xml = DiagramDocument::new(DocumentHeader::default(), cells)
            .to_xml()
            .unwrap();
        let doc = roxmltree::Document::parse(&xml).unwrap();
        let edge = doc
            .descendants()
            .find(|n| n.attribute("edge") == Some("1"))
            .unwrap();
        assert_eq!(edge.attribute("source"), None);
        assert_eq!(edge.attribute("target"), None);
    }

    #[test]
    fn test_header_attributes_are_escaped() {
        let header = DocumentHeader::new("R&D <overview>", Size::new(800.0, 600.0))
            .with_diagram_id("id\"1")
            .with_agent("test");
        let xml = DiagramDocument::new(header, Vec::new()).to_xml().unwrap();
        let doc = roxmltree::Document::parse(&xml).unwrap();
        let diagram = doc
            .descendants()
            .find(|n| n.has_tag_name("diagram"))
            .unwrap();
        assert_eq!(diagram.attribute("name"), Some("R&D <overview>"));
        assert_eq!(diagram.attribute("id"), Some("id\"1"));
    }

    #[test]
    fn test_page_background_is_optional() {
        let plain = DiagramDocument::new(DocumentHeader::default(), Vec::new())
            .to_xml()
            .unwrap();
        assert!(!plain.contains("background="));

        let header = DocumentHeader::default().with_background("#f8f9fa");
        let xml = DiagramDocument::new(header, Vec::new()).to_xml().unwrap();
        let doc = roxmltree::Document::parse(&xml).unwrap();
        let model = doc
            .descendants()
            .find(|n| n.has_tag_name("mxGraphModel"))
            .unwrap();
        assert_eq!(model.attribute("background"), Some("#f8f9fa"));
    }
}
