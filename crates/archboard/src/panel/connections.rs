//! Connectors between registered component boxes.

use log::{debug, warn};

use archboard_core::{builder::CellBuilder, draw::RenderLayer, geometry::Position};

use crate::{
    error::ArchboardError,
    layout::select_anchors,
    panel::{DroppedConnection, Panel, PanelKind, PanelOutput},
    registry::PositionRegistry,
    schema::Interface,
    theme::Theme,
};

/// One connector per interface, drawn over the components region.
///
/// The region passed to [`Panel::render`] is ignored: connectors attach to
/// boxes wherever the components panel put them. An interface whose source
/// or target is not registered is dropped and reported.
pub struct ConnectionsPanel<'a> {
    interfaces: &'a [Interface],
    registry: &'a PositionRegistry,
    theme: &'a Theme,
}

impl<'a> ConnectionsPanel<'a> {
    pub fn new(
        interfaces: &'a [Interface],
        registry: &'a PositionRegistry,
        theme: &'a Theme,
    ) -> Self {
        Self {
            interfaces,
            registry,
            theme,
        }
    }
}

impl Panel for ConnectionsPanel<'_> {
    fn kind(&self) -> PanelKind {
        PanelKind::Connections
    }

    fn render(
        &self,
        builder: &mut CellBuilder,
        _position: Position,
    ) -> Result<PanelOutput, ArchboardError> {
        let mut output = PanelOutput::new();
        let mut drawn = 0;

        for interface in self.interfaces {
            let source = self.registry.get(&interface.source);
            let target = self.registry.get(&interface.target);
            let (Some(source), Some(target)) = (source, target) else {
                let missing: Vec<String> = [
                    (source.is_none(), &interface.source),
                    (target.is_none(), &interface.target),
                ]
                .into_iter()
                .filter(|(missing, _)| *missing)
                .map(|(_, id)| id.clone())
                .collect();
                let name = interface.display_name();
                warn!(
                    interface = name.as_str(),
                    missing:? = missing;
                    "Dropping connection with unresolved endpoint"
                );
                output.add_dropped(DroppedConnection {
                    interface: name,
                    missing,
                });
                continue;
            };

            let anchors = select_anchors(source.position(), target.position());
            output.extend(
                RenderLayer::Connector,
                builder.connector(
                    source,
                    target,
                    anchors,
                    &self.theme.connector(interface.asynchronous),
                    interface.edge_label(),
                ),
            );
            drawn += 1;
        }

        debug!(drawn = drawn, dropped = output.dropped().len(); "Connections rendered");
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use archboard_core::{
        cell::CellKind,
        draw::RectangleDefinition,
        geometry::{Anchor, AnchorPair},
    };

    use super::*;
    use crate::record::Record;

    fn interface(source: &str, target: &str) -> Interface {
        Interface::from_record(&Record::new().with("source", source).with("target", target))
    }

    fn register(
        builder: &mut CellBuilder,
        registry: &mut PositionRegistry,
        id: &str,
        position: Position,
    ) {
        let cell = builder.labeled_rectangle(position, id, &RectangleDefinition::new());
        registry.insert(id, cell.to_ref().unwrap());
    }

    fn render(
        interfaces: &[Interface],
        registry: &PositionRegistry,
        builder: &mut CellBuilder,
    ) -> PanelOutput {
        let theme = Theme::default();
        ConnectionsPanel::new(interfaces, registry, &theme)
            .render(builder, Position::default())
            .unwrap()
    }

    #[test]
    fn test_vertical_neighbours_connect_bottom_to_top() {
        let mut builder = CellBuilder::new();
        let mut registry = PositionRegistry::new();
        register(&mut builder, &mut registry, "A", Position::new(100.0, 100.0, 140.0, 45.0));
        register(&mut builder, &mut registry, "B", Position::new(100.0, 300.0, 140.0, 45.0));

        let output = render(&[interface("A", "B")], &registry, &mut builder);
        let cells = output.into_cells().into_cells();
        let edge = cells.iter().find_map(|cell| cell.edge()).unwrap();

        assert_eq!(
            edge.anchors(),
            Some(AnchorPair::new(Anchor::BOTTOM_CENTER, Anchor::TOP_CENTER))
        );
        assert_eq!(edge.source(), registry.get("A").map(|r| r.id()));
        assert_eq!(edge.target(), registry.get("B").map(|r| r.id()));
    }

    #[test]
    fn test_horizontal_neighbours_connect_right_to_left() {
        let mut builder = CellBuilder::new();
        let mut registry = PositionRegistry::new();
        register(&mut builder, &mut registry, "A", Position::new(100.0, 100.0, 140.0, 45.0));
        register(&mut builder, &mut registry, "B", Position::new(500.0, 110.0, 140.0, 45.0));

        let output = render(&[interface("A", "B")], &registry, &mut builder);
        let cells = output.into_cells().into_cells();
        let edge = cells.iter().find(|cell| cell.is_edge()).unwrap();

        let style = edge.style();
        assert_eq!(style.get("exitX"), Some("1"));
        assert_eq!(style.get("exitY"), Some("0.5"));
        assert_eq!(style.get("entryX"), Some("0"));
        assert_eq!(style.get("entryY"), Some("0.5"));
    }

    #[test]
    fn test_unresolved_endpoint_is_dropped_and_reported() {
        let mut builder = CellBuilder::new();
        let mut registry = PositionRegistry::new();
        register(&mut builder, &mut registry, "A", Position::new(0.0, 0.0, 140.0, 45.0));
        register(&mut builder, &mut registry, "B", Position::new(300.0, 0.0, 140.0, 45.0));

        let interfaces = [
            interface("A", "B"),
            interface("B", "ghost"),
            interface("phantom", "ghost"),
        ];
        let output = render(&interfaces, &registry, &mut builder);

        assert_eq!(
            output.dropped(),
            &[
                DroppedConnection {
                    interface: "B->ghost".to_string(),
                    missing: vec!["ghost".to_string()],
                },
                DroppedConnection {
                    interface: "phantom->ghost".to_string(),
                    missing: vec!["phantom".to_string(), "ghost".to_string()],
                },
            ]
        );
        let cells = output.into_cells().into_cells();
        assert_eq!(cells.iter().filter(|cell| cell.is_edge()).count(), 1);
    }

    #[test]
    fn test_async_interface_is_dashed_and_labeled_with_protocol() {
        let mut builder = CellBuilder::new();
        let mut registry = PositionRegistry::new();
        register(&mut builder, &mut registry, "orders", Position::new(0.0, 0.0, 140.0, 45.0));
        register(&mut builder, &mut registry, "billing", Position::new(300.0, 0.0, 140.0, 45.0));

        let interfaces = [Interface::from_record(
            &Record::new()
                .with("source", "orders")
                .with("target", "billing")
                .with("protocol", "Kafka"),
        )];
        let output = render(&interfaces, &registry, &mut builder);
        let cells = output.into_cells().into_cells();

        let edge = cells.iter().find(|cell| cell.is_edge()).unwrap();
        assert_eq!(edge.style().get("dashed"), Some("1"));
        let label = cells
            .iter()
            .find(|cell| matches!(cell.kind(), CellKind::EdgeLabel))
            .unwrap();
        assert_eq!(label.parent(), edge.id());
        assert_eq!(label.value().as_str(), "Kafka");
    }
}
