//! Architecture building blocks grouped into layer lanes.
//!
//! Lanes are stacked top to bottom in layer order. Each lane is exactly as
//! tall as its grid of boxes needs, so lanes with many components take more
//! room. Every box is registered under its component id so the connections
//! panel can attach edges to it.

use log::debug;

use archboard_core::{
    builder::CellBuilder,
    draw::RenderLayer,
    geometry::{Position, Size},
};

use crate::{
    error::ArchboardError,
    layout::{Columns, GridSpec},
    panel::{GridOverflow, Panel, PanelKind, PanelOutput, framed, placeholder},
    registry::PositionRegistry,
    schema::{Component, Layer, layer_order},
    theme::Theme,
};

const BOX_WIDTH: f32 = 140.0;
const BOX_HEIGHT: f32 = 45.0;
const LANE_TITLE_HEIGHT: f32 = 18.0;
const LANE_GAP: f32 = 8.0;
/// Slack allowed before a lane counts as running past the panel.
const TOLERANCE: f32 = 0.01;

pub struct ComponentsPanel<'a> {
    components: &'a [Component],
    theme: &'a Theme,
}

impl<'a> ComponentsPanel<'a> {
    pub fn new(components: &'a [Component], theme: &'a Theme) -> Self {
        Self { components, theme }
    }

    fn grid() -> GridSpec {
        GridSpec::new(Size::new(BOX_WIDTH, BOX_HEIGHT))
            .with_columns(Columns::FitWidth)
            .with_spacing(20.0, 15.0)
            .with_margin(10.0)
            .with_title_height(LANE_TITLE_HEIGHT)
    }

    fn members(&self, layer: &Layer) -> Vec<&'a Component> {
        self.components
            .iter()
            .filter(|component| &component.layer == layer)
            .collect()
    }
}

impl Panel for ComponentsPanel<'_> {
    fn kind(&self) -> PanelKind {
        PanelKind::Components
    }

    fn render(
        &self,
        builder: &mut CellBuilder,
        position: Position,
    ) -> Result<PanelOutput, ArchboardError> {
        let mut output = PanelOutput::new();
        let mut registry = PositionRegistry::new();
        let content = framed(builder, self.theme, position, "Architecture", &mut output);

        if self.components.is_empty() {
            placeholder(
                builder,
                self.theme,
                content,
                "No components defined",
                &mut output,
            );
            output.set_registry(registry);
            return Ok(output);
        }

        let grid = Self::grid();
        let mut lane_y = content.y();
        for layer in layer_order(self.components) {
            let members = self.members(&layer);
            let probe = Position::new(content.x(), lane_y, content.width(), 0.0);
            let rows = members.len().div_ceil(grid.columns_for(probe)?);
            let lane = probe.with_height(grid.height_for_rows(rows));
            lane_y = lane.bottom() + LANE_GAP;

            let swatch = self.theme.layer_swatch(&layer);
            output.add(
                RenderLayer::Frame,
                builder.rectangle(lane, &self.theme.lane(swatch)),
            );
            let title = Position::new(
                lane.x() + grid.margin(),
                lane.y() + grid.margin() / 2.0,
                (lane.width() - 2.0 * grid.margin()).max(0.0),
                LANE_TITLE_HEIGHT,
            );
            output.add(
                RenderLayer::Text,
                builder.text(title, layer.name(), &self.theme.label_text()),
            );

            let placement = grid.place(lane, members.len())?;
            let definition = self.theme.swatch_box(swatch, 11);
            for (position, component) in placement.positions().iter().zip(&members) {
                let cell = builder.labeled_rectangle(*position, &component.label(), &definition);
                if let Some(cell_ref) = cell.to_ref() {
                    registry.insert(component.id.as_str(), cell_ref);
                }
                output.add(RenderLayer::Content, cell);
            }

            if lane.bottom() > content.bottom() + TOLERANCE {
                output.add_overflow(GridOverflow {
                    panel: PanelKind::Components,
                    group: layer.name().to_string(),
                    children: members.len(),
                });
            }
        }

        debug!(components = registry.len(); "Component boxes registered");
        output.set_registry(registry);
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{panel::test_support::*, record::Record};

    fn component(id: &str, layer: &str) -> Component {
        Component::from_record(&Record::new().with("id", id).with("layer", layer))
    }

    #[test]
    fn test_lanes_follow_layer_order() {
        let components = vec![
            component("db", "data"),
            component("api", "application"),
            component("portal", "business"),
        ];
        let theme = Theme::default();
        let cells = render_cells(
            &ComponentsPanel::new(&components, &theme),
            Position::new(20.0, 110.0, 1200.0, 500.0),
        );

        let lane_titles: Vec<_> = values(&cells)
            .into_iter()
            .filter(|value| ["Business", "Application", "Data"].contains(&value.as_str()))
            .collect();
        assert_eq!(lane_titles, vec!["Business", "Application", "Data"]);

        let y_of = |id: &str| {
            cells
                .iter()
                .find(|cell| cell.value().as_str() == id)
                .and_then(|cell| cell.position())
                .unwrap()
                .y()
        };
        assert!(y_of("portal") < y_of("api"));
        assert!(y_of("api") < y_of("db"));
    }

    #[test]
    fn test_every_box_is_registered() {
        let components: Vec<_> = (0..7)
            .map(|i| component(&format!("C{i}"), if i % 2 == 0 { "data" } else { "security" }))
            .collect();
        let theme = Theme::default();
        let mut builder = CellBuilder::new();
        let mut output = ComponentsPanel::new(&components, &theme)
            .render(&mut builder, Position::new(0.0, 0.0, 1000.0, 600.0))
            .unwrap();

        let registry = output.take_registry().unwrap();
        assert_eq!(registry.len(), 7);
        let cells = output.into_cells().into_cells();
        for (id, cell_ref) in registry.iter() {
            let cell = cells.iter().find(|cell| cell.id() == cell_ref.id()).unwrap();
            assert_eq!(cell.value().as_str(), id);
            assert_eq!(cell.position(), Some(cell_ref.position()));
        }
    }

    #[test]
    fn test_lane_grows_with_rows() {
        // 980 wide content fits six boxes per row.
        let components: Vec<_> = (0..8).map(|i| component(&format!("A{i}"), "application")).collect();
        let theme = Theme::default();
        let mut builder = CellBuilder::new();
        let mut output = ComponentsPanel::new(&components, &theme)
            .render(&mut builder, Position::new(0.0, 0.0, 1000.0, 600.0))
            .unwrap();
        let registry = output.take_registry().unwrap();

        let first = registry.get("A0").unwrap().position();
        let seventh = registry.get("A6").unwrap().position();
        assert_eq!(seventh.x(), first.x());
        assert_eq!(seventh.y(), first.y() + BOX_HEIGHT + 15.0);
        assert!(output.overflows().is_empty());
    }

    #[test]
    fn test_lanes_past_the_panel_report_overflow() {
        let components: Vec<_> = (0..30).map(|i| component(&format!("X{i}"), "data")).collect();
        let theme = Theme::default();
        let mut builder = CellBuilder::new();
        let output = ComponentsPanel::new(&components, &theme)
            .render(&mut builder, Position::new(0.0, 0.0, 400.0, 200.0))
            .unwrap();

        assert_eq!(output.overflows().len(), 1);
        assert_eq!(output.overflows()[0].group, "Data");
        assert_eq!(output.registry().map(PositionRegistry::len), Some(30));
    }

    #[test]
    fn test_no_components_placeholder_and_empty_registry() {
        let theme = Theme::default();
        let mut builder = CellBuilder::new();
        let mut output = ComponentsPanel::new(&[], &theme)
            .render(&mut builder, Position::new(0.0, 0.0, 400.0, 200.0))
            .unwrap();
        assert!(output.take_registry().unwrap().is_empty());
        let cells = output.into_cells().into_cells();
        assert!(values(&cells).contains(&"No components defined".to_string()));
    }
}
