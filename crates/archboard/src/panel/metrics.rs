//! KPI tiles.

use archboard_core::{
    builder::CellBuilder,
    draw::RenderLayer,
    geometry::{Position, Size},
};

use crate::{
    error::ArchboardError,
    layout::{Columns, GridSpec},
    panel::{GridOverflow, Panel, PanelKind, PanelOutput, framed},
    schema::{Metrics, Rating},
    theme::Theme,
};

const COLUMNS: usize = 3;
const SPACING: f32 = 10.0;
const MAX_TILE_HEIGHT: f32 = 70.0;

/// Six tiles on a three-column grid. Rating tiles are colored by rating.
pub struct MetricsPanel<'a> {
    metrics: &'a Metrics,
    theme: &'a Theme,
}

impl<'a> MetricsPanel<'a> {
    pub fn new(metrics: &'a Metrics, theme: &'a Theme) -> Self {
        Self { metrics, theme }
    }

    fn tiles(&self) -> Vec<(&'static str, String, Option<Rating>)> {
        let text = |value: &Option<String>| value.clone().unwrap_or_else(|| "n/a".to_string());
        let metrics = self.metrics;
        vec![
            ("Complexity", metrics.complexity.to_string(), Some(metrics.complexity)),
            ("Priority", metrics.priority.to_string(), Some(metrics.priority)),
            ("Maturity", metrics.maturity.to_string(), Some(metrics.maturity)),
            ("Effort", text(&metrics.effort), None),
            ("ROI", text(&metrics.roi), None),
            (
                "Confidence",
                metrics
                    .confidence
                    .map_or_else(|| "n/a".to_string(), |c| format!("{c:.0}%")),
                None,
            ),
        ]
    }
}

impl Panel for MetricsPanel<'_> {
    fn kind(&self) -> PanelKind {
        PanelKind::Metrics
    }

    fn render(
        &self,
        builder: &mut CellBuilder,
        position: Position,
    ) -> Result<PanelOutput, ArchboardError> {
        let mut output = PanelOutput::new();
        let content = framed(builder, self.theme, position, "Metrics", &mut output);

        let tiles = self.tiles();
        let rows = tiles.len().div_ceil(COLUMNS);
        let width = ((content.width() - SPACING * (COLUMNS - 1) as f32) / COLUMNS as f32).max(1.0);
        let height = ((content.height() - SPACING * (rows - 1) as f32) / rows as f32)
            .clamp(1.0, MAX_TILE_HEIGHT);

        let placement = GridSpec::new(Size::new(width, height))
            .with_columns(Columns::Fixed(COLUMNS))
            .with_spacing(SPACING, SPACING)
            .with_margin(0.0)
            .place(content, tiles.len())?;

        for (tile, (label, value, rating)) in placement.positions().iter().zip(tiles) {
            let swatch = rating.map_or(self.theme.badge_swatch(), |r| self.theme.rating_swatch(r));
            output.add(
                RenderLayer::Content,
                builder.labeled_rectangle(
                    *tile,
                    &format!("{label}\n{value}"),
                    &self.theme.swatch_box(swatch, 12),
                ),
            );
        }

        if placement.overflows(content) {
            output.add_overflow(GridOverflow {
                panel: PanelKind::Metrics,
                group: "tiles".to_string(),
                children: placement.len(),
            });
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{panel::test_support::*, record::Record};

    #[test]
    fn test_metrics_tiles() {
        let metrics = Metrics::from_record(
            &Record::new()
                .with("complexity", "critical")
                .with("effort", "12 weeks")
                .with("confidence", "0.75"),
        );
        let theme = Theme::default();
        let cells = render_cells(
            &MetricsPanel::new(&metrics, &theme),
            Position::new(640.0, 110.0, 620.0, 220.0),
        );

        let values = values(&cells);
        assert!(values.contains(&"Complexity&#10;Critical".to_string()));
        assert!(values.contains(&"Priority&#10;Medium".to_string()));
        assert!(values.contains(&"Effort&#10;12 weeks".to_string()));
        assert!(values.contains(&"ROI&#10;n/a".to_string()));
        assert!(values.contains(&"Confidence&#10;75%".to_string()));

        let critical = cells
            .iter()
            .find(|cell| cell.value().as_str().starts_with("Complexity"))
            .unwrap();
        assert_eq!(
            critical.style().get("fillColor"),
            Some(theme.rating_swatch(Rating::Critical).fill)
        );
    }

    #[test]
    fn test_metrics_fit_region_without_overflow() {
        let metrics = Metrics::default();
        let theme = Theme::default();
        let mut builder = CellBuilder::new();
        let output = MetricsPanel::new(&metrics, &theme)
            .render(&mut builder, Position::new(960.0, 110.0, 940.0, 300.0))
            .unwrap();
        assert!(output.overflows().is_empty());
        // Frame, title and six tiles.
        assert_eq!(output.cells().len(), 8);
    }
}
