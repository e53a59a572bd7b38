//! Layer colors and connector styles.

use archboard_core::{
    builder::CellBuilder,
    draw::RenderLayer,
    geometry::{Point, Position, Size},
};

use crate::{
    error::ArchboardError,
    layout::{Columns, GridSpec},
    panel::{GridOverflow, LINE_HEIGHT, Panel, PanelKind, PanelOutput, framed, placeholder},
    schema::{Interface, Layer},
    theme::Theme,
};

const ITEM_WIDTH: f32 = 120.0;
const ITEM_HEIGHT: f32 = 18.0;
const SWATCH_WIDTH: f32 = 24.0;
const SAMPLE_LENGTH: f32 = 40.0;

/// A swatch per layer present, then a sample arrow per connector style in
/// use.
pub struct LegendPanel<'a> {
    layers: Vec<Layer>,
    interfaces: &'a [Interface],
    theme: &'a Theme,
}

impl<'a> LegendPanel<'a> {
    pub fn new(layers: Vec<Layer>, interfaces: &'a [Interface], theme: &'a Theme) -> Self {
        Self {
            layers,
            interfaces,
            theme,
        }
    }

    /// Connector samples to show: `(asynchronous, caption)`.
    fn samples(&self) -> Vec<(bool, &'static str)> {
        let mut samples = Vec::new();
        if self.interfaces.iter().any(|i| !i.asynchronous) {
            samples.push((false, "Synchronous"));
        }
        if self.interfaces.iter().any(|i| i.asynchronous) {
            samples.push((true, "Asynchronous"));
        }
        samples
    }
}

impl Panel for LegendPanel<'_> {
    fn kind(&self) -> PanelKind {
        PanelKind::Legend
    }

    fn render(
        &self,
        builder: &mut CellBuilder,
        position: Position,
    ) -> Result<PanelOutput, ArchboardError> {
        let mut output = PanelOutput::new();
        let content = framed(builder, self.theme, position, "Legend", &mut output);

        let samples = self.samples();
        if self.layers.is_empty() && samples.is_empty() {
            placeholder(builder, self.theme, content, "Nothing to show", &mut output);
            return Ok(output);
        }

        let grid = GridSpec::new(Size::new(ITEM_WIDTH, ITEM_HEIGHT))
            .with_columns(Columns::FitWidth)
            .with_spacing(10.0, 6.0)
            .with_margin(0.0);
        let placement = grid.place(content, self.layers.len())?;

        for (item, layer) in placement.positions().iter().zip(&self.layers) {
            let (swatch_area, label_area) = item.split_left(SWATCH_WIDTH + 6.0);
            output.add(
                RenderLayer::Content,
                builder.rectangle(
                    swatch_area.with_width(SWATCH_WIDTH),
                    &self.theme.swatch_box(self.theme.layer_swatch(layer), 10),
                ),
            );
            output.add(
                RenderLayer::Text,
                builder.text(label_area, layer.name(), &self.theme.body_text()),
            );
        }
        if placement.overflows(content) {
            output.add_overflow(GridOverflow {
                panel: PanelKind::Legend,
                group: "layers".to_string(),
                children: placement.len(),
            });
        }

        let samples_top = placement
            .positions()
            .last()
            .map_or(content.y(), |last| last.bottom() + 10.0);
        for (index, (asynchronous, caption)) in samples.into_iter().enumerate() {
            let y = samples_top + index as f32 * (LINE_HEIGHT + 6.0);
            let middle = y + LINE_HEIGHT / 2.0;
            let start = Point::new(content.x(), middle);
            let end = Point::new(content.x() + SAMPLE_LENGTH, middle);
            output.extend(
                RenderLayer::Connector,
                builder.arrow(start, end, &self.theme.connector(asynchronous), None),
            );
            output.add(
                RenderLayer::Text,
                builder.text(
                    Position::new(
                        end.x() + 8.0,
                        y,
                        (content.right() - end.x() - 8.0).max(0.0),
                        LINE_HEIGHT,
                    ),
                    caption,
                    &self.theme.body_text(),
                ),
            );
        }

        Ok(output)
    }
}
