//! Capital, operating and total cost as proportional bars.

use archboard_core::{builder::CellBuilder, draw::RenderLayer, geometry::Position};

use crate::{
    error::ArchboardError,
    panel::{Panel, PanelKind, PanelOutput, framed, placeholder},
    schema::CostModel,
    theme::Theme,
};

const ROW_HEIGHT: f32 = 22.0;
const ROW_GAP: f32 = 8.0;
const LABEL_WIDTH: f32 = 60.0;
const VALUE_WIDTH: f32 = 80.0;

/// One row per amount. Bars are scaled against the largest amount.
pub struct CostPanel<'a> {
    cost: &'a CostModel,
    theme: &'a Theme,
}

impl<'a> CostPanel<'a> {
    pub fn new(cost: &'a CostModel, theme: &'a Theme) -> Self {
        Self { cost, theme }
    }

    fn rows(&self) -> [(&'static str, Option<f64>); 3] {
        [
            ("CapEx", self.cost.capex),
            ("OpEx", self.cost.opex),
            ("Total", self.cost.total()),
        ]
    }
}

impl Panel for CostPanel<'_> {
    fn kind(&self) -> PanelKind {
        PanelKind::Cost
    }

    fn render(
        &self,
        builder: &mut CellBuilder,
        position: Position,
    ) -> Result<PanelOutput, ArchboardError> {
        let mut output = PanelOutput::new();
        let content = framed(builder, self.theme, position, "Cost", &mut output);

        if self.cost.total().is_none() {
            placeholder(builder, self.theme, content, "No cost data", &mut output);
            return Ok(output);
        }

        let rows = self.rows();
        let scale = rows
            .iter()
            .filter_map(|(_, amount)| *amount)
            .fold(0.0_f64, |max, amount| max.max(amount.abs()));

        let mut area = content;
        for (index, (label, amount)) in rows.into_iter().enumerate() {
            let (row, rest) = area.split_top(ROW_HEIGHT);
            area = rest.split_top(ROW_GAP).1;

            let (label_area, rest) = row.split_left(LABEL_WIDTH);
            let track_width = (rest.width() - VALUE_WIDTH).max(0.0);
            let (track, value_area) = rest.split_left(track_width);

            output.add(
                RenderLayer::Text,
                builder.text(label_area, label, &self.theme.label_text()),
            );
            output.add(
                RenderLayer::Frame,
                builder.rectangle(track, &self.theme.bar_track()),
            );

            let value = match amount {
                Some(amount) => {
                    let ratio = if scale > 0.0 { amount.abs() / scale } else { 0.0 };
                    let fill_width = track.width() * ratio as f32;
                    if fill_width > 0.0 {
                        output.add(
                            RenderLayer::Content,
                            builder.rectangle(
                                track.with_width(fill_width),
                                &self.theme.bar_fill(index),
                            ),
                        );
                    }
                    self.cost.format_amount(amount)
                }
                None => "n/a".to_string(),
            };
            output.add(
                RenderLayer::Text,
                builder.text(value_area, &value, &self.theme.body_text()),
            );
        }

        Ok(output)
    }
}
