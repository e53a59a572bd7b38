//! Overall risk banner with risks and mitigations side by side.

use archboard_core::{builder::CellBuilder, draw::RenderLayer, geometry::Position};

use crate::{
    error::ArchboardError,
    panel::{LINE_HEIGHT, Panel, PanelKind, PanelOutput, bullets, framed},
    schema::RiskProfile,
    theme::Theme,
};

const BANNER_HEIGHT: f32 = 26.0;
const GAP: f32 = 10.0;

pub struct RiskPanel<'a> {
    risk: &'a RiskProfile,
    theme: &'a Theme,
}

impl<'a> RiskPanel<'a> {
    pub fn new(risk: &'a RiskProfile, theme: &'a Theme) -> Self {
        Self { risk, theme }
    }

    fn column(
        &self,
        builder: &mut CellBuilder,
        area: Position,
        heading: &str,
        items: &[String],
        output: &mut PanelOutput,
    ) {
        let (heading_area, body) = area.split_top(LINE_HEIGHT + 4.0);
        output.add(
            RenderLayer::Text,
            builder.text(heading_area, heading, &self.theme.label_text()),
        );
        let cell = if items.is_empty() {
            builder.text(body, "None recorded", &self.theme.muted_text())
        } else {
            builder.text(body, &bullets(items), &self.theme.body_text())
        };
        output.add(RenderLayer::Text, cell);
    }
}

impl Panel for RiskPanel<'_> {
    fn kind(&self) -> PanelKind {
        PanelKind::Risk
    }

    fn render(
        &self,
        builder: &mut CellBuilder,
        position: Position,
    ) -> Result<PanelOutput, ArchboardError> {
        let mut output = PanelOutput::new();
        let content = framed(builder, self.theme, position, "Risk", &mut output);

        let (banner, rest) = content.split_top(BANNER_HEIGHT);
        output.add(
            RenderLayer::Content,
            builder.labeled_rectangle(
                banner,
                &format!("Overall risk: {}", self.risk.overall),
                &self.theme.swatch_box(self.theme.rating_swatch(self.risk.overall), 12),
            ),
        );

        let (_, columns) = rest.split_top(GAP);
        let column_width = ((columns.width() - GAP) / 2.0).max(0.0);
        let (left, right) = columns.split_left(column_width);
        let (_, right) = right.split_left(GAP);

        self.column(builder, left, "Risks", &self.risk.risks, &mut output);
        self.column(
            builder,
            right,
            "Mitigations",
            &self.risk.mitigations,
            &mut output,
        );

        Ok(output)
    }
}
