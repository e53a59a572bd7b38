//! Narrative summary: description, objective and business value.

use archboard_core::{builder::CellBuilder, draw::RenderLayer, geometry::Position};

use crate::{
    error::ArchboardError,
    panel::{LINE_HEIGHT, Panel, PanelKind, PanelOutput, framed},
    schema::Summary,
    theme::Theme,
};

pub struct SummaryPanel<'a> {
    summary: &'a Summary,
    theme: &'a Theme,
}

impl<'a> SummaryPanel<'a> {
    pub fn new(summary: &'a Summary, theme: &'a Theme) -> Self {
        Self { summary, theme }
    }
}

impl Panel for SummaryPanel<'_> {
    fn kind(&self) -> PanelKind {
        PanelKind::Summary
    }

    fn render(
        &self,
        builder: &mut CellBuilder,
        position: Position,
    ) -> Result<PanelOutput, ArchboardError> {
        let mut output = PanelOutput::new();
        let content = framed(builder, self.theme, position, "Summary", &mut output);

        let sections = [
            ("Description", &self.summary.description),
            ("Objective", &self.summary.objective),
            ("Business value", &self.summary.business_value),
        ];
        let section_height = content.height() / sections.len() as f32;

        let mut area = content;
        for (heading, body) in sections {
            let (section, rest) = area.split_top(section_height);
            area = rest;

            let (heading_area, body_area) = section.split_top(LINE_HEIGHT);
            output.add(
                RenderLayer::Text,
                builder.text(heading_area, heading, &self.theme.label_text()),
            );
            let cell = match body {
                Some(text) => builder.text(body_area, text, &self.theme.body_text()),
                None => builder.text(body_area, "Not specified", &self.theme.muted_text()),
            };
            output.add(RenderLayer::Text, cell);
        }

        Ok(output)
    }
}
