//! Ownership, approval and compliance badges.

use archboard_core::{builder::CellBuilder, draw::RenderLayer, geometry::Position};

use crate::{
    error::ArchboardError,
    panel::{LINE_HEIGHT, Panel, PanelKind, PanelOutput, badges, framed, placeholder},
    schema::Governance,
    theme::Theme,
};

pub struct GovernancePanel<'a> {
    governance: &'a Governance,
    theme: &'a Theme,
}

impl<'a> GovernancePanel<'a> {
    pub fn new(governance: &'a Governance, theme: &'a Theme) -> Self {
        Self { governance, theme }
    }

    fn details(&self) -> String {
        let field = |value: &Option<String>| value.as_deref().unwrap_or("n/a").to_string();
        let governance = self.governance;
        [
            ("Owner", field(&governance.owner)),
            ("Sponsor", field(&governance.sponsor)),
            ("Approval", field(&governance.approval_status)),
            ("Review cycle", field(&governance.review_cycle)),
        ]
        .iter()
        .map(|(label, value)| format!("{label}: {value}"))
        .collect::<Vec<_>>()
        .join("\n")
    }
}

impl Panel for GovernancePanel<'_> {
    fn kind(&self) -> PanelKind {
        PanelKind::Governance
    }

    fn render(
        &self,
        builder: &mut CellBuilder,
        position: Position,
    ) -> Result<PanelOutput, ArchboardError> {
        let mut output = PanelOutput::new();
        let content = framed(builder, self.theme, position, "Governance", &mut output);

        let (details, rest) = content.split_top(LINE_HEIGHT * 4.0 + 6.0);
        output.add(
            RenderLayer::Text,
            builder.text(details, &self.details(), &self.theme.body_text()),
        );

        let (heading, badge_area) = rest.split_top(LINE_HEIGHT + 4.0);
        output.add(
            RenderLayer::Text,
            builder.text(heading, "Compliance", &self.theme.label_text()),
        );
        if self.governance.compliance.is_empty() {
            placeholder(
                builder,
                self.theme,
                badge_area,
                "No compliance requirements recorded",
                &mut output,
            );
        } else {
            badges(
                builder,
                self.theme,
                PanelKind::Governance,
                badge_area,
                &self.governance.compliance,
                &mut output,
            )?;
        }

        Ok(output)
    }
}
