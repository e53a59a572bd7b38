//! Stakeholder badges.

use archboard_core::{builder::CellBuilder, geometry::Position};

use crate::{
    error::ArchboardError,
    panel::{Panel, PanelKind, PanelOutput, badges, framed, placeholder},
    schema::Stakeholders,
    theme::Theme,
};

pub struct StakeholdersPanel<'a> {
    stakeholders: &'a Stakeholders,
    theme: &'a Theme,
}

impl<'a> StakeholdersPanel<'a> {
    pub fn new(stakeholders: &'a Stakeholders, theme: &'a Theme) -> Self {
        Self {
            stakeholders,
            theme,
        }
    }
}

impl Panel for StakeholdersPanel<'_> {
    fn kind(&self) -> PanelKind {
        PanelKind::Stakeholders
    }

    fn render(
        &self,
        builder: &mut CellBuilder,
        position: Position,
    ) -> Result<PanelOutput, ArchboardError> {
        let mut output = PanelOutput::new();
        let content = framed(builder, self.theme, position, "Stakeholders", &mut output);

        if self.stakeholders.names.is_empty() {
            placeholder(
                builder,
                self.theme,
                content,
                "No stakeholders identified",
                &mut output,
            );
        } else {
            badges(
                builder,
                self.theme,
                PanelKind::Stakeholders,
                content,
                &self.stakeholders.names,
                &mut output,
            )?;
        }

        Ok(output)
    }
}
