//! Team size, duration and role badges.

use archboard_core::{builder::CellBuilder, draw::RenderLayer, geometry::Position};

use crate::{
    error::ArchboardError,
    panel::{LINE_HEIGHT, Panel, PanelKind, PanelOutput, badges, framed, placeholder},
    schema::Resourcing,
    theme::Theme,
};

pub struct ResourcingPanel<'a> {
    resourcing: &'a Resourcing,
    theme: &'a Theme,
}

impl<'a> ResourcingPanel<'a> {
    pub fn new(resourcing: &'a Resourcing, theme: &'a Theme) -> Self {
        Self { resourcing, theme }
    }

    fn details(&self) -> String {
        let resourcing = self.resourcing;
        let fte = resourcing
            .fte
            .map_or_else(|| "n/a".to_string(), |fte| format!("{fte}"));
        format!(
            "FTE: {fte}\nTeam: {}\nDuration: {}",
            resourcing.team.as_deref().unwrap_or("n/a"),
            resourcing.duration.as_deref().unwrap_or("n/a"),
        )
    }
}

impl Panel for ResourcingPanel<'_> {
    fn kind(&self) -> PanelKind {
        PanelKind::Resourcing
    }

    fn render(
        &self,
        builder: &mut CellBuilder,
        position: Position,
    ) -> Result<PanelOutput, ArchboardError> {
        let mut output = PanelOutput::new();
        let content = framed(builder, self.theme, position, "Resourcing", &mut output);

        let (details, rest) = content.split_top(LINE_HEIGHT * 3.0 + 6.0);
        output.add(
            RenderLayer::Text,
            builder.text(details, &self.details(), &self.theme.body_text()),
        );

        let (heading, role_area) = rest.split_top(LINE_HEIGHT + 4.0);
        output.add(
            RenderLayer::Text,
            builder.text(heading, "Roles", &self.theme.label_text()),
        );
        if self.resourcing.roles.is_empty() {
            placeholder(builder, self.theme, role_area, "No roles listed", &mut output);
        } else {
            badges(
                builder,
                self.theme,
                PanelKind::Resourcing,
                role_area,
                &self.resourcing.roles,
                &mut output,
            )?;
        }

        Ok(output)
    }
}
