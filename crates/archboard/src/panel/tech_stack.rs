//! Technology badges.

use archboard_core::{builder::CellBuilder, geometry::Position};

use crate::{
    error::ArchboardError,
    panel::{Panel, PanelKind, PanelOutput, badges, framed, placeholder},
    schema::TechStack,
    theme::Theme,
};

pub struct TechStackPanel<'a> {
    tech_stack: &'a TechStack,
    theme: &'a Theme,
}

impl<'a> TechStackPanel<'a> {
    pub fn new(tech_stack: &'a TechStack, theme: &'a Theme) -> Self {
        Self { tech_stack, theme }
    }
}

impl Panel for TechStackPanel<'_> {
    fn kind(&self) -> PanelKind {
        PanelKind::TechStack
    }

    fn render(
        &self,
        builder: &mut CellBuilder,
        position: Position,
    ) -> Result<PanelOutput, ArchboardError> {
        let mut output = PanelOutput::new();
        let content = framed(builder, self.theme, position, "Technology", &mut output);

        if self.tech_stack.items.is_empty() {
            placeholder(
                builder,
                self.theme,
                content,
                "No technologies listed",
                &mut output,
            );
        } else {
            badges(
                builder,
                self.theme,
                PanelKind::TechStack,
                content,
                &self.tech_stack.items,
                &mut output,
            )?;
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{panel::test_support::*, record::Record};

    #[test]
    fn test_tech_stack_badges_stay_in_region() {
        let tech_stack = TechStack::from_record(
            &Record::new().with("technologies", "Rust; PostgreSQL; Kafka; Kubernetes"),
        );
        let theme = Theme::default();
        let region = Position::new(1480.0, 700.0, 420.0, 150.0);
        let cells = render_cells(&TechStackPanel::new(&tech_stack, &theme), region);

        assert_eq!(values(&cells).len(), 5);
        for position in cells.iter().filter_map(|cell| cell.position()) {
            assert!(region.contains(&position), "{position:?} outside region");
        }
    }

    #[test]
    fn test_tech_stack_placeholder() {
        let tech_stack = TechStack::default();
        let theme = Theme::default();
        let cells = render_cells(
            &TechStackPanel::new(&tech_stack, &theme),
            Position::new(0.0, 0.0, 420.0, 150.0),
        );
        assert_eq!(values(&cells), vec!["Technology", "No technologies listed"]);
    }
}
