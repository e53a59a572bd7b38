//! Full-width title bar.

use archboard_core::{
    builder::CellBuilder,
    draw::{FontStyle, RenderLayer},
    geometry::Position,
};

use crate::{
    error::ArchboardError,
    panel::{Panel, PanelKind, PanelOutput},
    schema::Summary,
    theme::Theme,
};

const MARGIN: f32 = 20.0;
const BADGE_WIDTH: f32 = 160.0;
const BADGE_HEIGHT: f32 = 32.0;

/// Subject id and name, domain, and a status badge on the right.
pub struct HeaderPanel<'a> {
    summary: &'a Summary,
    theme: &'a Theme,
}

impl<'a> HeaderPanel<'a> {
    pub fn new(summary: &'a Summary, theme: &'a Theme) -> Self {
        Self { summary, theme }
    }
}

impl Panel for HeaderPanel<'_> {
    fn kind(&self) -> PanelKind {
        PanelKind::Header
    }

    fn render(
        &self,
        builder: &mut CellBuilder,
        position: Position,
    ) -> Result<PanelOutput, ArchboardError> {
        let mut output = PanelOutput::new();
        let swatch = self.theme.header_swatch();

        output.add(
            RenderLayer::Background,
            builder.rectangle(position, &self.theme.strip(swatch)),
        );

        let text_width = (position.width() - 3.0 * MARGIN - BADGE_WIDTH).max(0.0);
        let (title_area, subtitle_area) = Position::new(
            position.x() + MARGIN,
            position.y(),
            text_width,
            position.height(),
        )
        .split_top(position.height() * 0.6);

        output.add(
            RenderLayer::Text,
            builder.text(
                title_area,
                &self.summary.title(),
                &self.theme.strip_text(swatch, 24, FontStyle::BOLD),
            ),
        );
        if let Some(domain) = &self.summary.domain {
            output.add(
                RenderLayer::Text,
                builder.text(
                    subtitle_area.with_height(subtitle_area.height() * 0.7),
                    domain,
                    &self.theme.strip_text(swatch, 14, FontStyle::NORMAL),
                ),
            );
        }

        let badge = Position::new(
            position.right() - MARGIN - BADGE_WIDTH,
            position.center_y() - BADGE_HEIGHT / 2.0,
            BADGE_WIDTH,
            BADGE_HEIGHT,
        );
        output.add(
            RenderLayer::Content,
            builder.labeled_rectangle(
                badge,
                &self.summary.status,
                &self.theme.swatch_box(self.theme.badge_swatch(), 12),
            ),
        );

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{panel::test_support::*, record::Record};

    #[test]
    fn test_header_shows_title_domain_and_status() {
        let summary = Summary::from_record(
            &Record::new()
                .with("id", "UC-12")
                .with("name", "Claims & Payments")
                .with("domain", "Insurance")
                .with("status", "Approved"),
        );
        let theme = Theme::default();
        let panel = HeaderPanel::new(&summary, &theme);
        let cells = render_cells(&panel, Position::new(0.0, 0.0, 1920.0, 90.0));

        let values = values(&cells);
        assert!(values.contains(&"UC-12: Claims &amp; Payments".to_string()));
        assert!(values.contains(&"Insurance".to_string()));
        assert!(values.contains(&"Approved".to_string()));
        assert_eq!(panel.kind(), PanelKind::Header);
    }

    #[test]
    fn test_header_without_domain() {
        let summary = Summary::default();
        let theme = Theme::default();
        let cells = render_cells(
            &HeaderPanel::new(&summary, &theme),
            Position::new(0.0, 0.0, 1920.0, 90.0),
        );
        // Bar, title and status badge.
        assert_eq!(cells.len(), 3);
        let badge = cells
            .iter()
            .filter_map(|cell| cell.position())
            .find(|p| p.width() == BADGE_WIDTH)
            .unwrap();
        assert_eq!(badge.right(), 1900.0);
    }
}
