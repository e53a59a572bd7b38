//! Delivery phases as a chain of boxes.

use archboard_core::{
    builder::CellBuilder,
    cell::CellRef,
    draw::RenderLayer,
    geometry::{Position, Size},
};

use crate::{
    error::ArchboardError,
    layout::{Columns, GridSpec, select_anchors},
    panel::{GridOverflow, Panel, PanelKind, PanelOutput, framed, placeholder},
    schema::Phase,
    theme::Theme,
};

const PHASE_HEIGHT: f32 = 50.0;
const MIN_PHASE_WIDTH: f32 = 110.0;
const MAX_PHASE_WIDTH: f32 = 220.0;
const SPACING_X: f32 = 30.0;
const SPACING_Y: f32 = 20.0;

/// Phase boxes in input order, colored by status and joined by chevrons.
///
/// Boxes share the content width evenly within `[110, 220]` and wrap onto
/// further rows when they do not fit.
pub struct TimelinePanel<'a> {
    phases: &'a [Phase],
    theme: &'a Theme,
}

impl<'a> TimelinePanel<'a> {
    pub fn new(phases: &'a [Phase], theme: &'a Theme) -> Self {
        Self { phases, theme }
    }

    fn phase_width(&self, content: Position) -> f32 {
        let count = self.phases.len().max(1) as f32;
        ((content.width() + SPACING_X) / count - SPACING_X).clamp(MIN_PHASE_WIDTH, MAX_PHASE_WIDTH)
    }
}

fn phase_label(phase: &Phase) -> String {
    match phase.window() {
        Some(window) => format!("{}\n{window}", phase.name),
        None => phase.name.clone(),
    }
}

impl Panel for TimelinePanel<'_> {
    fn kind(&self) -> PanelKind {
        PanelKind::Timeline
    }

    fn render(
        &self,
        builder: &mut CellBuilder,
        position: Position,
    ) -> Result<PanelOutput, ArchboardError> {
        let mut output = PanelOutput::new();
        let content = framed(builder, self.theme, position, "Timeline", &mut output);

        if self.phases.is_empty() {
            placeholder(builder, self.theme, content, "No phases defined", &mut output);
            return Ok(output);
        }

        let placement = GridSpec::new(Size::new(self.phase_width(content), PHASE_HEIGHT))
            .with_columns(Columns::FitWidth)
            .with_spacing(SPACING_X, SPACING_Y)
            .with_margin(0.0)
            .place(content, self.phases.len())?;

        let mut boxes: Vec<CellRef> = Vec::with_capacity(self.phases.len());
        for (position, phase) in placement.positions().iter().zip(self.phases) {
            let cell = builder.labeled_rectangle(
                *position,
                &phase_label(phase),
                &self.theme.swatch_box(self.theme.phase_swatch(phase.status), 11),
            );
            boxes.extend(cell.to_ref());
            output.add(RenderLayer::Content, cell);
        }

        let chevron = self.theme.chevron();
        for pair in boxes.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let anchors = select_anchors(from.position(), to.position());
            output.extend(
                RenderLayer::Connector,
                builder.connector(from, to, anchors, &chevron, None),
            );
        }

        if placement.overflows(content) {
            output.add_overflow(GridOverflow {
                panel: PanelKind::Timeline,
                group: "phases".to_string(),
                children: placement.len(),
            });
        }

        Ok(output)
    }
}
