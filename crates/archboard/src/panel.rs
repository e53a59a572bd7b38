//! Panels: self-contained renderers for one section of the diagram.
//!
//! A [`Panel`] is constructed from borrowed, already-typed data and the
//! theme. [`Panel::render`] draws into its assigned region with the shared
//! [`CellBuilder`] and returns a [`PanelOutput`]: the layered cells, plus any
//! registry fragment or findings the build report should carry.
//!
//! Panels never fail because of data; missing fields are defaulted when the
//! schemas are built. A panel fails only on layout programming errors, which
//! abort the build.

mod components;
mod connections;
mod cost;
mod footer;
mod governance;
mod header;
mod interfaces;
mod legend;
mod metrics;
mod resourcing;
mod risk;
mod stakeholders;
mod summary;
mod tech_stack;
mod timeline;

pub use components::ComponentsPanel;
pub use connections::ConnectionsPanel;
pub use cost::CostPanel;
pub use footer::FooterPanel;
pub use governance::GovernancePanel;
pub use header::HeaderPanel;
pub use interfaces::InterfacesPanel;
pub use legend::LegendPanel;
pub use metrics::MetricsPanel;
pub use resourcing::ResourcingPanel;
pub use risk::RiskPanel;
pub use stakeholders::StakeholdersPanel;
pub use summary::SummaryPanel;
pub use tech_stack::TechStackPanel;
pub use timeline::TimelinePanel;

use std::{fmt, str::FromStr};

use log::warn;

use archboard_core::{
    builder::CellBuilder,
    cell::Cell,
    draw::{LayeredCells, RenderLayer},
    geometry::{Insets, Position, Size},
};

use crate::{
    error::ArchboardError,
    layout::{Columns, GridSpec},
    registry::PositionRegistry,
    theme::Theme,
};

/// Height of the title band at the top of a framed panel.
pub(crate) const TITLE_HEIGHT: f32 = 28.0;
/// Inner padding of a framed panel.
pub(crate) const PADDING: f32 = 10.0;
/// Height of one line of body text.
pub(crate) const LINE_HEIGHT: f32 = 15.0;

/// The semantic concern a panel renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKind {
    Header,
    Summary,
    Metrics,
    Governance,
    Risk,
    Cost,
    Resourcing,
    Stakeholders,
    Timeline,
    Components,
    Connections,
    Interfaces,
    TechStack,
    Legend,
    Footer,
}

impl PanelKind {
    pub const ALL: [PanelKind; 15] = [
        PanelKind::Header,
        PanelKind::Summary,
        PanelKind::Metrics,
        PanelKind::Governance,
        PanelKind::Risk,
        PanelKind::Cost,
        PanelKind::Resourcing,
        PanelKind::Stakeholders,
        PanelKind::Timeline,
        PanelKind::Components,
        PanelKind::Connections,
        PanelKind::Interfaces,
        PanelKind::TechStack,
        PanelKind::Legend,
        PanelKind::Footer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Summary => "summary",
            Self::Metrics => "metrics",
            Self::Governance => "governance",
            Self::Risk => "risk",
            Self::Cost => "cost",
            Self::Resourcing => "resourcing",
            Self::Stakeholders => "stakeholders",
            Self::Timeline => "timeline",
            Self::Components => "components",
            Self::Connections => "connections",
            Self::Interfaces => "interfaces",
            Self::TechStack => "tech_stack",
            Self::Legend => "legend",
            Self::Footer => "footer",
        }
    }

    /// Returns `true` for panels drawn over another panel's region rather
    /// than in a region of their own.
    pub fn is_overlay(self) -> bool {
        matches!(self, Self::Connections)
    }
}

impl fmt::Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PanelKind {
    type Err = ArchboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| ArchboardError::Template(format!("unknown panel kind `{s}`")))
    }
}

/// An interface whose connector could not be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedConnection {
    /// Interface id, or `source->target` when it has none.
    pub interface: String,
    /// Endpoint ids missing from the registry.
    pub missing: Vec<String>,
}

/// A grid whose children run past their parent region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridOverflow {
    pub panel: PanelKind,
    /// The group inside the panel, such as a layer lane.
    pub group: String,
    pub children: usize,
}

/// What a panel produced.
#[derive(Debug, Default)]
pub struct PanelOutput {
    cells: LayeredCells,
    registry: Option<PositionRegistry>,
    dropped: Vec<DroppedConnection>,
    overflows: Vec<GridOverflow>,
}

impl PanelOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, layer: RenderLayer, cell: Cell) {
        self.cells.add_to_layer(layer, cell);
    }

    pub fn extend(&mut self, layer: RenderLayer, cells: impl IntoIterator<Item = Cell>) {
        self.cells.extend_layer(layer, cells);
    }

    pub fn set_registry(&mut self, registry: PositionRegistry) {
        self.registry = Some(registry);
    }

    pub fn add_dropped(&mut self, dropped: DroppedConnection) {
        self.dropped.push(dropped);
    }

    pub fn add_overflow(&mut self, overflow: GridOverflow) {
        warn!(
            panel = overflow.panel.name(),
            group = overflow.group.as_str(),
            children = overflow.children;
            "Grid overflows its region"
        );
        self.overflows.push(overflow);
    }

    pub fn cells(&self) -> &LayeredCells {
        &self.cells
    }

    pub fn registry(&self) -> Option<&PositionRegistry> {
        self.registry.as_ref()
    }

    pub fn dropped(&self) -> &[DroppedConnection] {
        &self.dropped
    }

    pub fn overflows(&self) -> &[GridOverflow] {
        &self.overflows
    }

    /// Takes the registry fragment out, leaving `None`.
    pub fn take_registry(&mut self) -> Option<PositionRegistry> {
        self.registry.take()
    }

    pub fn into_cells(self) -> LayeredCells {
        self.cells
    }
}

/// A renderer for one section of the diagram.
pub trait Panel {
    fn kind(&self) -> PanelKind;

    /// Draws the panel into `position`.
    ///
    /// # Errors
    ///
    /// Returns [`ArchboardError::Layout`] on layout programming errors.
    fn render(
        &self,
        builder: &mut CellBuilder,
        position: Position,
    ) -> Result<PanelOutput, ArchboardError>;
}

/// Draws the panel background and title; returns the content area.
pub(crate) fn framed(
    builder: &mut CellBuilder,
    theme: &Theme,
    position: Position,
    title: &str,
    output: &mut PanelOutput,
) -> Position {
    output.add(
        RenderLayer::Background,
        builder.rectangle(position, &theme.panel_frame()),
    );
    let title_area = position
        .inset(Insets::symmetric(0.0, PADDING))
        .with_height(TITLE_HEIGHT);
    output.add(
        RenderLayer::Text,
        builder.text(title_area, title, &theme.panel_title()),
    );
    position.inset(Insets::new(TITLE_HEIGHT, PADDING, PADDING, PADDING))
}

/// Draws muted placeholder text for an empty section.
pub(crate) fn placeholder(
    builder: &mut CellBuilder,
    theme: &Theme,
    area: Position,
    message: &str,
    output: &mut PanelOutput,
) {
    let area = area.with_height(area.height().min(LINE_HEIGHT * 2.0));
    output.add(
        RenderLayer::Text,
        builder.text(area, message, &theme.muted_text()),
    );
}

/// Formats items as a bulleted list.
pub(crate) fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("• {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Estimated badge width for a set of labels, within `[min, max]`.
fn badge_width(labels: &[String], min: f32, max: f32) -> f32 {
    let longest = labels
        .iter()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0);
    (longest as f32 * 6.5 + 20.0).clamp(min, max.max(min))
}

/// Lays out labels as badges on a fit-width grid inside `area`.
///
/// Returns the bottom of the last badge row, or `area.y()` when there are
/// no labels.
pub(crate) fn badges(
    builder: &mut CellBuilder,
    theme: &Theme,
    kind: PanelKind,
    area: Position,
    labels: &[String],
    output: &mut PanelOutput,
) -> Result<f32, ArchboardError> {
    if labels.is_empty() {
        return Ok(area.y());
    }

    let child = Size::new(badge_width(labels, 70.0, area.width()), 24.0);
    let spec = GridSpec::new(child)
        .with_columns(Columns::FitWidth)
        .with_spacing(8.0, 8.0)
        .with_margin(0.0);
    let placement = spec.place(area, labels.len())?;

    let definition = theme.badge();
    for (position, label) in placement.positions().iter().zip(labels) {
        output.add(
            RenderLayer::Content,
            builder.labeled_rectangle(*position, label, &definition),
        );
    }

    if placement.overflows(area) {
        output.add_overflow(GridOverflow {
            panel: kind,
            group: "badges".to_string(),
            children: labels.len(),
        });
    }

    Ok(placement
        .positions()
        .last()
        .map_or(area.y(), |last| last.bottom()))
}
