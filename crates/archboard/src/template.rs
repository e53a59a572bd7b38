//! Layout templates: named recipes assigning panel kinds to page regions.
//!
//! Built-in templates are static tables laid out on a 1920×1080 reference
//! page and scaled to the configured page size. Custom templates come from
//! configuration and are used as-is.
//!
//! Slots render in table order. The connections panel is an overlay on the
//! components region and must come after it, since it reads the registry
//! the components panel fills.

use std::{collections::HashSet, fmt};

use log::debug;

use archboard_core::geometry::{Position, Size};

use crate::{config::TemplateConfig, error::ArchboardError, panel::PanelKind};

const REFERENCE_PAGE: (f32, f32) = (1920.0, 1080.0);

type SlotTable = &'static [(PanelKind, f32, f32, f32, f32)];

/// Every panel, dense dashboard layout.
const STANDARD: SlotTable = &[
    (PanelKind::Header, 0.0, 0.0, 1920.0, 90.0),
    (PanelKind::Summary, 20.0, 110.0, 600.0, 220.0),
    (PanelKind::Metrics, 640.0, 110.0, 620.0, 220.0),
    (PanelKind::Governance, 1280.0, 110.0, 620.0, 220.0),
    (PanelKind::Components, 20.0, 350.0, 1040.0, 440.0),
    (PanelKind::Connections, 20.0, 350.0, 1040.0, 440.0),
    (PanelKind::Legend, 1080.0, 350.0, 180.0, 440.0),
    (PanelKind::Risk, 1280.0, 350.0, 300.0, 210.0),
    (PanelKind::Cost, 1600.0, 350.0, 300.0, 210.0),
    (PanelKind::Resourcing, 1280.0, 580.0, 300.0, 210.0),
    (PanelKind::Stakeholders, 1600.0, 580.0, 300.0, 210.0),
    (PanelKind::Timeline, 20.0, 810.0, 920.0, 170.0),
    (PanelKind::Interfaces, 960.0, 810.0, 620.0, 170.0),
    (PanelKind::TechStack, 1600.0, 810.0, 300.0, 170.0),
    (PanelKind::Footer, 0.0, 1000.0, 1920.0, 80.0),
];

/// Components, interfaces and technology only.
const TECHNICAL: SlotTable = &[
    (PanelKind::Header, 0.0, 0.0, 1920.0, 90.0),
    (PanelKind::Components, 20.0, 110.0, 1400.0, 600.0),
    (PanelKind::Connections, 20.0, 110.0, 1400.0, 600.0),
    (PanelKind::Legend, 1440.0, 110.0, 460.0, 180.0),
    (PanelKind::TechStack, 1440.0, 310.0, 460.0, 400.0),
    (PanelKind::Interfaces, 20.0, 730.0, 1880.0, 250.0),
    (PanelKind::Footer, 0.0, 1000.0, 1920.0, 80.0),
];

/// Summary, metrics, risk, cost and resourcing; no component diagram.
const BUSINESS: SlotTable = &[
    (PanelKind::Header, 0.0, 0.0, 1920.0, 90.0),
    (PanelKind::Summary, 20.0, 110.0, 920.0, 300.0),
    (PanelKind::Metrics, 960.0, 110.0, 940.0, 300.0),
    (PanelKind::Risk, 20.0, 430.0, 600.0, 550.0),
    (PanelKind::Cost, 640.0, 430.0, 620.0, 550.0),
    (PanelKind::Resourcing, 1280.0, 430.0, 620.0, 550.0),
    (PanelKind::Footer, 0.0, 1000.0, 1920.0, 80.0),
];

/// The built-in templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Standard,
    Technical,
    Business,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 3] = [Self::Standard, Self::Technical, Self::Business];

    pub fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Technical => "technical",
            Self::Business => "business",
        }
    }

    /// Looks up a built-in template by name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }

    fn table(self) -> SlotTable {
        match self {
            Self::Standard => STANDARD,
            Self::Technical => TECHNICAL,
            Self::Business => BUSINESS,
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One panel placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    kind: PanelKind,
    position: Position,
}

impl Slot {
    pub fn new(kind: PanelKind, position: Position) -> Self {
        Self { kind, position }
    }

    pub fn kind(&self) -> PanelKind {
        self.kind
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

/// A resolved, ordered list of slots.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutTemplate {
    name: String,
    slots: Vec<Slot>,
}

impl LayoutTemplate {
    /// Creates a template from slots without validating it.
    pub fn new(name: impl Into<String>, slots: Vec<Slot>) -> Self {
        Self {
            name: name.into(),
            slots,
        }
    }

    /// Instantiates a built-in template, scaled from the reference page to
    /// `page`.
    pub fn builtin(kind: TemplateKind, page: Size) -> Self {
        let sx = page.width() / REFERENCE_PAGE.0;
        let sy = page.height() / REFERENCE_PAGE.1;
        let slots = kind
            .table()
            .iter()
            .map(|&(panel, x, y, width, height)| {
                Slot::new(panel, Position::new(x * sx, y * sy, width * sx, height * sy))
            })
            .collect();
        Self::new(kind.name(), slots)
    }

    /// Builds a custom template from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ArchboardError::Template`] for an unknown panel kind or an
    /// invalid region.
    pub fn from_config(config: &TemplateConfig) -> Result<Self, ArchboardError> {
        let slots = config
            .slots()
            .iter()
            .map(|slot| {
                let kind = slot.panel().parse::<PanelKind>().map_err(|err| {
                    ArchboardError::Template(format!("template `{}`: {err}", config.name()))
                })?;
                let (x, y, width, height) = slot.region();
                let position = Position::checked(x, y, width, height).map_err(|err| {
                    ArchboardError::Template(format!(
                        "template `{}`, slot `{kind}`: {err}",
                        config.name()
                    ))
                })?;
                Ok(Slot::new(kind, position))
            })
            .collect::<Result<Vec<_>, ArchboardError>>()?;
        Ok(Self::new(config.name(), slots))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn contains(&self, kind: PanelKind) -> bool {
        self.slots.iter().any(|slot| slot.kind == kind)
    }

    /// Checks that the template can be rendered.
    ///
    /// # Errors
    ///
    /// Returns [`ArchboardError::Template`] when the template is empty, lists
    /// a panel kind twice, or places the connections panel before or without
    /// the components panel.
    pub fn validate(&self) -> Result<(), ArchboardError> {
        if self.slots.is_empty() {
            return Err(self.error("has no slots"));
        }

        let mut seen = HashSet::new();
        for slot in &self.slots {
            if !seen.insert(slot.kind) {
                return Err(self.error(&format!("lists panel `{}` more than once", slot.kind)));
            }
            if slot.kind == PanelKind::Connections && !seen.contains(&PanelKind::Components) {
                return Err(self.error("places `connections` before or without `components`"));
            }
        }

        debug!(template = self.name.as_str(), slots = self.slots.len(); "Template validated");
        Ok(())
    }

    /// Returns pairs of non-overlay slots whose regions overlap.
    pub fn overlaps(&self) -> Vec<(PanelKind, PanelKind)> {
        let regions: Vec<&Slot> = self
            .slots
            .iter()
            .filter(|slot| !slot.kind.is_overlay())
            .collect();

        let mut pairs = Vec::new();
        for (i, a) in regions.iter().enumerate() {
            for b in &regions[i + 1..] {
                if a.position.intersects(&b.position) {
                    pairs.push((a.kind, b.kind));
                }
            }
        }
        pairs
    }

    fn error(&self, message: &str) -> ArchboardError {
        ArchboardError::Template(format!("template `{}` {message}", self.name))
    }
}
