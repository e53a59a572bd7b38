//! The build pipeline: data bundle in, mxGraph document out.
//!
//! A build moves through four stages, each logged when entered:
//!
//! 1. `Idle`: the template is resolved and validated.
//! 2. `DataLoaded`: the bundle is converted into typed schemas.
//! 3. `PanelsRendered`: every slot is rendered in template order with one
//!    shared [`CellBuilder`] and one [`PositionRegistry`].
//! 4. `Serialized`: the document is written to XML.
//!
//! The builder and registry are created per build, so an [`Assembler`] can be
//! reused for any number of subjects.

use log::{debug, info, trace, warn};

use archboard_core::{
    builder::CellBuilder,
    document::{DiagramDocument, DocumentHeader},
    draw::LayeredCells,
    geometry::Size,
};

use crate::{
    bundle::DataBundle,
    config::AppConfig,
    error::ArchboardError,
    panel::{
        ComponentsPanel, ConnectionsPanel, CostPanel, DroppedConnection, FooterPanel,
        GovernancePanel, GridOverflow, HeaderPanel, InterfacesPanel, LegendPanel, MetricsPanel,
        Panel, PanelKind, ResourcingPanel, RiskPanel, StakeholdersPanel, SummaryPanel,
        TechStackPanel, TimelinePanel,
    },
    registry::PositionRegistry,
    schema::SubjectData,
    template::{LayoutTemplate, TemplateKind},
    theme::Theme,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Idle,
    DataLoaded,
    PanelsRendered,
    Serialized,
}

/// Cells contributed by one rendered panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelReport {
    pub kind: PanelKind,
    pub cells: usize,
}

/// What happened during a build, beyond the document itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildReport {
    template: String,
    panels: Vec<PanelReport>,
    dropped_connections: Vec<DroppedConnection>,
    overlaps: Vec<(PanelKind, PanelKind)>,
    grid_overflows: Vec<GridOverflow>,
}

impl BuildReport {
    /// Name of the template the build used.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Rendered panels in template order.
    pub fn panels(&self) -> &[PanelReport] {
        &self.panels
    }

    /// Interfaces left out because an endpoint was not registered.
    pub fn dropped_connections(&self) -> &[DroppedConnection] {
        &self.dropped_connections
    }

    /// Pairs of template slots whose regions overlap.
    pub fn overlaps(&self) -> &[(PanelKind, PanelKind)] {
        &self.overlaps
    }

    pub fn grid_overflows(&self) -> &[GridOverflow] {
        &self.grid_overflows
    }

    /// Returns the cell count of a rendered panel.
    pub fn cells_for(&self, kind: PanelKind) -> Option<usize> {
        self.panels
            .iter()
            .find(|panel| panel.kind == kind)
            .map(|panel| panel.cells)
    }

    /// Returns `true` when nothing was dropped, overlapped or overflowed.
    pub fn is_clean(&self) -> bool {
        self.dropped_connections.is_empty()
            && self.overlaps.is_empty()
            && self.grid_overflows.is_empty()
    }
}

/// A finished build: the document and its report.
#[derive(Debug, Clone, PartialEq)]
pub struct Build {
    document: DiagramDocument,
    report: BuildReport,
}

impl Build {
    pub fn document(&self) -> &DiagramDocument {
        &self.document
    }

    pub fn report(&self) -> &BuildReport {
        &self.report
    }

    pub fn into_parts(self) -> (DiagramDocument, BuildReport) {
        (self.document, self.report)
    }

    /// Serializes the document to draw.io XML.
    ///
    /// # Errors
    ///
    /// Returns [`ArchboardError::Core`] if serialization fails.
    pub fn to_xml(&self) -> Result<String, ArchboardError> {
        let xml = self.document.to_xml()?;
        info!(stage:? = Stage::Serialized, bytes = xml.len(); "Document serialized");
        Ok(xml)
    }
}

/// Assembles diagrams from data bundles.
///
/// # Examples
///
/// ```
/// use archboard::{Assembler, DataBundle, record::Record};
///
/// let bundle = DataBundle {
///     summary: Record::new().with("id", "UC-1").with("name", "Claims"),
///     components: vec![
///         Record::new().with("id", "web").with("layer", "business"),
///         Record::new().with("id", "api"),
///     ],
///     interfaces: vec![Record::new().with("source", "web").with("target", "api")],
///     ..DataBundle::default()
/// };
///
/// let assembler = Assembler::default();
/// let build = assembler.build("technical", &bundle).unwrap();
/// assert_eq!(build.document().edges().count(), 1);
/// assert!(build.report().dropped_connections().is_empty());
///
/// let xml = build.to_xml().unwrap();
/// assert!(xml.starts_with("<mxfile"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Assembler {
    config: AppConfig,
}

impl Assembler {
    /// Creates an assembler with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Resolves a template by name: built-in templates first, then custom
    /// templates from the configuration. Names match case-insensitively and
    /// ignore surrounding whitespace. Built-ins are scaled to the configured
    /// page.
    ///
    /// # Errors
    ///
    /// Returns [`ArchboardError::Template`] for an unknown name or a custom
    /// template that names an unknown panel, and [`ArchboardError::Config`]
    /// for an invalid page size.
    pub fn template(&self, name: &str) -> Result<LayoutTemplate, ArchboardError> {
        if let Some(kind) = TemplateKind::from_name(name) {
            return Ok(LayoutTemplate::builtin(kind, self.config.page().size()?));
        }

        let wanted = name.trim();
        self.config
            .templates()
            .iter()
            .find(|template| template.name().trim().eq_ignore_ascii_case(wanted))
            .map(LayoutTemplate::from_config)
            .unwrap_or_else(|| {
                Err(ArchboardError::Template(format!(
                    "unknown template `{name}`"
                )))
            })
    }

    /// Returns the template a bundle asks for, or the configured default.
    pub fn template_name_for<'a>(&'a self, bundle: &'a DataBundle) -> &'a str {
        bundle
            .template
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| self.config.build().default_template())
    }

    /// Builds the document for one bundle.
    ///
    /// # Errors
    ///
    /// Returns [`ArchboardError::Template`] if the template is unknown or
    /// invalid, [`ArchboardError::Config`] for invalid configuration values
    /// and [`ArchboardError::Layout`] if a panel fails to lay out. A failed
    /// build produces no document.
    pub fn build(
        &self,
        template_name: &str,
        bundle: &DataBundle,
    ) -> Result<Build, ArchboardError> {
        info!(stage:? = Stage::Idle, template = template_name; "Starting build");
        let page = self.config.page().size()?;
        let template = self.template(template_name)?;
        template.validate()?;
        let theme = Theme::from_config(self.config.style())?;

        let mut report = BuildReport {
            template: template.name().to_string(),
            ..BuildReport::default()
        };
        if self.config.build().check_overlaps() {
            for (a, b) in template.overlaps() {
                warn!(
                    template = template.name(),
                    first = a.name(),
                    second = b.name();
                    "Template regions overlap"
                );
                report.overlaps.push((a, b));
            }
        }

        let data = SubjectData::from_bundle(bundle);
        info!(
            stage:? = Stage::DataLoaded,
            components = data.components.len(),
            interfaces = data.interfaces.len();
            "Subject data loaded"
        );

        let mut builder = CellBuilder::new();
        let mut registry = PositionRegistry::new();
        let mut cells = LayeredCells::new();

        for slot in template.slots() {
            let mut output = {
                let panel = panel_for(slot.kind(), &data, &registry, &theme);
                trace!(panel = slot.kind().name(), position:? = slot.position(); "Rendering panel");
                panel.render(&mut builder, slot.position())?
            };

            if let Some(fragment) = output.take_registry() {
                registry.merge(fragment);
            }
            report.dropped_connections.extend_from_slice(output.dropped());
            report.grid_overflows.extend_from_slice(output.overflows());

            let panel_cells = output.into_cells();
            debug!(panel = slot.kind().name(), cells = panel_cells.len(); "Panel rendered");
            report.panels.push(PanelReport {
                kind: slot.kind(),
                cells: panel_cells.len(),
            });
            cells.merge(panel_cells);
        }

        info!(
            stage:? = Stage::PanelsRendered,
            cells = builder.cells_emitted(),
            dropped = report.dropped_connections.len();
            "Panels rendered"
        );

        let header = self
            .header(&data, bundle, page)
            .with_background(theme.page_color());
        let document = DiagramDocument::new(header, cells.into_cells());
        Ok(Build { document, report })
    }

    /// Builds and serializes the document for one bundle.
    ///
    /// # Errors
    ///
    /// See [`Assembler::build`] and [`Build::to_xml`].
    pub fn render(
        &self,
        template_name: &str,
        bundle: &DataBundle,
    ) -> Result<String, ArchboardError> {
        self.build(template_name, bundle)?.to_xml()
    }

    /// Names the document after the meta title, else the subject, else the
    /// configured page name.
    fn header(&self, data: &SubjectData, bundle: &DataBundle, page: Size) -> DocumentHeader {
        let name = match &data.meta.title {
            Some(title) => title.clone(),
            None if bundle.summary.is_empty() => self.config.page().name().to_string(),
            None => data.summary.title(),
        };

        let mut header = DocumentHeader::new(name, page);
        if !data.summary.id.is_empty() {
            header = header.with_diagram_id(diagram_id(&data.summary.id));
        }
        header
    }
}

/// Constructs the panel for a slot, borrowing the data it renders.
fn panel_for<'a>(
    kind: PanelKind,
    data: &'a SubjectData,
    registry: &'a PositionRegistry,
    theme: &'a Theme,
) -> Box<dyn Panel + 'a> {
    match kind {
        PanelKind::Header => Box::new(HeaderPanel::new(&data.summary, theme)),
        PanelKind::Summary => Box::new(SummaryPanel::new(&data.summary, theme)),
        PanelKind::Metrics => Box::new(MetricsPanel::new(&data.metrics, theme)),
        PanelKind::Governance => Box::new(GovernancePanel::new(&data.governance, theme)),
        PanelKind::Risk => Box::new(RiskPanel::new(&data.risk, theme)),
        PanelKind::Cost => Box::new(CostPanel::new(&data.cost, theme)),
        PanelKind::Resourcing => Box::new(ResourcingPanel::new(&data.resourcing, theme)),
        PanelKind::Stakeholders => Box::new(StakeholdersPanel::new(&data.stakeholders, theme)),
        PanelKind::Timeline => Box::new(TimelinePanel::new(&data.phases, theme)),
        PanelKind::Components => Box::new(ComponentsPanel::new(&data.components, theme)),
        PanelKind::Connections => {
            Box::new(ConnectionsPanel::new(&data.interfaces, registry, theme))
        }
        PanelKind::Interfaces => Box::new(InterfacesPanel::new(&data.interfaces, theme)),
        PanelKind::TechStack => Box::new(TechStackPanel::new(&data.tech_stack, theme)),
        PanelKind::Legend => Box::new(LegendPanel::new(data.layers(), &data.interfaces, theme)),
        PanelKind::Footer => Box::new(FooterPanel::new(&data.meta, theme)),
    }
}

/// Lowercases an identifier and replaces anything but ASCII letters and
/// digits with `-`.
fn diagram_id(id: &str) -> String {
    id.trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect()
}
