//! Typed per-panel schemas.
//!
//! Each schema is built once from a [`Record`] with `from_record`, which
//! substitutes defaults for missing or malformed fields. Panels only ever see
//! these typed values, so a panel never fails because of input data.
//!
//! [`SubjectData::from_bundle`] converts a whole [`DataBundle`] in one pass.

use std::fmt;

use log::{debug, warn};

use crate::{bundle::DataBundle, record::Record};

/// A four-level qualitative rating used for complexity, priority, risk and
/// similar assessments.
///
/// Parsing is lenient: anything unrecognized becomes the conservative
/// default, [`Rating::Medium`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rating {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Rating {
    /// Parses a rating, case-insensitively and with common aliases.
    ///
    /// # Examples
    ///
    /// ```
    /// # use archboard::schema::Rating;
    /// assert_eq!(Rating::parse_lenient("H"), Rating::High);
    /// assert_eq!(Rating::parse_lenient("very high"), Rating::Critical);
    /// assert_eq!(Rating::parse_lenient("unknown"), Rating::Medium);
    /// ```
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" | "l" | "minor" | "1" => Self::Low,
            "medium" | "med" | "m" | "moderate" | "2" => Self::Medium,
            "high" | "h" | "major" | "3" => Self::High,
            "critical" | "crit" | "very high" | "severe" | "c" | "4" => Self::Critical,
            other => {
                debug!(value = other; "Unrecognized rating, using default");
                Self::default()
            }
        }
    }

    fn from_field(record: &Record, field: &str) -> Self {
        record
            .get(field)
            .map(Self::parse_lenient)
            .unwrap_or_default()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The architecture layer a component belongs to.
///
/// Components are grouped into lanes by layer, in the canonical order of the
/// named variants. `Other` layers follow in order of first appearance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Layer {
    Business,
    Application,
    Data,
    Technology,
    Integration,
    Security,
    Other(String),
}

impl Layer {
    /// The named layers, in canonical lane order.
    pub const CANONICAL: [Layer; 6] = [
        Layer::Business,
        Layer::Application,
        Layer::Data,
        Layer::Technology,
        Layer::Integration,
        Layer::Security,
    ];

    /// Parses a layer name. Unrecognized names become [`Layer::Other`];
    /// a blank name becomes [`Layer::Application`].
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "" | "application" | "app" | "applications" => Self::Application,
            "business" | "biz" => Self::Business,
            "data" | "information" => Self::Data,
            "technology" | "tech" | "infrastructure" | "infra" | "platform" => Self::Technology,
            "integration" | "int" | "middleware" => Self::Integration,
            "security" | "sec" => Self::Security,
            _ => Self::Other(trimmed.to_string()),
        }
    }

    /// Returns the position in canonical order, or `None` for `Other`.
    pub fn rank(&self) -> Option<usize> {
        Self::CANONICAL.iter().position(|layer| layer == self)
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Business => "Business",
            Self::Application => "Application",
            Self::Data => "Data",
            Self::Technology => "Technology",
            Self::Integration => "Integration",
            Self::Security => "Security",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Delivery status of a timeline phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PhaseStatus {
    #[default]
    Planned,
    InProgress,
    Complete,
    Blocked,
}

impl PhaseStatus {
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "in progress" | "in_progress" | "active" | "ongoing" | "started" | "wip" => {
                Self::InProgress
            }
            "complete" | "completed" | "done" | "finished" => Self::Complete,
            "blocked" | "on hold" | "delayed" | "at risk" => Self::Blocked,
            _ => Self::Planned,
        }
    }
}

/// Identity and narrative of the subject.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub id: String,
    pub name: String,
    pub domain: Option<String>,
    pub status: String,
    pub description: Option<String>,
    pub objective: Option<String>,
    pub business_value: Option<String>,
}

impl Default for Summary {
    fn default() -> Self {
        Self::from_record(&Record::new())
    }
}

impl Summary {
    pub fn from_record(record: &Record) -> Self {
        Self {
            id: record.get_or("id", ""),
            name: record
                .get_any(&["name", "title"])
                .unwrap_or("Untitled")
                .to_string(),
            domain: owned(record.get("domain")),
            status: record.get_or("status", "Draft"),
            description: owned(record.get_any(&["description", "desc"])),
            objective: owned(record.get_any(&["objective", "goal"])),
            business_value: owned(record.get_any(&["business_value", "value"])),
        }
    }

    /// Returns the title shown in the header, `"<id>: <name>"` when an id is
    /// present.
    pub fn title(&self) -> String {
        if self.id.is_empty() {
            self.name.clone()
        } else {
            format!("{}: {}", self.id, self.name)
        }
    }
}

/// Key performance indicators.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metrics {
    pub complexity: Rating,
    pub priority: Rating,
    pub maturity: Rating,
    pub effort: Option<String>,
    pub roi: Option<String>,
    /// Confidence as a percentage in `[0, 100]`.
    ///
    /// A value written with `%` is taken as written. A bare value of at most
    /// 1 is a fraction, so `0.8` and `1` read as 80% and 100%, while `80`
    /// reads as 80%.
    pub confidence: Option<f64>,
}

impl Metrics {
    pub fn from_record(record: &Record) -> Self {
        let explicit_percent = record
            .get("confidence")
            .is_some_and(|raw| raw.contains('%'));
        let confidence = record.get_number("confidence").map(|value| {
            let percent = if !explicit_percent && value <= 1.0 {
                value * 100.0
            } else {
                value
            };
            percent.clamp(0.0, 100.0)
        });
        Self {
            complexity: Rating::from_field(record, "complexity"),
            priority: Rating::from_field(record, "priority"),
            maturity: Rating::from_field(record, "maturity"),
            effort: owned(record.get("effort")),
            roi: owned(record.get("roi")),
            confidence,
        }
    }
}

/// Ownership and compliance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Governance {
    pub owner: Option<String>,
    pub sponsor: Option<String>,
    pub approval_status: Option<String>,
    pub review_cycle: Option<String>,
    pub compliance: Vec<String>,
}

impl Governance {
    pub fn from_record(record: &Record) -> Self {
        Self {
            owner: owned(record.get_any(&["owner", "business_owner"])),
            sponsor: owned(record.get_any(&["sponsor", "executive_sponsor"])),
            approval_status: owned(record.get_any(&[
                "approval_status",
                "approval",
                "review_status",
            ])),
            review_cycle: owned(record.get_any(&["review_cycle", "review_frequency"])),
            compliance: record.get_list("compliance"),
        }
    }
}

/// Overall risk rating with the individual risks and their mitigations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RiskProfile {
    pub overall: Rating,
    pub risks: Vec<String>,
    pub mitigations: Vec<String>,
}

impl RiskProfile {
    pub fn from_record(record: &Record) -> Self {
        Self {
            overall: record
                .get_any(&["overall", "rating", "level"])
                .map(Rating::parse_lenient)
                .unwrap_or_default(),
            risks: record.get_list("risks"),
            mitigations: record.get_list("mitigations"),
        }
    }
}

/// Capital and operating cost.
#[derive(Debug, Clone, PartialEq)]
pub struct CostModel {
    pub currency: String,
    pub capex: Option<f64>,
    pub opex: Option<f64>,
    total: Option<f64>,
}

impl Default for CostModel {
    fn default() -> Self {
        Self::from_record(&Record::new())
    }
}

impl CostModel {
    pub fn from_record(record: &Record) -> Self {
        Self {
            currency: record.get_or("currency", "$"),
            capex: record.get_number("capex"),
            opex: record.get_number("opex"),
            total: record.get_number("total"),
        }
    }

    /// Returns the stated total, or the sum of capex and opex when no total
    /// is given.
    pub fn total(&self) -> Option<f64> {
        self.total.or(match (self.capex, self.opex) {
            (None, None) => None,
            (capex, opex) => Some(capex.unwrap_or(0.0) + opex.unwrap_or(0.0)),
        })
    }

    /// Formats an amount with the currency and a `k`/`M` magnitude suffix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use archboard::{record::Record, schema::CostModel};
    /// let cost = CostModel::default();
    /// assert_eq!(cost.format_amount(1_500_000.0), "$1.5M");
    /// assert_eq!(cost.format_amount(300_000.0), "$300k");
    /// assert_eq!(cost.format_amount(950.0), "$950");
    ///
    /// let euro = CostModel::from_record(&Record::new().with("currency", "EUR"));
    /// assert_eq!(euro.format_amount(1_200_000.0), "EUR 1.2M");
    /// ```
    pub fn format_amount(&self, amount: f64) -> String {
        let (value, suffix) = if amount.abs() >= 1_000_000.0 {
            (amount / 1_000_000.0, "M")
        } else if amount.abs() >= 1_000.0 {
            (amount / 1_000.0, "k")
        } else {
            (amount, "")
        };
        let rounded = (value * 10.0).round() / 10.0;
        // Currency codes are set apart from the number, symbols are not.
        let currency = if self.currency.ends_with(|c: char| c.is_alphabetic()) {
            format!("{} ", self.currency)
        } else {
            self.currency.clone()
        };
        if rounded.fract() == 0.0 {
            format!("{currency}{rounded:.0}{suffix}")
        } else {
            format!("{currency}{rounded:.1}{suffix}")
        }
    }
}

/// Team and effort.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resourcing {
    pub fte: Option<f64>,
    pub team: Option<String>,
    pub duration: Option<String>,
    pub roles: Vec<String>,
}

impl Resourcing {
    pub fn from_record(record: &Record) -> Self {
        Self {
            fte: record.get_number("fte").filter(|fte| *fte >= 0.0),
            team: owned(record.get("team")),
            duration: owned(record.get("duration")),
            roles: record.get_list("roles"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stakeholders {
    pub names: Vec<String>,
}

impl Stakeholders {
    pub fn from_record(record: &Record) -> Self {
        let field = ["names", "stakeholders", "list"]
            .into_iter()
            .find(|field| record.get(field).is_some())
            .unwrap_or("names");
        Self {
            names: record.get_list(field),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TechStack {
    pub items: Vec<String>,
}

impl TechStack {
    pub fn from_record(record: &Record) -> Self {
        let field = ["technologies", "items", "stack"]
            .into_iter()
            .find(|field| record.get(field).is_some())
            .unwrap_or("technologies");
        Self {
            items: record.get_list(field),
        }
    }
}

/// One delivery phase on the timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Phase {
    pub name: String,
    pub start: Option<String>,
    pub end: Option<String>,
    pub status: PhaseStatus,
}

impl Phase {
    pub fn from_record(record: &Record) -> Self {
        Self {
            name: record
                .get_any(&["name", "phase"])
                .unwrap_or("Unnamed phase")
                .to_string(),
            start: owned(record.get("start")),
            end: owned(record.get("end")),
            status: record
                .get("status")
                .map(PhaseStatus::parse_lenient)
                .unwrap_or_default(),
        }
    }

    /// Returns `"start - end"`, or whichever bound is known.
    pub fn window(&self) -> Option<String> {
        match (&self.start, &self.end) {
            (Some(start), Some(end)) => Some(format!("{start} - {end}")),
            (Some(start), None) => Some(format!("from {start}")),
            (None, Some(end)) => Some(format!("until {end}")),
            (None, None) => None,
        }
    }
}

/// An architecture building block.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    /// Identifier referenced by interfaces. Falls back to the name.
    pub id: String,
    pub name: String,
    pub layer: Layer,
    pub technology: Option<String>,
}

impl Component {
    pub fn from_record(record: &Record) -> Self {
        let name = record.get("name");
        let id = record.get("id").or(name).unwrap_or("").to_string();
        Self {
            name: name.unwrap_or(&id).to_string(),
            id,
            layer: Layer::parse(record.get("layer").unwrap_or("")),
            technology: owned(record.get_any(&["technology", "tech"])),
        }
    }

    /// Returns the box label: the name, with the technology on a second line.
    pub fn label(&self) -> String {
        match &self.technology {
            Some(technology) => format!("{}\n[{technology}]", self.name),
            None => self.name.clone(),
        }
    }
}

/// A directed integration between two components.
#[derive(Debug, Clone, PartialEq)]
pub struct Interface {
    pub id: String,
    pub source: String,
    pub target: String,
    pub protocol: Option<String>,
    pub label: Option<String>,
    pub asynchronous: bool,
}

impl Interface {
    /// Protocols that imply asynchronous messaging when no explicit mode is
    /// given.
    const ASYNC_PROTOCOLS: [&'static str; 7] =
        ["kafka", "amqp", "mqtt", "event", "queue", "pubsub", "sqs"];

    pub fn from_record(record: &Record) -> Self {
        let protocol = owned(record.get("protocol"));
        let asynchronous = record
            .get_bool("async")
            .or_else(|| {
                record
                    .get_any(&["mode", "pattern"])
                    .map(|mode| mode.to_ascii_lowercase().contains("async"))
            })
            .unwrap_or_else(|| {
                protocol.as_deref().is_some_and(|protocol| {
                    let protocol = protocol.to_ascii_lowercase();
                    Self::ASYNC_PROTOCOLS
                        .iter()
                        .any(|known| protocol.contains(known))
                })
            });

        Self {
            id: record.get_or("id", ""),
            source: record.get_any(&["source", "from"]).unwrap_or("").to_string(),
            target: record.get_any(&["target", "to"]).unwrap_or("").to_string(),
            protocol,
            label: owned(record.get("label")),
            asynchronous,
        }
    }

    /// Returns the edge label: the explicit label, else the protocol.
    pub fn edge_label(&self) -> Option<&str> {
        self.label.as_deref().or(self.protocol.as_deref())
    }

    /// Returns a name for logs and reports: the id, else `source->target`.
    pub fn display_name(&self) -> String {
        if self.id.is_empty() {
            format!("{}->{}", self.source, self.target)
        } else {
            self.id.clone()
        }
    }
}

/// Document provenance, shown in the footer.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentMeta {
    pub title: Option<String>,
    pub author: Option<String>,
    pub version: Option<String>,
    pub source: Option<String>,
    pub date: Option<String>,
    pub generator: String,
}

impl Default for DocumentMeta {
    fn default() -> Self {
        Self::from_record(&Record::new())
    }
}

impl DocumentMeta {
    pub fn from_record(record: &Record) -> Self {
        Self {
            title: owned(record.get("title")),
            author: owned(record.get("author")),
            version: owned(record.get("version")),
            source: owned(record.get("source")),
            date: owned(record.get_any(&["date", "generated_on"])),
            generator: record.get_or("generator", "Archboard"),
        }
    }
}

/// All typed data for one subject, converted once from a [`DataBundle`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubjectData {
    pub summary: Summary,
    pub metrics: Metrics,
    pub governance: Governance,
    pub risk: RiskProfile,
    pub cost: CostModel,
    pub resourcing: Resourcing,
    pub stakeholders: Stakeholders,
    pub tech_stack: TechStack,
    pub meta: DocumentMeta,
    pub phases: Vec<Phase>,
    pub components: Vec<Component>,
    pub interfaces: Vec<Interface>,
}

impl SubjectData {
    pub fn from_bundle(bundle: &DataBundle) -> Self {
        let components: Vec<Component> = bundle
            .components
            .iter()
            .map(Component::from_record)
            .filter(|component| {
                if component.id.is_empty() {
                    warn!("Skipping component without id or name");
                }
                !component.id.is_empty()
            })
            .collect();

        let data = Self {
            summary: Summary::from_record(&bundle.summary),
            metrics: Metrics::from_record(&bundle.metrics),
            governance: Governance::from_record(&bundle.governance),
            risk: RiskProfile::from_record(&bundle.risk),
            cost: CostModel::from_record(&bundle.cost),
            resourcing: Resourcing::from_record(&bundle.resourcing),
            stakeholders: Stakeholders::from_record(&bundle.stakeholders),
            tech_stack: TechStack::from_record(&bundle.tech_stack),
            meta: DocumentMeta::from_record(&bundle.meta),
            phases: bundle.phases.iter().map(Phase::from_record).collect(),
            components,
            interfaces: bundle.interfaces.iter().map(Interface::from_record).collect(),
        };

        debug!(
            phases = data.phases.len(),
            components = data.components.len(),
            interfaces = data.interfaces.len();
            "Subject data loaded"
        );
        data
    }

    /// Returns the layers present among the components, in lane order.
    pub fn layers(&self) -> Vec<Layer> {
        layer_order(&self.components)
    }
}

/// Returns the layers present among `components`: canonical layers first,
/// then other layers in order of first appearance.
pub fn layer_order(components: &[Component]) -> Vec<Layer> {
    let mut layers: Vec<Layer> = Layer::CANONICAL
        .iter()
        .filter(|layer| components.iter().any(|c| &c.layer == *layer))
        .cloned()
        .collect();
    for component in components {
        if component.layer.rank().is_none() && !layers.contains(&component.layer) {
            layers.push(component.layer.clone());
        }
    }
    layers
}

fn owned(value: Option<&str>) -> Option<String> {
    value.map(str::to_string)
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_rating_aliases() {
        assert_eq!(Rating::parse_lenient("LOW"), Rating::Low);
        assert_eq!(Rating::parse_lenient(" med "), Rating::Medium);
        assert_eq!(Rating::parse_lenient("h"), Rating::High);
        assert_eq!(Rating::parse_lenient("Very High"), Rating::Critical);
        assert_eq!(Rating::parse_lenient("???"), Rating::Medium);
        assert!(Rating::Low < Rating::Critical);
    }

    #[test]
    fn test_layer_parse() {
        assert_eq!(Layer::parse("Tech"), Layer::Technology);
        assert_eq!(Layer::parse(""), Layer::Application);
        assert_eq!(Layer::parse(" Edge "), Layer::Other("Edge".to_string()));
        assert_eq!(Layer::Data.rank(), Some(2));
        assert_eq!(Layer::Other("x".into()).rank(), None);
    }

    #[test]
    fn test_summary_defaults() {
        let summary = Summary::default();
        assert_eq!(summary.name, "Untitled");
        assert_eq!(summary.status, "Draft");
        assert_eq!(summary.title(), "Untitled");

        let summary = Summary::from_record(&record(&[("id", "UC-7"), ("name", "Checkout")]));
        assert_eq!(summary.title(), "UC-7: Checkout");
    }

    #[test]
    fn test_metrics_confidence_normalized() {
        let metrics = Metrics::from_record(&record(&[("confidence", "0.8"), ("complexity", "H")]));
        assert_approx_eq!(f64, metrics.confidence.unwrap(), 80.0);
        assert_eq!(metrics.complexity, Rating::High);
        assert_eq!(metrics.priority, Rating::Medium);

        let metrics = Metrics::from_record(&record(&[("confidence", "140%")]));
        assert_approx_eq!(f64, metrics.confidence.unwrap(), 100.0);
    }

    #[test]
    fn test_metrics_confidence_fraction_boundary() {
        let confidence = |raw: &str| {
            Metrics::from_record(&record(&[("confidence", raw)]))
                .confidence
                .unwrap()
        };
        assert_approx_eq!(f64, confidence("1"), 100.0);
        assert_approx_eq!(f64, confidence("1%"), 1.0);
        assert_approx_eq!(f64, confidence("0.5%"), 0.5);
        assert_approx_eq!(f64, confidence("80"), 80.0);
        assert_eq!(
            Metrics::from_record(&record(&[("confidence", "medium")])).confidence,
            None
        );
    }

    #[test]
    fn test_governance_aliases() {
        let governance = Governance::from_record(&record(&[
            ("Business Owner", "Head of Claims"),
            ("review_status", "Approved"),
            ("compliance", "GDPR; Solvency II"),
        ]));
        assert_eq!(governance.owner.as_deref(), Some("Head of Claims"));
        assert_eq!(governance.approval_status.as_deref(), Some("Approved"));
        assert_eq!(governance.compliance, vec!["GDPR", "Solvency II"]);
        assert_eq!(governance.sponsor, None);
    }

    #[test]
    fn test_currency_codes_are_spaced() {
        let euro = CostModel::from_record(&record(&[("currency", "EUR"), ("capex", "350k")]));
        assert_eq!(euro.format_amount(euro.capex.unwrap()), "EUR 350k");

        let pound = CostModel::from_record(&record(&[("currency", "£")]));
        assert_eq!(pound.format_amount(2_500.0), "£2.5k");
    }

    #[test]
    fn test_cost_total_derived() {
        let cost = CostModel::from_record(&record(&[("capex", "1.2m"), ("opex", "300k")]));
        assert_approx_eq!(f64, cost.total().unwrap(), 1_500_000.0);

        let stated = CostModel::from_record(&record(&[("capex", "10"), ("total", "99")]));
        assert_approx_eq!(f64, stated.total().unwrap(), 99.0);

        assert_eq!(CostModel::default().total(), None);
    }

    #[test]
    fn test_cost_format_amount() {
        let cost = CostModel::from_record(&record(&[("currency", "€")]));
        assert_eq!(cost.format_amount(1_250_000.0), "€1.3M");
        assert_eq!(cost.format_amount(2_000.0), "€2k");
        assert_eq!(cost.format_amount(0.0), "€0");
    }

    #[test]
    fn test_component_id_falls_back_to_name() {
        let component = Component::from_record(&record(&[("name", "Billing"), ("layer", "data")]));
        assert_eq!(component.id, "Billing");
        assert_eq!(component.layer, Layer::Data);

        let component = Component::from_record(&record(&[("id", "ABB-1")]));
        assert_eq!(component.name, "ABB-1");
    }

    #[test]
    fn test_interface_async_detection() {
        let explicit = Interface::from_record(&record(&[("async", "yes")]));
        assert!(explicit.asynchronous);

        let by_mode = Interface::from_record(&record(&[("mode", "Async"), ("protocol", "HTTP")]));
        assert!(by_mode.asynchronous);

        let by_protocol = Interface::from_record(&record(&[("protocol", "Kafka topic")]));
        assert!(by_protocol.asynchronous);

        let sync = Interface::from_record(&record(&[("protocol", "REST")]));
        assert!(!sync.asynchronous);
        assert_eq!(sync.edge_label(), Some("REST"));
    }

    #[test]
    fn test_interface_display_name() {
        let interface = Interface::from_record(&record(&[("from", "A"), ("to", "B")]));
        assert_eq!(interface.display_name(), "A->B");
    }

    #[test]
    fn test_phase_window() {
        let phase = Phase::from_record(&record(&[("name", "Pilot"), ("start", "Q1")]));
        assert_eq!(phase.window().as_deref(), Some("from Q1"));
        assert_eq!(phase.status, PhaseStatus::Planned);

        let done = Phase::from_record(&record(&[("status", "Done"), ("start", "Q1"), ("end", "Q2")]));
        assert_eq!(done.status, PhaseStatus::Complete);
        assert_eq!(done.window().as_deref(), Some("Q1 - Q2"));
    }

    #[test]
    fn test_subject_layers_in_lane_order() {
        let bundle = DataBundle {
            components: vec![
                record(&[("id", "a"), ("layer", "Edge")]),
                record(&[("id", "b"), ("layer", "Data")]),
                record(&[("id", "c"), ("layer", "Business")]),
                record(&[("layer", "Data")]),
            ],
            ..DataBundle::default()
        };
        let data = SubjectData::from_bundle(&bundle);
        assert_eq!(data.components.len(), 3);
        assert_eq!(
            data.layers(),
            vec![Layer::Business, Layer::Data, Layer::Other("Edge".to_string())]
        );
    }
}
