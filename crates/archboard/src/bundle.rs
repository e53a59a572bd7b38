//! The flat input contract for one subject.

use serde::Deserialize;

use crate::record::Record;

/// All records describing one subject, one section per panel concern.
///
/// Every section is optional; absent sections deserialize to empty records
/// and the corresponding schemas fall back to their defaults.
///
/// # Examples
///
/// ```
/// # use archboard::{DataBundle, record::Record};
/// let bundle = DataBundle {
///     summary: Record::new().with("name", "Checkout"),
///     components: vec![
///         Record::new().with("id", "web"),
///         Record::new().with("id", "api"),
///     ],
///     interfaces: vec![Record::new().with("source", "web").with("target", "api")],
///     ..DataBundle::default()
/// };
/// assert_eq!(bundle.components.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DataBundle {
    /// Template requested by the data itself, if any.
    pub template: Option<String>,
    pub summary: Record,
    pub metrics: Record,
    pub governance: Record,
    pub risk: Record,
    pub cost: Record,
    pub resourcing: Record,
    pub stakeholders: Record,
    pub tech_stack: Record,
    pub meta: Record,
    pub phases: Vec<Record>,
    pub components: Vec<Record>,
    pub interfaces: Vec<Record>,
}
