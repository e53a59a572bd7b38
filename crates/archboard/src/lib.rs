//! Archboard - Architecture dashboards as draw.io diagrams.
//!
//! Turns the tabular records describing one architecture subject (summary,
//! metrics, governance, phases, components, interfaces and so on) into a
//! single mxGraph document laid out by a template.
//!
//! The pipeline is:
//!
//! 1. A [`DataBundle`] of loosely-typed [`record::Record`]s is converted into
//!    typed schemas ([`schema`]), defaulting anything missing.
//! 2. A [`template::LayoutTemplate`] assigns each [`panel::PanelKind`] a
//!    region of the page.
//! 3. Each [`panel::Panel`] draws its region with a shared cell builder. The
//!    components panel fills a [`registry::PositionRegistry`] that the
//!    connections panel reads to attach connectors.
//! 4. The cells are collected into an [`archboard_core::document::DiagramDocument`]
//!    and serialized to XML.
//!
//! [`Assembler`] drives the pipeline.

pub mod config;
pub mod layout;
pub mod panel;
pub mod record;
pub mod registry;
pub mod schema;
pub mod template;
pub mod theme;

mod assembler;
mod bundle;
mod error;

pub use archboard_core::{cell, document, draw, escape, geometry};

pub use assembler::{Assembler, Build, BuildReport, PanelReport};
pub use bundle::DataBundle;
pub use error::ArchboardError;
