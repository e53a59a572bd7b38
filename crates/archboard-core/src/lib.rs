//! Archboard Core Types and Definitions
//!
//! This crate provides the foundational types for assembling Archboard
//! diagrams into mxGraph documents. It includes:
//!
//! - **Geometry**: Points, sizes, positions and anchors ([`geometry`] module)
//! - **Draw**: Stroke, text, rectangle and arrow definitions, plus layered
//!   cell collection ([`draw`] module)
//! - **Cells**: The atomic serialized output unit ([`cell::Cell`])
//! - **Builder**: The identifier-allocating cell factory ([`builder::CellBuilder`])
//! - **Document**: The final mxGraph document ([`document::DiagramDocument`])
//! - **Escape**: Markup escaping at the text boundary ([`escape::Markup`])

pub mod builder;
pub mod cell;
pub mod document;
pub mod draw;
pub mod escape;
pub mod geometry;

mod error;

pub use error::Error;
