//! Error types for core cell and document operations.

use std::fmt;

use thiserror::Error;

/// Errors raised while building cells or serializing a document.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to write document: {0}")]
    Write(#[from] fmt::Error),

    #[error("Invalid geometry: {0}")]
    Geometry(String),
}
