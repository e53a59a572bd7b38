//! Error types for Archboard operations.
//!
//! This module provides the main error type [`ArchboardError`] which wraps
//! the error conditions that can occur while assembling a diagram.

use std::{io, ops::Range};

use thiserror::Error;

/// The main error type for Archboard operations.
///
/// Missing or malformed record fields never surface here; they are defaulted
/// when schemas are built. Only configuration mistakes and layout programming
/// errors abort a build.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the offending source text and, when known, the
/// byte range of the error so that callers can point at it.
#[derive(Debug, Error)]
pub enum ArchboardError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Document error: {0}")]
    Core(#[from] archboard_core::Error),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid {what}: {message}")]
    Parse {
        /// What was being read, such as `bundle` or `configuration`.
        what: &'static str,
        message: String,
        span: Option<Range<usize>>,
        src: String,
    },
}

impl ArchboardError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(
        what: &'static str,
        message: impl Into<String>,
        span: Option<Range<usize>>,
        src: impl Into<String>,
    ) -> Self {
        Self::Parse {
            what,
            message: message.into(),
            span,
            src: src.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ArchboardError::new_parse_error(
            "bundle",
            "expected a table",
            Some(4..9),
            "foo = [1",
        );
        assert_eq!(err.to_string(), "Invalid bundle: expected a table");
        assert!(matches!(err, ArchboardError::Parse { span: Some(_), .. }));
    }
}
