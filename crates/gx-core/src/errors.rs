//! Cross-cutting error types for Gradex.
//!
//! Transport errors live in `gx-canvas` and pipeline errors in `gx-export`;
//! everything converges into `anyhow` inside `gx-cli`.

use thiserror::Error;

/// Errors that can be raised by any Gradex crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The course identifier could not be resolved to a Canvas course id.
    #[error("Invalid course identifier '{0}': expected a numeric id or a Canvas course URL")]
    InvalidCourseId(String),

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
