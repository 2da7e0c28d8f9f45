//! # gx-core
//!
//! Core types, identifiers, and error types for Gradex.
//!
//! This crate provides the foundational types shared across all Gradex crates:
//! - Identifier newtypes for Canvas students, assignments, and courses
//! - The per-export entity structs (student records, assignment columns)
//! - Score formatting used by the CSV serializer
//! - Cross-cutting error types

pub mod entities;
pub mod errors;
pub mod ids;

pub use entities::{AssignmentRecord, StudentRecord, format_score};
pub use errors::CoreError;
pub use ids::{AssignmentId, CourseId, StudentId};
