//! Entity structs for one export cycle.
//!
//! Entities live only for the duration of a single export; nothing here is
//! persisted between runs.

mod assignment;
mod student;

pub use assignment::AssignmentRecord;
pub use student::{StudentRecord, format_score};
