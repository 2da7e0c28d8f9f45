//! Identifier newtypes for Canvas objects.
//!
//! Canvas exposes every object id as a JSON integer. Wrapping them keeps a
//! student id from ever being used where an assignment id is expected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Canvas user id of a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub u64);

/// Canvas assignment id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssignmentId(pub u64);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for AssignmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Path segment that precedes the course id in Canvas URLs.
const COURSES_SEGMENT: &str = "courses/";

/// Validated Canvas course id.
///
/// Construct with [`CourseId::parse`], which accepts either a bare id
/// (`"1234"`) or any Canvas URL pointing into a course
/// (`"https://school.instructure.com/courses/1234/gradebook"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(u64);

impl CourseId {
    /// Resolve a course id from user input.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidCourseId`] when the input is empty, is not
    /// numeric and contains no `courses/<digits>` segment, or resolves to `0`.
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        let trimmed = input.trim();
        let invalid = || CoreError::InvalidCourseId(input.to_string());

        let digits = if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            trimmed
        } else {
            digits_after_courses_segment(trimmed).ok_or_else(invalid)?
        };

        match digits.parse::<u64>() {
            Ok(0) | Err(_) => Err(invalid()),
            Ok(id) => Ok(Self(id)),
        }
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl FromStr for CourseId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// First run of digits directly following a `courses/` segment.
fn digits_after_courses_segment(input: &str) -> Option<&str> {
    input.match_indices(COURSES_SEGMENT).find_map(|(idx, _)| {
        let rest = &input[idx + COURSES_SEGMENT.len()..];
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        (end > 0).then(|| &rest[..end])
    })
}
