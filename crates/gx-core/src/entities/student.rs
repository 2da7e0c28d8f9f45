use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ids::{AssignmentId, StudentId};

/// Identity, contact data, and collected scores for one enrolled student.
///
/// `grades` is keyed by assignment id, not title, so two assignments sharing
/// a title never overwrite each other. A `None` value is a submission that
/// exists but carries no score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentRecord {
    pub id: StudentId,
    pub display_name: String,
    pub login_id: String,
    pub email: String,
    pub final_grade: String,
    #[serde(default)]
    pub grades: BTreeMap<AssignmentId, Option<f64>>,
}

impl StudentRecord {
    /// Record (or overwrite) the score for one assignment. Last write wins.
    pub fn record_score(&mut self, assignment: AssignmentId, score: Option<f64>) {
        self.grades.insert(assignment, score);
    }

    /// Score for `assignment`, flattening "never submitted" and "submitted
    /// without a score" into `None`.
    #[must_use]
    pub fn score_for(&self, assignment: AssignmentId) -> Option<f64> {
        self.grades.get(&assignment).copied().flatten()
    }

    /// Whether at least one assignment carries an actual score.
    #[must_use]
    pub fn has_recorded_score(&self) -> bool {
        self.grades.values().any(Option::is_some)
    }
}

/// Render a score cell: the shortest decimal form of the number, or an empty
/// string when there is no score.
#[must_use]
pub fn format_score(score: Option<f64>) -> String {
    score.map(|value| value.to_string()).unwrap_or_default()
}
