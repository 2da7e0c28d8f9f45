use serde::{Deserialize, Serialize};

use crate::ids::AssignmentId;

/// A gradable unit that becomes one column of the report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssignmentRecord {
    pub id: AssignmentId,
    pub title: String,
}

impl AssignmentRecord {
    #[must_use]
    pub fn new(id: AssignmentId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}
