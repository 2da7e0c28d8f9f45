//! Course assignments endpoint.

use gx_core::{AssignmentId, CourseId};
use serde::Deserialize;

use crate::{CanvasApi, error::CanvasError, get_all_pages, pagination::PageSource};

/// An assignment from `GET /api/v1/courses/:id/assignments`.
///
/// `id` is optional so one malformed record does not fail the listing;
/// callers skip assignments without one.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CanvasAssignment {
    #[serde(default)]
    pub id: Option<AssignmentId>,
    #[serde(default)]
    pub name: Option<String>,
}

impl<S: PageSource + Sync> CanvasApi<S> {
    /// Every assignment in `course`, in the order Canvas returns them.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError`] if any page request fails or a record cannot
    /// be parsed.
    pub async fn list_assignments(
        &self,
        course: CourseId,
    ) -> Result<Vec<CanvasAssignment>, CanvasError> {
        get_all_pages(self.source(), self.assignments_url(course)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_assignments_response() {
        let data: Vec<CanvasAssignment> = serde_json::from_str(
            r#"[
                {"id": 10, "name": "HW1", "points_possible": 100, "position": 1},
                {"id": 11, "name": null}
            ]"#,
        )
        .unwrap();

        assert_eq!(data[0].id, Some(AssignmentId(10)));
        assert_eq!(data[0].name.as_deref(), Some("HW1"));
        assert_eq!(data[1].name, None);
    }

    #[test]
    fn assignment_without_id_still_parses() {
        let data: Vec<CanvasAssignment> =
            serde_json::from_str(r#"[{"id": 10, "name": "HW1"}, {"name": "Draft"}]"#).unwrap();

        assert_eq!(data.len(), 2);
        assert_eq!(data[1].id, None);
        assert_eq!(data[1].name.as_deref(), Some("Draft"));
    }
}
