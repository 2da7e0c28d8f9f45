//! Assignment submissions endpoint.

use gx_core::{AssignmentId, CourseId, StudentId};
use serde::Deserialize;

use crate::{CanvasApi, error::CanvasError, get_all_pages, pagination::PageSource};

/// A submission from
/// `GET /api/v1/courses/:id/assignments/:aid/submissions?include[]=user`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CanvasSubmission {
    pub user_id: Option<StudentId>,
    pub user: Option<SubmissionUser>,
    pub score: Option<f64>,
}

/// The inline user object attached by `include[]=user`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct SubmissionUser {
    pub id: Option<StudentId>,
}

impl CanvasSubmission {
    /// The submitting student, taken from the inline user object when it
    /// carries an id and from `user_id` otherwise.
    #[must_use]
    pub fn student_id(&self) -> Option<StudentId> {
        self.user.as_ref().and_then(|u| u.id).or(self.user_id)
    }
}

impl<S: PageSource + Sync> CanvasApi<S> {
    /// Every submission for one assignment, each with its user inline.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError`] if any page request fails or a record cannot
    /// be parsed.
    pub async fn list_submissions(
        &self,
        course: CourseId,
        assignment: AssignmentId,
    ) -> Result<Vec<CanvasSubmission>, CanvasError> {
        get_all_pages(self.source(), self.submissions_url(course, assignment)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> CanvasSubmission {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn parses_graded_and_ungraded_submissions() {
        let graded = parse(r#"{"user_id": 1, "score": 92.5, "workflow_state": "graded"}"#);
        assert_eq!(graded.score, Some(92.5));

        let ungraded = parse(r#"{"user_id": 2, "score": null, "workflow_state": "unsubmitted"}"#);
        assert_eq!(ungraded.score, None);
    }

    #[test]
    fn student_id_prefers_inline_user() {
        let sub = parse(r#"{"user_id": 1, "user": {"id": 7, "name": "Ada"}}"#);
        assert_eq!(sub.student_id(), Some(StudentId(7)));
    }

    #[test]
    fn student_id_falls_back_to_foreign_key() {
        assert_eq!(parse(r#"{"user_id": 3}"#).student_id(), Some(StudentId(3)));
        assert_eq!(
            parse(r#"{"user_id": 3, "user": {}}"#).student_id(),
            Some(StudentId(3))
        );
    }

    #[test]
    fn student_id_absent_when_neither_present() {
        assert_eq!(parse(r#"{"score": 10}"#).student_id(), None);
    }
}
