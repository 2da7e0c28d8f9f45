//! Course roster endpoint.

use gx_core::{CourseId, StudentId};
use serde::Deserialize;

use crate::{CanvasApi, error::CanvasError, get_all_pages, pagination::PageSource};

/// A user from `GET /api/v1/courses/:id/users`.
///
/// Every field is optional; Canvas omits fields the caller may not see.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct CanvasUser {
    pub id: Option<StudentId>,
    pub name: Option<String>,
    pub login_id: Option<String>,
    pub sis_user_id: Option<String>,
    pub email: Option<String>,
    pub enrollments: Option<Vec<CanvasEnrollment>>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct CanvasEnrollment {
    /// Enrollment type, e.g. `StudentEnrollment` or `ObserverEnrollment`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub grades: Option<CanvasGrades>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct CanvasGrades {
    pub final_grade: Option<String>,
    pub current_grade: Option<String>,
}

impl<S: PageSource + Sync> CanvasApi<S> {
    /// Every user holding a student enrollment in `course`, with email and
    /// enrollment grades inline.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError`] if any page request fails or a record cannot
    /// be parsed.
    pub async fn list_students(&self, course: CourseId) -> Result<Vec<CanvasUser>, CanvasError> {
        get_all_pages(self.source(), self.students_url(course)?).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const FIXTURE: &str = r#"[
        {
            "id": 101,
            "name": "Ada Lovelace",
            "sortable_name": "Lovelace, Ada",
            "login_id": "alovelace",
            "sis_user_id": "S-0101",
            "email": "ada@example.edu",
            "enrollments": [
                {
                    "type": "StudentEnrollment",
                    "enrollment_state": "active",
                    "grades": {
                        "current_grade": "B+",
                        "final_grade": "A-",
                        "current_score": 88.2,
                        "final_score": 90.1
                    }
                }
            ]
        },
        {
            "id": 102,
            "name": null,
            "sis_user_id": "S-0102",
            "enrollments": null
        }
    ]"#;

    #[test]
    fn parse_users_response() {
        let users: Vec<CanvasUser> = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(users.len(), 2);

        let first = &users[0];
        assert_eq!(first.id, Some(StudentId(101)));
        assert_eq!(first.login_id.as_deref(), Some("alovelace"));
        assert_eq!(first.email.as_deref(), Some("ada@example.edu"));

        let enrollment = &first.enrollments.as_ref().unwrap()[0];
        assert_eq!(enrollment.kind.as_deref(), Some("StudentEnrollment"));
        assert_eq!(
            enrollment.grades,
            Some(CanvasGrades {
                final_grade: Some("A-".into()),
                current_grade: Some("B+".into()),
            })
        );
    }

    #[test]
    fn missing_fields_default_to_none() {
        let users: Vec<CanvasUser> = serde_json::from_str(FIXTURE).unwrap();
        let second = &users[1];
        assert_eq!(second.name, None);
        assert_eq!(second.login_id, None);
        assert_eq!(second.email, None);
        assert_eq!(second.enrollments, None);
    }
}
