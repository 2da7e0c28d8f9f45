//! Student directory: the roster lookup built once per export.

use std::collections::{BTreeMap, HashMap};

use gx_canvas::{CanvasApi, CanvasEnrollment, CanvasError, CanvasUser, PageSource};
use gx_core::{CourseId, StudentId, StudentRecord};

/// Canvas enrollment type that carries a student's course grade.
pub const STUDENT_ENROLLMENT: &str = "StudentEnrollment";

/// Roster lookup keyed by student id, iterated in roster order.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    students: Vec<StudentRecord>,
    index: HashMap<StudentId, usize>,
}

impl Directory {
    /// Build a directory from roster users. Users without an id are skipped;
    /// a repeated id replaces the earlier record but keeps its position.
    pub fn from_users(users: impl IntoIterator<Item = CanvasUser>) -> Self {
        let mut directory = Self::default();
        for user in users {
            match student_record(user) {
                Some(record) => directory.insert(record),
                None => tracing::warn!("skipping roster entry without a user id"),
            }
        }
        directory
    }

    /// Insert or replace a record.
    pub fn insert(&mut self, record: StudentRecord) {
        if let Some(&slot) = self.index.get(&record.id) {
            self.students[slot] = record;
        } else {
            self.index.insert(record.id, self.students.len());
            self.students.push(record);
        }
    }

    #[must_use]
    pub fn get(&self, id: StudentId) -> Option<&StudentRecord> {
        self.index.get(&id).map(|&slot| &self.students[slot])
    }

    pub fn get_mut(&mut self, id: StudentId) -> Option<&mut StudentRecord> {
        self.index.get(&id).map(|&slot| &mut self.students[slot])
    }

    #[must_use]
    pub fn contains(&self, id: StudentId) -> bool {
        self.index.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Records in roster order.
    pub fn iter(&self) -> impl Iterator<Item = &StudentRecord> {
        self.students.iter()
    }
}

/// Fetch the student roster for `course` and build the full directory.
///
/// # Errors
///
/// Returns [`CanvasError`] if the roster cannot be fetched.
pub async fn build_directory<S>(
    api: &CanvasApi<S>,
    course: CourseId,
) -> Result<Directory, CanvasError>
where
    S: PageSource + Sync,
{
    let users = api.list_students(course).await?;
    let directory = Directory::from_users(users);
    tracing::info!(%course, students = directory.len(), "built student directory");
    Ok(directory)
}

fn student_record(user: CanvasUser) -> Option<StudentRecord> {
    let id = user.id?;
    let final_grade = final_grade_letter(user.enrollments.as_deref().unwrap_or_default());

    Some(StudentRecord {
        id,
        display_name: user.name.unwrap_or_else(|| format!("ID {id}")),
        login_id: user.login_id.or(user.sis_user_id).unwrap_or_default(),
        email: user.email.unwrap_or_default(),
        final_grade,
        grades: BTreeMap::new(),
    })
}

/// Letter grade of the first student enrollment: the final grade when
/// Canvas reports one, otherwise the current grade.
fn final_grade_letter(enrollments: &[CanvasEnrollment]) -> String {
    enrollments
        .iter()
        .find(|e| e.kind.as_deref() == Some(STUDENT_ENROLLMENT))
        .and_then(|e| e.grades.as_ref())
        .and_then(|g| g.final_grade.clone().or_else(|| g.current_grade.clone()))
        .unwrap_or_default()
}
