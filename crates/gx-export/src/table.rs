//! Table serializer.
//!
//! Projects the merged directory onto a fixed column layout and renders it
//! as quoted, comma-separated text.

use gx_core::{AssignmentRecord, StudentRecord, format_score};

use crate::directory::Directory;

pub const STUDENT_HEADER: &str = "Student";
pub const LOGIN_ID_HEADER: &str = "Login ID";
pub const EMAIL_HEADER: &str = "Email";
pub const FINAL_GRADE_HEADER: &str = "Final Grade";

/// Materialized grid: one header row followed by one row per student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Lay out `directory` with one column per assignment in `columns`.
    ///
    /// Students without a single recorded score are left out unless
    /// `include_ungraded` is set.
    #[must_use]
    pub fn build(
        directory: &Directory,
        columns: &[AssignmentRecord],
        include_ungraded: bool,
    ) -> Self {
        let header = [STUDENT_HEADER, LOGIN_ID_HEADER, EMAIL_HEADER]
            .into_iter()
            .map(str::to_string)
            .chain(columns.iter().map(|c| c.title.clone()))
            .chain(std::iter::once(FINAL_GRADE_HEADER.to_string()))
            .collect();

        let rows = directory
            .iter()
            .filter(|student| include_ungraded || student.has_recorded_score())
            .map(|student| student_row(student, columns))
            .collect();

        Self { header, rows }
    }

    #[must_use]
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Student rows, header excluded.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Render as CSV: every cell quoted, cells joined by `,`, rows by `\n`.
    #[must_use]
    pub fn to_csv(&self) -> String {
        std::iter::once(&self.header)
            .chain(&self.rows)
            .map(|row| {
                row.iter()
                    .map(|cell| quote_cell(cell))
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn student_row(student: &StudentRecord, columns: &[AssignmentRecord]) -> Vec<String> {
    let mut row = Vec::with_capacity(columns.len() + 4);
    row.push(student.display_name.clone());
    row.push(student.login_id.clone());
    row.push(student.email.clone());
    row.extend(columns.iter().map(|c| format_score(student.score_for(c.id))));
    row.push(student.final_grade.clone());
    row
}

/// Wrap a cell in double quotes, doubling any quote inside it.
#[must_use]
pub fn quote_cell(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}
