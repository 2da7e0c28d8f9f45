//! Assignment/submission merger.
//!
//! Walks the course assignments one at a time, fetches each assignment's
//! submissions, and folds every score into the matching student's grade map.
//! Assignments are never fetched concurrently: progress stays monotonic and
//! column order always matches the assignment list.

use gx_canvas::{CanvasApi, CanvasError, CanvasSubmission, PageSource};
use gx_core::{AssignmentId, AssignmentRecord, CourseId};

use crate::directory::Directory;
use crate::progress::ProgressListener;

/// Counters for one merged batch of submissions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Submissions written into a student's grade map.
    pub recorded: usize,
    /// Submissions whose student is not in the directory, or has no id.
    pub discarded: usize,
}

impl MergeStats {
    const fn add(&mut self, other: Self) {
        self.recorded += other.recorded;
        self.discarded += other.discarded;
    }
}

/// Owns the directory and the column sequence for one export.
#[derive(Debug, Default)]
pub struct Merger {
    directory: Directory,
    columns: Vec<AssignmentRecord>,
}

impl Merger {
    /// Start merging into a fully built directory.
    #[must_use]
    pub const fn new(directory: Directory) -> Self {
        Self {
            directory,
            columns: Vec::new(),
        }
    }

    #[must_use]
    pub const fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Columns in the order assignments were first seen.
    #[must_use]
    pub fn columns(&self) -> &[AssignmentRecord] {
        &self.columns
    }

    #[must_use]
    pub fn into_parts(self) -> (Directory, Vec<AssignmentRecord>) {
        (self.directory, self.columns)
    }

    /// Append a column. An assignment id that already has a column keeps its
    /// original position; distinct assignments sharing a title each get one.
    pub fn add_column(&mut self, assignment: AssignmentRecord) {
        if !self.columns.iter().any(|c| c.id == assignment.id) {
            self.columns.push(assignment);
        }
    }

    /// Fold one assignment's submissions into the directory.
    ///
    /// Unknown students are dropped, never added. A submission without a
    /// score records a blank. Re-merging overwrites: the last submission seen
    /// for a (student, assignment) pair wins.
    pub fn merge_submissions(
        &mut self,
        assignment: AssignmentId,
        submissions: impl IntoIterator<Item = CanvasSubmission>,
    ) -> MergeStats {
        let mut stats = MergeStats::default();
        for submission in submissions {
            let student = submission
                .student_id()
                .and_then(|id| self.directory.get_mut(id));
            match student {
                Some(student) => {
                    student.record_score(assignment, submission.score);
                    stats.recorded += 1;
                }
                None => {
                    tracing::trace!(
                        %assignment,
                        user_id = ?submission.student_id(),
                        "discarding submission for student outside the directory"
                    );
                    stats.discarded += 1;
                }
            }
        }
        stats
    }

    /// Fetch every assignment of `course` and merge its submissions.
    ///
    /// Reports `(0, total)` once the assignment list is known and
    /// `(done, total)` after each assignment is fully merged. Assignments
    /// without an id are skipped with a warning and do not count toward
    /// `total`.
    ///
    /// # Errors
    ///
    /// Returns the first [`CanvasError`]; the merge is abandoned at that
    /// point.
    pub async fn merge_course<S, P>(
        &mut self,
        api: &CanvasApi<S>,
        course: CourseId,
        progress: &mut P,
    ) -> Result<MergeStats, CanvasError>
    where
        S: PageSource + Sync,
        P: ProgressListener + ?Sized,
    {
        let columns: Vec<AssignmentRecord> = api
            .list_assignments(course)
            .await?
            .into_iter()
            .filter_map(|assignment| match assignment.id {
                Some(id) => Some(AssignmentRecord::new(id, assignment.name.unwrap_or_default())),
                None => {
                    tracing::warn!(name = ?assignment.name, "skipping assignment without id");
                    None
                }
            })
            .collect();
        let total = columns.len();
        progress.on_progress(0, total);

        let mut totals = MergeStats::default();
        for (done, record) in columns.into_iter().enumerate() {
            self.add_column(record.clone());

            let submissions = api.list_submissions(course, record.id).await?;
            let stats = self.merge_submissions(record.id, submissions);
            tracing::info!(
                assignment = %record.id,
                title = %record.title,
                recorded = stats.recorded,
                discarded = stats.discarded,
                "merged submissions"
            );
            totals.add(stats);

            progress.on_progress(done + 1, total);
        }

        Ok(totals)
    }
}
