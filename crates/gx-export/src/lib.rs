//! # gx-export
//!
//! Canvas grade export pipeline.
//!
//! One export runs four stages, strictly in order:
//! 1. [`directory::build_directory`] fetches the student roster once.
//! 2. [`merge::Merger::merge_course`] fetches assignments and, one assignment
//!    at a time, folds its submissions into the directory.
//! 3. [`table::Table::build`] lays the result out as
//!    `Student, Login ID, Email, <assignments…>, Final Grade`.
//! 4. The table is rendered to a BOM-prefixed [`CsvPayload`].
//!
//! Any fetch failure aborts the whole export; there is no partial output.
//!
//! ```no_run
//! # async fn demo() -> Result<(), gx_export::ExportError> {
//! use gx_canvas::{CanvasApi, CanvasClient};
//! use gx_export::{ExportOptions, export};
//!
//! let client = CanvasClient::new("gradex/0.1")?.with_access_token("7~token");
//! let api = CanvasApi::new(client, "https://school.instructure.com", 100)?;
//! let payload = export(&api, "1234", &ExportOptions::default(), &mut |done: usize, total: usize| {
//!     eprintln!("{done}/{total}");
//! })
//! .await?;
//! std::fs::write("grades.csv", payload.bytes()).ok();
//! # Ok(())
//! # }
//! ```

pub mod directory;
pub mod merge;
pub mod payload;
pub mod progress;
pub mod table;

mod error;

pub use directory::{Directory, build_directory};
pub use error::ExportError;
pub use merge::{MergeStats, Merger};
pub use payload::{CsvPayload, DEFAULT_FILE_NAME, MIME_TYPE};
pub use progress::{NoProgress, ProgressListener};
pub use table::Table;

use gx_canvas::{CanvasApi, PageSource};
use gx_core::CourseId;

/// Knobs for one export run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportOptions {
    /// Keep students without any recorded score.
    pub include_ungraded: bool,
}

/// Export a course given raw user input for the course (an id or a Canvas
/// course URL).
///
/// # Errors
///
/// Returns [`ExportError::Core`] if `course` does not name a course, before
/// any request is made; otherwise see [`export_course`].
pub async fn export<S, P>(
    api: &CanvasApi<S>,
    course: &str,
    options: &ExportOptions,
    progress: &mut P,
) -> Result<CsvPayload, ExportError>
where
    S: PageSource + Sync,
    P: ProgressListener + ?Sized,
{
    let course = CourseId::parse(course)?;
    export_course(api, course, options, progress).await
}

/// Build the grade report for `course`.
///
/// # Errors
///
/// Returns [`ExportError::Canvas`] if any roster, assignment, or submission
/// request fails.
pub async fn export_course<S, P>(
    api: &CanvasApi<S>,
    course: CourseId,
    options: &ExportOptions,
    progress: &mut P,
) -> Result<CsvPayload, ExportError>
where
    S: PageSource + Sync,
    P: ProgressListener + ?Sized,
{
    let directory = build_directory(api, course).await?;

    let mut merger = Merger::new(directory);
    let stats = merger.merge_course(api, course, progress).await?;
    let (directory, columns) = merger.into_parts();

    let table = Table::build(&directory, &columns, options.include_ungraded);
    let payload = CsvPayload::new(table.to_csv(), table.rows().len(), columns.len());

    tracing::info!(
        %course,
        students = payload.student_rows,
        assignments = payload.assignment_columns,
        recorded = stats.recorded,
        discarded = stats.discarded,
        "export complete"
    );

    Ok(payload)
}
