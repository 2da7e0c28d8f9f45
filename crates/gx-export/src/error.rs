//! Export error types.

use gx_canvas::CanvasError;
use gx_core::CoreError;
use thiserror::Error;

/// A failed export. There is no partial result: any error aborts the run.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A Canvas request failed or returned something unreadable.
    #[error(transparent)]
    Canvas(#[from] CanvasError),

    /// The export was started with invalid input.
    #[error(transparent)]
    Core(#[from] CoreError),
}
