//! Progress notifications for long-running exports.

/// Receives `(done, total)` after each unit of work.
///
/// Implemented for every `FnMut(usize, usize)` closure, so callers can pass
/// `&mut |done, total| …` directly.
pub trait ProgressListener {
    fn on_progress(&mut self, done: usize, total: usize);
}

impl<F> ProgressListener for F
where
    F: FnMut(usize, usize),
{
    fn on_progress(&mut self, done: usize, total: usize) {
        self(done, total);
    }
}

/// Listener that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressListener for NoProgress {
    fn on_progress(&mut self, _done: usize, _total: usize) {}
}
