/// Outcome of one `fit` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitReport {
    /// Epochs actually executed.
    pub epochs_run: usize,
    /// 1-indexed epoch whose pass produced zero errors, if any.
    pub converged_at: Option<usize>,
    /// Error count of the last executed epoch.
    pub final_errors: usize,
}

impl FitReport {
    pub fn converged(&self) -> bool {
        self.converged_at.is_some()
    }
}
