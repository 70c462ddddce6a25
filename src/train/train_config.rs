use std::io::Write;
use std::sync::mpsc;

use crate::train::epoch_stats::EpochStats;
use crate::train::logger::Verbosity;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `max_epochs`  — upper bound on full passes over the training data
/// - `verbosity`   — what the loop prints to stdout
/// - `progress_tx` — optional channel sender; one `EpochStats` is sent per
///                   completed epoch. A dropped receiver is ignored and
///                   training carries on.
/// - `log_writer`  — optional sink for the training logger; stdout if `None`
pub struct TrainConfig {
    pub max_epochs: usize,
    pub verbosity: Verbosity,
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
    pub log_writer: Option<Box<dyn Write>>,
}

impl TrainConfig {
    /// Creates a minimal `TrainConfig` with no progress channel, logging to
    /// stdout.
    pub fn new(max_epochs: usize, verbosity: Verbosity) -> Self {
        TrainConfig {
            max_epochs,
            verbosity,
            progress_tx: None,
            log_writer: None,
        }
    }

    pub fn with_progress(mut self, tx: mpsc::Sender<EpochStats>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    pub fn with_log_writer(mut self, out: Box<dyn Write>) -> Self {
        self.log_writer = Some(out);
        self
    }
}
