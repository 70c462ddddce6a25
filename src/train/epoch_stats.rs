use serde::{Serialize, Deserialize};

/// Per-epoch training statistics emitted by `train_loop`.
///
/// When a progress channel is configured in `TrainConfig`, the training loop
/// sends one `EpochStats` value at the end of every completed epoch,
/// including the converging one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Epoch bound for this run (`max_epochs`).
    pub total_epochs: usize,
    /// Samples that triggered an update during this epoch.
    pub errors: usize,
    /// Wall-clock duration of this single epoch in microseconds.
    pub elapsed_us: u64,
}
