use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::train::epoch_stats::EpochStats;

/// How much the training loop prints to stdout.
///
/// - `Silent` — nothing at all
/// - `Info`   — only the convergence notice
/// - `Debug`  — the convergence notice plus one line per epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verbosity {
    Silent,
    #[default]
    Info,
    Debug,
}

/// Line logger driven by the training loop. Writes to stdout unless another
/// sink is supplied; write failures are ignored.
pub struct TrainingLogger {
    verbosity: Verbosity,
    out: Box<dyn Write>,
}

impl TrainingLogger {
    pub fn new(verbosity: Verbosity) -> Self {
        Self::with_writer(verbosity, Box::new(io::stdout()))
    }

    pub fn with_writer(verbosity: Verbosity, out: Box<dyn Write>) -> Self {
        TrainingLogger { verbosity, out }
    }

    pub fn log_epoch(&mut self, stats: &EpochStats) {
        if self.verbosity == Verbosity::Debug {
            let _ = writeln!(self.out, "{}", epoch_line(stats));
        }
    }

    /// Called only on the convergence path; a run that exhausts its epochs
    /// stays quiet.
    pub fn log_converged(&mut self, epoch: usize) {
        if self.verbosity != Verbosity::Silent {
            let _ = writeln!(self.out, "{}", convergence_notice(epoch));
        }
    }
}

/// The convergence notice, with `epoch` 1-indexed.
pub fn convergence_notice(epoch: usize) -> String {
    format!("Converged after {epoch} epochs.")
}

fn epoch_line(stats: &EpochStats) -> String {
    format!(
        "epoch {}/{}: errors = {} ({} us)",
        stats.epoch, stats.total_epochs, stats.errors, stats.elapsed_us
    )
}

/// Cloneable in-memory sink, for capturing what a logger wrote.
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct SharedBuf(std::rc::Rc<std::cell::RefCell<Vec<u8>>>);

#[cfg(test)]
impl SharedBuf {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

#[cfg(test)]
impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logger(verbosity: Verbosity) -> (TrainingLogger, SharedBuf) {
        let buf = SharedBuf::default();
        (TrainingLogger::with_writer(verbosity, Box::new(buf.clone())), buf)
    }

    fn stats(epoch: usize) -> EpochStats {
        EpochStats { epoch, total_epochs: 10, errors: 3, elapsed_us: 7 }
    }

    #[test]
    fn info_logs_only_the_notice() {
        let (mut log, buf) = logger(Verbosity::Info);
        log.log_epoch(&stats(1));
        log.log_converged(4);
        assert_eq!(buf.contents(), "Converged after 4 epochs.\n");
    }

    #[test]
    fn debug_logs_epochs_and_notice() {
        let (mut log, buf) = logger(Verbosity::Debug);
        log.log_epoch(&stats(1));
        log.log_converged(1);
        assert_eq!(
            buf.contents(),
            "epoch 1/10: errors = 3 (7 us)\nConverged after 1 epochs.\n"
        );
    }

    #[test]
    fn silent_logs_nothing() {
        let (mut log, buf) = logger(Verbosity::Silent);
        log.log_epoch(&stats(1));
        log.log_converged(2);
        assert_eq!(buf.contents(), "");
    }

    #[test]
    fn notice_carries_epoch_number() {
        assert_eq!(convergence_notice(6), "Converged after 6 epochs.");
    }

    #[test]
    fn verbosity_parses_from_snake_case() {
        let v: Verbosity = serde_json::from_str("\"debug\"").unwrap();
        assert_eq!(v, Verbosity::Debug);
        assert_eq!(Verbosity::default(), Verbosity::Info);
    }

    #[test]
    fn epoch_line_format() {
        assert_eq!(epoch_line(&stats(2)), "epoch 2/10: errors = 3 (7 us)");
    }
}
