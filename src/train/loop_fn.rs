use std::time::Instant;

use crate::model::params::LinearParams;
use crate::optim::perceptron_rule::PerceptronRule;
use crate::train::epoch_stats::EpochStats;
use crate::train::fit_report::FitReport;
use crate::train::logger::TrainingLogger;
use crate::train::train_config::TrainConfig;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `params` in place for at most `config.max_epochs` epochs.
///
/// # Arguments
/// - `params`  — starting weights/bias; modified in place
/// - `inputs`  — training samples, each of length `params.n_features()`
/// - `labels`  — targets in {-1, +1}, same length as `inputs`
/// - `rule`    — the update rule (carries the learning rate)
/// - `config`  — epoch bound, verbosity, optional progress channel and log sink
///
/// Samples are visited in input order and each update is visible to the
/// next sample. The loop stops after the first epoch with zero errors;
/// otherwise it runs exactly `max_epochs` epochs.
///
/// Shapes are not checked here; callers validate them first.
pub fn train_loop(
    params: &mut LinearParams,
    inputs: &[Vec<f64>],
    labels: &[f64],
    rule: &PerceptronRule,
    config: TrainConfig,
) -> FitReport {
    let TrainConfig {
        max_epochs,
        verbosity,
        progress_tx,
        log_writer,
    } = config;
    let mut logger = match log_writer {
        Some(out) => TrainingLogger::with_writer(verbosity, out),
        None => TrainingLogger::new(verbosity),
    };
    let mut report = FitReport {
        epochs_run: 0,
        converged_at: None,
        final_errors: 0,
    };

    for epoch in 1..=max_epochs {
        let t_start = Instant::now();
        let errors = run_one_epoch(params, inputs, labels, rule);

        let stats = EpochStats {
            epoch,
            total_epochs: max_epochs,
            errors,
            elapsed_us: t_start.elapsed().as_micros() as u64,
        };
        logger.log_epoch(&stats);
        if let Some(ref tx) = progress_tx {
            // Progress is observational; a gone receiver is not a stop signal.
            let _ = tx.send(stats);
        }

        report.epochs_run = epoch;
        report.final_errors = errors;

        if errors == 0 {
            report.converged_at = Some(epoch);
            logger.log_converged(epoch);
            break;
        }
    }

    report
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// One sequential pass over the data. Returns the number of updates made.
fn run_one_epoch(
    params: &mut LinearParams,
    inputs: &[Vec<f64>],
    labels: &[f64],
    rule: &PerceptronRule,
) -> usize {
    let mut errors = 0;
    for (x, &target) in inputs.iter().zip(labels.iter()) {
        if rule.step(params, x, target) {
            errors += 1;
        }
    }
    errors
}
