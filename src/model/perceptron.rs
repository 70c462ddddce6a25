use std::sync::mpsc;

use crate::data::validate::{check_dimension, check_labels, check_training_set};
use crate::error::{PerceptronError, Result};
use crate::model::config::PerceptronConfig;
use crate::model::label::Label;
use crate::model::params::LinearParams;
use crate::optim::perceptron_rule::PerceptronRule;
use crate::train::epoch_stats::EpochStats;
use crate::train::fit_report::FitReport;
use crate::train::loop_fn::train_loop;
use crate::train::train_config::TrainConfig;

/// Binary linear classifier trained with the perceptron rule.
///
/// Starts unfit. Every successful [`fit`](Perceptron::fit) zeroes the
/// parameters and retrains from scratch; a rejected call leaves the previous
/// parameters in place.
#[derive(Debug, Clone)]
pub struct Perceptron {
    config: PerceptronConfig,
    params: Option<LinearParams>,
}

impl Default for Perceptron {
    fn default() -> Self {
        Perceptron {
            config: PerceptronConfig::default(),
            params: None,
        }
    }
}

impl Perceptron {
    /// Builds an unfit perceptron, rejecting a non-positive learning rate or
    /// a zero epoch bound.
    pub fn new(config: PerceptronConfig) -> Result<Perceptron> {
        config.validate()?;
        Ok(Perceptron { config, params: None })
    }

    pub fn config(&self) -> &PerceptronConfig {
        &self.config
    }

    pub fn is_fitted(&self) -> bool {
        self.params.is_some()
    }

    pub fn weights(&self) -> Option<&[f64]> {
        self.params.as_ref().map(|p| p.weights.as_slice())
    }

    pub fn bias(&self) -> Option<f64> {
        self.params.as_ref().map(|p| p.bias)
    }

    /// Trains on `inputs` (n_samples x n_features) with labels in {-1, +1}.
    pub fn fit(&mut self, inputs: &[Vec<f64>], labels: &[f64]) -> Result<FitReport> {
        self.fit_inner(inputs, labels, None)
    }

    /// Like [`fit`](Perceptron::fit), also sending one [`EpochStats`] per
    /// completed epoch on `progress_tx`.
    pub fn fit_with_progress(
        &mut self,
        inputs: &[Vec<f64>],
        labels: &[f64],
        progress_tx: mpsc::Sender<EpochStats>,
    ) -> Result<FitReport> {
        self.fit_inner(inputs, labels, Some(progress_tx))
    }

    fn fit_inner(
        &mut self,
        inputs: &[Vec<f64>],
        labels: &[f64],
        progress_tx: Option<mpsc::Sender<EpochStats>>,
    ) -> Result<FitReport> {
        let n_features = check_training_set(inputs, labels)?;

        let mut train_config = TrainConfig::new(self.config.max_epochs, self.config.verbosity);
        if let Some(tx) = progress_tx {
            train_config = train_config.with_progress(tx);
        }
        let rule = PerceptronRule::new(self.config.learning_rate);

        let mut params = LinearParams::zeros(n_features);
        let report = train_loop(&mut params, inputs, labels, &rule, train_config);
        self.params = Some(params);
        Ok(report)
    }

    /// Raw activations `dot(x, weights) + bias`, one per row.
    pub fn decision_function(&self, inputs: &[Vec<f64>]) -> Result<Vec<f64>> {
        let params = self.params.as_ref().ok_or(PerceptronError::NotFitted)?;
        check_dimension(inputs, params.n_features())?;
        Ok(inputs.iter().map(|x| params.activation(x)).collect())
    }

    /// Predicted labels, one per row.
    ///
    /// An activation of exactly zero predicts +1, whereas training counts the
    /// same tie as a mistake.
    pub fn predict(&self, inputs: &[Vec<f64>]) -> Result<Vec<Label>> {
        Ok(self
            .decision_function(inputs)?
            .into_iter()
            .map(Label::from_activation)
            .collect())
    }

    /// Fraction of rows whose prediction equals the given label.
    pub fn score(&self, inputs: &[Vec<f64>], labels: &[f64]) -> Result<f64> {
        let predictions = self.predict(inputs)?;
        check_labels(labels, inputs.len())?;
        if predictions.is_empty() {
            return Err(PerceptronError::InvalidInput("cannot score an empty set".to_string()));
        }
        let correct = predictions
            .iter()
            .zip(labels.iter())
            .filter(|(p, y)| p == y)
            .count();
        Ok(correct as f64 / predictions.len() as f64)
    }
}
