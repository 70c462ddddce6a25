use crate::{math::vector::axpy, model::params::LinearParams};

/// The classical perceptron update.
pub struct PerceptronRule {
    pub learning_rate: f64,
}

impl PerceptronRule {
    pub fn new(learning_rate: f64) -> PerceptronRule {
        PerceptronRule { learning_rate }
    }

    /// Training-time mistake test. A sample sitting exactly on the boundary
    /// (`target * activation == 0`) counts as a mistake.
    pub fn is_mistake(target: f64, activation: f64) -> bool {
        target * activation <= 0.0
    }

    /// Checks one sample and updates `params` in place if it is a mistake.
    /// Returns whether an update was applied.
    pub fn step(&self, params: &mut LinearParams, x: &[f64], target: f64) -> bool {
        if !Self::is_mistake(target, params.activation(x)) {
            return false;
        }
        let update = self.learning_rate * target;
        axpy(update, x, &mut params.weights);
        params.bias += update;
        true
    }
}
