use crate::math::vector::activation;

/// Learned state of a linear classifier: one weight per feature plus a bias.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearParams {
    pub weights: Vec<f64>,
    pub bias: f64,
}

impl LinearParams {
    /// All-zero weights and zero bias.
    pub fn zeros(n_features: usize) -> LinearParams {
        LinearParams {
            weights: vec![0.0; n_features],
            bias: 0.0,
        }
    }

    pub fn n_features(&self) -> usize {
        self.weights.len()
    }

    /// `dot(x, weights) + bias`.
    pub fn activation(&self, x: &[f64]) -> f64 {
        activation(x, &self.weights, self.bias)
    }
}
