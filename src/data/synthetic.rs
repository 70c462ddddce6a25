use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{PerceptronError, Result};
use crate::math::vector::dot;

/// Minimum distance between any generated point and the hidden hyperplane,
/// relative to the norm of `(weights, bias)`.
const MARGIN: f64 = 0.1;

/// Generates `n_samples` points in `[-1, 1]^n_features` labeled by a random
/// hidden hyperplane, keeping only points at least `MARGIN` away from it.
///
/// The same seed always yields the same dataset. The margin bounds the
/// number of perceptron mistakes by `(n_features + 1) / MARGIN^2`.
pub fn linearly_separable(
    n_samples: usize,
    n_features: usize,
    seed: u64,
) -> Result<(Vec<Vec<f64>>, Vec<f64>)> {
    if n_samples == 0 || n_features == 0 {
        return Err(PerceptronError::InvalidInput(format!(
            "cannot generate {n_samples} x {n_features} data"
        )));
    }
    let mut rng = StdRng::seed_from_u64(seed);

    // Hidden separator; redrawn until its norm is usable.
    let (weights, bias, norm) = loop {
        let weights: Vec<f64> = (0..n_features).map(|_| rng.gen_range(-1.0..=1.0)).collect();
        let bias: f64 = rng.gen_range(-0.5..=0.5);
        let norm = (dot(&weights, &weights) + bias * bias).sqrt();
        if norm > 0.1 {
            break (weights, bias, norm);
        }
    };

    let mut inputs = Vec::with_capacity(n_samples);
    let mut labels = Vec::with_capacity(n_samples);
    while inputs.len() < n_samples {
        let x: Vec<f64> = (0..n_features).map(|_| rng.gen_range(-1.0..=1.0)).collect();
        let z = dot(&x, &weights) + bias;
        if z.abs() / norm < MARGIN {
            continue;
        }
        labels.push(if z > 0.0 { 1.0 } else { -1.0 });
        inputs.push(x);
    }
    Ok((inputs, labels))
}
