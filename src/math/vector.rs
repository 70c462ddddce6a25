/// Dot product of two equal-length slices.
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// In-place scaled add: `y[k] += alpha * x[k]` for every k.
pub fn axpy(alpha: f64, x: &[f64], y: &mut [f64]) {
    debug_assert_eq!(x.len(), y.len());
    for (yk, xk) in y.iter_mut().zip(x.iter()) {
        *yk += alpha * xk;
    }
}

/// Activation of one sample: `dot(x, weights) + bias`.
pub fn activation(x: &[f64], weights: &[f64], bias: f64) -> f64 {
    dot(x, weights) + bias
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_of_orthogonal_vectors_is_zero() {
        assert_eq!(dot(&[1.0, 0.0], &[0.0, 5.0]), 0.0);
        assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
    }

    #[test]
    fn axpy_accumulates_into_target() {
        let mut y = vec![1.0, 1.0];
        axpy(-0.5, &[2.0, 4.0], &mut y);
        assert_eq!(y, vec![0.0, -1.0]);
    }

    #[test]
    fn activation_adds_bias() {
        assert_eq!(activation(&[1.0, 1.0], &[0.5, 0.5], -1.0), 0.0);
    }
}
