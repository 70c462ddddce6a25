use crate::error::{PerceptronError, Result};
use crate::model::label::Label;

/// Checks that `inputs` is a non-empty matrix with at least one feature and
/// rows of equal length. Returns the feature count.
pub fn check_features(inputs: &[Vec<f64>]) -> Result<usize> {
    let first = inputs
        .first()
        .ok_or_else(|| PerceptronError::InvalidInput("training data is empty".to_string()))?;
    let n_features = first.len();
    if n_features == 0 {
        return Err(PerceptronError::InvalidInput("samples have no features".to_string()));
    }
    check_dimension(inputs, n_features)?;
    Ok(n_features)
}

/// Checks that every row has exactly `n_features` values and that every value
/// is finite. A NaN activation is never a training mistake.
pub fn check_dimension(inputs: &[Vec<f64>], n_features: usize) -> Result<()> {
    for (i, row) in inputs.iter().enumerate() {
        if row.len() != n_features {
            return Err(PerceptronError::InvalidInput(format!(
                "sample {i} has {} features, expected {n_features}",
                row.len()
            )));
        }
        if let Some(j) = row.iter().position(|v| !v.is_finite()) {
            return Err(PerceptronError::InvalidInput(format!(
                "sample {i} feature {j} is {}, expected a finite value",
                row[j]
            )));
        }
    }
    Ok(())
}

/// Checks that there is one label per sample and every label is -1 or +1.
pub fn check_labels(labels: &[f64], n_samples: usize) -> Result<()> {
    if labels.len() != n_samples {
        return Err(PerceptronError::InvalidInput(format!(
            "got {} labels for {n_samples} samples",
            labels.len()
        )));
    }
    for &y in labels {
        Label::try_from(y)?;
    }
    Ok(())
}

/// Full training-set check. Returns the feature count.
pub fn check_training_set(inputs: &[Vec<f64>], labels: &[f64]) -> Result<usize> {
    let n_features = check_features(inputs)?;
    check_labels(labels, inputs.len())?;
    Ok(n_features)
}
