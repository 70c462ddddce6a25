//! Error types shared by the perceptron and its configuration layer.

/// Errors returned by [`Perceptron`](crate::Perceptron) and
/// [`PerceptronConfig`](crate::PerceptronConfig).
///
/// Every variant is raised before any model state is touched, so a failed
/// call leaves a previously fitted model usable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PerceptronError {
    #[error("invalid configuration: {name} = {value}")]
    InvalidConfiguration { name: String, value: String },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("model used before calling `fit`")]
    NotFitted,

    #[error("config file error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PerceptronError>;
