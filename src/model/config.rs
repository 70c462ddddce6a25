use serde::{Deserialize, Serialize};

use crate::error::{PerceptronError, Result};
use crate::train::logger::Verbosity;

/// Hyperparameters of a [`Perceptron`](crate::Perceptron).
///
/// Missing fields fall back to their defaults when deserialized, so a config
/// file may be as small as `{"max_epochs": 10}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerceptronConfig {
    /// Step size applied to every mistake-driven update. Must be > 0.
    pub learning_rate: f64,
    /// Upper bound on training passes over the dataset. Must be >= 1.
    pub max_epochs: usize,
    /// Training output level.
    pub verbosity: Verbosity,
}

impl Default for PerceptronConfig {
    fn default() -> Self {
        PerceptronConfig {
            learning_rate: 0.1,
            max_epochs: 1000,
            verbosity: Verbosity::Info,
        }
    }
}

impl PerceptronConfig {
    pub fn new(learning_rate: f64, max_epochs: usize) -> Self {
        PerceptronConfig {
            learning_rate,
            max_epochs,
            ..Default::default()
        }
    }

    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn validate(&self) -> Result<()> {
        // is_finite is false for NaN too.
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(PerceptronError::InvalidConfiguration {
                name: "learning_rate".to_string(),
                value: self.learning_rate.to_string(),
            });
        }
        if self.max_epochs == 0 {
            return Err(PerceptronError::InvalidConfiguration {
                name: "max_epochs".to_string(),
                value: self.max_epochs.to_string(),
            });
        }
        Ok(())
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path).map_err(config_err)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self).map_err(config_err)
    }

    /// Deserializes and validates a config from a JSON file.
    pub fn load_json(path: &str) -> Result<PerceptronConfig> {
        let file = std::fs::File::open(path).map_err(config_err)?;
        let reader = std::io::BufReader::new(file);
        let config: PerceptronConfig = serde_json::from_reader(reader).map_err(config_err)?;
        config.validate()?;
        Ok(config)
    }
}

fn config_err(e: impl std::fmt::Display) -> PerceptronError {
    PerceptronError::Config(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = PerceptronConfig::default();
        assert_eq!(config.learning_rate, 0.1);
        assert_eq!(config.max_epochs, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_learning_rate() {
        for lr in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            let err = PerceptronConfig::new(lr, 10).validate().unwrap_err();
            assert!(matches!(
                err,
                PerceptronError::InvalidConfiguration { ref name, .. } if name == "learning_rate"
            ));
        }
    }

    #[test]
    fn rejects_zero_epochs() {
        let err = PerceptronConfig::new(0.1, 0).validate().unwrap_err();
        assert!(matches!(
            err,
            PerceptronError::InvalidConfiguration { ref name, .. } if name == "max_epochs"
        ));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: PerceptronConfig = serde_json::from_str(r#"{"max_epochs": 10}"#).unwrap();
        assert_eq!(config.max_epochs, 10);
        assert_eq!(config.learning_rate, 0.1);
        assert_eq!(config.verbosity, Verbosity::Info);
    }

    #[test]
    fn json_file_round_trip() {
        let path = std::env::temp_dir().join(format!("perceptron-config-{}.json", std::process::id()));
        let path = path.to_str().unwrap();
        let config = PerceptronConfig::new(0.25, 42).with_verbosity(Verbosity::Silent);

        config.save_json(path).unwrap();
        let loaded = PerceptronConfig::load_json(path).unwrap();
        std::fs::remove_file(path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_json_validates() {
        let path = std::env::temp_dir().join(format!("perceptron-bad-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"learning_rate": -1.0}"#).unwrap();
        let result = PerceptronConfig::load_json(path.to_str().unwrap());
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(PerceptronError::InvalidConfiguration { .. })));
    }

    #[test]
    fn missing_file_is_config_error() {
        let result = PerceptronConfig::load_json("/definitely/not/here.json");
        assert!(matches!(result, Err(PerceptronError::Config(_))));
    }
}
