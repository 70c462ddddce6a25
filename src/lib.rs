pub mod data;
pub mod error;
pub mod math;
pub mod model;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use error::{PerceptronError, Result};
pub use model::config::PerceptronConfig;
pub use model::label::Label;
pub use model::perceptron::Perceptron;
pub use train::epoch_stats::EpochStats;
pub use train::fit_report::FitReport;
pub use train::logger::Verbosity;
