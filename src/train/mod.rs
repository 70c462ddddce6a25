pub mod epoch_stats;
pub mod fit_report;
pub mod logger;
pub mod loop_fn;
pub mod train_config;

pub use epoch_stats::EpochStats;
pub use fit_report::FitReport;
pub use logger::{convergence_notice, TrainingLogger, Verbosity};
pub use loop_fn::train_loop;
pub use train_config::TrainConfig;
