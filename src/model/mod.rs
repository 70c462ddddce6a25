pub mod config;
pub mod label;
pub mod params;
pub mod perceptron;

pub use config::PerceptronConfig;
pub use label::Label;
pub use params::LinearParams;
pub use perceptron::Perceptron;
