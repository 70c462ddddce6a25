pub mod perceptron_rule;

pub use perceptron_rule::PerceptronRule;
