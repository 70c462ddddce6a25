use std::process::ExitCode;

use perceptron_rs::data::or_gate;
use perceptron_rs::{Perceptron, PerceptronConfig};

// Trains on the OR gate and prints the learned model.
// Usage:
//   cargo run                      (learning_rate 0.1, max_epochs 10)
//   cargo run -- config.json       (hyperparameters from a JSON file)
fn main() -> ExitCode {
    let config = match std::env::args().nth(1) {
        Some(path) => match PerceptronConfig::load_json(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => PerceptronConfig::new(0.1, 10),
    };

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: PerceptronConfig) -> perceptron_rs::Result<()> {
    let (inputs, labels) = or_gate();
    let mut perceptron = Perceptron::new(config)?;
    perceptron.fit(&inputs, &labels)?;

    println!("Weights: {:?}", perceptron.weights().unwrap_or_default());
    println!("Bias: {:?}", perceptron.bias().unwrap_or_default());
    let predictions: Vec<f64> = perceptron.predict(&inputs)?.into_iter().map(f64::from).collect();
    println!("Predictions: {:?}", predictions);
    Ok(())
}
