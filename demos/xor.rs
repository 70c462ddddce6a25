use std::sync::mpsc;

use perceptron_rs::data::xor_gate;
use perceptron_rs::{Perceptron, PerceptronConfig};

// XOR has no linear separator: training runs the full epoch bound and never
// prints a convergence notice.
fn main() -> perceptron_rs::Result<()> {
    let (inputs, labels) = xor_gate();
    let mut perceptron = Perceptron::new(PerceptronConfig::new(0.1, 100))?;

    let (tx, rx) = mpsc::channel();
    let report = perceptron.fit_with_progress(&inputs, &labels, tx)?;

    for stats in rx.iter().filter(|s| s.epoch % 20 == 0) {
        println!("Epoch {}: errors = {}", stats.epoch, stats.errors);
    }
    println!("{report:?}");
    println!("Training accuracy: {:.2}", perceptron.score(&inputs, &labels)?);

    for input in &inputs {
        let output = perceptron.predict(std::slice::from_ref(input))?;
        println!("Input: {:?} -> Output: {}", input, output[0]);
    }
    Ok(())
}
