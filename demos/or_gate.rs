use perceptron_rs::data::{and_gate, or_gate};
use perceptron_rs::{Perceptron, PerceptronConfig};

fn main() -> perceptron_rs::Result<()> {
    for (name, (inputs, labels)) in [("OR", or_gate()), ("AND", and_gate())] {
        let mut perceptron = Perceptron::new(PerceptronConfig::new(0.1, 10))?;
        let report = perceptron.fit(&inputs, &labels)?;

        println!("{name}: {report:?}");
        println!("  weights = {:?}, bias = {:?}", perceptron.weights(), perceptron.bias());
        for (input, prediction) in inputs.iter().zip(perceptron.predict(&inputs)?) {
            println!("  {:?} -> {}", input, prediction);
        }
    }
    Ok(())
}
