//! Two-input logic gates with labels in {-1, +1}.

fn gate(truth: [bool; 4]) -> (Vec<Vec<f64>>, Vec<f64>) {
    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let labels = truth.iter().map(|&t| if t { 1.0 } else { -1.0 }).collect();
    (inputs, labels)
}

pub fn or_gate() -> (Vec<Vec<f64>>, Vec<f64>) {
    gate([false, true, true, true])
}

pub fn and_gate() -> (Vec<Vec<f64>>, Vec<f64>) {
    gate([false, false, false, true])
}

/// Not linearly separable.
pub fn xor_gate() -> (Vec<Vec<f64>>, Vec<f64>) {
    gate([false, true, true, false])
}
