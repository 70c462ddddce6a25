pub mod synthetic;
pub mod toy;
pub mod validate;

pub use synthetic::linearly_separable;
pub use toy::{and_gate, or_gate, xor_gate};
