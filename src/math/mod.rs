pub mod vector;

pub use vector::{activation, axpy, dot};
