//! examples of usage of RustedExactAlgebra
/// Symbolic transformations examples
pub mod symbolic_examples;
