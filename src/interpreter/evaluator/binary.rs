/// Dispatch for infix operations.
pub mod core;
/// Integer arithmetic and comparisons.
pub mod integer;
/// String concatenation and comparison.
pub mod string;
