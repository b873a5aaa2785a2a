/// Function application, arity checks, and the builtin lookup table.
pub mod core;
/// The `len` builtin.
pub mod builtin;
/// The `puts` builtin.
///
/// Writes values to standard output.
pub mod print;
