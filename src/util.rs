/// Numeric conversion helpers.
///
/// Converts host sizes into the interpreter's `i64` integers without silent
/// truncation.
pub mod num;
