/// Infix operator evaluation.
///
/// Routes each operation to the integer or string rules, then falls back to
/// identity equality and finally to the type-mismatch and unknown-operator
/// errors.
pub mod binary;

/// Prefix operator evaluation: logical not and integer negation.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the evaluator, statement-sequence evaluation, scoping of blocks,
/// identifier resolution, and the internal signal used to unwind `return`.
pub mod core;

/// Function application and the builtin table.
pub mod function;
