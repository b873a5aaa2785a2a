/// Syntax errors.
///
/// Defines the errors the parser records while building a program. Parse
/// errors never abort a parse; they are collected and handed back alongside
/// the best-effort program.
pub mod parse_error;
/// Runtime errors.
///
/// Contains every error that can be raised while evaluating a program, such as
/// unknown identifiers, type mismatches, or calling a non-function.
pub mod runtime_error;

pub use parse_error::{ParseError, SyntaxErrors};
pub use runtime_error::RuntimeError;
