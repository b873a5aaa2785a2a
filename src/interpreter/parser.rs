/// Parser state and the expression-parsing loop.
///
/// Holds the two-token lookahead, the error list, the prefix/infix dispatch
/// tables, and the precedence-climbing driver.
pub mod core;

/// Prefix parse functions.
///
/// Builds expressions that start at the current token: literals,
/// identifiers, prefix operators, grouping, `if`, and function literals.
pub mod unary;

/// Infix parse functions and binding precedence.
///
/// Combines an already parsed left-hand side with an operator or call.
pub mod binary;

/// Block parsing.
///
/// Parses `{ ... }` statement sequences used by blocks, `if` branches, and
/// function bodies.
pub mod block;

/// Statement parsing.
///
/// Implements `let`, assignment, `return`, block, and expression statements.
pub mod statement;

/// Shared helpers for comma-separated lists.
pub mod utils;
