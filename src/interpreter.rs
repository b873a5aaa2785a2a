/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST, resolves names through nested scopes, applies
/// operators and functions, and produces a value or a runtime error. It is
/// the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates statements and expressions depth-first, left to right.
/// - Creates scopes for blocks and calls, and captures them in closures.
/// - Unwinds `return` to the nearest call and errors to the top.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens:
/// identifiers, integer and string literals, operators, delimiters, and
/// keywords. Unrecognized input becomes an `ILLEGAL` token instead of an
/// error.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A Pratt parser drives expression parsing by operator precedence; statements
/// are parsed by recursive descent. Syntax errors are collected rather than
/// raised.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Declares the `Object` enum for runtime values and the environment that
/// binds names to them.
pub mod value;
