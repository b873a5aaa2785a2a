//! # monkey
//!
//! monkey is a tree-walking interpreter for the Monkey programming language,
//! written in Rust. It lexes, parses, and evaluates programs with integers,
//! booleans, strings, first-class functions with closures, and a small set of
//! builtins.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    error::{ParseError, SyntaxErrors},
    interpreter::{
        evaluator::core::Evaluator, lexer::Lexer, parser::core::Parser, value::core::Object,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement`, and `Expression` types
/// that represent source code as a tree. The AST is built by the parser and
/// walked by the evaluator. Every node prints back to a fully parenthesized
/// source form.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing or
/// evaluating code.
///
/// # Responsibilities
/// - Defines error enums for syntax errors and runtime errors.
/// - Attaches line numbers to syntax errors.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, and value
/// representations to provide a complete runtime for Monkey programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Diagnostic logging setup.
pub mod logging;
/// The interactive read-eval-print loop.
pub mod repl;
/// General utilities for safe numeric conversion.
pub mod util;

/// Parses a whole source string.
///
/// Returns the best-effort program together with every syntax error found.
/// The program must not be evaluated unless the error list is empty.
///
/// # Examples
/// ```
/// let (program, errors) = monkey::parse("let x = 5 * (2 + 3);");
/// assert!(errors.is_empty());
/// assert_eq!(program.to_string(), "let x = (5 * (2 + 3));");
///
/// let (_, errors) = monkey::parse("let = 5;");
/// assert_eq!(errors[0].to_string(), "expected next token to be IDENT, got = instead");
/// ```
#[must_use]
pub fn parse(source: &str) -> (Program, Vec<ParseError>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    (program, parser.into_errors())
}

/// Returns the final evaluation result after execution.
///
/// This function parses the provided source and, if there are no syntax
/// errors, evaluates it in a fresh global scope. The result is the value of
/// the last statement, or `None` when that statement produces no value. With
/// `auto_print` set, a final value is also printed to stdout.
///
/// # Errors
/// Returns [`SyntaxErrors`] if parsing fails (nothing is evaluated in that
/// case), or the [`RuntimeError`](error::RuntimeError) that stopped
/// evaluation.
///
/// # Examples
/// ```
/// use monkey::{get_result, interpreter::value::core::Object};
///
/// let source = "let add = fn(a, b) { a + b }; add(2, 2)";
/// assert_eq!(get_result(source, false).unwrap(), Some(Object::Integer(4)));
///
/// // Example with an intentional error (unknown identifier).
/// let source = "let y = x + 1";
/// let err = get_result(source, false).unwrap_err();
/// assert_eq!(err.to_string(), "identifier not found: x");
/// ```
pub fn get_result(source: &str, auto_print: bool) -> Result<Option<Object>, Box<dyn std::error::Error>> {
    let (program, errors) = parse(source);
    if !errors.is_empty() {
        return Err(Box::new(SyntaxErrors(errors)));
    }

    let result = Evaluator::new().eval_program(&program)?;

    if auto_print && let Some(value) = &result {
        println!("{value}");
    }

    Ok(result)
}
