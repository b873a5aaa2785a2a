use thiserror::Error;

use crate::{
    ast::{InfixOperator, PrefixOperator},
    interpreter::value::core::ObjectType,
};

/// Represents all errors that can occur during evaluation.
///
/// A runtime error aborts the statement sequence it occurs in and every
/// enclosing sequence up to the top of the program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// A name is bound neither in the scope chain nor as a builtin, or an
    /// assignment targets a name that was never declared.
    #[error("identifier not found: {name}")]
    UnknownIdentifier {
        /// The name that was looked up.
        name: String,
    },
    /// A user-defined function was called with the wrong number of arguments.
    #[error("wrong length of arguments: {expected} parameters but called with {found} arguments")]
    ArgumentCountMismatch {
        /// Number of declared parameters.
        expected: usize,
        /// Number of supplied arguments.
        found:    usize,
    },
    /// A builtin was called with the wrong number of arguments.
    #[error("wrong number of arguments. expected {expected} but got {found}")]
    BuiltinArgumentCount {
        /// Number of arguments the builtin accepts.
        expected: usize,
        /// Number of supplied arguments.
        found:    usize,
    },
    /// The callee of a call expression is not callable.
    #[error("not a function: {found}")]
    NotAFunction {
        /// The type of the callee.
        found: ObjectType,
    },
    /// An infix operator was applied to operands of different types.
    #[error("type mismatch: {left} {operator} {right}")]
    TypeMismatch {
        /// Type of the left operand.
        left:     ObjectType,
        /// The operator.
        operator: InfixOperator,
        /// Type of the right operand.
        right:    ObjectType,
    },
    /// A prefix operator is not defined for the operand type.
    #[error("unknown operator: {operator}{operand}")]
    UnknownPrefixOperator {
        /// The operator.
        operator: PrefixOperator,
        /// Type of the operand.
        operand:  ObjectType,
    },
    /// An infix operator is not defined for two operands of this type.
    #[error("unknown operator: {left} {operator} {right}")]
    UnknownInfixOperator {
        /// Type of the left operand.
        left:     ObjectType,
        /// The operator.
        operator: InfixOperator,
        /// Type of the right operand.
        right:    ObjectType,
    },
    /// A builtin received an argument of a type it cannot handle.
    #[error("argument to `{function}` not supported, got {found}")]
    UnsupportedArgument {
        /// The builtin name.
        function: &'static str,
        /// The type of the rejected argument.
        found:    ObjectType,
    },
    /// Integer division with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,
    /// Integer arithmetic left the 64-bit range.
    #[error("integer overflow: {expression}")]
    IntegerOverflow {
        /// The operation that overflowed, rendered as source.
        expression: String,
    },
}
