use std::{fmt, rc::Rc};

use crate::{
    ast::FunctionLiteral,
    interpreter::{evaluator::function::core::Builtin, value::environment::Env},
};

/// Represents a runtime value in the interpreter.
///
/// `Null` and the two booleans carry no identity beyond their value, so
/// comparing them by value is the same as comparing singletons by identity.
/// Functions and builtins compare by identity.
#[derive(Debug, Clone)]
pub enum Object {
    /// A 64-bit signed integer.
    Integer(i64),
    /// `true` or `false`.
    Boolean(bool),
    /// An immutable string.
    String(Rc<str>),
    /// The absence of a value.
    Null,
    /// A user-defined function together with the scope it was defined in.
    Function(Rc<Function>),
    /// A native function from the builtin table.
    Builtin(&'static Builtin),
}

/// A closure: a function literal paired with its defining environment.
pub struct Function {
    /// The literal this function was created from. Shared with the AST.
    pub literal: Rc<FunctionLiteral>,
    /// The scope that was active where the literal was evaluated.
    pub env:     Env,
}

// The environment is left out: it may contain this very function.
impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
         .field("parameters", &self.literal.parameters)
         .finish_non_exhaustive()
    }
}

/// The type tag of an [`Object`], as shown in runtime error messages.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ObjectType {
    /// `INTEGER`
    Integer,
    /// `BOOLEAN`
    Boolean,
    /// `STRING`
    String,
    /// `NULL`
    Null,
    /// `FUNCTION`
    Function,
    /// `BUILTIN`
    Builtin,
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Integer => "INTEGER",
            Self::Boolean => "BOOLEAN",
            Self::String => "STRING",
            Self::Null => "NULL",
            Self::Function => "FUNCTION",
            Self::Builtin => "BUILTIN",
        };
        write!(f, "{name}")
    }
}

impl From<i64> for Object {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Object {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Object {
    fn from(v: &str) -> Self {
        Self::String(Rc::from(v))
    }
}

impl From<String> for Object {
    fn from(v: String) -> Self {
        Self::String(Rc::from(v))
    }
}

impl Object {
    /// Returns the type tag of this value.
    #[must_use]
    pub const fn kind(&self) -> ObjectType {
        match self {
            Self::Integer(_) => ObjectType::Integer,
            Self::Boolean(_) => ObjectType::Boolean,
            Self::String(_) => ObjectType::String,
            Self::Null => ObjectType::Null,
            Self::Function(_) => ObjectType::Function,
            Self::Builtin(_) => ObjectType::Builtin,
        }
    }

    /// Applies the truthy rule: `null` and `false` are falsy, every other
    /// value (including `0` and `""`) is truthy.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::value::core::Object;
    ///
    /// assert!(Object::Integer(0).is_truthy());
    /// assert!(!Object::Null.is_truthy());
    /// assert!(!Object::Boolean(false).is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Null | Self::Boolean(false))
    }

    /// Identity comparison used by `==` and `!=` when no type-specific rule
    /// applies.
    ///
    /// Booleans, integers, strings and `null` are compared by value,
    /// functions by allocation, and builtins by their table entry.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::value::core::Object;
    ///
    /// assert!(Object::from("monkey").is_identical(&Object::from("monkey")));
    /// assert!(!Object::Integer(1).is_identical(&Object::Boolean(true)));
    /// ```
    #[must_use]
    pub fn is_identical(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => std::ptr::eq(*a, *b),
            _ => false,
        }
    }
}

/// Same relation as [`Object::is_identical`].
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.is_identical(other)
    }
}

/// The inspect form printed by the REPL.
impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Null => write!(f, "null"),
            Self::Function(function) => {
                write!(f,
                       "fn({}) {{\n{}\n}}",
                       function.literal.parameters.join(", "),
                       function.literal.body)
            },
            Self::Builtin(builtin) => write!(f, "builtin function {}", builtin.name),
        }
    }
}
