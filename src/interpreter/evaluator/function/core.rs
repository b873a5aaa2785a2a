use tracing::trace;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator, Signal},
            function::{builtin, print},
        },
        value::{
            core::{Function, Object},
            environment::Environment,
        },
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the evaluated arguments and returns a value or a
/// runtime error. It never sees a scope.
pub type BuiltinFn = fn(&[Object]) -> EvalResult<Object>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `Variadic` accepts any number of arguments, including none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many arguments.
    Exact(usize),
    /// Any number of arguments.
    Variadic,
}

impl Arity {
    /// Checks `found` against this arity.
    fn check(self, found: usize) -> EvalResult<()> {
        match self {
            Self::Exact(expected) if expected != found => {
                Err(RuntimeError::BuiltinArgumentCount { expected, found })
            },
            _ => Ok(()),
        }
    }
}

/// A native function exposed under a reserved name.
///
/// Entries live in a static table, so a builtin value is a `&'static`
/// reference to its entry and two builtin values are identical exactly when
/// they point at the same entry.
#[derive(Debug)]
pub struct Builtin {
    /// The identifier the builtin is bound to.
    pub name:  &'static str,
    /// How many arguments it accepts.
    pub arity: Arity,
    func:      BuiltinFn,
}

impl Builtin {
    /// Checks the arity, then runs the native function.
    ///
    /// # Errors
    /// `BuiltinArgumentCount` on an arity violation, otherwise whatever the
    /// native function reports.
    pub fn call(&self, arguments: &[Object]) -> EvalResult<Object> {
        self.arity.check(arguments.len())?;
        trace!(name = self.name, arguments = arguments.len(), "calling builtin");
        (self.func)(arguments)
    }
}

/// Defines builtin functions by generating their lookup table.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces `BUILTIN_TABLE`, the static table searched by
/// [`lookup_builtin`].
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "len"  => { arity: Arity::Exact(1), func: builtin::len },
    "puts" => { arity: Arity::Variadic, func: print::puts },
}

/// Finds the builtin bound to `name`.
///
/// Consulted only after the scope chain has no binding for `name`.
///
/// # Example
/// ```
/// use monkey::interpreter::evaluator::function::core::lookup_builtin;
///
/// assert_eq!(lookup_builtin("len").map(|b| b.name), Some("len"));
/// assert!(lookup_builtin("print").is_none());
/// ```
#[must_use]
pub fn lookup_builtin(name: &str) -> Option<&'static Builtin> {
    BUILTIN_TABLE.iter().find(|builtin| builtin.name == name)
}

impl Evaluator {
    /// Calls a function value with already evaluated arguments.
    ///
    /// User-defined functions run in a new scope enclosed by the scope they
    /// were defined in, not the caller's scope. A `return` inside the body
    /// ends the call with its value; a body whose last statement yields no
    /// value returns `null`.
    ///
    /// # Errors
    /// - `NotAFunction` if `function` is not callable.
    /// - `ArgumentCountMismatch` if the argument count differs from the
    ///   parameter count.
    /// - Any error raised by the body or the builtin.
    #[tracing::instrument(level = "trace", skip_all, fields(callee = %function.kind(), arguments = arguments.len()))]
    pub fn apply_function(function: &Object, arguments: Vec<Object>) -> EvalResult<Object> {
        match function {
            Object::Function(function) => Self::call_user_defined_function(function, arguments),
            Object::Builtin(builtin) => builtin.call(&arguments),
            other => Err(RuntimeError::NotAFunction { found: other.kind() }),
        }
    }

    fn call_user_defined_function(function: &Function, arguments: Vec<Object>) -> EvalResult<Object> {
        let parameters = &function.literal.parameters;

        if arguments.len() != parameters.len() {
            return Err(RuntimeError::ArgumentCountMismatch { expected: parameters.len(),
                                                             found:    arguments.len(), });
        }

        let env = Environment::enclosed(&function.env);
        {
            let mut scope = env.borrow_mut();
            for (name, value) in parameters.iter().zip(arguments) {
                scope.define(name, value);
            }
        }

        match Self::eval_statements(&function.literal.body.statements, &env) {
            Ok(value) => Ok(value.unwrap_or(Object::Null)),
            Err(Signal::Return(value)) => Ok(value),
            Err(Signal::Error(error)) => Err(error),
        }
    }
}
