use std::rc::Rc;

use tracing::debug;

use crate::{
    ast::{BlockStatement, Expression, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::function::core::lookup_builtin,
        value::{
            core::{Function, Object},
            environment::{Env, Environment},
        },
    },
};

/// Result type used by the evaluator.
///
/// All public evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Why a statement sequence stopped early.
///
/// Both variants unwind through enclosing blocks untouched. A function call
/// absorbs `Return`; the program boundary absorbs `Return` and turns `Error`
/// into the final `Err`.
#[derive(Debug)]
pub(crate) enum Signal {
    /// A `return` statement is unwinding to the nearest call or the program.
    Return(Object),
    /// A runtime error is unwinding to the top.
    Error(RuntimeError),
}

impl From<RuntimeError> for Signal {
    fn from(error: RuntimeError) -> Self {
        Self::Error(error)
    }
}

/// Internal result type: `Err` carries either a `return` or an error.
pub(crate) type Flow<T> = Result<T, Signal>;

/// Stores the runtime evaluation state.
///
/// An evaluator owns one global scope. Evaluating several programs with the
/// same evaluator keeps their bindings, which is how the REPL carries
/// definitions from one line to the next.
///
/// # Example
/// ```
/// use monkey::interpreter::{evaluator::core::Evaluator, value::core::Object};
///
/// let evaluator = Evaluator::new();
///
/// let (program, _) = monkey::parse("let double = fn(x) { x * 2 };");
/// assert_eq!(evaluator.eval_program(&program).unwrap(), None);
///
/// let (program, _) = monkey::parse("double(21)");
/// assert_eq!(evaluator.eval_program(&program).unwrap(), Some(Object::Integer(42)));
/// ```
pub struct Evaluator {
    env: Env,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Creates an evaluator with an empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self::with_env(Environment::global())
    }

    /// Creates an evaluator that runs programs in `env`.
    #[must_use]
    pub const fn with_env(env: Env) -> Self {
        Self { env }
    }

    /// The scope top-level statements are evaluated in.
    #[must_use]
    pub const fn env(&self) -> &Env {
        &self.env
    }

    /// Evaluates a whole program.
    ///
    /// Returns the value of the last statement, or `None` when that statement
    /// produced no value (`let` or an assignment). A top-level `return` ends
    /// the program early with its value.
    ///
    /// # Errors
    /// Returns the first runtime error raised; nothing after it is evaluated.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.statements.len()))]
    pub fn eval_program(&self, program: &Program) -> EvalResult<Option<Object>> {
        match Self::eval_statements(&program.statements, &self.env) {
            Ok(value) => Ok(value),
            Err(Signal::Return(value)) => Ok(Some(value)),
            Err(Signal::Error(error)) => {
                debug!(%error, "evaluation failed");
                Err(error)
            },
        }
    }

    /// Evaluates statements in order in `env`.
    ///
    /// Stops at the first `return` or error and passes it up unchanged. The
    /// result is whatever the last statement produced.
    pub(crate) fn eval_statements(statements: &[Statement], env: &Env) -> Flow<Option<Object>> {
        let mut result = None;
        for statement in statements {
            result = Self::eval_statement(statement, env)?;
        }
        Ok(result)
    }

    /// Evaluates a single statement.
    ///
    /// `let` always binds in `env`, shadowing outer bindings. Assignment
    /// updates the nearest existing binding and fails if there is none.
    fn eval_statement(statement: &Statement, env: &Env) -> Flow<Option<Object>> {
        match statement {
            Statement::Let { name, value } => {
                let value = Self::eval_expression(value, env)?;
                env.borrow_mut().define(name, value);
                Ok(None)
            },
            Statement::Assign { name, value } => {
                let value = Self::eval_expression(value, env)?;
                env.borrow_mut().assign(name, value)?;
                Ok(None)
            },
            Statement::Return { value } => {
                let value = Self::eval_expression(value, env)?;
                Err(Signal::Return(value))
            },
            Statement::Expression(expression) => Self::eval_expression(expression, env).map(Some),
            Statement::Block(block) => Self::eval_block(block, env),
        }
    }

    /// Evaluates a block in a fresh scope nested inside `env`.
    fn eval_block(block: &BlockStatement, env: &Env) -> Flow<Option<Object>> {
        let scope = Environment::enclosed(env);
        Self::eval_statements(&block.statements, &scope)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Operands and arguments are evaluated left to right; the first error
    /// stops evaluation.
    pub(crate) fn eval_expression(expression: &Expression, env: &Env) -> Flow<Object> {
        match expression {
            Expression::Identifier(name) => Ok(Self::eval_identifier(name, env)?),
            Expression::IntegerLiteral(value) => Ok(Object::Integer(*value)),
            Expression::StringLiteral(value) => Ok(Object::from(value.as_str())),
            Expression::Boolean(value) => Ok(Object::Boolean(*value)),
            Expression::Prefix { operator, operand } => {
                let operand = Self::eval_expression(operand, env)?;
                Ok(Self::eval_prefix(*operator, &operand)?)
            },
            Expression::Infix { operator,
                                left,
                                right, } => {
                let left = Self::eval_expression(left, env)?;
                let right = Self::eval_expression(right, env)?;
                Ok(Self::eval_infix(*operator, &left, &right)?)
            },
            Expression::If { condition,
                             consequence,
                             alternative, } => {
                Self::eval_if_expression(condition, consequence, alternative.as_ref(), env)
            },
            Expression::Function(literal) => {
                Ok(Object::Function(Rc::new(Function { literal: Rc::clone(literal),
                                                       env:     Rc::clone(env), })))
            },
            Expression::Call { function, arguments } => {
                let function = Self::eval_expression(function, env)?;
                let arguments = arguments.iter()
                                         .map(|argument| Self::eval_expression(argument, env))
                                         .collect::<Flow<Vec<_>>>()?;
                Ok(Self::apply_function(&function, arguments)?)
            },
        }
    }

    /// Evaluates `if`/`else`.
    ///
    /// A falsy condition without an `else`, or a branch that ends in a
    /// statement without a value, evaluates to `null`.
    fn eval_if_expression(condition: &Expression,
                          consequence: &BlockStatement,
                          alternative: Option<&BlockStatement>,
                          env: &Env)
                          -> Flow<Object> {
        let condition = Self::eval_expression(condition, env)?;

        let branch = if condition.is_truthy() {
            Some(consequence)
        } else {
            alternative
        };

        match branch {
            Some(block) => Ok(Self::eval_block(block, env)?.unwrap_or(Object::Null)),
            None => Ok(Object::Null),
        }
    }

    /// Resolves a name: scope chain first, then the builtin table.
    fn eval_identifier(name: &str, env: &Env) -> EvalResult<Object> {
        if let Some(value) = env.borrow().get(name) {
            return Ok(value);
        }

        lookup_builtin(name).map(Object::Builtin)
                            .ok_or_else(|| RuntimeError::UnknownIdentifier { name: name.to_string() })
    }
}
