use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Object,
    },
};

impl Evaluator {
    /// Evaluates a prefix operation on a value.
    ///
    /// Supported operators:
    /// - `Not`: applies the truthy rule and always yields a boolean.
    /// - `Negate`: integer negation. Any other operand type is an unknown
    ///   operator.
    ///
    /// # Example
    /// ```
    /// use monkey::{
    ///     ast::PrefixOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Object},
    /// };
    ///
    /// let v = Evaluator::eval_prefix(PrefixOperator::Negate, &Object::Integer(5)).unwrap();
    /// assert_eq!(v, Object::Integer(-5));
    ///
    /// // `0` is truthy.
    /// let v = Evaluator::eval_prefix(PrefixOperator::Not, &Object::Integer(0)).unwrap();
    /// assert_eq!(v, Object::Boolean(false));
    ///
    /// let err = Evaluator::eval_prefix(PrefixOperator::Negate, &Object::Boolean(true)).unwrap_err();
    /// assert_eq!(err.to_string(), "unknown operator: -BOOLEAN");
    /// ```
    pub fn eval_prefix(operator: PrefixOperator, operand: &Object) -> EvalResult<Object> {
        match operator {
            PrefixOperator::Not => Ok(Object::Boolean(!operand.is_truthy())),
            PrefixOperator::Negate => match operand {
                Object::Integer(n) => {
                    n.checked_neg()
                     .map(Object::Integer)
                     .ok_or_else(|| RuntimeError::IntegerOverflow { expression: format!("-{n}") })
                },
                other => Err(RuntimeError::UnknownPrefixOperator { operator,
                                                                   operand: other.kind() }),
            },
        }
    }
}
