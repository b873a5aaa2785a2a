use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Object,
    },
};

impl Evaluator {
    /// Evaluates an infix operation between two values.
    ///
    /// The checks run in a fixed order:
    /// 1. two integers use the integer rules,
    /// 2. two strings use the string rules,
    /// 3. `==` and `!=` on anything else compare identity,
    /// 4. operands of different types are a type mismatch,
    /// 5. anything left is an unknown operator.
    ///
    /// # Example
    /// ```
    /// use monkey::{
    ///     ast::InfixOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Object},
    /// };
    ///
    /// let sum = Evaluator::eval_infix(InfixOperator::Add, &3.into(), &4.into());
    /// assert_eq!(sum.unwrap(), Object::Integer(7));
    ///
    /// // Mixed types still compare under `==`.
    /// let eq = Evaluator::eval_infix(InfixOperator::Equal, &1.into(), &true.into());
    /// assert_eq!(eq.unwrap(), Object::Boolean(false));
    ///
    /// let err = Evaluator::eval_infix(InfixOperator::Add, &1.into(), &true.into()).unwrap_err();
    /// assert_eq!(err.to_string(), "type mismatch: INTEGER + BOOLEAN");
    /// ```
    pub fn eval_infix(operator: InfixOperator, left: &Object, right: &Object) -> EvalResult<Object> {
        match (left, right) {
            (Object::Integer(l), Object::Integer(r)) => Self::eval_integer_infix(operator, *l, *r),
            (Object::String(l), Object::String(r)) => Self::eval_string_infix(operator, l, r),
            _ if operator == InfixOperator::Equal => Ok(Object::Boolean(left.is_identical(right))),
            _ if operator == InfixOperator::NotEqual => {
                Ok(Object::Boolean(!left.is_identical(right)))
            },
            _ if left.kind() != right.kind() => Err(RuntimeError::TypeMismatch { left: left.kind(),
                                                                                 operator,
                                                                                 right: right.kind() }),
            _ => Err(RuntimeError::UnknownInfixOperator { left: left.kind(),
                                                          operator,
                                                          right: right.kind() }),
        }
    }
}
