use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Object,
    },
};

impl Evaluator {
    /// Integer arithmetic and comparison.
    ///
    /// `/` truncates toward zero. A zero divisor is `DivisionByZero`, and any
    /// result outside the `i64` range is `IntegerOverflow`.
    pub(super) fn eval_integer_infix(operator: InfixOperator,
                                     left: i64,
                                     right: i64)
                                     -> EvalResult<Object> {
        use InfixOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
        };

        let overflow =
            || RuntimeError::IntegerOverflow { expression: format!("{left} {operator} {right}") };

        let value = match operator {
            Add => Object::Integer(left.checked_add(right).ok_or_else(overflow)?),
            Sub => Object::Integer(left.checked_sub(right).ok_or_else(overflow)?),
            Mul => Object::Integer(left.checked_mul(right).ok_or_else(overflow)?),
            Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                Object::Integer(left.checked_div(right).ok_or_else(overflow)?)
            },
            Less => Object::Boolean(left < right),
            Greater => Object::Boolean(left > right),
            LessEqual => Object::Boolean(left <= right),
            GreaterEqual => Object::Boolean(left >= right),
            Equal => Object::Boolean(left == right),
            NotEqual => Object::Boolean(left != right),
        };

        Ok(value)
    }
}
