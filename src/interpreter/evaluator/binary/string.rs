use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::{Object, ObjectType},
    },
};

impl Evaluator {
    /// String concatenation (`+`) and value comparison (`==`, `!=`).
    pub(super) fn eval_string_infix(operator: InfixOperator,
                                    left: &str,
                                    right: &str)
                                    -> EvalResult<Object> {
        match operator {
            InfixOperator::Add => Ok(Object::from(format!("{left}{right}"))),
            InfixOperator::Equal => Ok(Object::Boolean(left == right)),
            InfixOperator::NotEqual => Ok(Object::Boolean(left != right)),
            _ => Err(RuntimeError::UnknownInfixOperator { left: ObjectType::String,
                                                          operator,
                                                          right: ObjectType::String }),
        }
    }
}
