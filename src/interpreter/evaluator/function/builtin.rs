use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Object},
    util::num::usize_to_i64_checked,
};

/// Returns the length of a string in bytes.
///
/// Accepts exactly one argument. Anything other than a string is rejected
/// with `UnsupportedArgument`.
///
/// # Example
/// ```
/// use monkey::interpreter::{evaluator::function::builtin::len, value::core::Object};
///
/// assert_eq!(len(&["hello".into()]).unwrap(), Object::Integer(5));
/// assert_eq!(len(&[1.into()]).unwrap_err().to_string(),
///            "argument to `len` not supported, got INTEGER");
/// ```
pub fn len(args: &[Object]) -> EvalResult<Object> {
    let [argument] = args else {
        return Err(RuntimeError::BuiltinArgumentCount { expected: 1,
                                                        found:    args.len(), });
    };

    match argument {
        Object::String(s) => {
            let length = usize_to_i64_checked(s.len(), RuntimeError::IntegerOverflow {
                expression: "len(...)".to_string(),
            })?;
            Ok(Object::Integer(length))
        },
        other => Err(RuntimeError::UnsupportedArgument { function: "len",
                                                         found:    other.kind(), }),
    }
}
