use crate::interpreter::{evaluator::core::EvalResult, value::core::Object};

/// Prints each argument's inspect form on its own line and returns `null`.
///
/// Accepts any number of arguments.
///
/// # Example
/// ```
/// use monkey::interpreter::{evaluator::function::print::puts, value::core::Object};
///
/// // The function prints to stdout, but the doctest
/// // only checks the returned result.
/// let result = puts(&["hello".into(), 42.into()]).unwrap();
///
/// assert_eq!(result, Object::Null);
/// ```
pub fn puts(args: &[Object]) -> EvalResult<Object> {
    for arg in args {
        println!("{arg}");
    }
    Ok(Object::Null)
}
