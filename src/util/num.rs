/// Safely converts a `usize` to `i64` if and only if it fits.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `i64::MAX`.
///
/// ## Example
/// ```
/// use monkey::util::num::usize_to_i64_checked;
///
/// assert_eq!(usize_to_i64_checked(42, "too big!"), Ok(42));
/// assert_eq!(usize_to_i64_checked(usize::MAX, "too big!"), Err("too big!"));
/// ```
pub fn usize_to_i64_checked<E>(value: usize, error: E) -> Result<i64, E> {
    i64::try_from(value).map_err(|_| error)
}
