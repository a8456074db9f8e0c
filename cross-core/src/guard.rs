//! Argument guards returning [`ArgumentError`] on failure.

use crate::error::ArgumentError;

/// Unwrap a required argument, failing with a `Null` error naming `param_name`.
pub fn ensure_present<T>(param_name: &str, value: Option<T>) -> Result<T, ArgumentError> {
    value.ok_or_else(|| ArgumentError::null(param_name))
}

/// Require a string argument that is present and not empty or white space.
///
/// Whitespace-only input is reported with the offending value attached.
pub fn ensure_not_white_space<'a>(
    param_name: &str,
    value: Option<&'a str>,
) -> Result<&'a str, ArgumentError> {
    let value = ensure_present(param_name, value)?;
    if value.trim().is_empty() {
        return Err(ArgumentError::white_space(param_name).with_actual_value(value));
    }
    Ok(value)
}
