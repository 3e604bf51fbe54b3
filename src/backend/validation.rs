//! Required-field checks for request bodies.
//!
//! Request types declare their fields as `Option<String>` so that a missing
//! field reaches the handler and fails with the endpoint's own message
//! instead of a generic deserialization error.

use crate::backend::error::BackendError;

/// The value of a text field, or `None` when absent or blank
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Require every field in `values`, failing with `message` otherwise.
///
/// Values are returned untrimmed; callers trim where it matters (names,
/// emails).
pub fn require_all<'a, const N: usize>(
    values: [&'a Option<String>; N],
    message: &str,
) -> Result<[&'a str; N], BackendError> {
    let mut out = [""; N];
    for (slot, value) in out.iter_mut().zip(values) {
        *slot = present(value).ok_or_else(|| {
            tracing::warn!("Rejected request: {}", message);
            BackendError::validation(message)
        })?;
    }
    Ok(out)
}
