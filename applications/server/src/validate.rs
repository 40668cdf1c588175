/// Required-field validation
///
/// The access layer deliberately does not enforce field presence; it happens
/// here, before anything touches the store.
use crate::error::{Result, ServerError};

/// Reject `value` when it is blank or whitespace-only.
///
/// `field` is the wire label of the field, quoted back to the caller.
pub fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ServerError::BadRequest(format!(
            "field '{field}' is required"
        )));
    }
    Ok(())
}
