//! Store-assigned identifier format.
//!
//! Identifiers are 12 random bytes rendered as 24 lowercase hex characters,
//! the same shape as a document-store object id. Ids coming back from clients
//! are checked against this shape before any store query is issued.

use crate::errors::CoreError;

/// Number of random bytes in an identifier.
pub const ID_BYTES: usize = 12;

/// Length of the hex-encoded identifier.
pub const ID_LEN: usize = ID_BYTES * 2;

/// Returns `true` if `id` is exactly [`ID_LEN`] ASCII hex digits.
#[must_use]
pub fn is_valid_id(id: &str) -> bool {
    id.len() == ID_LEN && id.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Check an identifier and return it normalized to lowercase.
///
/// # Errors
///
/// Returns `CoreError::InvalidId` if `id` is not well-formed.
pub fn check_id(id: &str) -> Result<String, CoreError> {
    if is_valid_id(id) {
        Ok(id.to_ascii_lowercase())
    } else {
        Err(CoreError::InvalidId(id.to_string()))
    }
}
