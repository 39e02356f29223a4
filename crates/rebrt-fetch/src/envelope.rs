//! JSON envelope reading.
//!
//! No schema is enforced here beyond what the target type asks for; callers
//! that need to classify an envelope decode into their own tagged types.

use serde::de::DeserializeOwned;

use crate::error::Result;

/// Decode a response body into `T`
///
/// # Errors
/// Returns [`crate::FetchError::Json`] if the body is not valid JSON or does not
/// fit `T`
pub fn read_json<T: DeserializeOwned>(body: &str) -> Result<T> {
    Ok(serde_json::from_str(body)?)
}
