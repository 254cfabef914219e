//! Typed JSON body decoding with explicit client-facing failures.

use crate::error::AppError;
use serde::de::DeserializeOwned;

/// Decode a request body into `T`.
///
/// A blank body or a literal `null` yields `Ok(None)`; callers decide whether an
/// absent value is acceptable. Anything that does not parse into `T` is
/// [`AppError::MalformedInput`].
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<Option<T>, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice::<Option<T>>(body).map_err(|e| AppError::MalformedInput(e.to_string()))
}
