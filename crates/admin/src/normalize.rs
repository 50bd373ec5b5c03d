//! Backend error normalization.
//!
//! Every failure the transport can produce is collapsed into a single
//! human-readable message for the shared error slot. The backend wraps
//! its messages as `{ "data": { "error": "..." } }`; anything else
//! (network failures, parse failures, unexpected payload shapes) falls
//! back to a fixed generic message.

use serde_json::Value;

use crate::transport::TransportError;

/// Message shown when the failure carries no usable backend message.
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Convert a transport failure into the user-facing message string.
///
/// Pure and total: never panics, never performs I/O.
#[must_use]
pub fn normalize_error(error: &TransportError) -> String {
    match error {
        TransportError::Api { body, .. } | TransportError::Unauthorized { body } => {
            nested_message(body)
                .map_or_else(|| GENERIC_ERROR_MESSAGE.to_string(), str::to_string)
        }
        _ => GENERIC_ERROR_MESSAGE.to_string(),
    }
}

/// Extract the backend's nested `data.error` message, if it is a string.
fn nested_message(body: &Value) -> Option<&str> {
    body.get("data")?.get("error")?.as_str()
}
