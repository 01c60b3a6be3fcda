//! User-facing error message mapping
//!
//! Centralizes what every view shows for a failed session operation; the
//! views never interpret field-level errors themselves.

use portico_http::ClientError;

/// Convert a client error into a display string.
///
/// Validation payloads are surfaced verbatim; transport and server
/// failures get a generic line so internals are not leaked to the page.
pub fn display_error(error: &ClientError) -> String {
    match error {
        ClientError::Network(_) => {
            "Unable to reach the server. Check your connection and try again.".to_string()
        }
        ClientError::Validation(errors) => errors.to_string(),
        ClientError::Unauthorized(_) => {
            "Your session has expired. Please sign in again.".to_string()
        }
        ClientError::Server { .. } | ClientError::Serialization(_) | ClientError::Configuration(_) => {
            "Something went wrong. Please try again later.".to_string()
        }
    }
}
