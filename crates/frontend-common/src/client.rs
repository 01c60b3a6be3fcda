//! Client construction for the browser environment
//!
//! The client is owned by the [`SessionProvider`](crate::SessionProvider)
//! and handed down through context; there is no module-level client
//! singleton.

use crate::config::SessionConfig;
use portico_http::{ApiClient, ClientError};

/// Get the base URL for API calls: the window origin in the browser,
/// the development default otherwise.
fn base_url() -> String {
    if let Some(window) = web_sys::window() {
        if let Ok(origin) = window.location().origin() {
            return origin;
        }
    }

    SessionConfig::DEFAULT_BASE_URL.to_string()
}

/// Build an [`ApiClient`], preferring an explicit base URL over the
/// window origin.
pub fn create_client(base_url_override: Option<&str>) -> Result<ApiClient, ClientError> {
    let url = match base_url_override {
        Some(url) => url.to_string(),
        None => base_url(),
    };
    ApiClient::new(url)
}
