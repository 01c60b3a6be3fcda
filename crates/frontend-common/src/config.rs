//! Frontend configuration

/// Session configuration
pub struct SessionConfig;

impl SessionConfig {
    /// Backend origin used when the window origin is unavailable
    /// (development builds served off-origin).
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8000";
}
