pub mod auth;
pub mod client;
pub mod components;
pub mod config;
pub mod services;

pub use auth::context::{
    use_current_user, use_is_authenticated, use_session, use_session_status, SessionAction,
    SessionContext, SessionData, SessionProvider, SessionStatus,
};
pub use auth::guard::{GuardDecision, RequireAuth};
pub use client::create_client;
pub use components::{MessageBox, Severity, Spinner};
pub use config::SessionConfig;
pub use services::session::{use_session_service, SessionService};
