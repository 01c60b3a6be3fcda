//! Session state store and route guard

pub mod context;
pub mod error_messages;
pub mod expiry;
pub mod guard;

pub use context::{
    use_current_user, use_is_authenticated, use_session, use_session_status, SessionAction,
    SessionContext, SessionData, SessionProvider, SessionStatus,
};
pub use error_messages::display_error;
pub use guard::{GuardDecision, RequireAuth};
