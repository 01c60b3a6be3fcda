//! Session state store: the single source of truth for authentication
//!
//! The store starts in `Unknown` while the initial check-auth call is in
//! flight; a network failure during that check resolves it to
//! `Unauthenticated`, never `Authenticated` (fail-closed).

use crate::services::session::{SessionService, SessionServiceContext};
use portico_http::types::UserRecord;
use std::rc::Rc;
use yew::prelude::*;

/// Client-side belief about the backend session.
///
/// Carrying the user inside `Authenticated` makes "authenticated with no
/// user record" unrepresentable.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionStatus {
    /// Initial check-auth still pending; not yet decided either way
    Unknown,
    /// Backend confirmed the session and returned the current user
    Authenticated(UserRecord),
    /// No valid session
    Unauthenticated,
}

/// Session state exposed to the component tree
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SessionData {
    pub status: SessionStatus,
}

impl Default for SessionStatus {
    fn default() -> Self {
        Self::Unknown
    }
}

impl SessionData {
    pub fn is_authenticated(&self) -> bool {
        matches!(self.status, SessionStatus::Authenticated(_))
    }

    /// Whether the initial check-auth has resolved either way.
    pub fn is_resolved(&self) -> bool {
        !matches!(self.status, SessionStatus::Unknown)
    }

    pub fn current_user(&self) -> Option<&UserRecord> {
        match &self.status {
            SessionStatus::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Session state transitions
pub enum SessionAction {
    /// Session established: login, signup, or a successful re-check
    SignedIn(UserRecord),
    /// Reset to unauthenticated: logout, failed check, expired session
    Cleared,
    /// Replace the user record without touching the authentication flag
    UserUpdated(UserRecord),
}

impl Reducible for SessionData {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SessionAction::SignedIn(user) => Rc::new(Self {
                status: SessionStatus::Authenticated(user),
            }),
            SessionAction::Cleared => Rc::new(Self {
                status: SessionStatus::Unauthenticated,
            }),
            SessionAction::UserUpdated(user) => match self.status {
                SessionStatus::Authenticated(_) => Rc::new(Self {
                    status: SessionStatus::Authenticated(user),
                }),
                _ => {
                    tracing::warn!("ignoring user update without an authenticated session");
                    self
                }
            },
        }
    }
}

/// Session context handle
pub type SessionContext = UseReducerHandle<SessionData>;

/// Session provider props
#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
    /// Override the API origin; defaults to the window origin.
    #[prop_or_default]
    pub base_url: Option<String>,
}

/// Provides the session store and the session service to the tree.
///
/// On mount it issues the check-auth request; until that resolves the
/// status stays [`SessionStatus::Unknown`] so guards can wait instead of
/// redirecting.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_reducer(SessionData::default);

    let service = use_memo(props.base_url.clone(), |base_url| {
        let client = crate::client::create_client(base_url.as_deref())
            .expect("failed to construct API client");
        SessionService::new(client)
    });

    // Route expired-session errors from any service call into the store.
    {
        let session = session.clone();
        use_effect_with((), move |_| {
            let session = session.clone();
            super::expiry::set_session_expired_callback(Rc::new(move || {
                session.dispatch(SessionAction::Cleared);
            }));

            move || {
                super::expiry::clear_session_expired_callback();
            }
        });
    }

    // Initial check-auth. Fail-closed: any failure resolves to
    // unauthenticated.
    {
        let session = session.clone();
        let service = service.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match service.check_auth().await {
                    Ok(user) => session.dispatch(SessionAction::SignedIn(user)),
                    Err(err) => {
                        tracing::debug!("check-auth failed: {err}");
                        session.dispatch(SessionAction::Cleared);
                    }
                }
            });
            || ()
        });
    }

    html! {
        <ContextProvider<SessionContext> context={session}>
            <ContextProvider<SessionServiceContext> context={SessionServiceContext(service)}>
                {props.children.clone()}
            </ContextProvider<SessionServiceContext>>
        </ContextProvider<SessionContext>>
    }
}

/// Hook to use the session store
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .expect("SessionContext not found. Wrap the component tree with SessionProvider")
}

/// Hook to get the current session status
#[hook]
pub fn use_session_status() -> SessionStatus {
    let session = use_session();
    session.status.clone()
}

/// Hook to get the current user, if authenticated
#[hook]
pub fn use_current_user() -> Option<UserRecord> {
    let session = use_session();
    session.current_user().cloned()
}

/// Hook to check if authenticated
#[hook]
pub fn use_is_authenticated() -> bool {
    let session = use_session();
    session.is_authenticated()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> UserRecord {
        UserRecord {
            id: 1,
            username: name.to_string(),
            email: format!("{name}@example.com"),
            avatar: None,
        }
    }

    fn reduce(state: SessionData, action: SessionAction) -> SessionData {
        Rc::unwrap_or_clone(Rc::new(state).reduce(action))
    }

    #[test]
    fn starts_unresolved() {
        let state = SessionData::default();
        assert_eq!(state.status, SessionStatus::Unknown);
        assert!(!state.is_authenticated());
        assert!(!state.is_resolved());
        assert!(state.current_user().is_none());
    }

    #[test]
    fn signed_in_stores_the_user() {
        let state = reduce(SessionData::default(), SessionAction::SignedIn(user("ada")));
        assert!(state.is_authenticated());
        assert_eq!(state.current_user().unwrap().username, "ada");
    }

    #[test]
    fn login_then_logout_equals_cleared_state() {
        let cleared = reduce(SessionData::default(), SessionAction::Cleared);

        let state = reduce(SessionData::default(), SessionAction::SignedIn(user("ada")));
        let state = reduce(state, SessionAction::Cleared);

        assert_eq!(state, cleared);
        assert!(!state.is_authenticated());
        assert!(state.current_user().is_none());
    }

    #[test]
    fn user_update_replaces_record_wholesale() {
        let state = reduce(SessionData::default(), SessionAction::SignedIn(user("ada")));
        let before = state.is_authenticated();

        let mut updated = user("ada");
        updated.email = "new@example.com".to_string();
        let state = reduce(state, SessionAction::UserUpdated(updated));

        assert_eq!(state.is_authenticated(), before);
        assert_eq!(state.current_user().unwrap().email, "new@example.com");
    }

    #[test]
    fn user_update_without_session_is_ignored() {
        let state = reduce(SessionData::default(), SessionAction::Cleared);
        let state = reduce(state, SessionAction::UserUpdated(user("ada")));
        assert_eq!(state.status, SessionStatus::Unauthenticated);
    }

    #[test]
    fn failed_check_resolves_to_unauthenticated() {
        // The provider maps any check-auth error to Cleared.
        let state = reduce(SessionData::default(), SessionAction::Cleared);
        assert!(state.is_resolved());
        assert!(!state.is_authenticated());
    }
}
