//! Route guard: gate a view behind authentication
//!
//! The guard holds no state of its own; what renders is purely a
//! function of [`SessionStatus`], plus a navigation side effect when the
//! visitor turns out to be unauthenticated.

use super::context::{use_session, SessionStatus};
use crate::components::Spinner;
use yew::prelude::*;
use yew_router::prelude::*;

/// What the guard does for a given session status
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session confirmed: render the protected view
    Render,
    /// Check-auth still pending: render a placeholder, no redirect yet
    Wait,
    /// No session: navigate to sign-in, render nothing this frame
    Redirect,
}

impl GuardDecision {
    pub fn decide(status: &SessionStatus) -> Self {
        match status {
            SessionStatus::Authenticated(_) => Self::Render,
            SessionStatus::Unknown => Self::Wait,
            SessionStatus::Unauthenticated => Self::Redirect,
        }
    }
}

/// Route guard props
#[derive(Properties, PartialEq)]
pub struct RequireAuthProps<R>
where
    R: Routable + PartialEq,
{
    /// Route to send unauthenticated visitors to
    pub redirect_to: R,
    pub children: Children,
}

/// Wraps a protected view and redirects unauthenticated visitors.
///
/// Re-evaluates on every session change, so a logout while the view is
/// mounted redirects immediately. While the initial check-auth is
/// pending it renders a spinner rather than redirecting, to avoid a
/// sign-in flash for visitors whose session is still valid.
#[function_component(RequireAuth)]
pub fn require_auth<R>(props: &RequireAuthProps<R>) -> Html
where
    R: Routable + PartialEq + Clone + 'static,
{
    let session = use_session();
    let navigator = use_navigator().expect("RequireAuth must be rendered inside a Router");
    let decision = GuardDecision::decide(&session.status);

    {
        let navigator = navigator.clone();
        let redirect_to = props.redirect_to.clone();
        use_effect_with(decision, move |decision| {
            if *decision == GuardDecision::Redirect {
                navigator.push(&redirect_to);
            }
            || ()
        });
    }

    match decision {
        GuardDecision::Render => html! { <>{props.children.clone()}</> },
        GuardDecision::Wait => html! { <Spinner /> },
        GuardDecision::Redirect => Html::default(),
    }
}
