//! Route table

use crate::pages::{
    Account, Dashboard, Home, ResetPassword, SendResetPassword, SignIn, SignUp,
};
use portico_frontend_common::RequireAuth;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/signup")]
    SignUp,
    #[at("/signin")]
    SignIn,
    #[at("/send-reset-password")]
    SendResetPassword,
    #[at("/reset-password")]
    ResetPassword,
    #[at("/dashboard")]
    Dashboard,
    #[at("/account")]
    Account,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::SignUp => html! { <SignUp /> },
        Route::SignIn => html! { <SignIn /> },
        Route::SendResetPassword => html! { <SendResetPassword /> },
        Route::ResetPassword => html! { <ResetPassword /> },
        Route::Dashboard => html! {
            <RequireAuth<Route> redirect_to={Route::SignIn}>
                <Dashboard />
            </RequireAuth<Route>>
        },
        Route::Account => html! {
            <RequireAuth<Route> redirect_to={Route::SignIn}>
                <Account />
            </RequireAuth<Route>>
        },
        Route::NotFound => html! {
            <main class="max-w-md mx-auto mt-16 text-center">
                <h1 class="text-2xl font-bold">{"Page not found"}</h1>
            </main>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_public_routes() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/signin"), Some(Route::SignIn));
        assert_eq!(Route::recognize("/signup"), Some(Route::SignUp));
        assert_eq!(
            Route::recognize("/send-reset-password"),
            Some(Route::SendResetPassword)
        );
        assert_eq!(Route::recognize("/reset-password"), Some(Route::ResetPassword));
    }

    #[test]
    fn recognizes_protected_routes() {
        assert_eq!(Route::recognize("/dashboard"), Some(Route::Dashboard));
        assert_eq!(Route::recognize("/account"), Some(Route::Account));
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::recognize("/nope"), Some(Route::NotFound));
    }
}
