//! Top navigation bar, reflecting the session state

use crate::routes::Route;
use portico_frontend_common::{use_session, use_session_service, SessionAction};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let session = use_session();
    let service = use_session_service();
    let navigator = use_navigator().expect("Navbar must be rendered inside a Router");

    let on_logout = {
        let session = session.clone();
        let service = service.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            let session = session.clone();
            let service = service.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                // Clear the local session even when the network call
                // fails; the guard then redirects any protected view.
                if let Err(err) = service.logout().await {
                    tracing::warn!("logout request failed: {err}");
                }
                session.dispatch(SessionAction::Cleared);
                navigator.push(&Route::Home);
            });
        })
    };

    let user = session.current_user().cloned();

    html! {
        <nav class="flex items-center justify-between px-6 py-3 border-b border-gray-200 bg-white">
            <div class="flex items-center gap-4">
                <Link<Route> to={Route::Home} classes="text-lg font-bold text-blue-600">
                    {"Portico"}
                </Link<Route>>
                if user.is_some() {
                    <Link<Route> to={Route::Dashboard} classes="text-sm text-gray-700 hover:text-gray-900">
                        {"Dashboard"}
                    </Link<Route>>
                    <Link<Route> to={Route::Account} classes="text-sm text-gray-700 hover:text-gray-900">
                        {"Account"}
                    </Link<Route>>
                }
            </div>
            <div class="flex items-center gap-3">
                if let Some(user) = user {
                    <span class="text-sm text-gray-500">{&user.username}</span>
                    <button
                        onclick={on_logout}
                        class="px-3 py-1.5 text-sm font-medium text-gray-700 bg-gray-100 hover:bg-gray-200 rounded-lg"
                    >
                        {"Logout"}
                    </button>
                } else {
                    <Link<Route> to={Route::SignIn} classes="text-sm text-gray-700 hover:text-gray-900">
                        {"Sign in"}
                    </Link<Route>>
                    <Link<Route> to={Route::SignUp} classes="px-3 py-1.5 text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 rounded-lg">
                        {"Sign up"}
                    </Link<Route>>
                }
            </div>
        </nav>
    }
}
