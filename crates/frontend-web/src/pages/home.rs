//! Landing page

use crate::routes::Route;
use portico_frontend_common::use_is_authenticated;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Home)]
pub fn home() -> Html {
    let is_authenticated = use_is_authenticated();

    html! {
        <main class="max-w-md mx-auto mt-16 text-center">
            <h1 class="text-3xl font-bold mb-2">{"Welcome to Portico"}</h1>
            <p class="text-gray-600 mb-8">{"Sign in to reach your dashboard."}</p>
            if is_authenticated {
                <Link<Route> to={Route::Dashboard} classes="px-4 py-2 text-white bg-blue-600 hover:bg-blue-700 rounded-lg">
                    {"Go to dashboard"}
                </Link<Route>>
            } else {
                <Link<Route> to={Route::SignIn} classes="px-4 py-2 text-white bg-blue-600 hover:bg-blue-700 rounded-lg">
                    {"Sign in"}
                </Link<Route>>
            }
        </main>
    }
}
