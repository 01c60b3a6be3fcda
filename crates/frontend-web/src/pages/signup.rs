//! Sign-up page

use super::{bind_input, TextField};
use crate::routes::Route;
use portico_frontend_common::auth::display_error;
use portico_frontend_common::{
    use_is_authenticated, use_session, use_session_service, MessageBox, SessionAction, Severity,
};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(SignUp)]
pub fn sign_up() -> Html {
    let session = use_session();
    let service = use_session_service();
    let navigator = use_navigator().expect("SignUp must be rendered inside a Router");
    let is_authenticated = use_is_authenticated();

    let email = use_state(String::new);
    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    {
        let navigator = navigator.clone();
        use_effect_with(is_authenticated, move |authenticated| {
            if *authenticated {
                navigator.push(&Route::Dashboard);
            }
            || ()
        });
    }

    let onsubmit = {
        let session = session.clone();
        let service = service.clone();
        let navigator = navigator.clone();
        let email = email.clone();
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            submitting.set(true);
            error.set(None);

            let session = session.clone();
            let service = service.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let submitting = submitting.clone();
            let email_value = (*email).clone();
            let username_value = (*username).clone();
            let password_value = (*password).clone();
            wasm_bindgen_futures::spawn_local(async move {
                match service.signup(email_value, username_value, password_value).await {
                    Ok(user) => {
                        session.dispatch(SessionAction::SignedIn(user));
                        navigator.push(&Route::Dashboard);
                    }
                    Err(err) => error.set(Some(display_error(&err))),
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <main class="max-w-md mx-auto mt-16">
            <h1 class="text-2xl font-bold text-center mb-6">{"Sign Up"}</h1>
            <form onsubmit={onsubmit} class="flex flex-col gap-4">
                <TextField label="Email" value={(*email).clone()} oninput={bind_input(email.clone())} />
                <TextField label="Username" value={(*username).clone()} oninput={bind_input(username.clone())} />
                <TextField label="Password" kind="password" value={(*password).clone()} oninput={bind_input(password.clone())} />
                <button
                    type="submit"
                    disabled={*submitting}
                    class="px-4 py-2 text-white bg-blue-600 hover:bg-blue-700 disabled:bg-blue-300 rounded-lg"
                >
                    {if *submitting { "Creating account..." } else { "Sign Up" }}
                </button>
            </form>
            <div class="mt-4 text-sm text-center">
                <Link<Route> to={Route::SignIn} classes="text-blue-600 hover:underline">
                    {"Already a member? Sign in"}
                </Link<Route>>
            </div>
            if let Some(message) = (*error).clone() {
                <MessageBox severity={Severity::Error} {message} />
            }
        </main>
    }
}
