//! Complete a password reset from an emailed link
//!
//! The link carries `?uid=...&token=...`; without both this page only
//! offers to request a fresh one.

use super::{bind_input, TextField};
use crate::routes::Route;
use portico_frontend_common::auth::display_error;
use portico_frontend_common::{use_session_service, MessageBox, Severity};
use serde::Deserialize;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct ResetPasswordQuery {
    uid: String,
    token: String,
}

#[function_component(ResetPassword)]
pub fn reset_password() -> Html {
    let service = use_session_service();
    let location = use_location().expect("ResetPassword must be rendered inside a Router");
    let query = location.query::<ResetPasswordQuery>().ok();

    let password = use_state(String::new);
    let confirm = use_state(String::new);
    let feedback = use_state(|| Option::<(Severity, String)>::None);
    let submitting = use_state(|| false);
    let done = use_state(|| false);

    let Some(query) = query else {
        return html! {
            <main class="max-w-md mx-auto mt-16 text-center">
                <MessageBox severity={Severity::Error} message="This reset link is invalid or incomplete." />
                <div class="mt-4 text-sm">
                    <Link<Route> to={Route::SendResetPassword} classes="text-blue-600 hover:underline">
                        {"Request a new reset link"}
                    </Link<Route>>
                </div>
            </main>
        };
    };

    let onsubmit = {
        let service = service.clone();
        let password = password.clone();
        let confirm = confirm.clone();
        let feedback = feedback.clone();
        let submitting = submitting.clone();
        let done = done.clone();
        let query = query.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            if *password != *confirm {
                feedback.set(Some((Severity::Error, "Passwords do not match".to_string())));
                return;
            }
            submitting.set(true);
            feedback.set(None);

            let service = service.clone();
            let feedback = feedback.clone();
            let submitting = submitting.clone();
            let done = done.clone();
            let query = query.clone();
            let password_value = (*password).clone();
            wasm_bindgen_futures::spawn_local(async move {
                match service
                    .reset_password(query.uid, query.token, password_value)
                    .await
                {
                    Ok(()) => {
                        done.set(true);
                        feedback.set(Some((
                            Severity::Success,
                            "Password updated. You can sign in now.".to_string(),
                        )));
                    }
                    Err(err) => feedback.set(Some((Severity::Error, display_error(&err)))),
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <main class="max-w-md mx-auto mt-16">
            <h1 class="text-2xl font-bold text-center mb-6">{"Choose a new password"}</h1>
            if *done {
                if let Some((severity, message)) = (*feedback).clone() {
                    <MessageBox {severity} {message} />
                }
                <div class="mt-4 text-sm text-center">
                    <Link<Route> to={Route::SignIn} classes="text-blue-600 hover:underline">
                        {"Go to sign in"}
                    </Link<Route>>
                </div>
            } else {
                <form onsubmit={onsubmit} class="flex flex-col gap-4">
                    <TextField label="New password" kind="password" value={(*password).clone()} oninput={bind_input(password.clone())} />
                    <TextField label="Confirm new password" kind="password" value={(*confirm).clone()} oninput={bind_input(confirm.clone())} />
                    <button
                        type="submit"
                        disabled={*submitting}
                        class="px-4 py-2 text-white bg-blue-600 hover:bg-blue-700 disabled:bg-blue-300 rounded-lg"
                    >
                        {if *submitting { "Updating..." } else { "Update password" }}
                    </button>
                </form>
                if let Some((severity, message)) = (*feedback).clone() {
                    <MessageBox {severity} {message} />
                }
            }
        </main>
    }
}
