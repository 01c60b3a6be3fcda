//! Request a password reset email

use super::{bind_input, TextField};
use portico_frontend_common::auth::display_error;
use portico_frontend_common::{use_session_service, MessageBox, Severity};
use yew::prelude::*;

#[function_component(SendResetPassword)]
pub fn send_reset_password() -> Html {
    let service = use_session_service();

    let email = use_state(String::new);
    let feedback = use_state(|| Option::<(Severity, String)>::None);
    let submitting = use_state(|| false);

    let onsubmit = {
        let service = service.clone();
        let email = email.clone();
        let feedback = feedback.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            submitting.set(true);
            feedback.set(None);

            let service = service.clone();
            let feedback = feedback.clone();
            let submitting = submitting.clone();
            let email_value = (*email).clone();
            wasm_bindgen_futures::spawn_local(async move {
                match service.request_password_reset(email_value).await {
                    Ok(()) => feedback.set(Some((
                        Severity::Success,
                        "If that address is registered, a reset link is on its way.".to_string(),
                    ))),
                    Err(err) => feedback.set(Some((Severity::Error, display_error(&err)))),
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <main class="max-w-md mx-auto mt-16">
            <h1 class="text-2xl font-bold text-center mb-6">{"Reset your password"}</h1>
            <form onsubmit={onsubmit} class="flex flex-col gap-4">
                <TextField label="Email" value={(*email).clone()} oninput={bind_input(email.clone())} />
                <button
                    type="submit"
                    disabled={*submitting}
                    class="px-4 py-2 text-white bg-blue-600 hover:bg-blue-700 disabled:bg-blue-300 rounded-lg"
                >
                    {if *submitting { "Sending..." } else { "Send reset link" }}
                </button>
            </form>
            if let Some((severity, message)) = (*feedback).clone() {
                <MessageBox {severity} {message} />
            }
        </main>
    }
}
