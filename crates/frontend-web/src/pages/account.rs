//! Account page: profile editing and password change (protected)

use super::{bind_input, TextField};
use portico_frontend_common::auth::display_error;
use portico_frontend_common::{
    use_current_user, use_session, use_session_service, MessageBox, SessionAction, Severity,
};
use yew::prelude::*;

#[function_component(Account)]
pub fn account() -> Html {
    let session = use_session();
    let service = use_session_service();
    let user = use_current_user();

    let username = use_state(|| user.as_ref().map(|u| u.username.clone()).unwrap_or_default());
    let email = use_state(|| user.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let current_password = use_state(String::new);
    let new_password = use_state(String::new);
    let confirm_password = use_state(String::new);
    let feedback = use_state(|| Option::<(Severity, String)>::None);
    let saving_profile = use_state(|| false);
    let saving_password = use_state(|| false);

    let on_profile_submit = {
        let session = session.clone();
        let service = service.clone();
        let username = username.clone();
        let email = email.clone();
        let feedback = feedback.clone();
        let saving_profile = saving_profile.clone();
        let avatar = user.as_ref().and_then(|u| u.avatar.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *saving_profile {
                return;
            }
            saving_profile.set(true);
            feedback.set(None);

            let session = session.clone();
            let service = service.clone();
            let feedback = feedback.clone();
            let saving_profile = saving_profile.clone();
            let email_value = (*email).clone();
            let username_value = (*username).clone();
            let avatar = avatar.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match service.update_profile(email_value, username_value, avatar).await {
                    Ok(updated) => {
                        session.dispatch(SessionAction::UserUpdated(updated));
                        feedback.set(Some((
                            Severity::Success,
                            "Profile updated successfully".to_string(),
                        )));
                    }
                    Err(err) => feedback.set(Some((Severity::Error, display_error(&err)))),
                }
                saving_profile.set(false);
            });
        })
    };

    let on_password_submit = {
        let service = service.clone();
        let current_password = current_password.clone();
        let new_password = new_password.clone();
        let confirm_password = confirm_password.clone();
        let feedback = feedback.clone();
        let saving_password = saving_password.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *saving_password {
                return;
            }
            if *new_password != *confirm_password {
                feedback.set(Some((Severity::Error, "Passwords do not match".to_string())));
                return;
            }
            saving_password.set(true);
            feedback.set(None);

            let service = service.clone();
            let feedback = feedback.clone();
            let saving_password = saving_password.clone();
            let current_password_handle = current_password.clone();
            let new_password_handle = new_password.clone();
            let confirm_password_handle = confirm_password.clone();
            let old_value = (*current_password).clone();
            let new_value = (*new_password).clone();
            wasm_bindgen_futures::spawn_local(async move {
                match service.change_password(old_value, new_value).await {
                    Ok(()) => {
                        feedback.set(Some((
                            Severity::Success,
                            "Password updated successfully".to_string(),
                        )));
                        current_password_handle.set(String::new());
                        new_password_handle.set(String::new());
                        confirm_password_handle.set(String::new());
                    }
                    Err(err) => feedback.set(Some((Severity::Error, display_error(&err)))),
                }
                saving_password.set(false);
            });
        })
    };

    html! {
        <main class="max-w-md mx-auto mt-12 px-6">
            <h1 class="text-2xl font-bold text-center mb-6">{"Account"}</h1>
            if let Some(user) = &user {
                if let Some(avatar) = &user.avatar {
                    <img src={avatar.clone()} alt="avatar" class="w-20 h-20 rounded-full mx-auto mb-6" />
                }
            }
            <section>
                <h2 class="text-lg font-semibold mb-3">{"Profile"}</h2>
                <form onsubmit={on_profile_submit} class="flex flex-col gap-4">
                    <TextField label="Username" value={(*username).clone()} oninput={bind_input(username.clone())} />
                    <TextField label="Email" value={(*email).clone()} oninput={bind_input(email.clone())} />
                    <button
                        type="submit"
                        disabled={*saving_profile}
                        class="px-4 py-2 text-white bg-blue-600 hover:bg-blue-700 disabled:bg-blue-300 rounded-lg"
                    >
                        {if *saving_profile { "Saving..." } else { "Save profile" }}
                    </button>
                </form>
            </section>
            <section class="mt-10">
                <h2 class="text-lg font-semibold mb-3">{"Change password"}</h2>
                <form onsubmit={on_password_submit} class="flex flex-col gap-4">
                    <TextField label="Current password" kind="password" value={(*current_password).clone()} oninput={bind_input(current_password.clone())} />
                    <TextField label="New password" kind="password" value={(*new_password).clone()} oninput={bind_input(new_password.clone())} />
                    <TextField label="Confirm new password" kind="password" value={(*confirm_password).clone()} oninput={bind_input(confirm_password.clone())} />
                    <button
                        type="submit"
                        disabled={*saving_password}
                        class="px-4 py-2 text-white bg-blue-600 hover:bg-blue-700 disabled:bg-blue-300 rounded-lg"
                    >
                        {if *saving_password { "Updating..." } else { "Update password" }}
                    </button>
                </form>
            </section>
            if let Some((severity, message)) = (*feedback).clone() {
                <MessageBox {severity} {message} />
            }
        </main>
    }
}
