mod account;
mod dashboard;
mod home;
mod reset_password;
mod send_reset_password;
mod signin;
mod signup;

pub use account::Account;
pub use dashboard::Dashboard;
pub use home::Home;
pub use reset_password::ResetPassword;
pub use send_reset_password::SendResetPassword;
pub use signin::SignIn;
pub use signup::SignUp;

use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Bind a text input to a state handle.
pub(crate) fn bind_input(state: UseStateHandle<String>) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

/// Labelled form field shared by all pages
#[derive(Properties, Clone, PartialEq)]
pub struct TextFieldProps {
    pub label: String,
    pub value: String,
    pub oninput: Callback<InputEvent>,
    #[prop_or("text")]
    pub kind: &'static str,
}

#[function_component(TextField)]
pub(crate) fn text_field(props: &TextFieldProps) -> Html {
    html! {
        <label class="flex flex-col gap-1 text-sm text-gray-700">
            {&props.label}
            <input
                type={props.kind}
                value={props.value.clone()}
                oninput={props.oninput.clone()}
                class="px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:border-blue-500"
            />
        </label>
    }
}
