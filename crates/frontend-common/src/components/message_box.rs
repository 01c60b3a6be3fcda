//! Inline alert box for form feedback

use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Success,
    Info,
}

impl Severity {
    fn classes(self) -> &'static str {
        match self {
            Self::Error => "bg-red-50 border-red-300 text-red-800",
            Self::Success => "bg-green-50 border-green-300 text-green-800",
            Self::Info => "bg-blue-50 border-blue-300 text-blue-800",
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct MessageBoxProps {
    pub severity: Severity,
    pub message: String,
}

#[function_component(MessageBox)]
pub fn message_box(props: &MessageBoxProps) -> Html {
    if props.message.is_empty() {
        return Html::default();
    }

    html! {
        <div
            role="alert"
            class={format!("mt-4 px-4 py-3 border rounded-lg text-sm {}", props.severity.classes())}
        >
            {&props.message}
        </div>
    }
}
