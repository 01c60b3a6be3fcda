//! Protected dashboard

use portico_frontend_common::use_current_user;
use yew::prelude::*;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let user = use_current_user();
    let expanded = use_state(|| false);

    let toggle = {
        let expanded = expanded.clone();
        Callback::from(move |_| expanded.set(!*expanded))
    };

    let greeting = user
        .as_ref()
        .map(|u| format!("Hello {}, here is your dashboard", u.username))
        .unwrap_or_else(|| "Hello, here is your dashboard".to_string());

    html! {
        <main class="max-w-2xl mx-auto mt-12 px-6">
            <div class="p-5 bg-gray-100 rounded-lg">
                <div class="flex items-center justify-between">
                    <div>
                        <h1 class="text-xl font-bold">{"Dashboard"}</h1>
                        <p class="text-gray-600">{greeting}</p>
                    </div>
                    <button onclick={toggle} class="text-sm text-blue-600 hover:underline">
                        {if *expanded { "Show less" } else { "Show more" }}
                    </button>
                </div>
                if *expanded {
                    <p class="mt-4 text-sm text-gray-600">
                        {"More information about your dashboard and its content, plus some other details."}
                    </p>
                }
            </div>
        </main>
    }
}
