//! Application shell

use crate::components::Navbar;
use crate::routes::{switch, Route};
use portico_frontend_common::SessionProvider;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <SessionProvider>
                <Navbar />
                <Switch<Route> render={switch} />
            </SessionProvider>
        </BrowserRouter>
    }
}
