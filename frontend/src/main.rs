use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod browser;
mod config;
mod content;
mod diagnostics;
mod scheduling;
mod scroll;
mod quote {
    pub mod controller;
    pub mod draft;
    pub mod sink;
    pub mod submit_state;
    pub mod validation;
}
mod components {
    pub mod anchor_link;
    pub mod back_to_top;
    pub mod footer;
    pub mod gallery;
    pub mod header;
    pub mod quote_form;
    pub mod reveal;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use pages::{
    home::Home,
    not_found::NotFound,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    diagnostics::install_global_error_handlers();
    diagnostics::print_banner();

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
