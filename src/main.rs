use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod scroll {
    pub mod controller;
    pub mod full_page;
    pub mod hash;
    pub mod mode;
}
mod components {
    pub mod benefits;
    pub mod consultation_cta;
    pub mod entrance_overlay;
    pub mod footer;
    pub mod franchise;
    pub mod happiness;
    pub mod hero;
    pub mod icons;
    pub mod nav_bar;
    pub mod reviews;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

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
        }
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
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

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
