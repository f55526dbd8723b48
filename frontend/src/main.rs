use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod config;
mod data;
mod error;
mod hooks;
mod pages;
mod state;
mod utils {
    pub mod scroll;
}

use pages::landing::Landing;
use pages::not_found::NotFound;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Landing => html! { <Landing /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    let cfg = config::get();
    wasm_logger::init(wasm_logger::Config::new(cfg.log_level()));
    log::info!("starting site, breakpoint {}px", cfg.narrow_breakpoint_px);
    yew::Renderer::<App>::new().render();
}
