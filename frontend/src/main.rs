use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod error;
mod motion;
mod utils {
    pub mod dom;
}
mod components {
    pub mod feature_card;
    pub mod footer;
    pub mod icons;
    pub mod media_slider;
    pub mod nav;
    pub mod page_loader;
    pub mod reveal;
    pub mod scroll_progress;
    pub mod scroll_to_top;
}
mod pages {
    pub mod landing;
    pub mod learn_more;
    pub mod support;
}

use components::footer::Footer;
use components::nav::Nav;
use components::page_loader::PageLoader;
use components::scroll_progress::ScrollProgress;
use components::scroll_to_top::ScrollToTop;
use motion::hooks::use_reveal;
use motion::reveal::RevealState;
use pages::landing::Landing;
use pages::learn_more::LearnMore;
use pages::support::Support;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/learn-more")]
    LearnMore,
    #[at("/support")]
    Support,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    log::debug!("Rendering route {:?}", route);
    match route {
        Route::Home => html! { <Landing /> },
        Route::LearnMore => html! { <LearnMore /> },
        Route::Support => html! { <Support /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let reveal = use_reveal(config::LOADER_DELAY_MS);

    html! {
        <BrowserRouter>
            <div class="app-shell grain-overlay">
                <ScrollProgress />
                if reveal == RevealState::Revealed {
                    <div class="app-content">
                        <Nav />
                        <main>
                            <Switch<Route> render={switch} />
                        </main>
                        <Footer />
                        <ScrollToTop />
                    </div>
                } else {
                    <PageLoader />
                }
            </div>
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    log::info!("Starting Notch site");
    yew::Renderer::<App>::new().render();
}
