use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod content;
mod estimator;
mod theme;
mod lead {
    pub mod fields;
    pub mod validation;
    pub mod form;
    pub mod payload;
    pub mod sink;
}
mod components {
    pub mod cta_button;
    pub mod nav;
    pub mod roi_calculator;
    pub mod lead_form;
    pub mod sections;
}
mod pages {
    pub mod home;
    pub mod about;
    pub mod solutions;
    pub mod results;
    pub mod process;
    pub mod roi;
    pub mod analysis;
    pub mod not_found;
}

use components::nav::Nav;
use pages::{
    about::About,
    analysis::Analysis,
    home::Home,
    not_found::NotFound,
    process::Process,
    results::Results,
    roi::RoiCalculatorPage,
    solutions::Solutions,
};

#[derive(Clone, Copy, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/solutions")]
    Solutions,
    #[at("/results")]
    Results,
    #[at("/process")]
    Process,
    #[at("/roi-calculator")]
    RoiCalculator,
    #[at("/analysis")]
    Analysis,
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
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Solutions => {
            info!("Rendering Solutions page");
            html! { <Solutions /> }
        },
        Route::Results => {
            info!("Rendering Results page");
            html! { <Results /> }
        },
        Route::Process => {
            info!("Rendering Process page");
            html! { <Process /> }
        },
        Route::RoiCalculator => {
            info!("Rendering ROI Calculator page");
            html! { <RoiCalculatorPage /> }
        },
        Route::Analysis => {
            info!("Rendering Analysis page");
            html! { <Analysis /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
fn Footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="container footer-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Full Stack AI"}
                </Link<Route>>
                <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                <p class="small">{"© Full Stack AI Automation. All rights reserved."}</p>
            </div>
        </footer>
    }
}


#[function_component]
fn App() -> Html {
    let theme = use_state(theme::load);

    {
        let theme = *theme;
        use_effect_with_deps(move |_| {
            theme::apply(theme);
            || ()
        }, ());
    }

    let handle_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_| {
            theme.set(theme::toggle(*theme));
        })
    };

    html! {
        <BrowserRouter>
            <Nav theme={*theme} on_toggle_theme={handle_toggle_theme} />
            <main id="main-content">
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </BrowserRouter>
    }
}


fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
