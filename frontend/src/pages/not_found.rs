use yew::prelude::*;

use crate::components::cta_button::CtaButton;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="hero">
            <div class="container narrow">
                <h1>{"Page not found"}</h1>
                <p class="hero-subtitle">{"The page you were looking for has moved or never existed."}</p>
                <CtaButton to={Route::Home}>{"Back to home"}</CtaButton>
            </div>
        </section>
    }
}
