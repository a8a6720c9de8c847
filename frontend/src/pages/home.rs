use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::cta_button::CtaButton;
use crate::components::roi_calculator::RoiCalculator;
use crate::components::sections::{CtaBanner, Testimonials};
use crate::content::{CASE_STUDIES, PROCESS_STEPS, SERVICES};
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    // Land at the top when arriving from a scrolled page.
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="home-page">
            <section class="hero">
                <div class="container narrow">
                    <h1>{"Stop Wasting Time on "}<span class="accent">{"Monotonous Work"}</span></h1>
                    <p class="hero-subtitle">
                        {"Our AI consulting team builds ROI-driven automation systems that transform how your business operates. Work 3X faster with the same team."}
                    </p>
                    <div class="hero-actions">
                        <CtaButton>{"Get My Free AI Audit"}</CtaButton>
                        <Link<Route> to={Route::Results} classes="secondary-link">
                            {"See Client Results"}
                        </Link<Route>>
                    </div>
                </div>
            </section>

            <section class="services">
                <div class="container">
                    <h2>{"What We Automate"}</h2>
                    <div class="card-grid three">
                        {
                            SERVICES.iter().map(|service| html! {
                                <div class="card">
                                    <span class="card-icon">{service.icon}</span>
                                    <h3>{service.title}</h3>
                                    <p>{service.summary}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                    <Link<Route> to={Route::Solutions} classes="section-link">
                        {"Explore all solutions →"}
                    </Link<Route>>
                </div>
            </section>

            <section class="results-preview section-alt">
                <div class="container">
                    <h2>{"Real Results for Real Businesses"}</h2>
                    <p class="section-lead">{"See how businesses like yours are transforming their operations with AI automation."}</p>
                    <div class="card-grid three">
                        {
                            CASE_STUDIES.iter().map(|study| html! {
                                <div class="card">
                                    <h3>{study.headline}</h3>
                                    <p>{study.summary}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section class="roi-section">
                <div class="container">
                    <h2>{"Calculate Your "}<span class="accent">{"Potential ROI"}</span></h2>
                    <p class="section-lead">{"Adjust the inputs to see what automation could be worth to your business."}</p>
                    <RoiCalculator compact=true />
                </div>
            </section>

            <section class="process-preview">
                <div class="container">
                    <h2>{"How We Work"}</h2>
                    <p class="section-lead">{"From discovery to deployment, here's how we transform your business with AI automation."}</p>
                    <ol class="step-list">
                        {
                            PROCESS_STEPS.iter().enumerate().map(|(i, step)| html! {
                                <li>
                                    <span class="step-number">{(i + 1).to_string()}</span>
                                    <h3>{step.title}</h3>
                                    <p>{step.summary}</p>
                                </li>
                            }).collect::<Html>()
                        }
                    </ol>
                </div>
            </section>

            <Testimonials />

            <CtaBanner
                title="Ready to Work Smarter?"
                text="Schedule your free AI audit and find out exactly where automation pays off for you."
            />
        </div>
    }
}
