use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::sections::{CtaBanner, Hero};
use crate::content::VALUES;
use crate::Route;

#[function_component(About)]
pub fn about() -> Html {
    let next_steps = [
        (Route::Solutions, "Our Solutions", "See the automation systems we build for businesses like yours"),
        (Route::Results, "Client Results", "Real case studies with measurable outcomes and ROI"),
        (Route::Process, "Our Process", "Learn how we partner with you from discovery to deployment"),
    ];

    html! {
        <div class="about-page">
            <Hero
                title="We're Humans Building"
                highlight="AI Solutions"
                subtitle="Full Stack AI Automation was founded by business owners who got tired of watching companies waste money on AI tools that don't deliver results."
            />

            <section>
                <div class="container two-column">
                    <div>
                        <h2>{"Our Story"}</h2>
                        <p>{"We've been in your shoes. We've struggled with overwhelmed teams, lost leads, and operations that couldn't scale. We've also seen firsthand how the right AI automation can transform a business."}</p>
                        <p>{"That's why we started Full Stack AI Automation: to bridge the gap between AI potential and real-world business value. We're here to solve your actual problems with systems that work."}</p>
                    </div>
                    <div>
                        <h2>{"Our Mission"}</h2>
                        <p>{"To empower businesses of all sizes with AI automation that delivers measurable results. We believe technology should serve people, not replace them."}</p>
                        <p>{"Every system we build is designed to amplify your team's capabilities, eliminate monotonous work, and help you focus on growing your business and serving your customers."}</p>
                    </div>
                </div>
                <div class="container">
                    <h2>{"Our Values"}</h2>
                    <div class="card-grid three">
                        {
                            VALUES.iter().map(|value| html! {
                                <div class="card centered">
                                    <h3>{value.title}</h3>
                                    <p>{value.description}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section class="section-alt">
                <div class="container">
                    <h2>{"Explore More"}</h2>
                    <div class="card-grid three">
                        {
                            next_steps.into_iter().map(|(route, title, text)| html! {
                                <Link<Route> to={route} classes="card centered link-card">
                                    <h3>{title}</h3>
                                    <p>{text}</p>
                                </Link<Route>>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <CtaBanner
                title="Let's Talk About Your Business"
                text="Book a free AI audit with our team. No sales pitch, just a clear look at what can be automated."
            />
        </div>
    }
}
