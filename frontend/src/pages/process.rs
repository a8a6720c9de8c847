use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::sections::{checklist, Hero};
use crate::content::{PRICING_TIERS, PROCESS_STEPS};
use crate::Route;

#[function_component(Process)]
pub fn process() -> Html {
    html! {
        <div class="process-page">
            <Hero
                title="Pricing &"
                highlight="Process"
                subtitle="Transparent pricing and a proven process that delivers results."
            />

            <section class="pricing">
                <div class="container">
                    <h2>{"Investment Ranges"}</h2>
                    <div class="card-grid three">
                        {
                            PRICING_TIERS.iter().map(|tier| html! {
                                <div class={classes!("card", "tier", tier.featured.then(|| "featured"))}>
                                    if tier.featured {
                                        <div class="tier-badge">{"MOST POPULAR"}</div>
                                    }
                                    <h3>{tier.name}</h3>
                                    <p class="tier-price">{tier.price}</p>
                                    <p>{tier.description}</p>
                                    { checklist(tier.features) }
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            {
                PROCESS_STEPS.iter().enumerate().map(|(i, step)| html! {
                    <section class={classes!("process-step", (i % 2 == 0).then(|| "section-alt"))}>
                        <div class="container narrow">
                            <span class="step-number">{(i + 1).to_string()}</span>
                            <h2>{format!("{} ({})", step.title, step.timeline)}</h2>
                            <p class="section-lead">{step.summary}</p>
                            { checklist(step.details) }
                        </div>
                    </section>
                }).collect::<Html>()
            }

            <section class="bridge">
                <div class="container narrow">
                    <h2>{"Not Ready to Talk Yet?"}</h2>
                    <p>{"See what results you could achieve or explore how we've helped other businesses."}</p>
                    <div class="hero-actions">
                        <Link<Route> to={Route::RoiCalculator} classes="secondary-link">
                            {"Calculate Your Potential ROI"}
                        </Link<Route>>
                        <Link<Route> to={Route::Results} classes="secondary-link">
                            {"See Success Stories"}
                        </Link<Route>>
                    </div>
                </div>
            </section>
        </div>
    }
}
