use yew::prelude::*;

use crate::components::sections::{checklist, CtaBanner, Hero};
use crate::content::SERVICES;

#[function_component(Solutions)]
pub fn solutions() -> Html {
    html! {
        <div class="solutions-page">
            <Hero
                title="AI Automation"
                highlight="Solutions"
                subtitle="Practical systems that remove busywork, keep every lead warm, and give you a clear view of your business."
            />

            {
                SERVICES.iter().enumerate().map(|(i, service)| html! {
                    <section class={classes!("service-detail", (i % 2 == 1).then(|| "section-alt"))}>
                        <div class="container narrow">
                            <div class="service-heading">
                                <span class="service-icon">{service.icon}</span>
                                <h2>{service.title}</h2>
                            </div>
                            <p class="section-lead">{service.description}</p>
                            { checklist(service.features) }
                        </div>
                    </section>
                }).collect::<Html>()
            }

            <CtaBanner
                title="Ready to Automate Your Business?"
                text="Tell us where your team loses time and we'll show you which of these systems fits first."
            />
        </div>
    }
}
