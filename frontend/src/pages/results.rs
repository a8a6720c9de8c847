use yew::prelude::*;

use crate::components::sections::{metric_grid, CtaBanner, Hero, Testimonials};
use crate::content::CASE_STUDIES;

#[function_component(Results)]
pub fn results() -> Html {
    html! {
        <div class="results-page">
            <Hero
                title="Real Results,"
                highlight="Real Businesses"
                subtitle="See how companies like yours are saving time, increasing revenue, and scaling faster with AI automation."
            />

            {
                CASE_STUDIES.iter().enumerate().map(|(i, study)| html! {
                    <section id={study.anchor} class={classes!("case-study", (i % 2 == 1).then(|| "section-alt"))}>
                        <div class="container narrow">
                            <h2>{study.headline}</h2>
                            <h3 class="accent">{study.client}</h3>
                            <p class="section-lead">{study.problem}</p>
                            <p>{study.solution}</p>
                            { metric_grid(study.metrics) }
                        </div>
                    </section>
                }).collect::<Html>()
            }

            <Testimonials />

            <CtaBanner
                title="Ready For Your Own Success Story?"
                text="Schedule a free AI audit and discover how much time and money you could be saving."
            />
        </div>
    }
}
