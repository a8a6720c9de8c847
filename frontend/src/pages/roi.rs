use yew::prelude::*;

use crate::components::roi_calculator::RoiCalculator;
use crate::components::sections::Hero;
use crate::estimator::{group_thousands, ESTIMATED_INVESTMENT};

#[function_component(RoiCalculatorPage)]
pub fn roi_calculator_page() -> Html {
    html! {
        <div class="roi-page">
            <Hero
                title="AI Automation"
                highlight="ROI Calculator"
                subtitle="See exactly how much time and money AI automation could save your business. Adjust the inputs below to get your personalized ROI estimate."
            />

            <section>
                <div class="container">
                    <RoiCalculator />
                </div>
            </section>

            <section class="disclaimer section-alt">
                <div class="container narrow">
                    <p class="small">
                        {format!(
                            "* These are estimated projections based on industry averages and our client case studies. \
                             Investment is shown at the ${} midpoint of our professional tier. Actual results may vary \
                             depending on your specific business, industry, and implementation. The 85% conversion \
                             improvement is based on our documented case study with a home improvement company.",
                            group_thousands(ESTIMATED_INVESTMENT)
                        )}
                    </p>
                </div>
            </section>
        </div>
    }
}
