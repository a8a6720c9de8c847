use yew::prelude::*;

use crate::components::lead_form::ResponsiveLeadForm;
use crate::components::sections::{checklist, testimonial_card, Hero};
use crate::content::{AUDIT_BENEFITS, AUDIT_TESTIMONIAL};

#[function_component(Analysis)]
pub fn analysis() -> Html {
    html! {
        <div class="analysis-page">
            <Hero
                title="Get Your Free AI Audit"
                subtitle="Discover exactly how AI automation can transform your business. No obligation, just valuable insights."
            />

            <section>
                <div class="container two-column">
                    <div>
                        <h2>{"What You'll Get:"}</h2>
                        { checklist(AUDIT_BENEFITS) }
                        { testimonial_card(&AUDIT_TESTIMONIAL) }
                    </div>
                    <div class="card">
                        <ResponsiveLeadForm />
                        <div class="trust-row">
                            <span>{"🔒 100% Secure"}</span>
                            <span>{"⚡ Quick Response"}</span>
                            <span>{"✓ No Obligation"}</span>
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}
