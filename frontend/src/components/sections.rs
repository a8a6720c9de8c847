use yew::prelude::*;

use crate::components::cta_button::CtaButton;
use crate::content::{Metric, Testimonial, TESTIMONIALS};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub highlight: Option<AttrValue>,
    pub subtitle: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Page header band. `highlight` is appended to the title in the accent color.
#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    html! {
        <section class="hero section-alt">
            <div class="container narrow">
                <h1>
                    {props.title.to_string()}
                    if let Some(highlight) = &props.highlight {
                        {" "}<span class="accent">{highlight.to_string()}</span>
                    }
                </h1>
                <p class="hero-subtitle">{props.subtitle.to_string()}</p>
                { for props.children.iter() }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct CtaBannerProps {
    pub title: AttrValue,
    pub text: AttrValue,
    #[prop_or(AttrValue::Static("Get My Free AI Audit"))]
    pub button: AttrValue,
}

#[function_component(CtaBanner)]
pub fn cta_banner(props: &CtaBannerProps) -> Html {
    html! {
        <section class="cta-banner section-alt">
            <div class="container narrow">
                <h2>{props.title.to_string()}</h2>
                <p>{props.text.to_string()}</p>
                <CtaButton>{props.button.to_string()}</CtaButton>
            </div>
        </section>
    }
}

pub fn checklist(items: &[&'static str]) -> Html {
    html! {
        <ul class="checklist">
            { for items.iter().map(|item| html! { <li><span class="check">{"✓"}</span>{*item}</li> }) }
        </ul>
    }
}

pub fn metric_grid(metrics: &[Metric]) -> Html {
    html! {
        <div class="metric-grid">
            {
                metrics.iter().map(|metric| html! {
                    <div class="card">
                        <p class="metric-value">{metric.value}</p>
                        <p>{metric.label}</p>
                    </div>
                }).collect::<Html>()
            }
        </div>
    }
}

pub fn testimonial_card(testimonial: &Testimonial) -> Html {
    html! {
        <div class="card testimonial">
            <p class="quote">{format!("\"{}\"", testimonial.text)}</p>
            <p class="author">{testimonial.author}</p>
            <p class="role">{testimonial.role}</p>
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section class="testimonials">
            <div class="container">
                <h2>{"What Our Clients Say"}</h2>
                <div class="card-grid three">
                    { for TESTIMONIALS.iter().map(testimonial_card) }
                </div>
            </div>
        </section>
    }
}
