use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// How long the pressed style shows before navigating.
const PRESS_FEEDBACK_MS: u32 = 200;
const RESET_AFTER_MS: u32 = 100;

#[derive(Properties, PartialEq)]
pub struct CtaButtonProps {
    #[prop_or(Route::Analysis)]
    pub to: Route,
    pub children: Children,
}

#[function_component(CtaButton)]
pub fn cta_button(props: &CtaButtonProps) -> Html {
    let pressed = use_state(|| false);
    let navigator = use_navigator();

    let onclick = {
        let pressed = pressed.clone();
        let to = props.to;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            pressed.set(true);
            let pressed = pressed.clone();
            let navigator = navigator.clone();
            Timeout::new(PRESS_FEEDBACK_MS, move || {
                if let Some(navigator) = navigator {
                    navigator.push(&to);
                }
                Timeout::new(RESET_AFTER_MS, move || pressed.set(false)).forget();
            })
            .forget();
        })
    };

    html! {
        <button
            class={classes!("cta-button", (*pressed).then(|| "pressed"))}
            {onclick}
        >
            { for props.children.iter() }
        </button>
    }
}
