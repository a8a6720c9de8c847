use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::theme::Theme;
use crate::Route;

/// Scroll offset past which the bar gets its heavier shadow.
const SCROLL_SHADOW_PX: f64 = 50.0;

const LINKS: [(Route, &str); 5] = [
    (Route::Solutions, "Solutions"),
    (Route::Results, "Results"),
    (Route::Process, "Pricing & Process"),
    (Route::RoiCalculator, "ROI Calculator"),
    (Route::About, "About"),
];

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { theme, on_toggle_theme } = props;
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let listener = web_sys::window().map(|window| {
                let scroll_window = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let offset = scroll_window.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(offset > SCROLL_SHADOW_PX);
                }) as Box<dyn FnMut()>);
                let _ = window.add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                );
                (window, scroll_callback)
            });

            move || {
                if let Some((window, scroll_callback)) = listener {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let toggle_theme = {
        let on_toggle_theme = on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Full Stack AI"}
                </Link<Route>>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        LINKS.iter().map(|(route, label)| html! {
                            <div onclick={close_menu.clone()}>
                                <Link<Route> to={*route} classes="nav-link">
                                    {*label}
                                </Link<Route>>
                            </div>
                        }).collect::<Html>()
                    }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Analysis} classes="nav-cta">
                            {"Free AI Audit"}
                        </Link<Route>>
                    </div>
                    <button
                        class="theme-toggle"
                        aria-label={theme.toggle_label()}
                        onclick={toggle_theme}
                    >
                        {theme.toggle_icon()}
                    </button>
                </div>
            </div>
        </nav>
    }
}
