use log::{info, warn};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::lead::fields::{CompanySize, FieldId, Industry};
use crate::lead::form::{LeadForm, Layout, Step, CHALLENGES_SOFT_LIMIT};
use crate::lead::sink::{self, SinkError};

/// Picks the layout from the viewport width and renders [`LeadFormView`].
#[function_component(ResponsiveLeadForm)]
pub fn responsive_lead_form() -> Html {
    let (width, _) = use_window_size();
    let layout = if width > 0.0 && width < config::WIZARD_BREAKPOINT_PX {
        Layout::Wizard
    } else {
        Layout::SinglePage
    };
    html! { <LeadFormView {layout} /> }
}

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub layout: Layout,
}

pub enum LeadFormMsg {
    Change(FieldId, String),
    Blur(FieldId),
    Next,
    Back,
    Submit,
    Submitted(Result<(), SinkError>),
}

pub struct LeadFormView {
    form: LeadForm,
}

impl Component for LeadFormView {
    type Message = LeadFormMsg;
    type Properties = LeadFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            form: LeadForm::new(ctx.props().layout),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.form.set_layout(ctx.props().layout);
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            LeadFormMsg::Change(field, value) => {
                self.form.change(field, value);
                true
            }
            LeadFormMsg::Blur(field) => {
                self.form.blur(field);
                true
            }
            LeadFormMsg::Next => {
                self.form.advance();
                true
            }
            LeadFormMsg::Back => {
                self.form.back();
                true
            }
            LeadFormMsg::Submit => {
                match self.form.begin_submit() {
                    Ok(lead) => {
                        info!("Submitting audit request");
                        ctx.link().send_future(async move {
                            LeadFormMsg::Submitted(sink::dispatch(lead).await)
                        });
                    }
                    Err(refused) => warn!("Audit request not submitted: {}", refused),
                }
                true
            }
            LeadFormMsg::Submitted(outcome) => {
                self.form.finish_submit(outcome);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.form.submit_success() {
            return self.render_success();
        }

        html! {
            <div class="lead-form">
                {
                    match self.form.layout() {
                        Layout::Wizard => self.render_wizard(ctx),
                        Layout::SinglePage => self.render_single_page(ctx),
                    }
                }
            </div>
        }
    }
}

impl LeadFormView {
    fn render_single_page(&self, ctx: &Context<Self>) -> Html {
        html! {
            <>
                <section class="lead-section">
                    <h3>{"Personal Information"}</h3>
                    <div class="field-row">
                        { self.render_field(ctx, FieldId::FirstName) }
                        { self.render_field(ctx, FieldId::LastName) }
                    </div>
                    <div class="field-row">
                        { self.render_field(ctx, FieldId::Email) }
                        { self.render_field(ctx, FieldId::Phone) }
                    </div>
                    <p class="secure-note">{"🔒 Your information is secure and will never be shared"}</p>
                </section>
                <section class="lead-section">
                    <h3>{"Company Details"}</h3>
                    { self.render_field(ctx, FieldId::Company) }
                    <div class="field-row">
                        { self.render_field(ctx, FieldId::Industry) }
                        { self.render_field(ctx, FieldId::CompanySize) }
                    </div>
                </section>
                <section class="lead-section">
                    <h3>{"Tell Us More"}</h3>
                    { self.render_field(ctx, FieldId::Challenges) }
                </section>
                { self.render_submit(ctx) }
            </>
        }
    }

    fn render_wizard(&self, ctx: &Context<Self>) -> Html {
        let step = self.form.step();
        let dots = [Step::AboutYou, Step::CompanyDetails, Step::Challenges]
            .into_iter()
            .map(|s| html! { <span class={classes!("step-dot", (s <= step).then(|| "active"))}></span> })
            .collect::<Html>();

        let back = (step != Step::AboutYou).then(|| {
            html! {
                <button type="button" class="secondary" onclick={ctx.link().callback(|_| LeadFormMsg::Back)}>
                    {"← Back"}
                </button>
            }
        });

        let forward = if step == Step::Challenges {
            self.render_submit(ctx)
        } else {
            html! {
                <button
                    type="button"
                    disabled={!self.form.is_step_valid(step)}
                    onclick={ctx.link().callback(|_| LeadFormMsg::Next)}
                >
                    {"Continue →"}
                </button>
            }
        };

        html! {
            <div class="lead-wizard">
                <div class="step-dots">{ dots }</div>
                <h3>{format!("Step {} of 3: {}", step.number(), step.title())}</h3>
                { for step.fields().iter().map(|&field| self.render_field(ctx, field)) }
                <div class="wizard-actions">
                    { back.unwrap_or_default() }
                    { forward }
                </div>
            </div>
        }
    }

    fn render_submit(&self, ctx: &Context<Self>) -> Html {
        let submitting = self.form.is_submitting();
        html! {
            <button
                type="button"
                class="submit-button"
                disabled={submitting}
                onclick={ctx.link().callback(|_| LeadFormMsg::Submit)}
            >
                { if submitting { "Sending..." } else { "Get My Free AI Audit" } }
            </button>
        }
    }

    fn render_field(&self, ctx: &Context<Self>, field: FieldId) -> Html {
        let error = self.form.visible_error(field);
        let value = self.form.value(field).to_string();
        let onblur = ctx.link().callback(move |_: FocusEvent| LeadFormMsg::Blur(field));

        let control = match field {
            FieldId::Industry | FieldId::CompanySize => {
                let options: Vec<(&str, &str)> = if field == FieldId::Industry {
                    Industry::ALL.iter().map(|i| (i.value(), i.label())).collect()
                } else {
                    CompanySize::ALL.iter().map(|s| (s.value(), s.label())).collect()
                };
                let onchange = ctx.link().callback(move |e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    LeadFormMsg::Change(field, select.value())
                });
                html! {
                    <select id={field.id()} name={field.id()} {onchange} {onblur}>
                        <option value="" selected={value.is_empty()}>{field.placeholder()}</option>
                        {
                            options.into_iter().map(|(option, label)| html! {
                                <option value={option} selected={value == option}>{label}</option>
                            }).collect::<Html>()
                        }
                    </select>
                }
            }
            FieldId::Challenges => {
                let oninput = ctx.link().callback(move |e: InputEvent| {
                    let area: HtmlTextAreaElement = e.target_unchecked_into();
                    LeadFormMsg::Change(field, area.value())
                });
                let count = self.form.challenges_char_count();
                html! {
                    <>
                        <textarea
                            id={field.id()}
                            name={field.id()}
                            rows="6"
                            placeholder={field.placeholder()}
                            {value}
                            {oninput}
                            {onblur}
                        />
                        <p class={classes!("char-count", self.form.challenges_over_soft_limit().then(|| "over"))}>
                            {format!("{}/{} characters", count, CHALLENGES_SOFT_LIMIT)}
                        </p>
                    </>
                }
            }
            _ => {
                let input_type = match field {
                    FieldId::Email => "email",
                    FieldId::Phone => "tel",
                    _ => "text",
                };
                let oninput = ctx.link().callback(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    LeadFormMsg::Change(field, input.value())
                });
                html! {
                    <input
                        id={field.id()}
                        name={field.id()}
                        type={input_type}
                        placeholder={field.placeholder()}
                        {value}
                        {oninput}
                        {onblur}
                    />
                }
            }
        };

        html! {
            <div class={classes!("form-field", error.is_some().then(|| "has-error"))}>
                <label for={field.id()}>
                    {field.label()}
                    if field.is_required() {
                        <span class="required">{" *"}</span>
                    }
                </label>
                { control }
                if let Some(message) = error {
                    <p class="field-error">{message}</p>
                }
            </div>
        }
    }

    fn render_success(&self) -> Html {
        let first_name = self.form.fields().first_name.trim().to_string();
        html! {
            <div class="lead-success">
                <h2>{format!("Thank you, {}!", first_name)}</h2>
                <p>{"Your free AI audit request is in. Here's what happens next:"}</p>
                <ol>
                    <li>{"Check your inbox for a confirmation email within the next few minutes."}</li>
                    <li>{"We review your challenges and prepare ideas specific to your business."}</li>
                    <li>{"Pick a time for your discovery meeting so we can walk you through them."}</li>
                </ol>
                <a class="cta-button" href={config::SCHEDULING_URL} target="_blank" rel="noopener noreferrer">
                    {"Schedule My Discovery Meeting"}
                </a>
                <p class="small">
                    {"Questions? Email "}
                    <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                </p>
            </div>
        }
    }
}
