use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::cta_button::CtaButton;
use crate::estimator::{estimate, group_thousands, EstimatorField, EstimatorInputs};

#[derive(Properties, PartialEq)]
pub struct RoiCalculatorProps {
    /// Home page embed: results first, tighter labels, no report CTA.
    #[prop_or_default]
    pub compact: bool,
}

struct InputSpec {
    field: EstimatorField,
    label: &'static str,
    hint: Option<&'static str>,
    unit: &'static str,
}

const INPUTS: [InputSpec; 6] = [
    InputSpec {
        field: EstimatorField::HoursPerWeek,
        label: "Hours spent on repetitive tasks per week",
        hint: Some("Include data entry, scheduling, follow-ups, reporting, etc."),
        unit: " hours",
    },
    InputSpec {
        field: EstimatorField::HourlyRate,
        label: "Average hourly rate ($/hour)",
        hint: Some("Your team's average cost per hour"),
        unit: "",
    },
    InputSpec {
        field: EstimatorField::EmployeeCount,
        label: "Number of employees affected",
        hint: None,
        unit: " people",
    },
    InputSpec {
        field: EstimatorField::LeadsPerMonth,
        label: "Leads received per month",
        hint: None,
        unit: "",
    },
    InputSpec {
        field: EstimatorField::LeadConversionRate,
        label: "Current lead conversion rate (%)",
        hint: None,
        unit: "%",
    },
    InputSpec {
        field: EstimatorField::AverageSaleValue,
        label: "Average sale value ($)",
        hint: None,
        unit: "",
    },
];

#[function_component(RoiCalculator)]
pub fn roi_calculator(props: &RoiCalculatorProps) -> Html {
    let inputs = use_state(EstimatorInputs::default);
    let results = estimate(&inputs);

    let render_input = |spec: &InputSpec| {
        let field = spec.field;
        let value = inputs.get(field);
        let oninput = {
            let inputs = inputs.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let mut next = (*inputs).clone();
                next.set_from_text(field, &input.value());
                inputs.set(next);
            })
        };

        if field.is_slider() {
            let (min, max) = field.bounds();
            html! {
                <div class="roi-input">
                    <div class="roi-input-header">
                        <label for={field.id()}>{spec.label}</label>
                        <span class="badge">{format!("{}{}", value, spec.unit)}</span>
                    </div>
                    <input
                        id={field.id()}
                        type="range"
                        min={min.to_string()}
                        max={max.to_string()}
                        step="1"
                        value={value.to_string()}
                        {oninput}
                    />
                    if let Some(hint) = spec.hint {
                        <p class="roi-hint">{hint}</p>
                    }
                </div>
            }
        } else {
            let (min, max) = field.bounds();
            html! {
                <div class="roi-input">
                    <label for={field.id()}>{spec.label}</label>
                    <input
                        id={field.id()}
                        name={field.id()}
                        type="number"
                        min={min.to_string()}
                        max={max.to_string()}
                        value={value.to_string()}
                        {oninput}
                    />
                    if let Some(hint) = spec.hint {
                        <p class="roi-hint">{hint}</p>
                    }
                </div>
            }
        }
    };

    let result_cards = html! {
        <div class={classes!("roi-results", props.compact.then(|| "compact"))}>
            <div class="roi-card highlight">
                <h3>{"Time Savings"}<span class="badge">{"Per Week"}</span></h3>
                <p class="roi-figure">{format!("{} hours", results.weekly_time_savings_label())}</p>
                <p>{"Automated tasks free up your team for high-value work"}</p>
            </div>
            <div class="roi-card">
                <h3>{"Annual Cost Savings"}<span class="badge">{"Per Year"}</span></h3>
                <p class="roi-figure">{format!("${}", group_thousands(results.annual_time_savings))}</p>
                <p>{"Value of time saved on repetitive tasks"}</p>
            </div>
            <div class="roi-card">
                <h3>{"Additional Revenue"}<span class="badge">{"Per Year"}</span></h3>
                <p class="roi-figure">{format!("${}", group_thousands(results.additional_revenue))}</p>
                <p>{format!("From {} more annual conversions (85% improvement)", results.additional_conversions)}</p>
            </div>
            <div class="roi-card total">
                <h3>{"Total Annual Value"}</h3>
                <p class="roi-figure">{format!("${}", group_thousands(results.total_annual_savings))}</p>
                <dl>
                    <dt>{"Estimated Investment:"}</dt>
                    <dd>{format!("${}", group_thousands(results.estimated_investment))}</dd>
                    <dt>{"Return on Investment:"}</dt>
                    <dd class="roi-percent">{format!("{}%", results.roi)}</dd>
                    <dt>{"Payback Period:"}</dt>
                    <dd>{results.payback.label()}</dd>
                </dl>
            </div>
        </div>
    };

    let inputs_panel = html! {
        <div class="roi-inputs">
            <h2>{ if props.compact { "Adjust Your Inputs" } else { "Your Current Situation" } }</h2>
            { for INPUTS.iter().map(render_input) }
        </div>
    };

    if props.compact {
        html! {
            <div class="roi-calculator compact">
                { result_cards }
                { inputs_panel }
            </div>
        }
    } else {
        html! {
            <div class="roi-calculator">
                { inputs_panel }
                <div>
                    <h2>{"Your Potential ROI"}</h2>
                    { result_cards }
                    <div class="roi-card report-cta">
                        <h3>{"Want a Detailed Report?"}</h3>
                        <p>{"Schedule a free AI audit and we'll create a customized ROI report for your specific business."}</p>
                        <CtaButton>{"Get My Detailed ROI Report"}</CtaButton>
                        <p class="small">{"🔒 No obligation • Free consultation"}</p>
                    </div>
                </div>
            </div>
        }
    }
}
