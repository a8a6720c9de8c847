//! ROI projections for the calculator widget.
//!
//! Everything here is pure: the calculator component keeps an
//! [`EstimatorInputs`] in state and calls [`estimate`] on every render.

use std::fmt;

/// Share of repetitive hours that automation takes over.
pub const AUTOMATION_EFFICIENCY: f64 = 0.7;

/// Conversion multiplier taken from the home improvement case study (+85%).
pub const CONVERSION_UPLIFT: f64 = 1.85;

/// Midpoint of the $15K-$40K professional tier.
pub const ESTIMATED_INVESTMENT: i64 = 27_500;

/// Ceiling for the free-entry number fields. Keeps every product in
/// [`estimate`] finite and inside `i64` after rounding.
pub const MAX_FREE_ENTRY: f64 = 1e9;

const WEEKS_PER_YEAR: f64 = 52.0;
const MONTHS_PER_YEAR: f64 = 12.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EstimatorField {
    HoursPerWeek,
    HourlyRate,
    EmployeeCount,
    LeadsPerMonth,
    LeadConversionRate,
    AverageSaleValue,
}

impl EstimatorField {
    /// Inclusive bounds of the field. Number inputs are capped at
    /// [`MAX_FREE_ENTRY`].
    pub fn bounds(self) -> (f64, f64) {
        match self {
            EstimatorField::HoursPerWeek => (1.0, 60.0),
            EstimatorField::EmployeeCount => (1.0, 50.0),
            EstimatorField::LeadConversionRate => (1.0, 50.0),
            EstimatorField::HourlyRate
            | EstimatorField::LeadsPerMonth
            | EstimatorField::AverageSaleValue => (0.0, MAX_FREE_ENTRY),
        }
    }

    pub fn is_slider(self) -> bool {
        matches!(
            self,
            EstimatorField::HoursPerWeek
                | EstimatorField::EmployeeCount
                | EstimatorField::LeadConversionRate
        )
    }

    pub fn id(self) -> &'static str {
        match self {
            EstimatorField::HoursPerWeek => "hoursPerWeek",
            EstimatorField::HourlyRate => "hourlyRate",
            EstimatorField::EmployeeCount => "employeeCount",
            EstimatorField::LeadsPerMonth => "leadsPerMonth",
            EstimatorField::LeadConversionRate => "leadConversionRate",
            EstimatorField::AverageSaleValue => "averageSaleValue",
        }
    }

    pub fn clamp(self, value: f64) -> f64 {
        let (min, max) = self.bounds();
        if !value.is_finite() {
            return min;
        }
        value.max(min).min(max)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EstimatorInputs {
    pub hours_per_week: f64,
    pub hourly_rate: f64,
    pub employee_count: f64,
    pub leads_per_month: f64,
    pub lead_conversion_rate: f64,
    pub average_sale_value: f64,
}

impl Default for EstimatorInputs {
    fn default() -> Self {
        Self {
            hours_per_week: 20.0,
            hourly_rate: 50.0,
            employee_count: 5.0,
            leads_per_month: 100.0,
            lead_conversion_rate: 10.0,
            average_sale_value: 5000.0,
        }
    }
}

impl EstimatorInputs {
    pub fn get(&self, field: EstimatorField) -> f64 {
        match field {
            EstimatorField::HoursPerWeek => self.hours_per_week,
            EstimatorField::HourlyRate => self.hourly_rate,
            EstimatorField::EmployeeCount => self.employee_count,
            EstimatorField::LeadsPerMonth => self.leads_per_month,
            EstimatorField::LeadConversionRate => self.lead_conversion_rate,
            EstimatorField::AverageSaleValue => self.average_sale_value,
        }
    }

    /// Writes `value` clamped into the field's domain.
    pub fn set(&mut self, field: EstimatorField, value: f64) {
        let value = field.clamp(value);
        let slot = match field {
            EstimatorField::HoursPerWeek => &mut self.hours_per_week,
            EstimatorField::HourlyRate => &mut self.hourly_rate,
            EstimatorField::EmployeeCount => &mut self.employee_count,
            EstimatorField::LeadsPerMonth => &mut self.leads_per_month,
            EstimatorField::LeadConversionRate => &mut self.lead_conversion_rate,
            EstimatorField::AverageSaleValue => &mut self.average_sale_value,
        };
        *slot = value;
    }

    pub fn set_from_text(&mut self, field: EstimatorField, text: &str) {
        self.set(field, parse_number(text));
    }
}

/// Payback period. `Never` stands in for a zero (or negative) annual value,
/// where the division would otherwise produce infinity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Payback {
    Months(f64),
    Never,
}

impl Payback {
    /// "0.4 months", or "N/A" without a unit.
    pub fn label(&self) -> String {
        match self {
            Payback::Months(_) => format!("{} months", self),
            Payback::Never => self.to_string(),
        }
    }
}

impl fmt::Display for Payback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payback::Months(months) => write!(f, "{:.1}", months),
            Payback::Never => f.write_str("N/A"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EstimatorResults {
    /// Hours per week, rounded to one decimal.
    pub weekly_time_savings: f64,
    pub annual_time_savings: i64,
    /// Annualized.
    pub additional_conversions: i64,
    pub additional_revenue: i64,
    pub total_annual_savings: i64,
    /// Percent.
    pub roi: i64,
    pub payback: Payback,
    pub estimated_investment: i64,
}

impl EstimatorResults {
    pub fn weekly_time_savings_label(&self) -> String {
        format!("{:.1}", self.weekly_time_savings)
    }
}

pub fn estimate(inputs: &EstimatorInputs) -> EstimatorResults {
    let weekly_time_cost = inputs.hours_per_week * inputs.hourly_rate * inputs.employee_count;
    let annual_time_savings = weekly_time_cost * WEEKS_PER_YEAR;
    let time_automated = inputs.hours_per_week * AUTOMATION_EFFICIENCY;

    let current_conversions = inputs.leads_per_month * inputs.lead_conversion_rate / 100.0;
    let improved_conversions = current_conversions * CONVERSION_UPLIFT;
    let monthly_additional_conversions = improved_conversions - current_conversions;
    let additional_revenue =
        monthly_additional_conversions * inputs.average_sale_value * MONTHS_PER_YEAR;

    let total_annual_savings = annual_time_savings + additional_revenue;

    let investment = ESTIMATED_INVESTMENT as f64;
    let roi = (total_annual_savings - investment) / investment * 100.0;
    let payback = if total_annual_savings > 0.0 && total_annual_savings.is_finite() {
        Payback::Months(investment / (total_annual_savings / MONTHS_PER_YEAR))
    } else {
        Payback::Never
    };

    EstimatorResults {
        weekly_time_savings: round_to_tenth(time_automated),
        annual_time_savings: round_half_up(annual_time_savings),
        additional_conversions: round_half_up(monthly_additional_conversions * MONTHS_PER_YEAR),
        additional_revenue: round_half_up(additional_revenue),
        total_annual_savings: round_half_up(total_annual_savings),
        roi: round_half_up(roi),
        payback,
        estimated_investment: ESTIMATED_INVESTMENT,
    }
}

/// Rounds halves toward positive infinity, so -2.5 becomes -2.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Reads the leading numeric part of `text` the way a browser's `parseFloat`
/// does ("12abc" is 12). Anything without a numeric prefix, or that is not
/// finite, reads as 0.
pub fn parse_number(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return 0.0;
    }
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    match text[..end].parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// "770000" -> "770,000".
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn default_inputs_match_published_example() {
        let results = estimate(&EstimatorInputs::default());

        assert_eq!(results.weekly_time_savings_label(), "14.0");
        assert_eq!(results.annual_time_savings, 260_000);
        assert_eq!(results.additional_conversions, 102);
        assert_eq!(results.additional_revenue, 510_000);
        assert_eq!(results.total_annual_savings, 770_000);
        assert_eq!(results.estimated_investment, 27_500);
        assert_eq!(results.roi, 2700);
        assert_eq!(results.payback.to_string(), "0.4");
    }

    #[test]
    fn estimate_is_idempotent() {
        let inputs = EstimatorInputs {
            hours_per_week: 37.0,
            hourly_rate: 42.5,
            employee_count: 12.0,
            leads_per_month: 340.0,
            lead_conversion_rate: 7.0,
            average_sale_value: 1299.0,
        };
        assert_eq!(estimate(&inputs), estimate(&inputs));
    }

    #[test]
    fn zero_total_has_no_payback() {
        let inputs = EstimatorInputs {
            hourly_rate: 0.0,
            leads_per_month: 0.0,
            ..EstimatorInputs::default()
        };
        let results = estimate(&inputs);

        assert_eq!(results.total_annual_savings, 0);
        assert_eq!(results.payback, Payback::Never);
        assert_eq!(results.payback.to_string(), "N/A");
        assert_eq!(results.roi, -100);
    }

    #[test]
    fn payback_label_only_carries_a_unit_for_months() {
        assert_eq!(estimate(&EstimatorInputs::default()).payback.label(), "0.4 months");
        assert_eq!(Payback::Never.label(), "N/A");
    }

    #[test]
    fn huge_entries_are_capped_and_stay_consistent() {
        let mut inputs = EstimatorInputs::default();
        inputs.set_from_text(EstimatorField::LeadsPerMonth, "1e308");
        assert_eq!(inputs.leads_per_month, MAX_FREE_ENTRY);

        let results = estimate(&inputs);
        assert_eq!(results.annual_time_savings, 260_000);
        assert!(results.additional_revenue > 0);
        assert!(results.total_annual_savings > results.annual_time_savings);
        assert!(results.roi > 0);
        assert!(matches!(results.payback, Payback::Months(m) if m.is_finite() && m > 0.0));
    }

    #[test]
    fn maximum_inputs_give_finite_results() {
        let mut inputs = EstimatorInputs::default();
        for field in [
            EstimatorField::HoursPerWeek,
            EstimatorField::HourlyRate,
            EstimatorField::EmployeeCount,
            EstimatorField::LeadsPerMonth,
            EstimatorField::LeadConversionRate,
            EstimatorField::AverageSaleValue,
        ] {
            inputs.set_from_text(field, "1e308");
        }
        assert_eq!(inputs.hourly_rate, MAX_FREE_ENTRY);
        assert_eq!(inputs.average_sale_value, MAX_FREE_ENTRY);

        let results = estimate(&inputs);
        assert!(results.annual_time_savings > 0 && results.annual_time_savings < i64::MAX);
        assert!(results.additional_revenue > 0 && results.additional_revenue < i64::MAX);
        assert!(results.total_annual_savings >= results.additional_revenue);
        assert!(results.roi > 0 && results.roi < i64::MAX);
        assert!(matches!(results.payback, Payback::Months(m) if m.is_finite() && m > 0.0));
    }

    #[test]
    fn negative_halves_round_up() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.51), -3);
    }

    #[test]
    fn set_clamps_into_domain() {
        let mut inputs = EstimatorInputs::default();
        inputs.set(EstimatorField::HoursPerWeek, 90.0);
        inputs.set(EstimatorField::EmployeeCount, 0.0);
        inputs.set(EstimatorField::LeadConversionRate, 51.0);
        inputs.set(EstimatorField::HourlyRate, -12.0);

        assert_eq!(inputs.hours_per_week, 60.0);
        assert_eq!(inputs.employee_count, 1.0);
        assert_eq!(inputs.lead_conversion_rate, 50.0);
        assert_eq!(inputs.hourly_rate, 0.0);
    }

    #[test]
    fn non_numeric_text_reads_as_zero() {
        let mut inputs = EstimatorInputs::default();
        inputs.set_from_text(EstimatorField::AverageSaleValue, "lots");
        assert_eq!(inputs.average_sale_value, 0.0);

        let results = estimate(&inputs);
        assert_eq!(results.additional_revenue, 0);
        assert_eq!(results.total_annual_savings, 260_000);

        inputs.set_from_text(EstimatorField::HourlyRate, "");
        assert_eq!(inputs.hourly_rate, 0.0);
        assert_eq!(estimate(&inputs).payback, Payback::Never);
    }

    #[test]
    fn parse_number_takes_numeric_prefix() {
        assert_eq!(parse_number("12abc"), 12.0);
        assert_eq!(parse_number("  3.75"), 3.75);
        assert_eq!(parse_number(".5"), 0.5);
        assert_eq!(parse_number("7."), 7.0);
        assert_eq!(parse_number("-4"), -4.0);
        assert_eq!(parse_number("1e3x"), 1000.0);
        assert_eq!(parse_number("2e"), 2.0);
        assert_eq!(parse_number("."), 0.0);
        assert_eq!(parse_number("abc"), 0.0);
        assert_eq!(parse_number("1e999"), 0.0);
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(27_500), "27,500");
        assert_eq!(group_thousands(770_000), "770,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(-27_500), "-27,500");
    }

    proptest! {
        #[test]
        fn annual_time_savings_is_weekly_cost_times_52(
            hours in 1u32..=60,
            rate in 0u32..=500,
            employees in 1u32..=50,
        ) {
            let inputs = EstimatorInputs {
                hours_per_week: hours as f64,
                hourly_rate: rate as f64,
                employee_count: employees as f64,
                ..EstimatorInputs::default()
            };
            let expected = hours as i64 * rate as i64 * employees as i64 * 52;
            prop_assert_eq!(estimate(&inputs).annual_time_savings, expected);
        }

        #[test]
        fn weekly_savings_is_seventy_percent_to_one_decimal(hours in 1u32..=60) {
            let inputs = EstimatorInputs {
                hours_per_week: hours as f64,
                ..EstimatorInputs::default()
            };
            let expected = format!("{:.1}", hours as f64 * 0.7);
            prop_assert_eq!(estimate(&inputs).weekly_time_savings_label(), expected);
        }

        #[test]
        fn payback_is_always_displayable(
            hours in 1u32..=60,
            rate in 0u32..=200,
            leads in 0u32..=1000,
            sale in 0u32..=20_000,
        ) {
            let inputs = EstimatorInputs {
                hours_per_week: hours as f64,
                hourly_rate: rate as f64,
                leads_per_month: leads as f64,
                average_sale_value: sale as f64,
                ..EstimatorInputs::default()
            };
            let label = estimate(&inputs).payback.to_string();
            prop_assert!(label != "inf" && label != "NaN");
        }
    }
}
