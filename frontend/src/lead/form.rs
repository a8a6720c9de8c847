//! Lead form controller.
//!
//! One [`LeadForm`] backs both layouts of the audit form. Wide viewports show
//! every section at once and gate submission on full validation; narrow ones
//! walk through three steps whose guards only check that the step's required
//! fields are filled in. Both share the same field rules and submission path.
//!
//! ```text
//! AboutYou --advance--> CompanyDetails --advance--> Challenges --begin_submit--> Submitting --finish_submit--> Success
//!          <---back----                 <---back----
//! ```

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, warn};
use thiserror::Error;

use super::fields::{FieldId, LeadFields};
use super::payload::LeadSubmission;
use super::sink::SinkError;
use super::validation;

/// Soft limit shown under the challenges box. Display only.
pub const CHALLENGES_SOFT_LIMIT: usize = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    SinglePage,
    Wizard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    AboutYou,
    CompanyDetails,
    Challenges,
}

impl Step {
    pub fn number(self) -> u8 {
        match self {
            Step::AboutYou => 1,
            Step::CompanyDetails => 2,
            Step::Challenges => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::AboutYou => "About You",
            Step::CompanyDetails => "Company Details",
            Step::Challenges => "Tell Us More",
        }
    }

    /// Fields that must be non-empty before the step can be left forwards.
    pub fn required_fields(self) -> &'static [FieldId] {
        match self {
            Step::AboutYou => &[FieldId::FirstName, FieldId::LastName, FieldId::Email, FieldId::Phone],
            Step::CompanyDetails => &[FieldId::Company, FieldId::Industry],
            Step::Challenges => &[FieldId::Challenges],
        }
    }

    /// Every field rendered on the step, optional ones included.
    pub fn fields(self) -> &'static [FieldId] {
        match self {
            Step::AboutYou => &[FieldId::FirstName, FieldId::LastName, FieldId::Email, FieldId::Phone],
            Step::CompanyDetails => &[FieldId::Company, FieldId::Industry, FieldId::CompanySize],
            Step::Challenges => &[FieldId::Challenges],
        }
    }

    fn next(self) -> Option<Step> {
        match self {
            Step::AboutYou => Some(Step::CompanyDetails),
            Step::CompanyDetails => Some(Step::Challenges),
            Step::Challenges => None,
        }
    }

    fn previous(self) -> Option<Step> {
        match self {
            Step::AboutYou => None,
            Step::CompanyDetails => Some(Step::AboutYou),
            Step::Challenges => Some(Step::CompanyDetails),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Editing,
    Submitting,
    Success,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitRefused {
    #[error("{} field(s) need attention", .0.len())]
    Invalid(Vec<FieldId>),
    #[error("submit is only available on the last step")]
    NotOnLastStep,
    #[error("a submission is already in flight")]
    InFlight,
    #[error("the form was already submitted")]
    AlreadySubmitted,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LeadForm {
    fields: LeadFields,
    errors: BTreeMap<FieldId, &'static str>,
    touched: BTreeSet<FieldId>,
    step: Step,
    status: Status,
    layout: Layout,
}

impl LeadForm {
    pub fn new(layout: Layout) -> Self {
        Self {
            fields: LeadFields::default(),
            errors: BTreeMap::new(),
            touched: BTreeSet::new(),
            step: Step::AboutYou,
            status: Status::Editing,
            layout,
        }
    }

    pub fn fields(&self) -> &LeadFields {
        &self.fields
    }

    pub fn value(&self, field: FieldId) -> &str {
        self.fields.get(field)
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn is_submitting(&self) -> bool {
        self.status == Status::Submitting
    }

    pub fn submit_success(&self) -> bool {
        self.status == Status::Success
    }

    /// Switching layout keeps values, errors and the current step, so a
    /// resize mid-way through the wizard loses nothing.
    pub fn set_layout(&mut self, layout: Layout) {
        if self.layout != layout {
            debug!("Lead form layout {:?} -> {:?}", self.layout, layout);
            self.layout = layout;
        }
    }

    /// Input/change event. Re-validates only once the field has been blurred.
    pub fn change(&mut self, field: FieldId, value: String) {
        if self.status != Status::Editing {
            return;
        }
        self.fields.set(field, value);
        if self.touched.contains(&field) {
            self.revalidate(field);
        }
    }

    pub fn blur(&mut self, field: FieldId) {
        if self.status != Status::Editing {
            return;
        }
        self.touched.insert(field);
        self.revalidate(field);
    }

    /// The error to render next to `field`. Untouched fields never show one.
    pub fn visible_error(&self, field: FieldId) -> Option<&'static str> {
        if !self.touched.contains(&field) {
            return None;
        }
        self.errors.get(&field).copied()
    }

    pub fn is_step_valid(&self, step: Step) -> bool {
        step.required_fields()
            .iter()
            .all(|&field| !self.fields.is_blank(field))
    }

    /// Moves the wizard forward. When the guard fails the step's required
    /// fields are marked touched so their errors show, and `false` is returned.
    pub fn advance(&mut self) -> bool {
        if self.status != Status::Editing {
            return false;
        }
        let Some(next) = self.step.next() else {
            return false;
        };
        if !self.is_step_valid(self.step) {
            for &field in self.step.required_fields() {
                self.touched.insert(field);
                self.revalidate(field);
            }
            debug!("Step {} incomplete, staying put", self.step.number());
            return false;
        }
        debug!("Lead form step {} -> {}", self.step.number(), next.number());
        self.step = next;
        true
    }

    pub fn back(&mut self) {
        if self.status != Status::Editing {
            return;
        }
        if let Some(previous) = self.step.previous() {
            debug!("Lead form step {} -> {}", self.step.number(), previous.number());
            self.step = previous;
        }
    }

    /// Takes the form into `Submitting` and hands back the lead to post.
    ///
    /// The single page layout validates every field first. The wizard re-checks
    /// the guards of all three steps, since a layout switch can clear a field
    /// behind an already passed step, and jumps back to the first incomplete one.
    pub fn begin_submit(&mut self) -> Result<LeadSubmission, SubmitRefused> {
        match self.status {
            Status::Submitting => return Err(SubmitRefused::InFlight),
            Status::Success => return Err(SubmitRefused::AlreadySubmitted),
            Status::Editing => {}
        }

        match self.layout {
            Layout::SinglePage => {
                for field in FieldId::ALL {
                    self.touched.insert(field);
                    self.revalidate(field);
                }
                if !self.errors.is_empty() {
                    let invalid: Vec<FieldId> = self.errors.keys().copied().collect();
                    warn!("Lead form submit blocked by {:?}", invalid);
                    return Err(SubmitRefused::Invalid(invalid));
                }
            }
            Layout::Wizard => {
                if self.step != Step::Challenges {
                    return Err(SubmitRefused::NotOnLastStep);
                }
                let steps = [Step::AboutYou, Step::CompanyDetails, Step::Challenges];
                let blank: Vec<FieldId> = steps
                    .iter()
                    .flat_map(|step| step.required_fields().iter().copied())
                    .filter(|&field| self.fields.is_blank(field))
                    .collect();
                if !blank.is_empty() {
                    for &field in &blank {
                        self.touched.insert(field);
                        self.revalidate(field);
                    }
                    let first_incomplete = steps.into_iter().find(|&step| !self.is_step_valid(step));
                    if let Some(step) = first_incomplete {
                        self.step = step;
                    }
                    warn!("Lead form submit blocked by {:?}", blank);
                    return Err(SubmitRefused::Invalid(blank));
                }
            }
        }

        let lead = LeadSubmission::from_fields(&self.fields).ok_or_else(|| {
            self.touched.insert(FieldId::Industry);
            self.revalidate(FieldId::Industry);
            SubmitRefused::Invalid(vec![FieldId::Industry])
        })?;

        debug!("Lead form submitting");
        self.status = Status::Submitting;
        Ok(lead)
    }

    /// Completes a submission. There is no error state: a sink error is logged
    /// and the form still lands on `Success`.
    pub fn finish_submit(&mut self, outcome: Result<(), SinkError>) {
        if self.status != Status::Submitting {
            return;
        }
        if let Err(e) = outcome {
            warn!("Lead submission reported an error, treating as delivered: {}", e);
        }
        self.status = Status::Success;
    }

    pub fn challenges_char_count(&self) -> usize {
        self.fields.challenges.chars().count()
    }

    pub fn challenges_over_soft_limit(&self) -> bool {
        self.challenges_char_count() > CHALLENGES_SOFT_LIMIT
    }

    fn revalidate(&mut self, field: FieldId) {
        match validation::validate(field, self.fields.get(field)) {
            Some(message) => {
                self.errors.insert(field, message);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::validation::{INVALID_EMAIL, REQUIRED};
    use pretty_assertions::assert_eq;

    fn fill(form: &mut LeadForm, values: &[(FieldId, &str)]) {
        for &(field, value) in values {
            form.change(field, value.to_string());
        }
    }

    fn complete(form: &mut LeadForm) {
        fill(
            form,
            &[
                (FieldId::FirstName, "Sarah"),
                (FieldId::LastName, "Chen"),
                (FieldId::Email, "sarah@greenscape.co"),
                (FieldId::Phone, "555-0100"),
                (FieldId::Company, "GreenScape"),
                (FieldId::Industry, "landscaping"),
                (FieldId::Challenges, "Too much paperwork"),
            ],
        );
    }

    #[test]
    fn untouched_fields_never_show_errors() {
        let mut form = LeadForm::new(Layout::SinglePage);
        assert_eq!(form.visible_error(FieldId::FirstName), None);

        form.change(FieldId::FirstName, String::new());
        assert_eq!(form.visible_error(FieldId::FirstName), None);

        form.blur(FieldId::FirstName);
        assert_eq!(form.visible_error(FieldId::FirstName), Some(REQUIRED));

        form.change(FieldId::FirstName, "S".to_string());
        assert_eq!(form.visible_error(FieldId::FirstName), None);
    }

    #[test]
    fn email_error_clears_once_valid() {
        let mut form = LeadForm::new(Layout::SinglePage);
        form.change(FieldId::Email, "not-an-email".to_string());
        form.blur(FieldId::Email);
        assert_eq!(form.visible_error(FieldId::Email), Some(INVALID_EMAIL));

        form.change(FieldId::Email, "a@b.co".to_string());
        assert_eq!(form.visible_error(FieldId::Email), None);
    }

    #[test]
    fn wizard_step_one_needs_phone_but_not_its_format() {
        let mut form = LeadForm::new(Layout::Wizard);
        fill(
            &mut form,
            &[
                (FieldId::FirstName, "Sarah"),
                (FieldId::LastName, "Chen"),
                (FieldId::Email, "not-an-email"),
            ],
        );

        assert!(!form.is_step_valid(Step::AboutYou));
        assert!(!form.advance());
        assert_eq!(form.step(), Step::AboutYou);
        assert_eq!(form.visible_error(FieldId::Phone), Some(REQUIRED));

        form.change(FieldId::Phone, "x".to_string());
        assert!(form.is_step_valid(Step::AboutYou));
        assert!(form.advance());
        assert_eq!(form.step(), Step::CompanyDetails);
    }

    #[test]
    fn wizard_back_keeps_values() {
        let mut form = LeadForm::new(Layout::Wizard);
        complete(&mut form);
        assert!(form.advance());
        assert!(form.advance());
        assert_eq!(form.step(), Step::Challenges);

        form.back();
        form.back();
        form.back();
        assert_eq!(form.step(), Step::AboutYou);
        assert_eq!(form.value(FieldId::Company), "GreenScape");
        assert_eq!(form.value(FieldId::Challenges), "Too much paperwork");
    }

    #[test]
    fn wizard_step_two_needs_company_and_industry() {
        let mut form = LeadForm::new(Layout::Wizard);
        complete(&mut form);
        form.change(FieldId::Industry, String::new());
        assert!(form.advance());

        assert!(!form.advance());
        assert_eq!(form.step(), Step::CompanyDetails);

        form.change(FieldId::Industry, "hvac".to_string());
        assert!(form.advance());
        assert_eq!(form.step(), Step::Challenges);
        assert!(!form.advance());
    }

    #[test]
    fn wizard_submits_only_from_last_step() {
        let mut form = LeadForm::new(Layout::Wizard);
        complete(&mut form);
        assert_eq!(form.begin_submit(), Err(SubmitRefused::NotOnLastStep));

        form.advance();
        form.advance();
        form.change(FieldId::Challenges, "  ".to_string());
        assert_eq!(
            form.begin_submit(),
            Err(SubmitRefused::Invalid(vec![FieldId::Challenges]))
        );

        form.change(FieldId::Challenges, "Slow follow-up".to_string());
        let lead = form.begin_submit().unwrap();
        assert_eq!(lead.challenges, "Slow follow-up");
        assert!(form.is_submitting());
    }

    #[test]
    fn wizard_submit_rechecks_earlier_steps_after_a_resize() {
        let mut form = LeadForm::new(Layout::Wizard);
        complete(&mut form);
        assert!(form.advance());
        assert!(form.advance());

        form.set_layout(Layout::SinglePage);
        form.change(FieldId::Email, String::new());
        form.set_layout(Layout::Wizard);

        assert_eq!(
            form.begin_submit(),
            Err(SubmitRefused::Invalid(vec![FieldId::Email]))
        );
        assert_eq!(form.step(), Step::AboutYou);
        assert_eq!(form.visible_error(FieldId::Email), Some(REQUIRED));
        assert!(!form.is_submitting());

        form.change(FieldId::Email, "sarah@greenscape.co".to_string());
        assert!(form.advance());
        assert!(form.advance());
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn single_page_submit_reveals_every_error() {
        let mut form = LeadForm::new(Layout::SinglePage);
        form.change(FieldId::Email, "nope".to_string());

        let refused = form.begin_submit().unwrap_err();
        assert_eq!(
            refused,
            SubmitRefused::Invalid(vec![
                FieldId::FirstName,
                FieldId::LastName,
                FieldId::Email,
                FieldId::Phone,
                FieldId::Company,
                FieldId::Industry,
                FieldId::Challenges,
            ])
        );
        assert_eq!(form.visible_error(FieldId::Email), Some(INVALID_EMAIL));
        assert_eq!(form.visible_error(FieldId::CompanySize), None);
        assert!(!form.is_submitting() && !form.submit_success());
    }

    #[test]
    fn transport_failure_still_succeeds() {
        let mut form = LeadForm::new(Layout::SinglePage);
        complete(&mut form);

        form.begin_submit().unwrap();
        form.finish_submit(Err(SinkError::Transport("TypeError: Failed to fetch".to_string())));

        assert!(form.submit_success());
        assert!(!form.is_submitting());
    }

    #[test]
    fn duplicate_submits_are_refused() {
        let mut form = LeadForm::new(Layout::SinglePage);
        complete(&mut form);

        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(SubmitRefused::InFlight));

        form.finish_submit(Ok(()));
        assert_eq!(form.begin_submit(), Err(SubmitRefused::AlreadySubmitted));
    }

    #[test]
    fn finished_form_ignores_edits() {
        let mut form = LeadForm::new(Layout::SinglePage);
        complete(&mut form);
        form.begin_submit().unwrap();
        form.finish_submit(Ok(()));

        form.change(FieldId::FirstName, String::new());
        form.back();
        assert_eq!(form.value(FieldId::FirstName), "Sarah");
        assert!(form.submit_success());
    }

    #[test]
    fn finish_without_submit_is_ignored() {
        let mut form = LeadForm::new(Layout::Wizard);
        form.finish_submit(Ok(()));
        assert!(!form.is_submitting() && !form.submit_success());
    }

    #[test]
    fn layout_switch_keeps_progress() {
        let mut form = LeadForm::new(Layout::Wizard);
        complete(&mut form);
        form.advance();
        form.set_layout(Layout::SinglePage);

        assert_eq!(form.step(), Step::CompanyDetails);
        assert_eq!(form.value(FieldId::Email), "sarah@greenscape.co");
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn character_count_does_not_gate_submission() {
        let mut form = LeadForm::new(Layout::SinglePage);
        complete(&mut form);
        form.change(FieldId::Challenges, "é".repeat(CHALLENGES_SOFT_LIMIT + 20));

        assert_eq!(form.challenges_char_count(), CHALLENGES_SOFT_LIMIT + 20);
        assert!(form.challenges_over_soft_limit());
        assert!(form.begin_submit().is_ok());
    }
}
