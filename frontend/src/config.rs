use crate::lead::payload::SinkFormat;

#[cfg(debug_assertions)]
pub fn get_form_sink_url() -> &'static str {
    "http://localhost:3001/forms/lead"  // Local JSON echo endpoint while developing
}

#[cfg(not(debug_assertions))]
pub fn get_form_sink_url() -> &'static str {
    "https://docs.google.com/forms/d/e/1FAIpQLSdQ7vL2fsa-audit/formResponse"
}

/// Form entry carrying "first last | email | phone".
pub const CONTACT_ENTRY_KEY: &str = "entry.1045781291";

/// Form entry carrying the company, industry, size and challenges line.
pub const DETAILS_ENTRY_KEY: &str = "entry.2005620554";

pub fn sink_format() -> SinkFormat {
    SinkFormat::for_sink_url(get_form_sink_url())
}

pub const SCHEDULING_URL: &str = "https://calendly.com/fullstack-ai/free-ai-audit";

pub const CONTACT_EMAIL: &str = "hello@fullstackai.co";

/// Viewports narrower than this get the three-step wizard.
pub const WIZARD_BREAKPOINT_PX: f64 = 768.0;
