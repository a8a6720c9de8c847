use gloo_net::http::Request;
use log::debug;
use thiserror::Error;

use super::payload::LeadSubmission;
use crate::config;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SinkError {
    #[error("could not encode lead: {0}")]
    Encode(String),
    #[error("form sink request failed: {0}")]
    Transport(String),
}

/// Fires one POST at the form sink. The hosted form answers cross-origin, so
/// flat entries go out in `no-cors` mode and the opaque response is dropped
/// unread. JSON posts use `cors` and fail on a non-2xx status. No retry and
/// no timeout.
pub async fn dispatch(lead: LeadSubmission) -> Result<(), SinkError> {
    let format = config::sink_format();
    let encoded = lead.encode(format, config::CONTACT_ENTRY_KEY, config::DETAILS_ENTRY_KEY)?;

    debug!("Posting lead for {} to form sink as {:?}", lead.company, format);
    let response = Request::post(config::get_form_sink_url())
        .mode(format.request_mode())
        .header("Content-Type", encoded.content_type)
        .body(encoded.body)
        .send()
        .await
        .map_err(|e| SinkError::Transport(e.to_string()))?;

    if format.response_is_readable() && !response.ok() {
        return Err(SinkError::Transport(format!(
            "form sink answered {} {}",
            response.status(),
            response.status_text()
        )));
    }
    Ok(())
}
