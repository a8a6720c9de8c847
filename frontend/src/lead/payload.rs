use serde::Serialize;
use web_sys::RequestMode;

use super::fields::{CompanySize, Industry, LeadFields};
use super::sink::SinkError;

/// How a lead is laid out on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SinkFormat {
    /// Two form-encoded entries, each a " | " joined line. This is what the
    /// hosted form behind the audit page expects.
    FlatEntries,
    /// One JSON object with a key per field, posted with CORS so the status
    /// can be checked.
    Json,
}

impl SinkFormat {
    /// Hosted Google forms take flat entries. Anything else is assumed to be
    /// our own endpoint and gets JSON.
    pub fn for_sink_url(url: &str) -> Self {
        if url.contains("docs.google.com/forms") {
            SinkFormat::FlatEntries
        } else {
            SinkFormat::Json
        }
    }

    /// `application/json` is not CORS-safelisted, so a JSON post has to go
    /// out in `cors` mode or the browser rewrites it to `text/plain`.
    pub fn request_mode(self) -> RequestMode {
        match self {
            SinkFormat::FlatEntries => RequestMode::NoCors,
            SinkFormat::Json => RequestMode::Cors,
        }
    }

    /// Opaque `no-cors` responses always report status 0.
    pub fn response_is_readable(self) -> bool {
        matches!(self, SinkFormat::Json)
    }
}

/// Snapshot of a validated lead, taken when the user submits.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub industry: Industry,
    pub company_size: Option<CompanySize>,
    pub challenges: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EncodedLead {
    pub content_type: &'static str,
    pub body: String,
}

impl LeadSubmission {
    /// Trims every value. Returns `None` when no listed industry is selected.
    pub fn from_fields(fields: &LeadFields) -> Option<Self> {
        Some(Self {
            first_name: fields.first_name.trim().to_string(),
            last_name: fields.last_name.trim().to_string(),
            email: fields.email.trim().to_string(),
            phone: fields.phone.trim().to_string(),
            company: fields.company.trim().to_string(),
            industry: fields.industry()?,
            company_size: fields.company_size(),
            challenges: fields.challenges.trim().to_string(),
        })
    }

    pub fn contact_line(&self) -> String {
        format!(
            "{} {} | {} | {}",
            self.first_name, self.last_name, self.email, self.phone
        )
    }

    pub fn details_line(&self) -> String {
        let size = self
            .company_size
            .map(CompanySize::label)
            .unwrap_or("Not specified");
        format!(
            "Company: {} | Industry: {} | Size: {} | Challenges: {}",
            self.company,
            self.industry.label(),
            size,
            self.challenges
        )
    }

    pub fn form_body(&self, contact_key: &str, details_key: &str) -> String {
        format!(
            "{}={}&{}={}",
            urlencoding::encode(contact_key),
            urlencoding::encode(&self.contact_line()),
            urlencoding::encode(details_key),
            urlencoding::encode(&self.details_line()),
        )
    }

    pub fn encode(
        &self,
        format: SinkFormat,
        contact_key: &str,
        details_key: &str,
    ) -> Result<EncodedLead, SinkError> {
        match format {
            SinkFormat::FlatEntries => Ok(EncodedLead {
                content_type: "application/x-www-form-urlencoded",
                body: self.form_body(contact_key, details_key),
            }),
            SinkFormat::Json => {
                let body = serde_json::to_string(self)
                    .map_err(|e| SinkError::Encode(e.to_string()))?;
                Ok(EncodedLead {
                    content_type: "application/json",
                    body,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::fields::FieldId;
    use pretty_assertions::assert_eq;

    fn sample_fields() -> LeadFields {
        LeadFields {
            first_name: " Sarah ".to_string(),
            last_name: "Chen".to_string(),
            email: "sarah@greenscape.co".to_string(),
            phone: "(555) 123-4567".to_string(),
            company: "GreenScape Landscaping".to_string(),
            industry: "landscaping".to_string(),
            company_size: String::new(),
            challenges: "Leads & follow-ups slip".to_string(),
        }
    }

    #[test]
    fn lines_join_fields_with_pipes() {
        let lead = LeadSubmission::from_fields(&sample_fields()).unwrap();

        assert_eq!(lead.contact_line(), "Sarah Chen | sarah@greenscape.co | (555) 123-4567");
        assert_eq!(
            lead.details_line(),
            "Company: GreenScape Landscaping | Industry: Landscaping | Size: Not specified | Challenges: Leads & follow-ups slip"
        );
    }

    #[test]
    fn form_body_escapes_values() {
        let lead = LeadSubmission::from_fields(&sample_fields()).unwrap();
        let body = lead.form_body("entry.1", "entry.2");

        assert!(body.starts_with("entry.1=Sarah%20Chen%20%7C%20sarah%40greenscape.co"));
        assert!(body.contains("&entry.2=Company%3A%20GreenScape"));
        assert!(body.ends_with("Leads%20%26%20follow-ups%20slip"));
        assert_eq!(body.matches('&').count(), 1);
    }

    #[test]
    fn json_uses_option_values() {
        let mut fields = sample_fields();
        fields.set(FieldId::Industry, "real-estate".to_string());
        fields.set(FieldId::CompanySize, "21-50".to_string());
        let lead = LeadSubmission::from_fields(&fields).unwrap();

        let encoded = lead.encode(SinkFormat::Json, "a", "b").unwrap();
        let value: serde_json::Value = serde_json::from_str(&encoded.body).unwrap();

        assert_eq!(encoded.content_type, "application/json");
        assert_eq!(value["firstName"], "Sarah");
        assert_eq!(value["industry"], "real-estate");
        assert_eq!(value["companySize"], "21-50");
    }

    #[test]
    fn json_goes_out_with_cors_and_a_readable_response() {
        assert_eq!(SinkFormat::Json.request_mode(), RequestMode::Cors);
        assert!(SinkFormat::Json.response_is_readable());
        assert_eq!(SinkFormat::FlatEntries.request_mode(), RequestMode::NoCors);
        assert!(!SinkFormat::FlatEntries.response_is_readable());
    }

    #[test]
    fn format_follows_the_sink_url() {
        assert_eq!(
            SinkFormat::for_sink_url("https://docs.google.com/forms/d/e/abc/formResponse"),
            SinkFormat::FlatEntries
        );
        assert_eq!(
            SinkFormat::for_sink_url("http://localhost:3001/forms/lead"),
            SinkFormat::Json
        );
    }

    #[test]
    fn unlisted_industry_cannot_be_submitted() {
        let mut fields = sample_fields();
        fields.set(FieldId::Industry, "Finance".to_string());
        assert!(LeadSubmission::from_fields(&fields).is_none());
    }
}
