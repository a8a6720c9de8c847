use once_cell::sync::Lazy;
use regex::Regex;

use super::fields::{CompanySize, FieldId, Industry};

pub const REQUIRED: &str = "This field is required";
pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const SELECT_INDUSTRY: &str = "Please select an industry";
pub const INVALID_COMPANY_SIZE: &str = "Please select a valid company size";

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// Checks one field in isolation. `None` means the value is acceptable.
pub fn validate(field: FieldId, value: &str) -> Option<&'static str> {
    let value = value.trim();
    match field {
        FieldId::FirstName
        | FieldId::LastName
        | FieldId::Phone
        | FieldId::Company
        | FieldId::Challenges => value.is_empty().then_some(REQUIRED),
        FieldId::Email => {
            if value.is_empty() {
                Some(REQUIRED)
            } else if !EMAIL_PATTERN.is_match(value) {
                Some(INVALID_EMAIL)
            } else {
                None
            }
        }
        FieldId::Industry => Industry::from_value(value).is_none().then_some(SELECT_INDUSTRY),
        FieldId::CompanySize => {
            if value.is_empty() || CompanySize::from_value(value).is_some() {
                None
            } else {
                Some(INVALID_COMPANY_SIZE)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_need_non_whitespace() {
        assert_eq!(validate(FieldId::FirstName, ""), Some(REQUIRED));
        assert_eq!(validate(FieldId::LastName, "   "), Some(REQUIRED));
        assert_eq!(validate(FieldId::FirstName, "J"), None);
    }

    #[test]
    fn email_needs_user_domain_and_tld() {
        assert_eq!(validate(FieldId::Email, ""), Some(REQUIRED));
        assert_eq!(validate(FieldId::Email, "not-an-email"), Some(INVALID_EMAIL));
        assert_eq!(validate(FieldId::Email, "a@b"), Some(INVALID_EMAIL));
        assert_eq!(validate(FieldId::Email, "a b@c.co"), Some(INVALID_EMAIL));
        assert_eq!(validate(FieldId::Email, "a@@b.co"), Some(INVALID_EMAIL));
        assert_eq!(validate(FieldId::Email, "a@b.co"), None);
        assert_eq!(validate(FieldId::Email, " jane@acme.io "), None);
    }

    #[test]
    fn phone_has_no_format_check() {
        assert_eq!(validate(FieldId::Phone, "call me maybe"), None);
        assert_eq!(validate(FieldId::Phone, ""), Some(REQUIRED));
    }

    #[test]
    fn industry_must_be_a_listed_option() {
        assert_eq!(validate(FieldId::Industry, ""), Some(SELECT_INDUSTRY));
        assert_eq!(validate(FieldId::Industry, "Technology"), Some(SELECT_INDUSTRY));
        for industry in Industry::ALL {
            assert_eq!(validate(FieldId::Industry, industry.value()), None);
        }
    }

    #[test]
    fn company_size_is_optional_but_closed() {
        assert_eq!(validate(FieldId::CompanySize, ""), None);
        assert_eq!(validate(FieldId::CompanySize, "51-200"), None);
        assert_eq!(validate(FieldId::CompanySize, "1-10"), Some(INVALID_COMPANY_SIZE));
    }
}
