use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    FirstName,
    LastName,
    Email,
    Phone,
    Company,
    Industry,
    CompanySize,
    Challenges,
}

impl FieldId {
    pub const ALL: [FieldId; 8] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Company,
        FieldId::Industry,
        FieldId::CompanySize,
        FieldId::Challenges,
    ];

    /// DOM id / name attribute.
    pub fn id(self) -> &'static str {
        match self {
            FieldId::FirstName => "firstName",
            FieldId::LastName => "lastName",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::Company => "company",
            FieldId::Industry => "industry",
            FieldId::CompanySize => "companySize",
            FieldId::Challenges => "challenges",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldId::FirstName => "First Name",
            FieldId::LastName => "Last Name",
            FieldId::Email => "Email",
            FieldId::Phone => "Phone Number",
            FieldId::Company => "Company Name",
            FieldId::Industry => "Industry",
            FieldId::CompanySize => "Company Size (Optional)",
            FieldId::Challenges => "What are your biggest challenges?",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FieldId::FirstName => "John",
            FieldId::LastName => "Smith",
            FieldId::Email => "john@company.com",
            FieldId::Phone => "(555) 123-4567",
            FieldId::Company => "Acme Corp",
            FieldId::Industry => "Select industry...",
            FieldId::CompanySize => "Select size...",
            FieldId::Challenges => "Tell us about the challenges you're facing...",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, FieldId::CompanySize)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Industry {
    Plumbing,
    Landscaping,
    Roofing,
    Construction,
    Hvac,
    RealEstate,
    Corporate,
    Other,
}

impl Industry {
    pub const ALL: [Industry; 8] = [
        Industry::Plumbing,
        Industry::Landscaping,
        Industry::Roofing,
        Industry::Construction,
        Industry::Hvac,
        Industry::RealEstate,
        Industry::Corporate,
        Industry::Other,
    ];

    pub fn value(self) -> &'static str {
        match self {
            Industry::Plumbing => "plumbing",
            Industry::Landscaping => "landscaping",
            Industry::Roofing => "roofing",
            Industry::Construction => "construction",
            Industry::Hvac => "hvac",
            Industry::RealEstate => "real-estate",
            Industry::Corporate => "corporate",
            Industry::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Industry::Plumbing => "Plumbing",
            Industry::Landscaping => "Landscaping",
            Industry::Roofing => "Roofing",
            Industry::Construction => "Construction",
            Industry::Hvac => "HVAC",
            Industry::RealEstate => "Real Estate",
            Industry::Corporate => "Corporate/B2B",
            Industry::Other => "Other",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|industry| industry.value() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CompanySize {
    #[serde(rename = "1-5")]
    UpToFive,
    #[serde(rename = "6-20")]
    SixToTwenty,
    #[serde(rename = "21-50")]
    TwentyOneToFifty,
    #[serde(rename = "51-200")]
    FiftyOneToTwoHundred,
    #[serde(rename = "200+")]
    OverTwoHundred,
}

impl CompanySize {
    pub const ALL: [CompanySize; 5] = [
        CompanySize::UpToFive,
        CompanySize::SixToTwenty,
        CompanySize::TwentyOneToFifty,
        CompanySize::FiftyOneToTwoHundred,
        CompanySize::OverTwoHundred,
    ];

    pub fn value(self) -> &'static str {
        match self {
            CompanySize::UpToFive => "1-5",
            CompanySize::SixToTwenty => "6-20",
            CompanySize::TwentyOneToFifty => "21-50",
            CompanySize::FiftyOneToTwoHundred => "51-200",
            CompanySize::OverTwoHundred => "200+",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CompanySize::UpToFive => "1-5 employees",
            CompanySize::SixToTwenty => "6-20 employees",
            CompanySize::TwentyOneToFifty => "21-50 employees",
            CompanySize::FiftyOneToTwoHundred => "51-200 employees",
            CompanySize::OverTwoHundred => "200+ employees",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.value() == value)
    }
}

/// Raw values as the user typed or selected them. Select fields keep the
/// option value string; [`LeadFields::industry`] and
/// [`LeadFields::company_size`] give the typed view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub industry: String,
    pub company_size: String,
    pub challenges: String,
}

impl LeadFields {
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::FirstName => &self.first_name,
            FieldId::LastName => &self.last_name,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
            FieldId::Company => &self.company,
            FieldId::Industry => &self.industry,
            FieldId::CompanySize => &self.company_size,
            FieldId::Challenges => &self.challenges,
        }
    }

    pub fn set(&mut self, field: FieldId, value: String) {
        let slot = match field {
            FieldId::FirstName => &mut self.first_name,
            FieldId::LastName => &mut self.last_name,
            FieldId::Email => &mut self.email,
            FieldId::Phone => &mut self.phone,
            FieldId::Company => &mut self.company,
            FieldId::Industry => &mut self.industry,
            FieldId::CompanySize => &mut self.company_size,
            FieldId::Challenges => &mut self.challenges,
        };
        *slot = value;
    }

    pub fn industry(&self) -> Option<Industry> {
        Industry::from_value(&self.industry)
    }

    pub fn company_size(&self) -> Option<CompanySize> {
        CompanySize::from_value(&self.company_size)
    }

    pub fn is_blank(&self, field: FieldId) -> bool {
        self.get(field).trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_round_trips_through_the_record() {
        let mut fields = LeadFields::default();
        for field in FieldId::ALL {
            fields.set(field, field.id().to_string());
        }
        for field in FieldId::ALL {
            assert_eq!(fields.get(field), field.id());
        }
    }

    #[test]
    fn select_values_parse_to_typed_options() {
        let mut fields = LeadFields::default();
        fields.set(FieldId::Industry, "real-estate".to_string());
        fields.set(FieldId::CompanySize, "200+".to_string());

        assert_eq!(fields.industry(), Some(Industry::RealEstate));
        assert_eq!(fields.company_size(), Some(CompanySize::OverTwoHundred));

        fields.set(FieldId::Industry, "Technology".to_string());
        assert_eq!(fields.industry(), None);
    }

    #[test]
    fn only_company_size_is_optional() {
        let optional: Vec<_> = FieldId::ALL.into_iter().filter(|f| !f.is_required()).collect();
        assert_eq!(optional, vec![FieldId::CompanySize]);
    }
}
