//! Lead contact details captured from the visitor.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Contact details submitted through the lead form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadData {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LeadData {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            company: None,
            phone: None,
            message: None,
        }
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Trims every field and drops blank optional ones.
    pub fn normalized(self) -> Self {
        fn optional(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            company: optional(self.company),
            phone: optional(self.phone),
            message: optional(self.message),
        }
    }

    /// Requires a name and an email with a local part and a dotted domain.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }

        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        match email.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.') =>
            {
                Ok(())
            }
            Some(_) => Err(ValidationError::invalid_format("email", "malformed address")),
            None => Err(ValidationError::invalid_format("email", "missing @ symbol")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_lead_passes() {
        let lead = LeadData::new("Ada Lovelace", "ada@example.com").with_company("Analytical Engines");
        assert!(lead.validate().is_ok());
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = LeadData::new("  ", "ada@example.com").validate().unwrap_err();
        assert_eq!(err, ValidationError::empty_field("name"));
    }

    #[test]
    fn email_without_at_is_rejected() {
        let err = LeadData::new("Ada", "ada.example.com").validate().unwrap_err();
        assert_eq!(err.field(), "email");
    }

    #[test]
    fn email_without_domain_dot_is_rejected() {
        assert!(LeadData::new("Ada", "ada@localhost").validate().is_err());
        assert!(LeadData::new("Ada", "@example.com").validate().is_err());
    }

    #[test]
    fn normalized_trims_and_drops_blank_optionals() {
        let mut lead = LeadData::new(" Ada ", " ada@example.com ");
        lead.phone = Some("   ".to_string());
        lead.message = Some(" Hello ".to_string());

        let lead = lead.normalized();
        assert_eq!(lead.name, "Ada");
        assert_eq!(lead.email, "ada@example.com");
        assert_eq!(lead.phone, None);
        assert_eq!(lead.message.as_deref(), Some("Hello"));
    }

    #[test]
    fn optional_fields_are_omitted_from_json() {
        let json = serde_json::to_value(LeadData::new("Ada", "ada@example.com")).unwrap();
        assert!(json.get("company").is_none());
    }
}
