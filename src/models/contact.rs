use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Simulated round trip of a contact submission
pub const SUBMIT_DELAY_MS: u64 = 1500;
/// How long an inline form message stays visible
pub const MESSAGE_DISMISS_MS: u64 = 5000;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Contact form fields, named as in the markup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in all required fields.")]
    MissingRequired,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

impl ContactForm {
    /// Required fields first, then the email shape
    pub fn validate(&self) -> Result<(), ContactError> {
        let required = [&self.first_name, &self.last_name, &self.email, &self.message];
        if required.iter().any(|field| field.is_empty()) {
            return Err(ContactError::MissingRequired);
        }
        if !is_valid_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    pub fn success_message(&self) -> String {
        format!(
            "Thank you! Your message has been received. We'll contact you at {} soon.",
            self.email
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

/// Inline message under the contact form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessage {
    pub text: String,
    pub kind: MessageKind,
}

impl FormMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Success,
        }
    }

    pub fn error(err: &ContactError) -> Self {
        Self {
            text: err.to_string(),
            kind: MessageKind::Error,
        }
    }

    pub fn class(&self) -> String {
        format!("form-message {}", self.kind.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            first_name: "Thandi".into(),
            last_name: "Nkosi".into(),
            email: "thandi@example.co.za".into(),
            phone: String::new(),
            service: "solar".into(),
            message: "Quote for a 5kW inverter".into(),
        }
    }

    #[test]
    fn test_complete_form_is_valid() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn test_missing_first_name_is_rejected() {
        let form = ContactForm {
            first_name: String::new(),
            ..filled()
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err, ContactError::MissingRequired);
        assert_eq!(FormMessage::error(&err).kind, MessageKind::Error);
    }

    #[test]
    fn test_each_required_field() {
        let blanks = [
            ContactForm { last_name: String::new(), ..filled() },
            ContactForm { email: String::new(), ..filled() },
            ContactForm { message: String::new(), ..filled() },
        ];
        for form in blanks {
            assert_eq!(form.validate(), Err(ContactError::MissingRequired));
        }
    }

    #[test]
    fn test_optional_fields_may_be_empty() {
        let form = ContactForm {
            phone: String::new(),
            service: String::new(),
            ..filled()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_bad_email_is_rejected() {
        let form = ContactForm {
            email: "bad@".into(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(ContactError::InvalidEmail));
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("space @example.com"));
        assert!(!is_valid_email("user@localhost"));
    }

    #[test]
    fn test_messages() {
        let form = filled();
        assert_eq!(
            form.success_message(),
            "Thank you! Your message has been received. We'll contact you at thandi@example.co.za soon."
        );
        assert_eq!(
            FormMessage::error(&ContactError::InvalidEmail).text,
            "Please enter a valid email address."
        );
        assert_eq!(FormMessage::success("ok").class(), "form-message success");
    }

    #[test]
    fn test_serializes_with_markup_names() {
        let json = serde_json::to_value(filled()).unwrap();
        assert!(json.get("firstName").is_some());
        assert!(json.get("lastName").is_some());
    }
}
