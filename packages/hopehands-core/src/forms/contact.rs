use crate::error::FormError;

use super::blank_fields;

/// Message sent through the contact page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Subject is optional
    pub fn validate(&self) -> Result<(), FormError> {
        let missing = blank_fields(&[
            ("Name", self.name.as_str()),
            ("Email", self.email.as_str()),
            ("Message", self.message.as_str()),
        ]);

        if missing.is_empty() {
            Ok(())
        } else {
            Err(FormError::MissingFields(missing))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_optional() {
        let message = ContactMessage {
            name: "Sam".into(),
            email: "sam@example.org".into(),
            subject: String::new(),
            message: "Hello".into(),
        };
        assert!(message.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_listed() {
        let message = ContactMessage {
            name: "Sam".into(),
            ..Default::default()
        };
        assert_eq!(
            message.validate(),
            Err(FormError::MissingFields(vec!["Email", "Message"]))
        );
        assert_eq!(
            message.validate().unwrap_err().to_string(),
            "Please fill in: Email, Message"
        );
    }
}
