use serde::{Deserialize, Serialize};

use crate::error::FormError;

use super::blank_fields;

/// Membership application form. Every field is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipApplication {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub reason: String,
    /// File name of the selected photo. The file itself is never uploaded.
    pub photo: Option<String>,
}

impl MembershipApplication {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = blank_fields(&[
            ("Full Name", self.full_name.as_str()),
            ("Email Address", self.email.as_str()),
            ("Phone Number", self.phone.as_str()),
            ("Date of Birth", self.date_of_birth.as_str()),
            ("Address", self.address.as_str()),
            ("City", self.city.as_str()),
            ("State", self.state.as_str()),
            ("ZIP Code", self.zip_code.as_str()),
            ("Country", self.country.as_str()),
            ("Reason for Joining", self.reason.as_str()),
        ]);

        if self.photo.as_deref().map_or(true, |name| name.trim().is_empty()) {
            missing.push("Photo");
        }
        missing
    }

    pub fn validate(&self) -> Result<(), FormError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(FormError::MissingFields(missing))
        }
    }
}

/// Review status of a membership
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    None,
    Pending,
    Approved,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::None => "none",
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Approved => "approved",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::None => "Not Applied",
            ApplicationStatus::Pending => "Pending Approval",
            ApplicationStatus::Approved => "Approved",
        }
    }

    /// `None -> Pending`
    pub fn submit(self) -> Result<Self, FormError> {
        match self {
            ApplicationStatus::None => Ok(ApplicationStatus::Pending),
            other => Err(FormError::InvalidTransition {
                from: other.as_str(),
                to: ApplicationStatus::Pending.as_str(),
            }),
        }
    }

    /// `Pending -> Approved`
    pub fn approve(self) -> Result<Self, FormError> {
        match self {
            ApplicationStatus::Pending => Ok(ApplicationStatus::Approved),
            other => Err(FormError::InvalidTransition {
                from: other.as_str(),
                to: ApplicationStatus::Approved.as_str(),
            }),
        }
    }
}
