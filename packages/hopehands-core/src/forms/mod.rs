//! Site forms: validation and the simulated submission lifecycle

mod applications;
mod contact;
mod membership;
mod signup;
mod submission;

pub use applications::{ApplicationQueue, ApplicationRecord};
pub use contact::ContactMessage;
pub use membership::{ApplicationStatus, MembershipApplication};
pub use signup::{SignupForm, MIN_PASSWORD_LENGTH};
pub use submission::{FormSubmission, SubmissionState};

/// Names of the fields in `fields` whose value is blank
pub(crate) fn blank_fields(fields: &[(&'static str, &str)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect()
}
