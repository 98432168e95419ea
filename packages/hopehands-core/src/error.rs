use thiserror::Error;

/// Failures of the key/value medium backing the session
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage quota exceeded while writing {0}")]
    QuotaExceeded(String),
}

/// Login errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials. Please use the demo credentials provided below.")]
    InvalidCredentials,

    #[error("Login failed. Please try again.")]
    SubmissionFailed,

    #[error("Could not save your session: {0}")]
    Storage(#[from] StorageError),
}

/// Signup validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignupError {
    #[error("{0} is required.")]
    MissingField(&'static str),

    #[error("Passwords do not match.")]
    PasswordMismatch,

    #[error("Password must be at least {min} characters long.")]
    PasswordTooShort { min: usize },

    #[error("Signup failed. Please try again.")]
    SubmissionFailed,
}

/// Membership and contact form errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("A submission is already in progress")]
    AlreadySubmitting,

    #[error("Cannot move application from {from} to {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },

    #[error("Application not found")]
    UnknownApplication,

    #[error("Submission failed. Please try again.")]
    SubmissionFailed,
}
