use crate::error::SignupError;

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Account signup form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    /// Presence first, then the confirm field, then password length
    pub fn validate(&self) -> Result<(), SignupError> {
        if self.full_name.trim().is_empty() {
            return Err(SignupError::MissingField("Full name"));
        }
        if self.email.trim().is_empty() {
            return Err(SignupError::MissingField("Email"));
        }
        if self.password != self.confirm_password {
            return Err(SignupError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(SignupError::PasswordTooShort {
                min: MIN_PASSWORD_LENGTH,
            });
        }
        Ok(())
    }
}
