use crate::error::FormError;

/// Lifecycle of a simulated form submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

/// Submission state machine shared by the site's forms
///
/// `Idle -> Submitting` only once validation passes, `Submitting ->
/// Submitted` when the simulated request resolves, `Submitting -> Idle`
/// when it fails. Nothing is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSubmission {
    state: SubmissionState,
    error: Option<FormError>,
}

impl FormSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.state == SubmissionState::Submitted
    }

    /// Start submitting if `validation` passed
    pub fn begin(&mut self, validation: Result<(), FormError>) -> Result<(), FormError> {
        if self.is_submitting() {
            return Err(FormError::AlreadySubmitting);
        }

        match validation {
            Ok(()) => {
                self.state = SubmissionState::Submitting;
                self.error = None;
                Ok(())
            }
            Err(e) => {
                self.state = SubmissionState::Idle;
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// The simulated request resolved
    pub fn complete(&mut self) {
        if self.is_submitting() {
            self.state = SubmissionState::Submitted;
        }
    }

    /// The simulated request failed
    pub fn fail(&mut self, error: FormError) {
        self.state = SubmissionState::Idle;
        self.error = Some(error);
    }

    /// Back to a blank form
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
