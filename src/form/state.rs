use log::debug;

use super::{FormClient, Submission, SubmitError, is_valid_email};

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
    Error(SubmitError),
}

/// Signup form state owned by the page that renders it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub message: String,
    status: FormStatus,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// Validate and move to `Submitting`.
    ///
    /// Returns the payload to send, or `None` when nothing should be sent:
    /// either the email is invalid (status becomes `Error(InvalidEmail)`) or
    /// a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if self.status == FormStatus::Submitting {
            debug!("Ignoring submit while a request is in flight");
            return None;
        }

        let email = self.email.trim();
        if !is_valid_email(email) {
            self.status = FormStatus::Error(SubmitError::InvalidEmail);
            return None;
        }

        self.status = FormStatus::Submitting;
        Some(Submission {
            email: email.to_string(),
            message: self.message.clone(),
        })
    }

    /// Record the outcome of the request started by [`begin_submit`](Self::begin_submit).
    ///
    /// Success clears the inputs; failure keeps them so the user can resubmit.
    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) {
        match result {
            Ok(()) => {
                self.email.clear();
                self.message.clear();
                self.status = FormStatus::Submitted;
            }
            Err(e) => self.status = FormStatus::Error(e),
        }
    }

    /// Validate, send once through `client` and record the outcome.
    pub async fn submit<C: FormClient + ?Sized>(&mut self, client: &C) -> &FormStatus {
        if let Some(submission) = self.begin_submit() {
            let result = client.submit(&submission).await;
            self.finish_submit(result);
        }
        &self.status
    }

    /// Back to `Idle`, ready for another submission.
    pub fn reset(&mut self) {
        self.status = FormStatus::Idle;
    }
}
