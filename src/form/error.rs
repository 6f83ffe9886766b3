use reqwest::StatusCode;
use thiserror::Error;

/// Why a signup attempt did not go through.
///
/// `Display` yields the message shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Rejected locally, no request was made.
    #[error("Please enter a valid email address.")]
    InvalidEmail,

    /// The endpoint answered with a non-2xx status.
    #[error("Something went wrong. Please try again.")]
    Rejected(StatusCode),

    /// The request never got an answer.
    #[error("Network error. Please try again.")]
    Network(String),
}

impl SubmitError {
    /// Whether the failure happened before anything was sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, SubmitError::InvalidEmail)
    }
}

impl From<reqwest::Error> for SubmitError {
    fn from(error: reqwest::Error) -> Self {
        SubmitError::Network(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            SubmitError::InvalidEmail.to_string(),
            "Please enter a valid email address."
        );
        assert_eq!(
            SubmitError::Rejected(StatusCode::BAD_REQUEST).to_string(),
            "Something went wrong. Please try again."
        );
        assert_eq!(
            SubmitError::Network("connection refused".into()).to_string(),
            "Network error. Please try again."
        );
    }

    #[test]
    fn test_is_validation() {
        assert!(SubmitError::InvalidEmail.is_validation());
        assert!(!SubmitError::Rejected(StatusCode::INTERNAL_SERVER_ERROR).is_validation());
    }
}
