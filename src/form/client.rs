use async_trait::async_trait;
use log::{info, warn};
use serde::Serialize;

use super::SubmitError;
use crate::http::HttpClient;

/// JSON body posted to the form endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub email: String,
    pub message: String,
}

/// Sends a submission to the form collection service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FormClient: Send + Sync {
    async fn submit(&self, submission: &Submission) -> Result<(), SubmitError>;
}

/// [`FormClient`] posting JSON over HTTPS.
#[derive(Clone, Debug)]
pub struct HttpFormClient {
    http: HttpClient,
    endpoint: String,
}

impl HttpFormClient {
    pub fn new(http: HttpClient, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl FormClient for HttpFormClient {
    #[tracing::instrument(skip(self, submission))]
    async fn submit(&self, submission: &Submission) -> Result<(), SubmitError> {
        let status = self
            .http
            .post_json(&self.endpoint, submission)
            .await
            .map_err(|e| {
                warn!("Form submission to {} failed: {}", self.endpoint, e);
                SubmitError::from(e)
            })?;

        if status.is_success() {
            info!("Form submission accepted ({})", status);
            Ok(())
        } else {
            warn!("Form endpoint rejected submission with {}", status);
            Err(SubmitError::Rejected(status))
        }
    }
}
