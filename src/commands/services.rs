//! Builds the services commands depend on from configuration.

use anyhow::Result;
use log::debug;

use crate::{form::HttpFormClient, http::build_http_client};

use super::config::Config;

/// Build the signup form client for the configured endpoint.
pub fn build_form_client(config: &Config) -> Result<HttpFormClient> {
    let endpoint = config.form_endpoint()?;
    debug!("Form endpoint: {}", endpoint);
    Ok(HttpFormClient::new(build_http_client()?, endpoint))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(endpoint: Option<&str>) -> Config {
        Config {
            form_endpoint: endpoint.map(String::from),
            launch_at: crate::countdown::DEFAULT_LAUNCH_AT.into(),
            user_agent: String::new(),
        }
    }

    #[test]
    fn test_build_form_client() {
        let client = build_form_client(&config(Some("https://forms.example.com/f/1"))).unwrap();
        assert_eq!(client.endpoint(), "https://forms.example.com/f/1");
    }

    #[test]
    fn test_build_form_client_without_endpoint() {
        let err = build_form_client(&config(None)).unwrap_err();
        assert!(err.to_string().contains("XBESH_FORM_ENDPOINT"));
    }
}
