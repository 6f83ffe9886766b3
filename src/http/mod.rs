//! HTTP client module.

mod client;

pub use client::{HttpClient, USER_AGENT, build_http_client};
