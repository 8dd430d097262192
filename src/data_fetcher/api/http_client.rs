//! HTTP client construction

use reqwest::Client;
use std::time::Duration;

/// Builds the shared client with a per-request timeout and a pooled
/// connection limit. One client serves every request an [`NhlClient`]
/// makes.
///
/// [`NhlClient`]: super::NhlClient
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
}

#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client_with_timeout(5).expect("Failed to create test HTTP client")
}
