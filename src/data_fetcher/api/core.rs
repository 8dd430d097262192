use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, instrument};

use super::fetch_utils::fetch;
use super::http_client::create_http_client_with_timeout;
use crate::config::Config;
use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_HTTP_TIMEOUT_SECONDS, DEFAULT_STATS_BASE_URL};
use crate::data_fetcher::cache::TeamDirectory;
use crate::data_fetcher::models::TeamsResponse;
use crate::error::AppError;

/// Typed client for the NHL web API and stats REST API.
///
/// Each call is one GET with the configured timeout. The team directory is
/// the only state kept between calls; it belongs to this client, so two
/// clients never share it.
#[derive(Debug)]
pub struct NhlClient {
    http: Client,
    api_base_url: String,
    stats_base_url: String,
    teams: TeamDirectory,
}

impl NhlClient {
    /// Client against the endpoints and timeout in `config`.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Self::from_parts(
            http,
            &config.api_base_url,
            &config.stats_base_url,
        ))
    }

    /// Client against explicit base URLs with the default timeout.
    pub fn with_base_urls(api_base_url: &str, stats_base_url: &str) -> Result<Self, AppError> {
        let http = create_http_client_with_timeout(DEFAULT_HTTP_TIMEOUT_SECONDS)?;
        Ok(Self::from_parts(http, api_base_url, stats_base_url))
    }

    fn from_parts(http: Client, api_base_url: &str, stats_base_url: &str) -> Self {
        Self {
            http,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            stats_base_url: stats_base_url.trim_end_matches('/').to_string(),
            teams: TeamDirectory::new(),
        }
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn stats_base_url(&self) -> &str {
        &self.stats_base_url
    }

    pub(super) async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        fetch(&self.http, url).await
    }

    /// All known teams. Built on first call; later calls return the same
    /// `Arc`.
    #[instrument(skip(self))]
    pub async fn teams(&self) -> Arc<TeamsResponse> {
        let teams = self.teams.get().await;
        debug!("Team directory holds {} teams", teams.teams.len());
        teams
    }
}

impl Default for NhlClient {
    fn default() -> Self {
        let http = create_http_client_with_timeout(DEFAULT_HTTP_TIMEOUT_SECONDS)
            .unwrap_or_else(|_| Client::new());
        Self::from_parts(http, DEFAULT_API_BASE_URL, DEFAULT_STATS_BASE_URL)
    }
}
