use tracing::instrument;

use super::core::NhlClient;
use super::urls::{build_current_standings_url, build_standings_url};
use crate::data_fetcher::models::StandingsResponse;
use crate::data_fetcher::processors::validate_date;
use crate::error::AppError;

impl NhlClient {
    /// League table as of today, in upstream order.
    #[instrument(skip(self))]
    pub async fn standings(&self) -> Result<StandingsResponse, AppError> {
        let url = build_current_standings_url(self.api_base_url());
        self.get_json(&url)
            .await
            .map_err(|e| e.with_context("current standings"))
    }

    /// League table as it stood on `date`.
    #[instrument(skip(self))]
    pub async fn standings_by_date(&self, date: &str) -> Result<StandingsResponse, AppError> {
        validate_date(date)?;
        let url = build_standings_url(self.api_base_url(), date);
        self.get_json(&url)
            .await
            .map_err(|e| e.with_context(format!("standings on {date}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::processors::rank_league;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn team(abbrev: &str, points: i32, regulation_wins: i32) -> serde_json::Value {
        json!({"teamName": {"default": abbrev}, "teamAbbrev": {"default": abbrev},
               "points": points, "regulationWins": regulation_wins,
               "conferenceName": "Western", "divisionName": "Central"})
    }

    #[tokio::test]
    async fn test_current_standings_rank() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/standings/now"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "standings": [team("WPG", 80, 30), team("DAL", 80, 32), team("COL", 90, 30)]
            })))
            .mount(&server)
            .await;
        let client = NhlClient::with_base_urls(&server.uri(), &server.uri()).unwrap();

        let standings = client.standings().await.unwrap();
        let ranked: Vec<String> = rank_league(&standings.standings)
            .into_iter()
            .map(|t| t.team_abbrev.default)
            .collect();
        assert_eq!(ranked, vec!["COL", "DAL", "WPG"]);
    }

    #[tokio::test]
    async fn test_standings_by_date() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/standings/2024-01-15"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"standings": []})))
            .mount(&server)
            .await;
        let client = NhlClient::with_base_urls(&server.uri(), &server.uri()).unwrap();

        assert!(client.standings_by_date("2024-01-15").await.unwrap().standings.is_empty());
        assert!(matches!(
            client.standings_by_date("15.1.2024").await,
            Err(AppError::InvalidDate { .. })
        ));
    }

    #[tokio::test]
    async fn test_not_found_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/standings/1900-01-01"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        let client = NhlClient::with_base_urls(&server.uri(), &server.uri()).unwrap();

        let err = client.standings_by_date("1900-01-01").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
