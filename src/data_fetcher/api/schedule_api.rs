use tracing::{info, instrument};

use super::core::NhlClient;
use super::urls::{build_live_scoreboard_url, build_scoreboard_url, build_team_schedule_url};
use crate::data_fetcher::models::{
    FilteredScoreboardResponse, ScoreboardResponse, SortOrder, TeamInfo, TeamScheduleResponse,
};
use crate::data_fetcher::processors::{filter_games_by_date, today, validate_date};
use crate::error::AppError;

impl NhlClient {
    /// Games on `date`, ordered by start time.
    ///
    /// The date is validated before any request. The response echoes
    /// `date` even when nothing is scheduled.
    #[instrument(skip(self))]
    pub async fn schedule_by_date(
        &self,
        date: &str,
        order: SortOrder,
    ) -> Result<FilteredScoreboardResponse, AppError> {
        validate_date(date)?;
        let url = build_scoreboard_url(self.api_base_url(), date);
        let scoreboard: ScoreboardResponse = self
            .get_json(&url)
            .await
            .map_err(|e| e.with_context(format!("schedule for {date}")))?;

        let filtered = filter_games_by_date(&scoreboard, date, order);
        info!("{} game(s) scheduled on {}", filtered.games.len(), date);
        Ok(filtered)
    }

    /// Today's games in ascending start order.
    pub async fn current_schedule(&self) -> Result<FilteredScoreboardResponse, AppError> {
        self.schedule_by_date(&today(), SortOrder::Ascending).await
    }

    /// Unfiltered scoreboard around the current day, used by live updates.
    #[instrument(skip(self))]
    pub async fn live_scoreboard(&self) -> Result<ScoreboardResponse, AppError> {
        let url = build_live_scoreboard_url(self.api_base_url());
        self.get_json(&url)
            .await
            .map_err(|e| e.with_context("live scoreboard"))
    }

    /// A club's schedule for `season` (e.g. `20232024`).
    #[instrument(skip(self, team), fields(team = %team.abbreviation))]
    pub async fn team_schedule(
        &self,
        team: &TeamInfo,
        season: i32,
    ) -> Result<TeamScheduleResponse, AppError> {
        if team.abbreviation.trim().is_empty() {
            return Err(AppError::MissingTeam);
        }
        if season <= 0 {
            return Err(AppError::invalid_season(season));
        }

        let url = build_team_schedule_url(self.api_base_url(), &team.abbreviation, season);
        self.get_json(&url).await.map_err(|e| {
            e.with_context(format!("schedule for {} in {}", team.abbreviation, season))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> NhlClient {
        NhlClient::with_base_urls(&server.uri(), &server.uri()).unwrap()
    }

    fn scoreboard_body() -> serde_json::Value {
        json!({
            "focusedDate": "2024-02-01",
            "gamesByDate": [
                {"date": "2024-01-31", "games": [{"id": 9, "startTimeUTC": "2024-02-01T00:00:00Z"}]},
                {"date": "2024-02-01", "games": [
                    {"id": 2, "startTimeUTC": "2024-02-02T01:00:00Z"},
                    {"id": 1, "startTimeUTC": "2024-02-02T00:00:00Z"}
                ]}
            ]
        })
    }

    #[tokio::test]
    async fn test_schedule_by_date_filters_and_sorts() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/scoreboard/2024-02-01"))
            .respond_with(ResponseTemplate::new(200).set_body_json(scoreboard_body()))
            .expect(2)
            .mount(&server)
            .await;
        let client = client_for(&server).await;

        let ascending = client
            .schedule_by_date("2024-02-01", SortOrder::Ascending)
            .await
            .unwrap();
        assert_eq!(ascending.date, "2024-02-01");
        assert_eq!(ascending.games.iter().map(|g| g.id).collect::<Vec<_>>(), vec![1, 2]);

        let descending = client
            .schedule_by_date("2024-02-01", SortOrder::Descending)
            .await
            .unwrap();
        assert_eq!(descending.games.iter().map(|g| g.id).collect::<Vec<_>>(), vec![2, 1]);
    }

    #[tokio::test]
    async fn test_invalid_date_fails_before_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        let client = client_for(&server).await;

        let err = client
            .schedule_by_date("02/01/2024", SortOrder::Ascending)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidDate { .. }));
    }

    #[tokio::test]
    async fn test_fetch_failure_carries_context() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/scoreboard/2024-02-01"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;
        let client = client_for(&server).await;

        let err = client
            .schedule_by_date("2024-02-01", SortOrder::Ascending)
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("schedule for 2024-02-01"));
        assert!(matches!(err.root_cause(), AppError::ApiServerError { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_team_schedule_validation() {
        let server = MockServer::start().await;
        let client = client_for(&server).await;
        let mut team = client.teams().await.teams[0].clone();

        let err = client.team_schedule(&team, 0).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidSeason { season: 0 }));

        team.abbreviation.clear();
        let err = client.team_schedule(&team, 20232024).await.unwrap_err();
        assert!(matches!(err, AppError::MissingTeam));
    }

    #[tokio::test]
    async fn test_team_schedule_fetches_season() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/club-schedule-season/DAL/20232024"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "games": [{"id": 2023020001, "gameDate": "2023-10-13",
                    "homeTeam": {"abbrev": "DAL"}, "awayTeam": {"abbrev": "STL"}}]
            })))
            .mount(&server)
            .await;
        let client = client_for(&server).await;
        let dallas = client.team_by_identifier("dal").await.unwrap();

        let schedule = client.team_schedule(&dallas, 20232024).await.unwrap();
        assert_eq!(schedule.games.len(), 1);
        assert_eq!(schedule.games[0].away_team.abbreviation, "STL");
    }

    #[tokio::test]
    async fn test_live_scoreboard() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/score/now"))
            .respond_with(ResponseTemplate::new(200).set_body_json(scoreboard_body()))
            .mount(&server)
            .await;
        let client = client_for(&server).await;

        let scoreboard = client.live_scoreboard().await.unwrap();
        assert_eq!(scoreboard.games_by_date.len(), 2);
    }
}
