use tracing::instrument;

use super::core::NhlClient;
use super::urls::{
    build_boxscore_url, build_game_landing_url, build_game_story_url, build_play_by_play_url,
};
use crate::data_fetcher::models::{
    BoxscoreResponse, GameDetails, GameStoryResponse, PlayByPlayResponse,
};
use crate::error::AppError;

fn check_game_id(game_id: i64) -> Result<(), AppError> {
    if game_id <= 0 {
        Err(AppError::invalid_game_id(game_id))
    } else {
        Ok(())
    }
}

impl NhlClient {
    /// Gamecenter landing: teams, clock, scoring and penalty summary, three stars.
    #[instrument(skip(self))]
    pub async fn game_details(&self, game_id: i64) -> Result<GameDetails, AppError> {
        check_game_id(game_id)?;
        let url = build_game_landing_url(self.api_base_url(), game_id);
        self.get_json(&url)
            .await
            .map_err(|e| e.with_context(format!("details for game {game_id}")))
    }

    #[instrument(skip(self))]
    pub async fn game_boxscore(&self, game_id: i64) -> Result<BoxscoreResponse, AppError> {
        check_game_id(game_id)?;
        let url = build_boxscore_url(self.api_base_url(), game_id);
        self.get_json(&url)
            .await
            .map_err(|e| e.with_context(format!("boxscore for game {game_id}")))
    }

    #[instrument(skip(self))]
    pub async fn game_play_by_play(&self, game_id: i64) -> Result<PlayByPlayResponse, AppError> {
        check_game_id(game_id)?;
        let url = build_play_by_play_url(self.api_base_url(), game_id);
        self.get_json(&url)
            .await
            .map_err(|e| e.with_context(format!("play-by-play for game {game_id}")))
    }

    #[instrument(skip(self))]
    pub async fn game_story(&self, game_id: i64) -> Result<GameStoryResponse, AppError> {
        check_game_id(game_id)?;
        let url = build_game_story_url(self.api_base_url(), game_id);
        self.get_json(&url)
            .await
            .map_err(|e| e.with_context(format!("story for game {game_id}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::processors::team_totals;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mock(server: &MockServer, route: &str, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_game_endpoints() {
        let server = MockServer::start().await;
        let id = 2024020750;
        mock(
            &server,
            "/gamecenter/2024020750/landing",
            json!({"id": id, "gameState": "OFF", "venue": {"default": "American Airlines Center"},
                   "threeStars": [{"star": 1, "name": {"default": "R. Hintz"}, "position": "C"}]}),
        )
        .await;
        mock(
            &server,
            "/gamecenter/2024020750/boxscore",
            json!({"id": id, "playerByGameStats": {"homeTeam": {"forwards": [
                {"hits": 2, "pim": 2, "sog": 3, "faceoffWinningPctg": 0.55},
                {"hits": 1, "pim": 0, "sog": 1, "faceoffWinningPctg": 0.45}
            ]}}}),
        )
        .await;
        mock(
            &server,
            "/gamecenter/2024020750/play-by-play",
            json!({"plays": [{"typeDescKey": "faceoff"}], "rosterSpots": []}),
        )
        .await;
        mock(
            &server,
            "/wsc/game-story/2024020750",
            json!({"id": id, "venue": {"default": "American Airlines Center"}}),
        )
        .await;
        let client = NhlClient::with_base_urls(&server.uri(), &server.uri()).unwrap();

        let details = client.game_details(id).await.unwrap();
        assert_eq!(details.three_stars[0].name.default, "R. Hintz");

        let boxscore = client.game_boxscore(id).await.unwrap();
        let totals = team_totals(&boxscore.player_by_game_stats.home_team);
        assert_eq!(totals.hits, 3);
        assert!((totals.faceoff_pct - 0.5).abs() < 1e-9);

        let pbp = client.game_play_by_play(id).await.unwrap();
        assert_eq!(pbp.plays.len(), 1);

        let story = client.game_story(id).await.unwrap();
        assert_eq!(story.venue.default, "American Airlines Center");
    }

    #[tokio::test]
    async fn test_invalid_game_id() {
        let client = NhlClient::default();
        assert!(matches!(
            client.game_boxscore(0).await,
            Err(AppError::InvalidGameId { game_id: 0 })
        ));
        assert!(client.game_story(-1).await.unwrap_err().is_validation_error());
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gamecenter/1/landing"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;
        let client = NhlClient::with_base_urls(&server.uri(), &server.uri()).unwrap();

        let err = client.game_details(1).await.unwrap_err();
        assert!(matches!(err.root_cause(), AppError::ApiMalformedJson { .. }));
    }
}
