use futures::future::join_all;
use tracing::{info, instrument, warn};

use super::core::NhlClient;
use super::urls::build_roster_url;
use crate::data_fetcher::models::{PlayerSearchResult, RosterResponse, TeamInfo};
use crate::error::AppError;

impl NhlClient {
    /// Resolves a team by numeric id, abbreviation, tricode or full name.
    /// Name matching ignores case.
    #[instrument(skip(self))]
    pub async fn team_by_identifier(&self, identifier: &str) -> Result<TeamInfo, AppError> {
        let identifier = identifier.trim();
        let teams = self.teams().await;

        if let Ok(id) = identifier.parse::<i64>()
            && let Some(team) = teams.teams.iter().find(|team| team.id == id)
        {
            return Ok(team.clone());
        }

        teams
            .teams
            .iter()
            .find(|team| team.matches_name(identifier))
            .cloned()
            .ok_or_else(|| AppError::team_not_found(identifier))
    }

    /// Current roster of the team named by `identifier`.
    #[instrument(skip(self))]
    pub async fn team_roster(&self, identifier: &str) -> Result<RosterResponse, AppError> {
        let team = self.team_by_identifier(identifier).await?;
        self.roster_for(&team).await
    }

    async fn roster_for(&self, team: &TeamInfo) -> Result<RosterResponse, AppError> {
        let url = build_roster_url(self.api_base_url(), &team.abbreviation);
        self.get_json(&url)
            .await
            .map_err(|e| e.with_context(format!("roster for {}", team.abbreviation)))
    }

    /// Searches every current roster for players whose first, last or full
    /// name contains `name`, ignoring case.
    ///
    /// Rosters are fetched concurrently. A team whose roster cannot be
    /// fetched is skipped with a warning. Results follow directory order,
    /// and within a team forwards come first, then defensemen, then goalies.
    #[instrument(skip(self))]
    pub async fn search_player(&self, name: &str) -> Result<Vec<PlayerSearchResult>, AppError> {
        let query = name.trim().to_lowercase();
        if query.is_empty() {
            return Err(AppError::EmptySearchName);
        }

        let teams = self.teams().await;
        let rosters = join_all(teams.teams.iter().map(|team| self.roster_for(team))).await;

        let mut results = Vec::new();
        for (team, roster) in teams.teams.iter().zip(rosters) {
            let roster = match roster {
                Ok(roster) => roster,
                Err(e) => {
                    warn!("Skipping {} in player search: {}", team.abbreviation, e);
                    continue;
                }
            };

            results.extend(
                roster
                    .forwards
                    .iter()
                    .chain(roster.defensemen.iter())
                    .chain(roster.goalies.iter())
                    .filter(|player| player.matches_query(&query))
                    .map(|player| PlayerSearchResult::from_roster_entry(player, team)),
            );
        }

        info!("Player search for '{}' matched {} player(s)", name, results.len());
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, path_regex};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn roster(forwards: &[(i64, &str, &str)], goalies: &[(i64, &str, &str)]) -> serde_json::Value {
        let entry = |&(id, first, last): &(i64, &str, &str), pos: &str| {
            json!({"id": id, "firstName": {"default": first}, "lastName": {"default": last},
                   "positionCode": pos, "sweaterNumber": 1})
        };
        json!({
            "forwards": forwards.iter().map(|p| entry(p, "C")).collect::<Vec<_>>(),
            "defensemen": [],
            "goalies": goalies.iter().map(|p| entry(p, "G")).collect::<Vec<_>>(),
        })
    }

    #[tokio::test]
    async fn test_team_lookup_forms() {
        let client = NhlClient::default();
        assert_eq!(client.team_by_identifier("25").await.unwrap().abbreviation, "DAL");
        assert_eq!(client.team_by_identifier("dal").await.unwrap().id, 25);
        assert_eq!(client.team_by_identifier("Dallas Stars").await.unwrap().id, 25);
        assert_eq!(client.team_by_identifier("seattle kraken").await.unwrap().id, 55);

        let err = client.team_by_identifier("Quebec").await.unwrap_err();
        assert!(matches!(err, AppError::TeamNotFound { ref identifier } if identifier == "Quebec"));
        assert!(client.team_by_identifier("11").await.is_err());
        assert_eq!(client.team_by_identifier(" 55 ").await.unwrap().abbreviation, "SEA");
    }

    #[tokio::test]
    async fn test_roster_uses_abbreviation() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/roster/DAL/current"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(roster(&[(8480027, "Jason", "Robertson")], &[])),
            )
            .mount(&server)
            .await;
        let client = NhlClient::with_base_urls(&server.uri(), &server.uri()).unwrap();

        let roster = client.team_roster("Dallas Stars").await.unwrap();
        assert_eq!(roster.forwards[0].full_name(), "Jason Robertson");
    }

    #[tokio::test]
    async fn test_search_skips_failing_teams_and_keeps_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/roster/NJD/current"))
            .respond_with(ResponseTemplate::new(200).set_body_json(roster(
                &[(1, "Jack", "Hughes")],
                &[(2, "Jake", "Allen")],
            )))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/roster/DAL/current"))
            .respond_with(ResponseTemplate::new(200).set_body_json(roster(
                &[(3, "Jason", "Robertson")],
                &[(4, "Jake", "Oettinger")],
            )))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path_regex(r"^/roster/[A-Z]{3}/current$"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;
        let client = NhlClient::with_base_urls(&server.uri(), &server.uri()).unwrap();

        let results = client.search_player("JA").await.unwrap();
        let ids: Vec<i64> = results.iter().map(|r| r.player_id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(results[2].team_abbrev, "DAL");
        assert!(results[3].is_goalie());

        let oettinger = client.search_player("oettinger").await.unwrap();
        assert_eq!(oettinger.len(), 1);
        assert_eq!(oettinger[0].team_id, 25);
    }

    #[tokio::test]
    async fn test_search_rejects_empty_name() {
        let client = NhlClient::default();
        assert!(matches!(
            client.search_player("   ").await,
            Err(AppError::EmptySearchName)
        ));
    }
}
