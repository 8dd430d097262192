use std::sync::Arc;

use nhl_stats::data_fetcher::models::StatsFilter;
use nhl_stats::{AppError, NhlClient};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_team_directory_is_shared() {
    let client = NhlClient::default();
    let first = client.teams().await;
    let second = client.teams().await;
    assert!(Arc::ptr_eq(&first, &second));
    assert!(!first.teams.is_empty());
}

#[tokio::test]
async fn test_concurrent_directory_reads_share_one_arc() {
    let client = Arc::new(NhlClient::default());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let client = Arc::clone(&client);
            tokio::spawn(async move { client.teams().await })
        })
        .collect();

    let mut directories = Vec::new();
    for handle in handles {
        directories.push(handle.await.unwrap());
    }
    assert!(directories.windows(2).all(|pair| Arc::ptr_eq(&pair[0], &pair[1])));
}

#[tokio::test]
async fn test_validation_happens_before_network() {
    let client = NhlClient::with_base_urls("http://127.0.0.1:9", "http://127.0.0.1:9").unwrap();

    assert!(matches!(
        client.game_details(0).await,
        Err(AppError::InvalidGameId { game_id: 0 })
    ));
    assert!(matches!(
        client.search_player("   ").await,
        Err(AppError::EmptySearchName)
    ));
    assert!(matches!(
        client.player_stats(8478402, false, "nonsense", StatsFilter::default()).await,
        Err(AppError::InvalidReportType { .. })
    ));
    assert!(matches!(
        client.standings_by_date("2024-13-01").await,
        Err(AppError::InvalidDate { .. })
    ));
}

#[tokio::test]
async fn test_season_totals_are_nhl_only_and_newest_first() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/player/8478402/landing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "playerId": 8478402,
            "firstName": {"default": "Connor"},
            "lastName": {"default": "McDavid"},
            "seasonTotals": [
                {"season": 20142015, "gameTypeId": 2, "leagueAbbrev": "OHL", "gamesPlayed": 47},
                {"season": 20152016, "gameTypeId": 2, "leagueAbbrev": "NHL", "gamesPlayed": 45},
                {"season": 20222023, "gameTypeId": 3, "leagueAbbrev": "NHL", "gamesPlayed": 12},
                {"season": 20222023, "gameTypeId": 2, "leagueAbbrev": "NHL", "gamesPlayed": 82}
            ]
        })))
        .mount(&mock)
        .await;
    let client = NhlClient::with_base_urls(&mock.uri(), &mock.uri()).unwrap();

    let all = client
        .filtered_player_stats(8478402, StatsFilter::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 3);
    assert!(all.iter().all(|s| s.league_abbrev == "NHL"));
    assert_eq!(all[0].season, 20222023);

    let regular = client
        .filtered_player_stats(8478402, StatsFilter::game_type(2).with_season(20222023))
        .await
        .unwrap();
    assert_eq!(regular.len(), 1);
    assert_eq!(regular[0].games_played, 82);
}

#[tokio::test]
async fn test_status_errors_keep_url() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gamecenter/2024020750/landing"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock)
        .await;
    let client = NhlClient::with_base_urls(&mock.uri(), &mock.uri()).unwrap();

    let err = client.game_details(2024020750).await.unwrap_err();
    assert!(matches!(
        err.root_cause(),
        AppError::ApiServiceUnavailable { status: 503, .. }
    ));
    assert!(err.to_string().contains("/gamecenter/2024020750/landing"));
}
