use nhl_stats::data_fetcher::models::{ScoreboardResponse, SortOrder};
use nhl_stats::data_fetcher::processors::filter_games_by_date;
use nhl_stats::testing_utils::{PropertyTesting, TestDataBuilder};

fn scoreboard() -> ScoreboardResponse {
    TestDataBuilder::create_scoreboard(vec![
        (
            "2024-01-31",
            vec![TestDataBuilder::create_game(10, "2024-02-01T01:00:00Z")],
        ),
        (
            "2024-02-01",
            vec![
                TestDataBuilder::create_game(22, "2024-02-02T02:00:00Z"),
                TestDataBuilder::create_game(21, "2024-02-02T00:00:00Z"),
                TestDataBuilder::create_game(23, "2024-02-02T03:30:00Z"),
                TestDataBuilder::create_game(20, "2024-02-01T23:30:00Z"),
            ],
        ),
        (
            "2024-02-02",
            vec![TestDataBuilder::create_game(30, "2024-02-03T00:00:00Z")],
        ),
    ])
}

fn ids(order: SortOrder) -> Vec<i64> {
    filter_games_by_date(&scoreboard(), "2024-02-01", order)
        .games
        .iter()
        .map(|game| game.id)
        .collect()
}

#[test]
fn test_only_requested_date_is_kept() {
    let filtered = filter_games_by_date(&scoreboard(), "2024-02-01", SortOrder::Ascending);
    assert_eq!(filtered.date, "2024-02-01");
    assert_eq!(filtered.games.len(), 4);
    assert!(filtered.games.iter().all(|game| game.id / 10 == 2));
    PropertyTesting::validate_game_order(&filtered.games, false).unwrap();
}

#[test]
fn test_descending_reverses_ascending() {
    let ascending = ids(SortOrder::Ascending);
    let mut descending = ids(SortOrder::Descending);
    assert_eq!(ascending, vec![20, 21, 22, 23]);

    descending.reverse();
    assert_eq!(ascending, descending);
}

#[test]
fn test_date_without_games_echoes_date() {
    let filtered = filter_games_by_date(&scoreboard(), "2024-03-15", SortOrder::Descending);
    assert_eq!(filtered.date, "2024-03-15");
    assert!(filtered.games.is_empty());
}
