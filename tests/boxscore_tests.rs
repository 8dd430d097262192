use nhl_stats::data_fetcher::models::{BoxscoreResponse, TeamPlayerStats};
use nhl_stats::data_fetcher::processors::{aggregate_team_totals, rank_skaters, team_totals};
use nhl_stats::display::render_boxscore;
use nhl_stats::testing_utils::TestDataBuilder;

#[test]
fn test_faceoff_average_ignores_players_without_draws() {
    let skaters = vec![
        TestDataBuilder::create_faceoff_skater("Hintz", 60.0),
        TestDataBuilder::create_faceoff_skater("Heiskanen", 0.0),
        TestDataBuilder::create_faceoff_skater("Johnston", 40.0),
    ];
    assert_eq!(aggregate_team_totals(&skaters).faceoff_pct, 50.0);
}

#[test]
fn test_team_totals_and_ranking() {
    let mut hintz = TestDataBuilder::create_skater("Roope Hintz", 1, 1);
    hintz.sog = 4;
    hintz.hits = 1;
    let mut robertson = TestDataBuilder::create_skater("Jason Robertson", 2, 1);
    robertson.sog = 6;
    let mut heiskanen = TestDataBuilder::create_skater("Miro Heiskanen", 0, 1);
    heiskanen.hits = 3;
    heiskanen.pim = 2;

    let team = TeamPlayerStats {
        forwards: vec![hintz, robertson],
        defense: vec![heiskanen],
        goalies: vec![TestDataBuilder::create_goalie("Jake Oettinger", 30, 2, "60:00")],
    };

    let totals = team_totals(&team);
    assert_eq!(totals.shots_on_goal, 10);
    assert_eq!(totals.hits, 4);
    assert_eq!(totals.penalty_minutes, 2);

    let ranked: Vec<String> = rank_skaters(&team)
        .into_iter()
        .map(|s| s.name.default)
        .collect();
    assert_eq!(ranked[0], "Jason Robertson");
    assert_eq!(ranked.last().map(String::as_str), Some("Miro Heiskanen"));
}

#[test]
fn test_boxscore_hides_goalies_who_did_not_play() {
    let mut boxscore = BoxscoreResponse::default();
    boxscore.player_by_game_stats.home_team.goalies = vec![
        TestDataBuilder::create_goalie("Jake Oettinger", 28, 1, "60:00"),
        TestDataBuilder::create_goalie("Scott Wedgewood", 0, 0, "00:00"),
    ];

    let text = render_boxscore(&boxscore);
    assert!(text.contains("Jake Oettinger"));
    assert!(!text.contains("Scott Wedgewood"));
}
