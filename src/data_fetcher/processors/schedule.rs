use crate::data_fetcher::models::{FilteredScoreboardResponse, Game, ScoreboardResponse, SortOrder};
use chrono::{DateTime, FixedOffset};
use std::cmp::Ordering;
use tracing::debug;

fn parse_start_time(game: &Game) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(&game.start_time_utc).ok()
}

/// Orders two optional start times. Parsed times follow `order`; a game
/// whose time failed to parse sorts after every parsed one in either
/// direction, and two unparsed games compare equal.
fn compare_start_times(
    a: Option<&DateTime<FixedOffset>>,
    b: Option<&DateTime<FixedOffset>>,
    order: SortOrder,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match order {
            SortOrder::Ascending => a.cmp(b),
            SortOrder::Descending => b.cmp(a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sorts games in place by start time.
pub fn sort_games_by_start_time(games: &mut Vec<Game>, order: SortOrder) {
    let mut keyed: Vec<(Option<DateTime<FixedOffset>>, Game)> = games
        .drain(..)
        .map(|game| (parse_start_time(&game), game))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| compare_start_times(a.as_ref(), b.as_ref(), order));
    games.extend(keyed.into_iter().map(|(_, game)| game));
}

/// Keeps the games scheduled on `date` and orders them by start time.
///
/// Only the `gamesByDate` group whose date equals `date` contributes; the
/// scoreboard usually carries neighbouring days as well. The returned
/// `date` always echoes the request, even when no games matched.
///
/// # Examples
///
/// ```
/// use nhl_stats::data_fetcher::models::{ScoreboardResponse, SortOrder};
/// use nhl_stats::data_fetcher::processors::filter_games_by_date;
///
/// let filtered = filter_games_by_date(&ScoreboardResponse::default(), "2024-02-01", SortOrder::Descending);
/// assert_eq!(filtered.date, "2024-02-01");
/// assert!(filtered.games.is_empty());
/// ```
pub fn filter_games_by_date(
    scoreboard: &ScoreboardResponse,
    date: &str,
    order: SortOrder,
) -> FilteredScoreboardResponse {
    let mut games: Vec<Game> = scoreboard
        .games_by_date
        .iter()
        .filter(|group| group.date == date)
        .flat_map(|group| group.games.iter().cloned())
        .collect();

    let unparsed = games
        .iter()
        .filter(|game| parse_start_time(game).is_none())
        .count();
    if unparsed > 0 {
        debug!("{unparsed} game(s) on {date} have no parseable start time");
    }

    sort_games_by_start_time(&mut games, order);

    FilteredScoreboardResponse {
        date: date.to_string(),
        games,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;

    fn ids(filtered: &FilteredScoreboardResponse) -> Vec<i64> {
        filtered.games.iter().map(|g| g.id).collect()
    }

    fn sample_scoreboard() -> ScoreboardResponse {
        TestDataBuilder::create_scoreboard(vec![
            (
                "2024-01-31",
                vec![TestDataBuilder::create_game(100, "2024-02-01T00:00:00Z")],
            ),
            (
                "2024-02-01",
                vec![
                    TestDataBuilder::create_game(2, "2024-02-02T00:30:00Z"),
                    TestDataBuilder::create_game(1, "2024-02-01T23:00:00Z"),
                    TestDataBuilder::create_game(3, "2024-02-02T03:00:00Z"),
                ],
            ),
            (
                "2024-02-02",
                vec![TestDataBuilder::create_game(200, "2024-02-03T00:00:00Z")],
            ),
        ])
    }

    #[test]
    fn test_only_target_date_games_are_kept() {
        let filtered = filter_games_by_date(&sample_scoreboard(), "2024-02-01", SortOrder::Ascending);
        assert_eq!(filtered.date, "2024-02-01");
        assert_eq!(ids(&filtered), vec![1, 2, 3]);
    }

    #[test]
    fn test_descending_is_reverse_of_ascending() {
        let scoreboard = sample_scoreboard();
        let ascending = filter_games_by_date(&scoreboard, "2024-02-01", SortOrder::Ascending);
        let descending = filter_games_by_date(&scoreboard, "2024-02-01", SortOrder::Descending);

        let mut reversed = ids(&ascending);
        reversed.reverse();
        assert_eq!(ids(&descending), reversed);
    }

    #[test]
    fn test_missing_date_echoes_target() {
        let filtered = filter_games_by_date(&sample_scoreboard(), "2024-03-15", SortOrder::Descending);
        assert_eq!(filtered.date, "2024-03-15");
        assert!(filtered.games.is_empty());
    }

    #[test]
    fn test_unparseable_times_sort_last_in_both_directions() {
        let scoreboard = TestDataBuilder::create_scoreboard(vec![(
            "2024-02-01",
            vec![
                TestDataBuilder::create_game(10, "TBD"),
                TestDataBuilder::create_game(1, "2024-02-01T23:00:00Z"),
                TestDataBuilder::create_game(11, ""),
                TestDataBuilder::create_game(2, "2024-02-02T01:00:00Z"),
            ],
        )]);

        let ascending = filter_games_by_date(&scoreboard, "2024-02-01", SortOrder::Ascending);
        assert_eq!(ids(&ascending), vec![1, 2, 10, 11]);

        let descending = filter_games_by_date(&scoreboard, "2024-02-01", SortOrder::Descending);
        assert_eq!(ids(&descending), vec![2, 1, 10, 11]);
    }

    #[test]
    fn test_offsets_are_compared_as_instants() {
        let mut games = vec![
            TestDataBuilder::create_game(1, "2024-02-01T19:00:00-05:00"),
            TestDataBuilder::create_game(2, "2024-02-01T23:30:00Z"),
        ];
        sort_games_by_start_time(&mut games, SortOrder::Ascending);
        assert_eq!(games[0].id, 2);
    }
}
