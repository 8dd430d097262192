use crate::constants::{LIVE_WINDOW_MINUTES, REGULATION_PERIODS};
use crate::data_fetcher::models::{Game, GameState, ScoreboardResponse};
use chrono::{DateTime, Duration, Utc};

use super::time_formatting::format_game_time;

/// Games worth showing in a live view, grouped under their date.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveGames<'a> {
    pub date: &'a str,
    pub games: Vec<&'a Game>,
}

/// True if `game` belongs in a live view at `now`: in progress, finished
/// less than an hour after its start, or starting within the hour.
/// Games without a parseable start time are never active.
pub fn is_active_game(game: &Game, now: DateTime<Utc>) -> bool {
    let Ok(start) = DateTime::parse_from_rfc3339(&game.start_time_utc) else {
        return false;
    };
    let start = start.with_timezone(&Utc);
    let window = Duration::minutes(LIVE_WINDOW_MINUTES);

    match game.game_state {
        GameState::Live | GameState::Critical => true,
        GameState::Final | GameState::Off => now - start < window,
        GameState::Pre => start - now < window,
        _ => false,
    }
}

/// Active games per date. Dates with no active game are dropped.
pub fn select_active_games(scoreboard: &ScoreboardResponse, now: DateTime<Utc>) -> Vec<ActiveGames<'_>> {
    scoreboard
        .games_by_date
        .iter()
        .filter_map(|group| {
            let games: Vec<&Game> = group
                .games
                .iter()
                .filter(|game| is_active_game(game, now))
                .collect();
            (!games.is_empty()).then_some(ActiveGames {
                date: &group.date,
                games,
            })
        })
        .collect()
}

/// One-line status such as `LIVE - Period 2, 12:34` or `FINAL (OT)`.
pub fn status_text(game: &Game) -> String {
    match game.game_state {
        GameState::Live | GameState::Critical => {
            let mut text = format!(
                "LIVE - Period {}, {}",
                game.period_descriptor.number.max(game.period),
                game.clock.time_remaining
            );
            if game.clock.in_intermission {
                text.push_str(" (Intermission)");
            }
            text
        }
        GameState::Final | GameState::Off => {
            let descriptor = &game.period_descriptor;
            match descriptor.period_type.as_str() {
                "OT" if descriptor.number > REGULATION_PERIODS => "FINAL (OT)".to_string(),
                "SO" if descriptor.number > REGULATION_PERIODS => "FINAL (SO)".to_string(),
                _ => "FINAL".to_string(),
            }
        }
        GameState::Pre => match format_game_time(&game.start_time_utc) {
            Ok(time) => format!("Starting at {time}"),
            Err(_) => "Starting soon".to_string(),
        },
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 2, 2, 0, 0).unwrap()
    }

    fn game(id: i64, start: &str, state: GameState) -> Game {
        let mut game = TestDataBuilder::create_game(id, start);
        game.game_state = state;
        game
    }

    #[test]
    fn test_active_window() {
        assert!(is_active_game(&game(1, "2024-02-01T23:00:00Z", GameState::Live), now()));
        assert!(is_active_game(&game(2, "2024-02-02T01:30:00Z", GameState::Final), now()));
        assert!(!is_active_game(&game(3, "2024-02-01T23:00:00Z", GameState::Off), now()));
        assert!(is_active_game(&game(4, "2024-02-02T02:30:00Z", GameState::Pre), now()));
        assert!(!is_active_game(&game(5, "2024-02-02T04:00:00Z", GameState::Pre), now()));
        assert!(!is_active_game(&game(6, "2024-02-02T02:30:00Z", GameState::Future), now()));
        assert!(!is_active_game(&game(7, "TBD", GameState::Live), now()));
    }

    #[test]
    fn test_select_drops_empty_dates() {
        let scoreboard = TestDataBuilder::create_scoreboard(vec![
            ("2024-02-01", vec![game(1, "2024-02-01T23:00:00Z", GameState::Critical)]),
            ("2024-02-03", vec![game(2, "2024-02-04T00:00:00Z", GameState::Future)]),
        ]);
        let active = select_active_games(&scoreboard, now());
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].date, "2024-02-01");
        assert_eq!(active[0].games[0].id, 1);
    }

    #[test]
    fn test_status_text() {
        let mut live = game(1, "2024-02-01T23:00:00Z", GameState::Live);
        live.period_descriptor.number = 2;
        live.clock.time_remaining = "12:34".to_string();
        assert_eq!(status_text(&live), "LIVE - Period 2, 12:34");
        live.clock.in_intermission = true;
        assert_eq!(status_text(&live), "LIVE - Period 2, 12:34 (Intermission)");

        let mut overtime = game(2, "2024-02-01T23:00:00Z", GameState::Off);
        overtime.period_descriptor.number = 4;
        overtime.period_descriptor.period_type = "OT".to_string();
        assert_eq!(status_text(&overtime), "FINAL (OT)");

        let mut shootout = overtime.clone();
        shootout.period_descriptor.number = 5;
        shootout.period_descriptor.period_type = "SO".to_string();
        assert_eq!(status_text(&shootout), "FINAL (SO)");

        let pre = game(3, "2024-02-02T00:00:00Z", GameState::Pre);
        assert_eq!(status_text(&pre), "Starting at 7:00 PM ET (6:00 PM CT)");
    }
}
