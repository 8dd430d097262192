use crate::data_fetcher::models::{
    Game, GameState, GameTeam, GamesByDate, GoalieGameStats, LocalizedName, ScoreboardResponse,
    SkaterGameStats, TeamStanding,
};
use crate::data_fetcher::models::standings::TeamAbbrev;
use crate::data_fetcher::processors::compare_standings;
use std::cmp::Ordering;

/// Test utilities for creating mock data and testing scenarios
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a standing row with the three ranking keys set
    pub fn create_standing(
        name: &str,
        points: i32,
        regulation_wins: i32,
        goal_differential: i32,
    ) -> TeamStanding {
        let wins = points / 2;
        let ot_losses = points % 2;
        TeamStanding {
            team_name: LocalizedName::new(name),
            team_abbrev: TeamAbbrev {
                default: name.to_uppercase().chars().take(3).collect(),
                french: None,
            },
            conference: "Western".to_string(),
            division: "Central".to_string(),
            wins,
            losses: 82 - wins - ot_losses,
            ot_losses,
            regulation_wins,
            points,
            games_played: 82,
            goals_for: 250 + goal_differential.max(0),
            goals_against: 250 - goal_differential.min(0),
            goal_differential,
            ..TeamStanding::default()
        }
    }

    /// Creates a standing row placed in a conference and division
    pub fn create_division_standing(
        name: &str,
        conference: &str,
        division: &str,
        points: i32,
    ) -> TeamStanding {
        let mut team = Self::create_standing(name, points, points / 3, 0);
        team.conference = conference.to_string();
        team.division = division.to_string();
        team
    }

    /// Creates a standing row with a wildcard sequence (0 = holds a division spot)
    pub fn create_wildcard_standing(name: &str, wildcard_sequence: i32, points: i32) -> TeamStanding {
        let mut team = Self::create_standing(name, points, points / 3, 0);
        team.wildcard_sequence = wildcard_sequence;
        team
    }

    /// Creates a scheduled game between Dallas and Chicago
    pub fn create_game(id: i64, start_time_utc: &str) -> Game {
        Game {
            id,
            season: 20232024,
            game_type: 2,
            game_date: start_time_utc.chars().take(10).collect(),
            start_time_utc: start_time_utc.to_string(),
            eastern_utc_offset: "-05:00".to_string(),
            game_state: GameState::Future,
            away_team: GameTeam {
                id: 25,
                name: LocalizedName::new("Stars"),
                abbrev: "DAL".to_string(),
                ..GameTeam::default()
            },
            home_team: GameTeam {
                id: 16,
                name: LocalizedName::new("Blackhawks"),
                abbrev: "CHI".to_string(),
                ..GameTeam::default()
            },
            ..Game::default()
        }
    }

    /// Creates a finished game with a final score
    pub fn create_final_game(id: i64, start_time_utc: &str, away_score: i32, home_score: i32) -> Game {
        let mut game = Self::create_game(id, start_time_utc);
        game.game_state = GameState::Off;
        game.away_team.score = away_score;
        game.home_team.score = home_score;
        game.period_descriptor.number = 3;
        game.period_descriptor.period_type = "REG".to_string();
        game
    }

    /// Creates a scoreboard from `(date, games)` groups
    pub fn create_scoreboard(groups: Vec<(&str, Vec<Game>)>) -> ScoreboardResponse {
        let focused_date = groups.first().map(|(date, _)| date.to_string()).unwrap_or_default();
        ScoreboardResponse {
            focused_date,
            focused_date_count: groups.len() as i32,
            games_by_date: groups
                .into_iter()
                .map(|(date, games)| GamesByDate {
                    date: date.to_string(),
                    games,
                })
                .collect(),
        }
    }

    /// Creates a skater boxscore row; points are goals plus assists
    pub fn create_skater(name: &str, goals: i32, assists: i32) -> SkaterGameStats {
        SkaterGameStats {
            name: LocalizedName::new(name),
            position: "C".to_string(),
            goals,
            assists,
            points: goals + assists,
            toi: "15:00".to_string(),
            ..SkaterGameStats::default()
        }
    }

    /// Creates a skater whose only stat is a faceoff percentage
    pub fn create_faceoff_skater(name: &str, faceoff_winning_pctg: f64) -> SkaterGameStats {
        SkaterGameStats {
            faceoff_winning_pctg,
            ..Self::create_skater(name, 0, 0)
        }
    }

    /// Creates a goalie boxscore row
    pub fn create_goalie(name: &str, saves: i32, goals_against: i32, toi: &str) -> GoalieGameStats {
        let shots = saves + goals_against;
        GoalieGameStats {
            name: LocalizedName::new(name),
            position: "G".to_string(),
            saves,
            goals_against,
            shots_against: shots,
            save_shots_against: format!("{saves}/{shots}"),
            save_pctg: if shots > 0 {
                f64::from(saves) / f64::from(shots)
            } else {
                0.0
            },
            toi: toi.to_string(),
            ..GoalieGameStats::default()
        }
    }
}

/// Property-based testing utilities
pub struct PropertyTesting;

impl PropertyTesting {
    /// Checks that a ranked table never improves on a tie-break key further down
    pub fn validate_standings_order(teams: &[TeamStanding]) -> Result<(), String> {
        for pair in teams.windows(2) {
            if compare_standings(&pair[0], &pair[1]) == Ordering::Greater {
                return Err(format!(
                    "{} ({} pts) ranked above {} ({} pts)",
                    pair[0].team_name, pair[0].points, pair[1].team_name, pair[1].points
                ));
            }
        }
        Ok(())
    }

    /// Checks `points == wins * 2 + ot_losses` for every team
    pub fn validate_points_consistency(teams: &[TeamStanding]) -> Result<(), String> {
        match teams
            .iter()
            .find(|team| team.points != team.wins * 2 + team.ot_losses)
        {
            Some(team) => Err(format!(
                "{} has {} points from {} wins and {} OT losses",
                team.team_name, team.points, team.wins, team.ot_losses
            )),
            None => Ok(()),
        }
    }

    /// Checks that parseable start times are in the requested direction and
    /// that unparseable ones only trail
    pub fn validate_game_order(games: &[Game], descending: bool) -> Result<(), String> {
        let times: Vec<Option<chrono::DateTime<chrono::FixedOffset>>> = games
            .iter()
            .map(|game| chrono::DateTime::parse_from_rfc3339(&game.start_time_utc).ok())
            .collect();

        for (index, pair) in times.windows(2).enumerate() {
            let in_order = match (&pair[0], &pair[1]) {
                (Some(a), Some(b)) => {
                    if descending {
                        a >= b
                    } else {
                        a <= b
                    }
                }
                (None, Some(_)) => false,
                _ => true,
            };
            if !in_order {
                return Err(format!(
                    "games {} and {} are out of order",
                    games[index].id,
                    games[index + 1].id
                ));
            }
        }
        Ok(())
    }
}
