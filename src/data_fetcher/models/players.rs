use super::common::LocalizedName;
use serde::{Deserialize, Serialize};

/// One season row from the stats REST skater summary report.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SkaterStats {
    #[serde(default)]
    pub assists: i32,
    #[serde(rename = "evGoals", default)]
    pub even_strength_goals: i32,
    #[serde(rename = "evPoints", default)]
    pub even_strength_points: i32,
    #[serde(rename = "faceoffWinPct", default)]
    pub faceoff_win_pct: Option<f64>,
    #[serde(rename = "gameWinningGoals", default)]
    pub game_winning_goals: i32,
    #[serde(rename = "gamesPlayed", default)]
    pub games_played: i32,
    #[serde(default)]
    pub goals: i32,
    #[serde(rename = "lastName", default)]
    pub last_name: String,
    #[serde(rename = "otGoals", default)]
    pub overtime_goals: i32,
    #[serde(rename = "penaltyMinutes", default)]
    pub penalty_minutes: i32,
    #[serde(rename = "playerId", default)]
    pub player_id: i64,
    #[serde(rename = "plusMinus", default)]
    pub plus_minus: i32,
    #[serde(default)]
    pub points: i32,
    #[serde(rename = "pointsPerGame", default)]
    pub points_per_game: f64,
    #[serde(rename = "positionCode", default)]
    pub position_code: String,
    #[serde(rename = "ppGoals", default)]
    pub power_play_goals: i32,
    #[serde(rename = "ppPoints", default)]
    pub power_play_points: i32,
    #[serde(rename = "seasonId", default)]
    pub season_id: i32,
    #[serde(rename = "shGoals", default)]
    pub short_handed_goals: i32,
    #[serde(rename = "shPoints", default)]
    pub short_handed_points: i32,
    #[serde(rename = "shootingPct", default)]
    pub shooting_pct: Option<f64>,
    #[serde(rename = "shootsCatches", default)]
    pub shoots_catches: String,
    #[serde(default)]
    pub shots: i32,
    #[serde(rename = "skaterFullName", default)]
    pub full_name: String,
    #[serde(rename = "teamAbbrevs", default)]
    pub team_abbrevs: String,
    /// Seconds per game
    #[serde(rename = "timeOnIcePerGame", default)]
    pub time_on_ice_per_game: f64,
}

/// One season row from the stats REST goalie summary report.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GoalieStats {
    #[serde(default)]
    pub assists: i32,
    #[serde(rename = "gamesPlayed", default)]
    pub games_played: i32,
    #[serde(rename = "gamesStarted", default)]
    pub games_started: i32,
    #[serde(rename = "goalieFullName", default)]
    pub full_name: String,
    #[serde(default)]
    pub goals: i32,
    #[serde(rename = "goalsAgainst", default)]
    pub goals_against: i32,
    #[serde(rename = "goalsAgainstAverage", default)]
    pub goals_against_average: f64,
    #[serde(rename = "lastName", default)]
    pub last_name: String,
    #[serde(default)]
    pub losses: i32,
    #[serde(rename = "otLosses", default)]
    pub overtime_losses: i32,
    #[serde(rename = "penaltyMinutes", default)]
    pub penalty_minutes: i32,
    #[serde(rename = "playerId", default)]
    pub player_id: i64,
    #[serde(default)]
    pub points: i32,
    #[serde(rename = "savePct", default)]
    pub save_pct: f64,
    #[serde(default)]
    pub saves: i32,
    #[serde(rename = "seasonId", default)]
    pub season_id: i32,
    #[serde(rename = "shootsCatches", default)]
    pub shoots_catches: String,
    #[serde(rename = "shotsAgainst", default)]
    pub shots_against: i32,
    #[serde(default)]
    pub shutouts: i32,
    #[serde(rename = "teamAbbrevs", default)]
    pub team_abbrevs: String,
    /// Total seconds
    #[serde(rename = "timeOnIce", default)]
    pub time_on_ice: i64,
    #[serde(default)]
    pub wins: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SkaterStatsResponse {
    #[serde(default)]
    pub data: Vec<SkaterStats>,
    #[serde(default)]
    pub total: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GoalieStatsResponse {
    #[serde(default)]
    pub data: Vec<GoalieStats>,
    #[serde(default)]
    pub total: i32,
}

/// Stat report for one player, shaped by whether they are a goalie.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum PlayerStats {
    Skater(SkaterStatsResponse),
    Goalie(GoalieStatsResponse),
}

impl PlayerStats {
    pub fn is_goalie(&self) -> bool {
        matches!(self, PlayerStats::Goalie(_))
    }

    pub fn season_count(&self) -> usize {
        match self {
            PlayerStats::Skater(stats) => stats.data.len(),
            PlayerStats::Goalie(stats) => stats.data.len(),
        }
    }
}

/// Optional filters for stat queries. `None` means "all".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsFilter {
    pub game_type: Option<i32>,
    pub season_id: Option<i32>,
}

impl StatsFilter {
    pub fn game_type(game_type: i32) -> Self {
        Self {
            game_type: Some(game_type),
            season_id: None,
        }
    }

    pub fn with_season(mut self, season_id: i32) -> Self {
        self.season_id = Some(season_id);
        self
    }

    pub fn matches(&self, season: &SeasonTotal) -> bool {
        self.game_type
            .is_none_or(|game_type| season.game_type_id == game_type)
            && self
                .season_id
                .is_none_or(|season_id| season.season == season_id)
    }
}

/// One row of a player's career table from the landing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SeasonTotal {
    #[serde(default)]
    pub assists: i32,
    #[serde(rename = "avgToi", default, skip_serializing_if = "Option::is_none")]
    pub avg_toi: Option<String>,
    #[serde(
        rename = "faceoffWinningPctg",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub faceoff_winning_pctg: Option<f64>,
    #[serde(rename = "gameTypeId", default)]
    pub game_type_id: i32,
    #[serde(rename = "gameWinningGoals", default)]
    pub game_winning_goals: i32,
    #[serde(rename = "gamesPlayed", default)]
    pub games_played: i32,
    #[serde(default)]
    pub goals: i32,
    #[serde(rename = "leagueAbbrev", default)]
    pub league_abbrev: String,
    #[serde(rename = "otGoals", default)]
    pub ot_goals: i32,
    #[serde(rename = "pim", default)]
    pub penalty_minutes: i32,
    #[serde(rename = "plusMinus", default)]
    pub plus_minus: i32,
    #[serde(default)]
    pub points: i32,
    #[serde(rename = "powerPlayGoals", default)]
    pub power_play_goals: i32,
    #[serde(rename = "powerPlayPoints", default)]
    pub power_play_points: i32,
    #[serde(default)]
    pub season: i32,
    #[serde(
        rename = "shootingPctg",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub shooting_pctg: Option<f64>,
    #[serde(rename = "shorthandedGoals", default)]
    pub shorthanded_goals: i32,
    #[serde(rename = "shorthandedPoints", default)]
    pub shorthanded_points: i32,
    #[serde(default)]
    pub shots: i32,
    #[serde(rename = "teamName", default)]
    pub team_name: LocalizedName,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PlayerLandingResponse {
    #[serde(rename = "playerId", default)]
    pub player_id: i64,
    #[serde(rename = "firstName", default)]
    pub first_name: LocalizedName,
    #[serde(rename = "lastName", default)]
    pub last_name: LocalizedName,
    #[serde(default)]
    pub position: String,
    #[serde(rename = "seasonTotals", default)]
    pub season_totals: Vec<SeasonTotal>,
}
