use super::common::{GameClock, LocalizedName, PeriodDescriptor, TvBroadcast};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a game as reported by the API.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Scheduled, not yet in the pre-game window
    #[serde(rename = "FUT")]
    Future,
    #[serde(rename = "PRE")]
    Pre,
    #[serde(rename = "LIVE")]
    Live,
    /// Live and in the final minutes
    #[serde(rename = "CRIT")]
    Critical,
    #[serde(rename = "FINAL")]
    Final,
    /// Final and official
    #[serde(rename = "OFF")]
    Off,
    #[default]
    #[serde(other)]
    Unknown,
}

impl GameState {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameState::Future => "FUT",
            GameState::Pre => "PRE",
            GameState::Live => "LIVE",
            GameState::Critical => "CRIT",
            GameState::Final => "FINAL",
            GameState::Off => "OFF",
            GameState::Unknown => "UNKNOWN",
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, GameState::Live | GameState::Critical)
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, GameState::Final | GameState::Off)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction for ordering games by start time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// A team as it appears inside a scoreboard game.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GameTeam {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: LocalizedName,
    #[serde(rename = "commonName", default)]
    pub common_name: LocalizedName,
    #[serde(rename = "placeNameWithPreposition", default)]
    pub place_name_with_preposition: LocalizedName,
    #[serde(default)]
    pub abbrev: String,
    #[serde(default)]
    pub score: i32,
    #[serde(rename = "sog", default)]
    pub shots_on_goal: i32,
    #[serde(default)]
    pub logo: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SituationTeam {
    #[serde(default)]
    pub abbrev: String,
    #[serde(rename = "situationDescriptions", default)]
    pub situation_descriptions: Vec<String>,
    #[serde(default)]
    pub strength: i32,
}

/// Power-play situation of a live game.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GameSituation {
    #[serde(rename = "homeTeam", default)]
    pub home_team: SituationTeam,
    #[serde(rename = "awayTeam", default)]
    pub away_team: SituationTeam,
    #[serde(rename = "situationCode", default)]
    pub situation_code: String,
    #[serde(rename = "timeRemaining", default)]
    pub time_remaining: String,
    #[serde(rename = "secondsRemaining", default)]
    pub seconds_remaining: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Game {
    pub id: i64,
    #[serde(default)]
    pub season: i32,
    #[serde(rename = "gameType", default)]
    pub game_type: i32,
    #[serde(rename = "gameDate", default)]
    pub game_date: String,
    #[serde(rename = "gameCenterLink", default)]
    pub game_center_link: String,
    #[serde(default)]
    pub venue: LocalizedName,
    /// RFC 3339 timestamp, e.g. `2024-02-01T00:00:00Z`
    #[serde(rename = "startTimeUTC", default)]
    pub start_time_utc: String,
    #[serde(rename = "easternUTCOffset", default)]
    pub eastern_utc_offset: String,
    #[serde(rename = "venueUTCOffset", default)]
    pub venue_utc_offset: String,
    #[serde(rename = "tvBroadcasts", default)]
    pub tv_broadcasts: Vec<TvBroadcast>,
    #[serde(rename = "gameState", default)]
    pub game_state: GameState,
    #[serde(rename = "gameScheduleState", default)]
    pub game_schedule_state: String,
    #[serde(rename = "awayTeam", default)]
    pub away_team: GameTeam,
    #[serde(rename = "homeTeam", default)]
    pub home_team: GameTeam,
    #[serde(default)]
    pub period: i32,
    #[serde(rename = "periodDescriptor", default)]
    pub period_descriptor: PeriodDescriptor,
    #[serde(default)]
    pub clock: GameClock,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub situation: Option<GameSituation>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GamesByDate {
    pub date: String,
    #[serde(default)]
    pub games: Vec<Game>,
}

/// Raw scoreboard: games grouped by calendar date around a focused date.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ScoreboardResponse {
    #[serde(rename = "focusedDate", default)]
    pub focused_date: String,
    #[serde(rename = "focusedDateCount", default)]
    pub focused_date_count: i32,
    #[serde(rename = "gamesByDate", default)]
    pub games_by_date: Vec<GamesByDate>,
}

/// Games of one date, ordered by start time. `date` always echoes the
/// requested date, even when no games matched.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FilteredScoreboardResponse {
    pub date: String,
    pub games: Vec<Game>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TeamInSchedule {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "commonName", default)]
    pub common_name: LocalizedName,
    #[serde(rename = "abbrev", default)]
    pub abbreviation: String,
    #[serde(default)]
    pub score: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ScheduleGame {
    pub id: i64,
    #[serde(default)]
    pub season: i32,
    #[serde(rename = "gameType", default)]
    pub game_type: i32,
    #[serde(rename = "gameDate", default)]
    pub game_date: String,
    #[serde(rename = "startTimeUTC", default)]
    pub start_time_utc: String,
    #[serde(rename = "venueUTCOffset", default)]
    pub venue_utc_offset: String,
    #[serde(rename = "gameState", default)]
    pub game_state: GameState,
    #[serde(rename = "homeTeam", default)]
    pub home_team: TeamInSchedule,
    #[serde(rename = "awayTeam", default)]
    pub away_team: TeamInSchedule,
    #[serde(rename = "gameCenterLink", default)]
    pub game_center_link: String,
}

/// A club's full-season schedule.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TeamScheduleResponse {
    #[serde(default)]
    pub games: Vec<ScheduleGame>,
}
