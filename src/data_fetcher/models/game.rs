use super::common::{GameClock, LocalizedName, PeriodDescriptor, TvBroadcast};
use super::schedule::{GameSituation, GameState, GameTeam};
use serde::{Deserialize, Serialize};

/// A team inside gamecenter responses.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DetailedTeam {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "commonName", default)]
    pub common_name: LocalizedName,
    #[serde(default)]
    pub abbrev: String,
    #[serde(rename = "placeName", default)]
    pub place_name: LocalizedName,
    #[serde(rename = "placeNameWithPreposition", default)]
    pub place_name_with_preposition: LocalizedName,
    #[serde(default)]
    pub score: i32,
    #[serde(rename = "sog", default)]
    pub shots_on_goal: i32,
    #[serde(default)]
    pub logo: String,
    #[serde(rename = "darkLogo", default)]
    pub dark_logo: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AssistEvent {
    #[serde(rename = "playerId", default)]
    pub player_id: i64,
    #[serde(rename = "firstName", default)]
    pub first_name: LocalizedName,
    #[serde(rename = "lastName", default)]
    pub last_name: LocalizedName,
    #[serde(default)]
    pub name: LocalizedName,
    #[serde(rename = "assistsToDate", default)]
    pub assists_to_date: i32,
    #[serde(rename = "sweaterNumber", default)]
    pub sweater_number: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GoalEvent {
    #[serde(rename = "situationCode", default)]
    pub situation_code: String,
    #[serde(default)]
    pub strength: String,
    #[serde(rename = "playerId", default)]
    pub player_id: i64,
    #[serde(rename = "firstName", default)]
    pub first_name: LocalizedName,
    #[serde(rename = "lastName", default)]
    pub last_name: LocalizedName,
    #[serde(default)]
    pub name: LocalizedName,
    #[serde(rename = "teamAbbrev", default)]
    pub team_abbrev: LocalizedName,
    #[serde(rename = "timeInPeriod", default)]
    pub time_in_period: String,
    #[serde(rename = "shotType", default)]
    pub shot_type: String,
    #[serde(rename = "goalModifier", default)]
    pub goal_modifier: String,
    #[serde(rename = "awayScore", default)]
    pub away_score: i32,
    #[serde(rename = "homeScore", default)]
    pub home_score: i32,
    #[serde(
        rename = "leadingTeamAbbrev",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub leading_team_abbrev: Option<LocalizedName>,
    #[serde(default)]
    pub assists: Vec<AssistEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PenaltyEvent {
    #[serde(rename = "timeInPeriod", default)]
    pub time_in_period: String,
    #[serde(rename = "type", default)]
    pub penalty_type: String,
    #[serde(default)]
    pub duration: i32,
    #[serde(rename = "committedByPlayer", default)]
    pub committed_by_player: String,
    #[serde(rename = "teamAbbrev", default)]
    pub team_abbrev: LocalizedName,
    #[serde(rename = "drawnBy", default)]
    pub drawn_by: String,
    #[serde(rename = "descKey", default)]
    pub desc_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PeriodSummary {
    #[serde(rename = "periodDescriptor", default)]
    pub period_descriptor: PeriodDescriptor,
    #[serde(default)]
    pub goals: Vec<GoalEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PeriodPenalties {
    #[serde(rename = "periodDescriptor", default)]
    pub period_descriptor: PeriodDescriptor,
    #[serde(default)]
    pub penalties: Vec<PenaltyEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GameSummary {
    #[serde(default)]
    pub scoring: Vec<PeriodSummary>,
    #[serde(default)]
    pub shootout: Vec<serde_json::Value>,
    #[serde(default)]
    pub penalties: Vec<PeriodPenalties>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StarPlayer {
    #[serde(default)]
    pub star: i32,
    #[serde(rename = "playerId", default)]
    pub player_id: i64,
    #[serde(rename = "teamAbbrev", default)]
    pub team_abbrev: String,
    #[serde(default)]
    pub headshot: String,
    #[serde(default)]
    pub name: LocalizedName,
    #[serde(rename = "sweaterNo", default)]
    pub sweater_no: i32,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub goals: i32,
    #[serde(default)]
    pub assists: i32,
    #[serde(default)]
    pub points: i32,
    #[serde(rename = "savePctg", default)]
    pub save_pctg: f64,
}

/// Gamecenter landing page: teams, clock and summaries.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GameDetails {
    pub id: i64,
    #[serde(rename = "gameType", default)]
    pub game_type: i32,
    #[serde(default)]
    pub season: i32,
    #[serde(rename = "gameDate", default)]
    pub game_date: String,
    #[serde(rename = "startTimeUTC", default)]
    pub start_time_utc: String,
    #[serde(default)]
    pub venue: LocalizedName,
    #[serde(rename = "gameState", default)]
    pub game_state: GameState,
    #[serde(rename = "homeTeam", default)]
    pub home_team: DetailedTeam,
    #[serde(rename = "awayTeam", default)]
    pub away_team: DetailedTeam,
    #[serde(default)]
    pub clock: GameClock,
    #[serde(rename = "tvBroadcasts", default)]
    pub tv_broadcasts: Vec<TvBroadcast>,
    #[serde(default)]
    pub summary: GameSummary,
    #[serde(rename = "threeStars", default)]
    pub three_stars: Vec<StarPlayer>,
}

/// A skater's boxscore row.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SkaterGameStats {
    #[serde(rename = "playerId", default)]
    pub player_id: i64,
    #[serde(rename = "sweaterNumber", default)]
    pub sweater_number: i32,
    #[serde(default)]
    pub name: LocalizedName,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub goals: i32,
    #[serde(default)]
    pub assists: i32,
    #[serde(default)]
    pub points: i32,
    #[serde(rename = "plusMinus", default)]
    pub plus_minus: i32,
    #[serde(default)]
    pub pim: i32,
    #[serde(default)]
    pub hits: i32,
    #[serde(rename = "powerPlayGoals", default)]
    pub power_play_goals: i32,
    #[serde(default)]
    pub sog: i32,
    /// Fraction of faceoffs won; 0 when the player took none
    #[serde(rename = "faceoffWinningPctg", default)]
    pub faceoff_winning_pctg: f64,
    #[serde(default)]
    pub toi: String,
    #[serde(rename = "blockedShots", default)]
    pub blocked_shots: i32,
    #[serde(default)]
    pub shifts: i32,
    #[serde(default)]
    pub giveaways: i32,
    #[serde(default)]
    pub takeaways: i32,
}

/// A goalie's boxscore row. Shot splits come as `"saves/shots"` strings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GoalieGameStats {
    #[serde(rename = "playerId", default)]
    pub player_id: i64,
    #[serde(rename = "sweaterNumber", default)]
    pub sweater_number: i32,
    #[serde(default)]
    pub name: LocalizedName,
    #[serde(default)]
    pub position: String,
    #[serde(rename = "evenStrengthShotsAgainst", default)]
    pub even_strength_shots_against: String,
    #[serde(rename = "powerPlayShotsAgainst", default)]
    pub power_play_shots_against: String,
    #[serde(rename = "shorthandedShotsAgainst", default)]
    pub shorthanded_shots_against: String,
    #[serde(rename = "saveShotsAgainst", default)]
    pub save_shots_against: String,
    #[serde(rename = "savePctg", default)]
    pub save_pctg: f64,
    #[serde(rename = "evenStrengthGoalsAgainst", default)]
    pub even_strength_goals_against: i32,
    #[serde(rename = "powerPlayGoalsAgainst", default)]
    pub power_play_goals_against: i32,
    #[serde(rename = "shorthandedGoalsAgainst", default)]
    pub shorthanded_goals_against: i32,
    #[serde(default)]
    pub pim: i32,
    #[serde(rename = "goalsAgainst", default)]
    pub goals_against: i32,
    #[serde(default)]
    pub toi: String,
    #[serde(default)]
    pub starter: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision: Option<String>,
    #[serde(rename = "shotsAgainst", default)]
    pub shots_against: i32,
    #[serde(default)]
    pub saves: i32,
}

impl GoalieGameStats {
    /// Dressed goalies who never entered the game report `00:00`.
    pub fn played(&self) -> bool {
        !self.toi.is_empty() && self.toi != "00:00"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TeamPlayerStats {
    #[serde(default)]
    pub forwards: Vec<SkaterGameStats>,
    #[serde(default)]
    pub defense: Vec<SkaterGameStats>,
    #[serde(default)]
    pub goalies: Vec<GoalieGameStats>,
}

impl TeamPlayerStats {
    /// Forwards followed by defensemen.
    pub fn skaters(&self) -> impl Iterator<Item = &SkaterGameStats> {
        self.forwards.iter().chain(self.defense.iter())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PlayerByGameStats {
    #[serde(rename = "homeTeam", default)]
    pub home_team: TeamPlayerStats,
    #[serde(rename = "awayTeam", default)]
    pub away_team: TeamPlayerStats,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct BoxscoreResponse {
    pub id: i64,
    #[serde(default)]
    pub season: i32,
    #[serde(rename = "gameType", default)]
    pub game_type: i32,
    #[serde(rename = "gameDate", default)]
    pub game_date: String,
    #[serde(rename = "startTimeUTC", default)]
    pub start_time_utc: String,
    #[serde(default)]
    pub venue: LocalizedName,
    #[serde(rename = "gameState", default)]
    pub game_state: GameState,
    #[serde(rename = "homeTeam", default)]
    pub home_team: DetailedTeam,
    #[serde(rename = "awayTeam", default)]
    pub away_team: DetailedTeam,
    #[serde(rename = "playerByGameStats", default)]
    pub player_by_game_stats: PlayerByGameStats,
}

/// A dressed player in play-by-play data, used to resolve event player ids.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RosterSpot {
    #[serde(rename = "teamId", default)]
    pub team_id: i64,
    #[serde(rename = "playerId", default)]
    pub player_id: i64,
    #[serde(rename = "firstName", default)]
    pub first_name: LocalizedName,
    #[serde(rename = "lastName", default)]
    pub last_name: LocalizedName,
    #[serde(rename = "sweaterNumber", default)]
    pub sweater_number: i32,
    #[serde(rename = "positionCode", default)]
    pub position_code: String,
    #[serde(default)]
    pub headshot: String,
}

/// Event detail payload. Which fields are present depends on the event type.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_owner_team_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_coord: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_coord: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shot_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shooting_player_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goalie_in_net_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocking_player_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hitting_player_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hittee_player_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winning_player_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub losing_player_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub committed_by_player_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drawn_by_player_id: Option<i64>,
    #[serde(rename = "awaySOG", default, skip_serializing_if = "Option::is_none")]
    pub away_sog: Option<i32>,
    #[serde(rename = "homeSOG", default, skip_serializing_if = "Option::is_none")]
    pub home_sog: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring_player_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring_player_total: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assist1_player_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assist1_player_total: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assist2_player_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assist2_player_total: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PlayEvent {
    #[serde(rename = "eventId", default)]
    pub event_id: i64,
    #[serde(rename = "periodDescriptor", default)]
    pub period_descriptor: PeriodDescriptor,
    #[serde(rename = "timeInPeriod", default)]
    pub time_in_period: String,
    #[serde(rename = "timeRemaining", default)]
    pub time_remaining: String,
    #[serde(rename = "situationCode", default)]
    pub situation_code: String,
    #[serde(rename = "typeCode", default)]
    pub type_code: i32,
    #[serde(rename = "typeDescKey", default)]
    pub type_desc_key: String,
    #[serde(default)]
    pub details: EventDetails,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PlayByPlayResponse {
    #[serde(default)]
    pub plays: Vec<PlayEvent>,
    #[serde(rename = "rosterSpots", default)]
    pub roster_spots: Vec<RosterSpot>,
}

/// Narrative game summary from the game-story endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GameStoryResponse {
    pub id: i64,
    #[serde(default)]
    pub season: i32,
    #[serde(rename = "gameType", default)]
    pub game_type: i32,
    #[serde(rename = "gameDate", default)]
    pub game_date: String,
    #[serde(default)]
    pub venue: LocalizedName,
    #[serde(rename = "venueLocation", default)]
    pub venue_location: LocalizedName,
    #[serde(rename = "startTimeUTC", default)]
    pub start_time_utc: String,
    #[serde(rename = "easternUTCOffset", default)]
    pub eastern_utc_offset: String,
    #[serde(rename = "venueUTCOffset", default)]
    pub venue_utc_offset: String,
    #[serde(rename = "venueTimezone", default)]
    pub venue_timezone: String,
    #[serde(rename = "tvBroadcasts", default)]
    pub tv_broadcasts: Vec<TvBroadcast>,
    #[serde(rename = "gameState", default)]
    pub game_state: GameState,
    #[serde(rename = "gameScheduleState", default)]
    pub game_schedule_state: String,
    #[serde(rename = "homeTeam", default)]
    pub home_team: GameTeam,
    #[serde(rename = "awayTeam", default)]
    pub away_team: GameTeam,
    #[serde(rename = "shootoutInUse", default)]
    pub shootout_in_use: bool,
    #[serde(rename = "maxPeriods", default)]
    pub max_periods: i32,
    #[serde(rename = "regPeriods", default)]
    pub reg_periods: i32,
    #[serde(rename = "otInUse", default)]
    pub ot_in_use: bool,
    #[serde(rename = "tiesInUse", default)]
    pub ties_in_use: bool,
    #[serde(default)]
    pub summary: GameSummary,
    #[serde(rename = "periodDescriptor", default)]
    pub period_descriptor: PeriodDescriptor,
    #[serde(default)]
    pub clock: GameClock,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub situation: Option<GameSituation>,
}
