use super::common::{LocalizedName, Record};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TeamAbbrev {
    #[serde(default)]
    pub default: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub french: Option<String>,
}

/// One team's row in the league table.
///
/// `points == wins * 2 + ot_losses` holds for valid upstream data but is
/// not enforced here.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TeamStanding {
    #[serde(rename = "teamName", default)]
    pub team_name: LocalizedName,
    #[serde(rename = "teamAbbrev", default)]
    pub team_abbrev: TeamAbbrev,
    #[serde(rename = "conferenceName", default)]
    pub conference: String,
    #[serde(rename = "divisionName", default)]
    pub division: String,
    #[serde(default)]
    pub wins: i32,
    #[serde(default)]
    pub losses: i32,
    #[serde(rename = "otLosses", default)]
    pub ot_losses: i32,
    #[serde(rename = "regulationWins", default)]
    pub regulation_wins: i32,
    #[serde(default)]
    pub points: i32,
    #[serde(rename = "gamesPlayed", default)]
    pub games_played: i32,
    #[serde(rename = "goalFor", default)]
    pub goals_for: i32,
    #[serde(rename = "goalAgainst", default)]
    pub goals_against: i32,
    #[serde(rename = "goalDifferential", default)]
    pub goal_differential: i32,
    #[serde(rename = "streakCode", default)]
    pub streak_code: String,
    #[serde(rename = "streakCount", default)]
    pub streak_count: i32,
    #[serde(rename = "homeGamesPlayed", default)]
    pub home_games_played: i32,
    #[serde(rename = "homeWins", default)]
    pub home_wins: i32,
    #[serde(rename = "homeLosses", default)]
    pub home_losses: i32,
    #[serde(rename = "homeOtLosses", default)]
    pub home_ot_losses: i32,
    #[serde(rename = "homePoints", default)]
    pub home_points: i32,
    #[serde(rename = "l10GamesPlayed", default)]
    pub l10_games_played: i32,
    #[serde(rename = "l10Wins", default)]
    pub l10_wins: i32,
    #[serde(rename = "l10Losses", default)]
    pub l10_losses: i32,
    #[serde(rename = "l10OtLosses", default)]
    pub l10_ot_losses: i32,
    #[serde(rename = "l10Points", default)]
    pub l10_points: i32,
    #[serde(rename = "leagueSequence", default)]
    pub league_sequence: i32,
    #[serde(rename = "conferenceSequence", default)]
    pub conference_sequence: i32,
    #[serde(rename = "divisionSequence", default)]
    pub division_sequence: i32,
    /// Rank among non-division-leading teams of the conference; 0 when
    /// the team is not wildcard-eligible.
    #[serde(rename = "wildcardSequence", default)]
    pub wildcard_sequence: i32,
    #[serde(rename = "pointsPercentage", default)]
    pub points_percentage: f64,
}

impl TeamStanding {
    pub fn home_record(&self) -> Record {
        Record {
            wins: self.home_wins,
            losses: self.home_losses,
            ot_losses: self.home_ot_losses,
        }
    }

    /// Road record, derived as the overall record minus the home record.
    pub fn away_record(&self) -> Record {
        Record {
            wins: self.wins - self.home_wins,
            losses: self.losses - self.home_losses,
            ot_losses: self.ot_losses - self.home_ot_losses,
        }
    }

    pub fn last_ten_record(&self) -> Record {
        Record {
            wins: self.l10_wins,
            losses: self.l10_losses,
            ot_losses: self.l10_ot_losses,
        }
    }

    /// Share of available points earned, `points / (games_played * 2)`.
    /// Zero before the first game.
    pub fn computed_points_percentage(&self) -> f64 {
        if self.games_played <= 0 {
            return 0.0;
        }
        f64::from(self.points) / f64::from(self.games_played * 2)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StandingsResponse {
    #[serde(default)]
    pub standings: Vec<TeamStanding>,
}
