use super::common::LocalizedName;
use serde::{Deserialize, Serialize};

/// Team directory entry.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TeamInfo {
    pub id: i64,
    pub name: LocalizedName,
    pub abbreviation: String,
    pub city: LocalizedName,
    #[serde(rename = "triCode")]
    pub tri_code: String,
    #[serde(rename = "franchiseId", default)]
    pub franchise_id: i64,
    #[serde(default)]
    pub active: bool,
}

impl TeamInfo {
    /// True if `identifier` names this team by abbreviation, tricode or
    /// full name, ignoring case.
    pub fn matches_name(&self, identifier: &str) -> bool {
        self.abbreviation.eq_ignore_ascii_case(identifier)
            || self.tri_code.eq_ignore_ascii_case(identifier)
            || self.name.default.to_lowercase() == identifier.to_lowercase()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TeamsResponse {
    pub teams: Vec<TeamInfo>,
}

/// A player on a current roster.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PlayerInfo {
    pub id: i64,
    #[serde(rename = "firstName", default)]
    pub first_name: LocalizedName,
    #[serde(rename = "lastName", default)]
    pub last_name: LocalizedName,
    #[serde(rename = "positionCode", default)]
    pub position: String,
    #[serde(rename = "sweaterNumber", default)]
    pub jersey_number: i32,
    #[serde(rename = "heightInInches", default)]
    pub height_in_inches: i32,
    #[serde(rename = "weightInPounds", default)]
    pub weight_in_pounds: i32,
    #[serde(rename = "birthDate", default)]
    pub birth_date: String,
    #[serde(rename = "birthCity", default)]
    pub birth_city: LocalizedName,
    #[serde(rename = "birthCountry", default)]
    pub birth_country: String,
    #[serde(
        rename = "birthStateProvince",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub birth_state_province: Option<LocalizedName>,
    #[serde(rename = "shootsCatches", default)]
    pub shoots_catches: String,
    #[serde(default)]
    pub headshot: String,
}

impl PlayerInfo {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.default, self.last_name.default)
    }

    /// Case-insensitive substring match on first, last or full name.
    /// `query` must already be lowercase.
    pub fn matches_query(&self, query: &str) -> bool {
        let first = self.first_name.default.to_lowercase();
        let last = self.last_name.default.to_lowercase();
        let full = format!("{first} {last}");

        first.contains(query) || last.contains(query) || full.contains(query)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RosterResponse {
    #[serde(default)]
    pub forwards: Vec<PlayerInfo>,
    #[serde(default)]
    pub defensemen: Vec<PlayerInfo>,
    #[serde(default)]
    pub goalies: Vec<PlayerInfo>,
}

/// A roster player matched by name search, tagged with their team.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PlayerSearchResult {
    #[serde(rename = "firstName")]
    pub first_name: LocalizedName,
    #[serde(rename = "lastName")]
    pub last_name: LocalizedName,
    pub position: String,
    #[serde(rename = "jerseyNumber")]
    pub jersey_number: i32,
    #[serde(rename = "teamId")]
    pub team_id: i64,
    #[serde(rename = "teamAbbrev")]
    pub team_abbrev: String,
    #[serde(rename = "playerId")]
    pub player_id: i64,
}

impl PlayerSearchResult {
    pub fn from_roster_entry(player: &PlayerInfo, team: &TeamInfo) -> Self {
        Self {
            first_name: player.first_name.clone(),
            last_name: player.last_name.clone(),
            position: player.position.clone(),
            jersey_number: player.jersey_number,
            team_id: team.id,
            team_abbrev: team.abbreviation.clone(),
            player_id: player.id,
        }
    }

    pub fn is_goalie(&self) -> bool {
        self.position == "G"
    }
}
