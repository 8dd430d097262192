use super::common::LocalizedName;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StatsLeaderPlayer {
    pub id: i64,
    #[serde(rename = "firstName", default)]
    pub first_name: LocalizedName,
    #[serde(rename = "lastName", default)]
    pub last_name: LocalizedName,
    #[serde(rename = "sweaterNumber", default)]
    pub sweater_number: i32,
    #[serde(default)]
    pub headshot: String,
    #[serde(rename = "teamAbbrev", default)]
    pub team_abbrev: String,
    #[serde(rename = "teamName", default)]
    pub team_name: LocalizedName,
    #[serde(rename = "teamLogo", default)]
    pub team_logo: String,
    #[serde(default)]
    pub position: String,
    /// Category value. Faceoffs are a fraction, time on ice is seconds.
    #[serde(default)]
    pub value: f64,
}

impl StatsLeaderPlayer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.default, self.last_name.default)
    }
}

/// Skater leaderboards for one season, one list per category.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StatsLeadersResponse {
    #[serde(rename = "goalsSh", default)]
    pub goals_sh: Vec<StatsLeaderPlayer>,
    #[serde(rename = "plusMinus", default)]
    pub plus_minus: Vec<StatsLeaderPlayer>,
    #[serde(default)]
    pub assists: Vec<StatsLeaderPlayer>,
    #[serde(rename = "goalsPp", default)]
    pub goals_pp: Vec<StatsLeaderPlayer>,
    #[serde(rename = "faceoffLeaders", default)]
    pub faceoff_leaders: Vec<StatsLeaderPlayer>,
    #[serde(rename = "penaltyMins", default)]
    pub penalty_mins: Vec<StatsLeaderPlayer>,
    #[serde(default)]
    pub goals: Vec<StatsLeaderPlayer>,
    #[serde(default)]
    pub points: Vec<StatsLeaderPlayer>,
    #[serde(default)]
    pub toi: Vec<StatsLeaderPlayer>,
}

/// How a leaderboard value should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaderValueKind {
    Count,
    Percentage,
    TimeOnIce,
}

impl StatsLeadersResponse {
    /// Categories in display order with their titles.
    pub fn categories(&self) -> [(&'static str, LeaderValueKind, &[StatsLeaderPlayer]); 9] {
        [
            ("Points", LeaderValueKind::Count, &self.points),
            ("Goals", LeaderValueKind::Count, &self.goals),
            ("Assists", LeaderValueKind::Count, &self.assists),
            ("Power Play Goals", LeaderValueKind::Count, &self.goals_pp),
            ("Short Handed Goals", LeaderValueKind::Count, &self.goals_sh),
            ("Plus/Minus", LeaderValueKind::Count, &self.plus_minus),
            (
                "Faceoff Percentage",
                LeaderValueKind::Percentage,
                &self.faceoff_leaders,
            ),
            ("Time On Ice", LeaderValueKind::TimeOnIce, &self.toi),
            ("Penalty Minutes", LeaderValueKind::Count, &self.penalty_mins),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaders_decode_and_categories_order() {
        let leaders: StatsLeadersResponse = serde_json::from_str(
            r#"{"points":[{"id":8478402,"firstName":{"default":"Connor"},
                "lastName":{"default":"McDavid"},"teamAbbrev":"EDM","position":"C","value":132}],
                "faceoffLeaders":[{"id":1,"value":0.612}]}"#,
        )
        .unwrap();

        let categories = leaders.categories();
        assert_eq!(categories[0].0, "Points");
        assert_eq!(categories[0].2[0].full_name(), "Connor McDavid");
        assert_eq!(categories[6].1, LeaderValueKind::Percentage);
        assert!(categories[1].2.is_empty());
    }
}
