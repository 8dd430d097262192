use std::fmt::Write;

use crate::data_fetcher::models::{PlayerInfo, RosterResponse, TeamInfo};

fn render_group(title: &str, players: &[PlayerInfo], out: &mut String) {
    if players.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{title}:");
    for player in players {
        let _ = writeln!(
            out,
            "#{} {} - {}",
            player.jersey_number,
            player.full_name(),
            player.position
        );
    }
}

/// Current roster by position group.
pub fn render_roster(team: &TeamInfo, roster: &RosterResponse) -> String {
    let mut out = format!("\n{} ({}) Roster\n", team.name.default, team.abbreviation);
    render_group("Forwards", &roster.forwards, &mut out);
    render_group("Defensemen", &roster.defensemen, &mut out);
    render_group("Goalies", &roster.goalies, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::LocalizedName;

    #[test]
    fn test_roster_groups() {
        let team = TeamInfo {
            name: LocalizedName::new("Dallas Stars"),
            abbreviation: "DAL".to_string(),
            ..TeamInfo::default()
        };
        let roster = RosterResponse {
            forwards: vec![PlayerInfo {
                first_name: LocalizedName::new("Roope"),
                last_name: LocalizedName::new("Hintz"),
                position: "C".to_string(),
                jersey_number: 24,
                ..PlayerInfo::default()
            }],
            defensemen: vec![],
            goalies: vec![PlayerInfo {
                first_name: LocalizedName::new("Jake"),
                last_name: LocalizedName::new("Oettinger"),
                position: "G".to_string(),
                jersey_number: 29,
                ..PlayerInfo::default()
            }],
        };

        let text = render_roster(&team, &roster);
        assert!(text.starts_with("\nDallas Stars (DAL) Roster\n"));
        assert!(text.contains("Forwards:\n#24 Roope Hintz - C"));
        assert!(!text.contains("Defensemen"));
        assert!(text.contains("Goalies:\n#29 Jake Oettinger - G"));
    }
}
