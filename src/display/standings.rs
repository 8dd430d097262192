use std::fmt::Write;

use super::table::{pad_right, rule};
use crate::data_fetcher::models::TeamStanding;
use crate::data_fetcher::processors::{
    rank_league, standings_by_conference, standings_by_conference_and_division,
    standings_by_division, wildcard_standings,
};

/// `W3`, `L1`, or `-` without an active streak.
pub fn format_streak(code: &str, count: i32) -> String {
    if count == 0 {
        "-".to_string()
    } else {
        format!("{code}{count}")
    }
}

/// Points percentage as a three-digit fraction, `.683`.
pub fn format_points_percentage(team: &TeamStanding) -> String {
    let thousandths = (team.computed_points_percentage() * 1000.0) as i32;
    format!(".{thousandths:03}")
}

fn stat_columns(team: &TeamStanding) -> String {
    format!(
        "{:>2}  {:>2}  {:>2}   {:>2}  {:>3}  {:>2} {:>3} {:>3}  {:>4}  {}  {:>4}  {:>5}",
        team.games_played,
        team.wins,
        team.losses,
        team.ot_losses,
        team.points,
        team.regulation_wins,
        team.goals_for,
        team.goals_against,
        team.goal_differential,
        format_points_percentage(team),
        format_streak(&team.streak_code, team.streak_count),
        team.last_ten_record().to_string()
    )
}

const SHORT_HEADER: &str = "GP   W   L  OTL  PTS  REG  GF  GA DIFF  PTS%  STRK  L10";

fn full_row(team: &TeamStanding) -> String {
    format!(
        "{} {}  {:>7}  {:>7}\n",
        pad_right(&team.team_name.default, 25),
        stat_columns(team),
        team.home_record().to_string(),
        team.away_record().to_string()
    )
}

fn ranked_table(teams: &[TeamStanding], out: &mut String) {
    let _ = writeln!(out, "{} {SHORT_HEADER}", pad_right("Team", 25));
    out.push_str(&rule('-', 90));
    out.push('\n');
    for (index, team) in teams.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>2}. {} {}",
            index + 1,
            pad_right(&team.team_name.default, 22),
            stat_columns(team)
        );
    }
}

/// Full table grouped by conference, then division, with home and road
/// records and a wildcard race per conference.
pub fn render_standings(teams: &[TeamStanding]) -> String {
    let mut out = String::new();

    for (conference, divisions) in standings_by_conference_and_division(teams) {
        let _ = writeln!(out, "\n{conference} Conference");
        out.push_str(&rule('=', conference.len() + 11));
        out.push('\n');

        let mut conference_teams = Vec::new();
        for (division, ranked) in divisions {
            let _ = writeln!(out, "\n{division} Division");
            out.push_str(&rule('-', division.len() + 9));
            out.push('\n');
            let _ = writeln!(
                out,
                "{} {SHORT_HEADER}    HOME    AWAY",
                pad_right("Team", 25)
            );
            out.push_str(&rule('-', 105));
            out.push('\n');
            for team in &ranked {
                out.push_str(&full_row(team));
            }
            conference_teams.extend(ranked);
        }

        let wildcards = wildcard_standings(&conference_teams);
        if !wildcards.is_empty() {
            out.push_str("\nWild Card\n---------\n");
            for team in wildcards {
                let _ = writeln!(
                    out,
                    "{}. {} {:>3} pts ({} GP)",
                    team.wildcard_sequence,
                    pad_right(&team.team_name.default, 23),
                    team.points,
                    team.games_played
                );
            }
        }
    }
    out
}

/// Whole league in one numbered table.
pub fn render_league_standings(teams: &[TeamStanding]) -> String {
    let mut out = String::from("\nOverall NHL Standings:\n");
    ranked_table(&rank_league(teams), &mut out);
    out
}

pub fn render_conference_standings(teams: &[TeamStanding]) -> String {
    let mut out = String::new();
    for (conference, ranked) in standings_by_conference(teams) {
        let _ = writeln!(out, "\n{conference} Conference Standings:");
        ranked_table(&ranked, &mut out);
    }
    out
}

pub fn render_division_standings(teams: &[TeamStanding]) -> String {
    let mut out = String::new();
    for (division, ranked) in standings_by_division(teams) {
        let _ = writeln!(out, "\n{division} Division Standings:");
        ranked_table(&ranked, &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;

    #[test]
    fn test_format_streak() {
        assert_eq!(format_streak("W", 3), "W3");
        assert_eq!(format_streak("L", 0), "-");
    }

    #[test]
    fn test_points_percentage_three_digits() {
        let mut team = TestDataBuilder::create_standing("Dallas Stars", 41, 15, 10);
        team.games_played = 30;
        assert_eq!(format_points_percentage(&team), ".683");

        team.games_played = 0;
        assert_eq!(format_points_percentage(&team), ".000");
    }

    #[test]
    fn test_league_table_is_ranked_and_numbered() {
        let teams = vec![
            TestDataBuilder::create_standing("Winnipeg Jets", 80, 30, 5),
            TestDataBuilder::create_standing("Colorado Avalanche", 90, 30, 5),
        ];
        let text = render_league_standings(&teams);
        let colorado = text.find(" 1. Colorado Avalanche").unwrap();
        let winnipeg = text.find(" 2. Winnipeg Jets").unwrap();
        assert!(colorado < winnipeg);
    }

    #[test]
    fn test_grouped_table_has_divisions_and_wildcards() {
        let mut teams = vec![
            TestDataBuilder::create_division_standing("Dallas Stars", "Western", "Central", 90),
            TestDataBuilder::create_division_standing("Vegas Golden Knights", "Western", "Pacific", 85),
            TestDataBuilder::create_division_standing("Boston Bruins", "Eastern", "Atlantic", 95),
        ];
        teams[1].wildcard_sequence = 1;

        let text = render_standings(&teams);
        let eastern = text.find("Eastern Conference").unwrap();
        let western = text.find("Western Conference").unwrap();
        assert!(eastern < western);
        assert!(text.contains("Central Division"));
        assert!(text.contains("HOME    AWAY"));
        assert_eq!(text.matches("Wild Card").count(), 1);
        assert!(text.contains("1. Vegas Golden Knights"));
    }

    #[test]
    fn test_conference_and_division_tables() {
        let teams = vec![
            TestDataBuilder::create_division_standing("Dallas Stars", "Western", "Central", 90),
            TestDataBuilder::create_division_standing("Boston Bruins", "Eastern", "Atlantic", 95),
        ];
        let conferences = render_conference_standings(&teams);
        assert!(conferences.contains("Eastern Conference Standings:"));
        assert!(conferences.contains("Western Conference Standings:"));

        let divisions = render_division_standings(&teams);
        assert!(divisions.contains("Atlantic Division Standings:"));
        assert!(divisions.contains("Central Division Standings:"));
    }
}
