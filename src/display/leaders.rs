use std::fmt::Write;

use super::table::{pad_right, rule};
use crate::data_fetcher::models::{LeaderValueKind, StatsLeaderPlayer, StatsLeadersResponse};
use crate::data_fetcher::processors::format_season_id;

/// Column label per category, in `StatsLeadersResponse::categories` order.
const COLUMN_LABELS: [&str; 9] = ["PTS", "G", "A", "PPG", "SHG", "+/-", "FO%", "TOI", "PIM"];

fn value_cell(kind: LeaderValueKind, value: f64) -> String {
    match kind {
        LeaderValueKind::Count => format!("{value:>3.0}"),
        LeaderValueKind::Percentage => format!("{:>5.1}", value * 100.0),
        LeaderValueKind::TimeOnIce => {
            let seconds = value as i64;
            format!("{:02}:{:02}", seconds / 60, seconds % 60)
        }
    }
}

fn render_category(
    title: &str,
    label: &str,
    kind: LeaderValueKind,
    players: &[StatsLeaderPlayer],
    out: &mut String,
) {
    let (label_cell, width) = match kind {
        LeaderValueKind::Count => (format!("{label:>3}"), 45),
        LeaderValueKind::Percentage => (format!("{label:>5}"), 47),
        LeaderValueKind::TimeOnIce => (format!("{label:>8}"), 50),
    };

    let _ = writeln!(out, "\n{title} Leaders");
    let _ = writeln!(out, "{} {:<15} {label_cell}", pad_right("Player", 25), "Team");
    out.push_str(&rule('-', width));
    out.push('\n');
    for player in players {
        let _ = writeln!(
            out,
            "{} {:<15} {}",
            pad_right(&player.full_name(), 25),
            player.team_abbrev,
            value_cell(kind, player.value)
        );
    }
}

/// Nine leaderboards for the season `season_id`.
pub fn render_leaders(leaders: &StatsLeadersResponse, season_id: i32) -> String {
    let mut out = format!("\nNHL Stats Leaders ({})\n", format_season_id(season_id));
    out.push_str(&rule('=', 16));
    out.push('\n');

    for ((title, kind, players), label) in leaders.categories().into_iter().zip(COLUMN_LABELS) {
        render_category(title, label, kind, players, &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::LocalizedName;

    fn leader(first: &str, last: &str, team: &str, value: f64) -> StatsLeaderPlayer {
        StatsLeaderPlayer {
            first_name: LocalizedName::new(first),
            last_name: LocalizedName::new(last),
            team_abbrev: team.to_string(),
            value,
            ..StatsLeaderPlayer::default()
        }
    }

    #[test]
    fn test_value_cells() {
        assert_eq!(value_cell(LeaderValueKind::Count, 132.0), "132");
        assert_eq!(value_cell(LeaderValueKind::Percentage, 0.612), " 61.2");
        assert_eq!(value_cell(LeaderValueKind::TimeOnIce, 1645.0), "27:25");
    }

    #[test]
    fn test_render_leaders_sections_in_order() {
        let leaders = StatsLeadersResponse {
            points: vec![leader("Nikita", "Kucherov", "TBL", 144.0)],
            faceoff_leaders: vec![leader("Sam", "Gagner", "EDM", 0.612)],
            toi: vec![leader("Thomas", "Chabot", "OTT", 1645.0)],
            ..StatsLeadersResponse::default()
        };
        let text = render_leaders(&leaders, 20232024);

        assert!(text.starts_with("\nNHL Stats Leaders (2023-2024)\n"));
        let points = text.find("Points Leaders").unwrap();
        let penalties = text.find("Penalty Minutes Leaders").unwrap();
        assert!(points < penalties);
        assert!(text.contains("Nikita Kucherov"));
        assert!(text.contains(" 61.2"));
        assert!(text.contains("27:25"));
        assert_eq!(text.matches(" Leaders\n").count(), 9);
    }
}
