use std::fmt::Write;

use super::table::{pad_right, rule};
use crate::data_fetcher::models::{
    BoxscoreResponse, DetailedTeam, GameDetails, GameStoryResponse, GameSummary, GoalEvent,
    PlayByPlayResponse, SkaterGameStats, StarPlayer, TeamPlayerStats,
};
use crate::data_fetcher::processors::{
    TeamTotals, describe_play, game_type_name, rank_skaters, roster_names, team_totals,
};

fn team_stats_header() -> String {
    format!(
        "{:<6} {:>3} {:>3} {:>3} {:>5} {:>4}\n",
        "Team", "G", "SOG", "HIT", "FO%", "PIM"
    )
}

fn team_stats_row(abbrev: &str, goals: i32, shots: i32, totals: &TeamTotals) -> String {
    format!(
        "{} {:>3} {:>3} {:>3} {:>4.1}% {:>4}\n",
        pad_right(abbrev, 6),
        goals,
        shots,
        totals.hits,
        totals.faceoff_pct * 100.0,
        totals.penalty_minutes
    )
}

fn format_assists(goal: &GoalEvent) -> String {
    if goal.assists.is_empty() {
        return "Unassisted".to_string();
    }
    goal.assists
        .iter()
        .map(|assist| assist.name.default.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_scoring_summary(summary: &GameSummary, out: &mut String) {
    if summary.scoring.is_empty() {
        return;
    }
    out.push_str("\nScoring Summary:\n");
    for period in summary.scoring.iter().filter(|p| !p.goals.is_empty()) {
        let _ = writeln!(out, "\nPeriod {}:", period.period_descriptor.number);
        for goal in &period.goals {
            let _ = writeln!(
                out,
                "{} - {} ({}) {}",
                goal.time_in_period,
                goal.name.default,
                goal.team_abbrev.default,
                format_assists(goal)
            );
        }
    }
}

fn render_penalty_summary(summary: &GameSummary, out: &mut String) {
    if summary.penalties.is_empty() {
        return;
    }
    out.push_str("\nPenalty Summary:\n");
    for period in summary.penalties.iter().filter(|p| !p.penalties.is_empty()) {
        let _ = writeln!(out, "\nPeriod {}:", period.period_descriptor.number);
        for penalty in &period.penalties {
            let _ = writeln!(
                out,
                "{} - {} {} ({} min) drawn by {}",
                penalty.time_in_period,
                penalty.committed_by_player,
                penalty.desc_key,
                penalty.duration,
                penalty.drawn_by
            );
        }
    }
}

fn star_line(star: &StarPlayer) -> String {
    let stats = if star.position == "G" {
        format!("Save %: {:.1}", star.save_pctg * 100.0)
    } else {
        format!("G: {}, A: {}, P: {}", star.goals, star.assists, star.points)
    };
    format!(
        "{}. {} ({}) - {} #{} - {}",
        star.star, star.name.default, star.team_abbrev, star.position, star.sweater_no, stats
    )
}

fn team_columns(away: &DetailedTeam, home: &DetailedTeam, out: &mut String) {
    let _ = writeln!(
        out,
        "\n{} {}",
        pad_right(&away.place_name.default, 20),
        home.place_name.default
    );
    let _ = writeln!(
        out,
        "{} {}",
        pad_right(&away.common_name.default, 20),
        home.common_name.default
    );
    let _ = writeln!(out, "{} {}", pad_right(&away.abbrev, 20), home.abbrev);
    let _ = writeln!(out, "{:<20} {}", away.score, home.score);
}

/// Landing summary combined with boxscore team totals: header, team
/// columns, team stats, scoring and penalty summaries and three stars.
pub fn render_game_details(game: &GameDetails, boxscore: &BoxscoreResponse) -> String {
    let mut out = String::from("\nGame Details:\n");
    let _ = writeln!(out, "Date: {}", game.game_date);
    let _ = writeln!(out, "Start Time (UTC): {}", game.start_time_utc);
    let _ = writeln!(out, "Venue: {}", game.venue.default);
    let _ = writeln!(out, "Status: {}", game.game_state);

    team_columns(&game.away_team, &game.home_team, &mut out);

    let away_totals = team_totals(&boxscore.player_by_game_stats.away_team);
    let home_totals = team_totals(&boxscore.player_by_game_stats.home_team);
    out.push_str("\nTeam Stats:\n");
    out.push_str(&team_stats_header());
    out.push_str(&team_stats_row(
        &game.away_team.abbrev,
        game.away_team.score,
        game.away_team.shots_on_goal,
        &away_totals,
    ));
    out.push_str(&team_stats_row(
        &game.home_team.abbrev,
        game.home_team.score,
        game.home_team.shots_on_goal,
        &home_totals,
    ));

    render_scoring_summary(&game.summary, &mut out);
    render_penalty_summary(&game.summary, &mut out);

    if !game.three_stars.is_empty() {
        out.push_str("\nThree Stars:\n");
        for star in &game.three_stars {
            out.push_str(&star_line(star));
            out.push('\n');
        }
    }
    out
}

fn skater_header() -> String {
    format!(
        "{:<20} {:>2} {:>2} {:>2} {:>3} {:>5} {:>3} {:>3} {:>3}\n",
        "Player", "G", "A", "P", "+/-", "TOI", "SOG", "HIT", "BLK"
    )
}

fn skater_row(player: &SkaterGameStats) -> String {
    format!(
        "{} {:>2} {:>2} {:>2} {:>3} {:>5} {:>3} {:>3} {:>3}\n",
        pad_right(&player.name.default, 20),
        player.goals,
        player.assists,
        player.points,
        player.plus_minus,
        player.toi,
        player.sog,
        player.hits,
        player.blocked_shots
    )
}

fn render_goalies(team: &TeamPlayerStats, out: &mut String) {
    for goalie in team.goalies.iter().filter(|g| g.played()) {
        let _ = writeln!(
            out,
            "{} {:>3} {:>3} {:>3.1}% {:>5} {:>7}",
            pad_right(&goalie.name.default, 20),
            goalie.goals_against,
            goalie.saves,
            goalie.save_pctg * 100.0,
            goalie.toi,
            goalie.decision.as_deref().unwrap_or("")
        );
    }
}

/// Team totals, skaters ranked by points then goals, and the goalies who
/// actually played.
pub fn render_boxscore(boxscore: &BoxscoreResponse) -> String {
    let stats = &boxscore.player_by_game_stats;
    let away_totals = team_totals(&stats.away_team);
    let home_totals = team_totals(&stats.home_team);

    let mut out = String::from("\nBoxscore Summary\n");
    out.push_str(&team_stats_header());
    out.push_str(&team_stats_row(
        &boxscore.away_team.abbrev,
        boxscore.away_team.score,
        away_totals.shots_on_goal,
        &away_totals,
    ));
    out.push_str(&team_stats_row(
        &boxscore.home_team.abbrev,
        boxscore.home_team.score,
        home_totals.shots_on_goal,
        &home_totals,
    ));

    out.push_str("\nSkater Stats:\n");
    for (abbrev, team) in [
        (&boxscore.away_team.abbrev, &stats.away_team),
        (&boxscore.home_team.abbrev, &stats.home_team),
    ] {
        let _ = writeln!(out, "\n{abbrev} Skaters:");
        out.push_str(&skater_header());
        for player in rank_skaters(team) {
            out.push_str(&skater_row(&player));
        }
    }

    out.push_str("\nGoalie Stats:\n");
    let _ = writeln!(
        out,
        "{:<20} {:>3} {:>3} {:>4} {:>5} {:>7}",
        "Player", "GA", "SV", "SV%", "TOI", "DEC"
    );
    render_goalies(&stats.away_team, &mut out);
    render_goalies(&stats.home_team, &mut out);
    out
}

/// Chronological narrative of significant plays with player names resolved.
pub fn render_play_by_play(pbp: &PlayByPlayResponse) -> String {
    if pbp.plays.is_empty() {
        return "\nNo play-by-play data available.\n".to_string();
    }

    let names = roster_names(pbp);
    let mut out = String::from("\nPlay-by-Play:\n");
    let _ = writeln!(out, "{:<6} {:<8} {:<8} {:<50}", "Period", "Time", "Remain", "Event");
    out.push_str(&rule('-', 80));
    out.push('\n');

    for play in &pbp.plays {
        let Some(description) = describe_play(play, &names) else {
            continue;
        };
        let _ = writeln!(
            out,
            "{:<6} {:<8} {:<8} {}",
            play.period_descriptor.number, play.time_in_period, play.time_remaining, description
        );
    }
    out
}

pub fn render_game_story(story: &GameStoryResponse) -> String {
    let mut out = format!(
        "\nGame Story: {} @ {}\n",
        story.away_team.name.default, story.home_team.name.default
    );
    let _ = writeln!(out, "Date: {}", story.game_date);
    let _ = writeln!(out, "Venue: {}", story.venue.default);
    let _ = writeln!(out, "Type: {}", game_type_name(story.game_type));
    let _ = writeln!(out, "Status: {}", story.game_state);
    let _ = writeln!(
        out,
        "Final: {} {}, {} {}",
        story.away_team.abbrev, story.away_team.score, story.home_team.abbrev, story.home_team.score
    );
    render_scoring_summary(&story.summary, &mut out);
    render_penalty_summary(&story.summary, &mut out);
    out
}
