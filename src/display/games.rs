use std::fmt::Write;

use chrono::{DateTime, Utc};

use super::table::rule;
use crate::data_fetcher::models::{
    FilteredScoreboardResponse, Game, GameState, ScoreboardResponse, TeamInfo,
    TeamScheduleResponse,
};
use crate::data_fetcher::processors::{format_game_time, format_season_id, select_active_games, status_text};

/// Slate of one date: matchup, start time and score or state per game.
pub fn render_games(schedule: &FilteredScoreboardResponse) -> String {
    let mut display_date = schedule.date.clone();
    if display_date.is_empty() {
        if let Some(start) = schedule
            .games
            .first()
            .and_then(|game| DateTime::parse_from_rfc3339(&game.start_time_utc).ok())
        {
            display_date = start.format("%Y-%m-%d").to_string();
        }
    }

    let mut out = format!("\nGames for {display_date}:\n");
    if schedule.games.is_empty() {
        out.push_str("No games scheduled.\n");
        return out;
    }
    for game in &schedule.games {
        out.push_str(&render_game_line(game));
    }
    out
}

fn render_game_line(game: &Game) -> String {
    let away = &game.away_team.name.default;
    let home = &game.home_team.name.default;

    let mut out = match format_game_time(&game.start_time_utc) {
        Ok(time) => format!("{away} at {home} - {time}\n"),
        Err(e) => format!("{away} at {home} - start time unavailable ({e})\n"),
    };

    let state = game.game_state;
    if state.is_live() || state.is_finished() {
        let _ = writeln!(
            out,
            "Score: {away} {}, {home} {}",
            game.away_team.score, game.home_team.score
        );
        if state.is_live() {
            let _ = writeln!(
                out,
                "Period: {} ({})",
                game.period_descriptor.number.max(game.period),
                game.period_descriptor.period_type
            );
        }
    } else {
        let _ = writeln!(out, "Game Status: {state}");
    }
    out.push('\n');
    out
}

/// A club's season as `date: vs OPP` (home) or `date: @ OPP` (road) lines.
pub fn render_team_schedule(
    team: &TeamInfo,
    season: i32,
    schedule: &TeamScheduleResponse,
) -> String {
    let mut out = format!(
        "Schedule for {} ({}):\n",
        team.name.default,
        format_season_id(season)
    );

    for game in &schedule.games {
        let date = match DateTime::parse_from_rfc3339(&game.start_time_utc) {
            Ok(start) => start.with_timezone(&Utc).format("%Y-%m-%d").to_string(),
            Err(_) if !game.game_date.is_empty() => game.game_date.clone(),
            Err(_) => continue,
        };

        let (location, opponent) = if game.home_team.abbreviation == team.abbreviation {
            ("vs", &game.away_team.abbreviation)
        } else {
            ("@", &game.home_team.abbreviation)
        };
        let _ = writeln!(out, "{date}: {location} {opponent}");
    }
    out
}

/// Live view of the games that are in progress, recently finished or about
/// to start at `now`.
pub fn render_live(scoreboard: &ScoreboardResponse, now: DateTime<Utc>) -> String {
    if scoreboard.games_by_date.is_empty() {
        return "No games found\n".to_string();
    }

    let active = select_active_games(scoreboard, now);
    if active.is_empty() {
        return "\nNo active games at the moment.\nCheck back later for live game updates!\n"
            .to_string();
    }

    let mut out = String::new();
    for group in active {
        let _ = writeln!(out, "\nGames for {}:", group.date);
        out.push_str(&rule('-', 80));
        out.push('\n');

        for game in group.games {
            let away = &game.away_team;
            let home = &game.home_team;
            let _ = writeln!(
                out,
                "\n{} @ {} - {}",
                away.name.default,
                home.name.default,
                status_text(game)
            );
            let _ = writeln!(
                out,
                "Score: {} {}, {} {}",
                away.abbrev, away.score, home.abbrev, home.score
            );

            if matches!(game.game_state, GameState::Live | GameState::Critical) {
                let _ = writeln!(
                    out,
                    "Shots on Goal: {} {}, {} {}",
                    away.abbrev, away.shots_on_goal, home.abbrev, home.shots_on_goal
                );
                if let Some(situation) = game
                    .situation
                    .as_ref()
                    .filter(|s| !s.home_team.situation_descriptions.is_empty())
                {
                    let _ = writeln!(
                        out,
                        "Situation: {} {}",
                        situation.home_team.abbrev,
                        situation.home_team.situation_descriptions.join(", ")
                    );
                }
            }

            out.push_str(&rule('-', 40));
            out.push('\n');
        }
    }
    out
}
