use std::fmt::Write;

use crate::data_fetcher::models::{
    GoalieStatsResponse, PlayerSearchResult, PlayerStats, SeasonTotal, SkaterStatsResponse,
};
use crate::data_fetcher::processors::{format_season_id, format_time_on_ice, game_type_name};

fn per_game(total: i32, games: i32) -> f64 {
    if games > 0 {
        f64::from(total) / f64::from(games)
    } else {
        0.0
    }
}

/// Numbered list of search matches, e.g. `1. Jason Robertson (#21) - DAL L`.
/// `kind` names what was searched for (`players`, `skaters`, `goalies`).
pub fn render_player_matches(matches: &[PlayerSearchResult], query: &str, kind: &str) -> String {
    if matches.is_empty() {
        return format!("No {kind} found matching '{query}'\n");
    }

    let mut out = format!("\nFound {} {kind} matching '{query}':\n", matches.len());
    for (index, player) in matches.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} {} (#{}) - {} {}",
            index + 1,
            player.first_name.default,
            player.last_name.default,
            player.jersey_number,
            player.team_abbrev,
            player.position
        );
    }
    out
}

/// Newest season in detail plus career totals across all given seasons.
/// `seasons` is expected newest first, as `filtered_player_stats` returns it.
pub fn render_season_totals(seasons: &[SeasonTotal], game_type: i32) -> String {
    let Some(current) = seasons.first() else {
        return "No stats available\n".to_string();
    };
    let type_name = game_type_name(game_type);

    let mut out = format!(
        "\nStats for {} ({}):\n",
        current.team_name.default,
        format_season_id(current.season)
    );
    let _ = writeln!(out, "Game Type: {type_name}");

    out.push_str("\nCurrent Season Stats:\n");
    let _ = writeln!(out, "Games Played: {}", current.games_played);
    let _ = writeln!(out, "Goals: {}", current.goals);
    let _ = writeln!(out, "Assists: {}", current.assists);
    let _ = writeln!(
        out,
        "Points: {} ({:.2} per game)",
        current.points,
        per_game(current.points, current.games_played)
    );
    let _ = writeln!(out, "Plus/Minus: {}", current.plus_minus);
    let _ = writeln!(out, "PIM: {}", current.penalty_minutes);

    out.push_str("\nScoring Breakdown:\n");
    let _ = writeln!(out, "Power Play Goals: {}", current.power_play_goals);
    let _ = writeln!(out, "Power Play Points: {}", current.power_play_points);
    let _ = writeln!(out, "Short Handed Goals: {}", current.shorthanded_goals);
    let _ = writeln!(out, "Short Handed Points: {}", current.shorthanded_points);
    let _ = writeln!(out, "Game Winners: {}", current.game_winning_goals);
    let _ = writeln!(out, "Overtime Goals: {}", current.ot_goals);

    out.push_str("\nShooting:\n");
    let _ = writeln!(out, "Shots: {}", current.shots);
    let _ = writeln!(
        out,
        "Shooting %: {:.1}",
        current.shooting_pctg.unwrap_or_default() * 100.0
    );
    let _ = writeln!(
        out,
        "TOI/Game: {}",
        current.avg_toi.as_deref().unwrap_or("-")
    );
    if let Some(faceoffs) = current.faceoff_winning_pctg.filter(|pct| *pct > 0.0) {
        let _ = writeln!(out, "Faceoff Win %: {:.1}", faceoffs * 100.0);
    }

    if seasons.len() > 1 {
        let games: i32 = seasons.iter().map(|s| s.games_played).sum();
        let goals: i32 = seasons.iter().map(|s| s.goals).sum();
        let assists: i32 = seasons.iter().map(|s| s.assists).sum();
        let points: i32 = seasons.iter().map(|s| s.points).sum();

        let _ = writeln!(
            out,
            "\nCareer {type_name} Totals ({} seasons):",
            seasons.len()
        );
        let _ = writeln!(out, "Games: {games}");
        let _ = writeln!(out, "Goals: {goals}");
        let _ = writeln!(out, "Assists: {assists}");
        let _ = writeln!(
            out,
            "Points: {points} ({:.2} per game)",
            per_game(points, games)
        );
    }
    out
}

/// One line per NHL season: `- 2023-2024 (Regular Season): 82 games played, ...`
pub fn render_season_list(seasons: &[SeasonTotal]) -> String {
    let mut out = String::from("\nAvailable NHL Seasons:\n");
    for season in seasons {
        let _ = writeln!(
            out,
            "- {} ({}): {} games played, {} goals, {} points",
            format_season_id(season.season),
            game_type_name(season.game_type_id),
            season.games_played,
            season.goals,
            season.points
        );
    }
    out
}

fn render_skater_report(stats: &SkaterStatsResponse) -> String {
    let mut rows: Vec<_> = stats.data.iter().collect();
    rows.sort_by(|a, b| b.season_id.cmp(&a.season_id));
    let Some(current) = rows.first() else {
        return "No stats available\n".to_string();
    };

    let mut out = format!(
        "\nStats for {} ({}):\n",
        current.full_name,
        format_season_id(current.season_id)
    );
    let _ = writeln!(out, "Team: {}", current.team_abbrevs);
    let _ = writeln!(out, "Position: {}", current.position_code);
    let _ = writeln!(out, "Shoots/Catches: {}", current.shoots_catches);

    out.push_str("\nCurrent Season Stats:\n");
    let _ = writeln!(out, "Games Played: {}", current.games_played);
    let _ = writeln!(out, "Goals: {}", current.goals);
    let _ = writeln!(out, "Assists: {}", current.assists);
    let _ = writeln!(
        out,
        "Points: {} ({:.2} per game)",
        current.points, current.points_per_game
    );
    let _ = writeln!(out, "Plus/Minus: {}", current.plus_minus);
    let _ = writeln!(out, "PIM: {}", current.penalty_minutes);

    out.push_str("\nScoring Breakdown:\n");
    let _ = writeln!(
        out,
        "Even Strength: {} goals, {} points",
        current.even_strength_goals, current.even_strength_points
    );
    let _ = writeln!(
        out,
        "Power Play: {} goals, {} points",
        current.power_play_goals, current.power_play_points
    );
    let _ = writeln!(
        out,
        "Short Handed: {} goals, {} points",
        current.short_handed_goals, current.short_handed_points
    );
    let _ = writeln!(out, "Game Winners: {}", current.game_winning_goals);
    let _ = writeln!(out, "Overtime Goals: {}", current.overtime_goals);

    out.push_str("\nShooting:\n");
    let _ = writeln!(out, "Shots: {}", current.shots);
    let _ = writeln!(
        out,
        "Shooting %: {:.1}",
        current.shooting_pct.unwrap_or_default() * 100.0
    );
    let _ = writeln!(
        out,
        "TOI/Game: {}",
        format_time_on_ice(current.time_on_ice_per_game as i64)
    );
    if let Some(faceoffs) = current.faceoff_win_pct.filter(|pct| *pct > 0.0) {
        let _ = writeln!(out, "Faceoff Win %: {:.1}", faceoffs * 100.0);
    }

    if rows.len() > 1 {
        let games: i32 = rows.iter().map(|s| s.games_played).sum();
        let goals: i32 = rows.iter().map(|s| s.goals).sum();
        let assists: i32 = rows.iter().map(|s| s.assists).sum();
        let points: i32 = rows.iter().map(|s| s.points).sum();
        let _ = writeln!(out, "\nCareer Totals ({} seasons):", rows.len());
        let _ = writeln!(out, "Games: {games}");
        let _ = writeln!(out, "Goals: {goals}");
        let _ = writeln!(out, "Assists: {assists}");
        let _ = writeln!(
            out,
            "Points: {points} ({:.2} per game)",
            per_game(points, games)
        );
    }
    out
}

fn render_goalie_report(stats: &GoalieStatsResponse) -> String {
    let mut rows: Vec<_> = stats.data.iter().collect();
    rows.sort_by(|a, b| b.season_id.cmp(&a.season_id));
    let Some(current) = rows.first() else {
        return "No stats available\n".to_string();
    };

    let mut out = format!(
        "\nStats for {} ({}):\n",
        current.full_name,
        format_season_id(current.season_id)
    );
    let _ = writeln!(out, "Team: {}", current.team_abbrevs);
    let _ = writeln!(out, "Catches: {}", current.shoots_catches);

    out.push_str("\nCurrent Season Stats:\n");
    let _ = writeln!(out, "Games Played: {}", current.games_played);
    let _ = writeln!(out, "Games Started: {}", current.games_started);
    let _ = writeln!(
        out,
        "Record: {}-{}-{}",
        current.wins, current.losses, current.overtime_losses
    );
    let _ = writeln!(
        out,
        "Goals Against Average: {:.2}",
        current.goals_against_average
    );
    let _ = writeln!(out, "Save Percentage: {:.3}", current.save_pct);
    let _ = writeln!(out, "Shutouts: {}", current.shutouts);

    out.push_str("\nDetailed Stats:\n");
    let _ = writeln!(out, "Shots Against: {}", current.shots_against);
    let _ = writeln!(out, "Saves: {}", current.saves);
    let _ = writeln!(out, "Goals Against: {}", current.goals_against);
    let _ = writeln!(out, "Time on Ice: {}", format_time_on_ice(current.time_on_ice));

    if current.points > 0 {
        out.push_str("\nScoring:\n");
        let _ = writeln!(out, "Goals: {}", current.goals);
        let _ = writeln!(out, "Assists: {}", current.assists);
        let _ = writeln!(out, "Points: {}", current.points);
    }

    if rows.len() > 1 {
        let games: i32 = rows.iter().map(|s| s.games_played).sum();
        let wins: i32 = rows.iter().map(|s| s.wins).sum();
        let losses: i32 = rows.iter().map(|s| s.losses).sum();
        let ot_losses: i32 = rows.iter().map(|s| s.overtime_losses).sum();
        let shots: i32 = rows.iter().map(|s| s.shots_against).sum();
        let saves: i32 = rows.iter().map(|s| s.saves).sum();
        let goals_against: i32 = rows.iter().map(|s| s.goals_against).sum();
        let shutouts: i32 = rows.iter().map(|s| s.shutouts).sum();
        let toi: i64 = rows.iter().map(|s| s.time_on_ice).sum();

        let save_pct = if shots > 0 {
            f64::from(saves) / f64::from(shots)
        } else {
            0.0
        };
        let gaa = if toi > 0 {
            f64::from(goals_against) * 3600.0 / toi as f64
        } else {
            0.0
        };

        let _ = writeln!(out, "\nCareer Totals ({} seasons):", rows.len());
        let _ = writeln!(out, "Games Played: {games}");
        let _ = writeln!(out, "Record: {wins}-{losses}-{ot_losses}");
        let _ = writeln!(out, "Save Percentage: {save_pct:.3}");
        let _ = writeln!(out, "Goals Against Average: {gaa:.2}");
        let _ = writeln!(out, "Shutouts: {shutouts}");
    }
    out
}

/// Stats REST report for a skater or a goalie.
pub fn render_player_stats(stats: &PlayerStats) -> String {
    match stats {
        PlayerStats::Skater(skater) => render_skater_report(skater),
        PlayerStats::Goalie(goalie) => render_goalie_report(goalie),
    }
}
