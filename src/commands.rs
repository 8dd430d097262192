use std::fmt::Write;
use std::time::Duration;

use chrono::Utc;
use serde::Serialize;
use serde_json::json;
use tracing::{error, info, warn};

use crate::cli::{Args, Report};
use crate::config::Config;
use crate::constants::{cli_defaults, game_type};
use crate::data_fetcher::NhlClient;
use crate::data_fetcher::models::{PlayerSearchResult, SortOrder, StatsFilter};
use crate::data_fetcher::processors::{
    current_season_id, format_season_id, game_type_name, parse_season_id, rank_league,
    standings_by_conference, standings_by_division, today,
};
use crate::display;
use crate::error::AppError;
use crate::mcp::run_mcp_server;

/// Usage summary printed when no report flag is given.
pub const USAGE: &str = "\
Usage: nhl_stats <REPORT> [PARAMETERS]

Reports:
  --today               Today's games, earliest first
  --slate               Games for --date (default today), latest first
  --roster              Roster for team --name (default DAL)
  --player              Player search and season totals for --name
  --skater              Skater stats for --name
  --goalie              Goalie stats for --name
  --stats               Season list and recent seasons for --name
  --schedule            Season schedule for team --name, optionally --season
  --standings           Current standings
  --standings-by-date   Standings as of --date
  --league-standings    Whole league, ranked
  --conference          Ranked table per conference
  --division            Ranked table per division
  --game                Game details for --game-id
  --live                Live updates every --interval seconds
  --leaders             League leaders for --season
  --mcp                 Serve MCP tools over stdio

Add --json to print the raw response. Run with --help for every option.
";

/// Validates command line argument combinations.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.interval == 0 {
        return Err(AppError::invalid_argument(
            "interval",
            "must be at least one second",
        ));
    }
    if args.json && args.mcp {
        return Err(AppError::invalid_argument(
            "json",
            "cannot be combined with --mcp",
        ));
    }
    Ok(())
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--set-api-url, --set-log-file, --clear-log-file).
///
/// The updated config is validated before it is written.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load().await.unwrap_or_default();

    if let Some(new_url) = &args.new_api_url {
        config.api_base_url = new_url.trim_end_matches('/').to_string();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    Ok(text)
}

fn season_arg(args: &Args) -> Result<i32, AppError> {
    match args.season.as_deref().map(str::trim) {
        None | Some("") | Some("0") => Ok(0),
        Some(text) => parse_season_id(text).ok_or_else(|| {
            AppError::invalid_argument("season", format!("'{text}' is not a season like 20232024"))
        }),
    }
}

fn date_arg(args: &Args) -> String {
    args.date
        .as_deref()
        .map(str::trim)
        .filter(|date| !date.is_empty())
        .map(str::to_string)
        .unwrap_or_else(today)
}

async fn search(
    client: &NhlClient,
    name: &str,
) -> Result<Vec<PlayerSearchResult>, AppError> {
    client
        .search_player(name)
        .await
        .map_err(|e| e.with_context(format!("searching for player {name}")))
}

async fn schedule_report(
    client: &NhlClient,
    args: &Args,
    date: &str,
    order: SortOrder,
) -> Result<String, AppError> {
    let schedule = client.schedule_by_date(date, order).await?;
    if args.json {
        return to_json(&schedule);
    }
    let heading = match order {
        SortOrder::Ascending => "Games sorted by start time (earliest first - default):\n",
        SortOrder::Descending => "\nGames sorted by start time (latest first):\n",
    };
    Ok(format!("{heading}{}", display::render_games(&schedule)))
}

async fn roster_report(client: &NhlClient, args: &Args) -> Result<String, AppError> {
    let team = client
        .team_by_identifier(args.name_or(cli_defaults::TEAM))
        .await?;
    let roster = client.team_roster(&team.abbreviation).await?;
    if args.json {
        return to_json(&roster);
    }
    Ok(display::render_roster(&team, &roster))
}

async fn player_report(client: &NhlClient, args: &Args) -> Result<String, AppError> {
    let name = args.name_or(cli_defaults::PLAYER_NAME);
    let players = search(client, name).await?;
    let Some(first) = players.first() else {
        return Ok(display::render_player_matches(&players, name, "players"));
    };

    let seasons = client
        .filtered_player_stats(first.player_id, StatsFilter::default())
        .await?;
    if args.json {
        return to_json(&json!({ "players": players, "stats": seasons }));
    }

    let mut out = display::render_player_matches(&players, name, "players");
    out.push_str(&display::render_season_totals(
        &seasons,
        game_type::REGULAR_SEASON,
    ));
    Ok(out)
}

/// Skater or goalie search followed by regular season and playoff totals
/// of the first match.
async fn position_report(
    client: &NhlClient,
    args: &Args,
    goalies: bool,
) -> Result<String, AppError> {
    let (default_name, kind) = if goalies {
        (cli_defaults::GOALIE_NAME, "goalies")
    } else {
        (cli_defaults::SKATER_NAME, "skaters")
    };
    let name = args.name_or(default_name);

    let matches: Vec<PlayerSearchResult> = search(client, name)
        .await?
        .into_iter()
        .filter(|player| player.is_goalie() == goalies)
        .collect();
    let Some(first) = matches.first() else {
        return Ok(display::render_player_matches(&matches, name, kind));
    };

    let regular = client
        .filtered_player_stats(first.player_id, StatsFilter::game_type(game_type::REGULAR_SEASON))
        .await?;
    let playoffs = client
        .filtered_player_stats(first.player_id, StatsFilter::game_type(game_type::PLAYOFFS))
        .await?;
    if args.json {
        return to_json(&json!({
            "players": matches,
            "regularSeason": regular,
            "playoffs": playoffs,
        }));
    }

    let mut out = display::render_player_matches(&matches, name, kind);
    out.push_str("\nRegular Season Stats:\n");
    out.push_str(&display::render_season_totals(
        &regular,
        game_type::REGULAR_SEASON,
    ));
    out.push_str("\nPlayoff Stats:\n");
    out.push_str(&display::render_season_totals(&playoffs, game_type::PLAYOFFS));
    Ok(out)
}

/// Season list for the first match, then this season, last season and
/// last season's playoffs, then the stats REST summary report.
async fn stats_report(client: &NhlClient, args: &Args) -> Result<String, AppError> {
    let name = args.name_or(cli_defaults::STATS_NAME);
    let players = search(client, name).await?;
    let Some(player) = players.first() else {
        return Ok(display::render_player_matches(&players, name, "players"));
    };

    let all_seasons = client
        .filtered_player_stats(player.player_id, StatsFilter::default())
        .await?;

    let current = current_season_id();
    let previous = current - 10000;
    let windows = [
        (current, game_type::REGULAR_SEASON),
        (previous, game_type::REGULAR_SEASON),
        (previous, game_type::PLAYOFFS),
    ];

    if args.json {
        return to_json(&json!({ "player": player, "seasons": all_seasons }));
    }

    let mut out = format!(
        "\nShowing stats for {} {}:\n",
        player.first_name.default, player.last_name.default
    );
    out.push_str(&display::render_season_list(&all_seasons));

    for (season, kind) in windows {
        let _ = writeln!(
            out,
            "\nStats for {} {}:",
            format_season_id(season),
            game_type_name(kind)
        );
        let filter = StatsFilter::game_type(kind).with_season(season);
        match client.filtered_player_stats(player.player_id, filter).await {
            Ok(seasons) if seasons.is_empty() => out.push_str("No stats available\n"),
            Ok(seasons) => out.push_str(&display::render_season_totals(&seasons, kind)),
            Err(e) => {
                warn!("Stats for {} in {} failed: {}", player.player_id, season, e);
                let _ = writeln!(out, "Error getting stats: {e}");
            }
        }
    }

    match client
        .player_stats(player.player_id, player.is_goalie(), "summary", StatsFilter::default())
        .await
    {
        Ok(report) => out.push_str(&display::render_player_stats(&report)),
        Err(e) => warn!("Summary report for {} failed: {}", player.player_id, e),
    }
    Ok(out)
}

async fn team_schedule_report(client: &NhlClient, args: &Args) -> Result<String, AppError> {
    let season = match season_arg(args)? {
        0 => current_season_id(),
        season => season,
    };
    let team = client
        .team_by_identifier(args.name_or(cli_defaults::TEAM))
        .await?;
    let schedule = client.team_schedule(&team, season).await?;
    if args.json {
        return to_json(&schedule);
    }
    Ok(display::render_team_schedule(&team, season, &schedule))
}

async fn standings_report(
    client: &NhlClient,
    args: &Args,
    report: Report,
) -> Result<String, AppError> {
    let (heading, response) = if report == Report::StandingsByDate {
        let date = date_arg(args);
        let response = client.standings_by_date(&date).await?;
        (format!("\nNHL Standings for {date}:\n"), response)
    } else {
        (
            "\nCurrent NHL Standings:\n".to_string(),
            client.standings().await?,
        )
    };
    let teams = &response.standings;

    match report {
        Report::LeagueStandings if args.json => to_json(&rank_league(teams)),
        Report::LeagueStandings => Ok(display::render_league_standings(teams)),
        Report::Conference if args.json => to_json(&standings_by_conference(teams)),
        Report::Conference => Ok(display::render_conference_standings(teams)),
        Report::Division if args.json => to_json(&standings_by_division(teams)),
        Report::Division => Ok(display::render_division_standings(teams)),
        _ if args.json => to_json(&response),
        _ => Ok(format!("{heading}{}", display::render_standings(teams))),
    }
}

async fn game_report(client: &NhlClient, args: &Args) -> Result<String, AppError> {
    let game_id = args.game_id;
    let (details, boxscore, play_by_play) = tokio::try_join!(
        client.game_details(game_id),
        client.game_boxscore(game_id),
        client.game_play_by_play(game_id),
    )?;
    if args.json {
        return to_json(&json!({
            "details": details,
            "boxscore": boxscore,
            "playByPlay": play_by_play,
        }));
    }

    let mut out = display::render_game_details(&details, &boxscore);
    out.push_str(&display::render_boxscore(&boxscore));
    out.push_str(&display::render_play_by_play(&play_by_play));

    match client.game_story(game_id).await {
        Ok(story) => out.push_str(&display::render_game_story(&story)),
        Err(e) => warn!("No game story for {}: {}", game_id, e),
    }
    Ok(out)
}

async fn leaders_report(client: &NhlClient, args: &Args) -> Result<String, AppError> {
    let season = season_arg(args)?;
    let leaders = client.stats_leaders(season).await?;
    if args.json {
        return to_json(&leaders);
    }
    let shown = if season == 0 {
        current_season_id()
    } else {
        season
    };
    Ok(display::render_leaders(&leaders, shown))
}

/// Builds the text of a one-shot report.
///
/// `Live` and `Mcp` run until stopped and are handled by [`run_report`].
pub async fn build_report(
    client: &NhlClient,
    args: &Args,
    report: Report,
) -> Result<String, AppError> {
    match report {
        Report::Today => schedule_report(client, args, &today(), SortOrder::Ascending).await,
        Report::Slate => {
            schedule_report(client, args, &date_arg(args), SortOrder::Descending).await
        }
        Report::Roster => roster_report(client, args).await,
        Report::Player => player_report(client, args).await,
        Report::Skater => position_report(client, args, false).await,
        Report::Goalie => position_report(client, args, true).await,
        Report::Stats => stats_report(client, args).await,
        Report::Schedule => team_schedule_report(client, args).await,
        Report::Standings
        | Report::StandingsByDate
        | Report::LeagueStandings
        | Report::Conference
        | Report::Division => standings_report(client, args, report).await,
        Report::Game => game_report(client, args).await,
        Report::Leaders => leaders_report(client, args).await,
        Report::Live | Report::Mcp => Err(AppError::invalid_report_type(format!("{report:?}"))),
    }
}

/// Polls the live scoreboard until Ctrl-C. A failed poll is logged and
/// retried on the next tick.
pub async fn handle_live_command(client: &NhlClient, args: &Args) -> Result<(), AppError> {
    let interval = Duration::from_secs(args.interval);
    info!("Live updates every {}s", args.interval);

    loop {
        match client.live_scoreboard().await {
            Ok(scoreboard) if args.json => print!("{}", to_json(&scoreboard)?),
            Ok(scoreboard) => {
                println!("\nLive update at {}", Utc::now().format("%H:%M:%S UTC"));
                print!("{}", display::render_live(&scoreboard, Utc::now()));
            }
            Err(e) => error!("Live update failed: {}", e),
        }

        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            _ = tokio::signal::ctrl_c() => {
                info!("Live updates stopped");
                return Ok(());
            }
        }
    }
}

/// Runs `report` against a client built from `config` and prints the result.
pub async fn run_report(report: Report, args: &Args, config: &Config) -> Result<(), AppError> {
    let client = NhlClient::new(config)?;
    match report {
        Report::Mcp => run_mcp_server(client).await,
        Report::Live => handle_live_command(&client, args).await,
        _ => {
            let text = build_report(&client, args, report).await?;
            print!("{text}");
            Ok(())
        }
    }
}
