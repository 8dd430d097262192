//! Tool catalogue for the MCP server and the glue from JSON arguments to
//! `NhlClient` calls.

use serde::Serialize;
use serde_json::{Map, Value, json};
use tracing::info;

use crate::data_fetcher::NhlClient;
use crate::data_fetcher::models::{PlayerSearchResult, SeasonTotal, SortOrder, StatsFilter};
use crate::data_fetcher::processors::{
    current_season_id, parse_season_id, standings_by_conference, standings_by_division, today,
};
use crate::error::AppError;

pub const SLATE: &str = "nhl-slate";
pub const PLAYER: &str = "nhl-player";
pub const STANDINGS: &str = "nhl-standings";
pub const ROSTER: &str = "nhl-roster";
pub const SCHEDULE: &str = "nhl-schedule";
pub const LEADERS: &str = "nhl-leaders";

pub const TOOL_NAMES: [&str; 6] = [SLATE, PLAYER, STANDINGS, ROSTER, SCHEDULE, LEADERS];

/// Schemas advertised by `tools/list`.
pub fn tool_definitions() -> Vec<Value> {
    vec![
        json!({
            "name": SLATE,
            "description": "Get slate of games for a given date",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "date": {"type": "string", "description": "Date (YYYY-MM-DD format), defaults to today"}
                }
            }
        }),
        json!({
            "name": PLAYER,
            "description": "Get player info and stats",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "name": {"type": "string", "description": "Player name"}
                },
                "required": ["name"]
            }
        }),
        json!({
            "name": STANDINGS,
            "description": "Get standings",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "date": {"type": "string", "description": "Date (YYYY-MM-DD format)"},
                    "type": {"type": "string", "description": "Standings type (conference, division, league)"}
                }
            }
        }),
        json!({
            "name": ROSTER,
            "description": "Get team roster",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "team": {"type": "string", "description": "Team abbreviation"}
                },
                "required": ["team"]
            }
        }),
        json!({
            "name": SCHEDULE,
            "description": "Get team schedule",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "team": {"type": "string", "description": "Team abbreviation"},
                    "seasonID": {"type": "number", "description": "Season ID (example: 20242025)"}
                },
                "required": ["team"]
            }
        }),
        json!({
            "name": LEADERS,
            "description": "Get leaders",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "seasonID": {"type": "string", "description": "Season ID (example: 20242025)"}
                }
            }
        }),
    ]
}

#[derive(Debug, Serialize)]
struct PlayerReport {
    players: Vec<PlayerSearchResult>,
    stats: Vec<SeasonTotal>,
}

fn optional_string<'a>(
    arguments: &'a Map<String, Value>,
    key: &str,
    hint: &str,
) -> Result<Option<&'a str>, AppError> {
    match arguments.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.as_str())),
        Some(_) => Err(AppError::invalid_argument(key, hint)),
    }
}

fn required_string<'a>(arguments: &'a Map<String, Value>, key: &str) -> Result<&'a str, AppError> {
    optional_string(arguments, key, "must be a string")?
        .ok_or_else(|| AppError::invalid_argument(key, "parameter is required"))
}

/// `seasonID` as either a JSON number or a string like `20232024`/`2023-24`.
/// Absent, null and zero all mean "current season" and map to 0.
fn season_argument(arguments: &Map<String, Value>) -> Result<i32, AppError> {
    const HINT: &str = "if provided, seasonID must be an integer such as 20242025";
    match arguments.get("seasonID") {
        None | Some(Value::Null) => Ok(0),
        Some(Value::Number(number)) => number
            .as_i64()
            .and_then(|id| i32::try_from(id).ok())
            .filter(|id| *id >= 0)
            .ok_or_else(|| AppError::invalid_argument("seasonID", HINT)),
        Some(Value::String(text)) if text.trim().is_empty() || text.trim() == "0" => Ok(0),
        Some(Value::String(text)) => {
            parse_season_id(text).ok_or_else(|| AppError::invalid_argument("seasonID", HINT))
        }
        Some(_) => Err(AppError::invalid_argument("seasonID", HINT)),
    }
}

fn to_text<T: Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(value)?)
}

async fn slate(client: &NhlClient, arguments: &Map<String, Value>) -> Result<String, AppError> {
    let date = optional_string(
        arguments,
        "date",
        "if provided, date must be a string in YYYY-MM-DD format",
    )?
    .filter(|date| !date.is_empty())
    .map(str::to_string)
    .unwrap_or_else(today);

    let schedule = client.schedule_by_date(&date, SortOrder::Descending).await?;
    to_text(&schedule)
}

async fn player(client: &NhlClient, arguments: &Map<String, Value>) -> Result<String, AppError> {
    let name = required_string(arguments, "name")?;
    let players = client
        .search_player(name)
        .await
        .map_err(|e| e.with_context(format!("searching for player {name}")))?;
    let Some(first) = players.first() else {
        return Err(AppError::api_no_data(
            format!("could not find any players matching '{name}'"),
            client.api_base_url(),
        ));
    };

    let stats = client
        .filtered_player_stats(first.player_id, StatsFilter::default())
        .await
        .map_err(|e| e.with_context(format!("getting stats for player {}", first.player_id)))?;
    to_text(&PlayerReport { players, stats })
}

async fn standings(client: &NhlClient, arguments: &Map<String, Value>) -> Result<String, AppError> {
    let date = optional_string(
        arguments,
        "date",
        "if provided, date must be a string in YYYY-MM-DD format",
    )?
    .filter(|date| !date.is_empty());
    let kind = optional_string(
        arguments,
        "type",
        "if provided, type must be one of: conference, division, league",
    )?;

    let response = match date {
        Some(date) => client.standings_by_date(date).await?,
        None => client.standings().await?,
    };

    match kind {
        Some("conference") => to_text(&standings_by_conference(&response.standings)),
        Some("division") => to_text(&standings_by_division(&response.standings)),
        _ => to_text(&response),
    }
}

async fn roster(client: &NhlClient, arguments: &Map<String, Value>) -> Result<String, AppError> {
    let team = required_string(arguments, "team")?;
    let roster = client
        .team_roster(team)
        .await
        .map_err(|e| e.with_context(format!("getting team roster for {team}")))?;
    to_text(&roster)
}

async fn schedule(client: &NhlClient, arguments: &Map<String, Value>) -> Result<String, AppError> {
    let team = required_string(arguments, "team")?;
    let season = match season_argument(arguments)? {
        0 => current_season_id(),
        season => season,
    };

    let info = client.team_by_identifier(team).await?;
    let schedule = client.team_schedule(&info, season).await?;
    to_text(&schedule)
}

async fn leaders(client: &NhlClient, arguments: &Map<String, Value>) -> Result<String, AppError> {
    let season = season_argument(arguments)?;
    let leaders = client.stats_leaders(season).await?;
    to_text(&leaders)
}

/// Runs tool `name`. Returns `None` for names outside [`TOOL_NAMES`].
pub async fn call_tool(
    client: &NhlClient,
    name: &str,
    arguments: &Map<String, Value>,
) -> Option<Result<String, AppError>> {
    info!("Calling tool {}", name);
    let result = match name {
        SLATE => slate(client, arguments).await,
        PLAYER => player(client, arguments).await,
        STANDINGS => standings(client, arguments).await,
        ROSTER => roster(client, arguments).await,
        SCHEDULE => schedule(client, arguments).await,
        LEADERS => leaders(client, arguments).await,
        _ => return None,
    };
    Some(result)
}
