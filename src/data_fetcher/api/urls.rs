//! URL building for the web API and the stats REST API

/// Scoreboard for the week around `date`.
///
/// # Example
/// ```
/// use nhl_stats::data_fetcher::api::build_scoreboard_url;
///
/// let url = build_scoreboard_url("https://api-web.nhle.com/v1", "2024-02-01");
/// assert_eq!(url, "https://api-web.nhle.com/v1/scoreboard/2024-02-01");
/// ```
pub fn build_scoreboard_url(base: &str, date: &str) -> String {
    format!("{base}/scoreboard/{date}")
}

pub fn build_live_scoreboard_url(base: &str) -> String {
    format!("{base}/score/now")
}

pub fn build_current_standings_url(base: &str) -> String {
    format!("{base}/standings/now")
}

pub fn build_standings_url(base: &str, date: &str) -> String {
    format!("{base}/standings/{date}")
}

pub fn build_roster_url(base: &str, team_abbrev: &str) -> String {
    format!("{base}/roster/{team_abbrev}/current")
}

/// # Example
/// ```
/// use nhl_stats::data_fetcher::api::build_team_schedule_url;
///
/// let url = build_team_schedule_url("https://api-web.nhle.com/v1", "DAL", 20232024);
/// assert_eq!(url, "https://api-web.nhle.com/v1/club-schedule-season/DAL/20232024");
/// ```
pub fn build_team_schedule_url(base: &str, team_abbrev: &str, season: i32) -> String {
    format!("{base}/club-schedule-season/{team_abbrev}/{season}")
}

pub fn build_player_landing_url(base: &str, player_id: i64) -> String {
    format!("{base}/player/{player_id}/landing")
}

pub fn build_game_landing_url(base: &str, game_id: i64) -> String {
    format!("{base}/gamecenter/{game_id}/landing")
}

pub fn build_boxscore_url(base: &str, game_id: i64) -> String {
    format!("{base}/gamecenter/{game_id}/boxscore")
}

pub fn build_play_by_play_url(base: &str, game_id: i64) -> String {
    format!("{base}/gamecenter/{game_id}/play-by-play")
}

pub fn build_game_story_url(base: &str, game_id: i64) -> String {
    format!("{base}/wsc/game-story/{game_id}")
}

/// Skater leaders for regular-season games (`/2`) of a season.
pub fn build_stats_leaders_url(base: &str, season: i32) -> String {
    format!("{base}/skater-stats-leaders/{season}/2")
}

/// Stats REST report filtered by a cayenne expression.
///
/// `kind` is `skater` or `goalie`, `report` e.g. `summary`. The expression
/// always filters by player; game type and season are added when given.
/// Spaces and `=` in the expression are percent-encoded.
///
/// # Example
/// ```
/// use nhl_stats::data_fetcher::api::build_stats_report_url;
///
/// let url = build_stats_report_url("https://api.nhle.com/stats/rest/en", "skater", "summary", 8480027, Some(2), None);
/// assert_eq!(
///     url,
///     "https://api.nhle.com/stats/rest/en/skater/summary?cayenneExp=playerId%3D8480027%20and%20gameTypeId%3D2"
/// );
/// ```
pub fn build_stats_report_url(
    base: &str,
    kind: &str,
    report: &str,
    player_id: i64,
    game_type: Option<i32>,
    season_id: Option<i32>,
) -> String {
    let mut expression = format!("playerId={player_id}");
    if let Some(game_type) = game_type {
        expression.push_str(&format!(" and gameTypeId={game_type}"));
    }
    if let Some(season_id) = season_id {
        expression.push_str(&format!(" and seasonId={season_id}"));
    }
    format!(
        "{base}/{kind}/{report}?cayenneExp={}",
        encode_query_value(&expression)
    )
}

/// Percent-encodes everything outside the RFC 3986 unreserved set.
fn encode_query_value(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}
