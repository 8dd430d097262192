//! Application-wide constants
//!
//! Endpoint defaults, CLI fallbacks and game codes live here so the
//! fetcher, the CLI and the MCP server agree on them.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 32;

/// Base URL of the public web API
pub const DEFAULT_API_BASE_URL: &str = "https://api-web.nhle.com/v1";

/// Base URL of the stats REST API (player stat reports)
pub const DEFAULT_STATS_BASE_URL: &str = "https://api.nhle.com/stats/rest/en";

/// Calendar date format used in URLs and CLI arguments
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Number of characters of an error body kept in error messages
pub const ERROR_BODY_SNIPPET_CHARS: usize = 200;

/// Application name used for config and log directories
pub const APP_NAME: &str = "nhl_stats";

/// Game type codes used by the upstream API
pub mod game_type {
    pub const PRESEASON: i32 = 1;
    pub const REGULAR_SEASON: i32 = 2;
    pub const PLAYOFFS: i32 = 3;
    pub const ALL_STAR: i32 = 4;
}

/// Values substituted when a CLI parameter is required but unset
pub mod cli_defaults {
    pub const PLAYER_NAME: &str = "Robertson";
    pub const SKATER_NAME: &str = "Hintz";
    pub const GOALIE_NAME: &str = "Oettinger";
    pub const STATS_NAME: &str = "Johnston";
    pub const TEAM: &str = "DAL";
    pub const GAME_ID: i64 = 2024020750;
    pub const LIVE_INTERVAL_SECONDS: u64 = 60;
}

/// Live update window: finished games and upcoming games are shown
/// this many minutes around their start time
pub const LIVE_WINDOW_MINUTES: i64 = 60;

/// Regulation periods in a game; higher period numbers are OT or shootout
pub const REGULATION_PERIODS: i32 = 3;

/// Environment variable names
pub mod env_vars {
    /// Override for the web API base URL
    pub const API_BASE_URL: &str = "NHL_API_BASE_URL";

    /// Override for the stats REST base URL
    pub const STATS_BASE_URL: &str = "NHL_STATS_BASE_URL";

    /// Override for the log file path
    pub const LOG_FILE: &str = "NHL_LOG_FILE";

    /// Override for the HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "NHL_HTTP_TIMEOUT";
}

/// MCP server identity
pub mod mcp {
    pub const PROTOCOL_VERSION: &str = "2024-11-05";
    pub const SERVER_NAME: &str = "NHL";

    pub const METHOD_NOT_FOUND: i64 = -32601;
    pub const INVALID_PARAMS: i64 = -32602;
}
