use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch data from API: {0}")]
    ApiFetch(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Specific HTTP status code errors
    #[error("API request not found (404): {message} (URL: {url})")]
    ApiNotFound { message: String, url: String },

    #[error("API server error ({status}): {message} (URL: {url})")]
    ApiServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API client error ({status}): {message} (URL: {url})")]
    ApiClientError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API rate limit exceeded (429): {message} (URL: {url})")]
    ApiRateLimit { message: String, url: String },

    #[error("API service unavailable ({status}): {message} (URL: {url})")]
    ApiServiceUnavailable {
        status: u16,
        message: String,
        url: String,
    },

    // Network-specific errors
    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    // Decode errors
    #[error("API returned malformed JSON: {message} (URL: {url})")]
    ApiMalformedJson { message: String, url: String },

    #[error("API returned unexpected data structure: {message} (URL: {url})")]
    ApiUnexpectedStructure { message: String, url: String },

    #[error("API returned empty or missing data: {message} (URL: {url})")]
    ApiNoData { message: String, url: String },

    // Domain validation, raised before any request is sent
    #[error("Team not found: {identifier}")]
    TeamNotFound { identifier: String },

    #[error("Team is missing an abbreviation")]
    MissingTeam,

    #[error("Invalid season ID: {season}")]
    InvalidSeason { season: i32 },

    #[error("Invalid player ID: {player_id}")]
    InvalidPlayerId { player_id: i64 },

    #[error("Invalid game ID: {game_id}")]
    InvalidGameId { game_id: i64 },

    #[error("Search name must not be empty")]
    EmptySearchName,

    #[error("Invalid date '{date}', expected YYYY-MM-DD")]
    InvalidDate { date: String },

    #[error("Invalid report type '{report}'")]
    InvalidReportType { report: String },

    #[error("Invalid argument '{argument}': {message}")]
    InvalidArgument { argument: String, message: String },

    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<AppError>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Date/time parsing error: {0}")]
    DateTimeParse(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a date/time parsing error with context
    pub fn datetime_parse_error(msg: impl Into<String>) -> Self {
        Self::DateTimeParse(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an API not found error
    pub fn api_not_found(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiNotFound {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API server error (5xx status codes)
    pub fn api_server_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API client error (4xx status codes except 404 and 429)
    pub fn api_client_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    pub fn api_rate_limit(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiRateLimit {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API service unavailable error (502, 503)
    pub fn api_service_unavailable(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServiceUnavailable {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    pub fn api_malformed_json(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiMalformedJson {
            message: message.into(),
            url: url.into(),
        }
    }

    pub fn api_unexpected_structure(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiUnexpectedStructure {
            message: message.into(),
            url: url.into(),
        }
    }

    pub fn api_no_data(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiNoData {
            message: message.into(),
            url: url.into(),
        }
    }

    pub fn team_not_found(identifier: impl Into<String>) -> Self {
        Self::TeamNotFound {
            identifier: identifier.into(),
        }
    }

    pub fn invalid_season(season: i32) -> Self {
        Self::InvalidSeason { season }
    }

    pub fn invalid_player_id(player_id: i64) -> Self {
        Self::InvalidPlayerId { player_id }
    }

    pub fn invalid_game_id(game_id: i64) -> Self {
        Self::InvalidGameId { game_id }
    }

    pub fn invalid_date(date: impl Into<String>) -> Self {
        Self::InvalidDate { date: date.into() }
    }

    pub fn invalid_report_type(report: impl Into<String>) -> Self {
        Self::InvalidReportType {
            report: report.into(),
        }
    }

    pub fn invalid_argument(argument: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument: argument.into(),
            message: message.into(),
        }
    }

    /// Wraps the error with the name of the failing operation and its identifier.
    ///
    /// ```
    /// use nhl_stats::error::AppError;
    ///
    /// let err = AppError::api_not_found("Not Found", "https://example.com/roster/DAL/current")
    ///     .with_context("fetching roster for DAL");
    /// assert!(err.to_string().starts_with("fetching roster for DAL: "));
    /// assert!(err.is_not_found());
    /// ```
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, skipping any context layers.
    pub fn root_cause(&self) -> &AppError {
        match self {
            AppError::Context { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Check if error indicates data not found rather than a technical failure
    pub fn is_not_found(&self) -> bool {
        matches!(
            self.root_cause(),
            AppError::ApiNotFound { .. }
                | AppError::ApiNoData { .. }
                | AppError::TeamNotFound { .. }
        )
    }

    /// True for errors raised by argument checks before any network call.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self.root_cause(),
            AppError::TeamNotFound { .. }
                | AppError::MissingTeam
                | AppError::InvalidSeason { .. }
                | AppError::InvalidPlayerId { .. }
                | AppError::InvalidGameId { .. }
                | AppError::EmptySearchName
                | AppError::InvalidDate { .. }
                | AppError::InvalidReportType { .. }
                | AppError::InvalidArgument { .. }
        )
    }
}
