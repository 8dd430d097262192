//! NHL statistics client
//!
//! A typed client for the public NHL web and stats APIs, with plain-text
//! renderers for a CLI and a Model Context Protocol server that exposes
//! the same data as tools.
//!
//! # Examples
//!
//! ```rust,no_run
//! use nhl_stats::data_fetcher::NhlClient;
//! use nhl_stats::data_fetcher::processors::rank_league;
//! use nhl_stats::display::render_league_standings;
//! use nhl_stats::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let client = NhlClient::default();
//!
//!     let standings = client.standings().await?;
//!     let leader = rank_league(&standings.standings).into_iter().next();
//!     if let Some(team) = leader {
//!         println!("League leader: {} ({} pts)", team.team_name.default, team.points);
//!     }
//!
//!     print!("{}", render_league_standings(&standings.standings));
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod display;
pub mod error;
pub mod logging;
pub mod mcp;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::NhlClient;
pub use data_fetcher::models::{SortOrder, StatsFilter};
pub use error::AppError;
pub use mcp::{McpServer, run_mcp_server};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
