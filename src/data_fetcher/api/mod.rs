pub mod http_client;
pub mod urls;
mod core;
mod fetch_utils;
mod game_api;
mod leaders_api;
mod player_api;
mod schedule_api;
mod standings_api;
mod team_api;

pub use self::core::NhlClient;
pub use player_api::{GOALIE_REPORTS, SKATER_REPORTS};
pub use urls::*;
