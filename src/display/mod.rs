//! Plain-text renderers for the CLI reports.
//!
//! Every renderer returns a `String`; printing is left to the caller so the
//! output can be tested and stdout stays free in MCP mode.

pub mod game;
pub mod games;
pub mod leaders;
pub mod roster;
pub mod standings;
pub mod stats;
pub mod table;

pub use game::{render_boxscore, render_game_details, render_game_story, render_play_by_play};
pub use games::{render_games, render_live, render_team_schedule};
pub use leaders::render_leaders;
pub use roster::render_roster;
pub use standings::{
    format_points_percentage, format_streak, render_conference_standings,
    render_division_standings, render_league_standings, render_standings,
};
pub use stats::{
    render_player_matches, render_player_stats, render_season_list, render_season_totals,
};
