pub mod boxscore;
pub mod live;
pub mod play_by_play;
pub mod schedule;
pub mod season;
pub mod standings;
pub mod time_formatting;

pub use boxscore::{TeamTotals, aggregate_team_totals, rank_skaters, team_totals};
pub use live::{ActiveGames, is_active_game, select_active_games, status_text};
pub use play_by_play::{describe_play, roster_names};
pub use schedule::{filter_games_by_date, sort_games_by_start_time};
pub use season::{
    current_season_id, current_season_id_with_time, format_season_id, game_type_name,
    parse_season_id, season_id_for_start_year,
};
pub use standings::{
    compare_standings, rank_league, rank_standings, standings_by_conference,
    standings_by_conference_and_division, standings_by_division, wildcard_standings,
};
pub use time_formatting::{
    format_game_time, format_local_time, format_time_on_ice, today, us_eastern_offset_seconds,
    validate_date,
};
