use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{ArgGroup, Parser};

use crate::constants::cli_defaults;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// The single report selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    Today,
    Slate,
    Roster,
    Player,
    Skater,
    Goalie,
    Stats,
    Schedule,
    Standings,
    StandingsByDate,
    LeagueStandings,
    Conference,
    Division,
    Game,
    Live,
    Leaders,
    Mcp,
}

/// NHL stats from the public NHL web API
///
/// Prints schedules, standings, rosters, player stats, box scores and
/// league leaders as plain-text tables, or as JSON with --json.
/// With --mcp the program serves the same data as Model Context Protocol
/// tools over stdio.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
#[command(group(ArgGroup::new("report").multiple(false)))]
pub struct Args {
    /// Today's games, earliest first
    #[arg(long, group = "report", help_heading = "Reports")]
    pub today: bool,

    /// Games for --date (default today), latest first
    #[arg(long, group = "report", help_heading = "Reports")]
    pub slate: bool,

    /// Current roster for --name (team, default DAL)
    #[arg(long, group = "report", help_heading = "Reports")]
    pub roster: bool,

    /// Search players by --name and list their season totals
    #[arg(long, group = "report", help_heading = "Reports")]
    pub player: bool,

    /// Regular season and playoff stats for a skater named --name
    #[arg(long, group = "report", help_heading = "Reports")]
    pub skater: bool,

    /// Regular season and playoff stats for a goalie named --name
    #[arg(long, group = "report", help_heading = "Reports")]
    pub goalie: bool,

    /// Season list and recent season stats for --name
    #[arg(long, group = "report", help_heading = "Reports")]
    pub stats: bool,

    /// Season schedule for team --name (default DAL), optionally --season
    #[arg(long, group = "report", help_heading = "Reports")]
    pub schedule: bool,

    /// Current standings by conference and division
    #[arg(long, group = "report", help_heading = "Reports")]
    pub standings: bool,

    /// Standings as of --date
    #[arg(long = "standings-by-date", group = "report", help_heading = "Reports")]
    pub standings_by_date: bool,

    /// Whole league in one ranked table
    #[arg(long = "league-standings", group = "report", help_heading = "Reports")]
    pub league_standings: bool,

    /// Ranked table per conference
    #[arg(long, group = "report", help_heading = "Reports")]
    pub conference: bool,

    /// Ranked table per division
    #[arg(long, group = "report", help_heading = "Reports")]
    pub division: bool,

    /// Details, box score and play-by-play for --game-id
    #[arg(long, group = "report", help_heading = "Reports")]
    pub game: bool,

    /// Poll the live scoreboard every --interval seconds
    #[arg(long, group = "report", help_heading = "Reports")]
    pub live: bool,

    /// League leaders for --season (default current)
    #[arg(long, group = "report", help_heading = "Reports")]
    pub leaders: bool,

    /// Serve MCP tools over stdio
    #[arg(long, group = "report", help_heading = "Reports")]
    pub mcp: bool,

    /// Date in YYYY-MM-DD format
    #[arg(long, short = 'd', help_heading = "Parameters")]
    pub date: Option<String>,

    /// Player or team name, depending on the report
    #[arg(long, short = 'n', help_heading = "Parameters")]
    pub name: Option<String>,

    /// Game id for --game
    #[arg(
        long = "game-id",
        default_value_t = cli_defaults::GAME_ID,
        help_heading = "Parameters"
    )]
    pub game_id: i64,

    /// Seconds between live updates
    #[arg(
        long,
        default_value_t = cli_defaults::LIVE_INTERVAL_SECONDS,
        help_heading = "Parameters"
    )]
    pub interval: u64,

    /// Season as 20232024, 2023-2024 or 2023-24
    #[arg(long, short = 's', help_heading = "Parameters")]
    pub season: Option<String>,

    /// Print the response as indented JSON instead of a table
    #[arg(long, help_heading = "Parameters")]
    pub json: bool,

    /// Update the web API base URL in config
    #[arg(long = "set-api-url", value_name = "URL", help_heading = "Configuration")]
    pub new_api_url: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", value_name = "PATH", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Mirror logs to stderr as well as the log file
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    /// The selected report, if any.
    pub fn report(&self) -> Option<Report> {
        let flags = [
            (self.today, Report::Today),
            (self.slate, Report::Slate),
            (self.roster, Report::Roster),
            (self.player, Report::Player),
            (self.skater, Report::Skater),
            (self.goalie, Report::Goalie),
            (self.stats, Report::Stats),
            (self.schedule, Report::Schedule),
            (self.standings, Report::Standings),
            (self.standings_by_date, Report::StandingsByDate),
            (self.league_standings, Report::LeagueStandings),
            (self.conference, Report::Conference),
            (self.division, Report::Division),
            (self.game, Report::Game),
            (self.live, Report::Live),
            (self.leaders, Report::Leaders),
            (self.mcp, Report::Mcp),
        ];
        flags
            .into_iter()
            .find_map(|(set, report)| set.then_some(report))
    }

    /// True when a config management flag was given.
    pub fn is_config_command(&self) -> bool {
        self.new_api_url.is_some()
            || self.new_log_file_path.is_some()
            || self.clear_log_file_path
            || self.list_config
    }

    /// `--name`, falling back to `default` when unset or blank.
    pub fn name_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(default)
    }
}
