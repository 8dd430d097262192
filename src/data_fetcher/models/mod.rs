pub mod common;
pub mod game;
pub mod leaders;
pub mod players;
pub mod schedule;
pub mod standings;
pub mod teams;

pub use common::{GameClock, LocalizedName, PeriodDescriptor, Record, TvBroadcast};
pub use game::{
    AssistEvent, BoxscoreResponse, DetailedTeam, EventDetails, GameDetails, GameStoryResponse,
    GameSummary, GoalEvent, GoalieGameStats, PenaltyEvent, PeriodSummary, PlayByPlayResponse,
    PlayEvent, PlayerByGameStats, RosterSpot, SkaterGameStats, StarPlayer, TeamPlayerStats,
};
pub use leaders::{LeaderValueKind, StatsLeaderPlayer, StatsLeadersResponse};
pub use players::{
    GoalieStats, GoalieStatsResponse, PlayerLandingResponse, PlayerStats, SeasonTotal,
    SkaterStats, SkaterStatsResponse, StatsFilter,
};
pub use schedule::{
    FilteredScoreboardResponse, Game, GameState, GameTeam, GamesByDate, ScheduleGame,
    ScoreboardResponse, SortOrder, TeamInSchedule, TeamScheduleResponse,
};
pub use standings::{StandingsResponse, TeamStanding};
pub use teams::{PlayerInfo, PlayerSearchResult, RosterResponse, TeamInfo, TeamsResponse};
