use tracing::{debug, instrument};

use super::core::NhlClient;
use super::urls::{build_player_landing_url, build_stats_report_url};
use crate::data_fetcher::models::{
    GoalieStatsResponse, PlayerLandingResponse, PlayerStats, SeasonTotal, SkaterStatsResponse,
    StatsFilter,
};
use crate::error::AppError;

/// Stats REST reports available for skaters.
pub const SKATER_REPORTS: &[&str] = &[
    "summary",
    "realtime",
    "faceoffwins",
    "penalties",
    "powerplay",
    "timeonice",
    "bios",
];

/// Stats REST reports available for goalies.
pub const GOALIE_REPORTS: &[&str] = &["summary", "advanced", "savesByStrength", "bios"];

impl NhlClient {
    /// Per-season report rows for a player from the stats REST API.
    ///
    /// `is_goalie` picks both the endpoint and the returned variant. The
    /// filter narrows the query by game type and season.
    #[instrument(skip(self))]
    pub async fn player_stats(
        &self,
        player_id: i64,
        is_goalie: bool,
        report: &str,
        filter: StatsFilter,
    ) -> Result<PlayerStats, AppError> {
        if player_id <= 0 {
            return Err(AppError::invalid_player_id(player_id));
        }
        let (kind, reports) = if is_goalie {
            ("goalie", GOALIE_REPORTS)
        } else {
            ("skater", SKATER_REPORTS)
        };
        if !reports.contains(&report) {
            return Err(AppError::invalid_report_type(report));
        }

        let url = build_stats_report_url(
            self.stats_base_url(),
            kind,
            report,
            player_id,
            filter.game_type,
            filter.season_id,
        );
        let context = || format!("{kind} {report} stats for player {player_id}");

        if is_goalie {
            let stats: GoalieStatsResponse = self
                .get_json(&url)
                .await
                .map_err(|e| e.with_context(context()))?;
            Ok(PlayerStats::Goalie(stats))
        } else {
            let stats: SkaterStatsResponse = self
                .get_json(&url)
                .await
                .map_err(|e| e.with_context(context()))?;
            Ok(PlayerStats::Skater(stats))
        }
    }

    /// Player landing page with the full career table.
    #[instrument(skip(self))]
    pub async fn player_landing(&self, player_id: i64) -> Result<PlayerLandingResponse, AppError> {
        if player_id <= 0 {
            return Err(AppError::invalid_player_id(player_id));
        }
        let url = build_player_landing_url(self.api_base_url(), player_id);
        self.get_json(&url)
            .await
            .map_err(|e| e.with_context(format!("landing for player {player_id}")))
    }

    /// NHL season totals matching `filter`, newest season first.
    #[instrument(skip(self))]
    pub async fn filtered_player_stats(
        &self,
        player_id: i64,
        filter: StatsFilter,
    ) -> Result<Vec<SeasonTotal>, AppError> {
        let landing = self.player_landing(player_id).await?;
        let total = landing.season_totals.len();

        let mut seasons: Vec<SeasonTotal> = landing
            .season_totals
            .into_iter()
            .filter(|season| season.league_abbrev == "NHL" && filter.matches(season))
            .collect();
        seasons.sort_by(|a, b| b.season.cmp(&a.season));

        debug!("Kept {} of {} season rows", seasons.len(), total);
        Ok(seasons)
    }
}
