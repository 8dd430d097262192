use tracing::instrument;

use super::core::NhlClient;
use super::urls::build_stats_leaders_url;
use crate::data_fetcher::models::StatsLeadersResponse;
use crate::data_fetcher::processors::current_season_id;
use crate::error::AppError;

impl NhlClient {
    /// Skater leaderboards for `season`; `0` selects the current season.
    #[instrument(skip(self))]
    pub async fn stats_leaders(&self, season: i32) -> Result<StatsLeadersResponse, AppError> {
        let season = match season {
            0 => current_season_id(),
            s if s < 0 => return Err(AppError::invalid_season(s)),
            s => s,
        };
        let url = build_stats_leaders_url(self.api_base_url(), season);
        self.get_json(&url)
            .await
            .map_err(|e| e.with_context(format!("stats leaders for {season}")))
    }
}
