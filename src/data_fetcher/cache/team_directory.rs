//! Team directory held by each client, built once on first use.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use crate::data_fetcher::models::{LocalizedName, TeamInfo, TeamsResponse};

/// `(id, abbreviation, full name, city)` for every franchise the client knows.
const KNOWN_TEAMS: &[(i64, &str, &str, &str)] = &[
    (1, "NJD", "New Jersey Devils", "New Jersey"),
    (2, "NYI", "New York Islanders", "New York"),
    (3, "NYR", "New York Rangers", "New York"),
    (4, "PHI", "Philadelphia Flyers", "Philadelphia"),
    (5, "PIT", "Pittsburgh Penguins", "Pittsburgh"),
    (6, "BOS", "Boston Bruins", "Boston"),
    (7, "BUF", "Buffalo Sabres", "Buffalo"),
    (8, "MTL", "Montreal Canadiens", "Montreal"),
    (9, "OTT", "Ottawa Senators", "Ottawa"),
    (10, "TOR", "Toronto Maple Leafs", "Toronto"),
    (12, "CAR", "Carolina Hurricanes", "Carolina"),
    (13, "FLA", "Florida Panthers", "Florida"),
    (14, "TBL", "Tampa Bay Lightning", "Tampa Bay"),
    (15, "WSH", "Washington Capitals", "Washington"),
    (16, "CHI", "Chicago Blackhawks", "Chicago"),
    (17, "DET", "Detroit Red Wings", "Detroit"),
    (18, "NSH", "Nashville Predators", "Nashville"),
    (19, "STL", "St. Louis Blues", "St. Louis"),
    (20, "CGY", "Calgary Flames", "Calgary"),
    (21, "COL", "Colorado Avalanche", "Colorado"),
    (22, "EDM", "Edmonton Oilers", "Edmonton"),
    (23, "VAN", "Vancouver Canucks", "Vancouver"),
    (24, "ANA", "Anaheim Ducks", "Anaheim"),
    (25, "DAL", "Dallas Stars", "Dallas"),
    (26, "LAK", "Los Angeles Kings", "Los Angeles"),
    (28, "SJS", "San Jose Sharks", "San Jose"),
    (29, "CBJ", "Columbus Blue Jackets", "Columbus"),
    (30, "MIN", "Minnesota Wild", "Minnesota"),
    (52, "WPG", "Winnipeg Jets", "Winnipeg"),
    (53, "ARI", "Arizona Coyotes", "Arizona"),
    (54, "VGK", "Vegas Golden Knights", "Vegas"),
    (55, "SEA", "Seattle Kraken", "Seattle"),
];

fn build_directory() -> TeamsResponse {
    let teams = KNOWN_TEAMS
        .iter()
        .map(|&(id, abbreviation, name, city)| TeamInfo {
            id,
            name: LocalizedName::new(name),
            abbreviation: abbreviation.to_string(),
            city: LocalizedName::new(city),
            tri_code: abbreviation.to_string(),
            franchise_id: 0,
            active: true,
        })
        .collect();
    TeamsResponse { teams }
}

/// Read-through cache of the team list.
///
/// Readers share the read lock. The first caller to find the slot empty
/// takes the write lock, checks the slot again and fills it, so the list
/// is built once and every later call returns the same `Arc`.
#[derive(Debug, Default)]
pub struct TeamDirectory {
    slot: RwLock<Option<Arc<TeamsResponse>>>,
}

impl TeamDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    #[instrument(skip(self))]
    pub async fn get(&self) -> Arc<TeamsResponse> {
        if let Some(teams) = self.slot.read().await.as_ref() {
            debug!("Team directory cache hit");
            return Arc::clone(teams);
        }

        let mut slot = self.slot.write().await;
        if let Some(teams) = slot.as_ref() {
            debug!("Team directory populated while waiting for write lock");
            return Arc::clone(teams);
        }

        let teams = Arc::new(build_directory());
        info!("Team directory populated with {} teams", teams.teams.len());
        *slot = Some(Arc::clone(&teams));
        teams
    }

    /// True once the directory has been built.
    pub async fn is_populated(&self) -> bool {
        self.slot.read().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[tokio::test]
    async fn test_directory_is_built_once() {
        let directory = TeamDirectory::new();
        assert!(!directory.is_populated().await);

        let first = directory.get().await;
        let second = directory.get().await;
        assert!(Arc::ptr_eq(&first, &second));
        assert!(directory.is_populated().await);
    }

    #[tokio::test]
    async fn test_concurrent_readers_share_one_instance() {
        let directory = Arc::new(TeamDirectory::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let directory = Arc::clone(&directory);
                tokio::spawn(async move { directory.get().await })
            })
            .collect();

        let results = futures::future::join_all(handles).await;
        let first = results[0].as_ref().unwrap();
        for result in &results {
            assert!(Arc::ptr_eq(first, result.as_ref().unwrap()));
        }
    }

    #[test]
    fn test_directory_contents() {
        let directory = build_directory();
        assert_eq!(directory.teams.len(), 32);

        let ids: HashSet<i64> = directory.teams.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 32);
        assert!(directory.teams.iter().all(|t| t.active && t.tri_code == t.abbreviation));

        let dallas = directory.teams.iter().find(|t| t.id == 25).unwrap();
        assert_eq!(dallas.abbreviation, "DAL");
        assert_eq!(dallas.name.default, "Dallas Stars");
    }
}
