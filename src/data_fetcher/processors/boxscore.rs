use crate::data_fetcher::models::{SkaterGameStats, TeamPlayerStats};
use serde::Serialize;

/// Team-level totals summed from skater boxscore rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TeamTotals {
    pub hits: i32,
    pub penalty_minutes: i32,
    pub shots_on_goal: i32,
    /// Mean of the positive per-player faceoff percentages, in the same
    /// unit as the inputs. Players with no faceoff share are left out.
    pub faceoff_pct: f64,
}

/// Sums hits, penalty minutes and shots over `skaters` and averages
/// their faceoff percentages.
///
/// The faceoff figure is a plain mean over players with a value above
/// zero, not weighted by faceoffs taken. With no such player it is 0.0.
///
/// # Examples
///
/// ```
/// use nhl_stats::data_fetcher::models::SkaterGameStats;
/// use nhl_stats::data_fetcher::processors::aggregate_team_totals;
///
/// let skaters: Vec<SkaterGameStats> = [60.0, 0.0, 40.0]
///     .into_iter()
///     .map(|pct| SkaterGameStats { faceoff_winning_pctg: pct, ..Default::default() })
///     .collect();
/// assert_eq!(aggregate_team_totals(&skaters).faceoff_pct, 50.0);
/// ```
pub fn aggregate_team_totals<'a, I>(skaters: I) -> TeamTotals
where
    I: IntoIterator<Item = &'a SkaterGameStats>,
{
    let mut totals = TeamTotals::default();
    let mut faceoff_sum = 0.0;
    let mut faceoff_count = 0u32;

    for skater in skaters {
        totals.hits += skater.hits;
        totals.penalty_minutes += skater.pim;
        totals.shots_on_goal += skater.sog;
        if skater.faceoff_winning_pctg > 0.0 {
            faceoff_sum += skater.faceoff_winning_pctg;
            faceoff_count += 1;
        }
    }

    if faceoff_count > 0 {
        totals.faceoff_pct = faceoff_sum / f64::from(faceoff_count);
    }
    totals
}

/// Totals for one side of a boxscore, forwards and defensemen together.
pub fn team_totals(team: &TeamPlayerStats) -> TeamTotals {
    aggregate_team_totals(team.skaters())
}

/// Forwards and defensemen ordered by points, then goals, both descending.
/// Equal players keep forwards-then-defense order.
pub fn rank_skaters(team: &TeamPlayerStats) -> Vec<SkaterGameStats> {
    let mut skaters: Vec<SkaterGameStats> = team.skaters().cloned().collect();
    skaters.sort_by(|a, b| b.points.cmp(&a.points).then_with(|| b.goals.cmp(&a.goals)));
    skaters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;

    #[test]
    fn test_faceoff_average_skips_zero_values() {
        let skaters = vec![
            TestDataBuilder::create_faceoff_skater("A", 60.0),
            TestDataBuilder::create_faceoff_skater("B", 0.0),
            TestDataBuilder::create_faceoff_skater("C", 40.0),
        ];
        let totals = aggregate_team_totals(&skaters);
        assert!((totals.faceoff_pct - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_input_yields_zeroes() {
        let totals = aggregate_team_totals(&Vec::<SkaterGameStats>::new());
        assert_eq!(totals, TeamTotals::default());
        assert_eq!(totals.faceoff_pct, 0.0);
    }

    #[test]
    fn test_totals_cover_forwards_and_defense() {
        let mut forward = TestDataBuilder::create_skater("F", 1, 1);
        forward.hits = 3;
        forward.pim = 2;
        forward.sog = 5;
        let mut defense = TestDataBuilder::create_skater("D", 0, 1);
        defense.hits = 4;
        defense.pim = 0;
        defense.sog = 2;

        let team = TeamPlayerStats {
            forwards: vec![forward],
            defense: vec![defense],
            goalies: vec![],
        };
        let totals = team_totals(&team);
        assert_eq!(totals.hits, 7);
        assert_eq!(totals.penalty_minutes, 2);
        assert_eq!(totals.shots_on_goal, 7);
    }

    #[test]
    fn test_rank_skaters_points_then_goals() {
        let team = TeamPlayerStats {
            forwards: vec![
                TestDataBuilder::create_skater("Playmaker", 0, 2),
                TestDataBuilder::create_skater("Sniper", 2, 0),
                TestDataBuilder::create_skater("Quiet", 0, 0),
            ],
            defense: vec![TestDataBuilder::create_skater("Blueliner", 1, 2)],
            goalies: vec![],
        };
        let ranked: Vec<String> = rank_skaters(&team)
            .into_iter()
            .map(|s| s.name.default)
            .collect();
        assert_eq!(ranked, vec!["Blueliner", "Sniper", "Playmaker", "Quiet"]);
    }
}
