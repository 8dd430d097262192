use crate::data_fetcher::models::TeamStanding;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Tie-break order for the league table: points, then regulation wins,
/// then goal differential, all descending. Full ties compare equal.
pub fn compare_standings(a: &TeamStanding, b: &TeamStanding) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.regulation_wins.cmp(&a.regulation_wins))
        .then_with(|| b.goal_differential.cmp(&a.goal_differential))
}

/// Sorts teams in place by [`compare_standings`].
///
/// The sort is stable, so teams tied on all three keys keep their input
/// order and ranking an already ranked slice leaves it unchanged.
///
/// # Examples
///
/// ```
/// use nhl_stats::data_fetcher::models::TeamStanding;
/// use nhl_stats::data_fetcher::processors::rank_standings;
///
/// let mut teams = vec![
///     TeamStanding { points: 80, ..TeamStanding::default() },
///     TeamStanding { points: 85, ..TeamStanding::default() },
/// ];
/// rank_standings(&mut teams);
/// assert_eq!(teams[0].points, 85);
/// ```
pub fn rank_standings(teams: &mut [TeamStanding]) {
    teams.sort_by(compare_standings);
}

/// Returns a ranked copy of the whole league.
pub fn rank_league(teams: &[TeamStanding]) -> Vec<TeamStanding> {
    let mut ranked = teams.to_vec();
    rank_standings(&mut ranked);
    ranked
}

fn group_and_rank<F>(teams: &[TeamStanding], label: F) -> BTreeMap<String, Vec<TeamStanding>>
where
    F: Fn(&TeamStanding) -> String,
{
    let mut groups: BTreeMap<String, Vec<TeamStanding>> = BTreeMap::new();
    for team in teams {
        groups.entry(label(team)).or_default().push(team.clone());
    }
    for group in groups.values_mut() {
        rank_standings(group);
    }
    groups
}

/// Groups by conference name, each group ranked.
pub fn standings_by_conference(teams: &[TeamStanding]) -> BTreeMap<String, Vec<TeamStanding>> {
    group_and_rank(teams, |team| team.conference.clone())
}

/// Groups by division name, each group ranked.
pub fn standings_by_division(teams: &[TeamStanding]) -> BTreeMap<String, Vec<TeamStanding>> {
    group_and_rank(teams, |team| team.division.clone())
}

/// Two-level grouping: conference, then division inside it.
pub fn standings_by_conference_and_division(
    teams: &[TeamStanding],
) -> BTreeMap<String, BTreeMap<String, Vec<TeamStanding>>> {
    let mut conferences: BTreeMap<String, Vec<TeamStanding>> = BTreeMap::new();
    for team in teams {
        conferences
            .entry(team.conference.clone())
            .or_default()
            .push(team.clone());
    }

    conferences
        .into_iter()
        .map(|(conference, members)| (conference, standings_by_division(&members)))
        .collect()
}

/// Wildcard race: only teams with a positive wildcard sequence, in
/// sequence order. Teams holding a division spot (sequence 0) are dropped.
pub fn wildcard_standings(teams: &[TeamStanding]) -> Vec<TeamStanding> {
    let mut race: Vec<TeamStanding> = teams
        .iter()
        .filter(|team| team.wildcard_sequence > 0)
        .cloned()
        .collect();
    race.sort_by_key(|team| team.wildcard_sequence);
    race
}
