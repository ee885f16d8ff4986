//! Selection of delivery subsets by match, team pair or batting side, and
//! post-aggregation name search.

use std::collections::HashSet;

use crate::data::{DeliveryRecord, MatchRecord};
use crate::MatchId;

/// Rows that carry a player name.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for super::PlayerAggregate {
    fn name(&self) -> &str {
        &self.player
    }
}

impl Named for super::PlayerRow {
    fn name(&self) -> &str {
        &self.stats.player
    }
}

/// Deliveries of a single match.
pub fn by_match(deliveries: &[DeliveryRecord], match_id: MatchId) -> Vec<&DeliveryRecord> {
    deliveries.iter().filter(|d| d.match_id == match_id).collect()
}

/// Matches between the two teams, in either home/away order.
pub fn matches_between<'a>(
    matches: &'a [MatchRecord],
    team1: &str,
    team2: &str,
) -> Vec<&'a MatchRecord> {
    matches.iter().filter(|m| m.is_between(team1, team2)).collect()
}

/// Deliveries of every match the two teams played against each other.
///
/// No such match gives an empty subset.
pub fn by_team_pair<'a>(
    deliveries: &'a [DeliveryRecord],
    matches: &[MatchRecord],
    team1: &str,
    team2: &str,
) -> Vec<&'a DeliveryRecord> {
    let ids: HashSet<MatchId> = matches_between(matches, team1, team2)
        .into_iter()
        .map(|m| m.id)
        .collect();
    deliveries.iter().filter(|d| ids.contains(&d.match_id)).collect()
}

/// Deliveries where `team` was batting.
pub fn by_batting_team<'a, I>(deliveries: I, team: &str) -> Vec<&'a DeliveryRecord>
where
    I: IntoIterator<Item = &'a DeliveryRecord>,
{
    deliveries
        .into_iter()
        .filter(|d| d.batting_team == team)
        .collect()
}

/// Distinct batters in order of first appearance.
pub fn batters_in_order<'a, I>(deliveries: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a DeliveryRecord>,
{
    distinct(deliveries.into_iter().map(|d| d.batter.as_str()))
}

/// Distinct bowlers in order of first appearance.
pub fn bowlers_in_order<'a, I>(deliveries: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a DeliveryRecord>,
{
    distinct(deliveries.into_iter().map(|d| d.bowler.as_str()))
}

fn distinct<'a>(names: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    names.filter(|n| seen.insert(*n)).collect()
}

/// Case-insensitive substring search over aggregated rows.
pub fn search_by_name<'a, T: Named>(rows: &'a [T], needle: &str) -> Vec<&'a T> {
    let needle = needle.to_lowercase();
    rows.iter()
        .filter(|r| r.name().to_lowercase().contains(&needle))
        .collect()
}

/// Keep only rows whose player is in `pool`.
pub fn restrict_to<T: Named>(rows: Vec<T>, pool: &HashSet<String>) -> Vec<T> {
    rows.into_iter().filter(|r| pool.contains(r.name())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::aggregate_players;
    use crate::stats::test_support::{ball, fixture};

    fn season() -> (Vec<DeliveryRecord>, Vec<MatchRecord>) {
        let matches = vec![
            fixture(1, "Mumbai Indians", "Chennai Super Kings"),
            fixture(2, "Gujarat Titans", "Mumbai Indians"),
            fixture(3, "Chennai Super Kings", "Mumbai Indians"),
        ];
        let deliveries = vec![
            ball(1, "Mumbai Indians", "RG Sharma", "DL Chahar", 4),
            ball(2, "Mumbai Indians", "RG Sharma", "Rashid Khan", 1),
            ball(3, "Chennai Super Kings", "MS Dhoni", "JJ Bumrah", 6),
            ball(3, "Mumbai Indians", "SA Yadav", "DL Chahar", 2),
        ];
        (deliveries, matches)
    }

    #[test]
    fn test_by_match() {
        let (deliveries, _) = season();
        let subset = by_match(&deliveries, MatchId::new(3));
        assert_eq!(subset.len(), 2);
        assert!(subset.iter().all(|d| d.match_id == MatchId::new(3)));
    }

    #[test]
    fn test_by_team_pair_is_symmetric() {
        let (deliveries, matches) = season();
        let forward = by_team_pair(&deliveries, &matches, "Mumbai Indians", "Chennai Super Kings");
        let reverse = by_team_pair(&deliveries, &matches, "Chennai Super Kings", "Mumbai Indians");

        assert_eq!(forward.len(), 3);
        assert_eq!(forward, reverse);
    }

    #[test]
    fn test_by_team_pair_without_matches_is_empty() {
        let (deliveries, matches) = season();
        let subset = by_team_pair(&deliveries, &matches, "Gujarat Titans", "Punjab Kings");
        assert!(subset.is_empty());
        assert!(aggregate_players(subset).is_empty());
    }

    #[test]
    fn test_by_batting_team() {
        let (deliveries, _) = season();
        let subset = by_batting_team(&deliveries, "Chennai Super Kings");
        assert_eq!(subset.len(), 1);
        assert_eq!(subset[0].batter, "MS Dhoni");
    }

    #[test]
    fn test_first_appearance_order() {
        let (deliveries, _) = season();
        assert_eq!(
            batters_in_order(&deliveries),
            vec!["RG Sharma", "MS Dhoni", "SA Yadav"]
        );
        assert_eq!(
            bowlers_in_order(&deliveries),
            vec!["DL Chahar", "Rashid Khan", "JJ Bumrah"]
        );
    }

    #[test]
    fn test_search_by_name_is_case_insensitive() {
        let (deliveries, _) = season();
        let rows = aggregate_players(&deliveries);

        let hits = search_by_name(&rows, "sHaRmA");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].player, "RG Sharma");

        assert!(search_by_name(&rows, "kohli").is_empty());
    }

    #[test]
    fn test_restrict_to_pool() {
        let (deliveries, _) = season();
        let pool: HashSet<String> = ["MS Dhoni", "JJ Bumrah"].iter().map(|s| s.to_string()).collect();

        let rows = restrict_to(aggregate_players(&deliveries), &pool);
        let names: Vec<&str> = rows.iter().map(|r| r.player.as_str()).collect();
        assert_eq!(names, vec!["JJ Bumrah", "MS Dhoni"]);
    }
}
