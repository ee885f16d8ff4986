//! Reduction of delivery subsets into per-player and per-team rows.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::data::DeliveryRecord;

/// Batting and bowling totals for one player over a delivery subset.
///
/// A player who only batted has zero bowling fields and vice versa.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlayerAggregate {
    pub player: String,
    pub runs: u32,
    pub balls_faced: u32,
    /// Fours and sixes hit.
    pub boundaries: u32,
    /// Every wicket-flagged delivery bowled, run-outs included.
    pub wickets: u32,
    pub legal_deliveries: u32,
    pub runs_conceded: u32,
    pub dot_balls: u32,
}

impl PlayerAggregate {
    pub fn new(player: impl Into<String>) -> Self {
        Self {
            player: player.into(),
            ..Default::default()
        }
    }

    fn record_batting(&mut self, d: &DeliveryRecord) {
        self.runs += d.batter_runs;
        self.balls_faced += 1;
        if d.is_boundary() {
            self.boundaries += 1;
        }
    }

    fn record_bowling(&mut self, d: &DeliveryRecord) {
        if d.is_wicket {
            self.wickets += 1;
        }
        if d.is_legal() {
            self.legal_deliveries += 1;
        }
        self.runs_conceded += d.total_runs;
        if d.batter_runs == 0 {
            self.dot_balls += 1;
        }
    }
}

/// One row per distinct batter or bowler in `deliveries`, ordered by name.
///
/// Batting and bowling sides are merged by player name; an empty input gives
/// an empty result.
pub fn aggregate_players<'a, I>(deliveries: I) -> Vec<PlayerAggregate>
where
    I: IntoIterator<Item = &'a DeliveryRecord>,
{
    let mut players: BTreeMap<&str, PlayerAggregate> = BTreeMap::new();

    for d in deliveries {
        players
            .entry(d.batter.as_str())
            .or_insert_with(|| PlayerAggregate::new(d.batter.as_str()))
            .record_batting(d);
        players
            .entry(d.bowler.as_str())
            .or_insert_with(|| PlayerAggregate::new(d.bowler.as_str()))
            .record_bowling(d);
    }

    players.into_values().collect()
}

/// Innings totals for one batting side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TeamAggregate {
    pub team: String,
    /// Runs off the bat; extras are not included.
    pub runs: u32,
    pub wickets: u32,
    pub legal_deliveries: u32,
    pub fours: u32,
    pub sixes: u32,
}

impl TeamAggregate {
    pub fn new(team: impl Into<String>) -> Self {
        Self {
            team: team.into(),
            ..Default::default()
        }
    }

    fn record(&mut self, d: &DeliveryRecord) {
        self.runs += d.batter_runs;
        if d.is_wicket {
            self.wickets += 1;
        }
        if d.is_legal() {
            self.legal_deliveries += 1;
        }
        if d.is_four() {
            self.fours += 1;
        }
        if d.is_six() {
            self.sixes += 1;
        }
    }
}

/// Totals for `team` as the batting side. Zeroes if it never batted.
pub fn aggregate_team<'a, I>(deliveries: I, team: &str) -> TeamAggregate
where
    I: IntoIterator<Item = &'a DeliveryRecord>,
{
    let mut agg = TeamAggregate::new(team);
    for d in deliveries.into_iter().filter(|d| d.batting_team == team) {
        agg.record(d);
    }
    agg
}

/// One row per batting side present in `deliveries`, ordered by team name.
pub fn aggregate_batting_teams<'a, I>(deliveries: I) -> Vec<TeamAggregate>
where
    I: IntoIterator<Item = &'a DeliveryRecord>,
{
    let mut teams: BTreeMap<&str, TeamAggregate> = BTreeMap::new();
    for d in deliveries {
        teams
            .entry(d.batting_team.as_str())
            .or_insert_with(|| TeamAggregate::new(d.batting_team.as_str()))
            .record(d);
    }
    teams.into_values().collect()
}
