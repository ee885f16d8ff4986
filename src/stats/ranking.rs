//! Ordering and selection of rated players.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

use super::aggregate::PlayerAggregate;
use super::metrics::{DerivedMetrics, Role};
use super::valuation::AuctionCandidate;
use crate::Skill;

/// An aggregate annotated with its derived metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerRow {
    #[serde(flatten)]
    pub stats: PlayerAggregate,
    #[serde(flatten)]
    pub metrics: DerivedMetrics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted_points: Option<f64>,
}

impl PlayerRow {
    pub fn new(stats: PlayerAggregate) -> Self {
        let metrics = DerivedMetrics::from_aggregate(&stats);
        Self {
            stats,
            metrics,
            predicted_points: None,
        }
    }

    pub fn role(&self) -> Role {
        self.metrics.role
    }
}

/// Annotate every aggregate.
pub fn rate_players(aggregates: Vec<PlayerAggregate>) -> Vec<PlayerRow> {
    aggregates.into_iter().map(PlayerRow::new).collect()
}

/// Metric a ranking is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankBy {
    FantasyPoints,
    PredictedPoints,
}

impl RankBy {
    pub fn value(&self, row: &PlayerRow) -> f64 {
        match self {
            RankBy::FantasyPoints => row.metrics.fantasy_points as f64,
            RankBy::PredictedPoints => row.predicted_points.unwrap_or(0.0),
        }
    }
}

/// Why a selection produced no rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum EmptyReason {
    NoMatchesBetween { team1: String, team2: String },
    NoLineupsBetween { team1: String, team2: String },
    NoScoringPlayers,
    NoPlayersForSkill { skill: Skill },
    NoneUnderBudget { budget: f64 },
    NoNameMatch { query: String },
}

impl fmt::Display for EmptyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyReason::NoMatchesBetween { team1, team2 } => {
                write!(f, "No matches found between {} and {}", team1, team2)
            }
            EmptyReason::NoLineupsBetween { team1, team2 } => {
                write!(f, "No match data found for {} vs {}", team1, team2)
            }
            EmptyReason::NoScoringPlayers => write!(f, "No players scored fantasy points"),
            EmptyReason::NoPlayersForSkill { skill } => {
                write!(f, "No players found for the selected type ({})", skill)
            }
            EmptyReason::NoneUnderBudget { budget } => {
                write!(f, "No players found under the given budget ({:.0} lakh)", budget)
            }
            EmptyReason::NoNameMatch { query } => write!(f, "No player found matching '{}'", query),
        }
    }
}

/// Result of a selection: rows, or an explicit "no data for this selection".
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Rows(Vec<T>),
    Empty(EmptyReason),
}

impl<T> Outcome<T> {
    /// Wrap `rows`, switching to `Empty(reason)` when there are none.
    pub fn from_rows(rows: Vec<T>, reason: impl FnOnce() -> EmptyReason) -> Self {
        if rows.is_empty() {
            Outcome::Empty(reason())
        } else {
            Outcome::Rows(rows)
        }
    }

    pub fn rows(&self) -> Option<&[T]> {
        match self {
            Outcome::Rows(rows) => Some(rows),
            Outcome::Empty(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Outcome::Empty(_))
    }
}

/// Sort descending by `metric`. Equal values keep their input order.
pub fn rank_by<T, F>(mut rows: Vec<T>, metric: F) -> Vec<T>
where
    F: Fn(&T) -> f64,
{
    rows.sort_by(|a, b| metric(b).partial_cmp(&metric(a)).unwrap_or(Ordering::Equal));
    rows
}

/// The best `n` rows by `metric`; fewer if fewer exist.
pub fn top_n<T, F>(rows: Vec<T>, n: usize, metric: F) -> Vec<T>
where
    F: Fn(&T) -> f64,
{
    let mut ranked = rank_by(rows, metric);
    ranked.truncate(n);
    ranked
}

/// Per-role slot counts for a squad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquadQuota {
    pub batsmen: usize,
    pub bowlers: usize,
    pub all_rounders: usize,
}

impl Default for SquadQuota {
    /// Four batsmen, four bowlers and three all-rounders.
    fn default() -> Self {
        Self {
            batsmen: 4,
            bowlers: 4,
            all_rounders: 3,
        }
    }
}

/// Top batsmen, then bowlers, then all-rounders by `rank`.
///
/// A role with fewer players than its quota contributes all it has.
pub fn select_squad(rows: &[PlayerRow], quota: SquadQuota, rank: RankBy) -> Vec<PlayerRow> {
    let pick = |role: Role, n: usize| {
        let pool: Vec<PlayerRow> = rows.iter().filter(|r| r.role() == role).cloned().collect();
        top_n(pool, n, |r| rank.value(r))
    };

    let mut squad = pick(Role::Batsman, quota.batsmen);
    squad.extend(pick(Role::Bowler, quota.bowlers));
    squad.extend(pick(Role::AllRounder, quota.all_rounders));
    squad
}

/// Candidates priced at or under `budget`, best value first, at most `count`.
pub fn recommend_within_budget(
    candidates: Vec<AuctionCandidate>,
    budget: f64,
    count: usize,
) -> Outcome<AuctionCandidate> {
    let affordable: Vec<AuctionCandidate> = candidates
        .into_iter()
        .filter(|c| c.estimated_price <= budget)
        .collect();

    Outcome::from_rows(top_n(affordable, count, |c| c.value_score), || {
        EmptyReason::NoneUnderBudget { budget }
    })
}
