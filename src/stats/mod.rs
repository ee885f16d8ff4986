//! Match and player statistics engine
//!
//! - `filters`: delivery subsets by match, team pair, batting side; name search
//! - `aggregate`: per-player and per-team reductions
//! - `metrics`: rate, fantasy and impact formulas
//! - `ranking`: stable top-N, squad and budget selection
//! - `valuation`: auction pricing and value scores

pub mod aggregate;
pub mod filters;
pub mod metrics;
pub mod ranking;
pub mod valuation;

#[cfg(test)]
pub(crate) mod test_support;

pub use aggregate::{aggregate_batting_teams, aggregate_players, aggregate_team, PlayerAggregate, TeamAggregate};
pub use metrics::{DerivedMetrics, Overs, Role};
pub use ranking::{
    rank_by, rate_players, recommend_within_budget, select_squad, top_n, EmptyReason, Outcome,
    PlayerRow, RankBy, SquadQuota,
};
pub use valuation::{filter_by_skill, price_candidates, AuctionCandidate};
