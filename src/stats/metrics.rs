//! Derived statistics.
//!
//! All functions here are pure. Every rate returns exactly `0.0` when its
//! denominator is zero so the output never contains NaN or infinity.
//!
//! Some formulas reproduce published numbers rather than textbook cricket
//! maths and must not be "corrected":
//! - [`fantasy_points`] adds boundary bonuses on top of runs that already
//!   include those boundaries.
//! - [`Overs`] uses X.Y notation (7 legal balls is `1.1`, not `1.17`).
//! - [`bowling_impact`] treats an economy of exactly zero as one.

use serde::{Serialize, Serializer};
use std::fmt;

use super::aggregate::PlayerAggregate;

/// Balls in an over.
pub const BALLS_PER_OVER: u32 = 6;

/// Overs bowled or faced in cricket notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Overs {
    pub completed: u32,
    pub balls: u32,
}

impl Overs {
    pub fn from_legal_deliveries(legal_deliveries: u32) -> Self {
        Self {
            completed: legal_deliveries / BALLS_PER_OVER,
            balls: legal_deliveries % BALLS_PER_OVER,
        }
    }

    /// `completed + balls / 10`, e.g. 1.1 for seven balls.
    pub fn as_notation(&self) -> f64 {
        self.completed as f64 + self.balls as f64 / 10.0
    }
}

impl fmt::Display for Overs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.completed, self.balls)
    }
}

impl Serialize for Overs {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_notation())
    }
}

/// Runs per 100 balls faced.
pub fn strike_rate(runs: u32, balls_faced: u32) -> f64 {
    if balls_faced == 0 {
        return 0.0;
    }
    runs as f64 / balls_faced as f64 * 100.0
}

/// Runs conceded per six legal deliveries.
pub fn economy_rate(runs_conceded: u32, legal_deliveries: u32) -> f64 {
    per_over(runs_conceded, legal_deliveries)
}

/// Runs scored per six legal deliveries.
pub fn run_rate(total_runs: u32, legal_deliveries: u32) -> f64 {
    per_over(total_runs, legal_deliveries)
}

fn per_over(runs: u32, legal_deliveries: u32) -> f64 {
    if legal_deliveries == 0 {
        return 0.0;
    }
    runs as f64 / (legal_deliveries as f64 / BALLS_PER_OVER as f64)
}

/// `runs + 25 * wickets + runs / 4 + 2 * (runs / 6)` with integer division.
pub fn fantasy_points(runs: u32, wickets: u32) -> u32 {
    runs + wickets * 25 + runs / 4 + (runs / 6) * 2
}

pub fn batting_impact(runs: u32, strike_rate: f64, boundaries: u32) -> f64 {
    runs as f64 * 0.5 + strike_rate * 0.3 + boundaries as f64 * 0.2
}

pub fn bowling_impact(wickets: u32, economy_rate: f64, dot_balls: u32) -> f64 {
    let economy = if economy_rate == 0.0 { 1.0 } else { economy_rate };
    wickets as f64 * 0.4 + (1.0 / economy) * 0.4 + dot_balls as f64 * 0.2
}

pub fn impact_index(batting_impact: f64, bowling_impact: f64) -> f64 {
    batting_impact * 0.6 + bowling_impact * 0.4
}

/// Auction value: experience plus price surplus, minus an age penalty.
///
/// Missing caps count as 0 and a missing age as 30.
pub fn value_score(
    ipl_caps: Option<f64>,
    predicted_price: f64,
    base_price: f64,
    age: Option<f64>,
) -> f64 {
    ipl_caps.unwrap_or(0.0) * 2.0 + (predicted_price - base_price).max(0.0)
        - age.unwrap_or(30.0) * 0.3
}

/// Fantasy role derived from season output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Role {
    #[serde(rename = "Batsman")]
    Batsman,
    #[serde(rename = "Bowler")]
    Bowler,
    #[serde(rename = "All-Rounder")]
    AllRounder,
}

impl Role {
    /// `All-Rounder` needs more than 200 runs and more than 5 wickets;
    /// otherwise `Batsman` when runs exceed 20 per wicket, else `Bowler`.
    pub fn classify(runs: u32, wickets: u32) -> Self {
        if runs > 200 && wickets > 5 {
            Role::AllRounder
        } else if runs > wickets * 20 {
            Role::Batsman
        } else {
            Role::Bowler
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Batsman => "Batsman",
            Role::Bowler => "Bowler",
            Role::AllRounder => "All-Rounder",
        };
        write!(f, "{}", s)
    }
}

/// Everything derived from one [`PlayerAggregate`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedMetrics {
    pub strike_rate: f64,
    pub overs: Overs,
    pub economy_rate: f64,
    pub fantasy_points: u32,
    pub batting_impact: f64,
    pub bowling_impact: f64,
    pub impact_index: f64,
    pub role: Role,
}

impl DerivedMetrics {
    pub fn from_aggregate(agg: &PlayerAggregate) -> Self {
        let strike_rate = strike_rate(agg.runs, agg.balls_faced);
        let economy_rate = economy_rate(agg.runs_conceded, agg.legal_deliveries);
        let batting_impact = batting_impact(agg.runs, strike_rate, agg.boundaries);
        let bowling_impact = bowling_impact(agg.wickets, economy_rate, agg.dot_balls);

        Self {
            strike_rate,
            overs: Overs::from_legal_deliveries(agg.legal_deliveries),
            economy_rate,
            fantasy_points: fantasy_points(agg.runs, agg.wickets),
            batting_impact,
            bowling_impact,
            impact_index: impact_index(batting_impact, bowling_impact),
            role: Role::classify(agg.runs, agg.wickets),
        }
    }
}
