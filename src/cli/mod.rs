//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{
    auction::{DEFAULT_BUDGET, DEFAULT_COUNT, MAX_COUNT, MIN_BUDGET},
    fantasy::DEFAULT_TOP_PLAYERS,
};
use types::{ids::MatchId, skill::Skill};

/// Where the datasets are read from.
#[derive(Debug, Args)]
pub struct DataArgs {
    /// Directory holding the datasets (or set `IPL_INSIGHTS_DATA_DIR` env var).
    #[clap(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Ball-by-ball CSV, overriding the file in the data directory.
    #[clap(long, global = true)]
    pub deliveries: Option<PathBuf>,

    /// Match CSV, overriding the file in the data directory.
    #[clap(long, global = true)]
    pub matches: Option<PathBuf>,

    /// Auction pool CSV, overriding the file in the data directory.
    #[clap(long, global = true)]
    pub auction_pool: Option<PathBuf>,

    /// Price model JSON, overriding the file in the data directory.
    #[clap(long, global = true)]
    pub price_model: Option<PathBuf>,
}

/// A single match and the output format.
#[derive(Debug, Args)]
pub struct MatchArgs {
    /// Match ID as listed by `list-matches`.
    #[clap(long, short)]
    pub match_id: MatchId,

    /// Output results as JSON instead of a table.
    #[clap(long)]
    pub json: bool,
}

/// The two teams a fantasy XI is built for.
#[derive(Debug, Args)]
pub struct TeamPair {
    #[clap(long)]
    pub team1: String,

    #[clap(long)]
    pub team2: String,

    /// Also show players whose name contains this text (case-insensitive).
    #[clap(long)]
    pub search: Option<String>,

    /// Output results as JSON instead of a table.
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every match with its teams and venue
    ListMatches {
        /// Output results as JSON instead of a table.
        #[clap(long)]
        json: bool,
    },

    /// Runs, wickets and completed overs for each batting side of a match
    MatchSummary {
        #[clap(flatten)]
        target: MatchArgs,
    },

    /// Compare two batters within a match
    ///
    /// Without names, the first two batters to face a ball are compared.
    CompareBatters {
        #[clap(flatten)]
        target: MatchArgs,

        #[clap(long)]
        player1: Option<String>,

        #[clap(long)]
        player2: Option<String>,
    },

    /// Compare two bowlers within a match
    ///
    /// Without names, the first two bowlers to bowl a ball are compared.
    CompareBowlers {
        #[clap(flatten)]
        target: MatchArgs,

        #[clap(long)]
        bowler1: Option<String>,

        #[clap(long)]
        bowler2: Option<String>,
    },

    /// Batting performance of both teams in a match
    TeamPerformance {
        #[clap(flatten)]
        target: MatchArgs,
    },

    /// Batting, bowling and combined impact of a player in a match
    PlayerImpact {
        #[clap(flatten)]
        target: MatchArgs,

        #[clap(long, short)]
        player: String,
    },

    /// Fantasy XI from head-to-head matches between two teams
    FantasyXi {
        #[clap(flatten)]
        teams: TeamPair,
    },

    /// Fantasy XI ranked by a model trained on season stats
    ///
    /// The player pool comes from the lineups of the first match between
    /// the two teams that has both lineups.
    FantasyXiMl {
        #[clap(flatten)]
        teams: TeamPair,

        /// Rows in the top players table.
        #[clap(long, default_value_t = DEFAULT_TOP_PLAYERS)]
        top: usize,
    },

    /// Value-for-money auction picks under a budget
    Auction {
        /// Budget in lakh rupees (at least 10).
        #[clap(long, short, default_value_t = DEFAULT_BUDGET, value_parser = parse_budget)]
        budget: f64,

        /// Player type to recommend.
        #[clap(long, short, value_enum)]
        skill: Skill,

        /// Number of recommendations (1-10).
        #[clap(long, short, default_value_t = DEFAULT_COUNT, value_parser = parse_count)]
        count: usize,

        /// Your team name, shown in the heading.
        #[clap(long)]
        team_name: Option<String>,

        /// Output results as JSON instead of a table.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "ipl-insights", about = "IPL match, fantasy and auction insights")]
pub struct Ipl {
    #[clap(flatten)]
    pub data: DataArgs,

    #[clap(subcommand)]
    pub command: Commands,
}

/// Budget in lakh, no lower than the minimum.
pub fn parse_budget(raw: &str) -> Result<f64, String> {
    let budget: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("`{}` is not a number", raw))?;
    if !budget.is_finite() || budget < MIN_BUDGET {
        return Err(format!("budget must be at least {}", MIN_BUDGET));
    }
    Ok(budget)
}

/// Recommendation count within 1..=10.
pub fn parse_count(raw: &str) -> Result<usize, String> {
    let count: usize = raw
        .trim()
        .parse()
        .map_err(|_| format!("`{}` is not a whole number", raw))?;
    if !(1..=MAX_COUNT).contains(&count) {
        return Err(format!("count must be between 1 and {}", MAX_COUNT));
    }
    Ok(count)
}
