//! IPL Insights Library
//!
//! Match and player statistics for IPL ball-by-ball data: filtering,
//! aggregation, derived metrics and ranking, plus the fantasy XI and auction
//! recommenders built on top of them.
//!
//! ## Features
//!
//! - **Match Dashboard**: Innings summaries, batter/bowler comparisons and impact index
//! - **Fantasy XI**: Role-quota squads from head-to-head points or a per-query random forest
//! - **Auction Recommender**: Value-for-money picks under a budget from a price model
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ipl_insights::{
//!     commands::fantasy::fantasy_pool,
//!     core::{DataPaths, DatasetCache},
//!     stats::{select_squad, Outcome, RankBy, SquadQuota},
//! };
//! use std::path::Path;
//!
//! # fn example() -> ipl_insights::Result<()> {
//! let paths = DataPaths::in_dir(Path::new("/data/ipl"));
//! let mut cache = DatasetCache::new(4)?;
//! let (deliveries, _) = cache.deliveries(&paths.deliveries)?;
//! let (matches, _) = cache.matches(&paths.matches)?;
//!
//! match fantasy_pool(&deliveries, &matches, "Gujarat Titans", "Rajasthan Royals") {
//!     Outcome::Rows(rows) => {
//!         for row in select_squad(&rows, SquadQuota::default(), RankBy::FantasyPoints) {
//!             println!("{} {}", row.stats.player, row.metrics.fantasy_points);
//!         }
//!     }
//!     Outcome::Empty(reason) => println!("{}", reason),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at your dataset directory to avoid passing it in every command:
//! ```bash
//! export IPL_INSIGHTS_DATA_DIR=/data/ipl
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod data;
pub mod error;
pub mod model;
pub mod stats;

// Re-export commonly used types
pub use cli::types::{ids::MatchId, skill::Skill};
pub use error::{InsightsError, Result};

pub const DATA_DIR_ENV_VAR: &str = "IPL_INSIGHTS_DATA_DIR";
