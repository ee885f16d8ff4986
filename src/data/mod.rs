//! Typed tables loaded from the season's CSV exports
//!
//! - `types`: delivery, match and auction-pool records
//! - `loader`: schema-checked CSV readers
//! - `player_list`: strict parser for the lineup columns of the match table

pub mod loader;
pub mod player_list;
pub mod types;

pub use loader::{
    load_auction_pool, load_deliveries, load_matches, read_auction_pool, read_deliveries,
    read_matches,
};
pub use types::{AuctionPlayer, DeliveryRecord, MatchRecord};
