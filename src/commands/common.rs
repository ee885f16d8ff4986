//! Common utilities and helper functions shared across commands.

use serde::Serialize;
use std::sync::Arc;

use crate::{
    core::{CacheStatus, DataPaths, DatasetCache, DEFAULT_CACHE_CAPACITY},
    data::{AuctionPlayer, DeliveryRecord, MatchRecord},
    stats::{EmptyReason, Outcome, PlayerRow},
    InsightsError, MatchId, Result,
};

/// Context containing common resources needed by most commands
pub struct CommandContext {
    pub paths: DataPaths,
    cache: DatasetCache,
}

impl CommandContext {
    pub fn new(paths: DataPaths) -> Result<Self> {
        Ok(Self {
            paths,
            cache: DatasetCache::new(DEFAULT_CACHE_CAPACITY)?,
        })
    }

    pub fn deliveries(&mut self) -> Result<Arc<Vec<DeliveryRecord>>> {
        let (table, status) = self.cache.deliveries(&self.paths.deliveries)?;
        log_status("deliveries", status);
        Ok(table)
    }

    pub fn matches(&mut self) -> Result<Arc<Vec<MatchRecord>>> {
        let (table, status) = self.cache.matches(&self.paths.matches)?;
        log_status("matches", status);
        Ok(table)
    }

    pub fn auction_pool(&mut self) -> Result<Arc<Vec<AuctionPlayer>>> {
        let (table, status) = self.cache.auction_pool(&self.paths.auction_pool)?;
        log_status("auction pool", status);
        Ok(table)
    }
}

fn log_status(dataset: &str, status: CacheStatus) {
    match status {
        CacheStatus::Hit => log::debug!("{} served from cache", dataset),
        CacheStatus::Miss => log::debug!("{} loaded from disk", dataset),
    }
}

/// Look up a match by ID.
pub fn find_match(matches: &[MatchRecord], id: MatchId) -> Result<&MatchRecord> {
    matches
        .iter()
        .find(|m| m.id == id)
        .ok_or(InsightsError::MatchNotFound { id: id.as_u32() })
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?); // tarpaulin::skip
    Ok(())
}

fn empty_value(reason: &EmptyReason) -> serde_json::Value {
    serde_json::json!({
        "error": "No data for this selection",
        "message": reason.to_string(),
        "details": reason,
    })
}

/// JSON form of an outcome: the rows, or the error object for an empty one.
pub fn outcome_value<T: Serialize>(outcome: &Outcome<T>) -> Result<serde_json::Value> {
    match outcome {
        Outcome::Rows(rows) => Ok(serde_json::to_value(rows)?),
        Outcome::Empty(reason) => Ok(empty_value(reason)),
    }
}

/// Report an explicit "no data for this selection" state.
pub fn print_empty(reason: &EmptyReason, as_json: bool) -> Result<()> {
    if as_json {
        print_json(&empty_value(reason))
    } else {
        println!("⚠ No data for this selection: {}", reason); // tarpaulin::skip
        Ok(())
    }
}

/// Player table with fantasy points, and predicted points when present.
pub fn print_player_table(rows: &[PlayerRow]) {
    let predicted = rows.iter().any(|r| r.predicted_points.is_some());

    // tarpaulin::skip - console output
    println!(
        "{:<24} {:<12} {:<6} {:<6} {:<7} {}",
        "Player",
        "Role",
        "Runs",
        "Wkts",
        "Points",
        if predicted { "Predicted" } else { "" }
    );
    println!(
        "{:<24} {:<12} {:<6} {:<6} {:<7} {}",
        "------",
        "----",
        "----",
        "----",
        "------",
        if predicted { "---------" } else { "" }
    );
    for row in rows {
        let prediction = row
            .predicted_points
            .map(|p| format!("{:.2}", p))
            .unwrap_or_default();
        println!(
            "{:<24} {:<12} {:<6} {:<6} {:<7} {}",
            fit_column(&row.stats.player, 24),
            row.role().to_string(),
            row.stats.runs,
            row.stats.wickets,
            row.metrics.fantasy_points,
            prediction
        );
    }
}

/// Truncate a name to a fixed-width table column.
pub fn fit_column(name: &str, width: usize) -> String {
    name.chars().take(width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::test_support::fixture;

    #[test]
    fn test_find_match() {
        let matches = vec![fixture(1, "A", "B"), fixture(2, "C", "D")];
        assert_eq!(find_match(&matches, MatchId::new(2)).unwrap().team1, "C");

        match find_match(&matches, MatchId::new(9)) {
            Err(InsightsError::MatchNotFound { id }) => assert_eq!(id, 9),
            other => panic!("Expected MatchNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_outcome_value() {
        let rows: Outcome<u32> = Outcome::Rows(vec![1, 2]);
        assert_eq!(outcome_value(&rows).unwrap(), serde_json::json!([1, 2]));

        let empty: Outcome<u32> = Outcome::Empty(EmptyReason::NoScoringPlayers);
        let value = outcome_value(&empty).unwrap();
        assert_eq!(value["error"], "No data for this selection");
        assert_eq!(value["details"]["reason"], "no_scoring_players");
    }

    #[test]
    fn test_fit_column() {
        assert_eq!(fit_column("Ravichandran Ashwin", 10), "Ravichandr");
        assert_eq!(fit_column("Rashid", 10), "Rashid");
    }

    #[test]
    fn test_context_rejects_missing_files() {
        let paths = DataPaths::in_dir(std::path::Path::new("/nonexistent/ipl"));
        let mut ctx = CommandContext::new(paths).unwrap();
        assert!(matches!(ctx.deliveries(), Err(InsightsError::Io(_))));
    }
}
