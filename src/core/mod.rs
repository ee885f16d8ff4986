//! Core utilities for the IPL insights CLI
//!
//! - `cache`: process-lifetime dataset cache
//! - `paths`: data directory and dataset file resolution

pub mod cache;
pub mod paths;

// Re-export commonly used items for convenience
pub use cache::{try_read_to_string, CacheStatus, DatasetCache, TableCache, DEFAULT_CACHE_CAPACITY};
pub use paths::{default_data_dir, DataPaths};
