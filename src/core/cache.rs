//! Process-lifetime cache for the loaded datasets.
//!
//! Raw tables are expensive to parse and never change during a run, so each
//! one is loaded on first use and handed out as a shared `Arc` afterwards.
//! The cache is an explicit value owned by the command context; nothing here
//! is global.

use log::{debug, info};
use lru::LruCache;
use std::{
    fs,
    io::Read,
    num::NonZeroUsize,
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::data::{self, AuctionPlayer, DeliveryRecord, MatchRecord};
use crate::{InsightsError, Result};

/// Default number of distinct files kept per table kind.
pub const DEFAULT_CACHE_CAPACITY: usize = 4;

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Whether a lookup was served from memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Miss,
}

/// Tables of one record type keyed by the file they came from.
pub struct TableCache<T> {
    tables: LruCache<PathBuf, Arc<Vec<T>>>,
}

impl<T> TableCache<T> {
    pub fn new(capacity: usize) -> Result<Self> {
        let capacity = NonZeroUsize::new(capacity).ok_or(InsightsError::EmptyCache)?;
        Ok(Self {
            tables: LruCache::new(capacity),
        })
    }

    /// Return the table for `path`, running `load` only on the first request.
    ///
    /// A failed load is not cached.
    pub fn get_or_load<F>(&mut self, path: &Path, load: F) -> Result<(Arc<Vec<T>>, CacheStatus)>
    where
        F: FnOnce(&Path) -> Result<Vec<T>>,
    {
        let key = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());

        if let Some(table) = self.tables.get(&key) {
            debug!("Cache hit for {}", key.display());
            return Ok((Arc::clone(table), CacheStatus::Hit));
        }

        let table = Arc::new(load(path)?);
        info!("Loaded {} rows from {}", table.len(), path.display());
        self.tables.put(key, Arc::clone(&table));
        Ok((table, CacheStatus::Miss))
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// All raw datasets the commands read.
pub struct DatasetCache {
    deliveries: TableCache<DeliveryRecord>,
    matches: TableCache<MatchRecord>,
    auction_pool: TableCache<AuctionPlayer>,
}

impl DatasetCache {
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            deliveries: TableCache::new(capacity)?,
            matches: TableCache::new(capacity)?,
            auction_pool: TableCache::new(capacity)?,
        })
    }

    pub fn deliveries(&mut self, path: &Path) -> Result<(Arc<Vec<DeliveryRecord>>, CacheStatus)> {
        self.deliveries.get_or_load(path, data::load_deliveries)
    }

    pub fn matches(&mut self, path: &Path) -> Result<(Arc<Vec<MatchRecord>>, CacheStatus)> {
        self.matches.get_or_load(path, data::load_matches)
    }

    pub fn auction_pool(&mut self, path: &Path) -> Result<(Arc<Vec<AuctionPlayer>>, CacheStatus)> {
        self.auction_pool.get_or_load(path, data::load_auction_pool)
    }
}
