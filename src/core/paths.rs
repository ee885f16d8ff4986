//! Data directory and dataset file locations.

use std::path::{Path, PathBuf};

pub const DELIVERIES_FILE: &str = "IPL_Ball_by_Ball_2022.csv";
pub const MATCHES_FILE: &str = "IPL_Matches_2022.csv";
pub const AUCTION_POOL_FILE: &str = "ipl_cleaned_data.csv";
pub const PRICE_MODEL_FILE: &str = "ipl_price_predictor.json";

/// Path: ~/.local/share/ipl-insights (or the platform equivalent)
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|base| base.join("ipl-insights"))
}

/// Where every dataset is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub deliveries: PathBuf,
    pub matches: PathBuf,
    pub auction_pool: PathBuf,
    pub price_model: PathBuf,
}

impl DataPaths {
    /// Standard file names inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            deliveries: dir.join(DELIVERIES_FILE),
            matches: dir.join(MATCHES_FILE),
            auction_pool: dir.join(AUCTION_POOL_FILE),
            price_model: dir.join(PRICE_MODEL_FILE),
        }
    }

    /// Replace individual files where an override is given.
    pub fn with_overrides(
        mut self,
        deliveries: Option<PathBuf>,
        matches: Option<PathBuf>,
        auction_pool: Option<PathBuf>,
        price_model: Option<PathBuf>,
    ) -> Self {
        if let Some(p) = deliveries {
            self.deliveries = p;
        }
        if let Some(p) = matches {
            self.matches = p;
        }
        if let Some(p) = auction_pool {
            self.auction_pool = p;
        }
        if let Some(p) = price_model {
            self.price_model = p;
        }
        self
    }
}
