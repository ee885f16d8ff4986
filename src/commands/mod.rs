//! Command implementations for the IPL insights CLI

pub mod auction;
pub mod common;
pub mod fantasy;
pub mod match_data;
pub mod players;

use std::path::PathBuf;

use crate::{core::default_data_dir, InsightsError, Result, DATA_DIR_ENV_VAR};

/// Resolve the data directory: explicit flag, then environment, then the
/// platform data directory.
pub fn resolve_data_dir(data_dir: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = data_dir {
        return Ok(dir);
    }

    match std::env::var(DATA_DIR_ENV_VAR) {
        Ok(value) if !value.trim().is_empty() => return Ok(PathBuf::from(value.trim())),
        _ => {}
    }

    default_data_dir().ok_or_else(|| InsightsError::MissingDataDir {
        env_var: DATA_DIR_ENV_VAR.to_string(),
    })
}
