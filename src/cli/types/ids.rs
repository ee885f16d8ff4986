//! ID types for IPL match data.

use crate::error::{InsightsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for match IDs.
///
/// Match IDs come straight from the `ID` column of both datasets and are the
/// join key between a match and its deliveries.
///
/// # Examples
///
/// ```rust
/// use ipl_insights::MatchId;
///
/// let match_id = MatchId::new(1312200);
/// assert_eq!(match_id.as_u32(), 1312200);
/// assert_eq!(match_id.to_string(), "1312200");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(pub u32);

impl MatchId {
    /// Create a new MatchId from a u32 value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the underlying u32 value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MatchId {
    type Err = InsightsError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}
