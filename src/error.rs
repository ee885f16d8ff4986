//! Error types for the IPL insights CLI

use thiserror::Error;


pub type Result<T> = std::result::Result<T, InsightsError>;

#[derive(Error, Debug)]
pub enum InsightsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse match ID: {0}")]
    InvalidMatchId(#[from] std::num::ParseIntError),

    #[error("Schema error in {dataset}: {message}")]
    Schema { dataset: String, message: String },

    #[error("Data directory not provided and {env_var} environment variable not set")]
    MissingDataDir { env_var: String },

    #[error("Match not found: {id}")]
    MatchNotFound { id: u32 },

    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },

    #[error("Match {id} has fewer than two {role} to compare")]
    TooFewPlayers { id: u32, role: String },

    #[error("Unable to estimate price for {player}: {message}")]
    Prediction { player: String, message: String },

    #[error("Invalid price model: {message}")]
    InvalidModel { message: String },

    #[error("Dataset cache capacity must be non-zero")]
    EmptyCache,
}

impl InsightsError {
    /// Shorthand for a schema error against a named dataset.
    pub fn schema(dataset: impl Into<String>, message: impl Into<String>) -> Self {
        InsightsError::Schema {
            dataset: dataset.into(),
            message: message.into(),
        }
    }
}
