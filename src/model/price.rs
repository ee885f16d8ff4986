//! Auction price prediction boundary.
//!
//! The pricing model is trained elsewhere; this crate only needs something
//! that turns a player's features into a price. [`LinearPriceModel`] is the
//! shipped implementation, loaded from a JSON export of the fitted
//! coefficients:
//!
//! ```json
//! {
//!   "intercept": 40.0,
//!   "age": -1.2,
//!   "ipl_caps": 0.9,
//!   "skill": { "BATSMAN": 25.0, "BOWLER": 18.0 },
//!   "status": { "CAPPED": 60.0, "UNCAPPED": 0.0 }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::core::try_read_to_string;
use crate::data::AuctionPlayer;
use crate::{InsightsError, Result};

/// The features the price model is trained on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceFeatures {
    pub age: Option<f64>,
    pub skill: String,
    pub ipl_caps: Option<f64>,
    pub status: Option<String>,
}

impl From<&AuctionPlayer> for PriceFeatures {
    fn from(player: &AuctionPlayer) -> Self {
        Self {
            age: player.age,
            skill: player.skill.clone(),
            ipl_caps: player.ipl_caps,
            status: player.status.clone(),
        }
    }
}

/// Why a feature row could not be priced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeatureError {
    #[error("unknown skill category `{0}`")]
    UnknownSkill(String),

    #[error("unknown player status `{0}`")]
    UnknownStatus(String),

    #[error("player status is missing")]
    MissingStatus,

    #[error("age is missing")]
    MissingAge,

    #[error("model produced a non-finite price")]
    NonFinite,
}

/// Anything that can estimate a player's auction price in lakh rupees.
pub trait PricePredictor {
    fn predict(&self, features: &PriceFeatures) -> std::result::Result<f64, FeatureError>;
}

/// Linear model with one-hot encoded skill and status.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LinearPriceModel {
    pub intercept: f64,
    pub age: f64,
    pub ipl_caps: f64,
    pub skill: HashMap<String, f64>,
    pub status: HashMap<String, f64>,
}

impl LinearPriceModel {
    /// Parse and validate a JSON model export.
    pub fn from_json(json: &str) -> Result<Self> {
        let parsed: LinearPriceModel = serde_json::from_str(json)?;
        parsed.normalized()
    }

    /// Load a JSON model export from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = try_read_to_string(path).ok_or_else(|| InsightsError::InvalidModel {
            message: format!("cannot read {}", path.display()),
        })?;
        Self::from_json(&json)
    }

    /// Upper-case category keys and reject non-finite coefficients.
    fn normalized(self) -> Result<Self> {
        let upper = |map: HashMap<String, f64>| -> HashMap<String, f64> {
            map.into_iter()
                .map(|(k, v)| (k.trim().to_uppercase(), v))
                .collect()
        };
        let model = Self {
            skill: upper(self.skill),
            status: upper(self.status),
            ..self
        };

        let all_finite = [model.intercept, model.age, model.ipl_caps]
            .iter()
            .chain(model.skill.values())
            .chain(model.status.values())
            .all(|c| c.is_finite());
        if !all_finite {
            return Err(InsightsError::InvalidModel {
                message: "coefficients must be finite".to_string(),
            });
        }
        if model.skill.is_empty() || model.status.is_empty() {
            return Err(InsightsError::InvalidModel {
                message: "skill and status categories must not be empty".to_string(),
            });
        }
        Ok(model)
    }
}

impl PricePredictor for LinearPriceModel {
    fn predict(&self, features: &PriceFeatures) -> std::result::Result<f64, FeatureError> {
        let age = features.age.ok_or(FeatureError::MissingAge)?;
        let skill_key = features.skill.trim().to_uppercase();
        let skill = self
            .skill
            .get(&skill_key)
            .ok_or_else(|| FeatureError::UnknownSkill(features.skill.clone()))?;
        let status_raw = features.status.as_deref().ok_or(FeatureError::MissingStatus)?;
        let status = self
            .status
            .get(&status_raw.trim().to_uppercase())
            .ok_or_else(|| FeatureError::UnknownStatus(status_raw.to_string()))?;

        let price = self.intercept
            + self.age * age
            + self.ipl_caps * features.ipl_caps.unwrap_or(0.0)
            + skill
            + status;

        if price.is_finite() {
            Ok(price)
        } else {
            Err(FeatureError::NonFinite)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODEL_JSON: &str = r#"{
        "intercept": 40.0,
        "age": -1.0,
        "ipl_caps": 0.5,
        "skill": { "batsman": 25.0, "BOWLER": 18.0 },
        "status": { "Capped": 60.0, "UNCAPPED": 0.0 }
    }"#;

    fn features(age: Option<f64>, skill: &str, caps: Option<f64>, status: Option<&str>) -> PriceFeatures {
        PriceFeatures {
            age,
            skill: skill.to_string(),
            ipl_caps: caps,
            status: status.map(str::to_string),
        }
    }

    #[test]
    fn test_predict() {
        let model = LinearPriceModel::from_json(MODEL_JSON).unwrap();
        let price = model
            .predict(&features(Some(30.0), "Batsman", Some(100.0), Some("capped")))
            .unwrap();
        // 40 - 30 + 50 + 25 + 60
        assert!((price - 145.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_caps_count_as_zero() {
        let model = LinearPriceModel::from_json(MODEL_JSON).unwrap();
        let price = model
            .predict(&features(Some(20.0), "BOWLER", None, Some("Uncapped")))
            .unwrap();
        assert!((price - 38.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_malformed_features() {
        let model = LinearPriceModel::from_json(MODEL_JSON).unwrap();

        assert_eq!(
            model.predict(&features(None, "BOWLER", None, Some("Capped"))),
            Err(FeatureError::MissingAge)
        );
        assert_eq!(
            model.predict(&features(Some(22.0), "SPINNER", None, Some("Capped"))),
            Err(FeatureError::UnknownSkill("SPINNER".to_string()))
        );
        assert_eq!(
            model.predict(&features(Some(22.0), "BOWLER", None, Some("Retired"))),
            Err(FeatureError::UnknownStatus("Retired".to_string()))
        );
        assert_eq!(
            model.predict(&features(Some(22.0), "BOWLER", None, None)),
            Err(FeatureError::MissingStatus)
        );
    }

    #[test]
    fn test_invalid_model_json() {
        assert!(matches!(
            LinearPriceModel::from_json("{\"intercept\": 1.0}"),
            Err(InsightsError::Json(_))
        ));

        let no_categories = r#"{"intercept": 1, "age": 0, "ipl_caps": 0, "skill": {}, "status": {}}"#;
        assert!(matches!(
            LinearPriceModel::from_json(no_categories),
            Err(InsightsError::InvalidModel { .. })
        ));
    }

    #[test]
    fn test_missing_model_file() {
        let result = LinearPriceModel::from_path(Path::new("/nonexistent/ipl_price_predictor.json"));
        assert!(matches!(result, Err(InsightsError::InvalidModel { .. })));
    }
}
