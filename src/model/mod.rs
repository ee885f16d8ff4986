//! Predictive models
//!
//! - `forest`: random-forest regressor trained per query for fantasy points
//! - `price`: auction price boundary and the linear model shipped with it

pub mod forest;
pub mod price;

pub use forest::{ForestConfig, RandomForest};
pub use price::{FeatureError, LinearPriceModel, PriceFeatures, PricePredictor};
