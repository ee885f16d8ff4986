//! Auction pricing: skill filtering, price estimation and value scoring.

use log::warn;
use serde::Serialize;

use super::metrics::value_score;
use crate::data::AuctionPlayer;
use crate::model::price::{PriceFeatures, PricePredictor};
use crate::{InsightsError, Skill};

/// A pool player with an estimated price and value score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuctionCandidate {
    #[serde(flatten)]
    pub player: AuctionPlayer,
    pub estimated_price: f64,
    pub value_score: f64,
}

/// Players whose skill text matches `skill`, in pool order.
pub fn filter_by_skill(pool: &[AuctionPlayer], skill: Skill) -> Vec<&AuctionPlayer> {
    pool.iter().filter(|p| skill.matches(&p.skill)).collect()
}

/// Estimated prices for a batch of players.
///
/// A player the model cannot price is reported in the second vector and left
/// out of the first; the rest of the batch is still priced.
pub fn price_candidates<P: PricePredictor + ?Sized>(
    players: &[&AuctionPlayer],
    predictor: &P,
) -> (Vec<AuctionCandidate>, Vec<InsightsError>) {
    let mut priced = Vec::with_capacity(players.len());
    let mut failures = Vec::new();

    for player in players {
        match predictor.predict(&PriceFeatures::from(*player)) {
            Ok(estimated_price) => priced.push(AuctionCandidate {
                value_score: value_score(
                    player.ipl_caps,
                    estimated_price,
                    player.base_price,
                    player.age,
                ),
                estimated_price,
                player: (*player).clone(),
            }),
            Err(e) => {
                warn!("Price model rejected {}: {}", player.name, e);
                failures.push(InsightsError::Prediction {
                    player: player.name.clone(),
                    message: e.to_string(),
                });
            }
        }
    }

    (priced, failures)
}
