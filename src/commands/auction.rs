//! Auction recommender command

use super::common::{fit_column, outcome_value, print_empty, print_json, CommandContext};
use crate::{
    data::AuctionPlayer,
    model::{LinearPriceModel, PricePredictor},
    stats::{filter_by_skill, price_candidates, recommend_within_budget, AuctionCandidate, EmptyReason, Outcome},
    InsightsError, Result, Skill,
};

/// Smallest budget accepted, in lakh rupees.
pub const MIN_BUDGET: f64 = 10.0;
pub const DEFAULT_BUDGET: f64 = 500.0;
pub const DEFAULT_COUNT: usize = 5;
pub const MAX_COUNT: usize = 10;

/// Recommendations plus the players the model could not price.
#[derive(Debug)]
pub struct Recommendations {
    pub outcome: Outcome<AuctionCandidate>,
    pub failures: Vec<InsightsError>,
}

/// Best-value players of `skill` whose estimated price fits `budget`.
pub fn build_recommendations<P: PricePredictor + ?Sized>(
    pool: &[AuctionPlayer],
    predictor: &P,
    skill: Skill,
    budget: f64,
    count: usize,
) -> Recommendations {
    let eligible = filter_by_skill(pool, skill);
    if eligible.is_empty() {
        return Recommendations {
            outcome: Outcome::Empty(EmptyReason::NoPlayersForSkill { skill }),
            failures: Vec::new(),
        };
    }

    let (priced, failures) = price_candidates(&eligible, predictor);
    log::debug!(
        "Priced {} of {} {} players",
        priced.len(),
        eligible.len(),
        skill
    );

    Recommendations {
        outcome: recommend_within_budget(priced, budget, count),
        failures,
    }
}

/// Handle the auction command
pub fn handle_auction(
    ctx: &mut CommandContext,
    skill: Skill,
    budget: f64,
    count: usize,
    team_name: Option<&str>,
    as_json: bool,
) -> Result<()> {
    let pool = ctx.auction_pool()?;
    let model = LinearPriceModel::from_path(&ctx.paths.price_model)?;
    let recs = build_recommendations(&pool, &model, skill, budget, count);

    let failed: Vec<String> = recs.failures.iter().map(|e| e.to_string()).collect();

    if as_json {
        let response = serde_json::json!({
            "team_name": team_name,
            "skill": skill,
            "budget": budget,
            "recommendations": outcome_value(&recs.outcome)?,
            "unpriced": failed,
        });
        return print_json(&response);
    }

    // tarpaulin::skip - console output
    for line in &failed {
        println!("⚠ {}", line);
    }

    let candidates = match &recs.outcome {
        Outcome::Rows(rows) => rows,
        Outcome::Empty(reason) => return print_empty(reason, false),
    };

    match team_name {
        Some(team) => println!("Top value-for-money {} picks for {}", skill, team),
        None => println!("Top value-for-money {} picks", skill),
    }
    println!("Budget: {:.0} lakh", budget);
    println!();
    println!(
        "{:<24} {:<14} {:<5} {:<5} {:<10} {:<10} Score",
        "Player", "Skill", "Age", "Caps", "Base", "Estimate"
    );
    println!(
        "{:<24} {:<14} {:<5} {:<5} {:<10} {:<10} -----",
        "------", "-----", "---", "----", "----", "--------"
    );
    for c in candidates {
        let or_dash = |v: Option<f64>| v.map(|x| format!("{:.0}", x)).unwrap_or_else(|| "-".to_string());
        println!(
            "{:<24} {:<14} {:<5} {:<5} {:<10.1} {:<10.1} {:.2}",
            fit_column(&c.player.name, 24),
            fit_column(&c.player.skill, 14),
            or_dash(c.player.age),
            or_dash(c.player.ipl_caps),
            c.player.base_price,
            c.estimated_price,
            c.value_score
        );
        if let Some(teams) = &c.player.previous_teams {
            println!("    previously: {}", teams);
        }
    }

    Ok(())
}
