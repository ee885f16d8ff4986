//! Per-match player commands: batter and bowler comparison, impact index.

use serde::Serialize;

use super::common::{find_match, fit_column, print_json, CommandContext};
use crate::{
    data::{DeliveryRecord, MatchRecord},
    stats::{
        aggregate_players,
        filters::{batters_in_order, bowlers_in_order, by_match},
        DerivedMetrics, Overs, PlayerAggregate,
    },
    InsightsError, MatchId, Result,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatterLine {
    pub player: String,
    pub runs: u32,
    pub balls_faced: u32,
    pub strike_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BowlerLine {
    pub player: String,
    pub runs_conceded: u32,
    pub overs: Overs,
    pub wickets: u32,
    pub economy_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerImpact {
    pub player: String,
    pub batting_impact: f64,
    pub bowling_impact: f64,
    pub impact_index: f64,
}

/// Aggregates for every player who appeared in one match.
struct MatchPlayers {
    aggregates: Vec<PlayerAggregate>,
    batters: Vec<String>,
    bowlers: Vec<String>,
}

impl MatchPlayers {
    fn collect(deliveries: &[DeliveryRecord], matches: &[MatchRecord], match_id: MatchId) -> Result<Self> {
        find_match(matches, match_id)?;
        let subset = by_match(deliveries, match_id);

        Ok(Self {
            batters: owned(batters_in_order(subset.iter().copied())),
            bowlers: owned(bowlers_in_order(subset.iter().copied())),
            aggregates: aggregate_players(subset),
        })
    }

    fn aggregate(&self, name: &str) -> Result<&PlayerAggregate> {
        self.aggregates
            .iter()
            .find(|a| a.player == name)
            .ok_or_else(|| not_found(name))
    }

    /// The two players to compare, defaulting to the first two in `order`.
    fn pick_pair(
        order: &[String],
        match_id: MatchId,
        role: &str,
        first: Option<&str>,
        second: Option<&str>,
    ) -> Result<[String; 2]> {
        let mut defaults = order.iter();
        let mut resolve = |given: Option<&str>| -> Result<String> {
            match given {
                Some(name) if order.iter().any(|p| p == name) => Ok(name.to_string()),
                Some(name) => Err(not_found(name)),
                None => defaults.next().cloned().ok_or_else(|| InsightsError::TooFewPlayers {
                    id: match_id.as_u32(),
                    role: role.to_string(),
                }),
            }
        };

        let first = resolve(first)?;
        let second = resolve(second)?;
        Ok([first, second])
    }
}

fn owned(names: Vec<&str>) -> Vec<String> {
    names.into_iter().map(str::to_string).collect()
}

fn not_found(name: &str) -> InsightsError {
    InsightsError::PlayerNotFound {
        name: name.to_string(),
    }
}

/// Runs, balls faced and strike rate for two batters of a match.
pub fn build_batter_comparison(
    deliveries: &[DeliveryRecord],
    matches: &[MatchRecord],
    match_id: MatchId,
    player1: Option<&str>,
    player2: Option<&str>,
) -> Result<[BatterLine; 2]> {
    let players = MatchPlayers::collect(deliveries, matches, match_id)?;
    let pair = MatchPlayers::pick_pair(&players.batters, match_id, "batters", player1, player2)?;

    let line = |name: &str| -> Result<BatterLine> {
        let agg = players.aggregate(name)?;
        Ok(BatterLine {
            player: agg.player.clone(),
            runs: agg.runs,
            balls_faced: agg.balls_faced,
            strike_rate: DerivedMetrics::from_aggregate(agg).strike_rate,
        })
    };
    Ok([line(&pair[0])?, line(&pair[1])?])
}

/// Runs conceded, overs, wickets and economy for two bowlers of a match.
pub fn build_bowler_comparison(
    deliveries: &[DeliveryRecord],
    matches: &[MatchRecord],
    match_id: MatchId,
    bowler1: Option<&str>,
    bowler2: Option<&str>,
) -> Result<[BowlerLine; 2]> {
    let players = MatchPlayers::collect(deliveries, matches, match_id)?;
    let pair = MatchPlayers::pick_pair(&players.bowlers, match_id, "bowlers", bowler1, bowler2)?;

    let line = |name: &str| -> Result<BowlerLine> {
        let agg = players.aggregate(name)?;
        let metrics = DerivedMetrics::from_aggregate(agg);
        Ok(BowlerLine {
            player: agg.player.clone(),
            runs_conceded: agg.runs_conceded,
            overs: metrics.overs,
            wickets: agg.wickets,
            economy_rate: metrics.economy_rate,
        })
    };
    Ok([line(&pair[0])?, line(&pair[1])?])
}

/// Batting, bowling and combined impact of one player within a match.
pub fn build_player_impact(
    deliveries: &[DeliveryRecord],
    matches: &[MatchRecord],
    match_id: MatchId,
    player: &str,
) -> Result<PlayerImpact> {
    let players = MatchPlayers::collect(deliveries, matches, match_id)?;
    let agg = players.aggregate(player)?;
    let metrics = DerivedMetrics::from_aggregate(agg);

    Ok(PlayerImpact {
        player: agg.player.clone(),
        batting_impact: metrics.batting_impact,
        bowling_impact: metrics.bowling_impact,
        impact_index: metrics.impact_index,
    })
}

/// Handle the compare-batters command
pub fn handle_compare_batters(
    ctx: &mut CommandContext,
    match_id: MatchId,
    player1: Option<&str>,
    player2: Option<&str>,
    as_json: bool,
) -> Result<()> {
    let deliveries = ctx.deliveries()?;
    let matches = ctx.matches()?;
    let lines = build_batter_comparison(&deliveries, &matches, match_id, player1, player2)?;

    if as_json {
        return print_json(&lines);
    }

    // tarpaulin::skip - console output
    println!("{:<24} {:<6} {:<6} SR", "Batter", "Runs", "Balls");
    println!("{:<24} {:<6} {:<6} --", "------", "----", "-----");
    for line in &lines {
        println!(
            "{:<24} {:<6} {:<6} {:.2}",
            fit_column(&line.player, 24),
            line.runs,
            line.balls_faced,
            line.strike_rate
        );
    }

    Ok(())
}

/// Handle the compare-bowlers command
pub fn handle_compare_bowlers(
    ctx: &mut CommandContext,
    match_id: MatchId,
    bowler1: Option<&str>,
    bowler2: Option<&str>,
    as_json: bool,
) -> Result<()> {
    let deliveries = ctx.deliveries()?;
    let matches = ctx.matches()?;
    let lines = build_bowler_comparison(&deliveries, &matches, match_id, bowler1, bowler2)?;

    if as_json {
        return print_json(&lines);
    }

    // tarpaulin::skip - console output
    println!("{:<24} {:<6} {:<6} {:<6} Econ", "Bowler", "Runs", "Overs", "Wkts");
    println!("{:<24} {:<6} {:<6} {:<6} ----", "------", "----", "-----", "----");
    for line in &lines {
        println!(
            "{:<24} {:<6} {:<6} {:<6} {:.2}",
            fit_column(&line.player, 24),
            line.runs_conceded,
            line.overs.to_string(),
            line.wickets,
            line.economy_rate
        );
    }

    Ok(())
}

/// Handle the player-impact command
pub fn handle_player_impact(
    ctx: &mut CommandContext,
    match_id: MatchId,
    player: &str,
    as_json: bool,
) -> Result<()> {
    let deliveries = ctx.deliveries()?;
    let matches = ctx.matches()?;
    let impact = build_player_impact(&deliveries, &matches, match_id, player)?;

    if as_json {
        return print_json(&impact);
    }

    // tarpaulin::skip - console output
    println!("Impact for {} in match {}", impact.player, match_id);
    println!("  Batting impact: {:.2}", impact.batting_impact);
    println!("  Bowling impact: {:.2}", impact.bowling_impact);
    println!("  Impact index:   {:.2}", impact.impact_index);

    Ok(())
}
