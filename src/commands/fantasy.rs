//! Fantasy XI commands: head-to-head points and the on-the-fly ML variant.

use serde::Serialize;
use std::collections::HashSet;

use super::common::{outcome_value, print_empty, print_json, print_player_table, CommandContext};
use crate::{
    data::{DeliveryRecord, MatchRecord},
    model::{ForestConfig, RandomForest},
    stats::{
        aggregate_players,
        filters::{by_team_pair, matches_between, restrict_to, search_by_name},
        rank_by, rate_players, select_squad, top_n, EmptyReason, Outcome, PlayerRow, RankBy,
        SquadQuota,
    },
    Result,
};

/// Number of rows in the ML top players table unless told otherwise.
pub const DEFAULT_TOP_PLAYERS: usize = 10;

/// Head-to-head players with a positive fantasy score.
///
/// Only deliveries from matches between the two teams (in either order) are
/// considered.
pub fn fantasy_pool(
    deliveries: &[DeliveryRecord],
    matches: &[MatchRecord],
    team1: &str,
    team2: &str,
) -> Outcome<PlayerRow> {
    if matches_between(matches, team1, team2).is_empty() {
        return Outcome::Empty(EmptyReason::NoMatchesBetween {
            team1: team1.to_string(),
            team2: team2.to_string(),
        });
    }

    let rows: Vec<PlayerRow> = rate_players(aggregate_players(by_team_pair(
        deliveries, matches, team1, team2,
    )))
    .into_iter()
    .filter(|r| r.metrics.fantasy_points > 0)
    .collect();

    Outcome::from_rows(rows, || EmptyReason::NoScoringPlayers)
}

/// Model inputs: runs, wickets, balls faced, legal deliveries bowled.
pub fn feature_row(row: &PlayerRow) -> Vec<f64> {
    vec![
        row.stats.runs as f64,
        row.stats.wickets as f64,
        row.stats.balls_faced as f64,
        row.stats.legal_deliveries as f64,
    ]
}

/// Fit a forest on `rows` against their fantasy points and annotate each row
/// with its prediction.
pub fn predict_points(rows: &mut [PlayerRow], config: &ForestConfig) {
    let features: Vec<Vec<f64>> = rows.iter().map(feature_row).collect();
    let targets: Vec<f64> = rows.iter().map(|r| r.metrics.fantasy_points as f64).collect();

    let forest = RandomForest::fit(&features, &targets, config);
    log::debug!(
        "Fitted {} trees on {} players",
        forest.n_trees(),
        features.len()
    );

    for (row, x) in rows.iter_mut().zip(&features) {
        row.predicted_points = Some(forest.predict(x));
    }
}

/// Season rows for the players named in the lineups of the first match
/// between the two teams, annotated with predicted points.
///
/// The teams may appear in either home/away order, as in the head-to-head
/// filter. Matches without both lineups are skipped.
pub fn ml_pool(
    deliveries: &[DeliveryRecord],
    matches: &[MatchRecord],
    team1: &str,
    team2: &str,
    config: &ForestConfig,
) -> Outcome<PlayerRow> {
    let lineups = matches_between(matches, team1, team2)
        .into_iter()
        .find_map(MatchRecord::lineups);
    let Some(lineups) = lineups else {
        return Outcome::Empty(EmptyReason::NoLineupsBetween {
            team1: team1.to_string(),
            team2: team2.to_string(),
        });
    };
    let pool: HashSet<String> = lineups.into_iter().collect();

    let mut rows = restrict_to(rate_players(aggregate_players(deliveries)), &pool);
    predict_points(&mut rows, config);

    Outcome::from_rows(rows, || EmptyReason::NoScoringPlayers)
}

/// An XI ordered by predicted points with its leadership picks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MlSquad {
    pub squad: Vec<PlayerRow>,
    pub captain: Option<String>,
    pub vice_captain: Option<String>,
}

/// Role-quota squad by predicted points, re-sorted as a whole.
pub fn pick_ml_squad(rows: &[PlayerRow]) -> MlSquad {
    let rank = RankBy::PredictedPoints;
    let squad = rank_by(select_squad(rows, SquadQuota::default(), rank), |r| {
        rank.value(r)
    });
    let name_at = |i: usize| squad.get(i).map(|r| r.stats.player.clone());

    MlSquad {
        captain: name_at(0),
        vice_captain: name_at(1),
        squad,
    }
}

/// The best `n` rows by predicted points.
pub fn top_predicted(rows: &[PlayerRow], n: usize) -> Vec<PlayerRow> {
    let rank = RankBy::PredictedPoints;
    top_n(rows.to_vec(), n, |r| rank.value(r))
}

/// Case-insensitive name search over the pool.
pub fn search_players(rows: &[PlayerRow], query: &str) -> Outcome<PlayerRow> {
    let hits = search_by_name(rows, query).into_iter().cloned().collect();
    Outcome::from_rows(hits, || EmptyReason::NoNameMatch {
        query: query.to_string(),
    })
}

fn print_search(outcome: &Outcome<PlayerRow>) {
    // tarpaulin::skip - console output
    println!();
    match outcome {
        Outcome::Rows(rows) => {
            println!("Search results:");
            print_player_table(rows);
        }
        Outcome::Empty(reason) => println!("{}", reason),
    }
}

/// Handle the fantasy-xi command
pub fn handle_fantasy_xi(
    ctx: &mut CommandContext,
    team1: &str,
    team2: &str,
    search: Option<&str>,
    as_json: bool,
) -> Result<()> {
    let deliveries = ctx.deliveries()?;
    let matches = ctx.matches()?;

    let rows = match fantasy_pool(&deliveries, &matches, team1, team2) {
        Outcome::Rows(rows) => rows,
        Outcome::Empty(reason) => return print_empty(&reason, as_json),
    };
    let squad = select_squad(&rows, SquadQuota::default(), RankBy::FantasyPoints);
    let found = search.map(|q| search_players(&rows, q));

    if as_json {
        let mut response = serde_json::json!({
            "team1": team1,
            "team2": team2,
            "squad": squad,
        });
        if let Some(found) = &found {
            response["search"] = outcome_value(found)?;
        }
        return print_json(&response);
    }

    // tarpaulin::skip - console output
    println!(
        "Recommended Fantasy XI for {} vs {} (head-to-head)",
        team1, team2
    );
    println!();
    print_player_table(&squad);
    if let Some(found) = &found {
        print_search(found);
    }

    Ok(())
}

/// Handle the fantasy-xi-ml command
pub fn handle_fantasy_xi_ml(
    ctx: &mut CommandContext,
    team1: &str,
    team2: &str,
    top: usize,
    search: Option<&str>,
    as_json: bool,
) -> Result<()> {
    let deliveries = ctx.deliveries()?;
    let matches = ctx.matches()?;

    if !as_json {
        println!("Training fantasy points model..."); // tarpaulin::skip
    }
    let rows = match ml_pool(&deliveries, &matches, team1, team2, &ForestConfig::default()) {
        Outcome::Rows(rows) => rows,
        Outcome::Empty(reason) => return print_empty(&reason, as_json),
    };
    let picks = pick_ml_squad(&rows);
    let top_rows = top_predicted(&rows, top);
    let found = search.map(|q| search_players(&rows, q));

    if as_json {
        let mut response = serde_json::json!({
            "team1": team1,
            "team2": team2,
            "squad": picks.squad,
            "captain": picks.captain,
            "vice_captain": picks.vice_captain,
            "top_players": top_rows,
        });
        if let Some(found) = &found {
            response["search"] = outcome_value(found)?;
        }
        return print_json(&response);
    }

    // tarpaulin::skip - console output
    println!("Recommended Fantasy XI for {} vs {}", team1, team2);
    println!();
    print_player_table(&picks.squad);
    println!();
    if let Some(captain) = &picks.captain {
        println!("Captain: {}", captain);
    }
    if let Some(vice_captain) = &picks.vice_captain {
        println!("Vice-Captain: {}", vice_captain);
    }
    println!();
    println!("Top {} Fantasy Players", top);
    print_player_table(&top_rows);
    if let Some(found) = &found {
        print_search(found);
    }

    Ok(())
}
