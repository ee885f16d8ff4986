//! Match dashboard commands: listing, innings summary and team performance.

use serde::Serialize;

use super::common::{find_match, fit_column, print_json, CommandContext};
use crate::{
    data::{DeliveryRecord, MatchRecord},
    stats::{
        aggregate_batting_teams, aggregate_team,
        filters::by_match,
        metrics::{run_rate, BALLS_PER_OVER},
        Overs, TeamAggregate,
    },
    MatchId, Result,
};

/// One line of the match list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchListing {
    pub id: MatchId,
    pub team1: String,
    pub team2: String,
    pub venue: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl From<&MatchRecord> for MatchListing {
    fn from(m: &MatchRecord) -> Self {
        Self {
            id: m.id,
            team1: m.team1.clone(),
            team2: m.team2.clone(),
            venue: m.venue.clone(),
            date: m.date.clone(),
        }
    }
}

/// Every match in file order.
pub fn list_matches(matches: &[MatchRecord]) -> Vec<MatchListing> {
    matches.iter().map(MatchListing::from).collect()
}

/// Innings line for the match summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InningsSummary {
    pub team: String,
    pub runs: u32,
    pub wickets: u32,
    /// Completed overs only; a partial over is not counted.
    pub overs: u32,
}

impl From<&TeamAggregate> for InningsSummary {
    fn from(agg: &TeamAggregate) -> Self {
        Self {
            team: agg.team.clone(),
            runs: agg.runs,
            wickets: agg.wickets,
            overs: agg.legal_deliveries / BALLS_PER_OVER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchSummary {
    #[serde(flatten)]
    pub listing: MatchListing,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winning_team: Option<String>,
    pub innings: Vec<InningsSummary>,
}

/// Per batting team totals for one match.
pub fn build_match_summary(
    deliveries: &[DeliveryRecord],
    matches: &[MatchRecord],
    match_id: MatchId,
) -> Result<MatchSummary> {
    let record = find_match(matches, match_id)?;
    let innings = aggregate_batting_teams(by_match(deliveries, match_id))
        .iter()
        .map(InningsSummary::from)
        .collect();

    Ok(MatchSummary {
        listing: MatchListing::from(record),
        winning_team: record.winning_team.clone(),
        innings,
    })
}

/// Batting performance of one side within a match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamPerformance {
    pub team: String,
    pub runs: u32,
    pub wickets_lost: u32,
    pub overs: Overs,
    pub run_rate: f64,
    pub fours: u32,
    pub sixes: u32,
}

impl From<TeamAggregate> for TeamPerformance {
    fn from(agg: TeamAggregate) -> Self {
        Self {
            run_rate: run_rate(agg.runs, agg.legal_deliveries),
            overs: Overs::from_legal_deliveries(agg.legal_deliveries),
            team: agg.team,
            runs: agg.runs,
            wickets_lost: agg.wickets,
            fours: agg.fours,
            sixes: agg.sixes,
        }
    }
}

/// `team1` then `team2` of the match, each as the batting side.
pub fn build_team_performance(
    deliveries: &[DeliveryRecord],
    matches: &[MatchRecord],
    match_id: MatchId,
) -> Result<[TeamPerformance; 2]> {
    let record = find_match(matches, match_id)?;
    let subset = by_match(deliveries, match_id);

    Ok([
        aggregate_team(subset.iter().copied(), &record.team1).into(),
        aggregate_team(subset.iter().copied(), &record.team2).into(),
    ])
}

/// Handle the list-matches command
pub fn handle_list_matches(ctx: &mut CommandContext, as_json: bool) -> Result<()> {
    let matches = ctx.matches()?;
    let listings = list_matches(&matches);

    if as_json {
        return print_json(&listings);
    }

    // tarpaulin::skip - console output
    println!("{:<10} {:<28} {:<28} Venue", "ID", "Team 1", "Team 2");
    println!("{:<10} {:<28} {:<28} -----", "--", "------", "------");
    for m in &listings {
        println!(
            "{:<10} {:<28} {:<28} {}",
            m.id,
            fit_column(&m.team1, 28),
            fit_column(&m.team2, 28),
            m.venue
        );
    }
    println!("\n{} matches", listings.len());

    Ok(())
}

/// Handle the match-summary command
pub fn handle_match_summary(ctx: &mut CommandContext, match_id: MatchId, as_json: bool) -> Result<()> {
    let deliveries = ctx.deliveries()?;
    let matches = ctx.matches()?;
    let summary = build_match_summary(&deliveries, &matches, match_id)?;

    if as_json {
        return print_json(&summary);
    }

    // tarpaulin::skip - console output
    println!(
        "Match {}: {} vs {}",
        summary.listing.id, summary.listing.team1, summary.listing.team2
    );
    println!("Venue: {}", summary.listing.venue);
    if let Some(winner) = &summary.winning_team {
        println!("Winner: {}", winner);
    }
    println!();
    println!("{:<28} {:<8} {:<8} Overs", "Team", "Runs", "Wkts");
    println!("{:<28} {:<8} {:<8} -----", "----", "----", "----");
    for innings in &summary.innings {
        println!(
            "{:<28} {:<8} {:<8} {}",
            fit_column(&innings.team, 28),
            innings.runs,
            innings.wickets,
            innings.overs
        );
    }

    Ok(())
}

/// Handle the team-performance command
pub fn handle_team_performance(
    ctx: &mut CommandContext,
    match_id: MatchId,
    as_json: bool,
) -> Result<()> {
    let deliveries = ctx.deliveries()?;
    let matches = ctx.matches()?;
    let teams = build_team_performance(&deliveries, &matches, match_id)?;

    if as_json {
        return print_json(&teams);
    }

    // tarpaulin::skip - console output
    println!(
        "{:<28} {:<6} {:<6} {:<6} {:<8} {:<6} Sixes",
        "Team", "Runs", "Wkts", "Overs", "RunRate", "Fours"
    );
    println!(
        "{:<28} {:<6} {:<6} {:<6} {:<8} {:<6} -----",
        "----", "----", "----", "-----", "-------", "-----"
    );
    for team in &teams {
        println!(
            "{:<28} {:<6} {:<6} {:<6} {:<8.2} {:<6} {}",
            fit_column(&team.team, 28),
            team.runs,
            team.wickets_lost,
            team.overs.to_string(),
            team.run_rate,
            team.fours,
            team.sixes
        );
    }

    Ok(())
}
