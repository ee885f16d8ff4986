//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use ipl_insights::{
    cli::{Commands, Ipl},
    commands::{
        auction::handle_auction,
        common::CommandContext,
        fantasy::{handle_fantasy_xi, handle_fantasy_xi_ml},
        match_data::{handle_list_matches, handle_match_summary, handle_team_performance},
        players::{handle_compare_batters, handle_compare_bowlers, handle_player_impact},
        resolve_data_dir,
    },
    core::DataPaths,
};

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let app = Ipl::parse();

    let data_dir = resolve_data_dir(app.data.data_dir)?;
    log::debug!("Using data directory {}", data_dir.display());
    let paths = DataPaths::in_dir(&data_dir).with_overrides(
        app.data.deliveries,
        app.data.matches,
        app.data.auction_pool,
        app.data.price_model,
    );
    let mut ctx = CommandContext::new(paths)?;

    match app.command {
        Commands::ListMatches { json } => {
            handle_list_matches(&mut ctx, json).context("listing matches")?
        }

        Commands::MatchSummary { target } => {
            handle_match_summary(&mut ctx, target.match_id, target.json)
                .with_context(|| format!("summarising match {}", target.match_id))?
        }

        Commands::CompareBatters {
            target,
            player1,
            player2,
        } => handle_compare_batters(
            &mut ctx,
            target.match_id,
            player1.as_deref(),
            player2.as_deref(),
            target.json,
        )
        .with_context(|| format!("comparing batters in match {}", target.match_id))?,

        Commands::CompareBowlers {
            target,
            bowler1,
            bowler2,
        } => handle_compare_bowlers(
            &mut ctx,
            target.match_id,
            bowler1.as_deref(),
            bowler2.as_deref(),
            target.json,
        )
        .with_context(|| format!("comparing bowlers in match {}", target.match_id))?,

        Commands::TeamPerformance { target } => {
            handle_team_performance(&mut ctx, target.match_id, target.json)
                .with_context(|| format!("team performance for match {}", target.match_id))?
        }

        Commands::PlayerImpact { target, player } => {
            handle_player_impact(&mut ctx, target.match_id, &player, target.json)
                .with_context(|| format!("impact of {} in match {}", player, target.match_id))?
        }

        Commands::FantasyXi { teams } => handle_fantasy_xi(
            &mut ctx,
            &teams.team1,
            &teams.team2,
            teams.search.as_deref(),
            teams.json,
        )
        .with_context(|| format!("fantasy XI for {} vs {}", teams.team1, teams.team2))?,

        Commands::FantasyXiMl { teams, top } => handle_fantasy_xi_ml(
            &mut ctx,
            &teams.team1,
            &teams.team2,
            top,
            teams.search.as_deref(),
            teams.json,
        )
        .with_context(|| format!("ML fantasy XI for {} vs {}", teams.team1, teams.team2))?,

        Commands::Auction {
            budget,
            skill,
            count,
            team_name,
            json,
        } => handle_auction(&mut ctx, skill, budget, count, team_name.as_deref(), json)
            .with_context(|| format!("auction picks for {}", skill))?,
    }

    Ok(())
}
