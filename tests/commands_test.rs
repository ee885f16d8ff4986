//! Integration tests for command handlers

use ipl_insights::{
    commands::{
        auction::build_recommendations,
        common::CommandContext,
        fantasy::{fantasy_pool, ml_pool, pick_ml_squad},
        match_data::{build_match_summary, build_team_performance, list_matches},
        players::{build_batter_comparison, build_player_impact},
        resolve_data_dir,
    },
    core::DataPaths,
    model::{ForestConfig, LinearPriceModel},
    stats::{select_squad, EmptyReason, Outcome, RankBy, SquadQuota},
    InsightsError, MatchId, Skill, DATA_DIR_ENV_VAR,
};
use std::{fs, path::PathBuf};
use tempfile::TempDir;

const DELIVERIES_CSV: &str = "\
ID,innings,overs,ballnumber,batter,bowler,non-striker,extra_type,batsman_run,extras_run,total_run,non_boundary,isWicketDelivery,player_out,kind,fielders_involved,BattingTeam
1312200,1,0,1,YBK Jaiswal,Mohammed Shami,JC Buttler,NA,0,0,0,0,0,NA,NA,NA,Rajasthan Royals
1312200,1,0,2,YBK Jaiswal,Mohammed Shami,JC Buttler,legbyes,0,1,1,0,0,NA,NA,NA,Rajasthan Royals
1312200,1,0,3,JC Buttler,Mohammed Shami,YBK Jaiswal,NA,4,0,4,0,0,NA,NA,NA,Rajasthan Royals
1312200,1,0,4,JC Buttler,Mohammed Shami,YBK Jaiswal,wides,0,1,1,0,0,NA,NA,NA,Rajasthan Royals
1312200,1,0,5,JC Buttler,Mohammed Shami,YBK Jaiswal,NA,6,0,6,0,0,NA,NA,NA,Rajasthan Royals
1312200,1,0,6,JC Buttler,Mohammed Shami,YBK Jaiswal,NA,0,0,0,0,1,JC Buttler,caught,Rashid Khan,Rajasthan Royals
1312200,1,1,1,SV Samson,Rashid Khan,YBK Jaiswal,NA,1,0,1,0,0,NA,NA,NA,Rajasthan Royals
1312200,1,1,2,YBK Jaiswal,Rashid Khan,SV Samson,NA,2,0,2,0,0,NA,NA,NA,Rajasthan Royals
1312200,2,0,1,WP Saha,TA Boult,Shubman Gill,NA,4,0,4,0,0,NA,NA,NA,Gujarat Titans
1312200,2,0,2,Shubman Gill,TA Boult,WP Saha,NA,1,0,1,0,0,NA,NA,NA,Gujarat Titans
1312200,2,0,3,WP Saha,TA Boult,Shubman Gill,NA,0,0,0,0,1,WP Saha,bowled,NA,Gujarat Titans
1312199,1,0,1,Shubman Gill,JR Hazlewood,WP Saha,NA,4,0,4,0,0,NA,NA,NA,Gujarat Titans
1312199,2,0,1,V Kohli,Mohammed Shami,F du Plessis,NA,6,0,6,0,0,NA,NA,NA,Royal Challengers Bangalore
";

const MATCHES_CSV: &str = "\
ID,City,Date,Season,MatchNumber,Team1,Team2,Venue,TossWinner,TossDecision,SuperOver,WinningTeam,WonBy,Margin,method,Player_of_Match,Team1Players,Team2Players,Umpire1,Umpire2
1312200,Ahmedabad,2022-05-29,2022,Final,Rajasthan Royals,Gujarat Titans,\"Narendra Modi Stadium, Ahmedabad\",Rajasthan Royals,bat,N,Gujarat Titans,Wickets,7,NA,HH Pandya,\"['YBK Jaiswal', 'JC Buttler', 'SV Samson', 'TA Boult']\",\"['WP Saha', 'Shubman Gill', 'Mohammed Shami', 'Rashid Khan']\",CB Gaffaney,Nitin Menon
1312199,Ahmedabad,2022-05-27,2022,Qualifier 2,Royal Challengers Bangalore,Gujarat Titans,\"Narendra Modi Stadium, Ahmedabad\",Gujarat Titans,field,N,Gujarat Titans,Wickets,7,NA,JC Buttler,,,CB Gaffaney,Nitin Menon
";

const AUCTION_CSV: &str = "\
Player Name,Skill,Age,IPL Caps,Previous Teams,Base Price (Lakh),Player Status
Jos Buttler,WK-BATSMAN,33,96,\"RR, MI\",200,Capped
Yashasvi Jaiswal,BATSMAN,22,37,RR,50,Capped
Unknown Talent,BATSMAN,NA,0,,20,Uncapped
Rashid Khan,BOWLER,25,92,\"GT, SRH\",200,Capped
";

const MODEL_JSON: &str = r#"{
    "intercept": 30.0,
    "age": -1.0,
    "ipl_caps": 2.0,
    "skill": { "WK-BATSMAN": 40.0, "BATSMAN": 20.0, "BOWLER": 15.0 },
    "status": { "CAPPED": 50.0, "UNCAPPED": 0.0 }
}"#;

fn write_dataset() -> TempDir {
    let dir = TempDir::new().unwrap();
    let paths = DataPaths::in_dir(dir.path());
    fs::write(&paths.deliveries, DELIVERIES_CSV).unwrap();
    fs::write(&paths.matches, MATCHES_CSV).unwrap();
    fs::write(&paths.auction_pool, AUCTION_CSV).unwrap();
    fs::write(&paths.price_model, MODEL_JSON).unwrap();
    dir
}

fn context(dir: &TempDir) -> CommandContext {
    CommandContext::new(DataPaths::in_dir(dir.path())).unwrap()
}

#[test]
fn test_resolve_data_dir() {
    // Environment handling lives in one test so nothing races on the variable.
    let explicit = PathBuf::from("/explicit/ipl");
    assert_eq!(resolve_data_dir(Some(explicit.clone())).unwrap(), explicit);

    std::env::set_var(DATA_DIR_ENV_VAR, "/from/env");
    assert_eq!(resolve_data_dir(None).unwrap(), PathBuf::from("/from/env"));
    assert_eq!(resolve_data_dir(Some(explicit.clone())).unwrap(), explicit);

    std::env::set_var(DATA_DIR_ENV_VAR, "   ");
    if let Ok(dir) = resolve_data_dir(None) {
        assert!(dir.ends_with("ipl-insights"));
    }

    std::env::remove_var(DATA_DIR_ENV_VAR);
    match resolve_data_dir(None) {
        Ok(dir) => assert!(dir.ends_with("ipl-insights")),
        Err(InsightsError::MissingDataDir { env_var }) => assert_eq!(env_var, DATA_DIR_ENV_VAR),
        Err(other) => panic!("Expected MissingDataDir, got {:?}", other),
    }
}

#[test]
fn test_context_caches_tables() {
    let dir = write_dataset();
    let mut ctx = context(&dir);

    let first = ctx.deliveries().unwrap();
    let second = ctx.deliveries().unwrap();
    assert!(std::sync::Arc::ptr_eq(&first, &second));
    assert_eq!(first.len(), 13);
}

#[test]
fn test_match_dashboard() {
    let dir = write_dataset();
    let mut ctx = context(&dir);
    let deliveries = ctx.deliveries().unwrap();
    let matches = ctx.matches().unwrap();

    let listings = list_matches(&matches);
    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0].venue, "Narendra Modi Stadium, Ahmedabad");

    let final_id = MatchId::new(1312200);
    let summary = build_match_summary(&deliveries, &matches, final_id).unwrap();
    let rr = summary
        .innings
        .iter()
        .find(|i| i.team == "Rajasthan Royals")
        .unwrap();
    assert_eq!(rr.runs, 13);
    assert_eq!(rr.wickets, 1);
    // 6 legal deliveries: any extra, leg byes included, is not legal
    assert_eq!(rr.overs, 1);

    let [rr, gt] = build_team_performance(&deliveries, &matches, final_id).unwrap();
    assert_eq!(rr.overs.to_string(), "1.0");
    assert!((rr.run_rate - 13.0).abs() < 1e-9);
    assert_eq!(rr.fours, 1);
    assert_eq!(rr.sixes, 1);
    assert_eq!(gt.team, "Gujarat Titans");
    assert_eq!(gt.overs.to_string(), "0.3");
    assert_eq!(gt.wickets_lost, 1);

    assert!(matches!(
        build_match_summary(&deliveries, &matches, MatchId::new(1)),
        Err(InsightsError::MatchNotFound { id: 1 })
    ));
}

#[test]
fn test_player_commands() {
    let dir = write_dataset();
    let mut ctx = context(&dir);
    let deliveries = ctx.deliveries().unwrap();
    let matches = ctx.matches().unwrap();
    let final_id = MatchId::new(1312200);

    let [a, b] = build_batter_comparison(&deliveries, &matches, final_id, None, None).unwrap();
    assert_eq!(a.player, "YBK Jaiswal");
    assert_eq!(b.player, "JC Buttler");
    assert_eq!(b.runs, 10);
    assert_eq!(b.balls_faced, 4);

    let impact = build_player_impact(&deliveries, &matches, final_id, "Mohammed Shami").unwrap();
    assert!(impact.bowling_impact > 0.0);
    assert_eq!(impact.batting_impact, 0.0);
}

#[test]
fn test_fantasy_xi_head_to_head() {
    let dir = write_dataset();
    let mut ctx = context(&dir);
    let deliveries = ctx.deliveries().unwrap();
    let matches = ctx.matches().unwrap();

    let rows = match fantasy_pool(&deliveries, &matches, "Gujarat Titans", "Rajasthan Royals") {
        Outcome::Rows(rows) => rows,
        Outcome::Empty(reason) => panic!("Expected rows, got {}", reason),
    };
    let squad = select_squad(&rows, SquadQuota::default(), RankBy::FantasyPoints);
    assert!(squad.len() <= 11);
    // Only the final counts; Gill's qualifier boundary is excluded
    let gill = rows.iter().find(|r| r.stats.player == "Shubman Gill").unwrap();
    assert_eq!(gill.stats.runs, 1);

    assert_eq!(
        fantasy_pool(&deliveries, &matches, "Gujarat Titans", "Mumbai Indians"),
        Outcome::Empty(EmptyReason::NoMatchesBetween {
            team1: "Gujarat Titans".to_string(),
            team2: "Mumbai Indians".to_string(),
        })
    );
}

#[test]
fn test_fantasy_xi_ml() {
    let dir = write_dataset();
    let mut ctx = context(&dir);
    let deliveries = ctx.deliveries().unwrap();
    let matches = ctx.matches().unwrap();
    let config = ForestConfig {
        n_trees: 20,
        ..ForestConfig::default()
    };

    let outcome = ml_pool(&deliveries, &matches, "Gujarat Titans", "Rajasthan Royals", &config);
    let rows = outcome.rows().unwrap();
    assert_eq!(rows.len(), 8);

    // Season totals: Gill scored in both matches
    let gill = rows.iter().find(|r| r.stats.player == "Shubman Gill").unwrap();
    assert_eq!(gill.stats.runs, 5);

    let picks = pick_ml_squad(rows);
    assert!(picks.captain.is_some());
    assert!(picks.vice_captain.is_some());
    assert_ne!(picks.captain, picks.vice_captain);

    // The qualifier has no lineups
    let outcome = ml_pool(
        &deliveries,
        &matches,
        "Gujarat Titans",
        "Royal Challengers Bangalore",
        &config,
    );
    assert!(matches!(
        outcome,
        Outcome::Empty(EmptyReason::NoLineupsBetween { .. })
    ));
}

#[test]
fn test_auction_recommendations() {
    let dir = write_dataset();
    let mut ctx = context(&dir);
    let pool = ctx.auction_pool().unwrap();
    let model = LinearPriceModel::from_path(&ctx.paths.price_model).unwrap();

    let recs = build_recommendations(&pool, &model, Skill::Batter, 500.0, 5);
    let rows = recs.outcome.rows().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].player.name, "Jos Buttler");
    assert_eq!(rows[0].player.previous_teams.as_deref(), Some("RR, MI"));

    // Missing age cannot be priced but does not abort the batch
    assert_eq!(recs.failures.len(), 1);
    assert!(recs.failures[0].to_string().contains("Unknown Talent"));

    let recs = build_recommendations(&pool, &model, Skill::Allrounder, 500.0, 5);
    assert_eq!(
        recs.outcome,
        Outcome::Empty(EmptyReason::NoPlayersForSkill {
            skill: Skill::Allrounder
        })
    );

    let recs = build_recommendations(&pool, &model, Skill::Bowler, 10.0, 5);
    assert_eq!(
        recs.outcome,
        Outcome::Empty(EmptyReason::NoneUnderBudget { budget: 10.0 })
    );
}

#[test]
fn test_missing_column_is_schema_error() {
    let dir = write_dataset();
    let paths = DataPaths::in_dir(dir.path());
    fs::write(&paths.deliveries, "ID,batter,bowler\n1,A,B\n").unwrap();

    let mut ctx = context(&dir);
    match ctx.deliveries() {
        Err(InsightsError::Schema { dataset, message }) => {
            assert_eq!(dataset, "deliveries");
            assert!(message.contains("BattingTeam"));
        }
        other => panic!("Expected Schema error, got {:?}", other.map(|d| d.len())),
    }
}
