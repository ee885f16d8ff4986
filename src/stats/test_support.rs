//! Delivery builders shared by the stats unit tests.

use crate::data::{DeliveryRecord, MatchRecord};
use crate::MatchId;

pub fn ball(match_id: u32, team: &str, batter: &str, bowler: &str, runs: u32) -> DeliveryRecord {
    DeliveryRecord {
        match_id: MatchId::new(match_id),
        batting_team: team.to_string(),
        batter: batter.to_string(),
        bowler: bowler.to_string(),
        batter_runs: runs,
        total_runs: runs,
        extra_type: None,
        is_wicket: false,
    }
}

pub fn wide(match_id: u32, team: &str, batter: &str, bowler: &str) -> DeliveryRecord {
    DeliveryRecord {
        total_runs: 1,
        extra_type: Some("wides".to_string()),
        ..ball(match_id, team, batter, bowler, 0)
    }
}

pub fn wicket(match_id: u32, team: &str, batter: &str, bowler: &str) -> DeliveryRecord {
    DeliveryRecord {
        is_wicket: true,
        ..ball(match_id, team, batter, bowler, 0)
    }
}

pub fn fixture(id: u32, team1: &str, team2: &str) -> MatchRecord {
    MatchRecord {
        id: MatchId::new(id),
        team1: team1.to_string(),
        team2: team2.to_string(),
        venue: "Wankhede Stadium, Mumbai".to_string(),
        city: None,
        date: None,
        winning_team: None,
        team1_players: None,
        team2_players: None,
    }
}
