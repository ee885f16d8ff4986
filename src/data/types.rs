//! Record types for the delivery, match and auction tables.

use serde::Serialize;

use crate::MatchId;

/// One ball bowled.
///
/// `total_runs` includes extras and is never below `batter_runs`; the loader
/// rejects rows that break this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryRecord {
    pub match_id: MatchId,
    pub batting_team: String,
    pub batter: String,
    pub bowler: String,
    pub batter_runs: u32,
    pub total_runs: u32,
    /// Present only for wides, no-balls and other non-legal deliveries.
    pub extra_type: Option<String>,
    pub is_wicket: bool,
}

impl DeliveryRecord {
    /// A legal delivery counts toward the six-ball over.
    pub fn is_legal(&self) -> bool {
        self.extra_type.is_none()
    }

    pub fn is_four(&self) -> bool {
        self.batter_runs == 4
    }

    pub fn is_six(&self) -> bool {
        self.batter_runs == 6
    }

    pub fn is_boundary(&self) -> bool {
        self.is_four() || self.is_six()
    }
}

/// Match-level facts. `id` is unique across the table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRecord {
    pub id: MatchId,
    pub team1: String,
    pub team2: String,
    pub venue: String,
    pub city: Option<String>,
    pub date: Option<String>,
    pub winning_team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team1_players: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team2_players: Option<Vec<String>>,
}

impl MatchRecord {
    /// True if this match was played between `a` and `b`, in either order.
    pub fn is_between(&self, a: &str, b: &str) -> bool {
        (self.team1 == a && self.team2 == b) || (self.team1 == b && self.team2 == a)
    }

    /// Both lineups joined, or `None` when either list is missing.
    pub fn lineups(&self) -> Option<Vec<String>> {
        let (team1, team2) = (self.team1_players.as_ref()?, self.team2_players.as_ref()?);
        Some(team1.iter().chain(team2).cloned().collect())
    }
}

/// A player from the auction pool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuctionPlayer {
    pub name: String,
    pub skill: String,
    pub age: Option<f64>,
    pub ipl_caps: Option<f64>,
    pub previous_teams: Option<String>,
    /// Base price in lakh rupees.
    pub base_price: f64,
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delivery(batter_runs: u32, extra_type: Option<&str>) -> DeliveryRecord {
        DeliveryRecord {
            match_id: MatchId::new(1),
            batting_team: "Gujarat Titans".to_string(),
            batter: "Shubman Gill".to_string(),
            bowler: "Trent Boult".to_string(),
            batter_runs,
            total_runs: batter_runs,
            extra_type: extra_type.map(str::to_string),
            is_wicket: false,
        }
    }

    fn sample_match() -> MatchRecord {
        MatchRecord {
            id: MatchId::new(1312200),
            team1: "Rajasthan Royals".to_string(),
            team2: "Gujarat Titans".to_string(),
            venue: "Narendra Modi Stadium, Ahmedabad".to_string(),
            city: Some("Ahmedabad".to_string()),
            date: None,
            winning_team: Some("Gujarat Titans".to_string()),
            team1_players: Some(vec!["YBK Jaiswal".to_string(), "JC Buttler".to_string()]),
            team2_players: Some(vec!["WP Saha".to_string()]),
        }
    }

    #[test]
    fn test_legal_delivery() {
        assert!(delivery(0, None).is_legal());
        assert!(!delivery(0, Some("wides")).is_legal());
    }

    #[test]
    fn test_boundaries() {
        assert!(delivery(4, None).is_boundary());
        assert!(delivery(6, None).is_boundary());
        assert!(!delivery(5, None).is_boundary());
        assert!(delivery(6, None).is_six());
        assert!(!delivery(6, None).is_four());
    }

    #[test]
    fn test_is_between_is_symmetric() {
        let m = sample_match();
        assert!(m.is_between("Rajasthan Royals", "Gujarat Titans"));
        assert!(m.is_between("Gujarat Titans", "Rajasthan Royals"));
        assert!(!m.is_between("Gujarat Titans", "Mumbai Indians"));
    }

    #[test]
    fn test_lineups() {
        let m = sample_match();
        assert_eq!(
            m.lineups().unwrap(),
            vec!["YBK Jaiswal", "JC Buttler", "WP Saha"]
        );

        let mut missing = sample_match();
        missing.team2_players = None;
        assert!(missing.lineups().is_none());
    }
}
