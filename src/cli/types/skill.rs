//! Auction skill categories and keyword matching.

use serde::Serialize;
use std::fmt;

/// Player skill requested from the auction recommender.
///
/// The auction pool stores skills as free text ("Batsman", "ALL-ROUNDER",
/// "Wicket Keeper", ...), so each category matches a set of keywords against
/// the upper-cased skill cell instead of an exact value.
///
/// # Examples
///
/// ```rust
/// use ipl_insights::Skill;
///
/// assert!(Skill::Batter.matches("Batsman"));
/// assert!(Skill::Wicketkeeper.matches("wk-batter"));
/// assert!(!Skill::Bowler.matches("Batsman"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
pub enum Skill {
    Batter,
    Bowler,
    Allrounder,
    Wicketkeeper,
}

impl Skill {
    /// Keywords that identify this category inside a raw skill cell.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Skill::Batter => &["BAT", "BATSMAN"],
            Skill::Bowler => &["BOWL", "BOWLER"],
            Skill::Allrounder => &["ALL", "ALLROUND", "ALL-ROUNDER"],
            Skill::Wicketkeeper => &["WK", "KEEP", "WICKET"],
        }
    }

    /// True if any keyword occurs in the upper-cased skill text.
    pub fn matches(&self, raw_skill: &str) -> bool {
        let upper = raw_skill.to_uppercase();
        self.keywords().iter().any(|k| upper.contains(k))
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Skill::Batter => "BATTER",
            Skill::Bowler => "BOWLER",
            Skill::Allrounder => "ALLROUNDER",
            Skill::Wicketkeeper => "WICKETKEEPER",
        };
        write!(f, "{}", s)
    }
}
