//! Schema-checked CSV loading.
//!
//! Every reader validates the header row against the columns the aggregation
//! code depends on before touching any data, then deserializes rows into
//! private raw structs and converts them into the public record types. Any
//! missing column, unparsable cell or broken row invariant is reported as
//! [`InsightsError::Schema`]; nothing is silently defaulted.

use log::debug;
use serde::{de::Error as _, Deserialize, Deserializer};
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::player_list::parse_player_list;
use super::types::{AuctionPlayer, DeliveryRecord, MatchRecord};
use crate::{InsightsError, MatchId, Result};

pub const DELIVERIES_DATASET: &str = "deliveries";
pub const MATCHES_DATASET: &str = "matches";
pub const AUCTION_DATASET: &str = "auction pool";

pub const DELIVERY_COLUMNS: &[&str] = &[
    "ID",
    "BattingTeam",
    "batter",
    "bowler",
    "batsman_run",
    "total_run",
    "extra_type",
    "isWicketDelivery",
];

pub const MATCH_COLUMNS: &[&str] = &["ID", "Team1", "Team2", "Venue"];

pub const AUCTION_COLUMNS: &[&str] = &["Player Name", "Skill", "Base Price (Lakh)"];

/// Pandas writes missing values as one of these.
const NULL_MARKERS: &[&str] = &["", "NA", "NaN", "nan", "None", "null"];

fn de_optional_marker<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Deserialize::deserialize(deserializer)?;
    Ok(raw.and_then(|s| {
        let trimmed = s.trim();
        if NULL_MARKERS.contains(&trimmed) {
            None
        } else {
            Some(trimmed.to_string())
        }
    }))
}

fn de_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: String = Deserialize::deserialize(deserializer)?;
    match raw.trim() {
        "1" | "1.0" | "true" | "True" | "TRUE" => Ok(true),
        "0" | "0.0" | "false" | "False" | "FALSE" => Ok(false),
        other => Err(D::Error::custom(format!("invalid wicket flag `{}`", other))),
    }
}

fn de_optional_number<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match de_optional_marker(deserializer)? {
        None => Ok(None),
        Some(s) => s
            .parse::<f64>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid number `{}`", s))),
    }
}

#[derive(Debug, Deserialize)]
struct RawDelivery {
    #[serde(rename = "ID")]
    id: u32,
    #[serde(rename = "BattingTeam")]
    batting_team: String,
    batter: String,
    bowler: String,
    #[serde(rename = "batsman_run")]
    batter_runs: u32,
    #[serde(rename = "total_run")]
    total_runs: u32,
    #[serde(deserialize_with = "de_optional_marker")]
    extra_type: Option<String>,
    #[serde(rename = "isWicketDelivery", deserialize_with = "de_flag")]
    is_wicket: bool,
}

#[derive(Debug, Deserialize)]
struct RawMatch {
    #[serde(rename = "ID")]
    id: u32,
    #[serde(rename = "Team1")]
    team1: String,
    #[serde(rename = "Team2")]
    team2: String,
    #[serde(rename = "Venue")]
    venue: String,
    #[serde(rename = "City", default, deserialize_with = "de_optional_marker")]
    city: Option<String>,
    #[serde(rename = "Date", default, deserialize_with = "de_optional_marker")]
    date: Option<String>,
    #[serde(rename = "WinningTeam", default, deserialize_with = "de_optional_marker")]
    winning_team: Option<String>,
    #[serde(rename = "Team1Players", default, deserialize_with = "de_optional_marker")]
    team1_players: Option<String>,
    #[serde(rename = "Team2Players", default, deserialize_with = "de_optional_marker")]
    team2_players: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawAuctionPlayer {
    #[serde(rename = "Player Name")]
    name: String,
    #[serde(rename = "Skill")]
    skill: String,
    #[serde(rename = "Age", default, deserialize_with = "de_optional_number")]
    age: Option<f64>,
    #[serde(rename = "IPL Caps", default, deserialize_with = "de_optional_number")]
    ipl_caps: Option<f64>,
    #[serde(rename = "Previous Teams", default, deserialize_with = "de_optional_marker")]
    previous_teams: Option<String>,
    #[serde(rename = "Base Price (Lakh)")]
    base_price: f64,
    #[serde(rename = "Player Status", default, deserialize_with = "de_optional_marker")]
    status: Option<String>,
}

/// Fail with a schema error if any required column is absent.
fn check_columns(dataset: &str, headers: &csv::StringRecord, required: &[&str]) -> Result<()> {
    let present: HashSet<&str> = headers.iter().map(str::trim).collect();
    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|c| !present.contains(c))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(InsightsError::schema(
            dataset,
            format!("missing column(s): {}", missing.join(", ")),
        ))
    }
}

/// Deserialize every row, turning per-cell failures into schema errors.
fn read_rows<R, T>(dataset: &str, reader: R, required: &[&str]) -> Result<Vec<T>>
where
    R: Read,
    T: for<'de> Deserialize<'de>,
{
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    check_columns(dataset, &headers, required)?;

    let mut rows = Vec::new();
    for result in csv_reader.deserialize::<T>() {
        match result {
            Ok(row) => rows.push(row),
            Err(e) => {
                if let csv::ErrorKind::Deserialize { pos, err } = e.kind() {
                    let line = pos.as_ref().map(|p| p.line()).unwrap_or_default();
                    return Err(InsightsError::schema(
                        dataset,
                        format!("line {}: {}", line, err),
                    ));
                }
                return Err(e.into());
            }
        }
    }
    Ok(rows)
}

/// Read the ball-by-ball table from any reader.
pub fn read_deliveries<R: Read>(reader: R) -> Result<Vec<DeliveryRecord>> {
    let raw: Vec<RawDelivery> = read_rows(DELIVERIES_DATASET, reader, DELIVERY_COLUMNS)?;

    raw.into_iter()
        .enumerate()
        .map(|(i, r)| {
            if r.total_runs < r.batter_runs {
                return Err(InsightsError::schema(
                    DELIVERIES_DATASET,
                    format!(
                        "row {}: total_run {} is less than batsman_run {}",
                        i + 1,
                        r.total_runs,
                        r.batter_runs
                    ),
                ));
            }
            Ok(DeliveryRecord {
                match_id: MatchId::new(r.id),
                batting_team: r.batting_team,
                batter: r.batter,
                bowler: r.bowler,
                batter_runs: r.batter_runs,
                total_runs: r.total_runs,
                extra_type: r.extra_type,
                is_wicket: r.is_wicket,
            })
        })
        .collect()
}

/// Read the match table from any reader.
pub fn read_matches<R: Read>(reader: R) -> Result<Vec<MatchRecord>> {
    let raw: Vec<RawMatch> = read_rows(MATCHES_DATASET, reader, MATCH_COLUMNS)?;
    let mut seen = HashSet::new();

    let lineup = |id: u32, column: &str, cell: Option<String>| -> Result<Option<Vec<String>>> {
        cell.map(|text| {
            parse_player_list(&text).map_err(|msg| {
                InsightsError::schema(MATCHES_DATASET, format!("match {} {}: {}", id, column, msg))
            })
        })
        .transpose()
    };

    raw.into_iter()
        .map(|r| {
            if !seen.insert(r.id) {
                return Err(InsightsError::schema(
                    MATCHES_DATASET,
                    format!("duplicate match ID {}", r.id),
                ));
            }
            Ok(MatchRecord {
                id: MatchId::new(r.id),
                team1_players: lineup(r.id, "Team1Players", r.team1_players)?,
                team2_players: lineup(r.id, "Team2Players", r.team2_players)?,
                team1: r.team1,
                team2: r.team2,
                venue: r.venue,
                city: r.city,
                date: r.date,
                winning_team: r.winning_team,
            })
        })
        .collect()
}

/// Read the auction pool from any reader.
pub fn read_auction_pool<R: Read>(reader: R) -> Result<Vec<AuctionPlayer>> {
    let raw: Vec<RawAuctionPlayer> = read_rows(AUCTION_DATASET, reader, AUCTION_COLUMNS)?;

    Ok(raw
        .into_iter()
        .map(|r| AuctionPlayer {
            name: r.name,
            skill: r.skill,
            age: r.age,
            ipl_caps: r.ipl_caps,
            previous_teams: r.previous_teams,
            base_price: r.base_price,
            status: r.status,
        })
        .collect())
}

pub fn load_deliveries(path: &Path) -> Result<Vec<DeliveryRecord>> {
    debug!("Reading deliveries from {}", path.display());
    read_deliveries(File::open(path)?)
}

pub fn load_matches(path: &Path) -> Result<Vec<MatchRecord>> {
    debug!("Reading matches from {}", path.display());
    read_matches(File::open(path)?)
}

pub fn load_auction_pool(path: &Path) -> Result<Vec<AuctionPlayer>> {
    debug!("Reading auction pool from {}", path.display());
    read_auction_pool(File::open(path)?)
}
