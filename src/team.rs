// Core value types shared by every stage of the predictor: regions, rounds and teams.
// Teams carry no names or ratings, a team is fully identified by its seed and region.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{BracketError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    East,
    South,
    West,
    Midwest,
}

impl Region {
    /// Every region, in bracket order: East and South meet in one semifinal,
    /// West and Midwest in the other.
    pub const ALL: [Region; 4] = [Region::East, Region::South, Region::West, Region::Midwest];

    pub fn name(self) -> &'static str {
        match self {
            Region::East => "East",
            Region::South => "South",
            Region::West => "West",
            Region::Midwest => "Midwest",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One stage of single elimination play.
///
/// Each round is backed by a fixed integer value and rounds are ordered by that
/// value, never by declaration order: `Seeding (0) < RoundOf64 (1) < RoundOf32 (2)
/// < Sweet16 (3) < Elite8 (4) < Final4 (5) < Championship (6)`. Tree building
/// relies on `next()` stepping exactly one value up, and result collection
/// filters games by comparing rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Round {
    Seeding = 0,
    RoundOf64 = 1,
    RoundOf32 = 2,
    Sweet16 = 3,
    Elite8 = 4,
    Final4 = 5,
    Championship = 6,
}

impl Round {
    pub const ALL: [Round; 7] = [
        Round::Seeding,
        Round::RoundOf64,
        Round::RoundOf32,
        Round::Sweet16,
        Round::Elite8,
        Round::Final4,
        Round::Championship,
    ];

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(value: u8) -> Option<Round> {
        Round::ALL.get(value as usize).copied()
    }

    /// The round whose value is one greater, `None` after the Championship
    pub fn next(self) -> Option<Round> {
        Round::from_value(self.value() + 1)
    }

    pub fn label(self) -> &'static str {
        match self {
            Round::Seeding => "Seeding",
            Round::RoundOf64 => "Round of 64",
            Round::RoundOf32 => "Round of 32",
            Round::Sweet16 => "Sweet 16",
            Round::Elite8 => "Elite 8",
            Round::Final4 => "Final 4",
            Round::Championship => "Championship",
        }
    }
}

impl PartialOrd for Round {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Round {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// accepts the variant name, the display label, or a short form like "r64"
impl FromStr for Round {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "seeding" => Ok(Round::Seeding),
            "roundof64" | "r64" => Ok(Round::RoundOf64),
            "roundof32" | "r32" => Ok(Round::RoundOf32),
            "sweet16" | "s16" => Ok(Round::Sweet16),
            "elite8" | "e8" => Ok(Round::Elite8),
            "final4" | "finalfour" | "f4" => Ok(Round::Final4),
            "championship" => Ok(Round::Championship),
            _ => Err(format!("unknown round '{}'", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Team {
    seed: u8,
    region: Region,
}

impl Team {
    pub const MIN_SEED: u8 = 1;
    pub const MAX_SEED: u8 = 16;

    pub fn new(seed: u8, region: Region) -> Result<Team> {
        if !(Team::MIN_SEED..=Team::MAX_SEED).contains(&seed) {
            return Err(BracketError::SeedOutOfRange(seed));
        }
        Ok(Team { seed, region })
    }

    // Only for seeds taken from the fixed bracket order, which are always in range.
    pub(crate) fn seeded(seed: u8, region: Region) -> Team {
        debug_assert!((Team::MIN_SEED..=Team::MAX_SEED).contains(&seed));
        Team { seed, region }
    }

    pub fn seed(&self) -> u8 {
        self.seed
    }

    pub fn region(&self) -> Region {
        self.region
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} seed from the {}", self.seed, self.region)
    }
}
