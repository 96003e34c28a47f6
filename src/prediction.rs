// Result Collector: turns a fully simulated bracket tree into a Prediction that is
// grouped by region and round, which is the shape renderers and exporters want.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::bracket::Game;
use crate::error::{BracketError, Result};
use crate::game_result::GameResult;
use crate::team::{Region, Round, Team};

/// Games of one region, bucketed by round in the order they were played
pub type RoundResults = BTreeMap<Round, Vec<GameResult>>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinalFour {
    pub east_south: GameResult,
    pub west_midwest: GameResult,
}

/// A read-only view of one simulated tournament.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    regions: BTreeMap<Region, RoundResults>,
    final_four: FinalFour,
    championship: GameResult,
}

impl Prediction {
    pub fn regions(&self) -> &BTreeMap<Region, RoundResults> {
        &self.regions
    }

    pub fn region(&self, region: Region) -> Option<&RoundResults> {
        self.regions.get(&region)
    }

    /// Games a region played in `round`, empty if the round wasn't collected
    pub fn games(&self, region: Region, round: Round) -> &[GameResult] {
        self.regions
            .get(&region)
            .and_then(|rounds| rounds.get(&round))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn final_four(&self) -> &FinalFour {
        &self.final_four
    }

    pub fn championship(&self) -> &GameResult {
        &self.championship
    }

    pub fn champion(&self) -> Team {
        self.championship.winner
    }

    /// The four regional champions, East, South, West, Midwest
    pub fn final_four_teams(&self) -> [Team; 4] {
        [
            self.final_four.east_south.left,
            self.final_four.east_south.right,
            self.final_four.west_midwest.left,
            self.final_four.west_midwest.right,
        ]
    }

    /// Every collected game: regional games first, then the Final Four and Championship
    pub fn all_games(&self) -> impl Iterator<Item = (Option<Region>, &GameResult)> + '_ {
        let regional = self.regions.iter().flat_map(|(&region, rounds)| {
            rounds.values().flatten().map(move |game| (Some(region), game))
        });
        regional.chain(
            [
                &self.final_four.east_south,
                &self.final_four.west_midwest,
                &self.championship,
            ]
            .into_iter()
            .map(|game| (None, game)),
        )
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (region, rounds) in &self.regions {
            writeln!(f, "Projected results from the {} region:", region)?;
            for (round, games) in rounds {
                writeln!(f, "  {}", round)?;
                for game in games {
                    let upset = if game.is_upset() { " (upset)" } else { "" };
                    writeln!(f, "    {} beat the {}{}", game.winner, game.loser(), upset)?;
                }
            }
            writeln!(f)?;
        }

        writeln!(f, "Your Final Four is:")?;
        for game in [&self.final_four.east_south, &self.final_four.west_midwest] {
            writeln!(f, "  The {} vs the {}", game.left, game.right)?;
        }
        writeln!(f)?;
        writeln!(f, "Your Championship Game is:")?;
        writeln!(f, "  The {} vs the {}", self.championship.left, self.championship.right)?;
        writeln!(f)?;
        write!(f, "And the winner is the {}", self.champion())
    }
}

/// Collects a resolved bracket into a Prediction, starting from the Round of 64.
pub fn collect_results(championship: &Game) -> Result<Prediction> {
    collect_results_from(championship, Round::RoundOf64)
}

/// Collects a resolved bracket, keeping regional games at or above `lowest_round`.
///
/// The tree has to be shaped the way `build_tournament` builds it: a Championship
/// game over the East/South and West/Midwest Final Four games.
pub fn collect_results_from(championship: &Game, lowest_round: Round) -> Result<Prediction> {
    if championship.round != Round::Championship {
        return Err(BracketError::Structural(format!(
            "expected a Championship game at the root, found a {} game",
            championship.round
        )));
    }
    let (east_south, west_midwest) = semifinals(championship)?;
    let (east, south) = regional_finals(east_south)?;
    let (west, midwest) = regional_finals(west_midwest)?;

    let mut regions = BTreeMap::new();
    regions.insert(Region::East, collect_games_by_round(east, lowest_round)?);
    regions.insert(Region::South, collect_games_by_round(south, lowest_round)?);
    regions.insert(Region::West, collect_games_by_round(west, lowest_round)?);
    regions.insert(Region::Midwest, collect_games_by_round(midwest, lowest_round)?);

    Ok(Prediction {
        regions,
        final_four: FinalFour {
            east_south: GameResult::from_game(east_south)?,
            west_midwest: GameResult::from_game(west_midwest)?,
        },
        championship: GameResult::from_game(championship)?,
    })
}

/// Buckets `game` and everything below it by round, skipping rounds under `lowest_round`.
///
/// Children are collected before their parent, left before right, so each bucket
/// lists games in bracket order. Seeding entries are never collected.
pub fn collect_games_by_round(game: &Game, lowest_round: Round) -> Result<RoundResults> {
    let mut collection = RoundResults::new();
    collect_into(game, lowest_round, &mut collection)?;
    Ok(collection)
}

fn collect_into(game: &Game, lowest_round: Round, collection: &mut RoundResults) -> Result<()> {
    if game.round < lowest_round {
        return Ok(());
    }
    let (left, right) = match game.children.as_deref() {
        Some(children) => children,
        None => return Ok(()),
    };

    collect_into(left, lowest_round, collection)?;
    collect_into(right, lowest_round, collection)?;
    collection
        .entry(game.round)
        .or_default()
        .push(GameResult::from_game(game)?);
    Ok(())
}

fn semifinals(championship: &Game) -> Result<(&Game, &Game)> {
    let (left, right) = championship.children.as_deref().ok_or_else(|| {
        BracketError::Structural("the Championship game has no Final Four games".to_string())
    })?;
    for game in [left, right] {
        if game.round != Round::Final4 {
            return Err(BracketError::Structural(format!(
                "expected Final 4 games under the Championship, found a {} game",
                game.round
            )));
        }
    }
    Ok((left, right))
}

fn regional_finals(semifinal: &Game) -> Result<(&Game, &Game)> {
    let (left, right) = semifinal.children.as_deref().ok_or_else(|| {
        BracketError::Structural("a Final 4 game has no regional finals".to_string())
    })?;
    Ok((left, right))
}
