// The Game tree and the Bracket Builder.
// Each region is built as a balanced binary tree over its 16 seeded teams, then the
// four regional finals are joined by two Final Four games and the Championship.
// Building performs no randomness; see simulation.rs for resolving the games.

use std::collections::BTreeMap;

use crate::error::{BracketError, Result};
use crate::seeding::region_teams;
use crate::team::{Region, Round, Team};

/// A node in the bracket tree.
///
/// Leaves are `Seeding` entries that carry their team as a pre-set winner. Every
/// other game owns exactly two child games whose winners are its contestants, so
/// `children` is either both games or nothing at all.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub round: Round,
    pub children: Option<Box<(Game, Game)>>,
    pub winner: Option<Team>,
}

impl Game {
    /// A team's entry into the bracket
    pub fn leaf(team: Team) -> Game {
        Game {
            round: Round::Seeding,
            children: None,
            winner: Some(team),
        }
    }

    /// An unplayed game between the winners of `left` and `right`
    pub fn new(round: Round, left: Game, right: Game) -> Game {
        Game {
            round,
            children: Some(Box::new((left, right))),
            winner: None,
        }
    }

    /// Fixes the result of this game ahead of simulation, e.g. a known historical result.
    pub fn with_winner(mut self, team: Team) -> Game {
        self.winner = Some(team);
        self
    }

    pub fn left(&self) -> Option<&Game> {
        self.children.as_deref().map(|(left, _)| left)
    }

    pub fn right(&self) -> Option<&Game> {
        self.children.as_deref().map(|(_, right)| right)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    pub fn is_resolved(&self) -> bool {
        self.winner.is_some()
    }

    /// The two teams playing this game, once both feeder games have winners
    pub fn contestants(&self) -> Option<(Team, Team)> {
        let (left, right) = self.children.as_deref()?;
        Some((left.winner?, right.winner?))
    }

    /// Number of actual contests in this subtree (Seeding leaves excluded)
    pub fn count_games(&self) -> usize {
        match self.children.as_deref() {
            Some((left, right)) => 1 + left.count_games() + right.count_games(),
            None => 0,
        }
    }

    pub fn count_leaves(&self) -> usize {
        match self.children.as_deref() {
            Some((left, right)) => left.count_leaves() + right.count_leaves(),
            None => 1,
        }
    }

    /// Longest path from this game down to a leaf, counted in games
    pub fn depth(&self) -> usize {
        match self.children.as_deref() {
            Some((left, right)) => 1 + left.depth().max(right.depth()),
            None => 0,
        }
    }
}

/// Builds one region's games up to and including its Elite 8 game.
pub fn build_region(region: Region) -> Result<Game> {
    let leaves = region_teams(region).into_iter().map(Game::leaf).collect();
    build_regional_final(leaves)
}

// Pairs (g0, g1), (g2, g3), ... into games of the next round until one game is
// left. That game has to land on the Elite 8, which only happens for 16 leaves.
pub(crate) fn build_regional_final(leaves: Vec<Game>) -> Result<Game> {
    let mut games = leaves;
    let mut round = Round::Seeding;

    while games.len() > 1 {
        if games.len() % 2 != 0 {
            return Err(BracketError::Structural(format!(
                "cannot pair an odd number of games ({}) in the {} round",
                games.len(),
                round
            )));
        }
        round = match round.next() {
            Some(next) if next <= Round::Elite8 => next,
            _ => {
                return Err(BracketError::Structural(format!(
                    "{} games remain after the Elite 8 round",
                    games.len()
                )))
            }
        };

        let mut paired = Vec::with_capacity(games.len() / 2);
        let mut iter = games.into_iter();
        while let (Some(left), Some(right)) = (iter.next(), iter.next()) {
            paired.push(Game::new(round, left, right));
        }
        games = paired;
    }

    match games.pop() {
        Some(regional_final) if regional_final.round == Round::Elite8 => Ok(regional_final),
        Some(game) => Err(BracketError::Structural(format!(
            "region reduced to a {} game instead of an Elite 8 game",
            game.round
        ))),
        None => Err(BracketError::Structural("region has no teams".to_string())),
    }
}

/// Constructs the full tournament and returns the Championship game as the root.
///
/// All 64 leaves are resolved to their seeded teams and all 63 games are unplayed.
pub fn build_tournament() -> Result<Game> {
    let mut regional_finals = BTreeMap::new();
    for region in Region::ALL {
        regional_finals.insert(region, build_region(region)?);
    }

    let mut take = |region: Region| {
        regional_finals
            .remove(&region)
            .ok_or_else(|| BracketError::Structural(format!("the {} region is missing", region)))
    };
    let east = take(Region::East)?;
    let south = take(Region::South)?;
    let west = take(Region::West)?;
    let midwest = take(Region::Midwest)?;

    let east_south = Game::new(Round::Final4, east, south);
    let west_midwest = Game::new(Round::Final4, west, midwest);

    Ok(Game::new(Round::Championship, east_south, west_midwest))
}
