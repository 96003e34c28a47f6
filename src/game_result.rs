// This module defines the read-only record of a played game that predictions are made of.
// It's a flat copy of one resolved node of the bracket tree: who played and who won.

use serde::Serialize;

use crate::bracket::Game;
use crate::error::{BracketError, Result};
use crate::team::{Round, Team};

/// The result of a single resolved game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub round: Round,
    /// Winner of the left feeder game
    pub left: Team,
    /// Winner of the right feeder game
    pub right: Team,
    pub winner: Team,
}

impl GameResult {
    /// Reads the result off a resolved game node.
    pub fn from_game(game: &Game) -> Result<GameResult> {
        let (left_game, right_game) = game.children.as_deref().ok_or_else(|| {
            BracketError::Structural(format!("a {} entry is not a game", game.round))
        })?;
        let left = left_game.winner.ok_or(BracketError::Unresolved(left_game.round))?;
        let right = right_game.winner.ok_or(BracketError::Unresolved(right_game.round))?;
        let winner = game.winner.ok_or(BracketError::Unresolved(game.round))?;

        Ok(GameResult {
            round: game.round,
            left,
            right,
            winner,
        })
    }

    /// Returns the losing team
    pub fn loser(&self) -> Team {
        if self.winner == self.left {
            self.right
        } else {
            self.left
        }
    }

    /// True when the numerically higher seed won
    pub fn is_upset(&self) -> bool {
        self.winner.seed() > self.loser().seed()
    }
}
