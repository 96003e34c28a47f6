// Simulation Engine: plays out every unresolved game in a bracket tree.
//
// Games are resolved depth first, left subtree, then right subtree, then the game
// itself. Every game draws exactly one number from the generator, so a given seed
// always produces the same sequence of draws and therefore the same bracket.

use log::debug;
use rand::Rng;

use crate::bracket::Game;
use crate::error::{BracketError, Result};
use crate::probability::{round_probabilities, win_probability};
use crate::team::{Round, Team};

/// Used when two teams with the same seed meet in the Final Four or Championship.
pub const COIN_FLIP: f64 = 0.5;

/// Resolves `game` and all of its unresolved descendants, returning it with a winner.
///
/// Games that already have a winner are kept as they are, so subtrees can be fixed
/// ahead of time (known results) and only the remaining games get predicted.
pub fn simulate<R: Rng + ?Sized>(rng: &mut R, mut game: Game) -> Result<Game> {
    resolve(rng, &mut game)?;
    Ok(game)
}

/// In-place version of [`simulate`], returning the winner of `game`.
pub fn resolve<R: Rng + ?Sized>(rng: &mut R, game: &mut Game) -> Result<Team> {
    if let Some(winner) = game.winner {
        return Ok(winner);
    }

    let (left, right) = match game.children.as_deref_mut() {
        Some(children) => children,
        None => return Err(BracketError::MissingContestants(game.round)),
    };

    let team_a = resolve(rng, left)?;
    let team_b = resolve(rng, right)?;
    let winner = pick_winner(rng, team_a, team_b, game.round)?;
    debug!("{}: {} vs {} -> {}", game.round, team_a, team_b, winner);

    game.winner = Some(winner);
    Ok(winner)
}

/// Picks the winner of a single game.
///
/// The table is always indexed by the stronger (numerically lower) seed: a draw below
/// that seed's probability for the round sends the stronger seed through, anything
/// else sends the weaker one through. Equal seeds from different regions flip a coin.
pub fn pick_winner<R: Rng + ?Sized>(
    rng: &mut R,
    team_a: Team,
    team_b: Team,
    round: Round,
) -> Result<Team> {
    // Seeding entries aren't contests, not even a coin flip
    round_probabilities(round)?;

    if team_a.seed() == team_b.seed() {
        return Ok(if win_loss(rng, COIN_FLIP) { team_a } else { team_b });
    }

    let (low, high) = if team_a.seed() < team_b.seed() {
        (team_a, team_b)
    } else {
        (team_b, team_a)
    };

    if win_loss(rng, win_probability(round, low.seed())?) {
        Ok(low)
    } else {
        Ok(high)
    }
}

/// True when a uniform draw in [0, 1) is strictly below `probability`.
pub fn win_loss<R: Rng + ?Sized>(rng: &mut R, probability: f64) -> bool {
    rng.gen::<f64>() < probability
}
