// Historical win probabilities by seed for each round.
// source: https://www.betfirm.com/seeds-national-championship-odds/
//
// Row r holds the rounds from the Round of 64 onward, column i is the probability
// attributed to the seed (i + 1) winning a game in that round. Seeds that can't
// reach a round carry 0.00. The 1.00 for the 7 seed in the Championship row is an
// artifact of the historical data and is kept as is.

use crate::error::{BracketError, Result};
use crate::team::Round;

pub const WIN_PROBABILITIES: [[f64; 16]; 6] = [
    // round of 64
    [0.99, 0.93, 0.86, 0.79, 0.65, 0.62, 0.61, 0.49, 0.51, 0.39, 0.38, 0.35, 0.21, 0.14, 0.07, 0.01],
    // round of 32
    [0.85, 0.67, 0.62, 0.60, 0.53, 0.47, 0.31, 0.22, 0.10, 0.41, 0.45, 0.42, 0.19, 0.09, 0.36, 0.00],
    // sweet 16
    [0.79, 0.72, 0.49, 0.32, 0.23, 0.36, 0.34, 0.56, 0.63, 0.38, 0.35, 0.09, 0.00, 0.00, 0.25, 0.00],
    // elite 8
    [0.59, 0.47, 0.44, 0.61, 0.75, 0.19, 0.30, 0.67, 0.40, 0.11, 0.56, 0.00, 0.00, 0.00, 0.00, 0.00],
    // final 4
    [0.62, 0.41, 0.65, 0.29, 0.44, 0.67, 0.33, 0.67, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00],
    // championship
    [0.65, 0.38, 0.36, 0.50, 0.00, 0.50, 1.00, 0.25, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00, 0.00],
];

/// The 16 per-seed probabilities for a round. Seeding isn't a contest and has no row.
pub fn round_probabilities(round: Round) -> Result<&'static [f64; 16]> {
    match round {
        Round::Seeding => Err(BracketError::UnplayableRound(round)),
        _ => Ok(&WIN_PROBABILITIES[round.value() as usize - 1]),
    }
}

/// Probability attributed to `seed` winning a game in `round`.
///
/// Panics if `seed` is outside 1..=16; callers hold validated `Team` seeds.
pub fn win_probability(round: Round, seed: u8) -> Result<f64> {
    assert!((1..=16).contains(&seed), "seed {} is outside 1..=16", seed);
    Ok(round_probabilities(round)?[seed as usize - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_playable_round_has_a_row() {
        for round in Round::ALL.iter().skip(1) {
            let row = round_probabilities(*round).unwrap();
            assert!(row.iter().all(|p| (0.0..=1.0).contains(p)));
        }
        assert_eq!(
            round_probabilities(Round::Seeding),
            Err(BracketError::UnplayableRound(Round::Seeding))
        );
    }

    #[test]
    fn test_reference_values() {
        assert_eq!(win_probability(Round::RoundOf64, 1).unwrap(), 0.99);
        assert_eq!(win_probability(Round::RoundOf64, 16).unwrap(), 0.01);
        assert_eq!(win_probability(Round::RoundOf32, 16).unwrap(), 0.00);
        assert_eq!(win_probability(Round::Sweet16, 9).unwrap(), 0.63);
        assert_eq!(win_probability(Round::Elite8, 5).unwrap(), 0.75);
        assert_eq!(win_probability(Round::Final4, 8).unwrap(), 0.67);
        assert_eq!(win_probability(Round::Championship, 7).unwrap(), 1.00);
        assert_eq!(win_probability(Round::Championship, 5).unwrap(), 0.00);
    }

    #[test]
    #[should_panic]
    fn test_seed_zero_is_a_contract_violation() {
        let _ = win_probability(Round::RoundOf64, 0);
    }
}
