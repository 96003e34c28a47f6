// NCAA tournament bracket predictor.
//
// A prediction is built in three passes over one bracket tree: build the 64 team
// tournament (bracket), play out every game from historical seed probabilities with
// a seeded generator (simulation), then group the results by region and round
// (prediction). The seed alone is enough to replay a prediction.

pub mod bracket;
pub mod config;
pub mod error;
pub mod export;
pub mod game_result;
pub mod prediction;
pub mod probability;
pub mod seed;
pub mod seeding;
pub mod simulation;
pub mod tally;
pub mod team;

use log::info;

pub use bracket::{build_region, build_tournament, Game};
pub use error::{BracketError, Result};
pub use game_result::GameResult;
pub use prediction::{collect_results, collect_results_from, FinalFour, Prediction};
pub use seed::Seed;
pub use seeding::region_teams;
pub use simulation::{pick_winner, simulate};
pub use team::{Region, Round, Team};

/// Builds, simulates and collects a full tournament for `seed`.
pub fn predict(seed: Seed, lowest_round: Round) -> Result<Prediction> {
    info!("Simulating bracket with seed {}", seed);
    let championship = simulate(&mut seed.rng(), build_tournament()?)?;
    collect_results_from(&championship, lowest_round)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn winners(prediction: &Prediction, region: Region, round: Round) -> Vec<u8> {
        prediction
            .games(region, round)
            .iter()
            .map(|game| game.winner.seed())
            .collect()
    }

    #[test]
    fn test_seed_42_bracket() {
        let prediction = predict(Seed(42), Round::RoundOf64).unwrap();
        let team = |seed, region| Team::new(seed, region).unwrap();

        assert_eq!(prediction.champion(), team(7, Region::South));
        assert_eq!(
            prediction.final_four_teams(),
            [
                team(7, Region::East),
                team(7, Region::South),
                team(11, Region::West),
                team(1, Region::Midwest),
            ]
        );
        assert_eq!(prediction.final_four().east_south.winner, team(7, Region::South));
        assert_eq!(prediction.final_four().west_midwest.winner, team(1, Region::Midwest));

        assert_eq!(winners(&prediction, Region::East, Round::RoundOf64), vec![1, 9, 5, 4, 11, 3, 7, 2]);
        assert_eq!(winners(&prediction, Region::East, Round::RoundOf32), vec![1, 4, 3, 7]);
        assert_eq!(winners(&prediction, Region::East, Round::Sweet16), vec![1, 7]);
        assert_eq!(winners(&prediction, Region::East, Round::Elite8), vec![7]);

        assert_eq!(winners(&prediction, Region::West, Round::RoundOf64), vec![1, 8, 12, 4, 11, 3, 10, 2]);
        assert_eq!(winners(&prediction, Region::West, Round::RoundOf32), vec![1, 4, 11, 10]);
        assert_eq!(winners(&prediction, Region::West, Round::Sweet16), vec![1, 11]);
        assert_eq!(winners(&prediction, Region::West, Round::Elite8), vec![11]);
    }

    #[test]
    fn test_seed_42_replays_identically() {
        let golden = predict(Seed(42), Round::RoundOf64).unwrap();
        for _ in 0..5 {
            let replay = predict(Seed(42), Round::RoundOf64).unwrap();
            assert_eq!(replay, golden);
            assert_eq!(replay.champion(), golden.champion());
            for region in Region::ALL {
                assert_eq!(replay.region(region), golden.region(region));
            }
        }
    }

    #[test]
    fn test_predict_matches_manual_pipeline() {
        let seed = Seed(2024);
        let mut rng = seed.rng();
        let championship = simulate(&mut rng, build_tournament().unwrap()).unwrap();
        let manual = collect_results(&championship).unwrap();
        assert_eq!(predict(seed, Round::RoundOf64).unwrap(), manual);
    }

    #[test]
    fn test_champion_reached_the_final_four() {
        for value in 0..25 {
            let prediction = predict(Seed(value), Round::RoundOf64).unwrap();
            assert!(prediction.final_four_teams().contains(&prediction.champion()));
        }
    }
}
