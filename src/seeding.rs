// Structure of a region: which seeds meet in the first round, and in what order
// the matchups sit so that winners of neighbouring games meet next.

use crate::team::{Region, Team};

/// Seeds in bracket order. Adjacent pairs are first round games (1v16, 8v9, ...),
/// adjacent pairs of pairs meet in the Round of 32, and so on up the region.
pub const SEED_ORDER: [u8; 16] = [1, 16, 8, 9, 5, 12, 4, 13, 6, 11, 3, 14, 7, 10, 2, 15];

/// The 16 teams of a region, ordered so they form the leaves of a balanced tree.
pub fn region_teams(region: Region) -> Vec<Team> {
    SEED_ORDER
        .iter()
        .map(|&seed| Team::seeded(seed, region))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_teams_follow_bracket_order() {
        for region in Region::ALL {
            let teams = region_teams(region);
            let seeds: Vec<u8> = teams.iter().map(|t| t.seed()).collect();
            assert_eq!(seeds, vec![1, 16, 8, 9, 5, 12, 4, 13, 6, 11, 3, 14, 7, 10, 2, 15]);
            assert!(teams.iter().all(|t| t.region() == region));
        }
    }

    #[test]
    fn test_first_round_pairs_sum_to_seventeen() {
        for pair in region_teams(Region::Midwest).chunks(2) {
            assert_eq!(pair[0].seed() + pair[1].seed(), 17);
        }
    }

    #[test]
    fn test_every_seed_appears_once() {
        let mut seeds = SEED_ORDER.to_vec();
        seeds.sort();
        assert_eq!(seeds, (1..=16).collect::<Vec<u8>>());
    }
}
