// Monte Carlo tally over many consecutive seeds.
// Each run is an ordinary single-seed prediction; the tally only counts how often
// each team reached the Final Four and how often it won it all. Runs happen one
// after another on the calling thread, seed `base`, `base + 1`, ...

use fnv::FnvHashMap;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};

use crate::bracket::build_tournament;
use crate::error::Result;
use crate::prediction::collect_results_from;
use crate::seed::Seed;
use crate::simulation::simulate;
use crate::team::{Round, Team};

#[derive(Debug, Clone)]
pub struct Tally {
    pub base_seed: Seed,
    pub runs: u64,
    pub championships: FnvHashMap<Team, u64>,
    pub final_fours: FnvHashMap<Team, u64>,
}

impl Tally {
    /// Runs `runs` predictions without a progress bar.
    pub fn run(base_seed: Seed, runs: u64) -> Result<Tally> {
        Tally::run_with_progress(base_seed, runs, ProgressBar::hidden())
    }

    /// Runs `runs` predictions, ticking `progress` once per bracket.
    pub fn run_with_progress(base_seed: Seed, runs: u64, progress: ProgressBar) -> Result<Tally> {
        info!("Tallying {} brackets starting at seed {}", runs, base_seed);
        let mut tally = Tally {
            base_seed,
            runs,
            championships: FnvHashMap::default(),
            final_fours: FnvHashMap::default(),
        };

        for i in 0..runs {
            let seed = base_seed.offset(i);
            let championship = simulate(&mut seed.rng(), build_tournament()?)?;
            // only the Final Four and Championship matter here
            let prediction = collect_results_from(&championship, Round::Final4)?;

            for team in prediction.final_four_teams() {
                *tally.final_fours.entry(team).or_insert(0) += 1;
            }
            *tally.championships.entry(prediction.champion()).or_insert(0) += 1;
            debug!("seed {}: champion {}", seed, prediction.champion());
            progress.inc(1);
        }
        progress.finish_and_clear();

        Ok(tally)
    }

    /// A progress bar sized for `runs` brackets
    pub fn progress_bar(runs: u64) -> ProgressBar {
        let bar = ProgressBar::new(runs);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner} [{elapsed_precise}] {bar:40} {pos}/{len} brackets")
                .progress_chars("=> "),
        );
        bar
    }

    /// Share of runs each team won, most likely champion first
    pub fn champion_odds(&self) -> Vec<(Team, f64)> {
        self.odds(&self.championships)
    }

    /// Share of runs each team reached the Final Four
    pub fn final_four_odds(&self) -> Vec<(Team, f64)> {
        self.odds(&self.final_fours)
    }

    fn odds(&self, counts: &FnvHashMap<Team, u64>) -> Vec<(Team, f64)> {
        let mut odds: Vec<(Team, u64)> = counts.iter().map(|(&team, &count)| (team, count)).collect();
        // ties broken by seed then region so the order doesn't depend on hashing
        odds.sort_by(|a, b| {
            b.1.cmp(&a.1)
                .then(a.0.seed().cmp(&b.0.seed()))
                .then(a.0.region().cmp(&b.0.region()))
        });
        odds.into_iter()
            .map(|(team, count)| (team, count as f64 / self.runs.max(1) as f64))
            .collect()
    }

    pub fn pretty_print(&self, top: usize) {
        println!("{} brackets from seed {}", self.runs, self.base_seed);
        println!("\nChampionship odds");
        for (team, odds) in self.champion_odds().into_iter().take(top) {
            println!("{:>6.2}% {}", odds * 100.0, team);
        }
        println!("\nFinal Four odds");
        for (team, odds) in self.final_four_odds().into_iter().take(top) {
            println!("{:>6.2}% {}", odds * 100.0, team);
        }
    }
}
