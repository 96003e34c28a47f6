// Command line front end: supplies a seed, runs the predictor and renders the result.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::path::Path;

use ncaa_predict::config::{generate_sample_config, Config};
use ncaa_predict::export::{self, OutputFormat};
use ncaa_predict::tally::Tally;
use ncaa_predict::{predict, Round, Seed};

#[derive(Parser)]
#[command(name = "bracket-predict")]
#[command(about = "Predict the NCAA tournament from historical seed win rates", long_about = None)]
struct Cli {
    /// Config file path (defaults to config.yaml / config.yml / .bracket-config.yaml if present)
    #[arg(short, long)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict one bracket
    Predict {
        /// Seed to replay; a new one is generated if neither this nor the config sets one
        #[arg(long)]
        seed: Option<Seed>,
        /// Earliest round to show (RoundOf64, RoundOf32, Sweet16, Elite8, ...)
        #[arg(long)]
        lowest_round: Option<Round>,
        /// Output format: text, json or csv
        #[arg(long)]
        format: Option<OutputFormat>,
        /// Write the prediction to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Simulate many consecutive seeds and report championship odds
    Tally {
        /// First seed of the run
        #[arg(long)]
        seed: Option<Seed>,
        /// Number of brackets to simulate
        #[arg(long)]
        runs: Option<u64>,
        /// Number of teams listed in each table
        #[arg(long)]
        top: Option<usize>,
    },
    /// Write a sample configuration file
    InitConfig {
        #[arg(default_value = "config.yaml")]
        path: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = Config::load_or_default(cli.config.as_deref());

    match cli.command {
        Commands::Predict { seed, lowest_round, format, output } => {
            let seed = seed.or(config.simulation.seed).unwrap_or_else(Seed::generate);
            let lowest_round = lowest_round.unwrap_or(config.simulation.lowest_round);
            let format = format.unwrap_or(config.output.format);
            let output = output.or(config.output.path);

            let prediction = predict(seed, lowest_round)
                .with_context(|| format!("failed to predict bracket for seed {}", seed))?;

            match output {
                Some(path) => {
                    export::write_to_file(seed, &prediction, format, Path::new(&path))
                        .with_context(|| format!("failed to write {}", path))?;
                    info!("Wrote {} prediction for seed {} to {}", format, seed, path);
                }
                None => println!("{}", export::render(seed, &prediction, format)?),
            }
        }
        Commands::Tally { seed, runs, top } => {
            let seed = seed.or(config.simulation.seed).unwrap_or_else(Seed::generate);
            let runs = runs.unwrap_or(config.tally.runs);
            let top = top.unwrap_or(config.tally.top);

            let tally = Tally::run_with_progress(seed, runs, Tally::progress_bar(runs))?;
            tally.pretty_print(top);
        }
        Commands::InitConfig { path } => {
            if Path::new(&path).exists() {
                anyhow::bail!("{} already exists", path);
            }
            std::fs::write(&path, generate_sample_config())
                .with_context(|| format!("failed to write {}", path))?;
            println!("Wrote sample configuration to {}", path);
        }
    }

    Ok(())
}
