// The one place predictions get serialized. Renderers pick a format here instead of
// each type carrying its own ad hoc conversion.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use crate::error::ExportError;
use crate::prediction::Prediction;
use crate::seed::Seed;
use crate::team::Region;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("unknown output format '{}' (expected text, json or csv)", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        })
    }
}

// JSON document: the seed travels with the results so the output can be replayed
#[derive(Serialize)]
struct Report<'a> {
    seed: Seed,
    #[serde(flatten)]
    prediction: &'a Prediction,
}

// one CSV line per game, region is empty for the Final Four and Championship
#[derive(Serialize)]
struct CsvRow {
    region: Option<Region>,
    round: &'static str,
    left_seed: u8,
    left_region: Region,
    right_seed: u8,
    right_region: Region,
    winner_seed: u8,
    winner_region: Region,
    upset: bool,
}

pub fn to_json(seed: Seed, prediction: &Prediction) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(&Report { seed, prediction })?)
}

pub fn to_csv(prediction: &Prediction) -> Result<String, ExportError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for (region, game) in prediction.all_games() {
        wtr.serialize(CsvRow {
            region,
            round: game.round.label(),
            left_seed: game.left.seed(),
            left_region: game.left.region(),
            right_seed: game.right.seed(),
            right_region: game.right.region(),
            winner_seed: game.winner.seed(),
            winner_region: game.winner.region(),
            upset: game.is_upset(),
        })?;
    }
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

pub fn to_text(seed: Seed, prediction: &Prediction) -> String {
    format!("Bracket prediction for seed {}\n\n{}\n", seed, prediction)
}

pub fn render(seed: Seed, prediction: &Prediction, format: OutputFormat) -> Result<String, ExportError> {
    match format {
        OutputFormat::Text => Ok(to_text(seed, prediction)),
        OutputFormat::Json => to_json(seed, prediction),
        OutputFormat::Csv => to_csv(prediction),
    }
}

pub fn write_to_file(
    seed: Seed,
    prediction: &Prediction,
    format: OutputFormat,
    path: &Path,
) -> Result<(), ExportError> {
    let rendered = render(seed, prediction, format)?;
    let mut file = File::create(path)?;
    file.write_all(rendered.as_bytes())?;
    Ok(())
}
