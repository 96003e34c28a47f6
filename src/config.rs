// Configuration module for the bracket predictor
// Supports YAML configuration files for simulation, tally and output settings

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::export::OutputFormat;
use crate::seed::Seed;
use crate::team::Round;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationSettings,
    #[serde(default)]
    pub tally: TallySettings,
    #[serde(default)]
    pub output: OutputSettings,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file(path: &str) -> Result<Self, String> {
        if !Path::new(path).exists() {
            return Err(format!("Config file not found: {}", path));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Load configuration from file if it exists, otherwise use defaults
    pub fn load_or_default(path: Option<&str>) -> Self {
        match path {
            Some(p) => Self::from_file(p).unwrap_or_else(|e| {
                warn!("{}", e);
                warn!("Using default configuration.");
                Self::default()
            }),
            None => {
                // Try default locations
                for default_path in &["config.yaml", "config.yml", ".bracket-config.yaml"] {
                    if Path::new(default_path).exists() {
                        if let Ok(config) = Self::from_file(default_path) {
                            info!("Loaded configuration from {}", default_path);
                            return config;
                        }
                    }
                }
                Self::default()
            }
        }
    }

    /// Save configuration to a YAML file
    pub fn save_to_file(&self, path: &str) -> Result<(), String> {
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, yaml)
            .map_err(|e| format!("Failed to write config file: {}", e))?;

        Ok(())
    }
}

/// Prediction settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSettings {
    /// Fixed seed to replay; a new one is generated for every run when unset
    #[serde(default)]
    pub seed: Option<Seed>,

    /// Earliest round to include in the results
    #[serde(default = "default_lowest_round")]
    pub lowest_round: Round,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        SimulationSettings {
            seed: None,
            lowest_round: default_lowest_round(),
        }
    }
}

fn default_lowest_round() -> Round { Round::RoundOf64 }

/// Multi-seed tally settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TallySettings {
    /// Number of brackets to simulate
    #[serde(default = "default_runs")]
    pub runs: u64,

    /// Teams listed in each odds table
    #[serde(default = "default_top")]
    pub top: usize,
}

impl Default for TallySettings {
    fn default() -> Self {
        TallySettings {
            runs: default_runs(),
            top: default_top(),
        }
    }
}

fn default_runs() -> u64 { 1000 }
fn default_top() -> usize { 10 }

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,

    /// Write to this file instead of stdout
    #[serde(default)]
    pub path: Option<String>,
}

/// Generate a sample configuration file
pub fn generate_sample_config() -> String {
    r#"# NCAA Bracket Predictor Configuration
# All values shown are defaults - uncomment and modify as needed

# Prediction settings
simulation:
  # Seed for the random number generator. The same seed always produces the
  # same bracket; leave unset (null) to generate a new seed every run.
  seed: null
  # Earliest round shown in the results:
  # RoundOf64, RoundOf32, Sweet16, Elite8, Final4 or Championship
  lowest_round: RoundOf64

# Monte Carlo tally settings
tally:
  # Number of brackets to simulate (consecutive seeds)
  runs: 1000
  # Number of teams listed in each odds table
  top: 10

# Output settings
output:
  # text, json or csv
  format: text
  # Write to a file instead of stdout
  path: null
"#.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.simulation.seed, None);
        assert_eq!(config.simulation.lowest_round, Round::RoundOf64);
        assert_eq!(config.tally.runs, 1000);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
simulation:
  seed: 42
  lowest_round: Sweet16
output:
  format: json
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.simulation.seed, Some(Seed(42)));
        assert_eq!(config.simulation.lowest_round, Round::Sweet16);
        assert_eq!(config.output.format, OutputFormat::Json);
        // Defaults should still work
        assert_eq!(config.tally.runs, 1000);
        assert_eq!(config.output.path, None);
    }

    #[test]
    fn test_sample_config_parses_to_defaults() {
        let config: Config = serde_yaml::from_str(&generate_sample_config()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_reload() {
        let path = std::env::temp_dir().join(format!("bracket-config-{}.yaml", std::process::id()));
        let path = path.to_str().unwrap();

        let mut config = Config::default();
        config.simulation.seed = Some(Seed(7));
        config.tally.runs = 25;
        config.save_to_file(path).unwrap();

        let loaded = Config::from_file(path).unwrap();
        std::fs::remove_file(path).ok();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        assert!(Config::from_file("/nonexistent/bracket.yaml").is_err());
        assert_eq!(Config::load_or_default(Some("/nonexistent/bracket.yaml")), Config::default());
    }
}
