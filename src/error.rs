// Errors raised while building, simulating or collecting a bracket.
// None of these are transient: the same inputs always produce the same error.

use thiserror::Error;

use crate::team::Round;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BracketError {
    /// The tree can't be assembled or doesn't have the shape of a tournament
    #[error("malformed bracket: {0}")]
    Structural(String),

    /// A leaf game has neither children nor a pre-set winner
    #[error("cannot simulate a game without both contestants ({0} game has no teams and no winner)")]
    MissingContestants(Round),

    /// The collector was handed a tree with an unplayed game in it
    #[error("{0} game has not been resolved")]
    Unresolved(Round),

    #[error("seed {0} is outside the valid range 1..=16")]
    SeedOutOfRange(u8),

    /// Seeding nodes are team entries, not contests, so they have no probabilities
    #[error("no win probabilities exist for the {0} round")]
    UnplayableRound(Round),
}

pub type Result<T> = std::result::Result<T, BracketError>;

/// Failures while writing a prediction out for a renderer or a file.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to encode prediction as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to encode prediction as CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("failed to write prediction: {0}")]
    Io(#[from] std::io::Error),
}
