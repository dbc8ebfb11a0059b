use std::io;

use thiserror::Error;

/// Everything that can go wrong while building or querying a division.
#[derive(Error, Debug)]
pub enum EliminationError {
    /// A query named a team that is not part of the roster.
    #[error("unknown team: {0}")]
    UnknownTeam(String),

    /// The same name appears twice in the input records.
    #[error("duplicate team: {0}")]
    DuplicateTeam(String),

    /// Malformed record or remaining-games matrix.
    #[error("invalid schedule: {0}")]
    InvalidSchedule(String),

    /// Internal consistency check failed inside the flow solver or the
    /// certificate extractor.
    #[error("solver invariant violated: {0}")]
    SolverInvariant(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, EliminationError>;
