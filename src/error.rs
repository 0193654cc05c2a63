//! Error types for beam building and result extraction

use thiserror::Error;

/// Main error type for beam operations
#[derive(Error, Debug)]
pub enum BeamError {
    #[error("Invalid fixity: {0}")]
    InvalidFixity(String),

    #[error("Invalid coordinate {0}: beam coordinates must be finite")]
    InvalidCoordinate(f64),

    #[error("A node already exists at x = {0}")]
    DuplicateNode(f64),

    #[error("No node exists at x = {0}")]
    NodeNotFound(f64),

    #[error("Distributed load at x = {0} has zero length")]
    ZeroLengthLoad(f64),

    #[error("Length mismatch: expected {expected} {what}, got {actual}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Node at x = {x} has not been analyzed - run an analysis first")]
    NotAnalyzed { x: f64 },

    #[error("Solution does not match the model: {0}")]
    SolutionMismatch(String),

    #[error("Solver failed: {0}")]
    SolverFailed(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for beam operations
pub type BeamResult<T> = Result<T, BeamError>;
