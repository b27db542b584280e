//! Error types for request validation

use thiserror::Error;

/// Result alias for library operations
pub type Result<T> = std::result::Result<T, LabError>;

/// Errors raised when analysis parameters are rejected before any algorithm runs
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LabError {
    /// A parameter is outside its accepted range
    #[error("invalid parameter `{name}`: {message}")]
    InvalidParameter {
        name: &'static str,
        message: String,
    },

    /// More edges requested than a simple graph on the given nodes can hold
    #[error("requested {requested} edges but at most {max} fit in a simple graph")]
    TooManyEdges { requested: usize, max: usize },

    /// Node count above the brute-force search ceiling
    #[error("brute-force search is limited to {max} nodes, got {requested}")]
    TooManyNodes { requested: usize, max: usize },

    /// Edge probability outside [0, 1]
    #[error("edge probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),
}
