//! Error types for hospital placement.

use thiserror::Error;

/// Errors raised by the grid model and the search runners.
///
/// All variants describe structural misuse or an exhausted grid. None of
/// them is transient, so nothing is retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// Bad grid dimensions, hospital count or runner configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Cost was requested for a placement with no hospitals.
    #[error("cannot evaluate the cost of an empty placement")]
    EmptyPlacement,

    /// A draw was requested from an empty pool of free cells.
    #[error("no free cell available for {context}")]
    ExhaustedCandidates {
        /// What the draw was for.
        context: String,
    },
}

impl PlacementError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        PlacementError::InvalidConfiguration(message.into())
    }

    pub(crate) fn exhausted(context: impl Into<String>) -> Self {
        PlacementError::ExhaustedCandidates {
            context: context.into(),
        }
    }
}

/// Result type alias for placement operations.
pub type Result<T> = std::result::Result<T, PlacementError>;
