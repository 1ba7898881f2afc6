//! Error type shared by label construction, extension and pool retrieval.

use thiserror::Error;

use crate::params::Direction;
use crate::vertex::VertexId;

/// Errors raised by the labelling core.
///
/// None of these are fatal: each is scoped to the single operation that
/// produced it and the orchestrator decides whether to skip the edge,
/// stop the search or report upwards.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RcspError {
    /// A resource vector does not have the configured number of resources.
    #[error("invalid input: expected {expected} resources, found {found}")]
    ResourceDimension { expected: usize, found: usize },
    /// A label was constructed with an empty path.
    #[error("invalid input: label path must contain at least one vertex")]
    EmptyPath,
    /// The last path element is not the label's vertex.
    #[error("invalid input: path ends at {last}, label sits at {vertex}")]
    PathEnd { vertex: VertexId, last: VertexId },
    /// The configuration itself is unusable.
    #[error("invalid input: {0}")]
    InvalidParams(&'static str),
    /// A label was requested from a pool without labels.
    #[error("cannot take a label from an empty {0} pool")]
    EmptyPool(Direction),
}

impl RcspError {
    /// True for every malformed-input condition, false for [`RcspError::EmptyPool`].
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, RcspError::EmptyPool(_))
    }
}

pub type Result<T> = std::result::Result<T, RcspError>;
