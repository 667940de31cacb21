//! Error types for the clusterer.

use thiserror::Error;

/// Validation failures raised by the clusterer before any work is done.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClusterError {
    /// K outside `1 < K < number of points`.
    #[error("Invalid number of clusters: {reason}")]
    InvalidClusterCount { reason: String },

    /// Iteration cap outside `1 < max_iter < 1000`.
    #[error("Invalid maximum iteration: {reason}")]
    InvalidIterationCount { reason: String },
}

impl ClusterError {
    pub fn invalid_cluster_count(reason: impl Into<String>) -> Self {
        Self::InvalidClusterCount {
            reason: reason.into(),
        }
    }

    pub fn invalid_iteration_count(reason: impl Into<String>) -> Self {
        Self::InvalidIterationCount {
            reason: reason.into(),
        }
    }
}
