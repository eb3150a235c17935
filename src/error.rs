//! Error types for punctum operations.

use thiserror::Error;

/// Errors that can occur while building regions or sampling points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PunctumError {
    /// Count law string is not one of the recognized values.
    #[error("unknown count law `{0}`, expected `binomial` or `poisson`")]
    UnknownLaw(String),

    /// Sampling dimension must be at least 1.
    #[error("dimension must be at least 1")]
    ZeroDimension,

    /// Poisson mean must be finite and non-negative.
    #[error("invalid poisson mean {0}")]
    InvalidMean(f64),

    /// A coordinate or normal vector disagrees with the region dimension.
    #[error("dimension mismatch: expected {expected} coordinates, got {actual}")]
    DimensionMismatch {
        /// Dimension of the region.
        expected: usize,
        /// Length of the offending vector.
        actual: usize,
    },

    /// Vertex set does not span a two-dimensional region.
    #[error("degenerate region: need at least 3 non-collinear vertices")]
    DegenerateRegion,

    /// Rejection sampling gave up after the configured attempt cap.
    #[error("no candidate accepted after {attempts} rejection attempts")]
    SamplingTimeout {
        /// Number of candidates discarded before giving up.
        attempts: usize,
    },
}
