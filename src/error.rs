//! Instance validation errors.

use thiserror::Error;

/// Errors raised when externally supplied problem data is inconsistent.
///
/// These occur only while building an [`Instance`](crate::models::Instance);
/// the solver core itself never fails. Infeasibility during search is
/// encoded as data (`-1.0` gain sentinels, `is_valid` flags), never as an
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstanceError {
    /// No locations were supplied; the depot is required.
    #[error("instance must contain at least the depot")]
    Empty,

    /// Demand list length does not match the coordinate list.
    #[error("expected {expected} demand entries, got {actual}")]
    DemandLengthMismatch {
        /// Number of locations (depot included).
        expected: usize,
        /// Number of demand entries supplied.
        actual: usize,
    },

    /// Service time list length does not match the coordinate list.
    #[error("expected {expected} service time entries, got {actual}")]
    ServiceTimeLengthMismatch {
        /// Number of locations (depot included).
        expected: usize,
        /// Number of service time entries supplied.
        actual: usize,
    },

    /// Supplied distance matrix does not cover every location pair.
    #[error("distance matrix covers {actual} locations, expected {expected}")]
    MatrixSizeMismatch {
        /// Number of locations (depot included).
        expected: usize,
        /// Size of the supplied matrix.
        actual: usize,
    },

    /// Supplied distance matrix is not symmetric.
    #[error("distance matrix is not symmetric at ({i}, {j})")]
    AsymmetricMatrix {
        /// Row of the offending entry.
        i: usize,
        /// Column of the offending entry.
        j: usize,
    },

    /// Supplied distance matrix has a nonzero self-distance.
    #[error("distance matrix has a nonzero diagonal entry at {i}")]
    NonzeroDiagonal {
        /// Index of the offending diagonal entry.
        i: usize,
    },
}
