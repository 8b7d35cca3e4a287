//! Error types for cordier geometry operations

use thiserror::Error;

/// Main error type for cordier geometry operations
#[derive(Error, Debug)]
pub enum Error {
    /// Rejected before any computation begins: fewer than 4 points, or a
    /// cell referencing an out-of-range point index
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A tetrahedron whose homogeneous determinant is numerically zero has
    /// no finite circumsphere; callers skip such cells rather than abort
    #[error("Degenerate cell: near-zero homogeneous determinant, circumsphere undefined")]
    DegenerateCell,

    #[error("Algorithm error: {0}")]
    Algorithm(String),
}

/// Result type alias for cordier geometry operations
pub type Result<T> = std::result::Result<T, Error>;
