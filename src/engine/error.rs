// ==========================================
// Termék önköltség-számítás - engine errors
// ==========================================
// Every failure carries an explicit reason naming the stage and the
// offending vector, basis or index. The engine never substitutes
// defaults and never lets a NaN/Infinity escape into a result.
// ==========================================

use crate::domain::types::{InvalidBasisError, OverheadPool};
use thiserror::Error;

/// Allocation engine error taxonomy.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Unrecognized allocation-basis selector (raised at the string
    /// boundary, before any computation)
    #[error(transparent)]
    InvalidBasis(#[from] InvalidBasisError),

    /// Input vectors differ in length
    #[error("input vector `{vector}` has {actual} entries, expected {expected}")]
    ShapeMismatch {
        vector: &'static str,
        expected: usize,
        actual: usize,
    },

    /// No products at all
    #[error("cost vectors must contain at least one product")]
    EmptyInput,

    /// Cost credits are not supported; a negative entry would break the
    /// proportional-share interpretation of the allocation bases
    #[error("negative value {value} in `{vector}` at product index {index}")]
    NegativeCost {
        vector: &'static str,
        index: usize,
        value: f64,
    },

    /// Overhead pools are non-negative scalars
    #[error("{pool} overhead must be non-negative, got {value}")]
    NegativeOverhead { pool: OverheadPool, value: f64 },

    /// The chosen allocation basis sums to zero, so proportional shares
    /// are undefined for this pool
    #[error("allocation base `{basis}` sums to zero while allocating {pool} overhead")]
    ZeroBasisSum { pool: OverheadPool, basis: String },

    /// A production-units entry is zero or negative; unit costs cannot
    /// be derived for that product
    #[error("production units must be positive, got {value} at product index {index}")]
    NonPositiveUnits { index: usize, value: f64 },
}

/// Result alias used across the engine layer.
pub type EngineResult<T> = Result<T, EngineError>;
