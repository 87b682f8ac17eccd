#[derive(thiserror::Error, Debug)]
pub enum SolverError {
    /// Pivot search found no usable entry and could not synthesize one.
    #[error("NoPivot: no pivot found at step {step}")]
    NoPivot { step: usize },
    /// A redundant row kept a nonzero entry after elimination: r(A) != r(A~).
    #[error("RankMismatch: row {row} is nonzero after elimination")]
    RankMismatch { row: usize },
    /// The solution count is above the configured ceiling.
    #[error("TooManySolutions: {count} solutions exceed the limit of {limit}")]
    TooManySolutions { count: u64, limit: u64 },
    /// Every remaining branch of back-substitution failed at this column.
    #[error("NoValueAtColumn: no admissible value at column {column}")]
    NoValueAtColumn { column: usize },
    /// The elimination multiplier is undefined for an accepted pivot.
    #[error("InternalInvariantViolation: {0}")]
    InternalInvariantViolation(String),

    /// Error when trying to find a modular inverse that doesn't exist (gcd(a, m) != 1).
    #[error("NoInverse: {0}")]
    NoInverse(String),
    /// Error when creating a ring with an invalid modulus (m <= 1).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    #[error("DimensionMismatch: {0}")]
    DimensionMismatch(String),

    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl SolverError {
    /// Returns `true` for failures that describe the input system rather than a bug.
    pub fn is_ordinary(&self) -> bool {
        !matches!(self, SolverError::InternalInvariantViolation(_))
    }
}
