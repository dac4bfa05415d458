/// Failures surfaced by the harness around the compaction kernel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    /// Requested length was negative or not a number.
    #[error("invalid length `{0}`: expected a non-negative integer")]
    InvalidLength(String),

    #[error("invalid value range: min {min} is greater than max {max}")]
    InvalidRange { min: i32, max: i32 },

    #[error("chunk length must be at least 1")]
    InvalidChunkLen,

    /// The predicate could not be evaluated on an element.
    #[error("predicate failed on element {value}: {reason}")]
    PredicateFault { value: i32, reason: String },

    /// Post-condition self-check: an output element does not satisfy the predicate.
    #[error("element {value} at output position {position} does not satisfy the predicate")]
    VerificationFailed { position: usize, value: i32 },
}

impl SelectError {
    pub fn exit_code(&self) -> u8 {
        match self {
            SelectError::VerificationFailed { .. } => 1,
            SelectError::InvalidLength(_)
            | SelectError::InvalidRange { .. }
            | SelectError::InvalidChunkLen => 2,
            SelectError::PredicateFault { .. } => 3,
        }
    }
}
