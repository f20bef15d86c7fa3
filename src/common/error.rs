//! Defines the error type for training operations.
use thiserror::Error;


/// Errors reported by trainers and builders.
///
/// Configuration errors are raised by `build` before any computation
/// starts; input errors are raised at the start of a call and leave
/// the trainer state untouched.
/// Numeric edge cases (zero-variance nodes, all-equal feature values)
/// are not errors: the algorithms fall back to a leaf or a clamped
/// value instead.
#[derive(Debug, Error)]
pub enum TrainError {
    /// An invalid hyperparameter, rejected at construction time.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),


    /// The sample passed to an update contains no examples.
    #[error("the sample is empty; cannot draw a bootstrap sample")]
    EmptySample,


    /// The feature dimension differs from the one
    /// the trainer was first updated with.
    #[error("feature dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// The dimension observed on the first update.
        expected: usize,
        /// The dimension of the offending sample.
        got: usize,
    },
}
