use thiserror::Error;

pub type Result<T, E = EstimatorError> = std::result::Result<T, E>;

/// Errors returned when constructing a `CardinalityEstimator`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimatorError {
    #[error("invalid precision {0}, must be in [4..25] range")]
    InvalidPrecision(u8),
    #[error("invalid write buffer capacity {0}, must be positive")]
    InvalidWriteBufferCapacity(usize),
}
