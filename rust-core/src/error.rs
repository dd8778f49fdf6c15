//! Error types for the transform engine
//!
//! Every engine operation fails synchronously with one of these kinds.
//! Transports map them onto their own status codes.

use thiserror::Error;

/// Largest transform length accepted by the engine (2^26 points)
pub const MAX_TRANSFORM_LEN: usize = 1 << 26;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    /// Empty signal, bad sample rate, non-finite samples or bad parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Convolution called with an empty operand
    #[error("Dimension error: {0}")]
    Dimension(String),

    /// Numerical failure (oversized transform, overflow to non-finite values)
    #[error("Computation error: {0}")]
    Computation(String),
}

impl TransformError {
    /// Taxonomy name used by transports when labelling a failure
    pub fn kind(&self) -> &'static str {
        match self {
            TransformError::InvalidInput(_) => "InvalidInputError",
            TransformError::Dimension(_) => "DimensionError",
            TransformError::Computation(_) => "ComputationError",
        }
    }

    /// True for failures caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        !matches!(self, TransformError::Computation(_))
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;

/// Reject transform lengths the engine refuses to allocate for
pub(crate) fn check_transform_len(len: usize) -> Result<()> {
    if len > MAX_TRANSFORM_LEN {
        return Err(TransformError::Computation(format!(
            "transform length {} exceeds the maximum of {}",
            len, MAX_TRANSFORM_LEN
        )));
    }
    Ok(())
}

/// Reject outputs that overflowed to NaN or infinity
pub(crate) fn check_finite_output(values: &[f64], what: &str) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(idx) => Err(TransformError::Computation(format!(
            "{} produced a non-finite value at index {}",
            what, idx
        ))),
        None => Ok(()),
    }
}
