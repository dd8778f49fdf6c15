//! Response shapes handed to the transport layer
//!
//! Pure reshaping of engine results into the wire contracts. No numeric
//! work happens here.

use serde::{Deserialize, Serialize};

use crate::convolution::ConvolutionResult;
use crate::error::TransformError;
use crate::spectrum::{SpectrogramResult, SpectrumResult};

/// `{freq, magnitude}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FftResponse {
    pub freq: Vec<f64>,
    pub magnitude: Vec<f64>,
}

impl From<SpectrumResult> for FftResponse {
    fn from(result: SpectrumResult) -> Self {
        let (freq, magnitude) = result.into_parts();
        Self { freq, magnitude }
    }
}

/// `{samples}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvolutionResponse {
    pub samples: Vec<f64>,
}

impl From<ConvolutionResult> for ConvolutionResponse {
    fn from(result: ConvolutionResult) -> Self {
        Self {
            samples: result.into_samples(),
        }
    }
}

/// `{f, t, Zxx}` with `Zxx[frequency_bin][time_segment]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StftResponse {
    pub f: Vec<f64>,
    pub t: Vec<f64>,
    #[serde(rename = "Zxx")]
    pub zxx: Vec<Vec<f64>>,
}

impl From<SpectrogramResult> for StftResponse {
    fn from(result: SpectrogramResult) -> Self {
        let (f, t, magnitudes) = result.into_parts();
        let zxx = magnitudes.rows().into_iter().map(|row| row.to_vec()).collect();
        Self { f, t, zxx }
    }
}

/// Liveness probe payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}

/// Failure payload: taxonomy name plus human-readable detail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl From<&TransformError> for ErrorResponse {
    fn from(err: &TransformError) -> Self {
        Self {
            error: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}
