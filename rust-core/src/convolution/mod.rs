//! Full linear convolution of two real signals

pub mod direct;
pub mod fast;

pub use direct::convolve_direct;
pub use fast::convolve_fft;

use crate::config::{ConvolutionConfig, ConvolutionMethod};
use crate::error::{check_finite_output, check_transform_len, Result, TransformError};
use crate::signal::SampleBuffer;

/// Output of a full convolution, `len(a) + len(b) - 1` samples
#[derive(Debug, Clone, PartialEq)]
pub struct ConvolutionResult {
    samples: Vec<f64>,
}

impl ConvolutionResult {
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }
}

/// Full convolution with the default method selection
pub fn convolve_full(a: &SampleBuffer, b: &SampleBuffer) -> Result<ConvolutionResult> {
    convolve_with(a, b, &ConvolutionConfig::default())
}

/// Full convolution with an explicit method selection
///
/// # Errors
/// `Dimension` if either operand is empty, `Computation` if the output is
/// too long or overflows
pub fn convolve_with(
    a: &SampleBuffer,
    b: &SampleBuffer,
    config: &ConvolutionConfig,
) -> Result<ConvolutionResult> {
    if a.is_empty() || b.is_empty() {
        return Err(TransformError::Dimension(format!(
            "convolution operands must be non-empty (got lengths {} and {})",
            a.len(),
            b.len()
        )));
    }

    let output_len = a.len() + b.len() - 1;
    check_transform_len(output_len)?;

    let use_direct = match config.method {
        ConvolutionMethod::Direct => true,
        ConvolutionMethod::Fft => false,
        ConvolutionMethod::Auto => a.len().min(b.len()) <= config.direct_max_taps,
    };

    log::debug!(
        "Convolution: {} x {} samples ({})",
        a.len(),
        b.len(),
        if use_direct { "direct" } else { "fft" }
    );

    let samples = if use_direct {
        convolve_direct(a.samples(), b.samples())
    } else {
        convolve_fft(a.samples(), b.samples())?
    };
    check_finite_output(&samples, "convolution")?;

    Ok(ConvolutionResult { samples })
}
