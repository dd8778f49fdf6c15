//! Validated sample buffer
//!
//! Immutable view over a real-valued signal. All checks happen here, before
//! any numeric work, so malformed input never reaches the transforms.

use crate::error::{Result, TransformError};

/// Validated, immutable real-valued signal
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    samples: Vec<f64>,
    sample_rate: Option<u32>,
}

impl SampleBuffer {
    /// Wrap a signal that carries no sample rate (convolution operands)
    ///
    /// # Arguments
    /// * `samples` - Signal samples, may be empty
    ///
    /// # Errors
    /// `InvalidInput` if any sample is NaN or infinite
    pub fn new(samples: &[f64]) -> Result<Self> {
        check_finite(samples)?;

        Ok(Self {
            samples: samples.to_vec(),
            sample_rate: None,
        })
    }

    /// Wrap a signal for frequency-labelled outputs (FFT, STFT)
    ///
    /// # Arguments
    /// * `samples` - Signal samples, at least one
    /// * `sample_rate` - Sample rate in Hz, strictly positive
    ///
    /// # Errors
    /// `InvalidInput` for an empty signal, a non-positive sample rate or
    /// non-finite samples
    pub fn with_sample_rate(samples: &[f64], sample_rate: i32) -> Result<Self> {
        if samples.is_empty() {
            return Err(TransformError::InvalidInput(
                "signal must contain at least one sample".to_string(),
            ));
        }

        if sample_rate <= 0 {
            return Err(TransformError::InvalidInput(format!(
                "sample rate must be positive (got {})",
                sample_rate
            )));
        }

        check_finite(samples)?;

        Ok(Self {
            samples: samples.to_vec(),
            sample_rate: Some(sample_rate as u32),
        })
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample rate in Hz, if the buffer was built with one
    pub fn sample_rate(&self) -> Option<u32> {
        self.sample_rate
    }

    /// Signal duration in seconds (None without a sample rate)
    pub fn duration_seconds(&self) -> Option<f64> {
        self.sample_rate
            .map(|rate| self.samples.len() as f64 / rate as f64)
    }
}

fn check_finite(samples: &[f64]) -> Result<()> {
    if let Some(idx) = samples.iter().position(|s| !s.is_finite()) {
        return Err(TransformError::InvalidInput(format!(
            "sample {} is not a finite number ({})",
            idx, samples[idx]
        )));
    }
    Ok(())
}
