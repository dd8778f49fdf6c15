//! Call contract consumed by transports (CLI, Python, HTTP front ends)
//!
//! Each function validates its raw input into a [`SampleBuffer`], runs one
//! engine and reshapes the result. Calls share no state.

pub mod request;
pub mod response;

pub use request::{ConvolutionRequest, FftRequest, StftRequest};
pub use response::{ConvolutionResponse, ErrorResponse, FftResponse, HealthResponse, StftResponse};

use crate::config::{ConvolutionConfig, EngineConfig, StftConfig};
use crate::convolution::convolve_with;
use crate::error::Result;
use crate::signal::SampleBuffer;
use crate::spectrum::{spectrogram, transform};

/// Static availability message returned by the liveness probe
pub const SERVICE_STATUS_MESSAGE: &str = "DSP Service is running";

/// Magnitude spectrum of `samples` over the non-negative frequency bins
pub fn compute_fft(samples: &[f64], sample_rate: i32) -> Result<FftResponse> {
    let signal = SampleBuffer::with_sample_rate(samples, sample_rate)?;
    Ok(transform(&signal)?.into())
}

/// Full linear convolution of two signals
pub fn compute_convolution(signal_a: &[f64], signal_b: &[f64]) -> Result<ConvolutionResponse> {
    compute_convolution_with(signal_a, signal_b, &ConvolutionConfig::default())
}

pub fn compute_convolution_with(
    signal_a: &[f64],
    signal_b: &[f64],
    config: &ConvolutionConfig,
) -> Result<ConvolutionResponse> {
    let a = SampleBuffer::new(signal_a)?;
    let b = SampleBuffer::new(signal_b)?;
    Ok(convolve_with(&a, &b, config)?.into())
}

/// Spectrogram with the default geometry (256-sample Hann frames, 50% overlap)
pub fn compute_stft(samples: &[f64], sample_rate: i32) -> Result<StftResponse> {
    compute_stft_with(samples, sample_rate, &StftConfig::default())
}

pub fn compute_stft_with(
    samples: &[f64],
    sample_rate: i32,
    config: &StftConfig,
) -> Result<StftResponse> {
    let signal = SampleBuffer::with_sample_rate(samples, sample_rate)?;
    Ok(spectrogram(&signal, config)?.into())
}

/// Liveness probe
pub fn health() -> HealthResponse {
    HealthResponse {
        message: SERVICE_STATUS_MESSAGE.to_string(),
    }
}

impl FftRequest {
    /// The FFT has no tunable parameters; the config is taken so every
    /// request type is handled the same way
    pub fn handle(&self, _config: &EngineConfig) -> Result<FftResponse> {
        compute_fft(&self.samples, self.sample_rate)
    }
}

impl ConvolutionRequest {
    pub fn handle(&self, config: &EngineConfig) -> Result<ConvolutionResponse> {
        compute_convolution_with(&self.signal_a, &self.signal_b, &config.convolution)
    }
}

impl StftRequest {
    pub fn handle(&self, config: &EngineConfig) -> Result<StftResponse> {
        compute_stft_with(&self.samples, self.sample_rate, &self.config(&config.stft))
    }
}
