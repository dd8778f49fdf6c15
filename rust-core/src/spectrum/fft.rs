//! FFT engine for real-valued signals
//!
//! Wraps an [`FftPlan`] with the real-input conventions used everywhere in
//! the crate: only non-negative frequency bins are kept, and bin k maps to
//! k * sample_rate / N Hz.

use num_complex::Complex64;

use super::dft::FftPlan;
use crate::error::{check_finite_output, Result, TransformError};
use crate::signal::SampleBuffer;

/// Magnitude spectrum over the non-negative frequency bins
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumResult {
    frequencies: Vec<f64>,
    magnitudes: Vec<f64>,
}

impl SpectrumResult {
    /// Bin frequencies in Hz, ascending from 0
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// |X[k]| per retained bin
    pub fn magnitudes(&self) -> &[f64] {
        &self.magnitudes
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Frequency and magnitude of the strongest bin
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.magnitudes
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(k, &mag)| (self.frequencies[k], mag))
    }

    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.frequencies, self.magnitudes)
    }
}

/// Number of bins with frequency >= 0 for an N-point transform
///
/// floor(N/2) + 1 for even N (the Nyquist bin counts as +fs/2) and
/// (N+1)/2 for odd N. Both reduce to N/2 + 1 in integer arithmetic.
pub fn retained_bin_count(n: usize) -> usize {
    if n == 0 {
        0
    } else {
        n / 2 + 1
    }
}

/// Frequencies of the retained bins for an N-point transform, in Hz
pub fn frequency_bins(n: usize, sample_rate: f64) -> Vec<f64> {
    (0..retained_bin_count(n))
        .map(|k| k as f64 * sample_rate / n as f64)
        .collect()
}

/// FFT engine for one transform size
///
/// Holds the plan and a scratch buffer so repeated transforms of the same
/// size within one call (STFT frames) do not re-plan or re-allocate.
pub struct FftEngine {
    /// FFT size (number of samples)
    fft_size: usize,

    plan: FftPlan,

    /// Reusable complex buffer
    buffer: Vec<Complex64>,
}

impl FftEngine {
    /// Create new FFT engine
    ///
    /// # Arguments
    /// * `fft_size` - FFT size (number of samples), any length
    pub fn new(fft_size: usize) -> Result<Self> {
        let plan = FftPlan::new(fft_size)?;

        Ok(Self {
            fft_size,
            plan,
            buffer: vec![Complex64::new(0.0, 0.0); fft_size],
        })
    }

    /// Compute the retained half of the complex spectrum
    ///
    /// # Arguments
    /// * `signal` - Input signal (zero-padded if shorter than fft_size,
    ///   truncated if longer)
    ///
    /// # Returns
    /// X[k] for k = 0..retained_bin_count(fft_size)
    pub fn compute_spectrum(&mut self, signal: &[f64]) -> Vec<Complex64> {
        let copy_len = signal.len().min(self.fft_size);
        for (dst, &src) in self.buffer.iter_mut().zip(&signal[..copy_len]) {
            *dst = Complex64::new(src, 0.0);
        }
        self.buffer[copy_len..].fill(Complex64::new(0.0, 0.0));

        self.plan.forward(&mut self.buffer);

        self.buffer[..self.num_bins()].to_vec()
    }

    /// Compute FFT and return magnitude spectrum
    ///
    /// # Returns
    /// |X[k]| = sqrt(Re² + Im²) for the non-negative frequency bins
    pub fn compute_magnitude(&mut self, signal: &[f64]) -> Vec<f64> {
        self.compute_spectrum(signal)
            .iter()
            .map(|c| c.norm())
            .collect()
    }

    /// Get FFT size
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Algorithm selected for this size
    pub fn algorithm(&self) -> &'static str {
        self.plan.algorithm()
    }

    /// Get number of retained frequency bins
    pub fn num_bins(&self) -> usize {
        retained_bin_count(self.fft_size)
    }

    /// Frequency axis in Hz for the retained bins
    pub fn frequency_axis(&self, sample_rate: f64) -> Vec<f64> {
        frequency_bins(self.fft_size, sample_rate)
    }
}

/// Magnitude spectrum of a whole signal
///
/// The transform length equals the signal length. No window and no
/// normalisation are applied; rounding noise near zero is returned as is.
///
/// # Errors
/// `InvalidInput` if the buffer carries no sample rate, `Computation` if the
/// signal is too long or the transform overflows
pub fn transform(signal: &SampleBuffer) -> Result<SpectrumResult> {
    let sample_rate = signal.sample_rate().ok_or_else(|| {
        TransformError::InvalidInput("a sample rate is required for a frequency axis".to_string())
    })?;

    let mut engine = FftEngine::new(signal.len())?;
    log::debug!(
        "FFT: {} samples at {} Hz ({})",
        signal.len(),
        sample_rate,
        engine.algorithm()
    );

    let magnitudes = engine.compute_magnitude(signal.samples());
    check_finite_output(&magnitudes, "FFT")?;

    Ok(SpectrumResult {
        frequencies: engine.frequency_axis(sample_rate as f64),
        magnitudes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_bin_count_rule() {
        assert_eq!(retained_bin_count(0), 0);
        assert_eq!(retained_bin_count(1), 1);
        assert_eq!(retained_bin_count(2), 2);
        assert_eq!(retained_bin_count(4), 3);
        assert_eq!(retained_bin_count(5), 3);
        assert_eq!(retained_bin_count(1024), 513);
        assert_eq!(retained_bin_count(1023), 512);
    }

    #[test]
    fn test_constant_signal() {
        let signal = SampleBuffer::with_sample_rate(&[1.0, 1.0, 1.0, 1.0], 4).unwrap();
        let result = transform(&signal).unwrap();

        assert_eq!(result.frequencies(), &[0.0, 1.0, 2.0]);
        assert!((result.magnitudes()[0] - 4.0).abs() < 1e-12);
        assert!(result.magnitudes()[1].abs() < 1e-12);
        assert!(result.magnitudes()[2].abs() < 1e-12);
    }

    #[test]
    fn test_single_sample() {
        let signal = SampleBuffer::with_sample_rate(&[-2.5], 8000).unwrap();
        let result = transform(&signal).unwrap();

        assert_eq!(result.frequencies(), &[0.0]);
        assert_eq!(result.magnitudes(), &[2.5]);
    }

    #[test]
    fn test_odd_length_axis() {
        let signal = SampleBuffer::with_sample_rate(&[0.0, 1.0, 0.0, -1.0, 0.0], 10).unwrap();
        let result = transform(&signal).unwrap();

        // Bins 0, 2 Hz, 4 Hz; 6 Hz and 8 Hz are the negative half
        assert_eq!(result.frequencies(), &[0.0, 2.0, 4.0]);
        assert_eq!(result.magnitudes().len(), 3);
    }

    #[test]
    fn test_sine_peak() {
        let sample_rate = 1000;
        let freq_hz = 125.0;
        let samples: Vec<f64> = (0..1000)
            .map(|n| (2.0 * PI * freq_hz * n as f64 / sample_rate as f64).sin())
            .collect();

        let signal = SampleBuffer::with_sample_rate(&samples, sample_rate).unwrap();
        let result = transform(&signal).unwrap();

        let (peak_freq, peak_mag) = result.peak().unwrap();
        assert!((peak_freq - freq_hz).abs() < 1e-9);
        // Bin-centred sine: |X| = N/2
        assert!((peak_mag - 500.0).abs() < 1e-6);
    }

    #[test]
    fn test_engine_zero_pads() {
        let mut fft = FftEngine::new(1024).unwrap();

        let spectrum = fft.compute_magnitude(&vec![1.0; 100]);

        assert_eq!(spectrum.len(), 513);
        assert!((spectrum[0] - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_requires_sample_rate() {
        let signal = SampleBuffer::new(&[1.0, 2.0]).unwrap();
        assert!(transform(&signal).is_err());
    }

    #[test]
    fn test_overflow_is_computation_error() {
        let signal = SampleBuffer::with_sample_rate(&[f64::MAX, f64::MAX], 2).unwrap();
        let err = transform(&signal).unwrap_err();
        assert_eq!(err.kind(), "ComputationError");
    }
}
