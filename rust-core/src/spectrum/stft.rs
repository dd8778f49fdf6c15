//! Short-time Fourier transform
//!
//! Slices a signal into overlapping frames, tapers each frame with a window
//! and runs the FFT engine per frame. Frame magnitudes become the columns of
//! a `[frequency_bin, time_segment]` matrix.

use ndarray::{Array1, Array2};

use super::fft::FftEngine;
use super::windows::{apply_window_inplace, generate_window};
use crate::config::{StftConfig, TailPolicy};
use crate::error::{check_finite_output, check_transform_len, Result, TransformError};
use crate::signal::SampleBuffer;

/// Time-frequency magnitude matrix
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrogramResult {
    frequencies: Vec<f64>,
    time_segments: Vec<f64>,

    /// Shape (frequencies.len(), time_segments.len())
    magnitudes: Array2<f64>,
}

impl SpectrogramResult {
    /// Bin centre frequencies in Hz, shared by every frame
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// Frame centre times in seconds
    pub fn time_segments(&self) -> &[f64] {
        &self.time_segments
    }

    /// Magnitudes indexed `[frequency_bin, time_segment]`
    pub fn magnitudes(&self) -> &Array2<f64> {
        &self.magnitudes
    }

    pub fn num_frames(&self) -> usize {
        self.time_segments.len()
    }

    pub fn num_bins(&self) -> usize {
        self.frequencies.len()
    }

    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>, Array2<f64>) {
        (self.frequencies, self.time_segments, self.magnitudes)
    }
}

/// Number of frames produced for a signal of `len` samples
///
/// Zero-padding: 1 if len <= frame_size, else ceil((len - F) / H) + 1.
/// Dropping: floor((len - F) / H) + 1, and 0 if len < frame_size.
pub fn frame_count(len: usize, frame_size: usize, hop_size: usize, tail: TailPolicy) -> usize {
    match tail {
        TailPolicy::ZeroPad if len <= frame_size => 1,
        TailPolicy::ZeroPad => (len - frame_size).div_ceil(hop_size) + 1,
        TailPolicy::Drop if len < frame_size => 0,
        TailPolicy::Drop => (len - frame_size) / hop_size + 1,
    }
}

/// STFT engine for one frame geometry
pub struct StftEngine {
    config: StftConfig,
    window: Vec<f64>,
    fft_engine: FftEngine,

    /// Scale applied to every magnitude (1.0 or 1 / window sum)
    scale: f64,
}

impl StftEngine {
    /// Create an engine for the given configuration
    ///
    /// # Errors
    /// `InvalidInput` for an invalid frame geometry, or when amplitude
    /// correction is requested for a window whose coefficients sum to zero
    pub fn new(config: StftConfig) -> Result<Self> {
        config.validate()?;

        let window = generate_window(config.window, config.frame_size);
        let fft_engine = FftEngine::new(config.frame_size)?;
        let scale = if config.apply_correction {
            let sum: f64 = window.iter().sum();
            if sum.abs() <= f64::EPSILON {
                return Err(TransformError::InvalidInput(format!(
                    "{} window of {} samples sums to zero and cannot be corrected",
                    config.window.name(),
                    config.frame_size
                )));
            }
            1.0 / sum
        } else {
            1.0
        };

        Ok(Self {
            config,
            window,
            fft_engine,
            scale,
        })
    }

    pub fn config(&self) -> &StftConfig {
        &self.config
    }

    /// Compute the spectrogram of a signal
    ///
    /// # Errors
    /// `InvalidInput` without a sample rate, or when the tail policy is
    /// `Drop` and the signal is shorter than one frame
    pub fn spectrogram(&mut self, signal: &SampleBuffer) -> Result<SpectrogramResult> {
        let sample_rate = signal.sample_rate().ok_or_else(|| {
            TransformError::InvalidInput("a sample rate is required for a spectrogram".to_string())
        })? as f64;

        let frame_size = self.config.frame_size;
        let hop_size = self.config.hop_size();
        let samples = signal.samples();

        let num_frames = frame_count(samples.len(), frame_size, hop_size, self.config.tail);
        if num_frames == 0 {
            return Err(TransformError::InvalidInput(format!(
                "signal of {} samples is shorter than one frame ({})",
                samples.len(),
                frame_size
            )));
        }

        let num_bins = self.fft_engine.num_bins();
        check_transform_len(num_bins.saturating_mul(num_frames))?;

        log::debug!(
            "STFT: {} samples, frame {}, hop {}, {} frames x {} bins",
            samples.len(),
            frame_size,
            hop_size,
            num_frames,
            num_bins
        );

        let mut magnitudes = Array2::<f64>::zeros((num_bins, num_frames));
        let mut frame = vec![0.0; frame_size];
        let mut time_segments = Vec::with_capacity(num_frames);

        for i in 0..num_frames {
            let start = i * hop_size;
            let end = (start + frame_size).min(samples.len());
            let available = end.saturating_sub(start);

            frame[..available].copy_from_slice(&samples[start..start + available]);
            frame[available..].fill(0.0);
            apply_window_inplace(&mut frame, &self.window);

            let mut column = Array1::from(self.fft_engine.compute_magnitude(&frame));
            if self.scale != 1.0 {
                column *= self.scale;
            }
            magnitudes.column_mut(i).assign(&column);

            time_segments.push((start as f64 + frame_size as f64 / 2.0) / sample_rate);
        }

        if let Some(slice) = magnitudes.as_slice() {
            check_finite_output(slice, "STFT")?;
        }

        Ok(SpectrogramResult {
            frequencies: self.fft_engine.frequency_axis(sample_rate),
            time_segments,
            magnitudes,
        })
    }
}

/// Spectrogram of a signal with the given configuration
pub fn spectrogram(signal: &SampleBuffer, config: &StftConfig) -> Result<SpectrogramResult> {
    StftEngine::new(config.clone())?.spectrogram(signal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectrum::windows::WindowType;
    use std::f64::consts::PI;

    fn sine(freq_hz: f64, sample_rate: i32, len: usize) -> SampleBuffer {
        let samples: Vec<f64> = (0..len)
            .map(|n| (2.0 * PI * freq_hz * n as f64 / sample_rate as f64).sin())
            .collect();
        SampleBuffer::with_sample_rate(&samples, sample_rate).unwrap()
    }

    #[test]
    fn test_frame_count() {
        assert_eq!(frame_count(1000, 256, 128, TailPolicy::ZeroPad), 7);
        assert_eq!(frame_count(1000, 256, 128, TailPolicy::Drop), 6);
        assert_eq!(frame_count(256, 256, 128, TailPolicy::ZeroPad), 1);
        assert_eq!(frame_count(256, 256, 128, TailPolicy::Drop), 1);
        assert_eq!(frame_count(100, 256, 128, TailPolicy::ZeroPad), 1);
        assert_eq!(frame_count(100, 256, 128, TailPolicy::Drop), 0);
        assert_eq!(frame_count(384, 256, 128, TailPolicy::ZeroPad), 2);
        assert_eq!(frame_count(385, 256, 128, TailPolicy::ZeroPad), 3);
    }

    #[test]
    fn test_spectrogram_shape() {
        let signal = sine(1000.0, 8000, 1000);
        let result = spectrogram(&signal, &StftConfig::default()).unwrap();

        assert_eq!(result.num_bins(), 129);
        assert_eq!(result.num_frames(), 7);
        assert_eq!(result.magnitudes().dim(), (129, 7));

        // Frequency axis: k * 8000 / 256
        assert_eq!(result.frequencies()[0], 0.0);
        assert!((result.frequencies()[1] - 31.25).abs() < 1e-12);
        assert!((result.frequencies()[128] - 4000.0).abs() < 1e-12);
    }

    #[test]
    fn test_frame_times() {
        let signal = sine(1000.0, 8000, 1000);
        let result = spectrogram(&signal, &StftConfig::default()).unwrap();

        for (i, &t) in result.time_segments().iter().enumerate() {
            let expected = (i as f64 * 128.0 + 128.0) / 8000.0;
            assert!((t - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_sine_peak_per_frame() {
        // 1 kHz at 8 kHz with 256-point frames lands exactly on bin 32
        let signal = sine(1000.0, 8000, 2048);
        let result = spectrogram(&signal, &StftConfig::default()).unwrap();

        let full_frames = frame_count(2048, 256, 128, TailPolicy::Drop);
        for frame in 0..full_frames {
            let column = result.magnitudes().column(frame);
            let (peak_bin, _) = column
                .iter()
                .enumerate()
                .max_by(|(_, a), (_, b)| a.total_cmp(b))
                .unwrap();
            assert_eq!(peak_bin, 32);
        }
    }

    #[test]
    fn test_window_is_applied() {
        // A constant frame under a Hann window has DC magnitude sum(w), not N
        let signal = SampleBuffer::with_sample_rate(&vec![1.0; 64], 64).unwrap();
        let config = StftConfig::with_frame_size(64);
        let result = spectrogram(&signal, &config).unwrap();

        let window_sum: f64 = generate_window(WindowType::Hann, 64).iter().sum();
        assert_eq!(result.num_frames(), 1);
        assert!((result.magnitudes()[[0, 0]] - window_sum).abs() < 1e-9);
        assert!((result.magnitudes()[[0, 0]] - 64.0).abs() > 1.0);
    }

    #[test]
    fn test_correction_normalises_amplitude() {
        let signal = sine(1000.0, 8000, 256);
        let config = StftConfig {
            apply_correction: true,
            ..StftConfig::default()
        };
        let result = spectrogram(&signal, &config).unwrap();

        // Bin-centred unit sine: corrected peak is 1/2 (one-sided)
        assert!((result.magnitudes()[[32, 0]] - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_correction_rejects_zero_sum_window() {
        // Two-point Hann and Blackman windows are [0, 0]
        for window in [WindowType::Hann, WindowType::Blackman] {
            let config = StftConfig {
                overlap: Some(0),
                window,
                apply_correction: true,
                ..StftConfig::with_frame_size(2)
            };
            assert!(matches!(StftEngine::new(config), Err(TransformError::InvalidInput(_))));
        }

        // Uncorrected, the same geometry is fine
        let signal = SampleBuffer::with_sample_rate(&[1.0, 2.0, 3.0, 4.0], 4).unwrap();
        let config = StftConfig {
            overlap: Some(0),
            ..StftConfig::with_frame_size(2)
        };
        assert_eq!(spectrogram(&signal, &config).unwrap().num_frames(), 2);
    }

    #[test]
    fn test_short_signal_policies() {
        let signal = SampleBuffer::with_sample_rate(&[1.0, 2.0, 3.0], 100).unwrap();

        let padded = spectrogram(&signal, &StftConfig::default()).unwrap();
        assert_eq!(padded.num_frames(), 1);
        assert!((padded.time_segments()[0] - 1.28).abs() < 1e-12);

        let config = StftConfig {
            tail: TailPolicy::Drop,
            ..StftConfig::default()
        };
        assert!(matches!(
            spectrogram(&signal, &config),
            Err(TransformError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_zero_padded_tail_frame() {
        // Last frame starts at 128 and holds only 172 real samples
        let samples: Vec<f64> = (0..300).map(|n| (n % 7) as f64).collect();
        let signal = SampleBuffer::with_sample_rate(&samples, 1000).unwrap();
        let result = spectrogram(&signal, &StftConfig::default()).unwrap();

        assert_eq!(result.num_frames(), 2);

        let mut frame = vec![0.0; 256];
        frame[..172].copy_from_slice(&samples[128..]);
        let windowed: Vec<f64> = frame
            .iter()
            .zip(generate_window(WindowType::Hann, 256))
            .map(|(s, w)| s * w)
            .collect();
        let dc: f64 = windowed.iter().sum();

        assert!((result.magnitudes()[[0, 1]] - dc.abs()).abs() < 1e-9);
    }
}
