//! Spectral analysis: DFT kernels, real-signal FFT, windows and STFT

pub mod dft;
pub mod fft;
pub mod windows;
pub mod stft;

/// Plans are public for inspection (`len`, `algorithm`); applying one to a
/// buffer is crate-internal and goes through [`FftEngine`]
pub use dft::FftPlan;
pub use fft::{transform, FftEngine, SpectrumResult};
pub use windows::{generate_window, WindowType};
pub use stft::{spectrogram, SpectrogramResult, StftEngine};
