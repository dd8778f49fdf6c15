//! Signal Transform - DSP Transform Engine
//!
//! Spectral decomposition (FFT), full linear convolution and short-time
//! spectral analysis (STFT) over validated real-valued signals. The numeric
//! kernels are self-contained; every call is a pure function of its inputs.
//!
//! ```
//! use signal_transform::api::{compute_convolution, compute_fft};
//!
//! let spectrum = compute_fft(&[1.0, 1.0, 1.0, 1.0], 4)?;
//! assert_eq!(spectrum.freq, vec![0.0, 1.0, 2.0]);
//!
//! let conv = compute_convolution(&[1.0, 2.0, 3.0], &[0.0, 1.0, 0.5])?;
//! assert_eq!(conv.samples, vec![0.0, 1.0, 2.5, 4.0, 1.5]);
//! # Ok::<(), signal_transform::TransformError>(())
//! ```

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod api;
pub mod cli;
pub mod config;
pub mod convolution;
pub mod error;
pub mod signal;
pub mod spectrum;

#[cfg(feature = "python")]
pub mod python_bindings;

pub use config::{ConvolutionConfig, EngineConfig, StftConfig, TailPolicy};
pub use convolution::{convolve_full, ConvolutionResult};
pub use error::{Result, TransformError};
pub use signal::SampleBuffer;
pub use spectrum::{spectrogram, transform, SpectrogramResult, SpectrumResult, WindowType};
