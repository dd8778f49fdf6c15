//! Python bindings for the transform engines

use numpy::{PyArray1, PyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::config::StftConfig;
use crate::error::TransformError;
use crate::signal::SampleBuffer;
use crate::spectrum::{spectrogram, transform, WindowType};
use crate::{api, convolution};

impl From<TransformError> for PyErr {
    fn from(err: TransformError) -> PyErr {
        PyValueError::new_err(format!("{}: {}", err.kind(), err))
    }
}

/// Magnitude spectrum of a signal
///
/// Args:
///     samples: Signal samples (sequence of floats)
///     sample_rate: Sample rate in Hz, positive
///
/// Returns:
///     dict with numpy arrays "freq" and "magnitude"
#[pyfunction]
pub fn compute_fft<'py>(
    py: Python<'py>,
    samples: Vec<f64>,
    sample_rate: i32,
) -> PyResult<&'py PyDict> {
    let signal = SampleBuffer::with_sample_rate(&samples, sample_rate)?;
    let (freq, magnitude) = transform(&signal)?.into_parts();

    let dict = PyDict::new(py);
    dict.set_item("freq", PyArray1::from_vec(py, freq))?;
    dict.set_item("magnitude", PyArray1::from_vec(py, magnitude))?;
    Ok(dict)
}

/// Full linear convolution of two signals
///
/// Args:
///     signal_a: First operand
///     signal_b: Second operand
///
/// Returns:
///     dict with numpy array "samples" of length len(a) + len(b) - 1
#[pyfunction]
pub fn compute_convolution<'py>(
    py: Python<'py>,
    signal_a: Vec<f64>,
    signal_b: Vec<f64>,
) -> PyResult<&'py PyDict> {
    let a = SampleBuffer::new(&signal_a)?;
    let b = SampleBuffer::new(&signal_b)?;
    let result = convolution::convolve_full(&a, &b)?;

    let dict = PyDict::new(py);
    dict.set_item("samples", PyArray1::from_vec(py, result.into_samples()))?;
    Ok(dict)
}

/// Spectrogram of a signal
///
/// Args:
///     samples: Signal samples
///     sample_rate: Sample rate in Hz, positive
///     frame_size: Frame length in samples (default: 256)
///     overlap: Samples shared by consecutive frames (default: frame_size // 2)
///     window: "hann", "hamming", "blackman" or "rectangular" (default: "hann")
///
/// Returns:
///     dict with "f", "t" and the 2-D magnitude array "Zxx" [frequency, time]
#[pyfunction]
#[pyo3(signature = (samples, sample_rate, frame_size=crate::config::DEFAULT_FRAME_SIZE, overlap=None, window="hann"))]
pub fn compute_stft<'py>(
    py: Python<'py>,
    samples: Vec<f64>,
    sample_rate: i32,
    frame_size: usize,
    overlap: Option<usize>,
    window: &str,
) -> PyResult<&'py PyDict> {
    let window = WindowType::from_name(window).ok_or_else(|| {
        TransformError::InvalidInput(format!("unknown window type '{}'", window))
    })?;
    let config = StftConfig {
        frame_size,
        overlap,
        window,
        ..StftConfig::default()
    };

    let signal = SampleBuffer::with_sample_rate(&samples, sample_rate)?;
    let (f, t, magnitudes) = spectrogram(&signal, &config)?.into_parts();

    let dict = PyDict::new(py);
    dict.set_item("f", PyArray1::from_vec(py, f))?;
    dict.set_item("t", PyArray1::from_vec(py, t))?;
    dict.set_item("Zxx", PyArray2::from_owned_array(py, magnitudes))?;
    Ok(dict)
}

/// Liveness probe
///
/// Returns:
///     dict with a static "message"
#[pyfunction]
pub fn health<'py>(py: Python<'py>) -> PyResult<&'py PyDict> {
    let dict = PyDict::new(py);
    dict.set_item("message", api::health().message)?;
    Ok(dict)
}
