//! PyO3 bindings for Python integration

use pyo3::prelude::*;

mod transform_bindings;

/// Python module definition
#[pymodule]
fn signal_transform(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(transform_bindings::compute_fft, m)?)?;
    m.add_function(wrap_pyfunction!(transform_bindings::compute_convolution, m)?)?;
    m.add_function(wrap_pyfunction!(transform_bindings::compute_stft, m)?)?;
    m.add_function(wrap_pyfunction!(transform_bindings::health, m)?)?;

    m.add("DEFAULT_FRAME_SIZE", crate::config::DEFAULT_FRAME_SIZE)?;

    Ok(())
}
