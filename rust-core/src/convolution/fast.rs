//! FFT-based convolution for long operands
//!
//! Both operands are zero-padded to a common power of two at least
//! len(a) + len(b) - 1 long, so the circular product equals the linear one.
//! Complexity: O(N log N) vs O(N*M) for direct evaluation.

use num_complex::Complex64;

use crate::error::Result;
use crate::spectrum::dft::FftPlan;

/// Full linear convolution through the frequency domain
///
/// # Returns
/// `len(a) + len(b) - 1` samples, or an empty vector if either operand is
/// empty
///
/// # Errors
/// `Computation` if the padded transform length exceeds the engine limit
pub fn convolve_fft(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    if a.is_empty() || b.is_empty() {
        return Ok(Vec::new());
    }

    let output_len = a.len() + b.len() - 1;
    let fft_size = output_len.next_power_of_two();
    let plan = FftPlan::new(fft_size)?;

    // 1. Zero-pad both operands
    let mut a_fft = padded(a, fft_size);
    let mut b_fft = padded(b, fft_size);

    // 2. Forward transforms
    plan.forward(&mut a_fft);
    plan.forward(&mut b_fft);

    // 3. Multiply in frequency domain (convolution in time domain)
    for (x, &h) in a_fft.iter_mut().zip(b_fft.iter()) {
        *x *= h;
    }

    // 4. Inverse transform (scaled by 1/N)
    plan.inverse(&mut a_fft);

    Ok(a_fft[..output_len].iter().map(|c| c.re).collect())
}

fn padded(signal: &[f64], len: usize) -> Vec<Complex64> {
    let mut buffer = vec![Complex64::new(0.0, 0.0); len];
    for (dst, &src) in buffer.iter_mut().zip(signal.iter()) {
        *dst = Complex64::new(src, 0.0);
    }
    buffer
}
