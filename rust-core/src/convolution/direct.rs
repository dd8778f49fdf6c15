//! Direct time-domain convolution
//!
//! y[n] = Σ a[k] * b[n-k], evaluated term by term. O(len(a) * len(b)),
//! exact for the degenerate single-sample cases.

/// Full linear convolution by direct summation
///
/// # Arguments
/// * `a` - First operand
/// * `b` - Second operand
///
/// # Returns
/// `len(a) + len(b) - 1` samples, or an empty vector if either operand is
/// empty
pub fn convolve_direct(a: &[f64], b: &[f64]) -> Vec<f64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    // Slide the shorter operand over the longer one
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let mut output = vec![0.0; long.len() + short.len() - 1];
    for (k, &h) in short.iter().enumerate() {
        for (n, &x) in long.iter().enumerate() {
            output[n + k] += h * x;
        }
    }

    output
}
