//! Complex discrete Fourier transform kernels
//!
//! Computes X[k] = sum_n x[n] * exp(-2*pi*i*k*n/N) for any N:
//! - N <= 1: identity
//! - N a power of two: iterative radix-2 Cooley-Tukey
//! - other N <= `DIRECT_DFT_MAX_LEN`: direct O(N^2) evaluation
//! - other N: Bluestein chirp-z, reducing to a power-of-two convolution
//!
//! A plan is built once per length and may be applied to many buffers.

use num_complex::Complex64;
use std::f64::consts::PI;

use crate::error::{check_transform_len, Result, TransformError};

/// Largest non-power-of-two length evaluated directly
pub const DIRECT_DFT_MAX_LEN: usize = 64;

/// Transform plan for a fixed length
#[derive(Debug, Clone)]
pub struct FftPlan {
    len: usize,
    kind: PlanKind,
}

#[derive(Debug, Clone)]
enum PlanKind {
    Identity,

    /// Twiddles exp(-2*pi*i*j/N) for j = 0..N
    Direct { twiddles: Vec<Complex64> },

    /// Twiddles exp(-2*pi*i*j/N) for j = 0..N/2
    Radix2 { twiddles: Vec<Complex64> },

    Bluestein {
        /// exp(-i*pi*k^2/N) for k = 0..N
        chirp: Vec<Complex64>,
        /// Forward transform of the conjugate chirp, wrapped to the inner length
        kernel: Vec<Complex64>,
        /// Power-of-two plan of length >= 2N - 1
        inner: Box<FftPlan>,
    },
}

impl FftPlan {
    /// Plan a transform of `len` points
    ///
    /// # Errors
    /// `Computation` if `len` (or the Bluestein padding for it) is beyond
    /// what the engine allocates for
    pub fn new(len: usize) -> Result<Self> {
        check_transform_len(len)?;

        let kind = if len <= 1 {
            PlanKind::Identity
        } else if len.is_power_of_two() {
            PlanKind::Radix2 {
                twiddles: twiddles(len, len / 2),
            }
        } else if len <= DIRECT_DFT_MAX_LEN {
            PlanKind::Direct {
                twiddles: twiddles(len, len),
            }
        } else {
            Self::bluestein(len)?
        };

        log::trace!("Planned {}-point transform ({})", len, kind.name());

        Ok(Self { len, kind })
    }

    fn bluestein(len: usize) -> Result<PlanKind> {
        let inner_len = (2 * len - 1)
            .checked_next_power_of_two()
            .ok_or_else(|| {
                TransformError::Computation(format!(
                    "padded length for a {}-point transform overflows",
                    len
                ))
            })?;
        let inner = FftPlan::new(inner_len)?;

        // k^2 is reduced mod 2N before scaling so the phase stays accurate for large k
        let modulus = 2 * len as u128;
        let chirp: Vec<Complex64> = (0..len)
            .map(|k| {
                let k = k as u128;
                let phase = ((k * k) % modulus) as f64 * PI / len as f64;
                Complex64::from_polar(1.0, -phase)
            })
            .collect();

        let mut kernel = vec![Complex64::new(0.0, 0.0); inner_len];
        kernel[0] = chirp[0].conj();
        for k in 1..len {
            kernel[k] = chirp[k].conj();
            kernel[inner_len - k] = chirp[k].conj();
        }
        inner.forward(&mut kernel);

        Ok(PlanKind::Bluestein {
            chirp,
            kernel,
            inner: Box::new(inner),
        })
    }

    /// Transform length
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Name of the algorithm chosen for this length
    pub fn algorithm(&self) -> &'static str {
        self.kind.name()
    }

    /// Forward transform in place (unnormalized)
    ///
    /// # Panics
    /// If `buffer.len()` differs from the planned length
    pub(crate) fn forward(&self, buffer: &mut [Complex64]) {
        assert_eq!(buffer.len(), self.len, "buffer length does not match plan");

        match &self.kind {
            PlanKind::Identity => {}
            PlanKind::Direct { twiddles } => direct_dft(buffer, twiddles),
            PlanKind::Radix2 { twiddles } => radix2(buffer, twiddles),
            PlanKind::Bluestein { chirp, kernel, inner } => {
                let mut work = vec![Complex64::new(0.0, 0.0); inner.len()];
                for ((w, &x), &c) in work.iter_mut().zip(buffer.iter()).zip(chirp.iter()) {
                    *w = x * c;
                }

                inner.forward(&mut work);
                for (w, &h) in work.iter_mut().zip(kernel.iter()) {
                    *w *= h;
                }
                inner.inverse(&mut work);

                for ((x, &w), &c) in buffer.iter_mut().zip(work.iter()).zip(chirp.iter()) {
                    *x = w * c;
                }
            }
        }
    }

    /// Inverse transform in place, scaled by 1/N
    pub(crate) fn inverse(&self, buffer: &mut [Complex64]) {
        // IDFT(x) = conj(DFT(conj(x))) / N
        for c in buffer.iter_mut() {
            *c = c.conj();
        }
        self.forward(buffer);

        let scale = 1.0 / self.len.max(1) as f64;
        for c in buffer.iter_mut() {
            *c = c.conj() * scale;
        }
    }
}

impl PlanKind {
    fn name(&self) -> &'static str {
        match self {
            PlanKind::Identity => "identity",
            PlanKind::Direct { .. } => "direct",
            PlanKind::Radix2 { .. } => "radix-2",
            PlanKind::Bluestein { .. } => "bluestein",
        }
    }
}

/// exp(-2*pi*i*j/n) for j = 0..count
fn twiddles(n: usize, count: usize) -> Vec<Complex64> {
    (0..count)
        .map(|j| Complex64::from_polar(1.0, -2.0 * PI * j as f64 / n as f64))
        .collect()
}

fn direct_dft(buffer: &mut [Complex64], twiddles: &[Complex64]) {
    let n = buffer.len();
    let input = buffer.to_vec();

    for (k, out) in buffer.iter_mut().enumerate() {
        let mut sum = Complex64::new(0.0, 0.0);
        for (j, &x) in input.iter().enumerate() {
            sum += x * twiddles[(k * j) % n];
        }
        *out = sum;
    }
}

fn radix2(buffer: &mut [Complex64], twiddles: &[Complex64]) {
    let n = buffer.len();
    let bits = n.trailing_zeros();

    // Bit-reversal permutation
    for i in 0..n {
        let j = i.reverse_bits() >> (usize::BITS - bits);
        if j > i {
            buffer.swap(i, j);
        }
    }

    // Butterflies, doubling the sub-transform size each pass
    let mut size = 2;
    while size <= n {
        let half = size / 2;
        let stride = n / size;

        for start in (0..n).step_by(size) {
            for k in 0..half {
                let t = buffer[start + k + half] * twiddles[k * stride];
                let u = buffer[start + k];
                buffer[start + k] = u + t;
                buffer[start + k + half] = u - t;
            }
        }

        size *= 2;
    }
}
