//! Single biquad stage, direct form II
//!
//! Each stage keeps two delay values of the intermediate signal `w`:
//!
//! ```text
//! w[n] = x[n] - a1·w[n-1] - a2·w[n-2]
//! y[n] = b0·w[n] + b1·w[n-1] + b2·w[n-2]
//! ```
//!
//! State is `f64`. For the lowest bands `w` runs roughly 1/|A(z)| ≈ 10⁵ times
//! hotter than the signal, and single precision would leak audible error
//! into a flat cascade.

use crate::coefficients::BiquadCoefficients;

/// Delay values below this are flushed to zero
const DENORMAL_FLUSH: f64 = 1e-30;

/// One second-order section with its own delay history
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterStage {
    coeffs: BiquadCoefficients,
    w1: f64,
    w2: f64,
}

impl FilterStage {
    /// Create a pass-through stage with cleared history
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stage with the given coefficients and cleared history
    pub fn with_coefficients(coeffs: BiquadCoefficients) -> Self {
        Self {
            coeffs,
            w1: 0.0,
            w2: 0.0,
        }
    }

    /// Replace the coefficients
    ///
    /// History is kept; the new response applies from the next sample with
    /// no interpolation.
    #[inline]
    pub fn set_coefficients(&mut self, coeffs: BiquadCoefficients) {
        self.coeffs = coeffs;
    }

    /// Current coefficients
    pub fn coefficients(&self) -> &BiquadCoefficients {
        &self.coeffs
    }

    /// Delay history `(w[n-1], w[n-2])`
    pub fn state(&self) -> (f64, f64) {
        (self.w1, self.w2)
    }

    /// True if both delay values are zero
    pub fn is_at_rest(&self) -> bool {
        self.w1 == 0.0 && self.w2 == 0.0
    }

    /// Clear delay history (coefficients are kept)
    pub fn reset(&mut self) {
        self.w1 = 0.0;
        self.w2 = 0.0;
    }

    /// Filter one sample
    #[inline]
    pub fn process_sample(&mut self, input: f64) -> f64 {
        let c = &self.coeffs;

        let mut w = input - c.a1 * self.w1 - c.a2 * self.w2;
        if w.abs() < DENORMAL_FLUSH {
            w = 0.0;
        }

        let output = c.b0 * w + c.b1 * self.w1 + c.b2 * self.w2;

        self.w2 = self.w1;
        self.w1 = w;

        output
    }
}
