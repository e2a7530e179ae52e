//! Peaking filter design
//!
//! RBJ cookbook peaking EQ via the bilinear transform. Coefficients are
//! normalized by `a0`, so the stored denominator has an implicit leading 1.

use std::f64::consts::PI;

/// Convert a gain in dB to a linear amplitude ratio
#[inline]
pub fn db_to_gain(gain_db: f32) -> f64 {
    10.0_f64.powf(f64::from(gain_db) / 20.0)
}

/// Normalized second-order section
///
/// `H(z) = (b0 + b1·z⁻¹ + b2·z⁻²) / (1 + a1·z⁻¹ + a2·z⁻²)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiquadCoefficients {
    /// Feed-forward coefficient for x[n]
    pub b0: f64,
    /// Feed-forward coefficient for x[n-1]
    pub b1: f64,
    /// Feed-forward coefficient for x[n-2]
    pub b2: f64,
    /// Feedback coefficient for y[n-1]
    pub a1: f64,
    /// Feedback coefficient for y[n-2]
    pub a2: f64,
}

impl BiquadCoefficients {
    /// Pass-through section
    pub const IDENTITY: Self = Self {
        b0: 1.0,
        b1: 0.0,
        b2: 0.0,
        a1: 0.0,
        a2: 0.0,
    };

    /// Pass-through section
    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Both poles strictly inside the unit circle
    ///
    /// Jury criterion for `z² + a1·z + a2`.
    pub fn is_stable(&self) -> bool {
        self.a2.abs() < 1.0 && self.a1.abs() < 1.0 + self.a2
    }

    /// Magnitude response at `frequency` Hz, in dB
    pub fn magnitude_db(&self, frequency: f64, sample_rate: f64) -> f64 {
        let omega = 2.0 * PI * frequency / sample_rate;
        let (sin1, cos1) = omega.sin_cos();
        let (sin2, cos2) = (2.0 * omega).sin_cos();

        let num_re = self.b0 + self.b1 * cos1 + self.b2 * cos2;
        let num_im = -(self.b1 * sin1 + self.b2 * sin2);
        let den_re = 1.0 + self.a1 * cos1 + self.a2 * cos2;
        let den_im = -(self.a1 * sin1 + self.a2 * sin2);

        let num = num_re * num_re + num_im * num_im;
        let den = den_re * den_re + den_im * den_im;

        10.0 * (num / den).log10()
    }
}

impl Default for BiquadCoefficients {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Design one peaking band
///
/// `linear_gain` is an amplitude ratio (`10^(dB/20)`). The caller keeps
/// `center_hz` below Nyquist; this function does not check it.
pub fn compute_peak_coefficients(
    sample_rate: f64,
    center_hz: f64,
    q: f64,
    linear_gain: f64,
) -> BiquadCoefficients {
    let a = linear_gain.sqrt();
    let omega = 2.0 * PI * center_hz / sample_rate;
    let (sin_omega, cos_omega) = omega.sin_cos();
    let alpha = sin_omega / (2.0 * q);

    let b0 = 1.0 + alpha * a;
    let b1 = -2.0 * cos_omega;
    let b2 = 1.0 - alpha * a;
    let a0 = 1.0 + alpha / a;
    let a1 = -2.0 * cos_omega;
    let a2 = 1.0 - alpha / a;

    BiquadCoefficients {
        b0: b0 / a0,
        b1: b1 / a0,
        b2: b2 / a0,
        a1: a1 / a0,
        a2: a2 / a0,
    }
}
