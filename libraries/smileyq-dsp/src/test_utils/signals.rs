//! Test signal generation
//!
//! All generators return mono (single channel) buffers; the processor takes
//! planar channels.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

/// Generate a sine wave
///
/// # Arguments
/// * `frequency` - Frequency in Hz
/// * `sample_rate` - Sample rate in Hz
/// * `num_samples` - Length of the buffer
/// * `amplitude` - Peak amplitude (0.0 to 1.0)
pub fn generate_sine(frequency: f64, sample_rate: f64, num_samples: usize, amplitude: f32) -> Vec<f32> {
    (0..num_samples)
        .map(|n| {
            let t = n as f64 / sample_rate;
            ((2.0 * PI * frequency * t).sin() as f32) * amplitude
        })
        .collect()
}

/// Generate a logarithmic sine sweep (chirp)
///
/// Phase is integrated analytically so the sweep stays continuous.
pub fn generate_sine_sweep(
    start_freq: f64,
    end_freq: f64,
    sample_rate: f64,
    num_samples: usize,
    amplitude: f32,
) -> Vec<f32> {
    let duration = num_samples as f64 / sample_rate;
    let k = (end_freq / start_freq).ln();

    (0..num_samples)
        .map(|n| {
            let t = n as f64 / sample_rate;
            let phase = 2.0 * PI * start_freq * duration / k * ((t / duration * k).exp() - 1.0);
            (phase.sin() as f32) * amplitude
        })
        .collect()
}

/// Generate uniform white noise from a fixed seed
pub fn generate_white_noise(num_samples: usize, amplitude: f32, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..num_samples)
        .map(|_| rng.gen_range(-1.0f32..1.0) * amplitude)
        .collect()
}

/// Generate a unit impulse at `position`
pub fn generate_impulse(num_samples: usize, position: usize, amplitude: f32) -> Vec<f32> {
    let mut samples = vec![0.0; num_samples];
    if let Some(sample) = samples.get_mut(position) {
        *sample = amplitude;
    }
    samples
}
