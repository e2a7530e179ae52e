//! Audio analysis tools for verification

/// Calculate RMS (Root Mean Square) level
pub fn calculate_rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }

    let sum_squares: f64 = samples.iter().map(|&s| f64::from(s) * f64::from(s)).sum();
    (sum_squares / samples.len() as f64).sqrt() as f32
}

/// Calculate peak level
pub fn calculate_peak(samples: &[f32]) -> f32 {
    samples.iter().map(|s| s.abs()).fold(0.0f32, f32::max)
}

/// Convert linear amplitude to dB
pub fn linear_to_db(linear: f32) -> f32 {
    if linear <= 0.0 {
        -100.0 // Silence
    } else {
        20.0 * linear.log10()
    }
}

/// Largest absolute sample difference between two buffers
pub fn max_abs_difference(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0f32, f32::max)
}

/// Gain in dB between two buffers, measured over the last `window` samples
///
/// Skipping the head lets filter transients settle before measuring.
pub fn steady_state_gain_db(input: &[f32], output: &[f32], window: usize) -> f32 {
    let len = input.len().min(output.len());
    let start = len.saturating_sub(window);
    let input_rms = calculate_rms(&input[start..len]);
    let output_rms = calculate_rms(&output[start..len]);
    linear_to_db(output_rms) - linear_to_db(input_rms)
}

/// True if every sample is finite
pub fn all_finite(samples: &[f32]) -> bool {
    samples.iter().all(|s| s.is_finite())
}
