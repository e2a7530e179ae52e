//! Twelve-stage peaking cascade for one channel
//!
//! Stages run in band-table order, low to high. The order is fixed at
//! construction and never changes, so a given input and gain set always
//! produces the same output bits.

use crate::coefficients::{compute_peak_coefficients, db_to_gain, BiquadCoefficients};
use crate::stage::FilterStage;
use smileyq_core::{ChainSettings, BANDS, BAND_COUNT};

/// Ordered cascade of one stage per band
#[derive(Debug, Clone)]
pub struct FilterChain {
    stages: [FilterStage; BAND_COUNT],
}

impl FilterChain {
    /// Create a pass-through chain with cleared history
    pub fn new() -> Self {
        Self {
            stages: [FilterStage::new(); BAND_COUNT],
        }
    }

    /// Replace one stage's coefficients, keeping its history
    ///
    /// Out-of-range indices are ignored.
    #[inline]
    pub fn set_stage_coefficients(&mut self, band_index: usize, coeffs: BiquadCoefficients) {
        if let Some(stage) = self.stages.get_mut(band_index) {
            stage.set_coefficients(coeffs);
        }
    }

    /// Design and load all twelve stages from a gain snapshot
    pub fn update_from_settings(&mut self, settings: &ChainSettings, sample_rate: f64) {
        let coeffs = design_chain(settings, sample_rate);
        self.set_all_coefficients(&coeffs);
    }

    /// Load a full set of coefficients, one per band
    #[inline]
    pub fn set_all_coefficients(&mut self, coeffs: &[BiquadCoefficients; BAND_COUNT]) {
        for (stage, &c) in self.stages.iter_mut().zip(coeffs.iter()) {
            stage.set_coefficients(c);
        }
    }

    /// Filter a block in place
    ///
    /// Every sample passes through all stages in band order before the next
    /// sample is read.
    pub fn process_block(&mut self, samples: &mut [f32]) {
        for sample in samples.iter_mut() {
            *sample = self.process_sample(*sample);
        }
    }

    /// Filter a single sample through the whole cascade
    #[inline]
    pub fn process_sample(&mut self, input: f32) -> f32 {
        let mut value = f64::from(input);
        for stage in &mut self.stages {
            value = stage.process_sample(value);
        }
        value as f32
    }

    /// Clear every stage's delay history
    pub fn reset(&mut self) {
        for stage in &mut self.stages {
            stage.reset();
        }
    }

    /// True if no stage holds any history
    pub fn is_at_rest(&self) -> bool {
        self.stages.iter().all(FilterStage::is_at_rest)
    }

    /// Stage for a band
    pub fn stage(&self, band_index: usize) -> Option<&FilterStage> {
        self.stages.get(band_index)
    }

    /// All stages, low to high
    pub fn stages(&self) -> &[FilterStage; BAND_COUNT] {
        &self.stages
    }

    /// Combined magnitude response of the cascade at `frequency` Hz, in dB
    pub fn magnitude_db(&self, frequency: f64, sample_rate: f64) -> f64 {
        self.stages
            .iter()
            .map(|s| s.coefficients().magnitude_db(frequency, sample_rate))
            .sum()
    }
}

impl Default for FilterChain {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute coefficients for every band from a gain snapshot
///
/// Pure and allocation-free; safe to call once per block on the audio thread.
pub fn design_chain(settings: &ChainSettings, sample_rate: f64) -> [BiquadCoefficients; BAND_COUNT] {
    std::array::from_fn(|i| {
        let band = &BANDS[i];
        compute_peak_coefficients(
            sample_rate,
            band.center_hz,
            band.q,
            db_to_gain(settings.band_gains_db[i]),
        )
    })
}
