//! Parameter store and per-block snapshot
//!
//! Gains live in independent atomic cells, one per band, holding the bit
//! pattern of an `f32`. The control side writes them, the audio side reads
//! them once per block. There is no cross-band atomicity: a snapshot taken
//! while a writer is active may mix old and new values.

use crate::bands::{band_by_id, BANDS, BAND_COUNT};
use crate::error::{EqError, Result};
use crate::presets::EqPreset;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU32, Ordering};

/// Lowest band gain in dB
pub const GAIN_MIN_DB: f32 = -12.0;

/// Highest band gain in dB
pub const GAIN_MAX_DB: f32 = 12.0;

/// Gain parameter resolution in dB
pub const GAIN_STEP_DB: f32 = 0.5;

/// Gain every band starts at
pub const GAIN_DEFAULT_DB: f32 = 0.0;

/// Clamp to the parameter range and snap to the 0.5 dB grid
pub fn quantize_gain_db(gain_db: f32) -> f32 {
    let snapped = (gain_db.clamp(GAIN_MIN_DB, GAIN_MAX_DB) / GAIN_STEP_DB).round() * GAIN_STEP_DB;
    // -0.0 would persist as "-0.0"
    if snapped == 0.0 {
        0.0
    } else {
        snapped
    }
}

/// Host-facing description of one gain parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterInfo {
    /// Stable identifier (also the persisted-state key)
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Lower bound in dB
    pub min: f32,
    /// Upper bound in dB
    pub max: f32,
    /// Step in dB
    pub step: f32,
    /// Default value in dB
    pub default: f32,
}

/// Gains for one processing block
///
/// Taken fresh from [`EqParameters::snapshot`] at the top of every block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChainSettings {
    /// Per-band gain in dB, low to high
    pub band_gains_db: [f32; BAND_COUNT],
}

impl ChainSettings {
    /// All bands at 0 dB
    pub fn flat() -> Self {
        Self {
            band_gains_db: [GAIN_DEFAULT_DB; BAND_COUNT],
        }
    }

    /// Settings with explicit gains
    pub fn from_gains(band_gains_db: [f32; BAND_COUNT]) -> Self {
        Self { band_gains_db }
    }

    /// Flat except for one band
    pub fn single_band(index: usize, gain_db: f32) -> Self {
        let mut settings = Self::flat();
        if let Some(gain) = settings.band_gains_db.get_mut(index) {
            *gain = gain_db;
        }
        settings
    }

    /// Gain of one band in dB
    pub fn gain_db(&self, index: usize) -> Option<f32> {
        self.band_gains_db.get(index).copied()
    }

    /// True if every band sits at 0 dB
    pub fn is_flat(&self) -> bool {
        self.band_gains_db.iter().all(|&g| g == 0.0)
    }
}

impl Default for ChainSettings {
    fn default() -> Self {
        Self::flat()
    }
}

/// Shared gain parameters
///
/// `Send + Sync`; share it between the control side and the processor via
/// `Arc<EqParameters>`. Reads and writes are single relaxed atomic operations.
#[derive(Debug)]
pub struct EqParameters {
    gains: [AtomicU32; BAND_COUNT],
}

impl EqParameters {
    /// Create a store with every band at the default gain
    pub fn new() -> Self {
        Self {
            gains: std::array::from_fn(|_| AtomicU32::new(GAIN_DEFAULT_DB.to_bits())),
        }
    }

    /// Create a store with a preset applied
    pub fn with_preset(preset: EqPreset) -> Self {
        let params = Self::new();
        params.apply_preset(preset);
        params
    }

    /// Parameter metadata, in band order
    pub fn parameter_info() -> [ParameterInfo; BAND_COUNT] {
        std::array::from_fn(|i| ParameterInfo {
            id: BANDS[i].id,
            name: BANDS[i].id,
            min: GAIN_MIN_DB,
            max: GAIN_MAX_DB,
            step: GAIN_STEP_DB,
            default: GAIN_DEFAULT_DB,
        })
    }

    /// Set the gain of a band in dB (clamped and snapped)
    ///
    /// Out-of-range indices and non-finite values are ignored.
    pub fn set_gain_db(&self, index: usize, gain_db: f32) {
        let _ = self.try_set_gain_db(index, gain_db);
    }

    /// Set the gain of a band, returning the value actually stored
    pub fn try_set_gain_db(&self, index: usize, gain_db: f32) -> Result<f32> {
        let cell = self
            .gains
            .get(index)
            .ok_or(EqError::BandOutOfRange(index))?;

        if !gain_db.is_finite() {
            return Ok(f32::from_bits(cell.load(Ordering::Relaxed)));
        }

        let value = quantize_gain_db(gain_db);
        cell.store(value.to_bits(), Ordering::Relaxed);
        Ok(value)
    }

    /// Set a gain by parameter identifier
    pub fn set_gain_by_id(&self, id: &str, gain_db: f32) -> Result<f32> {
        let band = band_by_id(id).ok_or_else(|| EqError::state(format!("unknown parameter: {id}")))?;
        self.try_set_gain_db(band.index, gain_db)
    }

    /// Get the gain of a band in dB
    pub fn gain_db(&self, index: usize) -> Option<f32> {
        self.gains
            .get(index)
            .map(|cell| f32::from_bits(cell.load(Ordering::Relaxed)))
    }

    /// Set all band gains at once
    ///
    /// Each band is stored independently; a concurrent snapshot may see a mix.
    pub fn set_all_gains(&self, gains: &[f32; BAND_COUNT]) {
        for (index, &gain) in gains.iter().enumerate() {
            self.set_gain_db(index, gain);
        }
    }

    /// Apply a preset's gain curve
    pub fn apply_preset(&self, preset: EqPreset) {
        self.set_all_gains(&preset.gains());
    }

    /// Put every band back at its default
    pub fn reset_to_default(&self) {
        self.set_all_gains(&[GAIN_DEFAULT_DB; BAND_COUNT]);
    }

    /// Read all gains for one block
    ///
    /// One relaxed load per band, no locking. Safe on the audio thread.
    #[inline]
    pub fn snapshot(&self) -> ChainSettings {
        ChainSettings {
            band_gains_db: std::array::from_fn(|i| {
                f32::from_bits(self.gains[i].load(Ordering::Relaxed))
            }),
        }
    }
}

impl Default for EqParameters {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn defaults_are_flat() {
        let params = EqParameters::new();
        assert!(params.snapshot().is_flat());
        assert_eq!(params.gain_db(0), Some(0.0));
        assert_eq!(params.gain_db(BAND_COUNT), None);
    }

    #[test]
    fn gain_clamping() {
        let params = EqParameters::new();

        params.set_gain_db(0, 20.0); // Over maximum
        assert_eq!(params.gain_db(0), Some(12.0));

        params.set_gain_db(0, -20.0); // Under minimum
        assert_eq!(params.gain_db(0), Some(-12.0));
    }

    #[test]
    fn gain_snaps_to_half_db() {
        assert_eq!(quantize_gain_db(3.2), 3.0);
        assert_eq!(quantize_gain_db(3.3), 3.5);
        assert_eq!(quantize_gain_db(-0.2), 0.0);
        assert!(quantize_gain_db(-0.2).is_sign_positive());
        assert_eq!(quantize_gain_db(11.9), 12.0);
    }

    #[test]
    fn non_finite_writes_ignored() {
        let params = EqParameters::new();
        params.set_gain_db(4, 6.0);
        assert_eq!(params.try_set_gain_db(4, f32::NAN).unwrap(), 6.0);
        params.set_gain_db(4, f32::INFINITY);
        assert_eq!(params.gain_db(4), Some(6.0));
    }

    #[test]
    fn out_of_range_band() {
        let params = EqParameters::new();
        params.set_gain_db(BAND_COUNT, 6.0); // ignored
        assert!(matches!(
            params.try_set_gain_db(BAND_COUNT, 6.0),
            Err(EqError::BandOutOfRange(12))
        ));
    }

    #[test]
    fn set_by_id() {
        let params = EqParameters::new();
        assert_eq!(params.set_gain_by_id("Band 1k", 6.0).unwrap(), 6.0);
        assert_eq!(params.gain_db(6), Some(6.0));
        assert!(params.set_gain_by_id("Band 3k", 6.0).is_err());
    }

    #[test]
    fn presets_apply() {
        let params = EqParameters::with_preset(EqPreset::BassBoost);
        assert_eq!(params.gain_db(0), Some(6.0));
        assert_eq!(params.snapshot().band_gains_db, EqPreset::BassBoost.gains());

        params.reset_to_default();
        assert!(params.snapshot().is_flat());
    }

    #[test]
    fn parameter_info_matches_bands() {
        let info = EqParameters::parameter_info();
        assert_eq!(info[0].id, "Band 20");
        assert_eq!(info[11].id, "Band 20kHz");
        for p in info {
            assert_eq!(p.min, -12.0);
            assert_eq!(p.max, 12.0);
            assert_eq!(p.step, 0.5);
            assert_eq!(p.default, 0.0);
        }
    }

    #[test]
    fn single_band_settings() {
        let settings = ChainSettings::single_band(6, 6.0);
        assert_eq!(settings.gain_db(6), Some(6.0));
        assert_eq!(settings.gain_db(5), Some(0.0));
        assert!(!settings.is_flat());
        assert_eq!(ChainSettings::single_band(99, 6.0), ChainSettings::flat());
    }

    #[test]
    fn concurrent_writes_are_never_torn() {
        let params = Arc::new(EqParameters::new());
        let writer = {
            let params = Arc::clone(&params);
            thread::spawn(move || {
                for i in 0..10_000 {
                    let gain = if i % 2 == 0 { 12.0 } else { -12.0 };
                    params.set_gain_db(i % BAND_COUNT, gain);
                }
            })
        };

        for _ in 0..10_000 {
            for gain in params.snapshot().band_gains_db {
                assert!(gain == 0.0 || gain == 12.0 || gain == -12.0);
            }
        }

        writer.join().unwrap();
    }
}
