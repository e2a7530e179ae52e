//! Persisted parameter state
//!
//! Hosts store the equalizer as an opaque blob. The blob is JSON keyed by
//! parameter id so that reordering or adding bands does not scramble old
//! sessions.

use crate::bands::{band_by_id, BANDS};
use crate::error::{EqError, Result};
use crate::params::EqParameters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Current state format version
pub const STATE_VERSION: u32 = 1;

/// Serializable snapshot of every gain parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EqState {
    /// Format version
    pub version: u32,
    /// Gain in dB keyed by parameter id
    pub gains: BTreeMap<String, f32>,
}

impl EqState {
    /// Capture the current values of a parameter store
    pub fn capture(params: &EqParameters) -> Self {
        let snapshot = params.snapshot();
        let gains = BANDS
            .iter()
            .map(|band| (band.id.to_string(), snapshot.band_gains_db[band.index]))
            .collect();

        Self {
            version: STATE_VERSION,
            gains,
        }
    }

    /// Encode as bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode and check the version
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.is_empty() {
            return Err(EqError::state("empty state payload"));
        }

        let state: Self = serde_json::from_slice(data)?;
        if state.version != STATE_VERSION {
            return Err(EqError::UnsupportedStateVersion(state.version));
        }

        Ok(state)
    }

    /// Write the captured values into a parameter store
    ///
    /// Values go through the normal clamping path. Unknown ids are skipped and
    /// bands missing from the state keep their current value.
    pub fn apply(&self, params: &EqParameters) {
        for (id, &gain) in &self.gains {
            match band_by_id(id) {
                Some(band) => params.set_gain_db(band.index, gain),
                None => warn!(id = %id, "Ignoring unknown parameter in saved state"),
            }
        }
    }
}

impl EqParameters {
    /// Serialize the current parameter values
    pub fn save_state(&self) -> Result<Vec<u8>> {
        EqState::capture(self).to_bytes()
    }

    /// Restore parameter values from [`save_state`](Self::save_state) output
    ///
    /// On error the store is left untouched.
    pub fn restore_state(&self, data: &[u8]) -> Result<()> {
        let state = EqState::from_bytes(data)?;
        state.apply(self);
        debug!(bands = state.gains.len(), "Restored equalizer state");
        Ok(())
    }
}
