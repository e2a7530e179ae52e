//! SmileyQ Core
//!
//! Shared data for the SmileyQ 12-band graphic equalizer.
//!
//! This crate provides:
//! - The fixed band table (ISO centers from 20 Hz to 20 kHz, constant Q)
//! - A lock-free parameter store the control side writes and the audio side snapshots
//! - Persisted state (save/restore of every gain parameter)
//! - Gain presets
//! - Stream configuration and validation
//!
//! # Example
//!
//! ```rust
//! use smileyq_core::{EqParameters, EqPreset};
//! use std::sync::Arc;
//!
//! let params = Arc::new(EqParameters::with_preset(EqPreset::Vocal));
//! params.set_gain_db(6, 4.5); // "1k" band
//!
//! let settings = params.snapshot();
//! assert_eq!(settings.band_gains_db[6], 4.5);
//!
//! let saved = params.save_state().unwrap();
//! params.reset_to_default();
//! params.restore_state(&saved).unwrap();
//! assert_eq!(params.gain_db(6), Some(4.5));
//! ```

pub mod bands;
mod error;
pub mod layout;
pub mod params;
mod presets;
pub mod state;

pub use bands::{Band, BANDS, BAND_COUNT, BAND_Q};
pub use error::{EqError, Result};
pub use layout::{BusLayout, ChannelLayout, ProcessSpec};
pub use params::{ChainSettings, EqParameters, ParameterInfo};
pub use presets::EqPreset;
pub use state::EqState;
