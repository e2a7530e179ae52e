//! SmileyQ DSP
//!
//! Real-time filter chain for the SmileyQ 12-band graphic equalizer.
//!
//! This crate provides:
//! - RBJ peaking-filter coefficient design
//! - Direct-form-II biquad stages and the fixed twelve-stage cascade
//! - A dual-channel processor with a prepare/process/release lifecycle
//!
//! Gains are read lock-free from [`smileyq_core::EqParameters`] once per block.
//!
//! # Example
//!
//! ```rust
//! use smileyq_core::{EqParameters, ProcessSpec};
//! use smileyq_dsp::EqProcessor;
//! use std::sync::Arc;
//!
//! let params = Arc::new(EqParameters::new());
//! let mut eq = EqProcessor::new(Arc::clone(&params));
//! eq.prepare(ProcessSpec::stereo(48000.0, 512)).unwrap();
//!
//! // Control thread: boost the 1 kHz band
//! params.set_gain_db(6, 6.0);
//!
//! // Audio thread: filter one block in place
//! let mut left = vec![0.0f32; 512];
//! let mut right = vec![0.0f32; 512];
//! eq.process(&mut left, Some(&mut right));
//! ```

pub mod chain;
pub mod coefficients;
mod processor;
pub mod stage;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use chain::{design_chain, FilterChain};
pub use coefficients::{compute_peak_coefficients, db_to_gain, BiquadCoefficients};
pub use processor::{Channel, EqProcessor, ProcessorState};
pub use stage::FilterStage;
