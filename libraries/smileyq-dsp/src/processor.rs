//! Dual-channel equalizer processor
//!
//! Owns one [`FilterChain`] per channel and drives them from the shared
//! [`EqParameters`]. The lifecycle mirrors a host's prepare/process/release
//! callbacks:
//!
//! ```text
//! Unprepared --prepare()--> Prepared --process()--> Processing
//!     ^                        |  ^                     |
//!     +-------release()--------+  +-----prepare()-------+
//! ```
//!
//! Each block the processor snapshots all twelve gains, redesigns every
//! stage and pushes the same coefficients into both chains. Delay history
//! stays per channel. Coefficients are swapped without interpolation, so
//! fast gain automation can produce small discontinuities.
//!
//! # Real-Time Safety
//! `process` and `process_interleaved` never allocate, lock, log or panic.
//! All validation happens in `prepare`.

use crate::chain::{design_chain, FilterChain};
use smileyq_core::{EqParameters, ProcessSpec, Result};
use std::sync::Arc;
use tracing::{debug, warn};

/// Lifecycle state of an [`EqProcessor`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProcessorState {
    /// No stream configured
    Unprepared,
    /// Stream configured, history cleared, no block processed yet
    Prepared(ProcessSpec),
    /// At least one block processed since the last prepare
    Processing(ProcessSpec),
}

impl ProcessorState {
    /// Stream settings, if prepared
    pub fn spec(&self) -> Option<ProcessSpec> {
        match self {
            Self::Unprepared => None,
            Self::Prepared(spec) | Self::Processing(spec) => Some(*spec),
        }
    }

    /// True once `prepare` has succeeded
    pub fn is_prepared(&self) -> bool {
        self.spec().is_some()
    }
}

/// Channel selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// First channel (also used for mono)
    Left,
    /// Second channel
    Right,
}

/// 12-band graphic equalizer for mono or stereo streams
#[derive(Debug)]
pub struct EqProcessor {
    params: Arc<EqParameters>,
    left: FilterChain,
    right: FilterChain,
    state: ProcessorState,
}

impl EqProcessor {
    /// Create an unprepared processor reading from `params`
    pub fn new(params: Arc<EqParameters>) -> Self {
        Self {
            params,
            left: FilterChain::new(),
            right: FilterChain::new(),
            state: ProcessorState::Unprepared,
        }
    }

    /// Configure for a stream and clear all filter history
    ///
    /// Valid from any state. On error the processor is left unprepared and
    /// `process` passes audio through untouched.
    pub fn prepare(&mut self, spec: ProcessSpec) -> Result<()> {
        if let Err(err) = spec.validate() {
            warn!(
                sample_rate = spec.sample_rate,
                max_block_size = spec.max_block_size,
                error = %err,
                "Rejected equalizer stream configuration"
            );
            self.state = ProcessorState::Unprepared;
            return Err(err);
        }

        self.left.reset();
        self.right.reset();

        let coeffs = design_chain(&self.params.snapshot(), spec.sample_rate);
        self.left.set_all_coefficients(&coeffs);
        self.right.set_all_coefficients(&coeffs);

        debug!(
            sample_rate = spec.sample_rate,
            max_block_size = spec.max_block_size,
            layout = ?spec.layout,
            restart = self.state.is_prepared(),
            "Equalizer prepared"
        );

        self.state = ProcessorState::Prepared(spec);
        Ok(())
    }

    /// Return to the unprepared state (host stopped the stream)
    pub fn release(&mut self) {
        if self.state.is_prepared() {
            debug!("Equalizer released");
        }
        self.state = ProcessorState::Unprepared;
    }

    /// Filter one block of planar audio in place
    ///
    /// `right` is processed only when the stream was prepared as stereo.
    /// Mono streams touch the left chain alone.
    pub fn process(&mut self, left: &mut [f32], right: Option<&mut [f32]>) {
        let Some(spec) = self.begin_block() else {
            return;
        };

        self.left.process_block(left);

        if spec.channels() == 2 {
            if let Some(right) = right {
                self.right.process_block(right);
            }
        }
    }

    /// Filter one block of interleaved audio in place
    ///
    /// Layout follows the prepared spec: mono samples, or `L, R, L, R, ...`
    /// frames for stereo. A trailing partial stereo frame is left untouched.
    pub fn process_interleaved(&mut self, buffer: &mut [f32]) {
        let Some(spec) = self.begin_block() else {
            return;
        };

        if spec.channels() == 1 {
            self.left.process_block(buffer);
            return;
        }

        for frame in buffer.chunks_exact_mut(2) {
            frame[0] = self.left.process_sample(frame[0]);
            frame[1] = self.right.process_sample(frame[1]);
        }
    }

    /// Snapshot gains and push fresh coefficients into both chains
    #[inline]
    fn begin_block(&mut self) -> Option<ProcessSpec> {
        let spec = self.state.spec()?;
        self.state = ProcessorState::Processing(spec);

        let settings = self.params.snapshot();
        let coeffs = design_chain(&settings, spec.sample_rate);
        self.left.set_all_coefficients(&coeffs);
        self.right.set_all_coefficients(&coeffs);

        Some(spec)
    }

    /// Current lifecycle state
    pub fn state(&self) -> ProcessorState {
        self.state
    }

    /// Stream settings, if prepared
    pub fn spec(&self) -> Option<ProcessSpec> {
        self.state.spec()
    }

    /// Shared parameter store
    pub fn parameters(&self) -> &Arc<EqParameters> {
        &self.params
    }

    /// Filter chain for a channel
    pub fn chain(&self, channel: Channel) -> &FilterChain {
        match channel {
            Channel::Left => &self.left,
            Channel::Right => &self.right,
        }
    }

    /// The equalizer adds no tail after input stops
    pub fn tail_length_seconds(&self) -> f64 {
        0.0
    }

    /// Magnitude response of the loaded coefficients at `frequency` Hz
    ///
    /// `None` while unprepared.
    pub fn magnitude_response_db(&self, frequency: f64) -> Option<f64> {
        let spec = self.state.spec()?;
        Some(self.left.magnitude_db(frequency, spec.sample_rate))
    }
}
