//! Stream configuration
//!
//! Channel layouts the equalizer accepts and the per-stream settings a host
//! hands over when audio starts.

use crate::bands::NYQUIST_FLOOR_HZ;
use crate::error::{EqError, Result};
use serde::{Deserialize, Serialize};

/// Channel configuration of one audio bus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChannelLayout {
    /// Single channel
    Mono,
    /// Left + right
    Stereo,
}

impl ChannelLayout {
    /// Number of channels
    pub fn channels(&self) -> usize {
        match self {
            Self::Mono => 1,
            Self::Stereo => 2,
        }
    }

    /// Layout for a channel count, if supported
    pub fn from_channels(channels: usize) -> Option<Self> {
        match channels {
            1 => Some(Self::Mono),
            2 => Some(Self::Stereo),
            _ => None,
        }
    }
}

/// Input/output bus pair offered by a host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusLayout {
    /// Main input bus
    pub input: ChannelLayout,
    /// Main output bus
    pub output: ChannelLayout,
}

impl BusLayout {
    /// Mono in, mono out
    pub const MONO: Self = Self {
        input: ChannelLayout::Mono,
        output: ChannelLayout::Mono,
    };

    /// Stereo in, stereo out
    pub const STEREO: Self = Self {
        input: ChannelLayout::Stereo,
        output: ChannelLayout::Stereo,
    };

    /// Only symmetric mono or stereo buses are accepted
    pub fn is_supported(&self) -> bool {
        self.input == self.output
    }

    /// Check the layout, returning the channel layout to process with
    pub fn validate(&self) -> Result<ChannelLayout> {
        if self.is_supported() {
            Ok(self.output)
        } else {
            Err(EqError::UnsupportedLayout {
                input: self.input,
                output: self.output,
            })
        }
    }
}

/// Settings fixed for the lifetime of one prepared stream
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessSpec {
    /// Sample rate in Hz
    pub sample_rate: f64,
    /// Largest block the host will deliver
    pub max_block_size: usize,
    /// Channel layout of the stream
    pub layout: ChannelLayout,
}

impl ProcessSpec {
    /// Create a stereo spec
    pub fn stereo(sample_rate: f64, max_block_size: usize) -> Self {
        Self {
            sample_rate,
            max_block_size,
            layout: ChannelLayout::Stereo,
        }
    }

    /// Create a mono spec
    pub fn mono(sample_rate: f64, max_block_size: usize) -> Self {
        Self {
            sample_rate,
            max_block_size,
            layout: ChannelLayout::Mono,
        }
    }

    /// Build a spec from a host bus layout
    pub fn for_bus(bus: BusLayout, sample_rate: f64, max_block_size: usize) -> Result<Self> {
        Ok(Self {
            sample_rate,
            max_block_size,
            layout: bus.validate()?,
        })
    }

    /// Number of channels in the stream
    pub fn channels(&self) -> usize {
        self.layout.channels()
    }

    /// Check the spec before any audio runs
    pub fn validate(&self) -> Result<()> {
        if !self.sample_rate.is_finite() || self.sample_rate <= 0.0 {
            return Err(EqError::InvalidSampleRate(self.sample_rate));
        }

        if self.sample_rate <= NYQUIST_FLOOR_HZ {
            return Err(EqError::BelowNyquistFloor {
                sample_rate: self.sample_rate,
                required: NYQUIST_FLOOR_HZ,
            });
        }

        if self.max_block_size == 0 {
            return Err(EqError::InvalidBlockSize(self.max_block_size));
        }

        Ok(())
    }
}
