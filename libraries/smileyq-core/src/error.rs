//! Core error types for SmileyQ

use crate::layout::ChannelLayout;
use thiserror::Error;

/// Result type alias using `EqError`
pub type Result<T> = std::result::Result<T, EqError>;

/// Equalizer error type
///
/// Every variant is raised outside the audio path: either while preparing a
/// stream or while handling parameter/state requests on the control side.
#[derive(Error, Debug)]
pub enum EqError {
    /// Sample rate is zero, negative or not finite
    #[error("Invalid sample rate: {0}")]
    InvalidSampleRate(f64),

    /// Sample rate too low for the highest band
    #[error("Sample rate {sample_rate} Hz must exceed {required} Hz (twice the highest band)")]
    BelowNyquistFloor {
        /// Rate that was requested
        sample_rate: f64,
        /// Rate the band table needs to be exceeded
        required: f64,
    },

    /// Maximum block size is zero
    #[error("Invalid block size: {0}")]
    InvalidBlockSize(usize),

    /// Bus layout is not mono->mono or stereo->stereo
    #[error("Unsupported bus layout: {input:?} -> {output:?}")]
    UnsupportedLayout {
        /// Input bus
        input: ChannelLayout,
        /// Output bus
        output: ChannelLayout,
    },

    /// Band index past the end of the band table
    #[error("Band index out of range: {0}")]
    BandOutOfRange(usize),

    /// Malformed persisted state
    #[error("State error: {0}")]
    State(String),

    /// Persisted state written by an incompatible version
    #[error("Unsupported state version: {0}")]
    UnsupportedStateVersion(u32),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl EqError {
    /// Create a state error
    pub fn state(msg: impl Into<String>) -> Self {
        Self::State(msg.into())
    }

    /// True for errors raised while validating a stream configuration
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidSampleRate(_)
                | Self::BelowNyquistFloor { .. }
                | Self::InvalidBlockSize(_)
                | Self::UnsupportedLayout { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_errors_are_flagged() {
        assert!(EqError::InvalidSampleRate(0.0).is_configuration());
        assert!(EqError::InvalidBlockSize(0).is_configuration());
        assert!(!EqError::BandOutOfRange(12).is_configuration());
        assert!(!EqError::state("bad").is_configuration());
    }

    #[test]
    fn nyquist_message_names_both_rates() {
        let err = EqError::BelowNyquistFloor {
            sample_rate: 32000.0,
            required: 40000.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("32000"));
        assert!(msg.contains("40000"));
    }
}
