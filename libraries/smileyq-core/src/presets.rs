//! Gain presets for the twelve bands

use crate::bands::BAND_COUNT;
use serde::{Deserialize, Serialize};

/// Equalizer preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EqPreset {
    /// Flat - All bands at 0 dB
    #[default]
    Flat,

    /// Bass Boost - Enhanced low frequencies
    BassBoost,

    /// Treble Boost - Enhanced high frequencies
    TrebleBoost,

    /// V-Shape - Boosted lows and highs, reduced mids
    VShape,

    /// Vocal - Enhanced mid frequencies for voice
    Vocal,

    /// Rock - Classic rock music profile
    Rock,

    /// Electronic - Dance/Electronic music profile
    Electronic,

    /// Acoustic - Natural acoustic instrument profile
    Acoustic,

    /// Custom - User-defined settings
    Custom,
}

impl EqPreset {
    /// All named presets, in menu order
    pub const ALL: [Self; 8] = [
        Self::Flat,
        Self::BassBoost,
        Self::TrebleBoost,
        Self::VShape,
        Self::Vocal,
        Self::Rock,
        Self::Electronic,
        Self::Acoustic,
    ];

    /// Gain values (dB) for this preset, low to high
    ///
    /// `Custom` has no fixed curve and reports flat.
    pub fn gains(&self) -> [f32; BAND_COUNT] {
        match self {
            Self::Flat | Self::Custom => [0.0; BAND_COUNT],
            Self::BassBoost => [6.0, 6.0, 5.0, 4.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            Self::TrebleBoost => [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.0, 4.0, 5.0, 6.0, 6.0],
            Self::VShape => [5.0, 5.0, 4.0, 2.0, -1.0, -2.0, -2.0, -1.0, 2.0, 4.0, 5.0, 5.0],
            Self::Vocal => [-2.0, -2.0, -1.0, 0.0, 2.0, 4.0, 4.0, 2.0, 0.0, -1.0, -2.0, -2.0],
            Self::Rock => [4.0, 4.0, 3.0, 1.0, 0.0, -1.0, 0.0, 1.0, 3.0, 4.0, 4.0, 4.0],
            Self::Electronic => [5.0, 5.0, 4.0, 2.0, 0.0, 1.0, 2.0, 1.0, 3.0, 4.0, 4.0, 4.0],
            Self::Acoustic => [2.0, 2.0, 1.0, 0.0, 1.0, 2.0, 2.0, 1.0, 2.0, 2.0, 1.0, 1.0],
        }
    }

    /// Get preset name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Flat => "Flat",
            Self::BassBoost => "Bass Boost",
            Self::TrebleBoost => "Treble Boost",
            Self::VShape => "V-Shape",
            Self::Vocal => "Vocal",
            Self::Rock => "Rock",
            Self::Electronic => "Electronic",
            Self::Acoustic => "Acoustic",
            Self::Custom => "Custom",
        }
    }
}
