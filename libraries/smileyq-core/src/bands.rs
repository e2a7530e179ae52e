//! Band table
//!
//! The twelve fixed bands of the equalizer, ordered low to high. Processing
//! order, parameter order and persisted-state keys all follow this table.

/// Number of bands in the equalizer
pub const BAND_COUNT: usize = 12;

/// Quality factor shared by every band (roughly one octave bandwidth)
pub const BAND_Q: f64 = 1.41;

/// One fixed-frequency band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    /// Position in the cascade (0 = lowest frequency)
    pub index: usize,
    /// Center frequency in Hz
    pub center_hz: f64,
    /// Quality factor
    pub q: f64,
    /// Stable parameter identifier
    pub id: &'static str,
    /// Short display label
    pub label: &'static str,
}

impl Band {
    const fn new(index: usize, center_hz: f64, id: &'static str, label: &'static str) -> Self {
        Self {
            index,
            center_hz,
            q: BAND_Q,
            id,
            label,
        }
    }
}

/// Band definitions, low to high
pub const BANDS: [Band; BAND_COUNT] = [
    Band::new(0, 20.0, "Band 20", "20"),
    Band::new(1, 32.0, "Band 32", "32"),
    Band::new(2, 64.0, "Band 64", "64"),
    Band::new(3, 125.0, "Band 125", "125"),
    Band::new(4, 250.0, "Band 250", "250"),
    Band::new(5, 500.0, "Band 500", "500"),
    Band::new(6, 1000.0, "Band 1k", "1k"),
    Band::new(7, 2000.0, "Band 2k", "2k"),
    Band::new(8, 4000.0, "Band 4k", "4k"),
    Band::new(9, 8000.0, "Band 8k", "8k"),
    Band::new(10, 16000.0, "Band 16k", "16k"),
    Band::new(11, 20000.0, "Band 20kHz", "20k"),
];

/// Highest center frequency in the table
pub const HIGHEST_CENTER_HZ: f64 = BANDS[BAND_COUNT - 1].center_hz;

/// Smallest sample rate the highest band can run at without aliasing
pub const NYQUIST_FLOOR_HZ: f64 = 2.0 * HIGHEST_CENTER_HZ;

/// Look up a band by index
pub fn band(index: usize) -> Option<&'static Band> {
    BANDS.get(index)
}

/// Look up a band by its parameter identifier
pub fn band_by_id(id: &str) -> Option<&'static Band> {
    BANDS.iter().find(|b| b.id == id)
}

/// Center frequencies in cascade order
pub fn center_frequencies() -> [f64; BAND_COUNT] {
    std::array::from_fn(|i| BANDS[i].center_hz)
}
