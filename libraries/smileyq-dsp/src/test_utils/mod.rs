//! Test utilities for equalizer testing
//!
//! Provides test signal generation and analysis tools for verifying
//! the filter chain.

pub mod analysis;
pub mod signals;

pub use analysis::*;
pub use signals::*;
