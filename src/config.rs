//! Tunable parameters of an extraction run.

use crate::constants::{FREQUENCY_FLOOR_HZ, SRF_MIN_INDEX, SRF_PLOT_MARGIN};
use crate::math::Scalar;

/// Configuration shared by every stage of the pipeline.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtractionConfig {
    /// Lower bound applied to the negotiated window (Hz).
    pub frequency_floor_hz: Scalar,
    /// Minimum-inductance indices at or below this value are treated as noise.
    pub srf_min_index: usize,
    /// Plot upper bound as a multiple of the detected self-resonant frequency.
    pub srf_margin: Scalar,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            frequency_floor_hz: FREQUENCY_FLOOR_HZ,
            srf_min_index: SRF_MIN_INDEX,
            srf_margin: SRF_PLOT_MARGIN,
        }
    }
}

impl ExtractionConfig {
    /// Overrides the window floor.
    #[must_use]
    pub fn with_frequency_floor(mut self, hz: Scalar) -> Self {
        self.frequency_floor_hz = hz;
        self
    }

    /// Overrides the SRF index threshold.
    #[must_use]
    pub fn with_srf_min_index(mut self, index: usize) -> Self {
        self.srf_min_index = index;
        self
    }

    /// Overrides the SRF plot margin.
    #[must_use]
    pub fn with_srf_margin(mut self, margin: Scalar) -> Self {
        self.srf_margin = margin;
        self
    }
}
