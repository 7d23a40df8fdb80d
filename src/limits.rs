//! Axis limits for a rendering layer, derived from the aggregate bounds.
//!
//! All values stay in SI units; unit scaling for display is left to the caller.

use crate::extraction::aggregate::AggregateBounds;
use crate::extraction::differential::DifferentialModelSeries;
use crate::extraction::srf::{argmin, SrfEstimate};
use crate::math::Scalar;

/// Zoomed view of the low-frequency resistance.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResistanceDetail {
    /// Lower resistance limit, `0.5 * Rmin`.
    pub resistance_min: Scalar,
    /// Upper resistance limit, `3 * Rmin`.
    pub resistance_max: Scalar,
    /// Frequency of the reference sample closest to `3 * Rmin`.
    pub frequency_max: Option<Scalar>,
}

/// Upper axis limits shared by all compared devices.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotLimits {
    /// Frequency axis upper bound (Hz), from the SRF estimate.
    pub frequency_max: Scalar,
    /// `3 * Lmin` (H).
    pub inductance_max: Scalar,
    /// `1.2 * Qmax`.
    pub quality_factor_max: Scalar,
    /// `5 * Rmin` (Ω).
    pub resistance_max: Scalar,
    /// Low-frequency resistance zoom.
    pub resistance_detail: ResistanceDetail,
    /// `5 * Cmin` (F), when a Pi model exists.
    pub shunt_capacitance_max: Option<Scalar>,
    /// `20 * Rshunt_min` (Ω), when a Pi model exists.
    pub shunt_resistance_max: Option<Scalar>,
}

/// Index of the sample closest to `target`.
#[must_use]
pub fn nearest_index(values: &[Scalar], target: Scalar) -> Option<usize> {
    let distance: Vec<Scalar> = values.iter().map(|v| (v - target).abs()).collect();
    argmin(&distance)
}

impl PlotLimits {
    /// Derives limits from the bounds, the reference dataset and its SRF estimate.
    #[must_use]
    pub fn new(
        bounds: &AggregateBounds,
        reference: &DifferentialModelSeries,
        srf: &SrfEstimate,
    ) -> Self {
        let rmin = bounds.min_resistance;
        let detail_index = nearest_index(&reference.resistance, 3.0 * rmin);
        Self {
            frequency_max: srf.plot_fmax,
            inductance_max: 3.0 * bounds.min_inductance,
            quality_factor_max: 1.2 * bounds.max_quality_factor,
            resistance_max: 5.0 * rmin,
            resistance_detail: ResistanceDetail {
                resistance_min: 0.5 * rmin,
                resistance_max: 3.0 * rmin,
                frequency_max: detail_index.and_then(|i| reference.frequencies.get(i).copied()),
            },
            shunt_capacitance_max: bounds.min_shunt_capacitance.map(|c| 5.0 * c),
            shunt_resistance_max: bounds.min_shunt_resistance.map(|r| 20.0 * r),
        }
    }
}
