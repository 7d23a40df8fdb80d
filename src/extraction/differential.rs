//! Differential one-/two-port model: inductance, resistance and Q.
//!
//! For a two-port the differential impedance is `z11 - z12 - z21 + z22`, the
//! impedance seen between the two ports when they are driven with equal and
//! opposite currents. A one-port uses `z11` as-is.
//!
//! Values are raw algebraic derivations. Nothing is smoothed, and a zero
//! resistance produces an infinite or NaN Q that is passed through unchanged.

use tracing::debug;

use crate::constants::angular_frequency;
use crate::extraction::immittance::{ImmittanceData, ImmittanceSeries};
use crate::math::{Scalar, C, C2x2};

/// Differential model sequences, one entry per frequency sample.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DifferentialModelSeries {
    /// Frequencies in Hz.
    pub frequencies: Vec<Scalar>,
    /// Differential impedance (Ω).
    pub impedance: Vec<C>,
    /// `Im(Zdiff) / ω` in henries.
    pub inductance: Vec<Scalar>,
    /// `Re(Zdiff)` in ohms.
    pub resistance: Vec<Scalar>,
    /// `Im(Zdiff) / Re(Zdiff)`.
    pub quality_factor: Vec<Scalar>,
}

impl DifferentialModelSeries {
    /// Derives L, R and Q from differential impedance samples.
    #[must_use]
    pub fn from_impedance(frequencies: Vec<Scalar>, impedance: Vec<C>) -> Self {
        let inductance = frequencies
            .iter()
            .zip(&impedance)
            .map(|(&f, z)| z.im / angular_frequency(f))
            .collect();
        let resistance = impedance.iter().map(|z| z.re).collect();
        let quality_factor = impedance.iter().map(|z| z.im / z.re).collect();
        Self {
            frequencies,
            impedance,
            inductance,
            resistance,
            quality_factor,
        }
    }

    /// Number of frequency samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// True if the series holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}

/// Differential impedance of a two-port Z matrix.
#[inline]
#[must_use]
pub fn differential_impedance(z: &C2x2) -> C {
    z[(0, 0)] - z[(0, 1)] - z[(1, 0)] + z[(1, 1)]
}

/// Computes the differential model of a converted network.
#[must_use]
pub fn extract_differential(series: &ImmittanceSeries) -> DifferentialModelSeries {
    let impedance = match &series.data {
        ImmittanceData::OnePort { z, .. } => z.clone(),
        ImmittanceData::TwoPort { z, .. } => z.iter().map(differential_impedance).collect(),
    };
    let model = DifferentialModelSeries::from_impedance(series.frequencies.clone(), impedance);
    debug!(
        ports = series.port_count(),
        samples = model.len(),
        "extracted differential model"
    );
    model
}
