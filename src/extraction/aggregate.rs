//! Extrema across datasets, used to put compared devices on common axes.
//!
//! Inductance and resistance minima are read at sample index 1 of each
//! dataset, not over the whole curve: the true minimum of the inductance sits
//! at the self-resonance and is not a useful scale. Q, shunt capacitance and
//! shunt resistance use the full series.

use crate::extraction::differential::DifferentialModelSeries;
use crate::extraction::pi_model::PiModelSeries;
use crate::math::Scalar;

/// Sample index used for the inductance and resistance minima.
pub const REFERENCE_SAMPLE: usize = 1;

/// Comparison bounds over all datasets.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateBounds {
    /// Smallest inductance at the reference sample (H).
    pub min_inductance: Scalar,
    /// Smallest resistance at the reference sample (Ω).
    pub min_resistance: Scalar,
    /// Largest quality factor over every full series.
    pub max_quality_factor: Scalar,
    /// Smallest port-1 shunt capacitance of any Pi model (F).
    pub min_shunt_capacitance: Option<Scalar>,
    /// Smallest averaged shunt resistance of any Pi model (Ω).
    pub min_shunt_resistance: Option<Scalar>,
}

/// Smallest value, ignoring NaN. `None` when nothing is left.
fn min_of(values: impl IntoIterator<Item = Scalar>) -> Option<Scalar> {
    values
        .into_iter()
        .filter(|v| !v.is_nan())
        .reduce(Scalar::min)
}

/// Largest value, ignoring NaN. `None` when nothing is left.
fn max_of(values: impl IntoIterator<Item = Scalar>) -> Option<Scalar> {
    values
        .into_iter()
        .filter(|v| !v.is_nan())
        .reduce(Scalar::max)
}

/// Combines per-dataset series into [`AggregateBounds`].
///
/// Datasets with fewer than two samples do not contribute to the
/// reference-sample minima. Bounds with no contributor are infinite
/// (`+inf` for minima, `-inf` for the Q maximum).
#[must_use]
pub fn aggregate_bounds<'d, 'p, D, P>(differential: D, pi: P) -> AggregateBounds
where
    D: IntoIterator<Item = &'d DifferentialModelSeries>,
    P: IntoIterator<Item = &'p PiModelSeries>,
{
    let differential: Vec<&DifferentialModelSeries> = differential.into_iter().collect();
    let pi: Vec<&PiModelSeries> = pi.into_iter().collect();

    let min_inductance = min_of(
        differential
            .iter()
            .filter_map(|m| m.inductance.get(REFERENCE_SAMPLE).copied()),
    );
    let min_resistance = min_of(
        differential
            .iter()
            .filter_map(|m| m.resistance.get(REFERENCE_SAMPLE).copied()),
    );
    let max_quality_factor = max_of(
        differential
            .iter()
            .flat_map(|m| m.quality_factor.iter().copied()),
    );

    let min_shunt_capacitance =
        min_of(pi.iter().flat_map(|m| m.shunt_capacitance1.iter().copied()));
    let min_shunt_resistance = min_of(pi.iter().flat_map(|m| m.shunt_resistance.iter().copied()));

    AggregateBounds {
        min_inductance: min_inductance.unwrap_or(Scalar::INFINITY),
        min_resistance: min_resistance.unwrap_or(Scalar::INFINITY),
        max_quality_factor: max_quality_factor.unwrap_or(Scalar::NEG_INFINITY),
        min_shunt_capacitance,
        min_shunt_resistance,
    }
}
