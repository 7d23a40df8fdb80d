//! Self-resonant frequency estimate from a differential inductance curve.
//!
//! The apparent inductance collapses at self-resonance, so the index of its
//! global minimum approximates the SRF. Minima close to the start of the
//! window are usually noise; only an index above
//! [`ExtractionConfig::srf_min_index`] counts as a resonance.
//!
//! The pipeline runs this on the first dataset only and uses it as the
//! reference for every plot.

use tracing::info;

use crate::config::ExtractionConfig;
use crate::extraction::differential::DifferentialModelSeries;
use crate::extraction::window::FrequencyWindow;
use crate::math::Scalar;

/// Outcome of the SRF search.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SrfEstimate {
    /// Index of the minimum inductance sample.
    pub index: usize,
    /// Frequency at `index` in Hz, if the series is non-empty.
    pub frequency: Option<Scalar>,
    /// True if `index` passed the threshold and is taken as a resonance.
    pub resonant: bool,
    /// Upper plotting bound in Hz.
    pub plot_fmax: Scalar,
}

/// Index of the first minimum of `values`, skipping NaN entries.
#[must_use]
pub fn argmin(values: &[Scalar]) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .filter(|(_, v)| !v.is_nan())
        .fold(None, |best: Option<(usize, Scalar)>, (i, &v)| match best {
            Some((_, b)) if b <= v => best,
            _ => Some((i, v)),
        })
        .map(|(i, _)| i)
}

/// Locates the SRF of `model` and derives the plotting upper bound.
///
/// With a resonance the bound is `srf_margin * f[index]`; otherwise it falls
/// back to the window's upper bound.
#[must_use]
pub fn locate_srf(
    model: &DifferentialModelSeries,
    window: &FrequencyWindow,
    config: &ExtractionConfig,
) -> SrfEstimate {
    let index = argmin(&model.inductance).unwrap_or(0);
    let frequency = model.frequencies.get(index).copied();

    match frequency {
        Some(f) if index > config.srf_min_index => {
            info!(index, srf_ghz = f / 1e9, "self-resonance found");
            SrfEstimate {
                index,
                frequency,
                resonant: true,
                plot_fmax: config.srf_margin * f,
            }
        }
        _ => SrfEstimate {
            index,
            frequency,
            resonant: false,
            plot_fmax: window.fmax(),
        },
    }
}
