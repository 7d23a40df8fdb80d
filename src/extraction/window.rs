//! Common frequency window across datasets.

use std::fmt;

use tracing::info;

use crate::errors::ExtractionError;
use crate::math::Scalar;

/// Closed frequency interval `[fmin, fmax]` in Hz.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyWindow {
    fmin: Scalar,
    fmax: Scalar,
}

impl FrequencyWindow {
    /// Creates a window, rejecting `fmin > fmax` and non-finite bounds.
    pub fn new(fmin: Scalar, fmax: Scalar) -> Result<Self, ExtractionError> {
        if !(fmin.is_finite() && fmax.is_finite()) || fmin > fmax {
            return Err(ExtractionError::InvalidWindow { fmin, fmax });
        }
        Ok(Self { fmin, fmax })
    }

    /// Lower bound in Hz.
    #[must_use]
    pub const fn fmin(&self) -> Scalar {
        self.fmin
    }

    /// Upper bound in Hz.
    #[must_use]
    pub const fn fmax(&self) -> Scalar {
        self.fmax
    }

    /// True when `f` lies inside the window, bounds included.
    #[must_use]
    pub fn contains(&self, f: Scalar) -> bool {
        (self.fmin..=self.fmax).contains(&f)
    }

    /// Label in whole megahertz, e.g. `100-5000mhz`.
    #[must_use]
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FrequencyWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Truncated, not rounded.
        write!(
            f,
            "{}-{}mhz",
            (self.fmin / 1e6).trunc(),
            (self.fmax / 1e6).trunc()
        )
    }
}

/// Negotiates the window shared by all frequency axes.
///
/// `fmin` is the highest per-axis start frequency, raised to `floor_hz`;
/// `fmax` is the lowest per-axis stop frequency. Empty axes are ignored.
pub fn negotiate_window<'a, I>(axes: I, floor_hz: Scalar) -> Result<FrequencyWindow, ExtractionError>
where
    I: IntoIterator<Item = &'a [Scalar]>,
{
    let mut bounds: Option<(Scalar, Scalar)> = None;
    for axis in axes {
        let (Some(&first), Some(&last)) = (axis.first(), axis.last()) else {
            continue;
        };
        bounds = Some(match bounds {
            None => (first, last),
            Some((lo, hi)) => (lo.max(first), hi.min(last)),
        });
    }
    let (lowest, highest) = bounds.ok_or(ExtractionError::EmptyNetworkSet)?;

    let window = FrequencyWindow::new(lowest.max(floor_hz), highest)?;
    info!(
        fmin_hz = window.fmin(),
        fmax_hz = window.fmax(),
        label = %window,
        "negotiated frequency window"
    );
    Ok(window)
}
