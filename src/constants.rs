//! Named constants for the extraction engine.
//!
//! The values mirror the fixed choices of the extraction procedure and are the
//! defaults of [`ExtractionConfig`](crate::config::ExtractionConfig); tests
//! override them through the config rather than editing these values.

use std::f64::consts::PI;

use crate::math::Scalar;

/// Lowest frequency admitted into the common window, in hertz (100 MHz).
///
/// L = Im(Z)/ω and C = -1/(ω·Im(Z)) become unstable as ω approaches zero, so
/// the window never starts below this value regardless of the data.
pub const FREQUENCY_FLOOR_HZ: Scalar = 100.0e6;

/// A minimum-inductance index must be strictly above this value to count as a
/// self-resonance.
pub const SRF_MIN_INDEX: usize = 20;

/// Plot range above a detected self-resonance, as a multiple of its frequency.
pub const SRF_PLOT_MARGIN: Scalar = 1.2;

/// Reference impedance assumed when a data source does not state one (Ω).
pub const DEFAULT_REFERENCE_IMPEDANCE: Scalar = 50.0;

/// Display names longer than this many characters are shortened.
pub const DISPLAY_NAME_MAX_CHARS: usize = 17;

/// Leading characters kept when a display name is shortened.
pub const DISPLAY_NAME_HEAD_CHARS: usize = 10;

/// Trailing characters kept when a display name is shortened.
pub const DISPLAY_NAME_TAIL_CHARS: usize = 7;

/// Returns the angular frequency corresponding to a linear frequency `hz`.
#[inline]
#[must_use]
pub fn angular_frequency(hz: Scalar) -> Scalar {
    2.0 * PI * hz
}
