//! Parameter conversion and equivalent-circuit extraction.

/// S to Z/Y conversion for one- and two-port data.
pub mod immittance;
/// Differential impedance, inductance, resistance and Q.
pub mod differential;
/// Pi equivalent-circuit elements of a two-port.
pub mod pi_model;
/// Common frequency window negotiation.
pub mod window;
/// Self-resonant frequency heuristic.
pub mod srf;
/// Cross-dataset extrema.
pub mod aggregate;

pub use aggregate::{aggregate_bounds, AggregateBounds};
pub use differential::{extract_differential, DifferentialModelSeries};
pub use immittance::{convert, ImmittanceData, ImmittanceSeries};
pub use pi_model::{extract_pi_model, PiBranches, PiModelSeries};
pub use srf::{locate_srf, SrfEstimate};
pub use window::{negotiate_window, FrequencyWindow};
