//! Convenience re-exports for running extractions.

pub use crate::config::ExtractionConfig;
pub use crate::constants::*;
pub use crate::errors::ExtractionError;
pub use crate::extraction::{
    aggregate_bounds, convert, extract_differential, extract_pi_model, locate_srf,
    negotiate_window, AggregateBounds, DifferentialModelSeries, FrequencyWindow, ImmittanceData,
    ImmittanceSeries, PiBranches, PiModelSeries, SrfEstimate,
};
pub use crate::io::touchstone::{load_network, Touchstone, TouchstoneError};
pub use crate::limits::{PlotLimits, ResistanceDetail};
pub use crate::math::{Scalar, C, C2x2};
pub use crate::network::{Network, PortData};
pub use crate::pipeline::{extract_network, run, ExtractionReport, NetworkModel};
pub use crate::synth::{linspace, PiInductor, TwoPort};
