//! End-to-end extraction over a set of networks.
//!
//! Window negotiation runs first and every network is restricted to that
//! window. Per-network extraction is independent; with the `parallel` feature
//! it fans out over rayon's pool. The SRF search and the aggregation run after
//! all networks are done. The first network is the reference for the SRF
//! heuristic and for the resistance detail view.

use tracing::{debug, info_span};

use crate::config::ExtractionConfig;
use crate::errors::ExtractionError;
use crate::extraction::aggregate::{aggregate_bounds, AggregateBounds};
use crate::extraction::differential::{extract_differential, DifferentialModelSeries};
use crate::extraction::immittance::convert;
use crate::extraction::pi_model::{extract_pi_model, PiModelSeries};
use crate::extraction::srf::{locate_srf, SrfEstimate};
use crate::extraction::window::{negotiate_window, FrequencyWindow};
use crate::limits::PlotLimits;
use crate::network::Network;

/// Extraction result for one network.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkModel {
    /// Full network name.
    pub name: String,
    /// Shortened name for legends.
    pub display_name: String,
    /// Port count of the source data.
    pub port_count: usize,
    /// Differential L/R/Q model.
    pub differential: DifferentialModelSeries,
    /// Pi model, two-port networks only.
    pub pi: Option<PiModelSeries>,
}

/// Everything produced by one run, ready for a rendering layer.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionReport {
    /// Window shared by all networks.
    pub window: FrequencyWindow,
    /// Per-network models, in input order.
    pub models: Vec<NetworkModel>,
    /// SRF estimate of the first network.
    pub srf: SrfEstimate,
    /// Extrema across all networks.
    pub bounds: AggregateBounds,
    /// Axis limits derived from the bounds.
    pub limits: PlotLimits,
}

/// Converts and extracts a single network over all of its samples.
#[must_use]
pub fn extract_network(network: &Network) -> NetworkModel {
    let immittance = convert(network);
    let differential = extract_differential(&immittance);
    let pi = extract_pi_model(&immittance);
    if pi.is_none() {
        debug!(network = network.name(), "one-port data, pi model skipped");
    }
    NetworkModel {
        name: network.name().to_owned(),
        display_name: network.display_name(),
        port_count: network.port_count(),
        differential,
        pi,
    }
}

#[cfg(feature = "parallel")]
fn extract_all(networks: &[Network]) -> Vec<NetworkModel> {
    use rayon::prelude::*;

    networks.par_iter().map(extract_network).collect()
}

#[cfg(not(feature = "parallel"))]
fn extract_all(networks: &[Network]) -> Vec<NetworkModel> {
    networks.iter().map(extract_network).collect()
}

/// Runs the full extraction over `networks`.
///
/// Fails without partial results if the set is empty, the spans do not
/// overlap, or some network has no sample in the common window.
pub fn run(
    networks: &[Network],
    config: &ExtractionConfig,
) -> Result<ExtractionReport, ExtractionError> {
    let _span = info_span!("extraction", networks = networks.len()).entered();
    if networks.is_empty() {
        return Err(ExtractionError::EmptyNetworkSet);
    }

    let window = negotiate_window(
        networks.iter().map(Network::frequencies),
        config.frequency_floor_hz,
    )?;
    let restricted = networks
        .iter()
        .map(|n| n.restrict(&window))
        .collect::<Result<Vec<_>, _>>()?;

    let models = extract_all(&restricted);
    let reference = models.first().ok_or(ExtractionError::EmptyNetworkSet)?;

    let srf = locate_srf(&reference.differential, &window, config);
    let bounds = aggregate_bounds(
        models.iter().map(|m| &m.differential),
        models.iter().filter_map(|m| m.pi.as_ref()),
    );
    let limits = PlotLimits::new(&bounds, &reference.differential, &srf);
    debug!(?bounds, "aggregated bounds");

    Ok(ExtractionReport {
        window,
        models,
        srf,
        bounds,
        limits,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Scalar, C};

    fn open_stub(name: &str, frequencies: Vec<Scalar>) -> Network {
        let n = frequencies.len();
        Network::one_port(name, frequencies, vec![C::new(0.2, 0.5); n], 50.0).unwrap()
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(
            run(&[], &ExtractionConfig::default()),
            Err(ExtractionError::EmptyNetworkSet)
        ));
    }

    #[test]
    fn models_keep_input_order_and_window() {
        let a = open_stub("a", vec![50.0e6, 150.0e6, 250.0e6, 350.0e6]);
        let b = open_stub("b", vec![120.0e6, 200.0e6, 300.0e6]);
        let report = run(&[a, b], &ExtractionConfig::default()).unwrap();
        assert_eq!(report.window.fmin(), 120.0e6);
        assert_eq!(report.window.fmax(), 300.0e6);
        assert_eq!(report.models[0].name, "a");
        assert_eq!(report.models[0].differential.frequencies, vec![150.0e6, 250.0e6]);
        assert_eq!(report.models[1].differential.len(), 3);
        assert!(report.models.iter().all(|m| m.pi.is_none()));
        assert_eq!(report.bounds.min_shunt_capacitance, None);
    }

    #[test]
    fn network_without_samples_in_window_aborts() {
        let a = open_stub("a", vec![100.0e6, 200.0e6, 250.0e6, 300.0e6, 400.0e6]);
        let b = open_stub("b", vec![110.0e6, 250.0e6, 390.0e6]);
        let c = open_stub("c", vec![120.0e6, 130.0e6, 380.0e6]);
        // Window is [120, 380] MHz; every network keeps a sample.
        assert!(run(&[a.clone(), b, c], &ExtractionConfig::default()).is_ok());

        let sparse = open_stub("sparse", vec![90.0e6, 500.0e6]);
        let narrow = open_stub("narrow", vec![210.0e6, 290.0e6]);
        // Window is [210, 290] MHz and "sparse" has nothing inside.
        assert!(matches!(
            run(&[a, sparse, narrow], &ExtractionConfig::default()),
            Err(ExtractionError::EmptyWindow { ref name, .. }) if name == "sparse"
        ));
    }
}
