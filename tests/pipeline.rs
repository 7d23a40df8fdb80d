use std::fmt::Write as _;

use approx::assert_relative_eq;
use inductor_model::extraction::differential::differential_impedance;
use inductor_model::extraction::immittance::{convert, ImmittanceData};
use inductor_model::prelude::*;

fn resonant_coil() -> PiInductor {
    PiInductor {
        series_resistance: 1.0,
        series_inductance: 2.0e-9,
        shunt_capacitance1: 1.0e-12,
        shunt_capacitance2: 1.2e-12,
        shunt_resistance: 5.0,
    }
}

#[test]
fn pi_elements_are_recovered_from_s_parameters() {
    let coil = PiInductor::default();
    let network = coil
        .network("coil", linspace(100.0e6, 20.0e9, 200), 50.0)
        .unwrap();
    let report = run(&[network], &ExtractionConfig::default()).unwrap();

    let pi = report.models[0].pi.as_ref().expect("two-port has a pi model");
    assert_eq!(pi.len(), 200);
    for i in 0..pi.len() {
        assert_relative_eq!(pi.series_resistance[i], coil.series_resistance, max_relative = 1e-6);
        assert_relative_eq!(pi.series_inductance[i], coil.series_inductance, max_relative = 1e-6);
        assert_relative_eq!(pi.shunt_capacitance1[i], coil.shunt_capacitance1, max_relative = 1e-6);
        assert_relative_eq!(pi.shunt_capacitance2[i], coil.shunt_capacitance2, max_relative = 1e-6);
        assert_relative_eq!(pi.shunt_resistance[i], coil.shunt_resistance, max_relative = 1e-6);
    }
    assert_relative_eq!(
        report.bounds.min_shunt_capacitance.unwrap(),
        coil.shunt_capacitance1,
        max_relative = 1e-6
    );
}

#[test]
fn differential_impedance_matches_floating_coil() {
    let coil = resonant_coil();
    let frequencies = linspace(100.0e6, 3.0e9, 50);
    let network = coil.network("coil", frequencies.clone(), 50.0).unwrap();

    let immittance = convert(&network);
    let ImmittanceData::TwoPort { z, .. } = &immittance.data else {
        panic!("expected two-port data");
    };
    let model = extract_network(&network).differential;
    for (i, &f) in frequencies.iter().enumerate() {
        let expected = coil.differential_impedance(f);
        assert_eq!(model.impedance[i], differential_impedance(&z[i]));
        assert_relative_eq!(model.impedance[i].re, expected.re, max_relative = 1e-6);
        assert_relative_eq!(model.impedance[i].im, expected.im, max_relative = 1e-6);
    }
}

#[test]
fn one_port_and_two_port_views_agree() {
    let coil = resonant_coil();
    let frequencies = linspace(100.0e6, 3.0e9, 30);
    let two = coil.network("two", frequencies.clone(), 50.0).unwrap();
    let one = coil.one_port_network("one", frequencies, 50.0).unwrap();

    let report = run(&[two, one], &ExtractionConfig::default()).unwrap();
    let (a, b) = (&report.models[0].differential, &report.models[1].differential);
    assert!(report.models[1].pi.is_none());
    for i in 0..a.len() {
        assert_relative_eq!(a.inductance[i], b.inductance[i], max_relative = 1e-6);
        assert_relative_eq!(a.resistance[i], b.resistance[i], max_relative = 1e-6);
    }
}

#[test]
fn srf_of_reference_network_limits_plot_range() {
    let coil = resonant_coil();
    let network = coil
        .network("coil", linspace(100.0e6, 10.0e9, 200), 50.0)
        .unwrap();
    let report = run(&[network], &ExtractionConfig::default()).unwrap();

    let srf = report.srf;
    let f = srf.frequency.unwrap();
    assert!(srf.resonant);
    assert!(srf.index > 20);
    assert!(f > 4.5e9 && f < 6.0e9, "SRF at {f}");
    assert_relative_eq!(srf.plot_fmax, 1.2 * f, max_relative = 1e-15);
    assert_eq!(report.limits.frequency_max, srf.plot_fmax);
}

#[test]
fn mixed_grids_share_window_and_bounds() {
    let small = PiInductor {
        series_inductance: 0.8e-9,
        ..PiInductor::default()
    };
    let large = PiInductor {
        series_inductance: 1.5e-9,
        series_resistance: 0.4,
        ..PiInductor::default()
    };
    let a = small.network("small", linspace(50.0e6, 6.0e9, 120), 50.0).unwrap();
    let b = large
        .one_port_network("large", linspace(80.0e6, 5.0e9, 90), 50.0)
        .unwrap();

    let report = run(&[a, b], &ExtractionConfig::default()).unwrap();
    assert_eq!(report.window.fmin(), 100.0e6);
    assert_eq!(report.window.fmax(), 5.0e9);
    assert_eq!(report.window.to_string(), "100-5000mhz");

    let l1: Vec<Scalar> = report
        .models
        .iter()
        .map(|m| m.differential.inductance[1])
        .collect();
    assert_eq!(report.bounds.min_inductance, l1[0].min(l1[1]));
    assert!(report.bounds.min_inductance < 1.0e-9);
    assert!(report.bounds.min_shunt_resistance.is_some());
}

#[test]
fn touchstone_text_runs_through_pipeline() {
    let coil = PiInductor::default();
    let frequencies = linspace(0.5e9, 5.0e9, 10);
    let mut text = String::from("! synthetic coil\n# GHz S RI R 50\n");
    for &f in &frequencies {
        let s = coil.two_port(f).to_s(50.0);
        write!(text, "{}", f / 1e9).unwrap();
        for (r, c) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            write!(text, " {:.15e} {:.15e}", s[(r, c)].re, s[(r, c)].im).unwrap();
        }
        text.push('\n');
    }

    let network = Touchstone::parse(&text, 2)
        .unwrap()
        .into_network("coil_from_file")
        .unwrap();
    let report = run(&[network], &ExtractionConfig::default()).unwrap();
    let pi = report.models[0].pi.as_ref().unwrap();
    assert_relative_eq!(pi.series_inductance[3], coil.series_inductance, max_relative = 1e-6);
    assert_eq!(report.models[0].display_name, "coil_from_file");
}

#[test]
fn unsupported_port_count_stops_before_extraction() {
    let row = format!("1.0{}\n", " 0".repeat(32));
    let err = Touchstone::parse(&row, 4)
        .unwrap()
        .into_network("quad")
        .unwrap_err();
    assert!(matches!(
        err,
        ExtractionError::UnsupportedPortCount { ports: 4, .. }
    ));
}

#[test]
fn floor_override_moves_window_start() {
    let coil = PiInductor::default();
    let network = coil.network("coil", linspace(10.0e6, 1.0e9, 100), 50.0).unwrap();
    let config = ExtractionConfig::default().with_frequency_floor(20.0e6);
    let report = run(&[network], &config).unwrap();
    assert_eq!(report.window.fmin(), 20.0e6);
    assert!(report.models[0].differential.frequencies[0] >= 20.0e6);
}
