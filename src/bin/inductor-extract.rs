//! Command-line front end: load Touchstone files and print extracted parameters.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use inductor_model::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "inductor-extract")]
#[command(about = "Extract inductor L/R/Q and Pi-model parameters from S1P/S2P files", long_about = None)]
#[command(version)]
struct Cli {
    /// Touchstone files (.s1p / .s2p); the first one is the SRF reference
    #[arg(value_name = "FILE", required = true)]
    inputs: Vec<PathBuf>,

    /// Lower bound of the common frequency window in MHz
    #[arg(long, default_value_t = FREQUENCY_FLOOR_HZ / 1e6)]
    floor_mhz: f64,

    /// Minimum-inductance index that counts as a self-resonance
    #[arg(long, default_value_t = SRF_MIN_INDEX)]
    srf_min_index: usize,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let default = if verbose { "inductor_model=debug,info" } else { "inductor_model=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let networks = cli
        .inputs
        .iter()
        .map(|path| {
            load_network(path).with_context(|| format!("failed to load {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    let config = ExtractionConfig::default()
        .with_frequency_floor(cli.floor_mhz * 1e6)
        .with_srf_min_index(cli.srf_min_index);
    let report = run(&networks, &config).context("extraction failed")?;

    print_report(&report);
    Ok(())
}

fn print_report(report: &ExtractionReport) {
    println!("Frequency window: {}", report.window);
    match (report.srf.resonant, report.srf.frequency) {
        (true, Some(f)) => println!(
            "SRF found at index {} f={:.4} GHz",
            report.srf.index,
            f / 1e9
        ),
        _ => println!("No SRF in window"),
    }
    println!("Plot range: 0 - {:.4} GHz", report.limits.frequency_max / 1e9);
    println!();

    println!(
        "{:<20} {:>5} {:>8} {:>12} {:>12} {:>10}",
        "network", "ports", "samples", "L@f1 (nH)", "R@f1 (Ohm)", "Qmax"
    );
    for model in &report.models {
        let d = &model.differential;
        let qmax = d
            .quality_factor
            .iter()
            .copied()
            .filter(|q| !q.is_nan())
            .fold(f64::NEG_INFINITY, f64::max);
        println!(
            "{:<20} {:>5} {:>8} {:>12.4} {:>12.4} {:>10.2}",
            model.display_name,
            model.port_count,
            d.len(),
            d.inductance.get(1).copied().unwrap_or(f64::NAN) * 1e9,
            d.resistance.get(1).copied().unwrap_or(f64::NAN),
            qmax,
        );
        if let Some(pi) = &model.pi {
            println!(
                "{:<20} Pi @f1: Rs={:.4} Ohm Ls={:.4} nH C1={:.2} fF C2={:.2} fF Rsh={:.2} Ohm",
                "",
                pi.series_resistance.get(1).copied().unwrap_or(f64::NAN),
                pi.series_inductance.get(1).copied().unwrap_or(f64::NAN) * 1e9,
                pi.shunt_capacitance1.get(1).copied().unwrap_or(f64::NAN) * 1e15,
                pi.shunt_capacitance2.get(1).copied().unwrap_or(f64::NAN) * 1e15,
                pi.shunt_resistance.get(1).copied().unwrap_or(f64::NAN),
            );
        }
    }
    println!();

    let b = &report.bounds;
    println!(
        "Lmin {:.4} nH  Rmin {:.4} Ohm  Qmax {:.2}",
        b.min_inductance * 1e9,
        b.min_resistance,
        b.max_quality_factor
    );
    if let (Some(c), Some(r)) = (b.min_shunt_capacitance, b.min_shunt_resistance) {
        println!("Cshunt min {:.2} fF  Rshunt min {:.2} Ohm", c * 1e15, r);
    }
}
