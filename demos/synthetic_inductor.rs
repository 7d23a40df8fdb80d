use inductor_model::prelude::*;

fn main() -> Result<(), ExtractionError> {
    // 2 nH coil with 1 pF to ground on each side: SRF near 5 GHz.
    let coil = PiInductor {
        series_resistance: 1.0,
        series_inductance: 2.0e-9,
        shunt_capacitance1: 1.0e-12,
        shunt_capacitance2: 1.0e-12,
        shunt_resistance: 5.0,
    };
    let network = coil.network("coil_2nH", linspace(50.0e6, 10.0e9, 200), 50.0)?;
    let report = run(&[network], &ExtractionConfig::default())?;

    println!("window: {}", report.window);
    println!("f(GHz), L(nH), R(ohm), Q");
    let d = &report.models[0].differential;
    for i in (0..d.len()).step_by(10) {
        println!(
            "{:.3}, {:.4}, {:.4}, {:.2}",
            d.frequencies[i] / 1e9,
            d.inductance[i] * 1e9,
            d.resistance[i],
            d.quality_factor[i]
        );
    }
    if let Some(f) = report.srf.frequency.filter(|_| report.srf.resonant) {
        println!("SRF ~ {:.3} GHz", f / 1e9);
    }
    Ok(())
}
