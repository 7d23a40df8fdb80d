//! Pi equivalent circuit: one series branch between the ports and one shunt
//! branch from each port to ground.
//!
//! With the mutual admittance averaged as `ymn = (y12 + y21) / 2`:
//!
//! ```text
//! Zseries = -1 / ymn
//! Zshunt1 =  1 / (y11 + ymn)
//! Zshunt2 =  1 / (y22 + ymn)
//! ```
//!
//! Shunt capacitance is `-1 / (ω Im(Zshunt))`. An inductive shunt branch
//! therefore yields a negative capacitance, and `ymn = 0` an infinite series
//! impedance; both are reported as computed.

use tracing::{debug, warn};

use crate::constants::angular_frequency;
use crate::extraction::immittance::{ImmittanceData, ImmittanceSeries};
use crate::math::{Scalar, C, C2x2, ONE};

/// Branch impedances of the Pi network at one frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PiBranches {
    /// Averaged mutual admittance `(y12 + y21) / 2`.
    pub mutual_admittance: C,
    /// Series branch impedance.
    pub series: C,
    /// Shunt branch impedance at port 1.
    pub shunt1: C,
    /// Shunt branch impedance at port 2.
    pub shunt2: C,
}

impl PiBranches {
    /// Splits a 2×2 Y matrix into Pi branches.
    #[must_use]
    pub fn from_admittance(y: &C2x2) -> Self {
        let ymn = (y[(0, 1)] + y[(1, 0)]) * 0.5;
        Self {
            mutual_admittance: ymn,
            series: -ONE / ymn,
            shunt1: ONE / (y[(0, 0)] + ymn),
            shunt2: ONE / (y[(1, 1)] + ymn),
        }
    }
}

/// Pi model element sequences, one entry per frequency sample.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PiModelSeries {
    /// Frequencies in Hz.
    pub frequencies: Vec<Scalar>,
    /// `Re(Zseries)` in ohms.
    pub series_resistance: Vec<Scalar>,
    /// `Im(Zseries) / ω` in henries.
    pub series_inductance: Vec<Scalar>,
    /// Port-1 shunt capacitance in farads.
    pub shunt_capacitance1: Vec<Scalar>,
    /// Port-2 shunt capacitance in farads.
    pub shunt_capacitance2: Vec<Scalar>,
    /// Mean of the two shunt resistances, in ohms.
    pub shunt_resistance: Vec<Scalar>,
}

impl PiModelSeries {
    fn with_capacity(n: usize) -> Self {
        Self {
            frequencies: Vec::with_capacity(n),
            series_resistance: Vec::with_capacity(n),
            series_inductance: Vec::with_capacity(n),
            shunt_capacitance1: Vec::with_capacity(n),
            shunt_capacitance2: Vec::with_capacity(n),
            shunt_resistance: Vec::with_capacity(n),
        }
    }

    fn push(&mut self, frequency: Scalar, branches: &PiBranches) {
        let omega = angular_frequency(frequency);
        self.frequencies.push(frequency);
        self.series_resistance.push(branches.series.re);
        self.series_inductance.push(branches.series.im / omega);
        self.shunt_capacitance1.push(-1.0 / (omega * branches.shunt1.im));
        self.shunt_capacitance2.push(-1.0 / (omega * branches.shunt2.im));
        self.shunt_resistance
            .push((branches.shunt1.re + branches.shunt2.re) / 2.0);
    }

    /// Number of frequency samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// True if the series holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}

/// Computes the Pi model of a two-port. Returns `None` for one-port data,
/// which has no Pi representation.
#[must_use]
pub fn extract_pi_model(series: &ImmittanceSeries) -> Option<PiModelSeries> {
    let ImmittanceData::TwoPort { y, .. } = &series.data else {
        return None;
    };

    let mut model = PiModelSeries::with_capacity(y.len());
    for (&f, y) in series.frequencies.iter().zip(y) {
        model.push(f, &PiBranches::from_admittance(y));
    }

    let negative = model
        .shunt_capacitance1
        .iter()
        .chain(&model.shunt_capacitance2)
        .filter(|c| **c < 0.0)
        .count();
    if negative > 0 {
        warn!(
            samples = negative,
            "inductive shunt branch: negative shunt capacitance in window"
        );
    }
    debug!(samples = model.len(), "extracted pi model");
    Some(model)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn pi_admittance(ys1: C, zser: C, ys2: C) -> C2x2 {
        let yser = ONE / zser;
        C2x2::new(ys1 + yser, -yser, -yser, ys2 + yser)
    }

    #[test]
    fn series_times_mutual_admittance_is_minus_one() {
        let y = C2x2::new(
            C::new(0.02, -0.01),
            C::new(-0.013, 0.004),
            C::new(-0.011, 0.006),
            C::new(0.018, -0.02),
        );
        let branches = PiBranches::from_admittance(&y);
        let product = branches.series * branches.mutual_admittance;
        assert_relative_eq!(product.re, -1.0, epsilon = 1e-12);
        assert_relative_eq!(product.im, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn recovers_lumped_elements() {
        let f = 2.0e9;
        let omega = angular_frequency(f);
        let (rs, ls) = (1.2, 1.5e-9);
        let (rsh, c1, c2) = (40.0, 80e-15, 95e-15);
        let zsh1 = C::new(rsh, -1.0 / (omega * c1));
        let zsh2 = C::new(rsh, -1.0 / (omega * c2));
        let y = pi_admittance(ONE / zsh1, C::new(rs, omega * ls), ONE / zsh2);

        let series = ImmittanceSeries {
            frequencies: vec![f],
            data: ImmittanceData::TwoPort {
                z: Vec::new(),
                y: vec![y],
            },
        };
        let model = extract_pi_model(&series).unwrap();
        assert_relative_eq!(model.series_resistance[0], rs, max_relative = 1e-9);
        assert_relative_eq!(model.series_inductance[0], ls, max_relative = 1e-9);
        assert_relative_eq!(model.shunt_capacitance1[0], c1, max_relative = 1e-9);
        assert_relative_eq!(model.shunt_capacitance2[0], c2, max_relative = 1e-9);
        assert_relative_eq!(model.shunt_resistance[0], rsh, max_relative = 1e-9);
    }

    #[test]
    fn inductive_shunt_reports_negative_capacitance() {
        let f = 1.0e9;
        let omega = angular_frequency(f);
        let zsh = C::new(5.0, omega * 1e-9);
        let y = pi_admittance(ONE / zsh, C::new(1.0, 10.0), ONE / zsh);
        let series = ImmittanceSeries {
            frequencies: vec![f],
            data: ImmittanceData::TwoPort {
                z: Vec::new(),
                y: vec![y],
            },
        };
        let model = extract_pi_model(&series).unwrap();
        assert!(model.shunt_capacitance1[0] < 0.0);
    }

    #[test]
    fn zero_mutual_admittance_is_not_finite() {
        let y = C2x2::new(C::new(0.01, 0.0), C::default(), C::default(), C::new(0.01, 0.0));
        let branches = PiBranches::from_admittance(&y);
        assert!(!branches.series.re.is_finite() || !branches.series.im.is_finite());
    }

    #[test]
    fn one_port_has_no_pi_model() {
        let series = ImmittanceSeries {
            frequencies: vec![1.0e9],
            data: ImmittanceData::OnePort {
                z: vec![C::new(1.0, 1.0)],
                y: vec![C::new(0.5, -0.5)],
            },
        };
        assert!(extract_pi_model(&series).is_none());
    }
}
