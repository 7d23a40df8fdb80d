//! Synthetic S-parameter data from lumped inductor models.
//!
//! Networks are assembled as ABCD cascades and converted to S-parameters, which
//! gives extraction fixtures with known element values.

use crate::constants::angular_frequency;
use crate::errors::ExtractionError;
use crate::math::{Scalar, C, C2x2, ONE};
use crate::network::Network;

/// ABCD-based two-port.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoPort {
    /// A element of the ABCD matrix.
    pub a: C,
    /// B element of the ABCD matrix.
    pub b: C,
    /// C element of the ABCD matrix.
    pub c: C,
    /// D element of the ABCD matrix.
    pub d: C,
}

impl TwoPort {
    /// Series impedance `z` as a two-port.
    #[must_use]
    pub const fn series_impedance(z: C) -> Self {
        Self { a: ONE, b: z, c: C::new(0.0, 0.0), d: ONE }
    }

    /// Shunt admittance `y` as a two-port.
    #[must_use]
    pub const fn shunt_admittance(y: C) -> Self {
        Self { a: ONE, b: C::new(0.0, 0.0), c: y, d: ONE }
    }

    /// ABCD determinant `ad - bc`.
    #[must_use]
    pub fn determinant(&self) -> C {
        self.a * self.d - self.b * self.c
    }

    /// `self` followed by `rhs`.
    #[must_use]
    pub fn cascade(&self, rhs: &Self) -> Self {
        Self {
            a: self.a * rhs.a + self.b * rhs.c,
            b: self.a * rhs.b + self.b * rhs.d,
            c: self.c * rhs.a + self.d * rhs.c,
            d: self.c * rhs.b + self.d * rhs.d,
        }
    }

    /// Pi section: shunt `y1`, series `z2`, shunt `y3`.
    #[must_use]
    pub fn pi_section(y1: C, z2: C, y3: C) -> Self {
        Self::shunt_admittance(y1)
            .cascade(&Self::series_impedance(z2))
            .cascade(&Self::shunt_admittance(y3))
    }

    /// S matrix for an equal real reference impedance `z0` on both ports.
    #[must_use]
    pub fn to_s(&self, z0: Scalar) -> C2x2 {
        let den = self.a + self.b / z0 + self.c * z0 + self.d;
        let s11 = (self.a + self.b / z0 - self.c * z0 - self.d) / den;
        let s22 = (-self.a + self.b / z0 - self.c * z0 + self.d) / den;
        let s21 = C::new(2.0, 0.0) / den;
        let s12 = C::new(2.0, 0.0) * self.determinant() / den;
        C2x2::new(s11, s12, s21, s22)
    }
}

/// Reflection coefficient of impedance `z` against `z0`.
#[must_use]
pub fn reflection(z: C, z0: Scalar) -> C {
    (z - z0) / (z + z0)
}

/// `n` linearly spaced samples in `[start, stop]`.
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n).map(|i| start + step * i as Scalar).collect()
        }
    }
}

/// Lumped Pi model of an on-chip inductor.
///
/// Series branch `Rs + jωLs`; each shunt branch is `Rsh` in series with its
/// capacitance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PiInductor {
    /// Series resistance (Ω).
    pub series_resistance: Scalar,
    /// Series inductance (H).
    pub series_inductance: Scalar,
    /// Port-1 shunt capacitance (F).
    pub shunt_capacitance1: Scalar,
    /// Port-2 shunt capacitance (F).
    pub shunt_capacitance2: Scalar,
    /// Resistance in each shunt branch (Ω).
    pub shunt_resistance: Scalar,
}

impl Default for PiInductor {
    /// 1 nH / 1 Ω coil with 100 fF to ground on each side.
    fn default() -> Self {
        Self {
            series_resistance: 1.0,
            series_inductance: 1.0e-9,
            shunt_capacitance1: 100.0e-15,
            shunt_capacitance2: 100.0e-15,
            shunt_resistance: 20.0,
        }
    }
}

impl PiInductor {
    /// Series branch impedance at `hz`.
    #[must_use]
    pub fn series_impedance(&self, hz: Scalar) -> C {
        C::new(
            self.series_resistance,
            angular_frequency(hz) * self.series_inductance,
        )
    }

    /// Shunt branch impedances at `hz`.
    #[must_use]
    pub fn shunt_impedances(&self, hz: Scalar) -> (C, C) {
        let omega = angular_frequency(hz);
        (
            C::new(self.shunt_resistance, -1.0 / (omega * self.shunt_capacitance1)),
            C::new(self.shunt_resistance, -1.0 / (omega * self.shunt_capacitance2)),
        )
    }

    /// Impedance between the two ports with ground floating:
    /// the series branch in parallel with both shunt branches in series.
    #[must_use]
    pub fn differential_impedance(&self, hz: Scalar) -> C {
        let zser = self.series_impedance(hz);
        let (zsh1, zsh2) = self.shunt_impedances(hz);
        let zloop = zsh1 + zsh2;
        zser * zloop / (zser + zloop)
    }

    /// ABCD two-port at `hz`.
    #[must_use]
    pub fn two_port(&self, hz: Scalar) -> TwoPort {
        let (zsh1, zsh2) = self.shunt_impedances(hz);
        TwoPort::pi_section(ONE / zsh1, self.series_impedance(hz), ONE / zsh2)
    }

    /// Two-port S-parameter network over `frequencies`.
    pub fn network(
        &self,
        name: impl Into<String>,
        frequencies: Vec<Scalar>,
        z0: Scalar,
    ) -> Result<Network, ExtractionError> {
        let s = frequencies.iter().map(|&f| self.two_port(f).to_s(z0)).collect();
        Network::two_port(name, frequencies, s, [z0, z0])
    }

    /// One-port network measured differentially across the two terminals.
    pub fn one_port_network(
        &self,
        name: impl Into<String>,
        frequencies: Vec<Scalar>,
        z0: Scalar,
    ) -> Result<Network, ExtractionError> {
        let s = frequencies
            .iter()
            .map(|&f| reflection(self.differential_impedance(f), z0))
            .collect();
        Network::one_port(name, frequencies, s, z0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn series_resistor_s_parameters() {
        let s = TwoPort::series_impedance(C::new(50.0, 0.0)).to_s(50.0);
        assert_relative_eq!(s[(1, 0)].norm(), 2.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(s[(0, 0)].re, 1.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn pi_section_is_reciprocal() {
        let t = PiInductor::default().two_port(2.0e9);
        assert_relative_eq!(t.determinant().re, 1.0, epsilon = 1e-9);
        let s = t.to_s(50.0);
        assert_relative_eq!((s[(0, 1)] - s[(1, 0)]).norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn differential_impedance_is_inductive_below_resonance() {
        let coil = PiInductor::default();
        let z = coil.differential_impedance(1.0e9);
        assert_relative_eq!(
            z.im / angular_frequency(1.0e9),
            1.0e-9,
            max_relative = 0.05
        );
    }

    #[test]
    fn linspace_endpoints() {
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }
}
