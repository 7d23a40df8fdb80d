//! Scattering to impedance/admittance conversion.
//!
//! Every frequency sample is converted on its own; nothing is interpolated.
//! Reference impedances are real and may differ per port. With
//! `F = diag(sqrt(z0))`:
//!
//! ```text
//! Z = F (I - S)^-1 (I + S) F
//! Y = F^-1 (I + S)^-1 (I - S) F^-1
//! ```

use tracing::trace;

use crate::math::{inverse_2x2, scale_2x2, Scalar, C, C2x2, ONE};
use crate::network::{Network, PortData};

/// Impedance- and admittance-domain samples matching the port count of the source.
#[derive(Debug, Clone, PartialEq)]
pub enum ImmittanceData {
    /// Scalar z11 and y11 per frequency.
    OnePort {
        /// Input impedance (Ω).
        z: Vec<C>,
        /// Input admittance (S).
        y: Vec<C>,
    },
    /// 2×2 Z and Y matrices per frequency.
    TwoPort {
        /// Open-circuit impedance matrices (Ω).
        z: Vec<C2x2>,
        /// Short-circuit admittance matrices (S).
        y: Vec<C2x2>,
    },
}

/// Immittance samples aligned with their frequency axis.
#[derive(Debug, Clone, PartialEq)]
pub struct ImmittanceSeries {
    /// Frequencies in Hz.
    pub frequencies: Vec<Scalar>,
    /// Converted samples.
    pub data: ImmittanceData,
}

impl ImmittanceSeries {
    /// Number of ports of the source network.
    #[must_use]
    pub const fn port_count(&self) -> usize {
        match self.data {
            ImmittanceData::OnePort { .. } => 1,
            ImmittanceData::TwoPort { .. } => 2,
        }
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

/// One-port reflection to impedance: `z0 (1 + s) / (1 - s)`.
#[inline]
#[must_use]
pub fn s_to_z_one_port(s: C, z0: Scalar) -> C {
    (ONE + s) / (ONE - s) * z0
}

/// One-port reflection to admittance: `(1 - s) / (z0 (1 + s))`.
#[inline]
#[must_use]
pub fn s_to_y_one_port(s: C, z0: Scalar) -> C {
    (ONE - s) / ((ONE + s) * z0)
}

/// Two-port S matrix to Z matrix.
#[must_use]
pub fn s_to_z_two_port(s: &C2x2, z0: [Scalar; 2]) -> C2x2 {
    let id = C2x2::identity();
    let f = [z0[0].sqrt(), z0[1].sqrt()];
    let core = inverse_2x2(&(id - s)) * (id + s);
    scale_2x2(f, &core, f)
}

/// Two-port S matrix to Y matrix.
#[must_use]
pub fn s_to_y_two_port(s: &C2x2, z0: [Scalar; 2]) -> C2x2 {
    let id = C2x2::identity();
    let g = [1.0 / z0[0].sqrt(), 1.0 / z0[1].sqrt()];
    let core = inverse_2x2(&(id + s)) * (id - s);
    scale_2x2(g, &core, g)
}

/// Z matrix to Y matrix (`Y = Z^-1`).
#[must_use]
pub fn z_to_y(z: &C2x2) -> C2x2 {
    inverse_2x2(z)
}

/// Y matrix to Z matrix (`Z = Y^-1`).
#[must_use]
pub fn y_to_z(y: &C2x2) -> C2x2 {
    inverse_2x2(y)
}

/// Converts all samples of `network` to the impedance and admittance domains.
#[must_use]
pub fn convert(network: &Network) -> ImmittanceSeries {
    trace!(network = network.name(), samples = network.len(), "converting S to Z/Y");
    let data = match network.data() {
        PortData::OnePort(s) => {
            let z0 = network.z0()[0];
            ImmittanceData::OnePort {
                z: s.iter().map(|&s| s_to_z_one_port(s, z0)).collect(),
                y: s.iter().map(|&s| s_to_y_one_port(s, z0)).collect(),
            }
        }
        PortData::TwoPort(s) => {
            let z0 = [network.z0()[0], network.z0()[1]];
            ImmittanceData::TwoPort {
                z: s.iter().map(|s| s_to_z_two_port(s, z0)).collect(),
                y: s.iter().map(|s| s_to_y_two_port(s, z0)).collect(),
            }
        }
    };
    ImmittanceSeries {
        frequencies: network.frequencies().to_vec(),
        data,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn assert_matrix_close(a: &C2x2, b: &C2x2, rel: Scalar) {
        for i in 0..2 {
            for j in 0..2 {
                let scale = b[(i, j)].norm().max(1.0);
                assert!(
                    (a[(i, j)] - b[(i, j)]).norm() / scale <= rel,
                    "entry ({i},{j}): {} vs {}",
                    a[(i, j)],
                    b[(i, j)]
                );
            }
        }
    }

    #[test]
    fn matched_load_is_reference_impedance() {
        let z = s_to_z_one_port(C::new(0.0, 0.0), 50.0);
        assert_relative_eq!(z.re, 50.0, epsilon = 1e-12);
        assert_relative_eq!(z.im, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn one_port_z_and_y_are_reciprocal() {
        let s = C::new(0.3, -0.4);
        let product = s_to_z_one_port(s, 50.0) * s_to_y_one_port(s, 50.0);
        assert_relative_eq!(product.re, 1.0, epsilon = 1e-12);
        assert_relative_eq!(product.im, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn z_to_y_and_back_reproduces_matrix() {
        let z = C2x2::new(
            C::new(12.0, 40.0),
            C::new(-3.0, 7.5),
            C::new(-2.5, 8.0),
            C::new(15.0, 35.0),
        );
        let back = y_to_z(&z_to_y(&z));
        assert_matrix_close(&back, &z, 1e-9);
    }

    #[test]
    fn two_port_y_is_inverse_of_z() {
        let s = C2x2::new(
            C::new(0.2, 0.1),
            C::new(0.6, -0.3),
            C::new(0.55, -0.35),
            C::new(-0.1, 0.25),
        );
        let z = s_to_z_two_port(&s, [50.0, 75.0]);
        let y = s_to_y_two_port(&s, [50.0, 75.0]);
        assert_matrix_close(&(z * y), &C2x2::identity(), 1e-9);
    }

    #[test]
    fn series_resistor_two_port_y() {
        // 50 Ω in series between 50 Ω ports: S11 = S22 = 1/3, S21 = S12 = 2/3.
        let third = C::new(1.0 / 3.0, 0.0);
        let two_thirds = C::new(2.0 / 3.0, 0.0);
        let s = C2x2::new(third, two_thirds, two_thirds, third);
        let y = s_to_y_two_port(&s, [50.0, 50.0]);
        assert_relative_eq!(y[(0, 0)].re, 1.0 / 50.0, max_relative = 1e-12);
        assert_relative_eq!(y[(0, 1)].re, -1.0 / 50.0, max_relative = 1e-12);
        assert_relative_eq!(y[(1, 1)].re, 1.0 / 50.0, max_relative = 1e-12);
    }

    #[test]
    fn convert_keeps_frequency_alignment() {
        let network = Network::one_port(
            "short",
            vec![1.0e9, 2.0e9],
            vec![C::new(-1.0, 0.0), C::new(0.0, 0.0)],
            50.0,
        )
        .unwrap();
        let series = convert(&network);
        assert_eq!(series.frequencies, vec![1.0e9, 2.0e9]);
        assert_eq!(series.port_count(), 1);
        match series.data {
            ImmittanceData::OnePort { z, .. } => {
                assert_relative_eq!(z[0].norm(), 0.0, epsilon = 1e-12);
                assert_relative_eq!(z[1].re, 50.0, epsilon = 1e-12);
            }
            ImmittanceData::TwoPort { .. } => panic!("expected one-port data"),
        }
    }
}
