//! Frequency-swept port-parameter record of a single device.
//!
//! A [`Network`] holds scattering data for exactly one or two ports. The port
//! count is part of the type through [`PortData`]; data with any other arity is
//! rejected when the record is built, so nothing downstream has to handle it.

use nalgebra::DMatrix;

use crate::constants::{
    DISPLAY_NAME_HEAD_CHARS, DISPLAY_NAME_MAX_CHARS, DISPLAY_NAME_TAIL_CHARS,
};
use crate::errors::ExtractionError;
use crate::extraction::window::FrequencyWindow;
use crate::math::{Scalar, C, C2x2};

/// Scattering samples tagged by port count.
#[derive(Debug, Clone, PartialEq)]
pub enum PortData {
    /// One S11 value per frequency.
    OnePort(Vec<C>),
    /// One 2×2 S matrix per frequency.
    TwoPort(Vec<C2x2>),
}

impl PortData {
    /// Number of ports described by the data.
    #[must_use]
    pub const fn port_count(&self) -> usize {
        match self {
            Self::OnePort(_) => 1,
            Self::TwoPort(_) => 2,
        }
    }

    /// Number of frequency samples.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::OnePort(s) => s.len(),
            Self::TwoPort(s) => s.len(),
        }
    }

    /// True if no samples are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slice(&self, start: usize, end: usize) -> Self {
        match self {
            Self::OnePort(s) => Self::OnePort(s[start..end].to_vec()),
            Self::TwoPort(s) => Self::TwoPort(s[start..end].to_vec()),
        }
    }
}

/// S-parameter data of one device over a strictly increasing frequency axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    name: String,
    frequencies: Vec<Scalar>,
    z0: Vec<Scalar>,
    data: PortData,
}

impl Network {
    /// Builds a one-port network from S11 samples and a real reference impedance.
    pub fn one_port(
        name: impl Into<String>,
        frequencies: Vec<Scalar>,
        s11: Vec<C>,
        z0: Scalar,
    ) -> Result<Self, ExtractionError> {
        Self::validated(name.into(), frequencies, vec![z0], PortData::OnePort(s11))
    }

    /// Builds a two-port network from S matrices and per-port real reference impedances.
    pub fn two_port(
        name: impl Into<String>,
        frequencies: Vec<Scalar>,
        s: Vec<C2x2>,
        z0: [Scalar; 2],
    ) -> Result<Self, ExtractionError> {
        Self::validated(name.into(), frequencies, z0.to_vec(), PortData::TwoPort(s))
    }

    /// Builds a network from generic N×N S matrices, as produced by a file loader.
    ///
    /// Returns [`ExtractionError::UnsupportedPortCount`] unless N is 1 or 2.
    pub fn from_sparams(
        name: impl Into<String>,
        frequencies: Vec<Scalar>,
        sparams: Vec<DMatrix<C>>,
        z0: Vec<Scalar>,
    ) -> Result<Self, ExtractionError> {
        let name = name.into();
        let ports = sparams.first().map_or(z0.len(), |m| m.nrows());
        if !(1..=2).contains(&ports) {
            return Err(ExtractionError::UnsupportedPortCount { name, ports });
        }
        if let Some(bad) = sparams.iter().position(|m| m.shape() != (ports, ports)) {
            return Err(ExtractionError::MalformedNetwork {
                name,
                reason: format!("sample {bad} is not a {ports}x{ports} matrix"),
            });
        }

        let data = if ports == 1 {
            PortData::OnePort(sparams.iter().map(|m| m[(0, 0)]).collect())
        } else {
            PortData::TwoPort(
                sparams
                    .iter()
                    .map(|m| C2x2::new(m[(0, 0)], m[(0, 1)], m[(1, 0)], m[(1, 1)]))
                    .collect(),
            )
        };
        Self::validated(name, frequencies, z0, data)
    }

    fn validated(
        name: String,
        frequencies: Vec<Scalar>,
        z0: Vec<Scalar>,
        data: PortData,
    ) -> Result<Self, ExtractionError> {
        let malformed = |reason: String| ExtractionError::MalformedNetwork {
            name: name.clone(),
            reason,
        };
        if frequencies.is_empty() {
            return Err(malformed("empty frequency axis".into()));
        }
        if frequencies.len() != data.len() {
            return Err(malformed(format!(
                "{} frequencies but {} parameter samples",
                frequencies.len(),
                data.len()
            )));
        }
        if let Some(i) = frequencies.windows(2).position(|w| w[1] <= w[0]) {
            return Err(malformed(format!(
                "frequency axis not strictly increasing at sample {}",
                i + 1
            )));
        }
        if z0.len() != data.port_count() {
            return Err(malformed(format!(
                "{} reference impedances for {} ports",
                z0.len(),
                data.port_count()
            )));
        }
        if z0.iter().any(|z| !(z.is_finite() && *z > 0.0)) {
            return Err(malformed("reference impedance must be positive".into()));
        }
        Ok(Self { name, frequencies, z0, data })
    }

    /// Returns the network name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name shortened for legends: longer than 17 characters becomes
    /// the first 10, `..`, and the last 7.
    #[must_use]
    pub fn display_name(&self) -> String {
        shorten_name(&self.name)
    }

    /// Number of ports (1 or 2).
    #[must_use]
    pub const fn port_count(&self) -> usize {
        self.data.port_count()
    }

    /// Frequency axis in Hz.
    #[must_use]
    pub fn frequencies(&self) -> &[Scalar] {
        &self.frequencies
    }

    /// Real reference impedance per port (Ω).
    #[must_use]
    pub fn z0(&self) -> &[Scalar] {
        &self.z0
    }

    /// Scattering samples.
    #[must_use]
    pub const fn data(&self) -> &PortData {
        &self.data
    }

    /// Number of frequency samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// True when no samples are stored. Never the case for a validated network.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Copy of this network holding only the samples with `fmin <= f <= fmax`.
    pub fn restrict(&self, window: &FrequencyWindow) -> Result<Self, ExtractionError> {
        let start = self.frequencies.partition_point(|&f| f < window.fmin());
        let end = self.frequencies.partition_point(|&f| f <= window.fmax());
        if start >= end {
            return Err(ExtractionError::EmptyWindow {
                name: self.name.clone(),
                fmin: window.fmin(),
                fmax: window.fmax(),
            });
        }
        Ok(Self {
            name: self.name.clone(),
            frequencies: self.frequencies[start..end].to_vec(),
            z0: self.z0.clone(),
            data: self.data.slice(start, end),
        })
    }
}

/// Shortens `name` to `first10..last7` when it exceeds 17 characters.
#[must_use]
pub fn shorten_name(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= DISPLAY_NAME_MAX_CHARS {
        return name.to_owned();
    }
    let head: String = chars[..DISPLAY_NAME_HEAD_CHARS].iter().collect();
    let tail: String = chars[chars.len() - DISPLAY_NAME_TAIL_CHARS..].iter().collect();
    format!("{head}..{tail}")
}
