//! Touchstone v1 (`.sNp`) reader.
//!
//! Handles the `# <unit> <param> <format> R <z0>` option line, `!` comments,
//! RI/MA/DB number formats and rows that wrap over several lines. Two-port
//! rows use the Touchstone column order `S11 S21 S12 S22`; larger networks are
//! stored row by row. A trailing two-port noise block is recognised by its
//! frequency restarting and is ignored. Other port counts keep every sample,
//! so an out-of-order axis is rejected when the [`Network`] is built.
//!
//! The reader accepts any port count. Deciding whether the extraction supports
//! it is left to [`Network::from_sparams`].

use std::fs;
use std::path::Path;

use nalgebra::DMatrix;
use thiserror::Error;
use tracing::debug;

use crate::constants::DEFAULT_REFERENCE_IMPEDANCE;
use crate::errors::ExtractionError;
use crate::math::{Scalar, C};
use crate::network::Network;

/// Errors raised while reading Touchstone data.
#[derive(Debug, Error)]
pub enum TouchstoneError {
    /// A token could not be parsed as a number.
    #[error("line {line}: invalid number '{token}'")]
    InvalidNumber {
        /// 1-based line number.
        line: usize,
        /// Offending token.
        token: String,
    },
    /// Number format other than RI, MA or DB.
    #[error("line {line}: unsupported data format '{format}'")]
    UnsupportedFormat {
        /// 1-based line number.
        line: usize,
        /// Format keyword found.
        format: String,
    },
    /// Parameter type other than S.
    #[error("line {line}: only S-parameters are supported, found '{kind}'")]
    UnsupportedParameter {
        /// 1-based line number.
        line: usize,
        /// Parameter keyword found.
        kind: String,
    },
    /// `R` keyword without a value in the option line.
    #[error("line {line}: reference impedance missing after 'R'")]
    MissingReferenceImpedance {
        /// 1-based line number.
        line: usize,
    },
    /// Data ended in the middle of a frequency sample.
    #[error("incomplete final sample: {got} of {expected} values")]
    Truncated {
        /// Values read for the last sample.
        got: usize,
        /// Values needed per sample.
        expected: usize,
    },
    /// No data rows were found.
    #[error("no data rows")]
    Empty,
    /// A zero port count was requested.
    #[error("port count must be at least 1")]
    ZeroPorts,
    /// Port count cannot be derived from the file name.
    #[error("cannot infer port count from file name '{0}'")]
    UnknownExtension(String),
    /// Wraps I/O errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberFormat {
    RealImag,
    MagAngle,
    DbAngle,
}

impl NumberFormat {
    fn complex(self, a: Scalar, b: Scalar) -> C {
        match self {
            Self::RealImag => C::new(a, b),
            Self::MagAngle => C::from_polar(a, b.to_radians()),
            Self::DbAngle => C::from_polar(10f64.powf(a / 20.0), b.to_radians()),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Options {
    frequency_scale: Scalar,
    format: NumberFormat,
    z0: Scalar,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            frequency_scale: 1e9,
            format: NumberFormat::MagAngle,
            z0: DEFAULT_REFERENCE_IMPEDANCE,
        }
    }
}

fn parse_number(token: &str, line: usize) -> Result<Scalar, TouchstoneError> {
    token.parse().map_err(|_| TouchstoneError::InvalidNumber {
        line,
        token: token.to_owned(),
    })
}

fn parse_options(body: &str, line: usize) -> Result<Options, TouchstoneError> {
    let mut options = Options::default();
    let tokens: Vec<String> = body.split_whitespace().map(str::to_uppercase).collect();
    let mut i = 0;
    while i < tokens.len() {
        match tokens[i].as_str() {
            "HZ" => options.frequency_scale = 1.0,
            "KHZ" => options.frequency_scale = 1e3,
            "MHZ" => options.frequency_scale = 1e6,
            "GHZ" => options.frequency_scale = 1e9,
            "S" => {}
            "Y" | "Z" | "H" | "G" => {
                return Err(TouchstoneError::UnsupportedParameter {
                    line,
                    kind: tokens[i].clone(),
                })
            }
            "RI" => options.format = NumberFormat::RealImag,
            "MA" => options.format = NumberFormat::MagAngle,
            "DB" => options.format = NumberFormat::DbAngle,
            "R" => {
                let value = tokens
                    .get(i + 1)
                    .ok_or(TouchstoneError::MissingReferenceImpedance { line })?;
                options.z0 = parse_number(value, line)?;
                i += 1;
            }
            other => {
                return Err(TouchstoneError::UnsupportedFormat {
                    line,
                    format: other.to_owned(),
                })
            }
        }
        i += 1;
    }
    Ok(options)
}

/// Parsed Touchstone content.
#[derive(Debug, Clone)]
pub struct Touchstone {
    /// Number of ports.
    pub port_count: usize,
    /// Reference impedance shared by all ports (Ω).
    pub z0: Scalar,
    /// Frequencies in Hz.
    pub frequencies: Vec<Scalar>,
    /// One `port_count × port_count` S matrix per frequency.
    pub sparams: Vec<DMatrix<C>>,
}

impl Touchstone {
    /// Parses `contents` as `port_count`-port Touchstone data.
    pub fn parse(contents: &str, port_count: usize) -> Result<Self, TouchstoneError> {
        if port_count == 0 {
            return Err(TouchstoneError::ZeroPorts);
        }
        let per_sample = 1 + 2 * port_count * port_count;
        let mut options = Options::default();
        let mut pending: Vec<Scalar> = Vec::with_capacity(per_sample);
        let mut frequencies = Vec::new();
        let mut sparams = Vec::new();

        'lines: for (index, raw) in contents.lines().enumerate() {
            let line = index + 1;
            let text = raw.split('!').next().unwrap_or_default().trim();
            if text.is_empty() {
                continue;
            }
            if let Some(body) = text.strip_prefix('#') {
                options = parse_options(body, line)?;
                continue;
            }
            for token in text.split_whitespace() {
                let value = parse_number(token, line)?;
                if pending.is_empty() {
                    let f = value * options.frequency_scale;
                    // Only two-port files carry a trailing noise block.
                    if port_count == 2 && frequencies.last().is_some_and(|&last| f <= last) {
                        debug!(line, "frequency restarts, skipping noise block");
                        break 'lines;
                    }
                }
                pending.push(value);
                if pending.len() == per_sample {
                    frequencies.push(pending[0] * options.frequency_scale);
                    sparams.push(Self::sample_matrix(&pending[1..], port_count, options.format));
                    pending.clear();
                }
            }
        }

        if !pending.is_empty() {
            return Err(TouchstoneError::Truncated {
                got: pending.len(),
                expected: per_sample,
            });
        }
        if frequencies.is_empty() {
            return Err(TouchstoneError::Empty);
        }
        Ok(Self {
            port_count,
            z0: options.z0,
            frequencies,
            sparams,
        })
    }

    fn sample_matrix(values: &[Scalar], n: usize, format: NumberFormat) -> DMatrix<C> {
        let mut m = DMatrix::zeros(n, n);
        for (k, pair) in values.chunks_exact(2).enumerate() {
            let (row, col) = if n == 2 { (k % 2, k / 2) } else { (k / n, k % n) };
            m[(row, col)] = format.complex(pair[0], pair[1]);
        }
        m
    }

    /// Reads a `.sNp` file, taking the port count from its extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TouchstoneError> {
        let path = path.as_ref();
        let port_count = port_count_from_path(path)?;
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents, port_count)
    }

    /// Converts into a [`Network`], rejecting unsupported port counts.
    pub fn into_network(self, name: impl Into<String>) -> Result<Network, ExtractionError> {
        Network::from_sparams(
            name,
            self.frequencies,
            self.sparams,
            vec![self.z0; self.port_count],
        )
    }
}

/// Port count from a `.sNp` extension, e.g. `coil.s2p` gives 2.
pub fn port_count_from_path(path: &Path) -> Result<usize, TouchstoneError> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .and_then(|e| {
            e.strip_prefix('s')
                .and_then(|rest| rest.strip_suffix('p'))
                .and_then(|n| n.parse().ok())
        })
        .ok_or_else(|| TouchstoneError::UnknownExtension(path.display().to_string()))
}

/// Loads a Touchstone file as a [`Network`] named after the file stem.
pub fn load_network(path: impl AsRef<Path>) -> Result<Network, ExtractionError> {
    let path = path.as_ref();
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Touchstone::from_file(path)?.into_network(name)
}
