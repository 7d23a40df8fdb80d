//! Error types shared between submodules.

use thiserror::Error;

use crate::io::touchstone::TouchstoneError;
use crate::math::Scalar;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The network has a port count other than one or two. Fatal for the whole run.
    #[error("network '{name}': S-parameter data with {ports} ports is not supported")]
    UnsupportedPortCount {
        /// Network name.
        name: String,
        /// Port count found in the data.
        ports: usize,
    },
    /// Network data is internally inconsistent (lengths, ordering, empty axis).
    #[error("network '{name}': {reason}")]
    MalformedNetwork {
        /// Network name.
        name: String,
        /// What is wrong with it.
        reason: String,
    },
    /// The pipeline was started without any network.
    #[error("no networks to extract")]
    EmptyNetworkSet,
    /// The frequency spans of the networks do not overlap above the floor.
    #[error("no common frequency window: fmin {fmin:.6e} Hz exceeds fmax {fmax:.6e} Hz")]
    InvalidWindow {
        /// Lower bound in Hz.
        fmin: Scalar,
        /// Upper bound in Hz.
        fmax: Scalar,
    },
    /// A network has no sample inside the common window.
    #[error("network '{name}' has no samples in the window {fmin:.6e}..={fmax:.6e} Hz")]
    EmptyWindow {
        /// Network name.
        name: String,
        /// Lower bound in Hz.
        fmin: Scalar,
        /// Upper bound in Hz.
        fmax: Scalar,
    },
    /// Raised when loading Touchstone data fails, including I/O errors.
    #[error(transparent)]
    Touchstone(#[from] TouchstoneError),
}
