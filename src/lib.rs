#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Named constants and defaults of the extraction procedure.
pub mod constants;
/// Shared numeric aliases and 2×2 helpers.
pub mod math;
/// Run configuration.
pub mod config;
/// Port-parameter records of devices under test.
pub mod network;
/// File readers for port-parameter data.
pub mod io;
/// Conversion and equivalent-circuit extraction.
pub mod extraction;
/// Axis limits for rendering compared devices.
pub mod limits;
/// End-to-end extraction pipeline.
pub mod pipeline;
/// Synthetic networks from lumped models.
pub mod synth;
/// Error types shared between submodules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
