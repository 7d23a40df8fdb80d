//! Readers for port-parameter files.

pub mod touchstone;

pub use touchstone::{Touchstone, TouchstoneError};
