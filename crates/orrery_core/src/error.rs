//! Error types for orrery configuration and sampling.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors raised at the edges of the engine.
///
/// The calculators themselves are total; only configuration and sampler
/// parameters can be rejected.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum OrreryError {
    /// Orbit or observer parameter outside its physical range.
    InvalidConfig(&'static str),
    /// Plot geometry that cannot map hours to pixels.
    InvalidPlot(&'static str),
    /// Sampling step of zero days.
    InvalidStep,
}

impl Display for OrreryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::InvalidPlot(msg) => write!(f, "invalid plot: {msg}"),
            Self::InvalidStep => write!(f, "sampling step must be at least one day"),
        }
    }
}

impl Error for OrreryError {}
