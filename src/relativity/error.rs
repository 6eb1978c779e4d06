//! Relativity engine errors

use std::fmt;

use thiserror::Error;

/// Result type for the relativity engine
pub type Result<T> = std::result::Result<T, RelativityError>;

/// The quantity an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Velocity,
    LorentzFactor,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Velocity => write!(f, "velocity"),
            Quantity::LorentzFactor => write!(f, "Lorentz factor"),
        }
    }
}

/// Errors produced by the relativity engine.
///
/// Every failure is terminal for the call that produced it: the same input
/// always fails the same way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RelativityError {
    /// Input lies outside the range the engine accepts.
    #[error("{quantity} {value} is outside the safe domain")]
    OutOfDomain { quantity: Quantity, value: f64 },

    /// A derived quantity exceeded the representable or safe range.
    #[error("{quantity} {value} overflows the safe range")]
    Overflow { quantity: Quantity, value: f64 },

    /// Simultaneity sample grid is malformed.
    #[error("invalid sample grid: {0}")]
    InvalidSampling(String),
}

impl RelativityError {
    pub(crate) fn velocity_out_of_domain(value: f64) -> Self {
        Self::OutOfDomain { quantity: Quantity::Velocity, value }
    }

    pub(crate) fn gamma_out_of_domain(value: f64) -> Self {
        Self::OutOfDomain { quantity: Quantity::LorentzFactor, value }
    }

    pub(crate) fn overflow(quantity: Quantity, value: f64) -> Self {
        Self::Overflow { quantity, value }
    }

    /// True for [`RelativityError::OutOfDomain`].
    pub fn is_out_of_domain(&self) -> bool {
        matches!(self, Self::OutOfDomain { .. })
    }

    /// True for [`RelativityError::Overflow`].
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow { .. })
    }
}
