// src/errors.rs

use std::fmt;
use std::error::Error;

/// Represents errors that can occur while loading or sanity-checking a configuration.
///
/// The performance computation itself never fails; these only surface from
/// [`AircraftConfig::from_json`](crate::config::AircraftConfig::from_json) and
/// [`AircraftConfig::validate`](crate::config::AircraftConfig::validate).
#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    /// Indicates a rotor count other than 3, 4, 6 or 8.
    InvalidRotorCount(u32),
    /// Indicates a battery without any series cells.
    InvalidCellCount(u32),
    /// Indicates a non-positive battery capacity.
    InvalidCapacity,
    /// Indicates an unusable propeller geometry.
    InvalidPropeller(String),
    /// Indicates an unusable motor parameter.
    InvalidMotor(String),
    /// A configuration document that could not be parsed.
    Parse(String),
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CalcError::InvalidRotorCount(n) => write!(f, "Invalid rotor count: {} (expected 3, 4, 6 or 8)", n),
            CalcError::InvalidCellCount(n) => write!(f, "Invalid cell count: {}", n),
            CalcError::InvalidCapacity => write!(f, "Invalid battery capacity"),
            CalcError::InvalidPropeller(msg) => write!(f, "Invalid propeller: {}", msg),
            CalcError::InvalidMotor(msg) => write!(f, "Invalid motor: {}", msg),
            CalcError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl Error for CalcError {}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::Parse(err.to_string())
    }
}
