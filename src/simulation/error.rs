//! Error types and handling
//!
//! This module contains error types and error handling for the simulation.

use thiserror::Error;

use crate::types::{ConfigError, ConfigValidationError};

/// Errors that can occur during simulation
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Scenario parameters are unusable; raised before any customer is simulated
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Interactive input could not be read
    #[error("Input error: {0}")]
    InputError(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl From<ConfigValidationError> for SimulationError {
    fn from(error: ConfigValidationError) -> Self {
        SimulationError::InvalidConfiguration(error.to_string())
    }
}

impl From<ConfigError> for SimulationError {
    fn from(error: ConfigError) -> Self {
        SimulationError::InvalidConfiguration(error.to_string())
    }
}

impl SimulationError {
    /// Create an invalid configuration error
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Create an input error
    pub fn input_error(msg: impl Into<String>) -> Self {
        Self::InputError(msg.into())
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            SimulationError::InvalidConfiguration(_) => "Configuration",
            SimulationError::InputError(_) => "Input",
            SimulationError::IoError(_) => "IO",
            SimulationError::SerializationError(_) => "Serialization",
        }
    }
}

/// Result type for simulation operations
pub type SimulationResult<T> = Result<T, SimulationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_creation() {
        let config_error = SimulationError::invalid_configuration("room count must be at least 1");
        assert!(matches!(config_error, SimulationError::InvalidConfiguration(_)));
        assert_eq!(
            config_error.to_string(),
            "Invalid configuration: room count must be at least 1"
        );

        let input_error = SimulationError::input_error("unexpected end of input");
        assert_eq!(input_error.to_string(), "Input error: unexpected end of input");
    }

    #[test]
    fn test_error_from_validation_error() {
        let validation = ConfigValidationError::InvalidRoomCount { scenario: 2, value: 0 };
        let error: SimulationError = validation.into();
        assert!(matches!(error, SimulationError::InvalidConfiguration(_)));
        assert!(error.to_string().contains("Scenario 2"));
    }

    #[test]
    fn test_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::UnexpectedEof, "closed");
        let sim_error: SimulationError = io_error.into();
        assert!(matches!(sim_error, SimulationError::IoError(_)));
        assert_eq!(sim_error.category(), "IO");
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(SimulationError::invalid_configuration("x").category(), "Configuration");
        assert_eq!(SimulationError::input_error("x").category(), "Input");
    }
}
