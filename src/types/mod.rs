//! Core types and identifiers for the fitting room simulator
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the simulation.
//!
//! # Overview
//!
//! - **Identifiers**: customer numbers and UUID-based run identifiers
//! - **Enums**: item-count policy and output formats
//! - **Configuration**: scenario configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use fitting_room_simulator::types::*;
//!
//! let scenario = ScenarioConfig::new(12, 2, 0);
//! assert_eq!(scenario.item_policy(), ItemCountPolicy::Random);
//!
//! let config = SimulationConfig {
//!     scenarios: vec![scenario],
//!     seed: Some(7),
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
