//! Simulation orchestration and control
//!
//! This module contains the room assignment simulator, statistics, reports,
//! the orchestrator that runs scenarios, interactive scenario entry, logging
//! setup and error handling.
//!
//! # Overview
//!
//! - **RoomAssignmentSimulator**: serves customers in order, each taking the room free soonest
//! - **ScenarioStatistics**: totals and averages over one scenario's results
//! - **SimulationOrchestrator**: validates a run and drives its scenarios one after another
//! - **ScenarioReport**: text and JSON rendering of a scenario's outcome
//! - **SimulationError**: error handling for simulation operations
//!
//! # Usage Example
//!
//! ```rust
//! use fitting_room_simulator::simulation::*;
//! use fitting_room_simulator::store::Customer;
//! use fitting_room_simulator::types::CustomerId;
//!
//! let customers: Vec<Customer> =
//!     (0..3).map(|i| Customer::new(CustomerId::from_position(i), 1)).collect();
//!
//! let mut two_minutes = || 2u64;
//! let results = simulate(&customers, 1, &mut two_minutes).unwrap();
//!
//! let enter_times: Vec<_> = results.iter().map(|r| r.enter_time).collect();
//! assert_eq!(enter_times, vec![0, 2, 4]);
//! ```

pub mod error;
pub mod logging;
pub mod orchestrator;
pub mod prompt;
pub mod report;
pub mod simulator;
pub mod statistics;

// Re-export all public types for convenience
pub use error::*;
pub use logging::*;
pub use orchestrator::*;
pub use prompt::*;
pub use report::*;
pub use simulator::*;
pub use statistics::*;
