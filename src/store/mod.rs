//! Store model: customers and the fitting room pool
//!
//! # Overview
//!
//! - **Customer**: an arrival with an immutable item count
//! - **CustomerGenerator**: builds a scenario's arrivals from its item-count policy
//! - **RoomPool**: per-room "free again at" times and the least-soonest-available lookup
//!
//! # Usage Example
//!
//! ```rust
//! use fitting_room_simulator::store::*;
//! use fitting_room_simulator::types::ScenarioConfig;
//!
//! let mut generator = CustomerGenerator::with_seed(3);
//! let customers = generator.generate_customers(&ScenarioConfig::new(4, 2, 5));
//! assert!(customers.iter().all(|c| c.items == 5));
//!
//! let mut pool = RoomPool::new(2);
//! pool.occupy_until(0, 9);
//! assert_eq!(pool.soonest_available(), (1, 0));
//! ```

pub mod customer;
pub mod room;

// Re-export all public types for convenience
pub use customer::{Customer, CustomerGenerator};
pub use room::{Minutes, RoomPool};
