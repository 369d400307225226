//! Fitting Room Simulator
//!
//! A deterministic simulation of store customers sharing a fixed pool of fitting
//! rooms, plus a small benchmark of merge sort variants.
//!
//! # Overview
//!
//! Customers are served strictly in arrival order. Each takes the room that
//! becomes free soonest (lowest index on ties), waits for it if needed, and stays
//! for the sum of its per-item usage times. The per-item duration is injected, so
//! runs are reproducible with a seed or a fixed closure.
//!
//! ## Key Features
//!
//! - **Room assignment**: greedy least-soonest-available room policy
//! - **Scenario driver**: default, file-based, CLI or interactive scenarios
//! - **Statistics**: average items, usage and wait time, total elapsed time
//! - **Reports**: text summaries or JSON, optionally with per-customer timelines
//! - **Sort benchmark**: merge sort, insertion sort cutoff, ordered-halves merge skip
//!
//! ## Quick Start
//!
//! ```rust
//! use fitting_room_simulator::*;
//!
//! let config = SimulationConfig {
//!     scenarios: vec![ScenarioConfig::new(10, 3, 0)],
//!     seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let mut orchestrator = SimulationOrchestrator::new(config)?;
//! let reports = orchestrator.run_all()?;
//! println!("{}", reports[0].render_text());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: identifiers, enums and configuration
//! - [`store`]: customers and the room pool
//! - [`simulation`]: simulator, statistics, reports and orchestration
//! - [`benchmark`]: merge sort variants and their timing harness
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌──────────────┐
//! │   Types     │    │    Store    │    │  Simulation  │
//! │             │    │             │    │              │
//! │ Identifiers │◄───┤ Customers   │◄───┤ Simulator    │
//! │ Enums       │    │ Room pool   │    │ Statistics   │
//! │ Config      │    │             │    │ Orchestrator │
//! └─────────────┘    └─────────────┘    └──────────────┘
//!
//! ┌─────────────┐
//! │  Benchmark  │   (independent of the simulation)
//! └─────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod benchmark;
pub mod simulation;
pub mod store;
pub mod types;

// Core types and identifiers
pub use types::{
    CliArgs, ConfigError, ConfigValidationError, CustomerId, ItemCountPolicy, OutputFormat, RunId,
    ScenarioConfig, SimulationConfig,
};

// Store model
pub use store::{Customer, CustomerGenerator, Minutes, RoomPool};

// Simulation types and functionality
pub use simulation::{
    simulate, AssignmentResult, LoggingConfig, RandomUsageTime, RoomAssignmentSimulator,
    ScenarioReport, ScenarioStatistics, SimulationError, SimulationOrchestrator, SimulationResult,
    SimulationRun, UsageTimeSource,
};

// Benchmark types and functionality
pub use benchmark::{BenchmarkReport, BenchmarkRunner, SortVariant};
