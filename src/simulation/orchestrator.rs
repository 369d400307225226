//! Main simulation orchestrator
//!
//! This module contains the SimulationOrchestrator, which validates a run's
//! configuration up front and then drives each scenario to completion, one after
//! another, with no simulation state shared between scenarios.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument};

use crate::simulation::{
    RandomUsageTime, RoomAssignmentSimulator, ScenarioReport, ScenarioStatistics,
    SimulationResult,
};
use crate::store::CustomerGenerator;
use crate::types::{RunId, ScenarioConfig, SimulationConfig};
use crate::sim_event;

/// Drives every scenario of a run
#[derive(Debug)]
pub struct SimulationOrchestrator {
    /// Configuration for the run
    config: SimulationConfig,
    /// Identifier stamped on every report
    run_id: RunId,
    /// Random number generator with optional seed
    rng: StdRng,
}

impl SimulationOrchestrator {
    /// Create a new orchestrator; fails with `InvalidConfiguration` before anything runs
    #[instrument(skip(config), fields(scenarios = config.scenarios.len()))]
    pub fn new(config: SimulationConfig) -> SimulationResult<Self> {
        config.validate()?;

        let rng = if let Some(seed) = config.seed {
            info!("Using deterministic seed: {}", seed);
            StdRng::seed_from_u64(seed)
        } else {
            debug!("Using entropy-based random seed");
            StdRng::from_entropy()
        };

        let run_id = RunId::new();
        info!(
            run_id = %run_id,
            "Orchestrator ready for {} scenarios, {} customers in total",
            config.scenarios.len(),
            config.total_customers()
        );

        Ok(Self { config, run_id, rng })
    }

    /// Identifier of this run
    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    /// Configuration this orchestrator runs
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run every configured scenario in order
    pub fn run_all(&mut self) -> SimulationResult<Vec<ScenarioReport>> {
        let scenarios = self.config.scenarios.clone();
        scenarios
            .iter()
            .enumerate()
            .map(|(index, scenario)| self.run_scenario(index + 1, scenario))
            .collect()
    }

    /// Generate the customers of one scenario and simulate them
    #[instrument(skip(self, scenario), fields(run_id = %self.run_id, customers = scenario.customers, rooms = scenario.rooms))]
    pub fn run_scenario(
        &mut self,
        scenario_number: usize,
        scenario: &ScenarioConfig,
    ) -> SimulationResult<ScenarioReport> {
        scenario.validate(scenario_number)?;
        let simulator = RoomAssignmentSimulator::new(scenario.rooms)?;

        let customers =
            CustomerGenerator::with_seed(self.rng.gen()).generate_customers(scenario);
        let mut usage = RandomUsageTime::new(&mut self.rng);
        let run = simulator.run(&customers, &mut usage);

        let statistics = ScenarioStatistics::from_results(&run.results, scenario.rooms);
        sim_event!(
            info,
            "Scenario complete",
            scenario = scenario_number,
            total_elapsed = statistics.total_elapsed_time,
            total_wait = statistics.total_wait_time,
        );

        Ok(ScenarioReport {
            run_id: self.run_id,
            scenario_number,
            scenario: *scenario,
            item_policy: scenario.item_policy(),
            statistics,
            customers: if self.config.show_customers { run.results } else { Vec::new() },
            generated_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::SimulationError;

    fn seeded(scenarios: Vec<ScenarioConfig>, seed: u64) -> SimulationConfig {
        SimulationConfig { scenarios, seed: Some(seed), ..Default::default() }
    }

    #[test]
    fn test_invalid_configuration_fails_before_running() {
        let config = seeded(vec![ScenarioConfig::new(5, 0, 0)], 1);
        let err = SimulationOrchestrator::new(config).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_default_run_produces_three_reports() {
        let mut orchestrator = SimulationOrchestrator::new(seeded(SimulationConfig::default().scenarios, 3)).unwrap();
        let reports = orchestrator.run_all().unwrap();

        assert_eq!(reports.len(), 3);
        let numbers: Vec<_> = reports.iter().map(|r| r.scenario_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert!(reports.iter().all(|r| r.run_id == orchestrator.run_id()));
        assert_eq!(reports[0].statistics.customer_count, 10);
        assert_eq!(reports[1].statistics.customer_count, 20);
        // timelines are only kept on request
        assert!(reports.iter().all(|r| r.customers.is_empty()));
    }

    #[test]
    fn test_same_seed_same_statistics() {
        let scenarios = vec![ScenarioConfig::new(30, 2, 0), ScenarioConfig::new(12, 4, 3)];
        let first = SimulationOrchestrator::new(seeded(scenarios.clone(), 77)).unwrap().run_all().unwrap();
        let second = SimulationOrchestrator::new(seeded(scenarios, 77)).unwrap().run_all().unwrap();

        let first: Vec<_> = first.into_iter().map(|r| r.statistics).collect();
        let second: Vec<_> = second.into_iter().map(|r| r.statistics).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_show_customers_keeps_timeline() {
        let config = SimulationConfig {
            show_customers: true,
            ..seeded(vec![ScenarioConfig::new(6, 2, 4)], 5)
        };
        let reports = SimulationOrchestrator::new(config).unwrap().run_all().unwrap();
        let timeline = &reports[0].customers;

        assert_eq!(timeline.len(), 6);
        assert!(timeline.iter().all(|r| r.items == 4));
        assert!(timeline.iter().all(|r| (4..=12).contains(&r.usage_time)));
    }
}
