//! Customers and customer generation
//!
//! Customers arrive in order, each carrying a fixed number of items into the
//! fitting room.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::types::{
    CustomerId, ItemCountPolicy, ScenarioConfig, MAX_RANDOM_ITEMS, MIN_RANDOM_ITEMS,
};

/// A customer waiting to use a fitting room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Arrival-order identifier, starting at 1
    pub id: CustomerId,
    /// Number of items brought into the room, in `[1, 20]`
    pub items: u32,
}

impl Customer {
    /// Create a new customer
    pub fn new(id: CustomerId, items: u32) -> Self {
        Self { id, items }
    }
}

/// Generator for the arrivals of a scenario
pub struct CustomerGenerator {
    rng: Box<dyn rand::RngCore>,
}

impl fmt::Debug for CustomerGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomerGenerator").finish()
    }
}

impl CustomerGenerator {
    /// Create a new customer generator
    pub fn new() -> Self {
        Self { rng: Box::new(rand::thread_rng()) }
    }

    /// Create a new customer generator with a specific seed for reproducible results
    pub fn with_seed(seed: u64) -> Self {
        use rand::SeedableRng;
        Self { rng: Box::new(rand::rngs::StdRng::seed_from_u64(seed)) }
    }

    /// Generate the customers of a scenario in arrival order
    pub fn generate_customers(&mut self, scenario: &ScenarioConfig) -> Vec<Customer> {
        let policy = scenario.item_policy();
        let customers: Vec<Customer> = (0..scenario.customers)
            .map(|position| Customer::new(CustomerId::from_position(position), self.draw_items(policy)))
            .collect();

        debug!(
            "Generated {} customers with item policy {}",
            customers.len(),
            policy
        );
        customers
    }

    /// Item count for one customer under the given policy
    pub fn draw_items(&mut self, policy: ItemCountPolicy) -> u32 {
        match policy {
            ItemCountPolicy::Random => self.rng.gen_range(MIN_RANDOM_ITEMS..=MAX_RANDOM_ITEMS),
            ItemCountPolicy::Fixed(items) => items,
        }
    }
}

impl Default for CustomerGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_sequential() {
        let mut generator = CustomerGenerator::with_seed(1);
        let customers = generator.generate_customers(&ScenarioConfig::new(5, 2, 0));

        let ids: Vec<u32> = customers.iter().map(|c| c.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_random_items_within_range() {
        let mut generator = CustomerGenerator::with_seed(42);
        let customers = generator.generate_customers(&ScenarioConfig::new(500, 3, 0));

        assert!(customers.iter().all(|c| (1..=6).contains(&c.items)));
        // 500 draws over six values should hit both ends
        assert!(customers.iter().any(|c| c.items == 1));
        assert!(customers.iter().any(|c| c.items == 6));
    }

    #[test]
    fn test_fixed_items_are_capped() {
        let mut generator = CustomerGenerator::with_seed(7);
        let customers = generator.generate_customers(&ScenarioConfig::new(3, 1, 99));
        assert!(customers.iter().all(|c| c.items == 20));

        let customers = generator.generate_customers(&ScenarioConfig::new(3, 1, 4));
        assert!(customers.iter().all(|c| c.items == 4));
    }

    #[test]
    fn test_same_seed_same_customers() {
        let scenario = ScenarioConfig::new(50, 3, 0);
        let first = CustomerGenerator::with_seed(11).generate_customers(&scenario);
        let second = CustomerGenerator::with_seed(11).generate_customers(&scenario);
        assert_eq!(first, second);
    }
}
