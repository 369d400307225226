//! Room assignment simulator
//!
//! Customers are served strictly in arrival order. Each one takes the room that
//! becomes free soonest (lowest index on ties), waits for it if needed, and
//! occupies it for the sum of its per-item usage times.
//!
//! The simulation clock only advances to a customer's enter time, never to its
//! exit time, so a customer's wait is measured against room availability rather
//! than against a clock that runs through busy periods.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::simulation::{SimulationError, SimulationResult};
use crate::store::{Customer, Minutes, RoomPool};
use crate::types::CustomerId;

/// Shortest time a single item keeps a customer in the room
pub const MIN_MINUTES_PER_ITEM: Minutes = 1;

/// Longest time a single item keeps a customer in the room
pub const MAX_MINUTES_PER_ITEM: Minutes = 3;

/// Source of per-item usage durations
pub trait UsageTimeSource {
    /// Minutes spent trying on the next item
    fn next_item_minutes(&mut self) -> Minutes;
}

impl<F> UsageTimeSource for F
where
    F: FnMut() -> Minutes,
{
    fn next_item_minutes(&mut self) -> Minutes {
        self()
    }
}

/// Uniform per-item usage time in `[MIN_MINUTES_PER_ITEM, MAX_MINUTES_PER_ITEM]`
#[derive(Debug)]
pub struct RandomUsageTime<R> {
    rng: R,
}

impl<R: Rng> RandomUsageTime<R> {
    /// Draw usage times from the given generator
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomUsageTime<rand::rngs::StdRng> {
    /// Seeded source for reproducible runs
    pub fn with_seed(seed: u64) -> Self {
        use rand::SeedableRng;
        Self::new(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> UsageTimeSource for RandomUsageTime<R> {
    fn next_item_minutes(&mut self) -> Minutes {
        self.rng.gen_range(MIN_MINUTES_PER_ITEM..=MAX_MINUTES_PER_ITEM)
    }
}

/// Room usage timeline for one customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentResult {
    /// Customer this result belongs to
    pub customer_id: CustomerId,
    /// Items the customer brought in
    pub items: u32,
    /// Index of the room the customer used
    pub room: usize,
    /// Minutes spent waiting for the room
    pub wait_time: Minutes,
    /// Minutes spent in the room
    pub usage_time: Minutes,
    /// Minute the customer entered the room
    pub enter_time: Minutes,
    /// Minute the customer left the room
    pub exit_time: Minutes,
}

/// Everything a single simulation pass produces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRun {
    /// One result per customer, in arrival order
    pub results: Vec<AssignmentResult>,
    /// Room release times after the last customer
    pub rooms: RoomPool,
}

impl SimulationRun {
    /// Latest exit time, 0 when nobody was served
    pub fn total_elapsed(&self) -> Minutes {
        self.results.iter().map(|r| r.exit_time).max().unwrap_or(0)
    }
}

/// Greedy least-soonest-available room assignment over a fixed pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomAssignmentSimulator {
    room_count: usize,
}

impl RoomAssignmentSimulator {
    /// Create a simulator for `room_count` rooms; at least one room is required
    pub fn new(room_count: usize) -> SimulationResult<Self> {
        if room_count == 0 {
            return Err(SimulationError::invalid_configuration(
                "room count must be at least 1, got 0",
            ));
        }
        Ok(Self { room_count })
    }

    /// Number of rooms in the pool
    pub fn room_count(&self) -> usize {
        self.room_count
    }

    /// Serve every customer in order and return their timelines
    #[instrument(skip(self, customers, usage), fields(rooms = self.room_count, customers = customers.len()))]
    pub fn run<U>(&self, customers: &[Customer], usage: &mut U) -> SimulationRun
    where
        U: UsageTimeSource + ?Sized,
    {
        let mut rooms = RoomPool::new(self.room_count);
        let mut results = Vec::with_capacity(customers.len());
        let mut current_time: Minutes = 0;

        for customer in customers {
            let (room, available_at) = rooms.soonest_available();
            let wait_time = available_at.saturating_sub(current_time);
            let usage_time: Minutes =
                (0..customer.items).map(|_| usage.next_item_minutes()).sum();

            let enter_time = current_time + wait_time;
            let exit_time = enter_time + usage_time;
            rooms.occupy_until(room, exit_time);

            debug!(
                customer = %customer.id,
                room,
                wait_time,
                enter_time,
                exit_time,
                "Assigned room"
            );

            results.push(AssignmentResult {
                customer_id: customer.id,
                items: customer.items,
                room,
                wait_time,
                usage_time,
                enter_time,
                exit_time,
            });

            current_time = current_time.max(enter_time);
        }

        SimulationRun { results, rooms }
    }
}

/// Simulate `customers` over `room_count` rooms, returning one result per customer
pub fn simulate<U>(
    customers: &[Customer],
    room_count: usize,
    usage: &mut U,
) -> SimulationResult<Vec<AssignmentResult>>
where
    U: UsageTimeSource + ?Sized,
{
    let simulator = RoomAssignmentSimulator::new(room_count)?;
    Ok(simulator.run(customers, usage).results)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(minutes: Minutes) -> impl FnMut() -> Minutes {
        move || minutes
    }

    fn customers(items: &[u32]) -> Vec<Customer> {
        items
            .iter()
            .enumerate()
            .map(|(i, &n)| Customer::new(CustomerId::from_position(i), n))
            .collect()
    }

    #[test]
    fn test_zero_rooms_is_rejected() {
        let err = RoomAssignmentSimulator::new(0).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidConfiguration(_)));

        assert!(simulate(&customers(&[1]), 0, &mut fixed(1)).is_err());
    }

    #[test]
    fn test_empty_customer_list() {
        let simulator = RoomAssignmentSimulator::new(2).unwrap();
        let run = simulator.run(&[], &mut fixed(2));
        assert!(run.results.is_empty());
        assert_eq!(run.total_elapsed(), 0);
        assert_eq!(run.rooms.as_slice(), &[0, 0]);
    }

    #[test]
    fn test_single_room_serves_sequentially() {
        let simulator = RoomAssignmentSimulator::new(1).unwrap();
        let run = simulator.run(&customers(&[1, 1, 1]), &mut fixed(2));

        let enters: Vec<_> = run.results.iter().map(|r| r.enter_time).collect();
        let exits: Vec<_> = run.results.iter().map(|r| r.exit_time).collect();
        let waits: Vec<_> = run.results.iter().map(|r| r.wait_time).collect();
        assert_eq!(enters, vec![0, 2, 4]);
        assert_eq!(exits, vec![2, 4, 6]);
        // the clock trails one customer behind, so each later wait is one usage period
        assert_eq!(waits, vec![0, 2, 2]);
    }

    #[test]
    fn test_usage_time_sums_items() {
        let simulator = RoomAssignmentSimulator::new(1).unwrap();
        let mut durations = [1u64, 3, 2, 2].into_iter();
        let mut usage = move || durations.next().unwrap_or(1);
        let run = simulator.run(&customers(&[3, 1]), &mut usage);

        assert_eq!(run.results[0].usage_time, 6);
        assert_eq!(run.results[1].usage_time, 2);
        assert_eq!(run.results[1].enter_time, 6);
    }

    #[test]
    fn test_least_soonest_room_with_lowest_index_ties() {
        let simulator = RoomAssignmentSimulator::new(3).unwrap();
        let run = simulator.run(&customers(&[2, 1, 3, 1, 1]), &mut fixed(1));

        // rooms free at [0,0,0] -> 0, [2,0,0] -> 1, [2,1,0] -> 2, [2,1,3] -> 1, [2,2,3] -> 0
        let rooms: Vec<_> = run.results.iter().map(|r| r.room).collect();
        assert_eq!(rooms, vec![0, 1, 2, 1, 0]);
        assert_eq!(run.rooms.as_slice(), &[3, 2, 3]);
        assert_eq!(run.total_elapsed(), 3);
    }

    #[test]
    fn test_random_usage_time_in_range() {
        let mut usage = RandomUsageTime::with_seed(9);
        for _ in 0..300 {
            let minutes = usage.next_item_minutes();
            assert!((MIN_MINUTES_PER_ITEM..=MAX_MINUTES_PER_ITEM).contains(&minutes));
        }
    }

    #[test]
    fn test_trait_object_usage_source() {
        let mut source = RandomUsageTime::with_seed(1);
        let usage: &mut dyn UsageTimeSource = &mut source;
        let results = simulate(&customers(&[2, 2]), 2, usage).unwrap();
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.wait_time == 0));
    }
}
