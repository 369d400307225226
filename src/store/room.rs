//! Fitting room pool
//!
//! Tracks, for each room, the simulated minute at which it becomes free again.

use serde::{Deserialize, Serialize};

/// Simulated time, in whole minutes from the start of a scenario
pub type Minutes = u64;

/// A fixed pool of fitting rooms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomPool {
    available_at: Vec<Minutes>,
}

impl RoomPool {
    /// Create a pool where every room is free at minute 0
    pub fn new(room_count: usize) -> Self {
        Self { available_at: vec![0; room_count] }
    }

    /// Number of rooms in the pool
    pub fn room_count(&self) -> usize {
        self.available_at.len()
    }

    /// Room that becomes free earliest, with that time.
    ///
    /// Ties go to the lowest index. An empty pool reports room 0 free at 0;
    /// callers are expected to reject empty pools before simulating.
    pub fn soonest_available(&self) -> (usize, Minutes) {
        let mut soonest = 0;
        for index in 1..self.available_at.len() {
            if self.available_at[index] < self.available_at[soonest] {
                soonest = index;
            }
        }
        (soonest, self.available_at.get(soonest).copied().unwrap_or(0))
    }

    /// Mark a room as busy until the given minute
    pub fn occupy_until(&mut self, room: usize, until: Minutes) {
        self.available_at[room] = until;
    }

    /// Minute at which a room becomes free
    pub fn available_at(&self, room: usize) -> Option<Minutes> {
        self.available_at.get(room).copied()
    }

    /// Latest release time across all rooms, 0 if no room was ever used
    pub fn latest_release(&self) -> Minutes {
        self.available_at.iter().copied().max().unwrap_or(0)
    }

    /// All release times, indexed by room
    pub fn as_slice(&self) -> &[Minutes] {
        &self.available_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pool_is_free() {
        let pool = RoomPool::new(3);
        assert_eq!(pool.room_count(), 3);
        assert_eq!(pool.as_slice(), &[0, 0, 0]);
        assert_eq!(pool.latest_release(), 0);
    }

    #[test]
    fn test_soonest_available_prefers_lowest_index_on_ties() {
        let mut pool = RoomPool::new(4);
        pool.occupy_until(0, 5);
        pool.occupy_until(1, 3);
        pool.occupy_until(2, 3);
        pool.occupy_until(3, 8);
        assert_eq!(pool.soonest_available(), (1, 3));
    }

    #[test]
    fn test_occupy_updates_release_times() {
        let mut pool = RoomPool::new(2);
        pool.occupy_until(1, 12);
        assert_eq!(pool.available_at(1), Some(12));
        assert_eq!(pool.available_at(2), None);
        assert_eq!(pool.latest_release(), 12);
        assert_eq!(pool.soonest_available(), (0, 0));
    }

    #[test]
    fn test_empty_pool_lookup_does_not_panic() {
        let pool = RoomPool::new(0);
        assert_eq!(pool.soonest_available(), (0, 0));
        assert_eq!(pool.latest_release(), 0);
    }
}
