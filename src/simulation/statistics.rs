//! Statistics collection and reporting
//!
//! This module aggregates the per-customer results of one scenario into totals
//! and averages, and renders simulated minutes for display.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::simulation::AssignmentResult;
use crate::store::Minutes;

/// Aggregate figures for one simulated scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioStatistics {
    /// Number of customers served
    pub customer_count: usize,
    /// Number of rooms in the pool
    pub room_count: usize,
    /// Items across all customers
    pub total_items: u64,
    /// Room minutes used across all customers
    pub total_usage_time: Minutes,
    /// Minutes waited across all customers
    pub total_wait_time: Minutes,
    /// Longest single wait
    pub max_wait_time: Minutes,
    /// Latest exit time, 0 when nobody was served
    pub total_elapsed_time: Minutes,
    /// Customers served by each room, indexed by room
    pub customers_per_room: Vec<usize>,
}

impl ScenarioStatistics {
    /// Aggregate a scenario's results over a pool of `room_count` rooms
    pub fn from_results(results: &[AssignmentResult], room_count: usize) -> Self {
        let mut stats = Self {
            customer_count: results.len(),
            room_count,
            total_items: 0,
            total_usage_time: 0,
            total_wait_time: 0,
            max_wait_time: 0,
            total_elapsed_time: 0,
            customers_per_room: vec![0; room_count],
        };

        for result in results {
            stats.total_items += u64::from(result.items);
            stats.total_usage_time += result.usage_time;
            stats.total_wait_time += result.wait_time;
            stats.max_wait_time = stats.max_wait_time.max(result.wait_time);
            stats.total_elapsed_time = stats.total_elapsed_time.max(result.exit_time);
            if let Some(served) = stats.customers_per_room.get_mut(result.room) {
                *served += 1;
            }
        }

        stats
    }

    fn mean(&self, total: u64) -> f64 {
        if self.customer_count == 0 {
            0.0
        } else {
            total as f64 / self.customer_count as f64
        }
    }

    /// Average items per customer, 0 when nobody was served
    pub fn average_items(&self) -> f64 {
        self.mean(self.total_items)
    }

    /// Average room usage in minutes, 0 when nobody was served
    pub fn average_usage_time(&self) -> f64 {
        self.mean(self.total_usage_time)
    }

    /// Average wait in minutes, 0 when nobody was served
    pub fn average_wait_time(&self) -> f64 {
        self.mean(self.total_wait_time)
    }

    /// Share of the elapsed time the rooms were occupied, as a percentage
    pub fn room_utilization_percentage(&self) -> f64 {
        let capacity = self.total_elapsed_time * self.room_count as u64;
        if capacity == 0 {
            0.0
        } else {
            self.total_usage_time as f64 / capacity as f64 * 100.0
        }
    }

    /// Multi-line summary for the given 1-based scenario number
    pub fn summary(&self, scenario_number: usize) -> String {
        format!(
            "Scenario {}:\n\
             Customers: {}\n\
             Dressing Rooms: {}\n\
             Avg Items per Customer: {:.2}\n\
             Avg Usage Time: {}\n\
             Avg Wait Time: {}\n\
             Total Time Elapsed: {}",
            scenario_number,
            self.customer_count,
            self.room_count,
            self.average_items(),
            format_minutes(self.average_usage_time()),
            format_minutes(self.average_wait_time()),
            format_minutes(self.total_elapsed_time as f64),
        )
    }
}

impl fmt::Display for ScenarioStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} customers, {} rooms | avg items {:.2} | avg usage {} | avg wait {} | elapsed {}",
            self.customer_count,
            self.room_count,
            self.average_items(),
            format_minutes(self.average_usage_time()),
            format_minutes(self.average_wait_time()),
            format_minutes(self.total_elapsed_time as f64),
        )
    }
}

/// Render simulated minutes as `"Xh Ym"` from one hour up, else `"Ym"`.
///
/// The value is rounded to whole minutes before it is split, so 119.6 renders
/// as `"2h 0m"`. Negative and non-finite inputs render as `"0m"`.
pub fn format_minutes(minutes: f64) -> String {
    let total = if minutes.is_finite() && minutes > 0.0 { minutes.round() as u64 } else { 0 };
    let hours = total / 60;
    let mins = total % 60;

    if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}
