//! Enumeration types for the fitting room simulator
//!
//! This module contains the item-count policy applied when customers are created
//! and the output formats the binary can print reports in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest number of items a single customer may bring in
pub const MAX_ITEMS_PER_CUSTOMER: u32 = 20;

/// Smallest item count drawn by the random policy
pub const MIN_RANDOM_ITEMS: u32 = 1;

/// Largest item count drawn by the random policy
pub const MAX_RANDOM_ITEMS: u32 = 6;

/// How many items each customer in a scenario carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCountPolicy {
    /// Uniform random count in `[MIN_RANDOM_ITEMS, MAX_RANDOM_ITEMS]` per customer
    Random,
    /// The same count for every customer, capped at `MAX_ITEMS_PER_CUSTOMER`
    Fixed(u32),
}

impl ItemCountPolicy {
    /// Build the policy from the numeric setting, where `0` means random
    pub fn from_setting(setting: u32) -> Self {
        if setting == 0 {
            ItemCountPolicy::Random
        } else {
            ItemCountPolicy::Fixed(setting.min(MAX_ITEMS_PER_CUSTOMER))
        }
    }

    /// Numeric setting this policy corresponds to
    pub fn setting(&self) -> u32 {
        match self {
            ItemCountPolicy::Random => 0,
            ItemCountPolicy::Fixed(items) => *items,
        }
    }
}

impl Default for ItemCountPolicy {
    fn default() -> Self {
        ItemCountPolicy::Random
    }
}

impl fmt::Display for ItemCountPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemCountPolicy::Random => {
                write!(f, "random ({}-{})", MIN_RANDOM_ITEMS, MAX_RANDOM_ITEMS)
            }
            ItemCountPolicy::Fixed(items) => write!(f, "{} per customer", items),
        }
    }
}

/// Output formats for scenario reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human readable summary text
    Text,
    /// JSON format for structured data
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "TEXT"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}
