//! Identifier types for the fitting room simulator
//!
//! Customers are numbered by arrival position, so their identifiers are plain
//! positive integers. Each simulation run gets a UUID-based identifier that ties
//! log lines and JSON reports together.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Identifier of a customer, 1-based in arrival order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub u32);

impl CustomerId {
    /// Identifier for the customer at the given zero-based arrival position
    pub fn from_position(position: usize) -> Self {
        Self(position as u32 + 1)
    }

    /// Raw numeric value
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a single invocation of the scenario runner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunId(pub Uuid);

impl RunId {
    /// Create a new random run ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RUN_{}", self.0.simple())
    }
}

impl Serialize for RunId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for RunId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let raw = s.strip_prefix("RUN_").unwrap_or(&s);
        let uuid = Uuid::parse_str(raw).map_err(serde::de::Error::custom)?;
        Ok(RunId(uuid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_id_from_position() {
        assert_eq!(CustomerId::from_position(0), CustomerId(1));
        assert_eq!(CustomerId::from_position(9).get(), 10);
        assert_eq!(CustomerId(7).to_string(), "7");
    }

    #[test]
    fn test_customer_id_serializes_as_number() {
        let json = serde_json::to_string(&CustomerId(3)).unwrap();
        assert_eq!(json, "3");
        let back: CustomerId = serde_json::from_str("3").unwrap();
        assert_eq!(back, CustomerId(3));
    }

    #[test]
    fn test_run_id_display_and_uniqueness() {
        let id = RunId::new();
        assert!(id.to_string().starts_with("RUN_"));
        assert_ne!(id, RunId::new());
    }

    #[test]
    fn test_run_id_deserialization_with_and_without_prefix() {
        let id = RunId::new();
        let json = serde_json::to_string(&id).unwrap();
        let back: RunId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);

        let raw = format!("\"{}\"", id.0);
        let back: RunId = serde_json::from_str(&raw).unwrap();
        assert_eq!(id, back);
    }
}
