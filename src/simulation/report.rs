//! Scenario reports
//!
//! A report bundles one scenario's configuration, statistics and (optionally)
//! its per-customer timeline, and knows how to render itself as text or JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::simulation::statistics::format_minutes;
use crate::simulation::{AssignmentResult, ScenarioStatistics, SimulationResult};
use crate::types::{ItemCountPolicy, OutputFormat, RunId, ScenarioConfig};

/// Outcome of one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    /// Run this scenario belongs to
    pub run_id: RunId,
    /// 1-based position of the scenario in the run
    pub scenario_number: usize,
    /// Parameters the scenario was run with
    pub scenario: ScenarioConfig,
    /// Item-count policy derived from the scenario's setting
    pub item_policy: ItemCountPolicy,
    /// Aggregate figures
    pub statistics: ScenarioStatistics,
    /// Per-customer timeline, empty unless requested
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub customers: Vec<AssignmentResult>,
    /// When the report was produced
    pub generated_at: DateTime<Utc>,
}

impl ScenarioReport {
    /// Text rendering: the summary block, followed by the timeline if present
    pub fn render_text(&self) -> String {
        let mut out = self.statistics.summary(self.scenario_number);
        if !self.customers.is_empty() {
            out.push('\n');
            out.push_str(&timeline_table(&self.customers));
        }
        out
    }
}

/// Fixed-width table of each customer's room usage
pub fn timeline_table(results: &[AssignmentResult]) -> String {
    let mut table = String::new();
    let _ = writeln!(
        table,
        "{:>8} {:>5} {:>4} {:>8} {:>8} {:>8} {:>8}",
        "Customer", "Items", "Room", "Wait", "Usage", "Enter", "Exit"
    );
    for r in results {
        let _ = writeln!(
            table,
            "{:>8} {:>5} {:>4} {:>8} {:>8} {:>8} {:>8}",
            r.customer_id,
            r.items,
            r.room + 1,
            format_minutes(r.wait_time as f64),
            format_minutes(r.usage_time as f64),
            format_minutes(r.enter_time as f64),
            format_minutes(r.exit_time as f64),
        );
    }
    table
}

/// Render all reports of a run in the requested format
pub fn render_reports(reports: &[ScenarioReport], format: OutputFormat) -> SimulationResult<String> {
    match format {
        OutputFormat::Text => Ok(reports
            .iter()
            .map(|report| {
                format!("--- Running Scenario {} ---\n{}", report.scenario_number, report.render_text())
            })
            .collect::<Vec<_>>()
            .join("\n\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(reports)?),
    }
}
