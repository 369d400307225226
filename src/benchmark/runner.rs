//! Benchmark data sets, timing and reporting

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::benchmark::sort::{is_sorted, SortVariant};
use crate::perf_span;

/// Exclusive upper bound of randomly generated values
pub const MAX_RANDOM_VALUE: u32 = 10_000;

/// Length of the sorted and reversed edge-case inputs
pub const EDGE_CASE_LEN: u32 = 1_000;

/// Random input sizes and their labels
pub const RANDOM_SIZES: [(&str, usize); 4] =
    [("Small", 10), ("Medium", 1_000), ("Large", 10_000), ("Very Large", 100_000)];

/// A named input to sort
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSet {
    /// Label printed in the report
    pub label: String,
    /// Values to sort; every measurement works on a copy
    pub values: Vec<u32>,
}

impl DataSet {
    /// Create a named data set
    pub fn new(label: impl Into<String>, values: Vec<u32>) -> Self {
        Self { label: label.into(), values }
    }
}

/// One timed sort
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Variant that was timed
    pub variant: SortVariant,
    /// Data set label
    pub label: String,
    /// Number of values sorted
    pub len: usize,
    /// Wall time spent sorting
    pub elapsed: Duration,
    /// Whether the output came back in order
    pub sorted: bool,
}

impl Measurement {
    /// Elapsed time in fractional milliseconds
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000.0
    }

    /// Report line, e.g. `"Large: 1.23ms for 10000 items"`
    pub fn line(&self) -> String {
        format!("{}: {:.2}ms for {} items", self.label, self.elapsed_ms(), self.len)
    }
}

/// Every measurement of one benchmark run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// Timings on random data, grouped by variant
    pub random: Vec<Measurement>,
    /// Timings on the sorted, reversed and empty inputs
    pub edge_cases: Vec<Measurement>,
}

impl BenchmarkReport {
    /// Whether every measured sort produced ordered output
    pub fn all_sorted(&self) -> bool {
        self.random.iter().chain(&self.edge_cases).all(|m| m.sorted)
    }

    /// Text rendering grouped the same way the runs were made
    pub fn render_text(&self) -> String {
        let mut sections = Vec::new();
        for variant in SortVariant::ALL {
            let lines: Vec<String> =
                self.random.iter().filter(|m| m.variant == variant).map(Measurement::line).collect();
            if !lines.is_empty() {
                sections.push(format!("{} Results:\n{}", variant, lines.join("\n")));
            }
        }
        if !self.edge_cases.is_empty() {
            let lines: Vec<String> = self.edge_cases.iter().map(Measurement::line).collect();
            sections.push(format!("Edge Case Results:\n{}", lines.join("\n")));
        }
        sections.join("\n\n")
    }
}

/// Generates inputs and times every sort variant against them
#[derive(Debug)]
pub struct BenchmarkRunner {
    rng: StdRng,
}

impl BenchmarkRunner {
    /// Runner with entropy-seeded data
    pub fn new() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    /// Runner with reproducible data
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// `len` uniform random values below `MAX_RANDOM_VALUE`
    pub fn generate_data(&mut self, len: usize) -> Vec<u32> {
        (0..len).map(|_| self.rng.gen_range(0..MAX_RANDOM_VALUE)).collect()
    }

    /// The labelled random inputs, one per entry of `RANDOM_SIZES`
    pub fn random_data_sets(&mut self) -> Vec<DataSet> {
        RANDOM_SIZES
            .iter()
            .map(|(label, len)| DataSet::new(*label, self.generate_data(*len)))
            .collect()
    }

    /// Sorted, reversed and empty inputs
    pub fn edge_case_data_sets() -> Vec<DataSet> {
        vec![
            DataSet::new("Sorted", (0..EDGE_CASE_LEN).collect()),
            DataSet::new("Reversed", (1..=EDGE_CASE_LEN).rev().collect()),
            DataSet::new("Empty", Vec::new()),
        ]
    }

    /// Time one variant on a copy of `data`
    pub fn measure(variant: SortVariant, data: &DataSet) -> Measurement {
        let _span = perf_span!("sort", variant = tracing::field::display(variant), len = data.values.len()).entered();

        let input = data.values.clone();
        let start = Instant::now();
        let output = variant.sort(input);
        let elapsed = start.elapsed();

        let sorted = output.len() == data.values.len() && is_sorted(&output);
        if !sorted {
            warn!("{} produced unordered output for {}", variant, data.label);
        }
        debug!(elapsed_us = elapsed.as_micros() as u64, "Measured {} on {}", variant, data.label);

        Measurement { variant, label: data.label.clone(), len: output.len(), elapsed, sorted }
    }

    /// Time every variant on the random inputs, then on the edge cases
    pub fn run(&mut self) -> BenchmarkReport {
        let random_sets = self.random_data_sets();
        let edge_sets = Self::edge_case_data_sets();
        info!(
            "Benchmarking {} variants on {} random and {} edge-case inputs",
            SortVariant::ALL.len(),
            random_sets.len(),
            edge_sets.len()
        );

        let mut report = BenchmarkReport::default();
        for variant in SortVariant::ALL {
            for data in &random_sets {
                report.random.push(Self::measure(variant, data));
            }
        }
        for variant in SortVariant::ALL {
            for data in &edge_sets {
                let mut measurement = Self::measure(variant, data);
                measurement.label = format!("{} ({})", data.label, variant);
                report.edge_cases.push(measurement);
            }
        }
        report
    }
}

impl Default for BenchmarkRunner {
    fn default() -> Self {
        Self::new()
    }
}
