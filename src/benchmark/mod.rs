//! Merge sort benchmark
//!
//! Compares plain merge sort against two tuned variants: one that insertion
//! sorts short slices, and one that additionally skips merging halves that are
//! already in order.
//!
//! # Usage Example
//!
//! ```rust
//! use fitting_room_simulator::benchmark::*;
//!
//! let data = vec![9, 4, 7, 1];
//! assert_eq!(SortVariant::Adaptive.sort(data), vec![1, 4, 7, 9]);
//!
//! let mut runner = BenchmarkRunner::with_seed(1);
//! let small = DataSet::new("Small", runner.generate_data(10));
//! assert!(BenchmarkRunner::measure(SortVariant::MergeSort, &small).sorted);
//! ```

pub mod runner;
pub mod sort;

// Re-export all public types for convenience
pub use runner::{BenchmarkReport, BenchmarkRunner, DataSet, Measurement};
pub use sort::{
    insertion_sort, is_sorted, merge, merge_sort, merge_sort_adaptive, merge_sort_with_cutoff,
    SortVariant, INSERTION_SORT_THRESHOLD,
};
