//! Merge sort variants and the insertion sort they fall back to
//!
//! All variants are stable: on equal keys the element from the left run wins.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Slices at or below this length are insertion sorted by the tuned variants
pub const INSERTION_SORT_THRESHOLD: usize = 30;

/// Sort in place by shifting larger elements right
pub fn insertion_sort<T: Ord>(data: &mut [T]) {
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 && data[j - 1] > data[j] {
            data.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Merge two sorted runs into one
pub fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l <= r,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }

    merged
}

fn split<T>(mut data: Vec<T>) -> (Vec<T>, Vec<T>) {
    let right = data.split_off(data.len() / 2);
    (data, right)
}

/// Top-down merge sort
pub fn merge_sort<T: Ord>(data: Vec<T>) -> Vec<T> {
    if data.len() <= 1 {
        return data;
    }
    let (left, right) = split(data);
    merge(merge_sort(left), merge_sort(right))
}

/// Merge sort that hands short slices to insertion sort
pub fn merge_sort_with_cutoff<T: Ord>(mut data: Vec<T>) -> Vec<T> {
    if data.len() <= INSERTION_SORT_THRESHOLD {
        insertion_sort(&mut data);
        return data;
    }
    let (left, right) = split(data);
    merge(merge_sort_with_cutoff(left), merge_sort_with_cutoff(right))
}

/// Merge sort with the insertion sort cutoff that also skips the merge when
/// the sorted halves are already in order
pub fn merge_sort_adaptive<T: Ord>(mut data: Vec<T>) -> Vec<T> {
    if data.len() <= INSERTION_SORT_THRESHOLD {
        insertion_sort(&mut data);
        return data;
    }
    let (left, right) = split(data);
    let mut left = merge_sort_adaptive(left);
    let right = merge_sort_adaptive(right);

    match (left.last(), right.first()) {
        (Some(l), Some(r)) if l <= r => {
            left.extend(right);
            left
        }
        _ => merge(left, right),
    }
}

/// The sort implementations being compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortVariant {
    /// Plain top-down merge sort
    MergeSort,
    /// Merge sort with the insertion sort cutoff
    WithCutoff,
    /// Cutoff plus the already-ordered merge skip
    Adaptive,
}

impl SortVariant {
    /// Every variant, in report order
    pub const ALL: [SortVariant; 3] =
        [SortVariant::MergeSort, SortVariant::WithCutoff, SortVariant::Adaptive];

    /// Sort `data` with this variant
    pub fn sort<T: Ord>(self, data: Vec<T>) -> Vec<T> {
        match self {
            SortVariant::MergeSort => merge_sort(data),
            SortVariant::WithCutoff => merge_sort_with_cutoff(data),
            SortVariant::Adaptive => merge_sort_adaptive(data),
        }
    }
}

impl fmt::Display for SortVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortVariant::MergeSort => write!(f, "Merge Sort"),
            SortVariant::WithCutoff => write!(f, "Merge Sort with First Optimization"),
            SortVariant::Adaptive => write!(f, "Merge Sort with Both Optimizations"),
        }
    }
}

/// Whether `data` is in non-decreasing order
pub fn is_sorted<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
