//! Distance functions the index can be built over.
//!
//! Pruning in [`BkTree::search`](crate::bk_tree::BkTree::search) is only
//! sound when the metric is a true metric: symmetric, zero exactly on equal
//! inputs, and satisfying the triangle inequality. A metric that breaks any
//! of these silently drops valid matches.

pub mod levenshtein;

pub use levenshtein::{Levenshtein, levenshtein};

pub trait Metric {
    fn distance(&self, a: &str, b: &str) -> u32;
}

impl<F> Metric for F
where
    F: Fn(&str, &str) -> u32,
{
    fn distance(&self, a: &str, b: &str) -> u32 {
        self(a, b)
    }
}
