//! Deterministic random sources for tests and offline runs.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::RandomSource;
use crate::error::RandomError;

/// Always returns the same value.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub f64);

impl RandomSource for FixedRandom {
    async fn draw(&self) -> Result<f64, RandomError> {
        Ok(self.0)
    }
}

/// Replays a list of values in order, wrapping around at the end.
///
/// Also counts how many draws were made.
#[derive(Debug)]
pub struct SequenceRandom {
    values: Vec<f64>,
    next: AtomicUsize,
}

impl SequenceRandom {
    #[must_use]
    pub const fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            next: AtomicUsize::new(0),
        }
    }

    /// Number of draws served so far.
    pub fn draws(&self) -> usize {
        self.next.load(Ordering::SeqCst)
    }
}

impl RandomSource for SequenceRandom {
    async fn draw(&self) -> Result<f64, RandomError> {
        if self.values.is_empty() {
            return Err(RandomError::Format("no values to replay".to_string()));
        }
        let idx = self.next.fetch_add(1, Ordering::SeqCst);
        Ok(self.values[idx % self.values.len()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixed_repeats_value() {
        let source = FixedRandom(0.25);
        assert!((source.draw().await.unwrap() - 0.25).abs() < f64::EPSILON);
        assert!((source.draw().await.unwrap() - 0.25).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn sequence_wraps_and_counts() {
        let source = SequenceRandom::new(vec![0.1, 0.9]);
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(source.draw().await.unwrap());
        }
        assert_eq!(seen, vec![0.1, 0.9, 0.1]);
        assert_eq!(source.draws(), 3);
    }

    #[tokio::test]
    async fn empty_sequence_fails() {
        let source = SequenceRandom::new(Vec::new());
        assert!(matches!(source.draw().await, Err(RandomError::Format(_))));
        assert_eq!(source.draws(), 0);
    }

    #[tokio::test]
    async fn borrowed_source_draws_from_owner() {
        let source = SequenceRandom::new(vec![0.3]);
        let borrowed = &source;
        borrowed.draw().await.unwrap();
        assert_eq!(source.draws(), 1);
    }
}
