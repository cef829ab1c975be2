//! Iteration of a deterministic map until a value is revisited.

use std::collections::HashMap;
use std::hash::Hash;

/// Forward orbit of a value under a deterministic map, cut at the first repeat.
///
/// `sequence` holds `start, f(start), f²(start), ...` up to (but not including)
/// the first value already seen. All entries are distinct and
/// `f(sequence.last())` equals `sequence[cycle_start]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Orbit<T> {
    /// Distinct visited values in visiting order.
    pub sequence: Vec<T>,
    /// Index in `sequence` of the first value that is visited twice.
    pub cycle_start: usize,
}

impl<T> Orbit<T> {
    /// Values visited before entering the cycle.
    pub fn tail(&self) -> &[T] {
        &self.sequence[..self.cycle_start]
    }

    /// The periodic part of the orbit.
    pub fn cycle(&self) -> &[T] {
        &self.sequence[self.cycle_start..]
    }

    /// Length of the periodic part.
    pub fn period(&self) -> usize {
        self.sequence.len() - self.cycle_start
    }

    /// The first value reached twice.
    pub fn cycle_entry(&self) -> &T {
        &self.sequence[self.cycle_start]
    }

    /// The value `f^m(start)` for any `m` making `f^m` idempotent on the
    /// orbit: the cycle value at the least multiple of the period that is not
    /// before the cycle. It is fixed by `f^period`.
    pub fn stable_point(&self) -> &T {
        let period = self.period();
        let index = self.cycle_start.div_ceil(period) * period;
        &self.sequence[index]
    }

    /// Consumes the orbit and returns its periodic part.
    pub fn into_cycle(mut self) -> Vec<T> {
        self.sequence.drain(..self.cycle_start);
        self.sequence
    }
}

/// Applies `step` from `start` until a value repeats.
///
/// Terminates whenever the forward orbit of `start` is finite, which is the
/// case for every map iterated by the summit set algorithms.
pub fn iterate_until_revisit<T, S>(start: T, mut step: S) -> Orbit<T>
where
    T: Hash + Eq + Clone,
    S: FnMut(&T) -> T,
{
    let mut seen: HashMap<T, usize> = HashMap::new();
    let mut sequence = Vec::new();
    let mut current = start;
    loop {
        if let Some(&cycle_start) = seen.get(&current) {
            return Orbit {
                sequence,
                cycle_start,
            };
        }
        seen.insert(current.clone(), sequence.len());
        let next = step(&current);
        sequence.push(current);
        current = next;
    }
}
