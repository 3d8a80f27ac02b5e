//! The resolved `(start, stop, step)` triple.

use std::fmt;
use std::iter::FusedIterator;

/// Exclusive upper (or, with a negative step, lower) bound of a resolved slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stop {
    /// A concrete exclusive index.
    Index(i64),
    /// Walk down through index 0 inclusive. Only produced for negative steps.
    Unbounded,
}

/// A fully resolved subsequence.
///
/// Triples produced by the resolver always describe a finite walk: with a
/// positive step `0 <= start <= length` and `stop` is an index in `[0, length]`;
/// with a negative step `-1 <= start < length` and `stop` is either an index in
/// `[0, length)` or [`Stop::Unbounded`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolvedSlice {
    pub start: i64,
    pub stop: Stop,
    /// Never zero.
    pub step: i64,
}

impl ResolvedSlice {
    /// A zero `step` is representable but selects nothing.
    pub fn new(start: i64, stop: Stop, step: i64) -> Self {
        Self { start, stop, step }
    }

    /// Numeric exclusive bound, with [`Stop::Unbounded`] mapped to `-1`.
    pub fn stop_index(&self) -> i64 {
        match self.stop {
            Stop::Index(stop) => stop,
            Stop::Unbounded => -1,
        }
    }

    /// Selected element indices, in walk order.
    pub fn indices(&self) -> Indices {
        Indices { next: self.start, stop: self.stop_index(), step: self.step }
    }

    /// Number of selected elements.
    pub fn len(&self) -> usize {
        let start = i128::from(self.start);
        let stop = i128::from(self.stop_index());
        let step = i128::from(self.step);
        let span = if step > 0 { stop - start } else { start - stop };
        if span <= 0 || step == 0 {
            return 0;
        }
        usize::try_from((span - 1) / step.abs() + 1).unwrap_or(usize::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Canonical `start:stop:step` form. An unbounded stop is an empty field.
impl fmt::Display for ResolvedSlice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.stop {
            Stop::Index(stop) => write!(f, "{}:{}:{}", self.start, stop, self.step),
            Stop::Unbounded => write!(f, "{}::{}", self.start, self.step),
        }
    }
}

/// Iterator returned by [`ResolvedSlice::indices`].
///
/// Ends at `stop`, or at the first position that is not a valid `usize`.
#[derive(Debug, Clone)]
pub struct Indices {
    next: i64,
    stop: i64,
    step: i64,
}

impl Iterator for Indices {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let in_range = match self.step {
            step if step > 0 => self.next < self.stop,
            step if step < 0 => self.next > self.stop,
            _ => false,
        };
        if !in_range {
            return None;
        }

        let current = self.next;
        self.next = current.saturating_add(self.step);
        match usize::try_from(current) {
            Ok(index) => Some(index),
            Err(_) => {
                self.step = 0;
                None
            }
        }
    }
}

impl FusedIterator for Indices {}
