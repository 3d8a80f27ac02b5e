//! Default extremes, clamping and strict bounds checks.
//!
//! The valid window for both start and stop depends only on the sign of the
//! step:
//!
//! ```text
//! step > 0:  [0, length]        stop == length  -> walk to the last element
//! step < 0:  [-1, length - 1]   stop == -1      -> Stop::Unbounded (through index 0)
//! ```
//!
//! Using the same window for start and stop is what makes `:n` and `n:`
//! partition the whole range for any `n`. Non-strict mode clamps into the
//! window; strict mode rejects any value the clamp would have changed.

use crate::{ErrorKind, Stop};

/// A bound after window handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Fitted<T> {
    pub value: T,
    /// True when clamping changed the evaluated value.
    pub clamped: bool,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Bounds {
    length: i64,
    strict: bool,
}

impl Bounds {
    pub fn new(length: i64, strict: bool) -> Self {
        Self { length, strict }
    }

    /// Start used when the start field is omitted.
    pub fn default_start(&self, step: i64) -> i64 {
        if step > 0 { 0 } else { self.length - 1 }
    }

    /// Stop used when the stop field is omitted.
    pub fn default_stop(&self, step: i64) -> Stop {
        if step > 0 { Stop::Index(self.length) } else { Stop::Unbounded }
    }

    pub fn start(&self, value: i64, step: i64) -> Result<Fitted<i64>, ErrorKind> {
        self.fit(value, step)
    }

    pub fn stop(&self, value: i64, step: i64) -> Result<Fitted<Stop>, ErrorKind> {
        let Fitted { value, clamped } = self.fit(value, step)?;
        let value = if value < 0 { Stop::Unbounded } else { Stop::Index(value) };
        Ok(Fitted { value, clamped })
    }

    /// Start shares stop's upper bound, so strict mode accepts `start == length` (`end:`).
    fn window(&self, step: i64) -> (i64, i64) {
        if step > 0 { (0, self.length) } else { (-1, self.length - 1) }
    }

    fn fit(&self, value: i64, step: i64) -> Result<Fitted<i64>, ErrorKind> {
        let (low, high) = self.window(step);
        let fitted = value.clamp(low, high);
        let clamped = fitted != value;
        if clamped && self.strict {
            return Err(ErrorKind::OutOfBounds);
        }
        Ok(Fitted { value: fitted, clamped })
    }
}
