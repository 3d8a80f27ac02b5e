//! Per-field resolution records.
//!
//! The resolver reports each field it settles to a sink. The plain path
//! passes a no-op sink; the verbose path collects the records into a
//! [`RunTrace`] so callers can see how every bound was derived.

use crate::Field;
use std::time::Duration;

/// How one field of a subsequence was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldStep<'a> {
    pub field: Field,
    /// Raw field text, `None` when the field was omitted.
    pub raw: Option<&'a str>,
    /// Value of the field expression before bounds handling. `None` when the
    /// field was defaulted.
    pub evaluated: Option<i64>,
    /// Final value, `None` for the unbounded stop.
    pub resolved: Option<i64>,
    /// True when bounds handling changed `evaluated`.
    pub clamped: bool,
}

/// Records collected by [`super::Resolver::run_traced`].
#[derive(Debug, Clone, Default)]
pub struct RunTrace<'a> {
    /// Fields in the order they were settled: step first, then start, stop.
    pub steps: Vec<FieldStep<'a>>,
    pub elapsed: Duration,
}
