//! Resolution pipeline.
//!
//! ```text
//! fields::parse ──▶ step == 0 ? ──▶ length == 0 ? ──▶ start/stop ──▶ ResolvedSlice
//!   (grammar)      InvalidIncrement   (0, 0, step)     evaluate + fit
//! ```
//!
//! The step is settled first because defaults, `end/d` evaluation and the
//! bounds window all depend on its sign.

use super::bounds::{Bounds, Fitted};
use super::end_expr;
use super::fields;
use super::trace::{FieldStep, RunTrace};
use crate::{ErrorKind, Field, ResolvedSlice, Stop, Term};
use std::time::Instant;

/// Resolves subsequence strings against a fixed length and bounds mode.
///
/// A `Resolver` holds no state between calls; it only fixes the
/// `(length, strict)` pair so the same configuration can resolve many strings.
#[derive(Debug, Clone, Copy)]
pub struct Resolver {
    length: usize,
    strict: bool,
}

impl Resolver {
    pub fn new(length: usize, strict: bool) -> Self {
        Self { length, strict }
    }

    pub fn run(&self, text: &str) -> Result<ResolvedSlice, ErrorKind> {
        self.resolve_into(text, &mut |_| {})
    }

    /// Like [`Resolver::run`], additionally recording how each field was settled.
    pub fn run_traced<'t>(&self, text: &'t str) -> (Result<ResolvedSlice, ErrorKind>, RunTrace<'t>) {
        let started = Instant::now();
        let mut steps = Vec::with_capacity(3);
        let result = self.resolve_into(text, &mut |step| steps.push(step));
        (result, RunTrace { steps, elapsed: started.elapsed() })
    }

    fn resolve_into<'t>(
        &self,
        text: &'t str,
        sink: &mut dyn FnMut(FieldStep<'t>),
    ) -> Result<ResolvedSlice, ErrorKind> {
        let parsed = fields::parse(text)?;

        let step = parsed.step.unwrap_or(1);
        if step == 0 {
            tracing::debug!(text, "step resolved to zero");
            return Err(ErrorKind::InvalidIncrement);
        }
        sink(FieldStep {
            field: Field::Step,
            raw: parsed.raw.step,
            evaluated: parsed.step,
            resolved: Some(step),
            clamped: false,
        });

        let Ok(length) = i64::try_from(self.length) else {
            tracing::debug!(text, length = self.length, "length exceeds the signed index range");
            return Err(ErrorKind::OutOfBounds);
        };

        if length == 0 {
            // Every bound collapses to 0; nothing can be out of range.
            for (field, raw) in [(Field::Start, parsed.raw.start), (Field::Stop, parsed.raw.stop)] {
                sink(FieldStep { field, raw, evaluated: None, resolved: Some(0), clamped: false });
            }
            return Ok(ResolvedSlice::new(0, Stop::Index(0), step));
        }

        let bounds = Bounds::new(length, self.strict);

        let evaluated = parsed.start.map(|term| self.evaluate(text, Field::Start, term, length, step));
        let start = match evaluated {
            None => Fitted { value: bounds.default_start(step), clamped: false },
            Some(value) => bounds.start(value, step).inspect_err(|_| {
                tracing::debug!(text, field = %Field::Start, value, length, "bound out of range");
            })?,
        };
        sink(FieldStep {
            field: Field::Start,
            raw: parsed.raw.start,
            evaluated,
            resolved: Some(start.value),
            clamped: start.clamped,
        });

        let evaluated = parsed.stop.map(|term| self.evaluate(text, Field::Stop, term, length, step));
        let stop = match evaluated {
            None => Fitted { value: bounds.default_stop(step), clamped: false },
            Some(value) => bounds.stop(value, step).inspect_err(|_| {
                tracing::debug!(text, field = %Field::Stop, value, length, "bound out of range");
            })?,
        };
        sink(FieldStep {
            field: Field::Stop,
            raw: parsed.raw.stop,
            evaluated,
            resolved: match stop.value {
                Stop::Index(index) => Some(index),
                Stop::Unbounded => None,
            },
            clamped: stop.clamped,
        });

        Ok(ResolvedSlice::new(start.value, stop.value, step))
    }

    fn evaluate(&self, text: &str, field: Field, term: Term, length: i64, step: i64) -> i64 {
        let value = end_expr::evaluate(term, length, step);
        tracing::trace!(text, %field, ?term, value, "evaluated bound");
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_records_every_field() {
        let (result, trace) = Resolver::new(10, false).run_traced("end:end/2:-1");
        assert_eq!(result, Ok(ResolvedSlice::new(9, Stop::Index(4), -1)));

        let fields: Vec<Field> = trace.steps.iter().map(|s| s.field).collect();
        assert_eq!(fields, vec![Field::Step, Field::Start, Field::Stop]);

        let start = trace.steps[1];
        assert_eq!(start.raw, Some("end"));
        assert_eq!(start.evaluated, Some(10));
        assert_eq!(start.resolved, Some(9));
        assert!(start.clamped);

        let stop = trace.steps[2];
        assert_eq!(stop.evaluated, Some(4));
        assert_eq!(stop.resolved, Some(4));
        assert!(!stop.clamped);
    }

    #[test]
    fn trace_marks_defaults() {
        let (_, trace) = Resolver::new(10, false).run_traced("::-1");
        let stop = trace.steps[2];
        assert_eq!(stop.raw, None);
        assert_eq!(stop.evaluated, None);
        assert_eq!(stop.resolved, None);

        let step = trace.steps[0];
        assert_eq!(step.raw, Some("-1"));
        assert_eq!(step.resolved, Some(-1));
    }

    #[test]
    fn trace_stops_at_the_failing_field() {
        let (result, trace) = Resolver::new(10, true).run_traced("3:40");
        assert_eq!(result, Err(ErrorKind::OutOfBounds));
        assert_eq!(trace.steps.len(), 2);
        assert_eq!(trace.steps[1].resolved, Some(3));
    }

    #[test]
    fn oversized_length_is_out_of_bounds() {
        if usize::BITS >= 64 {
            assert_eq!(Resolver::new(usize::MAX, false).run(":"), Err(ErrorKind::OutOfBounds));
        }
    }
}
