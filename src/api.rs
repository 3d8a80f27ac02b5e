use crate::engine::{FieldStep, Resolver};
use crate::{ErrorKind, Field, ResolvedSlice, SubsequenceError};
use std::time::Duration;

/// Options that affect resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Reject out-of-range bounds with [`ErrorKind::OutOfBounds`] instead of
    /// clamping them.
    pub strict: bool,
}

impl Options {
    /// Options with strict bounds checking enabled.
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

/// How one field was settled, as reported by [`resolve_verbose_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTrace {
    pub field: Field,
    /// Field text, `None` when omitted.
    pub raw: Option<String>,
    /// Value of the field before bounds handling, `None` when defaulted.
    pub evaluated: Option<i64>,
    /// Final value, `None` for an unbounded stop.
    pub resolved: Option<i64>,
    /// Whether clamping changed the value.
    pub clamped: bool,
}

/// Extra details returned by [`resolve_verbose_with`].
#[derive(Debug, Clone)]
pub struct ResolveDetails {
    /// Settled fields in positional order (start, stop, step). A failing
    /// resolution lists only the fields settled before the failure.
    pub fields: Vec<FieldTrace>,
    pub elapsed: Duration,
}

/// Result from [`resolve_verbose_with`].
#[derive(Debug, Clone)]
pub struct ResolveVerbose {
    pub text: String,
    pub length: usize,
    pub result: Result<ResolvedSlice, SubsequenceError>,
    pub details: ResolveDetails,
}

/// Resolve `text` against a container of `length` elements.
///
/// With `strict` unset, out-of-range bounds are clamped; with it set they are
/// reported as [`ErrorKind::OutOfBounds`].
///
/// # Example
/// ```
/// use subseq::{ErrorKind, Stop, resolve};
///
/// let slice = resolve(":end/3", 10, false).unwrap();
/// assert_eq!((slice.start, slice.stop, slice.step), (0, Stop::Index(3), 1));
///
/// assert_eq!(resolve("::0", 10, false), Err(ErrorKind::InvalidIncrement));
/// assert_eq!(resolve("0:20", 10, true), Err(ErrorKind::OutOfBounds));
/// ```
///
/// # Errors
///
/// Returns the [`ErrorKind`] classifying why `text` could not be resolved.
pub fn resolve(text: &str, length: usize, strict: bool) -> Result<ResolvedSlice, ErrorKind> {
    Resolver::new(length, strict).run(text)
}

/// Resolve `text` with `options`, wrapping failures with the original text.
///
/// # Errors
///
/// Returns a [`SubsequenceError`] whose message names `text`.
pub fn resolve_with(text: &str, length: usize, options: &Options) -> Result<ResolvedSlice, SubsequenceError> {
    resolve(text, length, options.strict).map_err(|kind| SubsequenceError::new(kind, text, length))
}

/// Resolve `text` with `options` and return a per-field trace alongside the
/// result.
///
/// The default [`resolve_with`] path does not allocate these traces.
pub fn resolve_verbose_with(text: &str, length: usize, options: &Options) -> ResolveVerbose {
    let (result, trace) = Resolver::new(length, options.strict).run_traced(text);

    let mut fields: Vec<FieldTrace> = trace.steps.iter().map(step_to_trace).collect();
    fields.sort_by_key(|f| f.field);

    ResolveVerbose {
        text: text.to_string(),
        length,
        result: result.map_err(|kind| SubsequenceError::new(kind, text, length)),
        details: ResolveDetails { fields, elapsed: trace.elapsed },
    }
}

fn step_to_trace(step: &FieldStep<'_>) -> FieldTrace {
    FieldTrace {
        field: step.field,
        raw: step.raw.map(str::to_string),
        evaluated: step.evaluated,
        resolved: step.resolved,
        clamped: step.clamped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Stop;

    #[test]
    fn resolve_with_wraps_kind_and_text() {
        let err = resolve_with("1:2:3:4", 10, &Options::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSubsequence);
        assert_eq!(err.text(), "1:2:3:4");

        let err = resolve_with("-11:", 10, &Options::strict()).unwrap_err();
        assert_eq!(err, SubsequenceError::OutOfBounds { text: "-11:".to_string(), length: 10 });
    }

    #[test]
    fn options_select_bounds_mode() {
        assert_eq!(resolve_with("2:40", 10, &Options::default()), Ok(ResolvedSlice::new(2, Stop::Index(10), 1)));
        assert!(resolve_with("2:40", 10, &Options { strict: true }).is_err());
    }

    #[test]
    fn verbose_lists_fields_in_positional_order() {
        let res = resolve_verbose_with("end-2::-1", 10, &Options::default());

        assert_eq!(res.text, "end-2::-1");
        assert_eq!(res.length, 10);
        assert_eq!(res.result, Ok(ResolvedSlice::new(8, Stop::Unbounded, -1)));

        let fields: Vec<Field> = res.details.fields.iter().map(|f| f.field).collect();
        assert_eq!(fields, vec![Field::Start, Field::Stop, Field::Step]);
        assert_eq!(res.details.fields[0].raw.as_deref(), Some("end-2"));
        assert_eq!(res.details.fields[0].resolved, Some(8));
        assert_eq!(res.details.fields[1].resolved, None);
    }

    #[test]
    fn verbose_reports_failures() {
        let res = resolve_verbose_with("::0", 10, &Options::default());
        assert_eq!(res.result.unwrap_err().kind(), ErrorKind::InvalidIncrement);
        assert!(res.details.fields.is_empty());
    }
}
