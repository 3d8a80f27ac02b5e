//! Resolve compact subsequence strings into concrete index triples.
//!
//! A subsequence string uses Python-slice-like syntax, `start:stop:step`, where
//! every field is optional and the bounds may use the symbol `end` (the
//! container length) with one of two operators: `end-k` and `end/k`.
//!
//! ```
//! use subseq::{Stop, resolve};
//!
//! let slice = resolve("end-2::-1", 10, false).unwrap();
//! assert_eq!((slice.start, slice.stop, slice.step), (8, Stop::Unbounded, -1));
//! assert_eq!(slice.indices().collect::<Vec<_>>(), vec![8, 7, 6, 5, 4, 3, 2, 1, 0]);
//! ```
//!
//! Resolution is a pure function of `(text, length, strict)`. Failures are
//! classified by [`ErrorKind`]; [`resolve_with`] wraps them into a
//! [`SubsequenceError`] that carries the original text for user-facing output.

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod slice;

pub use api::{FieldTrace, Options, ResolveDetails, ResolveVerbose, resolve, resolve_verbose_with, resolve_with};
pub use error::{ErrorKind, SubsequenceError};
pub use slice::{Indices, ResolvedSlice, Stop};

// --- Shared types -----------------------------------------------------------

/// Positional field of a subsequence string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Start,
    Stop,
    Step,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Start => "start",
            Field::Stop => "stop",
            Field::Step => "step",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- Internal parse types ---------------------------------------------------

/// Raw colon-separated fields. An empty field is stored as `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct RawFields<'a> {
    pub start: Option<&'a str>,
    pub stop: Option<&'a str>,
    pub step: Option<&'a str>,
}

/// A bound expression, before it is evaluated against a length.
///
/// ```text
/// "7"      -> Index(7)
/// "-3"     -> FromEnd(-3)     length + (-3)
/// "end"    -> End             length
/// "end-2"  -> EndMinus(2)     length - 2
/// "end/4"  -> EndDiv(4)       floor(length / 4), or floor((length - 1) / 4) when step < 0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Term {
    Index(i64),
    /// Negative literal, added to the length.
    FromEnd(i64),
    End,
    EndMinus(i64),
    /// Divisor is always positive.
    EndDiv(i64),
}

/// Output of the field parser: every field checked against the grammar, none
/// of them evaluated yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ParsedFields<'a> {
    pub raw: RawFields<'a>,
    pub start: Option<Term>,
    pub stop: Option<Term>,
    /// `None` when the step field was omitted.
    pub step: Option<i64>,
}
