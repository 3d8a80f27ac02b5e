//! Field splitting and grammar checks.
//!
//! ```text
//! text ── split on ':' ──▶ RawFields (1..=3 fields, empty -> None)
//!                              │
//!                              ├─ start/stop ──▶ parse_term  ──▶ Term
//!                              └─ step       ──▶ parse_step  ──▶ i64
//! ```
//!
//! Nothing here looks at the length or the bounds mode; every syntactic
//! failure is reported as [`ErrorKind::InvalidSubsequence`].

use crate::{ErrorKind, Field, ParsedFields, RawFields, Term};

/// Split `text` into at most three colon-separated fields.
///
/// Returns `None` when the text has more than two colons.
pub(crate) fn split<'a>(text: &'a str) -> Option<RawFields<'a>> {
    let mut parts = text.split(':');
    let start = parts.next();
    let stop = parts.next();
    let step = parts.next();
    if parts.next().is_some() {
        return None;
    }

    let present = |part: Option<&'a str>| part.filter(|s| !s.is_empty());
    Some(RawFields { start: present(start), stop: present(stop), step: present(step) })
}

/// Parse a start/stop field.
pub(crate) fn parse_term(raw: &str) -> Option<Term> {
    let caps = regex!(r"^(?:(-?[0-9]+)|end(?:([-/])([0-9]+))?)$").captures(raw)?;

    if let Some(literal) = caps.get(1) {
        // Sign and digits parse together so `i64::MIN` is accepted; `-0` is zero.
        let value: i64 = literal.as_str().parse().ok()?;
        return Some(if value < 0 { Term::FromEnd(value) } else { Term::Index(value) });
    }

    match (caps.get(2).map(|m| m.as_str()), caps.get(3)) {
        (None, _) => Some(Term::End),
        (Some("-"), Some(operand)) => Some(Term::EndMinus(operand.as_str().parse().ok()?)),
        (Some("/"), Some(operand)) => {
            let divisor: i64 = operand.as_str().parse().ok()?;
            (divisor > 0).then_some(Term::EndDiv(divisor))
        }
        _ => None,
    }
}

/// Parse a step field: a signed integer literal, never an `end` expression.
pub(crate) fn parse_step(raw: &str) -> Option<i64> {
    if !regex!(r"^-?[0-9]+$").is_match(raw) {
        return None;
    }
    raw.parse().ok()
}

/// Split `text` and check every field against the grammar.
pub(crate) fn parse(text: &str) -> Result<ParsedFields<'_>, ErrorKind> {
    let Some(raw) = split(text) else {
        tracing::debug!(text, "too many ':' separators");
        return Err(ErrorKind::InvalidSubsequence);
    };

    let term = |field: Field, value: Option<&str>| -> Result<Option<Term>, ErrorKind> {
        match value {
            None => Ok(None),
            Some(value) => parse_term(value).map(Some).ok_or_else(|| {
                tracing::debug!(text, %field, value, "malformed bound");
                ErrorKind::InvalidSubsequence
            }),
        }
    };

    let start = term(Field::Start, raw.start)?;
    let stop = term(Field::Stop, raw.stop)?;
    let step = match raw.step {
        None => None,
        Some(value) => Some(parse_step(value).ok_or_else(|| {
            tracing::debug!(text, field = %Field::Step, value, "malformed step");
            ErrorKind::InvalidSubsequence
        })?),
    };

    Ok(ParsedFields { raw, start, stop, step })
}
