//! Evaluation of bound terms against a length.

use crate::Term;

/// Evaluate `term` for a container of `length` elements walked by `step`.
///
/// `end` is `length` everywhere except inside a division with a negative
/// step, where it is `length - 1` so that `end/d` lands on an element rather
/// than one past it. Division rounds toward negative infinity. Negative
/// literals count back from the unadjusted `length`.
///
/// The result is not bounds-checked.
pub(crate) fn evaluate(term: Term, length: i64, step: i64) -> i64 {
    match term {
        Term::Index(index) => index,
        // `length >= 0 > offset`, so the sum cannot overflow.
        Term::FromEnd(offset) => length + offset,
        Term::EndMinus(back) => length - back,
        Term::End => length,
        Term::EndDiv(divisor) => {
            let end = if step < 0 { length - 1 } else { length };
            end.div_euclid(divisor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_terms_ignore_step() {
        for step in [1, -1] {
            assert_eq!(evaluate(Term::Index(4), 10, step), 4);
            assert_eq!(evaluate(Term::FromEnd(-3), 10, step), 7);
            assert_eq!(evaluate(Term::FromEnd(-12), 10, step), -2);
            assert_eq!(evaluate(Term::FromEnd(i64::MIN), 10, step), i64::MIN + 10);
            assert_eq!(evaluate(Term::End, 10, step), 10);
            assert_eq!(evaluate(Term::EndMinus(2), 10, step), 8);
        }
    }

    #[test]
    fn division_floors() {
        assert_eq!(evaluate(Term::EndDiv(3), 10, 1), 3);
        assert_eq!(evaluate(Term::EndDiv(4), 10, 2), 2);
        assert_eq!(evaluate(Term::EndDiv(1), 10, 1), 10);
        assert_eq!(evaluate(Term::EndDiv(11), 10, 1), 0);
    }

    #[test]
    fn division_with_negative_step_uses_last_index() {
        assert_eq!(evaluate(Term::EndDiv(3), 9, -1), 2);
        assert_eq!(evaluate(Term::EndDiv(2), 10, -1), 4);
        assert_eq!(evaluate(Term::EndDiv(1), 10, -3), 9);
        assert_eq!(evaluate(Term::EndDiv(2), 1, -1), 0);
    }

    #[test]
    fn division_below_zero_still_floors() {
        assert_eq!(evaluate(Term::EndDiv(2), 0, -1), -1);
    }
}
