//! Failure taxonomy.
//!
//! [`ErrorKind`] is the closed set of outcomes the resolver can report. It is
//! what [`crate::resolve`] returns. [`SubsequenceError`] is the same
//! classification bundled with the input it was raised for, which is what a
//! caller shows to a user.

/// Classified resolution failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ErrorKind {
    /// The text does not match the field grammar, or a field is neither a
    /// signed integer nor a supported `end` expression.
    #[error("invalid subsequence")]
    InvalidSubsequence,

    /// The step resolved to zero.
    #[error("invalid increment")]
    InvalidIncrement,

    /// Strict mode only: a resolved bound lies outside the valid index range.
    #[error("subsequence out of bounds")]
    OutOfBounds,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidSubsequence => "invalid_subsequence",
            ErrorKind::InvalidIncrement => "invalid_increment",
            ErrorKind::OutOfBounds => "out_of_bounds",
        }
    }
}

/// A resolution failure together with the text (and length) that caused it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubsequenceError {
    #[error("invalid subsequence `{text}`")]
    InvalidSubsequence { text: String },

    #[error("invalid increment in subsequence `{text}`: step must be non-zero")]
    InvalidIncrement { text: String },

    #[error("subsequence `{text}` is out of bounds for length {length}")]
    OutOfBounds { text: String, length: usize },
}

impl SubsequenceError {
    pub fn new(kind: ErrorKind, text: &str, length: usize) -> Self {
        let text = text.to_string();
        match kind {
            ErrorKind::InvalidSubsequence => SubsequenceError::InvalidSubsequence { text },
            ErrorKind::InvalidIncrement => SubsequenceError::InvalidIncrement { text },
            ErrorKind::OutOfBounds => SubsequenceError::OutOfBounds { text, length },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SubsequenceError::InvalidSubsequence { .. } => ErrorKind::InvalidSubsequence,
            SubsequenceError::InvalidIncrement { .. } => ErrorKind::InvalidIncrement,
            SubsequenceError::OutOfBounds { .. } => ErrorKind::OutOfBounds,
        }
    }

    /// The subsequence text as the caller supplied it.
    pub fn text(&self) -> &str {
        match self {
            SubsequenceError::InvalidSubsequence { text }
            | SubsequenceError::InvalidIncrement { text }
            | SubsequenceError::OutOfBounds { text, .. } => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_embed_the_original_text() {
        let err = SubsequenceError::new(ErrorKind::InvalidSubsequence, "1:2:3:4", 10);
        assert_eq!(err.to_string(), "invalid subsequence `1:2:3:4`");

        let err = SubsequenceError::new(ErrorKind::InvalidIncrement, "::0", 10);
        assert_eq!(err.to_string(), "invalid increment in subsequence `::0`: step must be non-zero");

        let err = SubsequenceError::new(ErrorKind::OutOfBounds, "0:20", 10);
        assert_eq!(err.to_string(), "subsequence `0:20` is out of bounds for length 10");
    }

    #[test]
    fn kind_and_text_survive_wrapping() {
        for kind in [ErrorKind::InvalidSubsequence, ErrorKind::InvalidIncrement, ErrorKind::OutOfBounds] {
            let err = SubsequenceError::new(kind, "end/0", 3);
            assert_eq!(err.kind(), kind);
            assert_eq!(err.text(), "end/0");
        }
    }

    #[test]
    fn kind_names_are_stable() {
        assert_eq!(ErrorKind::InvalidSubsequence.as_str(), "invalid_subsequence");
        assert_eq!(ErrorKind::InvalidIncrement.as_str(), "invalid_increment");
        assert_eq!(ErrorKind::OutOfBounds.as_str(), "out_of_bounds");
        assert_eq!(ErrorKind::OutOfBounds.to_string(), "subsequence out of bounds");
    }
}
