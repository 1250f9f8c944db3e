use std::fmt::{Debug, Display, Formatter, Result};

/// Errors that can occur while parsing input records or validating field
/// values before they reach the matching engine.
///
/// Matching-engine bugs (an amount exceeding a resting order's visible
/// quantity, a negative remaining, and similar invariant violations) are
/// deliberately *not* represented here: they indicate a programmer error in
/// the engine itself and must fail fast via `panic!`/`debug_assert!` rather
/// than be threaded through a `Result`.
///
/// # Examples
///
/// ```
/// use orderbook_engine::EngineError;
///
/// let error = EngineError::ParseError {
///     line: "B,1,abc,100".to_string(),
///     reason: "price is not a valid integer".to_string(),
/// };
/// assert!(error.to_string().contains("price"));
/// ```
pub enum EngineError {
    /// A recognized record (starts with `B` or `S`) failed to parse.
    ParseError {
        /// The offending input line.
        line: String,
        /// Why parsing failed.
        reason: String,
    },

    /// A field parsed but its value violates a domain rule (e.g. a zero id,
    /// a non-positive price, a peak of zero on an iceberg order).
    InvalidFieldValue {
        /// The name of the field with the invalid value.
        field: &'static str,
        /// The offending value, as text.
        value: String,
    },

    /// Wraps an I/O failure on the input or output channel.
    Io(std::io::Error),
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            EngineError::ParseError { line, reason } => {
                write!(f, "failed to parse record {line:?}: {reason}")
            }
            EngineError::InvalidFieldValue { field, value } => {
                write!(f, "invalid value for field {field}: {value}")
            }
            EngineError::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl Debug for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        Display::fmt(self, f)
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::Io(err)
    }
}
