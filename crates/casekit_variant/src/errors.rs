//! Error types for variant access and match dispatch.
//!
//! # Structured Error Categories
//!
//! `ErrorKind` provides typed error categories. Factory functions (e.g.,
//! `missing_value()`) are the public construction API; they populate both
//! `kind` and `message`, so callers can match on the kind or print the
//! message without caring which path produced the error.

use std::fmt;

/// Result of a match dispatch.
pub type MatchResult<R> = Result<R, Error>;

/// Typed error category.
///
/// Each variant carries the structured data for the error condition,
/// enabling programmatic matching instead of string parsing. The `Display`
/// impl produces the user-facing message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// An unchecked accessor was called on a tag lacking that payload
    /// (`get` on `Empty`, `head`/`tail` on `Nil`).
    MissingValue {
        family: &'static str,
        accessor: &'static str,
    },

    /// A branch table contained no arm for the value's runtime tag.
    NonExhaustiveMatch { family: &'static str },

    /// A params key is malformed for the requested operation
    /// (currently: a key containing `.` during flattening).
    InvalidKey { key: String },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingValue { family, accessor } => {
                write!(f, "called {accessor} on empty {family}")
            }
            Self::NonExhaustiveMatch { family } => {
                write!(f, "non-exhaustive match on {family}")
            }
            Self::InvalidKey { key } => {
                write!(f, "key must not contain a dot (.): {key:?}")
            }
        }
    }
}

/// Error raised by variant accessors, the dispatch engine, and params.
///
/// Both core kinds mark caller defects, not data errors: they propagate
/// unconditionally to the immediate caller and are never swallowed or
/// defaulted.
#[derive(Clone, Debug)]
pub struct Error {
    /// Structured error category.
    pub kind: ErrorKind,
    /// Human-readable error message.
    ///
    /// Always equals `kind.to_string()`; kept as a field so call sites can
    /// read `error.message` directly.
    pub message: String,
}

impl Error {
    /// Create an error from a structured kind.
    ///
    /// Used internally by the factory functions.
    fn from_kind(kind: ErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

// Factory Functions (the public construction API)

/// Unchecked accessor called on a tag with no such payload.
#[cold]
pub fn missing_value(family: &'static str, accessor: &'static str) -> Error {
    Error::from_kind(ErrorKind::MissingValue { family, accessor })
}

/// Branch table exhausted without a matching arm.
#[cold]
pub fn non_exhaustive_match(family: &'static str) -> Error {
    Error::from_kind(ErrorKind::NonExhaustiveMatch { family })
}

/// Params key malformed for the requested operation.
#[cold]
pub fn invalid_key(key: &str) -> Error {
    Error::from_kind(ErrorKind::InvalidKey {
        key: key.to_string(),
    })
}
