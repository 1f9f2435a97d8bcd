//! The optional-value family: `Empty` or `Present(value)`.

use crate::errors::{missing_value, Error};
use crate::Tagged;
use std::fmt;

/// Tag set of the optional family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OptionalTag {
    /// No payload.
    Empty,
    /// One payload field: the wrapped value.
    Present,
}

/// An optional value: either `Empty` or `Present(value)`.
///
/// Exactly one tag holds at any time. `Present` is never conjured from a
/// sentinel meaning absence; that invariant belongs to the caller
/// constructing the value.
///
/// # Example
///
/// ```text
/// let found = Optional::present(42).map(|n| n * 2);
/// let missing = Optional::<i64>::empty().get_or_else(0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Optional<T> {
    Empty,
    Present(T),
}

impl<T> Optional<T> {
    // Factory Methods

    /// Create the empty value.
    #[inline]
    pub fn empty() -> Self {
        Optional::Empty
    }

    /// Wrap a value.
    #[inline]
    pub fn present(value: T) -> Self {
        Optional::Present(value)
    }

    // Inspection

    /// Which tag this value holds.
    pub fn tag(&self) -> OptionalTag {
        match self {
            Optional::Empty => OptionalTag::Empty,
            Optional::Present(_) => OptionalTag::Present,
        }
    }

    /// True when no value is held.
    pub fn is_empty(&self) -> bool {
        matches!(self, Optional::Empty)
    }

    /// True when a value is held.
    pub fn is_present(&self) -> bool {
        matches!(self, Optional::Present(_))
    }

    /// Borrow the wrapped value.
    ///
    /// Fails with `ErrorKind::MissingValue` on `Empty`. This is the
    /// programmer-asserting-presence path; prefer the combinators when
    /// absence is an expected state.
    pub fn get(&self) -> Result<&T, Error> {
        match self {
            Optional::Present(value) => Ok(value),
            Optional::Empty => Err(missing_value("Optional", "get")),
        }
    }

    // Combinators

    /// Apply `f` to the wrapped value; `Empty` passes through untouched
    /// and `f` is never invoked.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Optional<U> {
        match self {
            Optional::Present(value) => Optional::Present(f(value)),
            Optional::Empty => Optional::Empty,
        }
    }

    /// Apply `f` to the wrapped value and flatten the result.
    pub fn flat_map<U>(self, f: impl FnOnce(T) -> Optional<U>) -> Optional<U> {
        match self {
            Optional::Present(value) => f(value),
            Optional::Empty => Optional::Empty,
        }
    }

    /// Drop the wrapped value unless `keep` accepts it.
    pub fn filter(self, keep: impl FnOnce(&T) -> bool) -> Optional<T> {
        match self {
            Optional::Present(value) if keep(&value) => Optional::Present(value),
            _ => Optional::Empty,
        }
    }

    /// The wrapped value, or `default` on `Empty`.
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Optional::Present(value) => value,
            Optional::Empty => default,
        }
    }

    /// Self when present, otherwise `other`.
    pub fn or_else(self, other: Optional<T>) -> Optional<T> {
        match self {
            Optional::Present(_) => self,
            Optional::Empty => other,
        }
    }

    /// Invoke `f` with the wrapped value, exactly once, only when present.
    pub fn for_each(&self, f: impl FnOnce(&T)) {
        if let Optional::Present(value) = self {
            f(value);
        }
    }

    /// Convert to a sequence: empty, or a single element.
    pub fn to_vec(self) -> Vec<T> {
        match self {
            Optional::Present(value) => vec![value],
            Optional::Empty => Vec::new(),
        }
    }
}

impl<T> Tagged for Optional<T> {
    type Tag = OptionalTag;

    const FAMILY: &'static str = "Optional";

    fn tag(&self) -> OptionalTag {
        Optional::tag(self)
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Optional::Present(value) => write!(f, "Present({value})"),
            Optional::Empty => write!(f, "Empty"),
        }
    }
}

#[cfg(test)]
#[expect(
    clippy::arithmetic_side_effects,
    reason = "tests do arithmetic on small constants"
)]
