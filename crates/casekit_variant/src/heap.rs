//! Shared-allocation wrapper for list spines.
//!
//! `Heap<T>` wraps `Arc<T>` and is the only way spine cells are allocated.
//! The constructor is crate-private, so cells can only come from `List`'s
//! factory methods; external code observes structural sharing but cannot
//! forge a cell or mutate one.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A shared, immutable heap allocation.
///
/// # Thread Safety
/// Uses `Arc` internally for thread-safe reference counting. The wrapped
/// value is never mutated after construction, so handles can be shared
/// across threads without coordination.
///
/// # Zero-Cost Abstraction
/// `#[repr(transparent)]` keeps the memory layout identical to `Arc<T>`.
#[repr(transparent)]
pub struct Heap<T>(Arc<T>);

impl<T> Heap<T> {
    /// Allocate a new shared value.
    ///
    /// Crate-private: allocation goes through the owning type's factory
    /// methods.
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Heap(Arc::new(value))
    }

    /// Reclaim the inner value when this handle is the only one.
    ///
    /// Used by `List`'s drop to unlink uniquely-owned cells without
    /// recursing; a shared cell comes back unchanged in the `Err`.
    #[inline]
    pub(crate) fn try_unwrap(this: Self) -> Result<T, Self> {
        Arc::try_unwrap(this.0).map_err(Heap)
    }
}

impl<T> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Arc::clone(&self.0))
    }
}

impl<T: PartialEq> PartialEq for Heap<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

impl<T: Eq> Eq for Heap<T> {}

impl<T: fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: fmt::Display> fmt::Display for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T> AsRef<T> for Heap<T> {
    #[inline]
    fn as_ref(&self) -> &T {
        &self.0
    }
}
