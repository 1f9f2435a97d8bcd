#![deny(clippy::arithmetic_side_effects)]
//! Casekit Variant - closed variant families with explicit tags.
//!
//! This crate provides:
//! - The two variant families: `Optional` (`Empty` / `Present`) and
//!   `List` (`Nil` / `Cons`)
//! - Checked payload accessors that fail with `ErrorKind::MissingValue`
//!   instead of panicking
//! - The combinator surface over `Optional` (`map`, `flat_map`, `filter`,
//!   `get_or_else`, `or_else`, `for_each`, `to_vec`)
//! - Error types (`Error`, `ErrorKind`, `MatchResult`) shared with the
//!   dispatch engine in `casekit_dispatch`
//!
//! # Immutability
//!
//! Variant instances never mutate after construction. List spines share
//! structure through `Heap` (Arc), so cloning a list or borrowing its tail
//! copies one handle, never the elements, and values can be handed across
//! threads without locking.

pub mod errors;
mod heap;
mod list;
mod option;

pub use errors::{
    invalid_key, missing_value, non_exhaustive_match, Error, ErrorKind, MatchResult,
};
pub use heap::Heap;
pub use list::{List, ListIter, ListTag};
pub use option::{Optional, OptionalTag};

/// A value carrying exactly one tag from a closed, family-fixed set.
///
/// This is the seam between the variant families and the dispatch engine:
/// the engine only ever asks a value which tag it holds and compares that
/// against arm selectors. Payload extraction stays with the per-family arm
/// types, which know the fixed arity of each tag.
pub trait Tagged {
    /// The family's tag enumeration.
    type Tag: Copy + Eq + std::fmt::Debug;

    /// Family name used in error messages.
    const FAMILY: &'static str;

    /// The tag this value currently holds.
    fn tag(&self) -> Self::Tag;
}
