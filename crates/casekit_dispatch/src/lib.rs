#![deny(clippy::arithmetic_side_effects)]
//! Casekit Dispatch - first-match-wins branch dispatch over casekit
//! variant families.
//!
//! This crate provides the matching engine for `casekit_variant`'s
//! families: callers build an ordered branch table of arms, hand it to a
//! match entry point together with a concrete value, and the engine fires
//! exactly one arm: the first whose tag-selector matches the value's
//! runtime tag. The tag's payload fields bind to the arm's closure
//! parameters in declaration order.
//!
//! # Architecture
//!
//! - [`Arm`]: one (selector, binders, body) entry; `OptionalArm` and
//!   `ListArm` realize it per family as closed enums, so selectors outside
//!   the family's tag set do not typecheck
//! - [`first_match`]: the engine, an ordered scan, stateless across calls
//! - [`match_optional`] / [`match_list`]: the per-family entry points
//!
//! # Example
//!
//! ```text
//! let xs = List::from_seq([1, 2, 3]);
//! let first = match_list(&xs, vec![
//!     ListArm::nil(|| 0),
//!     ListArm::cons(|head, _tail| *head),
//! ])?;
//! ```

mod arm;
mod dispatch;

pub use arm::{Arm, Binary, ListArm, OptionalArm, Thunk, Unary};
pub use dispatch::{first_match, match_list, match_optional};

// Re-export the variant surface so dispatch callers depend on one crate.
pub use casekit_variant::{
    missing_value, non_exhaustive_match, Error, ErrorKind, Heap, List, ListIter, ListTag,
    MatchResult, Optional, OptionalTag, Tagged,
};
