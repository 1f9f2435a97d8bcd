//! The matching engine: first-applicable-arm-wins over an ordered table.
//!
//! The engine scans the branch table in the order the caller wrote it,
//! never sorted by specificity or priority. The first arm whose selector
//! equals the value's runtime tag fires; every later arm is ignored, even
//! one whose selector would also match. A table with no matching arm is a
//! caller defect (a missing case), surfaced as
//! `ErrorKind::NonExhaustiveMatch` rather than silently defaulted.
//!
//! The engine holds no state across calls; the only state within one call
//! is the scan position, which lives in the loop below.

use crate::arm::{Arm, ListArm, OptionalArm};
use casekit_variant::{non_exhaustive_match, List, MatchResult, Optional, Tagged};

/// Select and evaluate the first arm whose selector matches `value`'s tag.
///
/// Payload binding happens inside [`Arm::fire`], positionally, driven by
/// the fixed arity of the matched tag.
pub fn first_match<V, A>(value: &V, table: Vec<A>) -> MatchResult<A::Output>
where
    V: Tagged,
    A: Arm<V>,
{
    let tag = value.tag();
    for (position, arm) in table.into_iter().enumerate() {
        if arm.selector() == tag {
            tracing::trace!(family = V::FAMILY, position, ?tag, "arm fired");
            return Ok(arm.fire(value));
        }
    }
    tracing::debug!(family = V::FAMILY, ?tag, "branch table exhausted");
    Err(non_exhaustive_match(V::FAMILY))
}

/// Match an optional value against an ordered branch table.
pub fn match_optional<T, R>(
    value: &Optional<T>,
    table: Vec<OptionalArm<'_, T, R>>,
) -> MatchResult<R> {
    first_match(value, table)
}

/// Match a list against an ordered branch table.
pub fn match_list<T, R>(value: &List<T>, table: Vec<ListArm<'_, T, R>>) -> MatchResult<R> {
    first_match(value, table)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
#[expect(
    clippy::arithmetic_side_effects,
    reason = "tests do arithmetic on small constants"
)]
