//! Casekit Params - nested key/value lookup returning casekit optionals.
//!
//! A `Params<V>` tree maps string keys to leaf values or nested trees and
//! answers delimited-path lookups (`".poll.user.email"`,
//! `":user:location:zipcode"`). Presence is signalled with
//! `casekit_variant::Optional`: `Present(value)` for found keys, `Empty`
//! for missing ones. Callers branch with the usual combinators or the
//! dispatch engine, never against a sentinel.
//!
//! This crate is independent of the matching engine; `Optional` is its
//! only contract with the rest of casekit.

mod path;
mod tree;

pub use tree::{Entry, Params};
