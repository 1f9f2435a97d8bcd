//! Branch-table entries.
//!
//! One arm is a (tag-selector, binder list, expression-thunk) triple. The
//! selector is the arm enum's variant itself; the binders are the thunk's
//! parameters, typed positionally by the tag's fixed payload arity: zero
//! for `Empty`/`Nil`, one for `Present`, two for `Cons` (head, then tail).
//!
//! Because each family's arm type is a closed enum, a branch table can only
//! name selectors drawn from that family's tag set; there is no way to
//! write an arm for a tag the family does not have.

use casekit_variant::{List, ListTag, Optional, OptionalTag, Tagged};

/// A deferred branch body binding no payload fields.
pub type Thunk<'a, R> = Box<dyn FnOnce() -> R + 'a>;

/// A deferred branch body binding one payload field.
pub type Unary<'a, T, R> = Box<dyn FnOnce(&T) -> R + 'a>;

/// A deferred branch body binding two payload fields.
pub type Binary<'a, A, B, R> = Box<dyn FnOnce(&A, &B) -> R + 'a>;

/// One entry in a branch table over the family `V`.
///
/// The engine asks an arm for its selector and, only when the selector
/// equals the matched value's tag, consumes the arm to bind the payload
/// and evaluate the branch body.
pub trait Arm<V: Tagged> {
    /// The branch body's result type.
    type Output;

    /// The tag this arm fires for.
    fn selector(&self) -> V::Tag;

    /// Bind the payload positionally and evaluate the branch body.
    ///
    /// Only called after `selector()` matched `value.tag()`.
    fn fire(self, value: &V) -> Self::Output;
}

/// Branch-table entry over [`Optional`].
///
/// # Example
///
/// ```text
/// let arms = vec![
///     OptionalArm::present(|n| n + 1),
///     OptionalArm::empty(|| 0),
/// ];
/// ```
pub enum OptionalArm<'a, T, R> {
    /// Fires on `Empty`; binds nothing.
    Empty(Thunk<'a, R>),
    /// Fires on `Present`; binds the wrapped value.
    Present(Unary<'a, T, R>),
}

impl<'a, T, R> OptionalArm<'a, T, R> {
    /// Arm for the `Empty` tag.
    #[inline]
    pub fn empty(body: impl FnOnce() -> R + 'a) -> Self {
        OptionalArm::Empty(Box::new(body))
    }

    /// Arm for the `Present` tag; the binder receives the wrapped value.
    #[inline]
    pub fn present(body: impl FnOnce(&T) -> R + 'a) -> Self {
        OptionalArm::Present(Box::new(body))
    }
}

impl<T, R> Arm<Optional<T>> for OptionalArm<'_, T, R> {
    type Output = R;

    fn selector(&self) -> OptionalTag {
        match self {
            OptionalArm::Empty(_) => OptionalTag::Empty,
            OptionalArm::Present(_) => OptionalTag::Present,
        }
    }

    fn fire(self, value: &Optional<T>) -> R {
        match (self, value) {
            (OptionalArm::Empty(body), _) => body(),
            (OptionalArm::Present(body), Optional::Present(inner)) => body(inner),
            (OptionalArm::Present(_), Optional::Empty) => {
                unreachable!("fire called without a matching selector")
            }
        }
    }
}

/// Branch-table entry over [`List`].
///
/// # Example
///
/// ```text
/// let arms = vec![
///     ListArm::nil(|| 0),
///     ListArm::cons(|head, tail| head + tail.len() as i64),
/// ];
/// ```
pub enum ListArm<'a, T, R> {
    /// Fires on `Nil`; binds nothing.
    Nil(Thunk<'a, R>),
    /// Fires on `Cons`; binds head, then tail.
    Cons(Binary<'a, T, List<T>, R>),
}

impl<'a, T, R> ListArm<'a, T, R> {
    /// Arm for the `Nil` tag.
    #[inline]
    pub fn nil(body: impl FnOnce() -> R + 'a) -> Self {
        ListArm::Nil(Box::new(body))
    }

    /// Arm for the `Cons` tag; binders receive head and tail in payload
    /// declaration order.
    #[inline]
    pub fn cons(body: impl FnOnce(&T, &List<T>) -> R + 'a) -> Self {
        ListArm::Cons(Box::new(body))
    }
}

impl<T, R> Arm<List<T>> for ListArm<'_, T, R> {
    type Output = R;

    fn selector(&self) -> ListTag {
        match self {
            ListArm::Nil(_) => ListTag::Nil,
            ListArm::Cons(_) => ListTag::Cons,
        }
    }

    fn fire(self, value: &List<T>) -> R {
        match self {
            ListArm::Nil(body) => body(),
            ListArm::Cons(body) => match (value.head(), value.tail()) {
                (Ok(head), Ok(tail)) => body(head, tail),
                _ => unreachable!("fire called without a matching selector"),
            },
        }
    }
}
