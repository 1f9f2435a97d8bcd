use super::*;
use crate::ErrorKind;
use pretty_assertions::assert_eq;

#[test]
fn nil_has_no_payload() {
    let list = List::<i64>::nil();
    assert_eq!(list.tag(), ListTag::Nil);
    assert!(list.is_nil());
    assert!(list.is_empty());
    assert!(!list.is_cons());
    assert_eq!(list.len(), 0);
}

#[test]
fn cons_prepends() {
    let list = List::cons(1, List::cons(2, List::nil()));
    assert_eq!(list.tag(), ListTag::Cons);
    assert!(list.is_cons());
    assert_eq!(list.len(), 2);
    assert_eq!(list.head().ok(), Some(&1));
}

#[test]
fn from_seq_preserves_source_order() {
    let list = List::from_seq([1, 2, 3]);
    let elems: Vec<i64> = list.iter().copied().collect();
    assert_eq!(elems, vec![1, 2, 3]);
}

#[test]
fn from_seq_of_nothing_is_nil() {
    let list = List::<i64>::from_seq([]);
    assert!(!list.is_cons());
}

#[test]
fn collect_builds_a_list() {
    let list: List<i64> = (1..=4).collect();
    assert_eq!(list, List::from_seq([1, 2, 3, 4]));
}

#[test]
fn head_and_tail_walk_the_spine() {
    let list = List::from_seq(["a", "b", "c"]);
    let tail = list.tail().ok().map(List::len);
    assert_eq!(tail, Some(2));
    let second = list.tail().and_then(List::head).ok();
    assert_eq!(second, Some(&"b"));
}

#[test]
fn head_on_nil_is_missing_value() {
    let list = List::<i64>::nil();
    let Err(err) = list.head() else {
        panic!("expected head on Nil to fail");
    };
    assert_eq!(
        err.kind,
        ErrorKind::MissingValue {
            family: "List",
            accessor: "head",
        }
    );
}

#[test]
fn tail_on_nil_is_missing_value() {
    let list = List::<i64>::nil();
    let Err(err) = list.tail() else {
        panic!("expected tail on Nil to fail");
    };
    assert_eq!(
        err.kind,
        ErrorKind::MissingValue {
            family: "List",
            accessor: "tail",
        }
    );
}

#[test]
fn clone_shares_the_spine() {
    let original = List::from_seq([1, 2, 3]);
    let copy = original.clone();
    assert_eq!(original, copy);
    // Dropping the copy must leave the original intact.
    drop(copy);
    assert_eq!(original.len(), 3);
}

#[test]
fn tails_compare_structurally() {
    let shared = List::from_seq([2, 3]);
    let a = List::cons(1, shared.clone());
    let b = List::cons(1, List::from_seq([2, 3]));
    assert_eq!(a, b);
    assert_ne!(a, shared);
    assert_ne!(List::from_seq([1, 2]), List::from_seq([1, 2, 3]));
}

#[test]
fn display_renders_elements() {
    assert_eq!(List::<i64>::nil().to_string(), "[]");
    assert_eq!(List::from_seq([1, 2, 3]).to_string(), "[1, 2, 3]");
    assert_eq!(format!("{:?}", List::from_seq([1, 2])), "[1, 2]");
}

#[test]
fn dropping_a_deep_list_does_not_recurse() {
    // 100k cells would overflow a typical stack if drop recursed.
    let list = List::from_seq(0..100_000);
    assert_eq!(list.len(), 100_000);
    drop(list);
}

#[test]
fn dropping_a_deep_list_with_shared_tail_stops_at_the_share() {
    let shared = List::from_seq(0..50_000);
    let extended = List::cons(-1, shared.clone());
    drop(extended);
    assert_eq!(shared.len(), 50_000);
}
