use super::*;
use casekit_variant::ErrorKind;
use pretty_assertions::assert_eq;

/// A user profile shaped like the trees this crate is usually fed:
/// `{user: {name: {first, last}, location: {address, country}}, active}`.
fn profile() -> Params<&'static str> {
    let mut name = Params::new();
    name.insert("first", "Ada");
    name.insert("last", "Lovelace");

    let mut location = Params::new();
    location.insert("address", "Betonimiehenkuja 5");
    location.insert("country", "Finland");

    let mut user = Params::new();
    user.insert_tree("name", name);
    user.insert_tree("location", location);

    let mut params = Params::new();
    params.insert_tree("user", user);
    params.insert("active", "true");
    params
}

#[test]
fn get_finds_nested_leaves() {
    let params = profile();
    assert_eq!(
        params.get(".user.location.address"),
        Optional::present(&"Betonimiehenkuja 5")
    );
    assert_eq!(params.get(":user:name:first"), Optional::present(&"Ada"));
    assert_eq!(params.get("active"), Optional::present(&"true"));
}

#[test]
fn get_is_empty_for_missing_paths() {
    let params = profile();
    assert!(params.get(".user.location.zipcode").is_empty());
    assert!(params.get(".missing").is_empty());
    // Path stopping at a subtree is not a leaf hit.
    assert!(params.get(".user.location").is_empty());
    // Leaf segments cannot be descended into.
    assert!(params.get(".active.nested").is_empty());
}

#[test]
fn subtree_addresses_nested_trees() {
    let params = profile();
    let location = params.subtree(".user.location");
    assert!(location.is_present());
    assert!(params.subtree(".user.name.first").is_empty());
}

#[test]
fn get_or_else_falls_back_per_path() {
    let params = profile();
    assert_eq!(
        params.get_or_else(":user:location:zipcode", &"00000"),
        &"00000"
    );
    // Chained fallback: prefer zipcode, then address, then a constant.
    let fallback = params.get_or_else(":user:location:address", &"N/A");
    assert_eq!(
        params.get_or_else(":user:location:zipcode", fallback),
        &"Betonimiehenkuja 5"
    );
}

#[test]
fn is_defined_and_all() {
    let params = profile();
    assert!(params.is_defined(":user:location:address"));
    assert!(!params.is_defined(":user:location:zipcode"));
    assert!(params.all(&[":user:name:first", ":user:name:last"]));
    assert!(!params.all(&[":user:name:first", ":user:name:middle"]));
}

#[test]
fn with_runs_only_when_present() {
    let params = profile();
    let shouted = params.with(".user.name.first", |name| name.to_uppercase());
    assert_eq!(shouted, Optional::present(String::from("ADA")));
    let skipped = params.with(".user.name.middle", |name| name.to_uppercase());
    assert!(skipped.is_empty());
}

#[test]
fn sub_selects_present_top_level_keys() {
    let mut params = Params::new();
    params.insert("first", "First");
    params.insert("last", "Last");
    params.insert("age", "55");

    let picked = params.sub(&["first", "age", "sex"]);
    assert_eq!(picked.len(), 2);
    assert_eq!(picked.get("first"), Optional::present(&"First"));
    assert!(picked.get("sex").is_empty());
}

#[test]
fn sub_eq_compares_only_the_given_keys() {
    let a: Params<i64> = [
        (String::from("a"), 1),
        (String::from("b"), 2),
        (String::from("c"), 3),
    ]
    .into_iter()
    .collect();
    let b: Params<i64> = [
        (String::from("a"), 1),
        (String::from("b"), 2),
        (String::from("c"), 4),
    ]
    .into_iter()
    .collect();

    assert!(Params::sub_eq(&a, &b, &["a", "b"]));
    assert!(!Params::sub_eq(&a, &b, &["a", "c"]));
    // Absent in both counts as equal.
    assert!(Params::sub_eq(&a, &b, &["missing"]));
}

#[test]
fn deep_contains_is_a_recursive_subset_test() {
    let haystack = profile();

    let mut name = Params::new();
    name.insert("first", "Ada");
    let mut user = Params::new();
    user.insert_tree("name", name);
    let mut needle = Params::new();
    needle.insert_tree("user", user);

    assert!(Params::deep_contains(&needle, &haystack));

    let mut wrong = Params::new();
    wrong.insert("active", "false");
    assert!(!Params::deep_contains(&wrong, &haystack));

    let mut extra = Params::new();
    extra.insert("unknown", "x");
    assert!(!Params::deep_contains(&extra, &haystack));
}

#[test]
fn flatten_joins_keys_with_dots() {
    let params = profile();
    let flat = params.flatten().unwrap();
    assert_eq!(flat.get("user.name.first"), Some(&"Ada"));
    assert_eq!(flat.get("user.location.country"), Some(&"Finland"));
    assert_eq!(flat.get("active"), Some(&"true"));
    assert_eq!(flat.len(), 5);
}

#[test]
fn flatten_rejects_keys_containing_dots() {
    let mut params = Params::new();
    params.insert("a.b", 1);
    let err = params.flatten().unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::InvalidKey {
            key: String::from("a.b"),
        }
    );
}

#[test]
fn wrap_if_present_wraps_or_stays_empty() {
    let wrapped = Params::wrap_if_present("wrap", Optional::present(1));
    assert_eq!(wrapped.get("wrap"), Optional::present(&1));
    assert_eq!(wrapped.len(), 1);

    let empty = Params::<i64>::wrap_if_present("wrap", Optional::empty());
    assert!(empty.is_empty());
}

#[test]
fn iter_walks_top_level_entries() {
    let params = profile();
    let mut keys: Vec<&str> = params.iter().map(|(key, _)| key).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["active", "user"]);
}
