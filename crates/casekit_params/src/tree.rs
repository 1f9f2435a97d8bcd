//! The params tree: string keys over leaves or nested trees.

use crate::path::segments;
use casekit_variant::{invalid_key, Error, Optional};
use rustc_hash::FxHashMap;

/// One slot in a params tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Entry<V> {
    /// A leaf value.
    Value(V),
    /// A nested tree.
    Nested(Params<V>),
}

/// A nested string-keyed tree of values with delimited-path lookup.
///
/// Lookups signal presence through `Optional`: `get` constructs
/// `Present(value)` for found keys and `Empty` for missing ones, so
/// downstream code can use the combinators or the dispatch engine without
/// knowing how the value was produced.
///
/// # Example
///
/// ```text
/// let mut params = Params::new();
/// params.insert("zipcode", "02139");
/// let zip = params.get(":user:zipcode").get_or_else(&"00000");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Params<V> {
    entries: FxHashMap<String, Entry<V>>,
}

impl<V> Params<V> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Params {
            entries: FxHashMap::default(),
        }
    }

    /// Insert a leaf value at a top-level key.
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        self.entries.insert(key.into(), Entry::Value(value));
    }

    /// Insert a nested tree at a top-level key.
    pub fn insert_tree(&mut self, key: impl Into<String>, tree: Params<V>) {
        self.entries.insert(key.into(), Entry::Nested(tree));
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the tree has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the top-level entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry<V>)> {
        self.entries
            .iter()
            .map(|(key, entry)| (key.as_str(), entry))
    }

    /// Walk a delimited path to whatever entry it addresses.
    fn entry_at(&self, path: &str) -> Option<&Entry<V>> {
        let mut segs = segments(path);
        let mut current = self.entries.get(segs.next()?)?;
        for seg in segs {
            match current {
                Entry::Nested(tree) => current = tree.entries.get(seg)?,
                Entry::Value(_) => return None,
            }
        }
        Some(current)
    }

    /// Look up a leaf by delimited path.
    ///
    /// `Present` for a found leaf; `Empty` when any segment is missing or
    /// the path stops at a subtree.
    pub fn get(&self, path: &str) -> Optional<&V> {
        match self.entry_at(path) {
            Some(Entry::Value(value)) => Optional::present(value),
            _ => Optional::empty(),
        }
    }

    /// Look up a subtree by delimited path.
    pub fn subtree(&self, path: &str) -> Optional<&Params<V>> {
        match self.entry_at(path) {
            Some(Entry::Nested(tree)) => Optional::present(tree),
            _ => Optional::empty(),
        }
    }

    /// The leaf at `path`, or `default` when the path is not set.
    pub fn get_or_else<'a>(&'a self, path: &str, default: &'a V) -> &'a V {
        self.get(path).get_or_else(default)
    }

    /// True when `path` addresses a leaf.
    pub fn is_defined(&self, path: &str) -> bool {
        self.get(path).is_present()
    }

    /// True when every path addresses a leaf.
    pub fn all(&self, paths: &[&str]) -> bool {
        paths.iter().all(|path| self.is_defined(path))
    }

    /// Invoke `f` on the leaf at `path`, only when present.
    pub fn with<R>(&self, path: &str, f: impl FnOnce(&V) -> R) -> Optional<R> {
        self.get(path).map(f)
    }

    /// A single-key tree holding `value`, or an empty tree when `value`
    /// is `Empty`.
    pub fn wrap_if_present(key: impl Into<String>, value: Optional<V>) -> Params<V> {
        value
            .map(|v| {
                let mut wrapped = Params::new();
                wrapped.insert(key, v);
                wrapped
            })
            .get_or_else(Params::new())
    }
}

impl<V: Clone> Params<V> {
    /// Select a subset of the top-level keys, silently skipping keys that
    /// are not present.
    pub fn sub(&self, keys: &[&str]) -> Params<V> {
        let mut picked = Params::new();
        for &key in keys {
            if let Some(entry) = self.entries.get(key) {
                picked.entries.insert(key.to_string(), entry.clone());
            }
        }
        picked
    }

    /// Flatten nested keys into dotted keys: `{a: {b: 1}}` becomes
    /// `{"a.b": 1}`.
    ///
    /// A key that already contains a dot would make the flattened form
    /// ambiguous and fails with `ErrorKind::InvalidKey`.
    pub fn flatten(&self) -> Result<FxHashMap<String, V>, Error> {
        let mut flat = FxHashMap::default();
        self.flatten_into(None, &mut flat)?;
        Ok(flat)
    }

    fn flatten_into(
        &self,
        prefix: Option<&str>,
        flat: &mut FxHashMap<String, V>,
    ) -> Result<(), Error> {
        for (key, entry) in &self.entries {
            if key.contains('.') {
                return Err(invalid_key(key));
            }
            let flat_key = match prefix {
                Some(prefix) => format!("{prefix}.{key}"),
                None => key.clone(),
            };
            match entry {
                Entry::Value(value) => {
                    flat.insert(flat_key, value.clone());
                }
                Entry::Nested(tree) => tree.flatten_into(Some(&flat_key), flat)?,
            }
        }
        Ok(())
    }
}

impl<V: PartialEq> Params<V> {
    /// True when the given top-level keys hold equal entries in both trees
    /// (absent in both counts as equal).
    pub fn sub_eq(a: &Params<V>, b: &Params<V>, keys: &[&str]) -> bool {
        keys.iter().all(|&key| a.entries.get(key) == b.entries.get(key))
    }

    /// True when every entry of `needle` is present in `haystack` with an
    /// equal value, recursing through nested trees.
    pub fn deep_contains(needle: &Params<V>, haystack: &Params<V>) -> bool {
        needle
            .entries
            .iter()
            .all(|(key, entry)| match (entry, haystack.entries.get(key)) {
                (Entry::Nested(inner), Some(Entry::Nested(outer))) => {
                    Params::deep_contains(inner, outer)
                }
                (entry, Some(found)) => entry == found,
                (_, None) => false,
            })
    }
}

impl<V> Default for Params<V> {
    fn default() -> Self {
        Params::new()
    }
}

impl<V> FromIterator<(String, V)> for Params<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
