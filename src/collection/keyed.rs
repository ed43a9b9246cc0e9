//! Keyed-collection abstraction for [`Map`](super::Map).

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use indexmap::IndexMap;

/// A collection of values addressable by key.
///
/// Implemented for `HashMap`, `BTreeMap`, and `IndexMap`. Iteration order is
/// whatever the underlying collection yields.
pub trait Keyed {
    type Key;
    type Value;

    /// Returns an iterator over all entries.
    fn entries(&self) -> Box<dyn Iterator<Item = (&Self::Key, &Self::Value)> + '_>;
}

/// Lookup by a borrowed form of the key.
///
/// Each collection asks only for what its own `get` needs: hashed maps take
/// `Q: Hash + Eq`, `BTreeMap` takes `Q: Ord`.
pub trait Lookup<Q: ?Sized>: Keyed {
    /// Returns the value stored under `key`.
    fn lookup(&self, key: &Q) -> Option<&Self::Value>;
}

impl<K, V, S> Keyed for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(self.iter())
    }
}

impl<K, V, S, Q> Lookup<Q> for HashMap<K, V, S>
where
    K: Hash + Eq + Borrow<Q>,
    S: BuildHasher,
    Q: Hash + Eq + ?Sized,
{
    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V> Keyed for BTreeMap<K, V>
where
    K: Ord,
{
    type Key = K;
    type Value = V;

    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(self.iter())
    }
}

impl<K, V, Q> Lookup<Q> for BTreeMap<K, V>
where
    K: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
{
    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V, S> Keyed for IndexMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(self.iter())
    }
}

impl<K, V, S, Q> Lookup<Q> for IndexMap<K, V, S>
where
    K: Hash + Eq + Borrow<Q>,
    S: BuildHasher,
    Q: Hash + Eq + ?Sized,
{
    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}
