//! Structured parameters attached to violations and errors.

use std::fmt::{self, Display};

use indexmap::IndexMap;
use serde_json::Value;

/// An insertion-ordered `String -> Value` mapping.
///
/// Args carry the parameters a failure code refers to (e.g. `{"min": 5}` for
/// [`Code::StringMin`](crate::Code::StringMin)) and the collection position an
/// entry was produced at (`index` for slices, `key` for maps).
///
/// # Example
///
/// ```rust
/// use inquest::Args;
/// use serde_json::json;
///
/// let args = Args::new().with("min", 5).with("max", 10);
/// let merged = args.merge(Args::new().with("max", 20));
///
/// assert_eq!(merged.get("min"), Some(&json!(5)));
/// assert_eq!(merged.get("max"), Some(&json!(20)));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Args(IndexMap<String, Value>);

impl Args {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value and returns self for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts a value, replacing any previous value under the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Merges `other` into this mapping. Values from `other` win on collision.
    ///
    /// Merging an empty mapping returns `self` unchanged, and merging into an
    /// empty mapping returns `other` unchanged.
    pub fn merge(mut self, other: Args) -> Args {
        if self.is_empty() {
            return other;
        }
        self.0.extend(other.0);
        self
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns true if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Args {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl Display for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", key, value)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_later_values_win() {
        let args = Args::new().with("key", "a").merge(Args::new().with("key", "b"));
        assert_eq!(args.get("key"), Some(&json!("b")));
        assert_eq!(args.len(), 1);
    }

    #[test]
    fn test_merge_with_empty() {
        let args = Args::new().with("index", 3);
        assert_eq!(args.clone().merge(Args::new()), args);
        assert_eq!(Args::new().merge(args.clone()), args);
        assert!(Args::new().merge(Args::new()).is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let args: Args = [("b", 1), ("a", 2), ("c", 3)].into_iter().collect();
        let keys: Vec<_> = args.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_display() {
        let args = Args::new().with("min", 5).with("key", "second");
        assert_eq!(args.to_string(), r#"{min: 5, key: "second"}"#);
        assert_eq!(Args::new().to_string(), "{}");
    }
}
