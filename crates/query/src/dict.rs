//! Collection indexing: fold a collection into a keyed container
//!
//! Four explicitly named constructors cover the plain-mapping/typed-map
//! and single/grouped combinations:
//!
//! | Constructor | Container | Same-key policy |
//! |---|---|---|
//! | [`build_dict`] | `serde_json::Map<String, Value>` | last write wins |
//! | [`build_grouped_dict`] | `serde_json::Map<String, Value>` (array values) | append |
//! | [`build_index`] | `HashMap<DictKey, Value>` | last write wins |
//! | [`build_grouped_index`] | `HashMap<DictKey, Vec<Value>>` | append |
//!
//! All four share one element pipeline: non-object elements are skipped,
//! elements whose key path does not resolve to an indexable value are
//! skipped, and the stored value is either the whole element or the
//! value at `value_path`. The input collection is never mutated; the
//! returned container is freshly allocated.

use pluckit_core::{get_at_path, Path};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;

// =============================================================================
// DictKey
// =============================================================================

/// An indexable dictionary key
///
/// The runtime counterpart of "string | number" keys: strings and
/// integer-valued numbers map directly; other finite numbers fall back
/// to their canonical decimal string, mirroring how plain-object keys
/// coerce. Null, booleans, arrays, and objects are not indexable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DictKey {
    /// A string key
    Str(String),
    /// A signed integer key
    Int(i64),
    /// An unsigned integer key outside the `i64` range
    UInt(u64),
}

impl DictKey {
    /// Derive a key from a resolved value, if it is indexable
    ///
    /// Returns `None` for null, booleans, arrays, and objects —
    /// elements whose key path resolves to one of those are skipped by
    /// the builders.
    pub fn from_value(value: &Value) -> Option<DictKey> {
        match value {
            Value::String(s) => Some(DictKey::Str(s.clone())),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(DictKey::Int(i))
                } else if let Some(u) = n.as_u64() {
                    Some(DictKey::UInt(u))
                } else {
                    // Non-integral numbers coerce through their decimal form
                    Some(DictKey::Str(n.to_string()))
                }
            }
            _ => None,
        }
    }
}

impl fmt::Display for DictKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictKey::Str(s) => write!(f, "{s}"),
            DictKey::Int(i) => write!(f, "{i}"),
            DictKey::UInt(u) => write!(f, "{u}"),
        }
    }
}

impl From<&str> for DictKey {
    fn from(s: &str) -> Self {
        DictKey::Str(s.to_string())
    }
}

impl From<String> for DictKey {
    fn from(s: String) -> Self {
        DictKey::Str(s)
    }
}

impl From<i64> for DictKey {
    fn from(i: i64) -> Self {
        DictKey::Int(i)
    }
}

impl From<i32> for DictKey {
    fn from(i: i32) -> Self {
        DictKey::Int(i64::from(i))
    }
}

impl From<u64> for DictKey {
    fn from(u: u64) -> Self {
        match i64::try_from(u) {
            Ok(i) => DictKey::Int(i),
            Err(_) => DictKey::UInt(u),
        }
    }
}

// =============================================================================
// Parameters
// =============================================================================

/// Parameters shared by the dict/index builders
#[derive(Debug, Clone, Default)]
pub struct DictParams {
    /// Store the value at this path instead of the whole element
    ///
    /// When the path does not resolve for an element, JSON `null` is
    /// stored in that slot (the element is still keyed).
    pub value_path: Option<Path>,
}

// =============================================================================
// Element pipeline
// =============================================================================

/// Iterate the (key, value) pairs a collection contributes, in order
fn entries<'a>(
    collection: &'a [Value],
    key_path: &'a Path,
    params: &'a DictParams,
) -> impl Iterator<Item = (DictKey, Value)> + 'a {
    collection.iter().filter_map(move |element| {
        if !element.is_object() {
            tracing::trace!(kind = %pluckit_core::kind_of(element), "skipping non-object element");
            return None;
        }

        let Some(key) = get_at_path(element, key_path).and_then(DictKey::from_value) else {
            tracing::trace!(key_path = %key_path, "skipping element without indexable key");
            return None;
        };

        let value = match &params.value_path {
            Some(path) => get_at_path(element, path).cloned().unwrap_or(Value::Null),
            None => element.clone(),
        };

        Some((key, value))
    })
}

// =============================================================================
// Builders
// =============================================================================

/// Build a plain mapping from a collection, last write wins
///
/// Keys are the string form of the resolved key value, as in a plain
/// JSON object. A later element with the same key overwrites the
/// earlier one's stored value.
///
/// # Examples
///
/// ```
/// use pluckit_query::dict::{build_dict, DictParams};
/// use serde_json::json;
///
/// let users = vec![
///     json!({ "name": "Alice", "age": 30 }),
///     json!({ "name": "Bob", "age": 25 }),
/// ];
///
/// let by_name = build_dict(&users, &"name".parse().unwrap(), &DictParams::default());
/// assert_eq!(by_name["Alice"]["age"], json!(30));
///
/// // Project a nested value instead of the whole element
/// let ages = build_dict(&users, &"name".parse().unwrap(), &DictParams {
///     value_path: Some("age".parse().unwrap()),
/// });
/// assert_eq!(ages["Bob"], json!(25));
/// ```
pub fn build_dict(
    collection: &[Value],
    key_path: &Path,
    params: &DictParams,
) -> Map<String, Value> {
    let mut dict = Map::new();
    for (key, value) in entries(collection, key_path, params) {
        dict.insert(key.to_string(), value);
    }
    tracing::debug!(
        total = collection.len(),
        kept = dict.len(),
        key_path = %key_path,
        "built dict"
    );
    dict
}

/// Build a plain mapping that groups same-key values into arrays
///
/// Every stored value is a JSON array; values accumulate per key in
/// collection iteration order.
///
/// # Examples
///
/// ```
/// use pluckit_query::dict::{build_grouped_dict, DictParams};
/// use serde_json::json;
///
/// let rows = vec![
///     json!({ "k": 1, "v": "a" }),
///     json!({ "k": 1, "v": "b" }),
/// ];
///
/// let grouped = build_grouped_dict(&rows, &"k".parse().unwrap(), &DictParams {
///     value_path: Some("v".parse().unwrap()),
/// });
/// assert_eq!(grouped["1"], json!(["a", "b"]));
/// ```
pub fn build_grouped_dict(
    collection: &[Value],
    key_path: &Path,
    params: &DictParams,
) -> Map<String, Value> {
    let mut dict = Map::new();
    for (key, value) in entries(collection, key_path, params) {
        let slot = dict
            .entry(key.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(group) = slot {
            group.push(value);
        }
    }
    tracing::debug!(
        total = collection.len(),
        groups = dict.len(),
        key_path = %key_path,
        "built grouped dict"
    );
    dict
}

/// Build a typed map from a collection, last write wins
///
/// The typed-key counterpart of [`build_dict`]: keys stay [`DictKey`]s
/// instead of being stringified.
pub fn build_index(
    collection: &[Value],
    key_path: &Path,
    params: &DictParams,
) -> HashMap<DictKey, Value> {
    let mut index = HashMap::new();
    for (key, value) in entries(collection, key_path, params) {
        index.insert(key, value);
    }
    tracing::debug!(
        total = collection.len(),
        kept = index.len(),
        key_path = %key_path,
        "built index"
    );
    index
}

/// Build a typed map that groups same-key values
///
/// Values accumulate per key in collection iteration order.
pub fn build_grouped_index(
    collection: &[Value],
    key_path: &Path,
    params: &DictParams,
) -> HashMap<DictKey, Vec<Value>> {
    let mut index: HashMap<DictKey, Vec<Value>> = HashMap::new();
    for (key, value) in entries(collection, key_path, params) {
        index.entry(key).or_default().push(value);
    }
    tracing::debug!(
        total = collection.len(),
        groups = index.len(),
        key_path = %key_path,
        "built grouped index"
    );
    index
}
