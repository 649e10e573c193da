//! Path algebra over exemplar values
//!
//! The original design computed path sets at the type level; over dynamic
//! values the same relations are computed at runtime against an exemplar:
//!
//! - [`all_paths`]: every dotted path reachable through nested objects
//! - [`paths_with_kind`]: the subset whose resolved value matches a kind
//!   constraint under a [`MatchMode`]
//! - [`indexable_paths`]: paths whose value can serve as a dictionary key
//! - [`reconstruct`] / [`reconstruct_multi`]: the minimal value shape
//!   implied by one or several path/value pairs
//!
//! Arrays are leaves throughout: the algebra never descends into them.

use crate::access::get_at_path;
use crate::path::Path;
use serde_json::{Map, Value};
use std::fmt;

// =============================================================================
// Value kinds
// =============================================================================

/// The six JSON value kinds
///
/// Used as the runtime constraint vocabulary for [`paths_with_kind`]:
/// where the original constrained paths by value *type*, the dynamic
/// analog constrains them by value *kind*.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// JSON `null`
    Null,
    /// `true` / `false`
    Bool,
    /// Any JSON number
    Number,
    /// A JSON string
    String,
    /// A JSON array (a leaf for this algebra)
    Array,
    /// A JSON object
    Object,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        };
        write!(f, "{name}")
    }
}

/// Classify a value by its JSON kind
pub fn kind_of(value: &Value) -> ValueKind {
    match value {
        Value::Null => ValueKind::Null,
        Value::Bool(_) => ValueKind::Bool,
        Value::Number(_) => ValueKind::Number,
        Value::String(_) => ValueKind::String,
        Value::Array(_) => ValueKind::Array,
        Value::Object(_) => ValueKind::Object,
    }
}

/// How a kind constraint is matched by [`paths_with_kind`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Keep a path when its resolved kind is a member of the constraint
    /// set. Adding [`ValueKind::Null`] to the set also captures nullable
    /// paths, the dynamic analog of widening a constraint with `undefined`.
    #[default]
    Extends,
    /// Keep a path only when the constraint set is exactly the singleton
    /// of its resolved kind. This is the only way to isolate paths of one
    /// kind without any implicit widening.
    Equals,
}

// =============================================================================
// Path enumeration
// =============================================================================

/// Enumerate every dotted path reachable in a value
///
/// Walks nested objects depth-first in document order, emitting each
/// parent path before its children. Intermediate object paths are
/// included; the root path is not. Arrays and primitives are leaves.
///
/// # Examples
///
/// ```
/// use pluckit_core::all_paths;
/// use serde_json::json;
///
/// let user = json!({
///     "name": "Alice",
///     "data": { "address": { "city": "Metropolis" } },
///     "tags": ["a", "b"]
/// });
///
/// let paths: Vec<String> = all_paths(&user).iter().map(|p| p.to_string()).collect();
/// assert_eq!(paths, vec![
///     "data",
///     "data.address",
///     "data.address.city",
///     "name",
///     "tags",
/// ]);
/// ```
pub fn all_paths(value: &Value) -> Vec<Path> {
    let mut out = Vec::new();
    if let Value::Object(map) = value {
        collect_paths(map, &Path::root(), &mut out);
    }
    out
}

fn collect_paths(map: &Map<String, Value>, prefix: &Path, out: &mut Vec<Path>) {
    for (key, child) in map {
        let path = prefix.clone().key(key);
        out.push(path.clone());
        if let Value::Object(nested) = child {
            collect_paths(nested, &path, out);
        }
    }
}

/// Enumerate paths whose resolved value matches a kind constraint
///
/// See [`MatchMode`] for the two matching disciplines. The constraint is
/// a set of acceptable kinds; order and duplicates are irrelevant.
///
/// # Examples
///
/// ```
/// use pluckit_core::{paths_with_kind, MatchMode, ValueKind};
/// use serde_json::json;
///
/// let user = json!({ "name": "Alice", "age": 30, "active": true });
///
/// let strings = paths_with_kind(&user, &[ValueKind::String], MatchMode::Extends);
/// assert_eq!(strings.len(), 1);
/// assert_eq!(strings[0].to_string(), "name");
///
/// // A two-kind constraint under Equals matches nothing: no single
/// // value resolves to two kinds at once.
/// let none = paths_with_kind(
///     &user,
///     &[ValueKind::String, ValueKind::Number],
///     MatchMode::Equals,
/// );
/// assert!(none.is_empty());
/// ```
pub fn paths_with_kind(value: &Value, constraint: &[ValueKind], mode: MatchMode) -> Vec<Path> {
    all_paths(value)
        .into_iter()
        .filter(|path| {
            let Some(resolved) = get_at_path(value, path) else {
                return false;
            };
            let kind = kind_of(resolved);
            match mode {
                MatchMode::Extends => constraint.contains(&kind),
                MatchMode::Equals => {
                    constraint.contains(&kind)
                        && constraint.iter().all(|k| *k == kind)
                }
            }
        })
        .collect()
}

/// Enumerate paths usable as dictionary keys
///
/// A path is indexable when its resolved value is a string or a number —
/// the value kinds [`crate::access::get_at_path`] consumers can turn into
/// mapping keys.
pub fn indexable_paths(value: &Value) -> Vec<Path> {
    paths_with_kind(
        value,
        &[ValueKind::String, ValueKind::Number],
        MatchMode::Extends,
    )
}

// =============================================================================
// Shape reconstruction
// =============================================================================

/// Build the minimal single-branch value implied by a path/value pair
///
/// Wraps `value` in one nested object level per path segment. The root
/// path returns the value itself, unwrapped.
///
/// # Examples
///
/// ```
/// use pluckit_core::{reconstruct, Path};
/// use serde_json::json;
///
/// let path: Path = "data.address.city".parse().unwrap();
/// let shape = reconstruct(&path, json!("Metropolis"));
/// assert_eq!(shape, json!({ "data": { "address": { "city": "Metropolis" } } }));
///
/// // The root path is the identity
/// assert_eq!(reconstruct(&Path::root(), json!(42)), json!(42));
/// ```
pub fn reconstruct(path: &Path, value: Value) -> Value {
    path.segments().iter().rev().fold(value, |acc, key| {
        let mut map = Map::new();
        map.insert(key.clone(), acc);
        Value::Object(map)
    })
}

/// Build the merged minimal shape implied by several paths
///
/// Deep-merges the per-path reconstruction of `value` for every path,
/// in order. Later paths win where branches collide on a scalar.
///
/// # Examples
///
/// ```
/// use pluckit_core::{reconstruct_multi, Path};
/// use serde_json::json;
///
/// let name: Path = "name".parse().unwrap();
/// let city: Path = "data.address.city".parse().unwrap();
///
/// let shape = reconstruct_multi(&[name, city], &json!(""));
/// assert_eq!(shape, json!({
///     "name": "",
///     "data": { "address": { "city": "" } }
/// }));
/// ```
pub fn reconstruct_multi(paths: &[Path], value: &Value) -> Value {
    let mut out = Value::Object(Map::new());
    for path in paths {
        let branch = reconstruct(path, value.clone());
        deep_merge(&mut out, &branch);
    }
    out
}

/// Recursively merge one value into another
///
/// Object keys are merged per key: both-objects recurse, anything else
/// is replaced by a clone of the incoming value. A non-object incoming
/// value replaces the target entirely. Unlike a merge *patch*, incoming
/// `null` is stored, not treated as a deletion marker.
pub fn deep_merge(target: &mut Value, incoming: &Value) {
    if let Value::Object(incoming_map) = incoming {
        if !target.is_object() {
            *target = Value::Object(Map::new());
        }
        if let Value::Object(target_map) = target {
            for (key, value) in incoming_map {
                if let Some(slot) = target_map.get_mut(key) {
                    deep_merge(slot, value);
                } else {
                    target_map.insert(key.clone(), value.clone());
                }
            }
        }
    } else {
        *target = incoming.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user() -> Value {
        json!({
            "name": "Alice",
            "age": 30,
            "nickname": null,
            "tags": ["admin"],
            "data": {
                "address": { "street": "123 Main St", "city": "Metropolis" }
            }
        })
    }

    fn path_strings(paths: &[Path]) -> Vec<String> {
        paths.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_all_paths_depth_first_parents_before_children() {
        let paths = path_strings(&all_paths(&user()));
        assert_eq!(
            paths,
            vec![
                "age",
                "data",
                "data.address",
                "data.address.city",
                "data.address.street",
                "name",
                "nickname",
                "tags",
            ]
        );
    }

    #[test]
    fn test_all_paths_arrays_are_leaves() {
        let v = json!({ "items": [{ "inner": 1 }] });
        let paths = path_strings(&all_paths(&v));
        assert_eq!(paths, vec!["items"]);
    }

    #[test]
    fn test_all_paths_non_object_root_is_empty() {
        assert!(all_paths(&json!(42)).is_empty());
        assert!(all_paths(&json!([1, 2])).is_empty());
    }

    #[test]
    fn test_paths_with_kind_extends() {
        let paths = path_strings(&paths_with_kind(
            &user(),
            &[ValueKind::String],
            MatchMode::Extends,
        ));
        assert_eq!(
            paths,
            vec!["data.address.city", "data.address.street", "name"]
        );
    }

    #[test]
    fn test_paths_with_kind_extends_widened_with_null() {
        // Widening the constraint with Null also captures nullable paths
        let paths = path_strings(&paths_with_kind(
            &user(),
            &[ValueKind::String, ValueKind::Null],
            MatchMode::Extends,
        ));
        assert_eq!(
            paths,
            vec!["data.address.city", "data.address.street", "name", "nickname"]
        );
    }

    #[test]
    fn test_paths_with_kind_equals_singleton() {
        let paths = path_strings(&paths_with_kind(
            &user(),
            &[ValueKind::Null],
            MatchMode::Equals,
        ));
        assert_eq!(paths, vec!["nickname"]);
    }

    #[test]
    fn test_paths_with_kind_equals_rejects_widened_set() {
        let paths = paths_with_kind(
            &user(),
            &[ValueKind::String, ValueKind::Null],
            MatchMode::Equals,
        );
        assert!(paths.is_empty());
    }

    #[test]
    fn test_indexable_paths() {
        let paths = path_strings(&indexable_paths(&user()));
        assert_eq!(
            paths,
            vec!["age", "data.address.city", "data.address.street", "name"]
        );
    }

    #[test]
    fn test_reconstruct_single_segment() {
        let p: Path = "name".parse().unwrap();
        assert_eq!(reconstruct(&p, json!("A")), json!({ "name": "A" }));
    }

    #[test]
    fn test_reconstruct_root_is_identity() {
        assert_eq!(reconstruct(&Path::root(), json!([1])), json!([1]));
    }

    #[test]
    fn test_reconstruct_then_resolve_round_trip() {
        let p: Path = "a.b.c".parse().unwrap();
        let shape = reconstruct(&p, json!(7));
        assert_eq!(get_at_path(&shape, &p), Some(&json!(7)));
    }

    #[test]
    fn test_reconstruct_multi_merges_branches() {
        let a: Path = "data.address.city".parse().unwrap();
        let b: Path = "data.address.street".parse().unwrap();
        let shape = reconstruct_multi(&[a, b], &json!(""));
        assert_eq!(
            shape,
            json!({ "data": { "address": { "city": "", "street": "" } } })
        );
    }

    #[test]
    fn test_reconstruct_multi_empty_paths() {
        assert_eq!(reconstruct_multi(&[], &json!("x")), json!({}));
    }

    #[test]
    fn test_deep_merge_disjoint_keys() {
        let mut target = json!({ "a": 1 });
        deep_merge(&mut target, &json!({ "b": 2 }));
        assert_eq!(target, json!({ "a": 1, "b": 2 }));
    }

    #[test]
    fn test_deep_merge_recurses_objects() {
        let mut target = json!({ "a": { "x": 1 } });
        deep_merge(&mut target, &json!({ "a": { "y": 2 } }));
        assert_eq!(target, json!({ "a": { "x": 1, "y": 2 } }));
    }

    #[test]
    fn test_deep_merge_incoming_scalar_wins() {
        let mut target = json!({ "a": { "x": 1 } });
        deep_merge(&mut target, &json!({ "a": 5 }));
        assert_eq!(target, json!({ "a": 5 }));
    }

    #[test]
    fn test_deep_merge_null_is_stored_not_deleted() {
        let mut target = json!({ "a": 1 });
        deep_merge(&mut target, &json!({ "a": null }));
        assert_eq!(target, json!({ "a": null }));
    }

    #[test]
    fn test_kind_of() {
        assert_eq!(kind_of(&json!(null)), ValueKind::Null);
        assert_eq!(kind_of(&json!(true)), ValueKind::Bool);
        assert_eq!(kind_of(&json!(1.5)), ValueKind::Number);
        assert_eq!(kind_of(&json!("s")), ValueKind::String);
        assert_eq!(kind_of(&json!([])), ValueKind::Array);
        assert_eq!(kind_of(&json!({})), ValueKind::Object);
    }
}
