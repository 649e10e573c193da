//! Value access along paths
//!
//! This module implements the runtime traversal primitives:
//! - `get_at_path`: total read, `None` on any missing/untraversable segment
//! - `get_or`: read with a fallback substituted on absence
//! - `resolve`: diagnosing read that reports *why* a path failed
//! - `set_at_path` / `deep_set`: write through a path, creating (or
//!   replacing) intermediate objects as needed
//!
//! Absence and stored `null` are distinct: a stored `null` is a real value
//! and is returned as-is, never replaced by a fallback.

use crate::path::Path;
use serde_json::{Map, Value};
use thiserror::Error;

// =============================================================================
// Errors
// =============================================================================

/// Error type for diagnosing path resolution
///
/// Produced only by [`resolve`]; the plain accessors ([`get_at_path`],
/// [`get_or`]) degrade to absence instead of erroring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// A segment's key was absent from the object it was applied to
    #[error("path not found: missing key '{key}' at segment {segment}")]
    NotFound {
        /// Index of the failing segment
        segment: usize,
        /// The key that was absent
        key: String,
    },

    /// A segment was applied to a non-object value
    #[error("cannot traverse '{key}' at segment {segment}: expected object, found {found}")]
    NotTraversable {
        /// Index of the failing segment
        segment: usize,
        /// The key that could not be applied
        key: String,
        /// Type name of the value that blocked traversal
        found: &'static str,
    },
}

/// Helper to get type name for error messages
pub(crate) fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// =============================================================================
// Reads
// =============================================================================

/// Get the value at a path within a nested value
///
/// Walks the path segment by segment through nested objects, returning a
/// reference to the value at the target location. The root path returns
/// the value itself.
///
/// Returns `None` if any segment is missing or lands on a non-object —
/// including when the root value itself is not an object. This function
/// never fails: an invalid path degrades to absence.
///
/// # Examples
///
/// ```
/// use pluckit_core::{get_at_path, Path};
/// use serde_json::json;
///
/// let user = json!({
///     "name": "Alice",
///     "data": { "address": { "city": "Metropolis" } }
/// });
///
/// let path: Path = "data.address.city".parse().unwrap();
/// assert_eq!(get_at_path(&user, &path).unwrap().as_str(), Some("Metropolis"));
///
/// // Missing segments degrade to None, never an error
/// let missing: Path = "data.phone".parse().unwrap();
/// assert_eq!(get_at_path(&user, &missing), None);
///
/// // The root path is the identity
/// assert_eq!(get_at_path(&user, &Path::root()), Some(&user));
/// ```
pub fn get_at_path<'a>(value: &'a Value, path: &Path) -> Option<&'a Value> {
    let mut current = value;

    for key in path.segments() {
        current = current.as_object()?.get(key)?;
    }

    Some(current)
}

/// Get the value at a path, substituting a fallback on absence
///
/// The fallback is used only when the path does not resolve. A stored
/// `null` is a real value and is returned, not replaced.
///
/// # Examples
///
/// ```
/// use pluckit_core::{get_or, Path};
/// use serde_json::{json, Value};
///
/// let user = json!({ "name": "Alice", "nickname": null });
/// let fallback = Value::String("Unknown".into());
///
/// let missing: Path = "alias".parse().unwrap();
/// assert_eq!(get_or(&user, &missing, &fallback), &fallback);
///
/// // Stored null is returned as-is
/// let nickname: Path = "nickname".parse().unwrap();
/// assert_eq!(get_or(&user, &nickname, &fallback), &Value::Null);
/// ```
pub fn get_or<'a>(value: &'a Value, path: &Path, fallback: &'a Value) -> &'a Value {
    get_at_path(value, path).unwrap_or(fallback)
}

/// Resolve a path against a value, diagnosing failures
///
/// The validating twin of [`get_at_path`]: identical traversal, but a
/// failed resolution reports which segment failed and why. Use this to
/// check a path against an exemplar value up front; use `get_at_path`
/// on the hot read side.
///
/// # Examples
///
/// ```
/// use pluckit_core::{resolve, Path, PathError};
/// use serde_json::json;
///
/// let user = json!({ "name": "Alice", "tags": ["a", "b"] });
///
/// let name: Path = "name".parse().unwrap();
/// assert!(resolve(&user, &name).is_ok());
///
/// let missing: Path = "age".parse().unwrap();
/// assert_eq!(
///     resolve(&user, &missing).unwrap_err(),
///     PathError::NotFound { segment: 0, key: "age".into() }
/// );
///
/// // Arrays are leaves: traversal into them is a type error
/// let inside_array: Path = "tags.first".parse().unwrap();
/// assert_eq!(
///     resolve(&user, &inside_array).unwrap_err(),
///     PathError::NotTraversable { segment: 1, key: "first".into(), found: "array" }
/// );
/// ```
pub fn resolve<'a>(value: &'a Value, path: &Path) -> Result<&'a Value, PathError> {
    let mut current = value;

    for (i, key) in path.segments().iter().enumerate() {
        let obj = current.as_object().ok_or_else(|| PathError::NotTraversable {
            segment: i,
            key: key.clone(),
            found: value_type_name(current),
        })?;
        current = obj.get(key).ok_or_else(|| PathError::NotFound {
            segment: i,
            key: key.clone(),
        })?;
    }

    Ok(current)
}

// =============================================================================
// Writes
// =============================================================================

/// Reborrow a slot as a mutable object map, replacing non-objects
///
/// Intermediate values that are not objects (including `null`) are
/// replaced with a fresh empty object so the write can proceed.
fn as_object_slot(slot: &mut Value) -> &mut Map<String, Value> {
    if !slot.is_object() {
        *slot = Value::Object(Map::new());
    }
    match slot {
        Value::Object(map) => map,
        _ => unreachable!("slot was just replaced with an object"),
    }
}

/// Set the value at a path, in place
///
/// Creates intermediate objects as needed while walking the path; an
/// intermediate that exists but is not an object is replaced by a fresh
/// object. The root path replaces the whole value. This write is total —
/// it cannot fail.
///
/// # Examples
///
/// ```
/// use pluckit_core::{get_at_path, set_at_path, Path};
/// use serde_json::json;
///
/// let mut value = json!({});
/// let path: Path = "user.profile.name".parse().unwrap();
/// set_at_path(&mut value, &path, json!("Alice"));
/// assert_eq!(get_at_path(&value, &path), Some(&json!("Alice")));
/// ```
pub fn set_at_path(root: &mut Value, path: &Path, value: Value) {
    let Some((last, parents)) = path.segments().split_last() else {
        *root = value;
        return;
    };

    let mut current = root;
    for key in parents {
        current = as_object_slot(current)
            .entry(key.clone())
            .or_insert_with(|| Value::Object(Map::new()));
    }
    as_object_slot(current).insert(last.clone(), value);
}

/// Set the value at a path, returning a new value
///
/// The non-mutating variant of [`set_at_path`]: the input is cloned, the
/// write is applied to the copy, and the copy is returned. The input is
/// never modified. This is the write primitive behind `Pluck::map`.
///
/// # Examples
///
/// ```
/// use pluckit_core::{deep_set, Path};
/// use serde_json::json;
///
/// let user = json!({ "name": "Alice", "age": 30 });
/// let path: Path = "age".parse().unwrap();
///
/// let updated = deep_set(&user, &path, json!(31));
/// assert_eq!(updated["age"], json!(31));
/// assert_eq!(user["age"], json!(30)); // input untouched
/// ```
pub fn deep_set(value: &Value, path: &Path, new_value: Value) -> Value {
    let mut out = value.clone();
    set_at_path(&mut out, path, new_value);
    out
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
            "tags": ["admin", "staff"],
            "data": {
                "address": { "street": "123 Main St", "city": "Metropolis" }
            }
        })
    }

    #[test]
    fn test_get_top_level() {
        let u = user();
        let p: Path = "name".parse().unwrap();
        assert_eq!(get_at_path(&u, &p), Some(&json!("Alice")));
    }

    #[test]
    fn test_get_nested() {
        let u = user();
        let p: Path = "data.address.city".parse().unwrap();
        assert_eq!(get_at_path(&u, &p), Some(&json!("Metropolis")));
    }

    #[test]
    fn test_get_root_is_identity() {
        let u = user();
        assert_eq!(get_at_path(&u, &Path::root()), Some(&u));
    }

    #[test]
    fn test_get_missing_key() {
        let u = user();
        let p: Path = "phone".parse().unwrap();
        assert_eq!(get_at_path(&u, &p), None);
    }

    #[test]
    fn test_get_missing_deep() {
        let u = user();
        let p: Path = "data.phone.home".parse().unwrap();
        assert_eq!(get_at_path(&u, &p), None);
    }

    #[test]
    fn test_get_through_primitive_is_none() {
        let u = user();
        let p: Path = "name.length".parse().unwrap();
        assert_eq!(get_at_path(&u, &p), None);
    }

    #[test]
    fn test_get_through_array_is_none() {
        // Arrays are leaves
        let u = user();
        let p: Path = "tags.first".parse().unwrap();
        assert_eq!(get_at_path(&u, &p), None);
    }

    #[test]
    fn test_get_stored_null_is_a_value() {
        let u = user();
        let p: Path = "nickname".parse().unwrap();
        assert_eq!(get_at_path(&u, &p), Some(&Value::Null));
    }

    #[test]
    fn test_get_on_non_object_root() {
        let v = json!(42);
        let p: Path = "anything".parse().unwrap();
        assert_eq!(get_at_path(&v, &p), None);
    }

    #[test]
    fn test_get_is_idempotent() {
        let u = user();
        let p: Path = "data.address.city".parse().unwrap();
        assert_eq!(get_at_path(&u, &p), get_at_path(&u, &p));
    }

    #[test]
    fn test_get_or_fallback_on_absence() {
        let u = user();
        let p: Path = "phone".parse().unwrap();
        let fb = json!("n/a");
        assert_eq!(get_or(&u, &p, &fb), &fb);
    }

    #[test]
    fn test_get_or_keeps_stored_null() {
        let u = user();
        let p: Path = "nickname".parse().unwrap();
        let fb = json!("n/a");
        assert_eq!(get_or(&u, &p, &fb), &Value::Null);
    }

    #[test]
    fn test_resolve_ok() {
        let u = user();
        let p: Path = "data.address".parse().unwrap();
        assert!(resolve(&u, &p).is_ok());
    }

    #[test]
    fn test_resolve_not_found_reports_segment() {
        let u = user();
        let p: Path = "data.missing.deeper".parse().unwrap();
        assert_eq!(
            resolve(&u, &p).unwrap_err(),
            PathError::NotFound {
                segment: 1,
                key: "missing".into()
            }
        );
    }

    #[test]
    fn test_resolve_not_traversable_reports_kind() {
        let u = user();
        let p: Path = "age.unit".parse().unwrap();
        assert_eq!(
            resolve(&u, &p).unwrap_err(),
            PathError::NotTraversable {
                segment: 1,
                key: "unit".into(),
                found: "number"
            }
        );
    }

    #[test]
    fn test_set_existing_key() {
        let mut u = user();
        let p: Path = "age".parse().unwrap();
        set_at_path(&mut u, &p, json!(31));
        assert_eq!(u["age"], json!(31));
    }

    #[test]
    fn test_set_creates_intermediates() {
        let mut v = json!({});
        let p: Path = "a.b.c".parse().unwrap();
        set_at_path(&mut v, &p, json!(1));
        assert_eq!(v, json!({ "a": { "b": { "c": 1 } } }));
    }

    #[test]
    fn test_set_replaces_non_object_intermediate() {
        let mut v = json!({ "a": 5 });
        let p: Path = "a.b".parse().unwrap();
        set_at_path(&mut v, &p, json!(1));
        assert_eq!(v, json!({ "a": { "b": 1 } }));
    }

    #[test]
    fn test_set_root_replaces_value() {
        let mut v = json!({ "a": 1 });
        set_at_path(&mut v, &Path::root(), json!("replaced"));
        assert_eq!(v, json!("replaced"));
    }

    #[test]
    fn test_set_preserves_siblings() {
        let mut u = user();
        let p: Path = "data.address.city".parse().unwrap();
        set_at_path(&mut u, &p, json!("Gotham"));
        assert_eq!(u["data"]["address"]["street"], json!("123 Main St"));
        assert_eq!(u["data"]["address"]["city"], json!("Gotham"));
    }

    #[test]
    fn test_deep_set_does_not_mutate_input() {
        let u = user();
        let before = u.clone();
        let p: Path = "data.address.city".parse().unwrap();
        let updated = deep_set(&u, &p, json!("Gotham"));
        assert_eq!(u, before);
        assert_eq!(updated["data"]["address"]["city"], json!("Gotham"));
    }

    #[test]
    fn test_deep_set_then_get_round_trip() {
        let u = user();
        let p: Path = "brand.new.leaf".parse().unwrap();
        let updated = deep_set(&u, &p, json!([1, 2]));
        assert_eq!(get_at_path(&updated, &p), Some(&json!([1, 2])));
    }
}
