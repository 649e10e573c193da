//! Pluck: a path-bound toolkit of get/map/filter/sort
//!
//! A [`Pluck`] fixes one path and an optional fallback once, then hands
//! out the four operations over that location. The same `Pluck` can be
//! applied to any number of values, so a path string is written (and
//! parsed) exactly once per call site.

use pluckit_core::{deep_set, get_at_path, Path, PathParseError};
use serde_json::Value;
use std::cmp::Ordering;

/// A toolkit of operations bound to one path and fallback
///
/// Construct with [`Pluck::new`] / [`Pluck::with_fallback`], or via the
/// string-parsing helpers [`pluck`] / [`pluck_or`].
///
/// # Examples
///
/// ```
/// use pluckit_query::pluck;
/// use serde_json::json;
///
/// let users = vec![
///     json!({ "name": "Alice", "age": 30, "address": { "city": "Metropolis" } }),
///     json!({ "name": "Bob", "age": 25, "address": { "city": "Gotham" } }),
/// ];
///
/// // get
/// let by_city = pluck("address.city").unwrap();
/// assert_eq!(by_city.get(&users[0]), Some(json!("Metropolis")));
///
/// // filter
/// let in_gotham = by_city.filter(|city, _| city == Some(&json!("Gotham")));
/// let gothamites: Vec<_> = users.iter().filter(|u| in_gotham(u)).collect();
/// assert_eq!(gothamites.len(), 1);
///
/// // sort
/// let by_age = pluck("age").unwrap();
/// let cmp = by_age.sort(|a, b| {
///     let a = a.and_then(|v| v.as_i64()).unwrap_or(0);
///     let b = b.and_then(|v| v.as_i64()).unwrap_or(0);
///     a.cmp(&b)
/// });
/// let mut sorted = users.clone();
/// sorted.sort_by(|a, b| cmp(a, b));
/// assert_eq!(sorted[0]["name"], json!("Bob"));
///
/// // map: writes back into a fresh value, the input is untouched
/// let double_age = by_age.map(|age, _| {
///     json!(age.and_then(|v| v.as_i64()).unwrap_or(0) * 2)
/// });
/// let updated = double_age(&users[0]);
/// assert_eq!(updated["age"], json!(60));
/// assert_eq!(users[0]["age"], json!(30));
/// ```
#[derive(Debug, Clone)]
pub struct Pluck {
    path: Path,
    fallback: Option<Value>,
}

impl Pluck {
    /// Bind a toolkit to a path, with no fallback
    pub fn new(path: Path) -> Self {
        Pluck {
            path,
            fallback: None,
        }
    }

    /// Bind a toolkit to a path with a fallback value
    ///
    /// The fallback is substituted whenever the path does not resolve.
    /// A stored `null` is a real value and is not replaced.
    pub fn with_fallback(path: Path, fallback: Value) -> Self {
        Pluck {
            path,
            fallback: Some(fallback),
        }
    }

    /// The path this toolkit is bound to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the value at the bound path
    ///
    /// Returns the resolved value (cloned), else the fallback (cloned),
    /// else `None`.
    pub fn get(&self, object: &Value) -> Option<Value> {
        get_at_path(object, &self.path)
            .cloned()
            .or_else(|| self.fallback.clone())
    }

    /// Build a transformer that rewrites the value at the bound path
    ///
    /// The transform receives the current value (with fallback applied)
    /// and the whole object, and returns the replacement. The returned
    /// closure produces a fresh value with only the path's branch
    /// replaced; its input is never mutated.
    pub fn map<'a, F>(&'a self, transform: F) -> impl Fn(&Value) -> Value + 'a
    where
        F: Fn(Option<Value>, &Value) -> Value + 'a,
    {
        move |object| deep_set(object, &self.path, transform(self.get(object), object))
    }

    /// Build a predicate over the value at the bound path
    ///
    /// The predicate receives the current value (with fallback applied)
    /// and the whole object.
    pub fn filter<'a, F>(&'a self, predicate: F) -> impl Fn(&Value) -> bool + 'a
    where
        F: Fn(Option<&Value>, &Value) -> bool + 'a,
    {
        move |object| {
            let value = self.get(object);
            predicate(value.as_ref(), object)
        }
    }

    /// Build a comparator over the value at the bound path
    ///
    /// Both sides are read with the same fallback.
    pub fn sort<'a, F>(&'a self, comparator: F) -> impl Fn(&Value, &Value) -> Ordering + 'a
    where
        F: Fn(Option<&Value>, Option<&Value>) -> Ordering + 'a,
    {
        move |a, b| comparator(self.get(a).as_ref(), self.get(b).as_ref())
    }
}

/// Parse a dotted path string into a [`Pluck`] with no fallback
pub fn pluck(path: &str) -> Result<Pluck, PathParseError> {
    Ok(Pluck::new(path.parse()?))
}

/// Parse a dotted path string into a [`Pluck`] with a fallback
pub fn pluck_or(path: &str, fallback: Value) -> Result<Pluck, PathParseError> {
    Ok(Pluck::with_fallback(path.parse()?, fallback))
}
