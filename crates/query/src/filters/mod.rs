//! Composable predicate helpers
//!
//! Small boolean building blocks meant to feed iterator adapters and
//! `Pluck::filter`:
//! - [`and`] / [`or`] / [`not`]: combinator algebra over any predicate
//! - [`matches_string`]: substring / full-string matching with optional
//!   case sensitivity
//! - [`matches_plucked_strings`]: string matching across one or more
//!   paths of an object
//! - [`is_not_null`]: the JSON-null filter

mod combine;
mod matches;
mod plucked;

pub use combine::{and, not, or};
pub use matches::{matches_string, MatchOptions};
pub use plucked::{matches_plucked_strings, PluckedStrings, PluckedStringsParams};

use serde_json::Value;

/// Predicate keeping only non-`null` values
///
/// # Examples
///
/// ```
/// use pluckit_query::filters::is_not_null;
/// use serde_json::json;
///
/// let values = vec![json!("a"), json!(null), json!(1)];
/// let kept: Vec<_> = values.iter().filter(|v| is_not_null(v)).collect();
/// assert_eq!(kept.len(), 2);
/// ```
pub fn is_not_null(value: &Value) -> bool {
    !value.is_null()
}
