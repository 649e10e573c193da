//! Pluckit query layer: path-bound accessors, predicates, and
//! collection indexing
//!
//! Builds on `pluckit-core`'s [`Path`](pluckit_core::Path) to offer:
//!
//! - [`Pluck`]: a path bound once, reused as getter, mapper, filter,
//!   or sort key over JSON values
//! - [`filters`]: predicate combinators and string matchers
//! - [`dict`]: fold a collection into a keyed container
//! - [`lookup`]: prebuilt constant-time key lookup with configurable
//!   missing-key policy
//!
//! ```
//! use pluckit_query::pluck;
//! use serde_json::json;
//!
//! let users = vec![
//!     json!({ "name": "Alice", "address": { "city": "Metropolis" } }),
//!     json!({ "name": "Bob" }),
//! ];
//!
//! let city = pluck("address.city").unwrap();
//! assert_eq!(city.get(&users[0]), Some(json!("Metropolis")));
//! assert_eq!(city.get(&users[1]), None);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dict;
pub mod filters;
pub mod lookup;
pub mod pluck;

pub use dict::{build_dict, build_grouped_dict, build_grouped_index, build_index, DictKey, DictParams};
pub use filters::{
    and, is_not_null, matches_plucked_strings, matches_string, not, or, MatchOptions,
    PluckedStrings, PluckedStringsParams,
};
pub use lookup::{create_get_by_key, ErrorMessage, KeyedLookup, LookupError, LookupParams};
pub use pluck::{pluck, pluck_or, Pluck};
