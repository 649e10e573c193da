//! Pluckit - path-based access and indexing over JSON values
//!
//! Pluckit binds dot-separated paths to reusable accessors over
//! `serde_json::Value` and builds keyed views over collections:
//!
//! - Path parsing, enumeration, and reconstruction (`Path`,
//!   `all_paths`, `reconstruct`)
//! - Path-bound getters, mappers, filters, and sort keys (`Pluck`)
//! - Predicate combinators and string matchers (`and`, `or`, `not`,
//!   `matches_string`, `matches_plucked_strings`)
//! - Collection indexing and keyed lookup (`build_dict`,
//!   `create_get_by_key`)
//!
//! # Quick Start
//!
//! ```
//! use pluckit::{create_get_by_key, pluck, LookupParams};
//! use serde_json::json;
//!
//! let users = vec![
//!     json!({ "id": "A", "name": "Alice", "address": { "city": "Metropolis" } }),
//!     json!({ "id": "B", "name": "Bob", "address": { "city": "Gotham" } }),
//! ];
//!
//! // A path bound once, reused across the collection
//! let city = pluck("address.city").unwrap();
//! assert_eq!(city.get(&users[1]), Some(json!("Gotham")));
//!
//! // Index the collection by id for constant-time lookups
//! let by_id = create_get_by_key(&users, &"id".parse().unwrap(), LookupParams::default());
//! assert_eq!(by_id.get("A").unwrap().unwrap()["name"], json!("Alice"));
//! ```

// Re-export the path layer and the query layer as one surface
pub use pluckit_core::*;
pub use pluckit_query::*;
