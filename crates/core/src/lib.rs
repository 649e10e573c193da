//! Core types and traversal primitives for pluckit
//!
//! This crate defines the foundational pieces used by the query layer:
//! - Path: dotted path into nested values, plus parse errors and limits
//! - Access: `get_at_path`, `get_or`, `resolve`, `set_at_path`, `deep_set`
//! - Algebra: path enumeration (`all_paths`, `paths_with_kind`,
//!   `indexable_paths`) and shape reconstruction (`reconstruct`,
//!   `reconstruct_multi`, `deep_merge`)
//!
//! Everything operates on `serde_json::Value`. Reads are total: a path
//! that does not resolve yields absence (`None`), never an error. The
//! one diagnosing entry point is [`resolve`], which reports which
//! segment failed and why.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod access;
pub mod algebra;
pub mod path;

// Re-export commonly used types and functions
pub use access::{deep_set, get_at_path, get_or, resolve, set_at_path, PathError};
pub use algebra::{
    all_paths, deep_merge, indexable_paths, kind_of, paths_with_kind, reconstruct,
    reconstruct_multi, MatchMode, ValueKind,
};
pub use path::{Path, PathParseError, MAX_PATH_SEGMENTS};
