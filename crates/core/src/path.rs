//! Dotted paths into nested values
//!
//! This module defines the [`Path`] type used throughout the library:
//! a sequence of object-key segments written as a dot-separated string
//! (e.g. `user.address.city`). Paths address object properties only —
//! arrays and primitives are leaves as far as paths are concerned.
//!
//! The empty string parses to the root path, which addresses the whole
//! value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Limits
// =============================================================================

/// Maximum path length in segments (256 segments)
///
/// Limits the depth of paths like "a.b.c.d..." to prevent extremely deep
/// nesting and potential performance issues. Enforced by [`Path::validate`],
/// not by parsing.
pub const MAX_PATH_SEGMENTS: usize = 256;

// =============================================================================
// Errors
// =============================================================================

/// Error type for path parsing and validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathParseError {
    /// Empty segment in a dotted path (leading, trailing, or doubled dot)
    #[error("empty segment in path at segment index {0}")]
    EmptySegment(usize),

    /// Path exceeds maximum segment count
    #[error("path length {length} exceeds maximum of {max} segments")]
    TooManySegments {
        /// Actual number of segments
        length: usize,
        /// Maximum allowed number of segments
        max: usize,
    },
}

// =============================================================================
// Path
// =============================================================================

/// A dotted path into a nested value
///
/// `Path` represents a location inside a nested object structure as a
/// sequence of key segments. Paths support:
///
/// - Object property access: `name`
/// - Nested properties: `user.address.city`
/// - The root (identity) location: the empty path
///
/// Array indices and wildcards are deliberately not part of the syntax —
/// arrays are treated as leaf values by every component of this library.
///
/// # Examples
///
/// ```
/// use pluckit_core::Path;
///
/// // Build paths
/// let root = Path::root();
/// let city = Path::root().key("address").key("city");
///
/// // Parse from a string
/// let parsed: Path = "address.city".parse().unwrap();
/// assert_eq!(parsed, city);
///
/// // The empty string is the root path
/// let identity: Path = "".parse().unwrap();
/// assert!(identity.is_root());
///
/// // Round-trips through Display
/// assert_eq!(city.to_string(), "address.city");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    /// Create the root path (empty path)
    pub fn root() -> Self {
        Path {
            segments: Vec::new(),
        }
    }

    /// Create a path from a vector of key segments
    pub fn from_segments(segments: Vec<String>) -> Self {
        Path { segments }
    }

    /// Get the path segments
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Get the number of segments in the path
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if this is the root path (empty)
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Check if this is the root path
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Append a key segment (builder pattern)
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.segments.push(key.into());
        self
    }

    /// Push a key segment (mutating)
    pub fn push_key(&mut self, key: impl Into<String>) {
        self.segments.push(key.into());
    }

    /// Concatenate two paths
    ///
    /// The root path is the identity element of `join`.
    pub fn join(&self, other: &Path) -> Path {
        let mut segments = self.segments.clone();
        segments.extend(other.segments.iter().cloned());
        Path { segments }
    }

    /// Get the parent path (None if root)
    pub fn parent(&self) -> Option<Path> {
        if self.segments.is_empty() {
            None
        } else {
            let mut parent = self.clone();
            parent.segments.pop();
            Some(parent)
        }
    }

    /// Get the last segment (None if root)
    pub fn last_segment(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Check if this path is an ancestor of another (or equal)
    ///
    /// A path is an ancestor if it is a prefix of the other path.
    /// The root path is an ancestor of all paths.
    pub fn is_ancestor_of(&self, other: &Path) -> bool {
        if self.segments.len() > other.segments.len() {
            return false;
        }
        self.segments
            .iter()
            .zip(other.segments.iter())
            .all(|(a, b)| a == b)
    }

    /// Validate path length limit
    ///
    /// Returns an error if the path exceeds [`MAX_PATH_SEGMENTS`].
    pub fn validate(&self) -> Result<(), PathParseError> {
        let length = self.segments.len();
        if length > MAX_PATH_SEGMENTS {
            Err(PathParseError::TooManySegments {
                length,
                max: MAX_PATH_SEGMENTS,
            })
        } else {
            Ok(())
        }
    }
}

impl FromStr for Path {
    type Err = PathParseError;

    /// Parse a path from a dotted string
    ///
    /// The empty string parses to the root path. Any empty segment
    /// (leading dot, trailing dot, doubled dot) is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Path::root());
        }

        let mut segments = Vec::new();
        for (i, segment) in s.split('.').enumerate() {
            if segment.is_empty() {
                return Err(PathParseError::EmptySegment(i));
            }
            segments.push(segment.to_string());
        }

        Ok(Path { segments })
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}
