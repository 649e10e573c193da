//! Keyed lookup over an indexed collection
//!
//! [`create_get_by_key`] indexes a collection once up front and returns
//! a [`KeyedLookup`] whose [`get`](KeyedLookup::get) resolves keys in
//! constant time. What happens on a missing key is configured at build
//! time: lenient lookups report `Ok(None)`, strict lookups report
//! [`LookupError::KeyNotFound`] with a default or caller-supplied
//! message.

use crate::dict::{build_grouped_index, build_index, DictKey, DictParams};
use pluckit_core::Path;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Errors reported by [`KeyedLookup::get`]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The key is not present and the lookup is strict
    #[error("{0}")]
    KeyNotFound(String),
}

/// The missing-key message of a strict lookup
///
/// Either fixed text or a builder called with the missing key. An empty
/// text (or a builder returning one) falls through to the default
/// `Key not found: <key>` message.
pub enum ErrorMessage {
    /// Fixed message text
    Text(String),
    /// Build the message from the missing key
    Builder(Box<dyn Fn(&DictKey) -> String + Send + Sync>),
}

impl ErrorMessage {
    fn render(&self, key: &DictKey) -> String {
        let msg = match self {
            ErrorMessage::Text(text) => text.clone(),
            ErrorMessage::Builder(build) => build(key),
        };
        if msg.is_empty() {
            default_message(key)
        } else {
            msg
        }
    }
}

impl fmt::Debug for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorMessage::Text(text) => f.debug_tuple("Text").field(text).finish(),
            ErrorMessage::Builder(_) => f.debug_tuple("Builder").field(&"<fn>").finish(),
        }
    }
}

impl From<&str> for ErrorMessage {
    fn from(text: &str) -> Self {
        ErrorMessage::Text(text.to_string())
    }
}

impl From<String> for ErrorMessage {
    fn from(text: String) -> Self {
        ErrorMessage::Text(text)
    }
}

fn default_message(key: &DictKey) -> String {
    format!("Key not found: {key}")
}

/// Parameters for [`create_get_by_key`]
#[derive(Debug)]
pub struct LookupParams {
    /// Treat missing keys as `Ok(None)` instead of an error
    /// (default: true)
    pub is_partial: bool,
    /// Message for strict missing-key errors
    ///
    /// Setting this makes the lookup strict.
    pub error_msg: Option<ErrorMessage>,
    /// Store the value at this path instead of the whole element
    pub value_path: Option<Path>,
    /// Group same-key elements into arrays instead of keeping the last
    pub group: bool,
}

impl Default for LookupParams {
    fn default() -> Self {
        LookupParams {
            is_partial: true,
            error_msg: None,
            value_path: None,
            group: false,
        }
    }
}

/// A prebuilt key-to-value lookup over a collection
///
/// Built once by [`create_get_by_key`]; subsequent lookups do not touch
/// the source collection.
#[derive(Debug)]
pub struct KeyedLookup {
    entries: HashMap<DictKey, Value>,
    strict: bool,
    error_msg: Option<ErrorMessage>,
}

impl KeyedLookup {
    /// Resolve a key
    ///
    /// Returns `Ok(Some(value))` when the key is present. For a missing
    /// key, a lenient lookup returns `Ok(None)` and a strict one
    /// returns [`LookupError::KeyNotFound`].
    pub fn get<K: Into<DictKey>>(&self, key: K) -> Result<Option<&Value>, LookupError> {
        let key = key.into();
        match self.entries.get(&key) {
            Some(value) => Ok(Some(value)),
            None if !self.strict => Ok(None),
            None => {
                let message = match &self.error_msg {
                    Some(msg) => msg.render(&key),
                    None => default_message(&key),
                };
                tracing::debug!(key = %key, "lookup miss");
                Err(LookupError::KeyNotFound(message))
            }
        }
    }

    /// Whether the key is present
    pub fn contains<K: Into<DictKey>>(&self, key: K) -> bool {
        self.entries.contains_key(&key.into())
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lookup holds no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Index a collection by `key_path` and return a reusable lookup
///
/// A default-constructed `LookupParams` yields a lenient lookup.
/// Setting `is_partial: false` or configuring an `error_msg` makes it
/// strict: missing keys become [`LookupError::KeyNotFound`].
///
/// With `group`, same-key elements accumulate into JSON arrays and
/// `get` returns the whole group.
///
/// # Examples
///
/// ```
/// use pluckit_query::lookup::{create_get_by_key, LookupParams};
/// use serde_json::json;
///
/// let users = vec![
///     json!({ "id": "A", "name": "Alice" }),
///     json!({ "id": "B", "name": "Bob" }),
/// ];
///
/// let by_id = create_get_by_key(&users, &"id".parse().unwrap(), LookupParams {
///     value_path: Some("name".parse().unwrap()),
///     ..Default::default()
/// });
///
/// assert_eq!(by_id.get("A").unwrap(), Some(&json!("Alice")));
/// assert_eq!(by_id.get("C").unwrap(), None);
/// ```
pub fn create_get_by_key(
    collection: &[Value],
    key_path: &Path,
    params: LookupParams,
) -> KeyedLookup {
    let LookupParams {
        is_partial,
        error_msg,
        value_path,
        group,
    } = params;

    let dict_params = DictParams { value_path };
    let entries = if group {
        build_grouped_index(collection, key_path, &dict_params)
            .into_iter()
            .map(|(key, values)| (key, Value::Array(values)))
            .collect()
    } else {
        build_index(collection, key_path, &dict_params)
    };

    let strict = !is_partial || error_msg.is_some();

    tracing::debug!(
        total = collection.len(),
        keys = entries.len(),
        key_path = %key_path,
        strict,
        group,
        "built keyed lookup"
    );

    KeyedLookup {
        entries,
        strict,
        error_msg,
    }
}
