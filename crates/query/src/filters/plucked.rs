//! String matching across plucked paths

use super::matches::{matches_string, MatchOptions};
use crate::pluck::Pluck;
use pluckit_core::Path;
use serde_json::Value;

/// Parameters for [`matches_plucked_strings`]
#[derive(Debug, Clone, Default)]
pub struct PluckedStringsParams {
    /// String matching options applied to every path
    pub opts: MatchOptions,
    /// Combine per-path results with AND instead of OR (default: false)
    pub and_mode: bool,
    /// Fallback string applied uniformly to all paths when a path does
    /// not resolve
    pub fallback: Option<String>,
}

/// A needle matcher over one or more string-valued paths of an object
///
/// Built by [`matches_plucked_strings`]; call [`matcher`](Self::matcher)
/// with a needle to obtain a predicate over objects.
#[derive(Debug, Clone)]
pub struct PluckedStrings {
    plucks: Vec<Pluck>,
    opts: MatchOptions,
    and_mode: bool,
}

impl PluckedStrings {
    /// Build a predicate testing the needle against every configured path
    ///
    /// A path that resolves to a non-string, or to nothing with no
    /// fallback configured, contributes `false`. Per-path results are
    /// OR-combined by default, AND-combined in `and_mode`.
    pub fn matcher<'a>(&'a self, needle: &str) -> impl Fn(&Value) -> bool + 'a {
        let matches_needle = matches_string(needle, self.opts);

        move |object: &Value| {
            let mut hits = self.plucks.iter().map(|pluck| {
                pluck
                    .get(object)
                    .as_ref()
                    .and_then(Value::as_str)
                    .map(&matches_needle)
                    .unwrap_or(false)
            });
            if self.and_mode {
                hits.all(|hit| hit)
            } else {
                hits.any(|hit| hit)
            }
        }
    }
}

/// Build a multi-path string matcher
///
/// For each path, the value is extracted (with the optional uniform
/// fallback) and tested against the needle via [`matches_string`]; the
/// per-path booleans are OR-combined by default, AND-combined when
/// `params.and_mode` is set.
///
/// # Examples
///
/// ```
/// use pluckit_query::filters::{matches_plucked_strings, PluckedStringsParams};
/// use serde_json::json;
///
/// let products = vec![
///     json!({ "id": "123", "name": "SuperWidget", "meta": { "blurb": "the ultimate widget" } }),
///     json!({ "id": "456", "name": "Gadget", "meta": { "blurb": "a gadget" } }),
/// ];
///
/// let fields = matches_plucked_strings(
///     vec!["name".parse().unwrap(), "meta.blurb".parse().unwrap()],
///     PluckedStringsParams::default(),
/// );
///
/// let widgets: Vec<_> = {
///     let is_widget = fields.matcher("widget");
///     products.iter().filter(|p| is_widget(p)).collect()
/// };
/// assert_eq!(widgets.len(), 1);
/// ```
pub fn matches_plucked_strings(
    paths: Vec<Path>,
    params: PluckedStringsParams,
) -> PluckedStrings {
    let PluckedStringsParams {
        opts,
        and_mode,
        fallback,
    } = params;

    let plucks = paths
        .into_iter()
        .map(|path| match &fallback {
            Some(text) => Pluck::with_fallback(path, Value::String(text.clone())),
            None => Pluck::new(path),
        })
        .collect();

    PluckedStrings {
        plucks,
        opts,
        and_mode,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn users() -> Vec<Value> {
        vec![
            json!({ "name": "Alice", "data": { "address": { "city": "Metropolis" } } }),
            json!({ "name": "Bob", "data": { "address": { "city": "Gotham" } } }),
            json!({ "name": "Orlean", "data": { "address": { "city": "Orlean" } } }),
        ]
    }

    fn paths(specs: &[&str]) -> Vec<Path> {
        specs.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_or_mode_matches_any_path() {
        let m = matches_plucked_strings(
            paths(&["name", "data.address.city"]),
            PluckedStringsParams::default(),
        );
        let matcher = m.matcher("Alice");
        let matched: Vec<_> = users().into_iter().filter(|u| matcher(u)).collect();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0]["name"], json!("Alice"));
    }

    #[test]
    fn test_or_mode_matches_either_field() {
        let m = matches_plucked_strings(
            paths(&["name", "data.address.city"]),
            PluckedStringsParams::default(),
        );
        // "Orlean" appears in both name and city of the third user
        let matcher = m.matcher("orlean");
        let matched: Vec<_> = users().into_iter().filter(|u| matcher(u)).collect();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0]["name"], json!("Orlean"));
    }

    #[test]
    fn test_and_mode_requires_all_paths() {
        let m = matches_plucked_strings(
            paths(&["name", "data.address.city"]),
            PluckedStringsParams {
                and_mode: true,
                ..Default::default()
            },
        );
        // Only Orlean matches on both name and city
        let matcher = m.matcher("Orlean");
        let matched: Vec<_> = users().into_iter().filter(|u| matcher(u)).collect();
        assert_eq!(matched.len(), 1);

        // Alice matches name but not city
        let matcher = m.matcher("Alice");
        assert_eq!(users().into_iter().filter(|u| matcher(u)).count(), 0);
    }

    #[test]
    fn test_missing_path_without_fallback_never_matches() {
        let m = matches_plucked_strings(
            paths(&["invalid.path"]),
            PluckedStringsParams::default(),
        );
        let matcher = m.matcher("anything");
        assert_eq!(users().into_iter().filter(|u| matcher(u)).count(), 0);
    }

    #[test]
    fn test_missing_path_with_fallback_matches_fallback() {
        let m = matches_plucked_strings(
            paths(&["invalid.path", "invalid.path.deeper"]),
            PluckedStringsParams {
                fallback: Some("Unknown".to_string()),
                ..Default::default()
            },
        );
        let matcher = m.matcher("Unknown");
        assert_eq!(users().into_iter().filter(|u| matcher(u)).count(), users().len());
    }

    #[test]
    fn test_case_sensitive_opts_pass_through() {
        let m = matches_plucked_strings(
            paths(&["name"]),
            PluckedStringsParams {
                opts: MatchOptions {
                    case_sensitive: true,
                    ..Default::default()
                },
                ..Default::default()
            },
        );
        let matcher = m.matcher("alice");
        assert_eq!(users().into_iter().filter(|u| matcher(u)).count(), 0);
    }

    #[test]
    fn test_match_full_opts_pass_through() {
        let m = matches_plucked_strings(
            paths(&["name"]),
            PluckedStringsParams {
                opts: MatchOptions {
                    match_full: true,
                    ..Default::default()
                },
                ..Default::default()
            },
        );
        let matcher = m.matcher("Ali");
        assert_eq!(users().into_iter().filter(|u| matcher(u)).count(), 0);
    }

    #[test]
    fn test_non_string_value_never_matches() {
        let m = matches_plucked_strings(paths(&["age"]), PluckedStringsParams::default());
        let matcher = m.matcher("30");
        assert!(!matcher(&json!({ "age": 30 })));
    }
}
