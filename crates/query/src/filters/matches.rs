//! String matching predicates

/// Options for [`matches_string`]
///
/// Both flags default to off: case-insensitive substring containment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOptions {
    /// Compare without case folding (default: false)
    pub case_sensitive: bool,
    /// Require the haystack to match the needle in full rather than
    /// contain it (default: false)
    pub match_full: bool,
}

/// Build a predicate that tests a haystack string against a needle
///
/// Unless `case_sensitive` is set, both sides are lowercased before
/// comparison. With `match_full`, the test is mutual containment —
/// haystack contains needle AND needle contains haystack — which for
/// strings is equality after folding. The mutual-containment form is
/// the contract, deliberately not simplified to `==`.
///
/// # Examples
///
/// ```
/// use pluckit_query::filters::{matches_string, MatchOptions};
///
/// let hello = matches_string("Hello", MatchOptions::default());
/// assert!(hello("Hello World"));
/// assert!(hello("say hello"));
/// assert!(!hello("Hi there"));
///
/// let exact = matches_string("Hello", MatchOptions { match_full: true, ..Default::default() });
/// assert!(exact("Hello"));
/// assert!(!exact("Hello World"));
///
/// let cased = matches_string("hello", MatchOptions { case_sensitive: true, ..Default::default() });
/// assert!(!cased("Hello"));
/// assert!(cased("oh hello"));
/// ```
pub fn matches_string(needle: &str, opts: MatchOptions) -> impl Fn(&str) -> bool {
    let needle = if opts.case_sensitive {
        needle.to_string()
    } else {
        needle.to_lowercase()
    };

    move |haystack: &str| {
        let folded;
        let haystack = if opts.case_sensitive {
            haystack
        } else {
            folded = haystack.to_lowercase();
            &folded
        };
        let haystack_contains_needle = haystack.contains(&needle);
        if opts.match_full {
            haystack_contains_needle && needle.contains(haystack)
        } else {
            haystack_contains_needle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_case_insensitive_substring() {
        let m = matches_string("Hello", MatchOptions::default());
        assert!(m("Hello World"));
        assert!(m("HELLO"));
        assert!(m("say hello!"));
        assert!(!m("Hi there"));
    }

    #[test]
    fn test_case_sensitive() {
        let m = matches_string("hello", MatchOptions {
            case_sensitive: true,
            ..Default::default()
        });
        assert!(!m("Hello"));
        assert!(m("hello"));
        assert!(m("oh hello there"));
    }

    #[test]
    fn test_match_full() {
        let m = matches_string("Hello", MatchOptions {
            match_full: true,
            ..Default::default()
        });
        assert!(!m("Hello World"));
        assert!(m("Hello"));
        assert!(m("hello")); // still case-insensitive by default
    }

    #[test]
    fn test_match_full_case_sensitive() {
        let m = matches_string("Hello", MatchOptions {
            case_sensitive: true,
            match_full: true,
        });
        assert!(m("Hello"));
        assert!(!m("hello"));
    }

    #[test]
    fn test_empty_needle_matches_everything() {
        let m = matches_string("", MatchOptions::default());
        assert!(m("anything"));
        assert!(m(""));
    }

    #[test]
    fn test_empty_needle_match_full_only_matches_empty() {
        let m = matches_string("", MatchOptions {
            match_full: true,
            ..Default::default()
        });
        assert!(m(""));
        assert!(!m("anything"));
    }
}
