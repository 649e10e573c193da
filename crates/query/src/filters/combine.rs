//! Boolean combinators over predicates
//!
//! Generic over the argument type, so the same combinators work for
//! predicates over `&Value`, `&str`, or anything else. Evaluation order
//! is specified: the first predicate runs first and short-circuits the
//! second via the native `&&` / `||`.

/// Combine two predicates with logical AND
///
/// `q` is not evaluated when `p` is false.
///
/// # Examples
///
/// ```
/// use pluckit_query::filters::and;
/// use serde_json::{json, Value};
///
/// let is_adult = |u: &Value| u["age"].as_i64().unwrap_or(0) >= 18;
/// let in_ny = |u: &Value| u["city"] == json!("New York");
///
/// let adult_in_ny = and(is_adult, in_ny);
/// assert!(adult_in_ny(&json!({ "age": 30, "city": "New York" })));
/// assert!(!adult_in_ny(&json!({ "age": 10, "city": "New York" })));
/// ```
pub fn and<A: ?Sized>(
    p: impl Fn(&A) -> bool,
    q: impl Fn(&A) -> bool,
) -> impl Fn(&A) -> bool {
    move |input| p(input) && q(input)
}

/// Combine two predicates with logical OR
///
/// `q` is not evaluated when `p` is true.
pub fn or<A: ?Sized>(
    p: impl Fn(&A) -> bool,
    q: impl Fn(&A) -> bool,
) -> impl Fn(&A) -> bool {
    move |input| p(input) || q(input)
}

/// Negate a predicate
///
/// # Examples
///
/// ```
/// use pluckit_query::filters::not;
///
/// let is_even = |n: &i64| n % 2 == 0;
/// let is_odd = not(is_even);
/// assert!(is_odd(&3));
/// ```
pub fn not<A: ?Sized>(p: impl Fn(&A) -> bool) -> impl Fn(&A) -> bool {
    move |input| !p(input)
}
