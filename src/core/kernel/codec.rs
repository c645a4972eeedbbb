use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::collections::BTreeMap;

/// RFC3986 query encoding: the unreserved characters `A-Za-z0-9-_.~` pass
/// through, everything else is percent-encoded with upper-case hex digits.
/// Space becomes `%20`, never `+`.
const QUERY_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a single key or value for the query string.
#[must_use]
pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, QUERY_SET).to_string()
}

/// Encode a parameter map into its canonical query string.
///
/// Entries appear in ascending byte order of key (the `BTreeMap` iteration
/// order), `key=value` pairs joined by `&`. This exact form is the signing
/// input, so the encoding must stay deterministic.
#[must_use]
pub fn canonical_query(params: &BTreeMap<String, String>) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Append a query string to a base URL.
///
/// Leading `?`/`&` characters are stripped from the query first; an empty
/// query leaves the URL untouched.
#[must_use]
pub fn append_query(url: &str, query: &str) -> String {
    let query = query.trim_start_matches(|c| c == '?' || c == '&');
    if query.is_empty() {
        url.to_string()
    } else {
        format!("{}?{}", url, query)
    }
}
