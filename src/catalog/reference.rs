// src/catalog/reference.rs

use once_cell::sync::Lazy;
use regex::Regex;

/// Marker for gettext source reference comments, e.g. `#: ../src/a.tsx:12`
static REFERENCE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^#:\s+(.+)$").expect("reference line pattern is valid"));

/// Trailing `:line` or `:line:column` location on a reference token
static LOCATION_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":[0-9]+(?::[0-9]+)?$").expect("location suffix pattern is valid"));

/// Convert every backslash separator to a forward slash.
pub fn normalize_path(input: &str) -> String {
    input.replace('\\', "/")
}

/// Percent-decode a path segment the way `decodeURIComponent` does, but never fail.
///
/// A `%` that is not followed by two hex digits, or escapes that decode to
/// invalid UTF-8, leave the input untouched.
pub fn safe_decode_uri_component(input: &str) -> String {
    if !has_well_formed_escapes(input) {
        return input.to_string();
    }

    match urlencoding::decode(input) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => input.to_string(),
    }
}

fn has_well_formed_escapes(input: &str) -> bool {
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'%' {
            i += 1;
            continue;
        }
        match bytes.get(i + 1..i + 3) {
            Some(pair) if pair.iter().all(u8::is_ascii_hexdigit) => i += 3,
            _ => return false,
        }
    }
    true
}

/// Remove a trailing `:line` or `:line:column` from a reference token.
pub fn strip_location_suffix(token: &str) -> &str {
    match LOCATION_SUFFIX.find(token) {
        Some(m) => &token[..m.start()],
        None => token,
    }
}

/// Turn a raw reference token into a normalized source path.
///
/// Order matters: the location suffix is stripped before decoding so that an
/// encoded colon can never be mistaken for a line marker.
pub fn normalize_reference(token: &str) -> String {
    normalize_path(&safe_decode_uri_component(strip_location_suffix(token)))
}

/// Every whitespace-separated token of every reference line, in file order.
pub fn reference_tokens(text: &str) -> impl Iterator<Item = &str> {
    REFERENCE_LINE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .flat_map(|m| m.as_str().split_whitespace())
}
