// src/catalog/ownership.rs

use super::reference::{normalize_reference, reference_tokens};

/// Source file extensions an entry's own module may use.
pub const OWNERSHIP_SOURCE_EXTENSIONS: &[&str] = &[
    ".ts", ".tsx", ".js", ".jsx", ".mts", ".cts", ".mjs", ".cjs", ".md", ".mdx",
];

/// Suffixes a reference must end with to belong to `entry` itself.
///
/// For `src/components/layout` this is `src/components/layout.ts`,
/// `src/components/layout.tsx`, and so on. A reference to
/// `src/components/layout/mobile-header-menu.tsx` matches none of them.
pub fn entry_source_suffixes(entry: &str) -> Vec<String> {
    OWNERSHIP_SOURCE_EXTENSIONS
        .iter()
        .map(|ext| format!("{entry}{ext}"))
        .collect()
}

/// Decide whether the source-locale catalog text of `entry` was extracted
/// from the entry's own source file rather than from a nested child entry.
///
/// The match is a suffix match on the normalized reference path because
/// references are written relative to the catalog file (`../src/...`).
/// A catalog without any reference line is never owned.
pub fn owns_content(entry: &str, source_catalog_text: &str) -> bool {
    let suffixes = entry_source_suffixes(entry);

    reference_tokens(source_catalog_text).any(|token| {
        let reference = normalize_reference(token);
        suffixes.iter().any(|suffix| reference.ends_with(suffix.as_str()))
    })
}
