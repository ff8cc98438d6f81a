// src/manifest/mod.rs

use crate::catalog::{catalog_path, discover_entries, entry_owns_catalog, CatalogKind};
use crate::error::{CatalogError, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Default prefix of manifest values, relative to the module that imports the manifest
pub const DEFAULT_LOCALES_IMPORT_PREFIX: &str = "../locales";

/// entry -> locale -> compiled catalog path
pub type Manifest = BTreeMap<String, BTreeMap<String, String>>;

/// Parameters for building the runtime catalog manifest
#[derive(Debug, Clone)]
pub struct ManifestOptions {
    pub catalog_dir: PathBuf,
    pub source_locale: String,
    pub supported_locales: Vec<String>,
    pub included_entry_prefixes: Vec<String>,
    pub locales_import_prefix: String,
}

impl ManifestOptions {
    pub fn new(catalog_dir: impl Into<PathBuf>, source_locale: impl Into<String>) -> Self {
        Self {
            catalog_dir: catalog_dir.into(),
            source_locale: source_locale.into(),
            supported_locales: Vec::new(),
            included_entry_prefixes: Vec::new(),
            locales_import_prefix: DEFAULT_LOCALES_IMPORT_PREFIX.to_string(),
        }
    }

    pub fn with_supported_locales(mut self, locales: Vec<String>) -> Self {
        self.supported_locales = locales;
        self
    }

    pub fn with_included_entry_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.included_entry_prefixes = prefixes;
        self
    }

    pub fn with_locales_import_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.locales_import_prefix = prefix.into();
        self
    }

    fn includes(&self, entry: &str) -> bool {
        self.included_entry_prefixes
            .iter()
            .any(|prefix| entry.starts_with(prefix.as_str()))
    }
}

/// Manifest plus the number of entries that passed the prefix filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ManifestResult {
    pub manifest: Manifest,
    /// Entries matching an included prefix, before the ownership check
    pub candidate_entries: usize,
}

/// Map every live entry to its compiled catalogs.
///
/// An entry is live when its source-locale catalog exists and references the
/// entry's own source file, the same rule the orphan cleanup uses. Entries
/// that fail it are left out without error.
#[must_use = "this function returns a Result that should be handled"]
pub fn build_manifest(options: &ManifestOptions) -> Result<ManifestResult> {
    let root = options.catalog_dir.as_path();
    let candidates: Vec<String> = discover_entries(root)?
        .into_iter()
        .filter(|entry| options.includes(entry))
        .collect();

    let mut manifest = Manifest::new();
    for entry in &candidates {
        if !entry_owns_catalog(root, entry, &options.source_locale)? {
            log::debug!("{entry}: excluded from manifest");
            continue;
        }

        let mut locales = BTreeMap::new();
        for locale in &options.supported_locales {
            let compiled = catalog_path(root, entry, locale, CatalogKind::Compiled);
            if compiled.is_file() {
                locales.insert(
                    locale.clone(),
                    format!(
                        "{}/{entry}/{locale}.{}",
                        options.locales_import_prefix.trim_end_matches('/'),
                        CatalogKind::Compiled.extension()
                    ),
                );
            }
        }
        manifest.insert(entry.clone(), locales);
    }

    Ok(ManifestResult {
        manifest,
        candidate_entries: candidates.len(),
    })
}

/// Write the manifest map as pretty-printed JSON, creating parent directories.
pub fn write_manifest(path: &Path, manifest: &Manifest) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| CatalogError::fs("create manifest directory", parent, e))?;
    }

    let mut json = serde_json::to_string_pretty(manifest)?;
    json.push('\n');
    fs::write(path, json).map_err(|e| CatalogError::fs("write manifest", path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write(root: &Path, rel: &str, content: &str) -> std::io::Result<()> {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap())?;
        fs::write(path, content)
    }

    #[test]
    fn test_prefix_filter_applies_before_ownership() -> Result<()> {
        let dir = tempdir()?;
        write(dir.path(), "src/app/page/en.po", "#: ../src/app/page.tsx:1\n")?;
        write(dir.path(), "src/app/page/en.mjs", "export default {}\n")?;
        write(dir.path(), "src/lib/util/en.po", "#: ../src/lib/util.ts:1\n")?;

        let options = ManifestOptions::new(dir.path(), "en")
            .with_supported_locales(vec!["en".to_string()])
            .with_included_entry_prefixes(vec!["src/app/".to_string()]);
        let result = build_manifest(&options)?;

        assert_eq!(result.candidate_entries, 1);
        assert_eq!(
            result.manifest["src/app/page"]["en"],
            "../locales/src/app/page/en.mjs"
        );
        Ok(())
    }

    #[test]
    fn test_missing_compiled_locale_is_skipped() -> Result<()> {
        let dir = tempdir()?;
        write(dir.path(), "a/en.po", "#: ../a.tsx:1\n")?;
        write(dir.path(), "a/en.mjs", "export default {}\n")?;

        let options = ManifestOptions::new(dir.path(), "en")
            .with_supported_locales(vec!["en".to_string(), "zh".to_string()])
            .with_included_entry_prefixes(vec!["a".to_string()])
            .with_locales_import_prefix("./catalogs/");
        let result = build_manifest(&options)?;

        let locales = &result.manifest["a"];
        assert_eq!(locales.len(), 1);
        assert_eq!(locales["en"], "./catalogs/a/en.mjs");
        Ok(())
    }

    #[test]
    fn test_write_manifest_creates_parent_dirs() -> Result<()> {
        let dir = tempdir()?;
        let mut manifest = Manifest::new();
        manifest.insert(
            "a".to_string(),
            BTreeMap::from([("en".to_string(), "../locales/a/en.mjs".to_string())]),
        );

        let path = dir.path().join("src/i18n/catalog-manifest.json");
        write_manifest(&path, &manifest)?;

        let written = fs::read_to_string(&path)?;
        let parsed: serde_json::Value = serde_json::from_str(&written)?;
        assert_eq!(parsed["a"]["en"], "../locales/a/en.mjs");
        assert!(written.ends_with('\n'));
        Ok(())
    }
}
