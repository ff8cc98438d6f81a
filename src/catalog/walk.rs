// src/catalog/walk.rs

use crate::error::{CatalogError, Result};
use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::ownership::owns_content;
use super::reference::normalize_path;

/// Extensions (without the dot) of files the catalog tree is made of.
pub const CATALOG_FILE_EXTENSIONS: &[&str] = &["po", "mjs"];

/// Which half of a catalog pair a file is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    /// Gettext `.po` source written by the extractor
    Source,
    /// Compiled `.mjs` module loaded by the site at runtime
    Compiled,
}

impl CatalogKind {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "po" => Some(Self::Source),
            "mjs" => Some(Self::Compiled),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Source => "po",
            Self::Compiled => "mjs",
        }
    }
}

/// A catalog file found under the catalog root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFile {
    /// Full path on disk
    pub path: PathBuf,
    /// Parent directory relative to the catalog root, `/`-separated
    pub entry: String,
    /// File stem, e.g. `en` for `en.po`
    pub locale: String,
    pub kind: CatalogKind,
}

impl CatalogFile {
    /// Describe `path` relative to `root`, or `None` if it is not a catalog file.
    pub fn from_path(root: &Path, path: &Path) -> Option<Self> {
        let kind = CatalogKind::from_path(path)?;
        let parent = path.parent()?;
        let entry = relative_entry(root, parent)?;
        let locale = path.file_stem()?.to_string_lossy().into_owned();
        Some(Self {
            path: path.to_path_buf(),
            entry,
            locale,
            kind,
        })
    }

    /// Whether the file sits inside an entry rather than at (or above) the root
    pub fn has_entry(&self) -> bool {
        is_valid_entry(&self.entry)
    }
}

fn relative_entry(root: &Path, dir: &Path) -> Option<String> {
    let rel = dir.strip_prefix(root).ok()?;
    Some(normalize_path(&rel.to_string_lossy()))
}

/// Entries never name the catalog root itself or anything outside it.
pub fn is_valid_entry(entry: &str) -> bool {
    !entry.is_empty() && entry != "." && !entry.starts_with("..")
}

/// Recursively collect every catalog file under `root`, depth-first with
/// directory listings sorted by name. A missing root yields no files.
pub fn list_catalog_files(root: &Path) -> Result<Vec<CatalogFile>> {
    if !root.exists() {
        log::debug!("Catalog directory {} does not exist", root.display());
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(file) = CatalogFile::from_path(root, entry.path()) {
            files.push(file);
        }
    }

    log::debug!(
        "Found {} catalog files under {}",
        files.len(),
        root.display()
    );
    Ok(files)
}

/// Catalog files directly inside `entry_dir`. Nested entries are not descended into.
pub fn list_catalog_files_in_entry(entry_dir: &Path) -> Result<Vec<PathBuf>> {
    let read_dir = match fs::read_dir(entry_dir) {
        Ok(read_dir) => read_dir,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(CatalogError::fs("read catalog directory", entry_dir, e)),
    };

    let mut files = Vec::new();
    for dir_entry in read_dir {
        let path = dir_entry
            .map_err(|e| CatalogError::fs("read catalog directory", entry_dir, e))?
            .path();
        if CatalogKind::from_path(&path).is_none() {
            continue;
        }
        let metadata =
            fs::metadata(&path).map_err(|e| CatalogError::fs("stat catalog file", &path, e))?;
        if metadata.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Distinct entries of the catalog tree, sorted ascending.
pub fn discover_entries(root: &Path) -> Result<Vec<String>> {
    let entries: BTreeSet<String> = list_catalog_files(root)?
        .into_iter()
        .filter(CatalogFile::has_entry)
        .map(|file| file.entry)
        .collect();

    Ok(entries.into_iter().collect())
}

/// Directory holding the catalogs of `entry`
pub fn entry_dir(root: &Path, entry: &str) -> PathBuf {
    root.join(entry)
}

/// `<root>/<entry>/<locale>.<ext>`
pub fn catalog_path(root: &Path, entry: &str, locale: &str, kind: CatalogKind) -> PathBuf {
    entry_dir(root, entry).join(format!("{locale}.{}", kind.extension()))
}

/// `<root>/<entry>/<source_locale>.po`
pub fn source_catalog_path(root: &Path, entry: &str, source_locale: &str) -> PathBuf {
    catalog_path(root, entry, source_locale, CatalogKind::Source)
}

/// Whether `entry`'s source-locale catalog exists and references the entry's own source.
///
/// A missing catalog counts as not owned; any other IO failure is returned.
pub fn entry_owns_catalog(root: &Path, entry: &str, source_locale: &str) -> Result<bool> {
    let path = source_catalog_path(root, entry, source_locale);
    let bytes = match fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("{entry}: no {source_locale} source catalog");
            return Ok(false);
        }
        Err(e) => return Err(CatalogError::fs("read source catalog", path, e)),
    };

    let owned = owns_content(entry, &String::from_utf8_lossy(&bytes));
    log::debug!("{entry}: owns catalog = {owned}");
    Ok(owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write(root: &Path, rel: &str, content: &str) -> std::io::Result<PathBuf> {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap())?;
        fs::write(&path, content)?;
        Ok(path)
    }

    #[test]
    fn test_catalog_kind_from_extension() {
        assert_eq!(
            CatalogKind::from_path(Path::new("a/en.po")),
            Some(CatalogKind::Source)
        );
        assert_eq!(
            CatalogKind::from_path(Path::new("a/EN.MJS")),
            Some(CatalogKind::Compiled)
        );
        assert_eq!(CatalogKind::from_path(Path::new("a/en.json")), None);
        assert_eq!(CatalogKind::from_path(Path::new("a/.po")), None);
    }

    #[test]
    fn test_discover_entries_sorted_and_distinct() -> Result<()> {
        let dir = tempdir()?;
        write(dir.path(), "src/b/en.po", "")?;
        write(dir.path(), "src/b/en.mjs", "")?;
        write(dir.path(), "src/a/zh.po", "")?;
        write(dir.path(), "src/a/nested/en.po", "")?;
        write(dir.path(), "src/a/readme.txt", "")?;
        write(dir.path(), "root.po", "")?;

        let entries = discover_entries(dir.path())?;
        assert_eq!(entries, vec!["src/a", "src/a/nested", "src/b"]);
        Ok(())
    }

    #[test]
    fn test_discover_entries_missing_root() -> Result<()> {
        let dir = tempdir()?;
        let entries = discover_entries(&dir.path().join("missing"))?;
        assert!(entries.is_empty());
        Ok(())
    }

    #[test]
    fn test_list_catalog_files_in_entry_is_not_recursive() -> Result<()> {
        let dir = tempdir()?;
        write(dir.path(), "a/en.po", "")?;
        write(dir.path(), "a/en.mjs", "")?;
        write(dir.path(), "a/notes.md", "")?;
        write(dir.path(), "a/b/en.po", "")?;

        let files = list_catalog_files_in_entry(&dir.path().join("a"))?;
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["en.mjs", "en.po"]);
        Ok(())
    }

    #[test]
    fn test_catalog_file_records_locale_and_entry() {
        let root = Path::new("/tmp/locales");
        let file = CatalogFile::from_path(root, Path::new("/tmp/locales/src/a/zh.po")).unwrap();
        assert_eq!(file.entry, "src/a");
        assert_eq!(file.locale, "zh");
        assert_eq!(file.kind, CatalogKind::Source);
        assert!(file.has_entry());

        let top = CatalogFile::from_path(root, Path::new("/tmp/locales/en.po")).unwrap();
        assert!(!top.has_entry());
    }

    #[test]
    fn test_entry_owns_catalog_missing_source_is_false() -> Result<()> {
        let dir = tempdir()?;
        write(dir.path(), "a/zh.po", "#: ../a.tsx:1\n")?;
        assert!(!entry_owns_catalog(dir.path(), "a", "en")?);
        assert!(entry_owns_catalog(dir.path(), "a", "zh")?);
        Ok(())
    }
}
