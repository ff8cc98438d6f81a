// src/cleanup/mod.rs

use crate::catalog::{
    discover_entries, entry_dir, entry_owns_catalog, list_catalog_files_in_entry,
};
use crate::error::{CatalogError, Result};
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// Parameters for an orphan cleanup pass
#[derive(Debug, Clone)]
pub struct CleanupOptions {
    pub catalog_dir: PathBuf,
    pub source_locale: String,
    pub dry_run: bool,
    /// Base directory for the paths shown in log messages
    pub cwd: Option<PathBuf>,
}

impl CleanupOptions {
    pub fn new(catalog_dir: impl Into<PathBuf>, source_locale: impl Into<String>) -> Self {
        Self {
            catalog_dir: catalog_dir.into(),
            source_locale: source_locale.into(),
            dry_run: false,
            cwd: None,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }
}

/// What a cleanup pass removed, or would remove in dry-run mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CleanupReport {
    pub orphaned: usize,
    pub removed_files: usize,
    pub removed_dirs: usize,
}

/// Remove the catalogs of every entry that does not own its source-locale messages.
///
/// Entries are visited in sorted order. For each orphaned entry only the
/// catalog files directly inside its directory are removed, then empty
/// ancestor directories are pruned up to (never including) the catalog root.
///
/// In dry-run mode nothing is touched: the files and directories that a real
/// run would remove are accumulated across entries so that a directory shared
/// by several orphaned children is reported once all of them are accounted
/// for. Both modes report identical counts for the same starting tree.
///
/// Filesystem errors abort the pass. Removals already applied stay applied.
#[must_use = "this function returns a Result that should be handled"]
pub fn clean_orphaned_catalogs(
    options: &CleanupOptions,
    sink: &mut dyn FnMut(&str),
) -> Result<CleanupReport> {
    let root = options.catalog_dir.as_path();
    let cwd = options.cwd.as_deref();

    let mut report = CleanupReport::default();
    let mut pending_files: HashSet<PathBuf> = HashSet::new();
    let mut pending_dirs: HashSet<PathBuf> = HashSet::new();

    for entry in discover_entries(root)? {
        if entry_owns_catalog(root, &entry, &options.source_locale)? {
            continue;
        }
        report.orphaned += 1;

        let dir = entry_dir(root, &entry);
        let files = list_catalog_files_in_entry(&dir)?;

        if options.dry_run {
            pending_files.extend(files.iter().cloned());
            let dirs = collect_prunable_dirs(root, &dir, &pending_files, &pending_dirs)?;
            pending_dirs.extend(dirs.iter().cloned());

            for file in &files {
                sink(&format!(
                    "[i18n] dry-run: would remove catalog file {}",
                    display_path(cwd, file)
                ));
            }
            for dir in &dirs {
                sink(&format!(
                    "[i18n] dry-run: would remove empty catalog directory {}",
                    display_path(cwd, dir)
                ));
            }

            report.removed_files += files.len();
            report.removed_dirs += dirs.len();
            continue;
        }

        for file in &files {
            fs::remove_file(file).map_err(|e| CatalogError::fs("remove catalog file", file, e))?;
            log::debug!("Removed {}", file.display());
            report.removed_files += 1;
        }
        report.removed_dirs += remove_empty_catalog_dirs(root, &dir)?;
    }

    if report.orphaned > 0 {
        if options.dry_run {
            sink(&format!(
                "[i18n] dry-run: {} orphaned catalog(s); {} file(s) and {} empty directory(ies) would be removed",
                report.orphaned, report.removed_files, report.removed_dirs
            ));
        } else {
            sink(&format!(
                "[i18n] cleaned {} orphaned catalog(s): removed {} file(s), pruned {} empty directory(ies)",
                report.orphaned, report.removed_files, report.removed_dirs
            ));
        }
    }

    Ok(report)
}

/// A directory strictly below the catalog root
fn is_removable_catalog_dir(root: &Path, dir: &Path) -> bool {
    match dir.strip_prefix(root) {
        Ok(rel) => {
            rel.components().next().is_some()
                && rel
                    .components()
                    .all(|c| matches!(c, Component::Normal(_)))
        }
        Err(_) => false,
    }
}

/// Walk upward from `start` collecting directories that would be empty once
/// every pending file and directory removal is applied.
fn collect_prunable_dirs(
    root: &Path,
    start: &Path,
    pending_files: &HashSet<PathBuf>,
    pending_dirs: &HashSet<PathBuf>,
) -> Result<Vec<PathBuf>> {
    let mut prunable: Vec<PathBuf> = Vec::new();
    let mut current = start.to_path_buf();

    while is_removable_catalog_dir(root, &current) {
        let read_dir = match fs::read_dir(&current) {
            Ok(read_dir) => read_dir,
            Err(e) if e.kind() == ErrorKind::NotFound => break,
            Err(e) => return Err(CatalogError::fs("read catalog directory", &current, e)),
        };

        let mut has_remaining = false;
        for child in read_dir {
            let path = child
                .map_err(|e| CatalogError::fs("read catalog directory", &current, e))?
                .path();
            if !pending_files.contains(&path)
                && !pending_dirs.contains(&path)
                && !prunable.contains(&path)
            {
                has_remaining = true;
                break;
            }
        }
        if has_remaining {
            break;
        }

        prunable.push(current.clone());
        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => break,
        }
    }

    Ok(prunable)
}

/// Delete `start` and its ancestors while they are empty, stopping below the root.
fn remove_empty_catalog_dirs(root: &Path, start: &Path) -> Result<usize> {
    let mut removed = 0;
    let mut current = start.to_path_buf();

    while is_removable_catalog_dir(root, &current) {
        let has_children = match fs::read_dir(&current) {
            Ok(mut read_dir) => read_dir.next().is_some(),
            Err(e) if e.kind() == ErrorKind::NotFound => break,
            Err(e) => return Err(CatalogError::fs("read catalog directory", &current, e)),
        };
        if has_children {
            break;
        }

        fs::remove_dir(&current)
            .map_err(|e| CatalogError::fs("remove catalog directory", &current, e))?;
        log::debug!("Pruned empty directory {}", current.display());
        removed += 1;

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => break,
        }
    }

    Ok(removed)
}

/// Path for log output, relative to `cwd` when it lies underneath it
pub fn display_path(cwd: Option<&Path>, path: &Path) -> String {
    cwd.and_then(|cwd| path.strip_prefix(cwd).ok())
        .unwrap_or(path)
        .display()
        .to_string()
}
