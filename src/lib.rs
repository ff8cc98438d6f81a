pub mod catalog;
pub mod cleanup;
pub mod config;
pub mod error;
pub mod manifest;
pub mod translate;

use std::path::{Path, PathBuf};

// Re-export commonly used types
pub use catalog::{discover_entries, owns_content, CatalogFile, CatalogKind};
pub use cleanup::{clean_orphaned_catalogs, CleanupOptions, CleanupReport};
pub use config::{ProjectConfig, SourceLocale};
pub use error::{CatalogError, Result};
pub use manifest::{build_manifest, write_manifest, Manifest, ManifestOptions, ManifestResult};
pub use translate::{translate_catalogs, TranslateOptions, TranslateReport};

/// Outcome of a post-extraction sync pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    pub cleanup: CleanupReport,
    /// Set when the manifest was rebuilt and written
    pub manifest: Option<ManifestResult>,
}

/// Run after the extraction tool has rewritten the catalogs.
///
/// This function:
/// 1. Removes orphaned catalogs (or only reports them in dry-run mode)
/// 2. Rebuilds and writes the manifest when a real run removed files, so the
///    manifest never points at a pruned catalog
#[must_use = "this function returns a Result that should be handled"]
pub fn run_sync(
    cleanup_options: &CleanupOptions,
    manifest_options: &ManifestOptions,
    manifest_path: &Path,
    sink: &mut dyn FnMut(&str),
) -> Result<SyncOutcome> {
    let cleanup = clean_orphaned_catalogs(cleanup_options, sink)?;

    if cleanup_options.dry_run || cleanup.removed_files == 0 {
        return Ok(SyncOutcome {
            cleanup,
            manifest: None,
        });
    }

    sink("[i18n] catalog files changed during cleanup, regenerating catalog manifest.");
    let result = build_manifest(manifest_options)?;
    write_manifest(manifest_path, &result.manifest)?;

    Ok(SyncOutcome {
        cleanup,
        manifest: Some(result),
    })
}

/// Resolve `path` against `root` unless it is already absolute
pub fn resolve_path(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
