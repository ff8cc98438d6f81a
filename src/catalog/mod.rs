pub mod ownership;
pub mod reference;
pub mod walk;

pub use ownership::{entry_source_suffixes, owns_content, OWNERSHIP_SOURCE_EXTENSIONS};
pub use reference::{normalize_path, normalize_reference, safe_decode_uri_component};
pub use walk::{
    catalog_path, discover_entries, entry_dir, entry_owns_catalog, list_catalog_files,
    list_catalog_files_in_entry, source_catalog_path, CatalogFile, CatalogKind,
    CATALOG_FILE_EXTENSIONS,
};
