use super::source_locale::{resolve_source_locale, SourceLocale};
use crate::error::{CatalogError, Result};
use crate::manifest::DEFAULT_LOCALES_IMPORT_PREFIX;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Name of the project configuration file looked up in the project root
pub const CONFIG_FILE_NAME: &str = "i18n.toml";

/// Project settings read from `i18n.toml`. Every key is optional.
///
/// ```toml
/// source_locale = "en"
/// locales = ["en", "zh"]
/// catalog_dir = "src/locales"
/// manifest_path = "src/i18n/catalog-manifest.json"
/// included_entry_prefixes = ["src/app/", "src/components/"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    pub source_locale: Option<String>,
    pub default_locale: Option<String>,
    pub locales: Vec<String>,
    pub catalog_dir: PathBuf,
    pub manifest_path: PathBuf,
    pub included_entry_prefixes: Vec<String>,
    pub locales_import_prefix: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            source_locale: None,
            default_locale: None,
            locales: Vec::new(),
            catalog_dir: PathBuf::from("src/locales"),
            manifest_path: PathBuf::from("src/i18n/catalog-manifest.json"),
            included_entry_prefixes: vec!["src/".to_string()],
            locales_import_prefix: DEFAULT_LOCALES_IMPORT_PREFIX.to_string(),
        }
    }
}

impl ProjectConfig {
    /// Load `path`, or the defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(CatalogError::fs("read config file", path, e)),
        };

        toml::from_str(&content).map_err(|e| CatalogError::config_parse(path, e.to_string()))
    }

    pub fn source_locale(&self) -> SourceLocale {
        resolve_source_locale(self.source_locale.as_deref(), self.default_locale.as_deref())
    }

    /// Configured locales, or just the source locale when none are listed
    pub fn supported_locales(&self, source_locale: &str) -> Vec<String> {
        if self.locales.is_empty() {
            vec![source_locale.to_string()]
        } else {
            self.locales.clone()
        }
    }
}
