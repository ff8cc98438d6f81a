pub mod env;
pub mod project;
pub mod source_locale;

pub use env::{dry_run_from_env, is_dry_run_value, DRY_RUN_ENV};
pub use project::{ProjectConfig, CONFIG_FILE_NAME};
pub use source_locale::{resolve_source_locale, SourceLocale};
