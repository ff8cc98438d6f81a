use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use i18n_tidy::cleanup::display_path;
use i18n_tidy::config::{dry_run_from_env, ProjectConfig, CONFIG_FILE_NAME};
use i18n_tidy::{
    build_manifest, clean_orphaned_catalogs, resolve_path, run_sync, translate_catalogs,
    write_manifest, CleanupOptions, ManifestOptions, TranslateOptions,
};
use std::env;
use std::path::{Path, PathBuf};
use std::process;

/// i18n-tidy - Prune orphaned translation catalogs and build the catalog manifest
#[derive(Parser, Debug)]
#[command(name = "i18n-tidy")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Project root; relative paths are resolved against it (default: current directory)
    #[arg(long, global = true, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Config file (default: <root>/i18n.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Catalog root directory, overriding the config
    #[arg(long, global = true, value_name = "DIR")]
    catalog_dir: Option<PathBuf>,

    /// Source locale, overriding the config
    #[arg(long, global = true, value_name = "LOCALE")]
    source_locale: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Remove catalogs of entries that no longer own their source messages
    Clean {
        /// Only report what would be removed (also enabled by I18N_DRY_RUN=1)
        #[arg(long)]
        dry_run: bool,
    },
    /// Build the runtime catalog manifest
    Manifest {
        /// Output file, overriding the config
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Clean orphaned catalogs, then rebuild the manifest if files were removed
    Sync {
        /// Only report what would be removed (also enabled by I18N_DRY_RUN=1)
        #[arg(long)]
        dry_run: bool,
    },
    /// Report translation completeness of target-locale catalogs
    Translate {
        /// Fill empty msgstr with the source text
        #[arg(long)]
        fill_source: bool,

        /// Fail when any target message is still empty
        #[arg(long)]
        strict: bool,
    },
    /// Check whether an entry owns its source-locale catalog
    Owns {
        /// Entry path relative to the catalog root, e.g. src/components/layout
        entry: String,
    },
}

/// Paths and locales after merging flags, config file, and defaults
struct Settings {
    root: PathBuf,
    config: ProjectConfig,
    catalog_dir: PathBuf,
    source_locale: String,
}

impl Settings {
    fn load(cli: &Cli) -> Result<Self> {
        let root = match &cli.root {
            Some(root) => root.clone(),
            None => env::current_dir()?,
        };
        let config_path = cli
            .config
            .as_ref()
            .map(|p| resolve_path(&root, p))
            .unwrap_or_else(|| root.join(CONFIG_FILE_NAME));
        let config = ProjectConfig::load(&config_path)?;

        let source_locale = match &cli.source_locale {
            Some(locale) if !locale.trim().is_empty() => locale.trim().to_string(),
            _ => {
                let resolved = config.source_locale();
                for warning in &resolved.warnings {
                    eprintln!("{}", warning.yellow());
                }
                resolved.locale
            }
        };
        let catalog_dir = resolve_path(
            &root,
            cli.catalog_dir.as_deref().unwrap_or(config.catalog_dir.as_path()),
        );

        Ok(Self {
            root,
            config,
            catalog_dir,
            source_locale,
        })
    }

    fn cleanup_options(&self, dry_run: bool) -> CleanupOptions {
        CleanupOptions::new(&self.catalog_dir, &self.source_locale)
            .with_dry_run(dry_run || dry_run_from_env())
            .with_cwd(&self.root)
    }

    fn manifest_options(&self) -> ManifestOptions {
        ManifestOptions::new(&self.catalog_dir, &self.source_locale)
            .with_supported_locales(self.config.supported_locales(&self.source_locale))
            .with_included_entry_prefixes(self.config.included_entry_prefixes.clone())
            .with_locales_import_prefix(self.config.locales_import_prefix.clone())
    }

    fn manifest_path(&self, output: Option<&Path>) -> PathBuf {
        resolve_path(&self.root, output.unwrap_or(self.config.manifest_path.as_path()))
    }
}

/// Print a progress message, highlighting dry-run output
fn print_message(message: &str) {
    if message.contains("dry-run:") {
        println!("{}", message.yellow());
    } else {
        println!("{}", message);
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load(&cli)?;
    let mut sink = |message: &str| print_message(message);

    match &cli.command {
        Command::Clean { dry_run } => {
            let report = clean_orphaned_catalogs(&settings.cleanup_options(*dry_run), &mut sink)?;
            if report.orphaned == 0 {
                println!("[i18n] no orphaned catalogs found.");
            }
        }
        Command::Manifest { output } => {
            let result = build_manifest(&settings.manifest_options())?;
            let path = settings.manifest_path(output.as_deref());
            write_manifest(&path, &result.manifest)?;
            println!(
                "[i18n] wrote {} of {} candidate entries to {}",
                result.manifest.len(),
                result.candidate_entries,
                display_path(Some(&settings.root), &path)
            );
        }
        Command::Sync { dry_run } => {
            let path = settings.manifest_path(None);
            let outcome = run_sync(
                &settings.cleanup_options(*dry_run),
                &settings.manifest_options(),
                &path,
                &mut sink,
            )?;
            if let Some(result) = outcome.manifest {
                println!(
                    "[i18n] wrote {} of {} candidate entries to {}",
                    result.manifest.len(),
                    result.candidate_entries,
                    display_path(Some(&settings.root), &path)
                );
            } else if outcome.cleanup.orphaned == 0 {
                println!("[i18n] no orphaned catalogs found.");
            }
        }
        Command::Translate {
            fill_source,
            strict,
        } => {
            let options = TranslateOptions::new(&settings.catalog_dir, &settings.source_locale)
                .with_fill_source(*fill_source)
                .with_strict(*strict)
                .with_cwd(&settings.root);
            translate_catalogs(&options, &mut sink)?;
        }
        Command::Owns { entry } => {
            let owned = i18n_tidy::catalog::entry_owns_catalog(
                &settings.catalog_dir,
                entry,
                &settings.source_locale,
            )?;
            if owned {
                println!("{}: {}", entry, "owns its catalog".green());
            } else {
                println!("{}: {}", entry, "orphaned".red());
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red(), e);
        process::exit(1);
    }
}
