// src/translate/mod.rs

use crate::catalog::{list_catalog_files, CatalogKind};
use crate::cleanup::display_path;
use crate::error::{CatalogError, Result};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

/// Message counts of one `.po` catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PoStats {
    /// Messages with a non-empty `msgid` (the header is not counted)
    pub total: usize,
    /// Of those, messages whose `msgstr` is empty
    pub missing: usize,
}

/// Result of [`fill_missing_with_source`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilledPo {
    pub content: String,
    pub replacements: usize,
}

/// Value of a single-line `key "value"` statement, without unescaping.
pub fn parse_quoted_value<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(key)?.strip_prefix(" \"")?;
    rest.strip_suffix('"')
}

fn escape_po(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Count messages and empty translations.
///
/// Only single-line `msgid`/`msgstr` pairs are understood; continuation lines
/// and plural forms are ignored.
pub fn analyze_po(content: &str) -> PoStats {
    let mut stats = PoStats::default();
    let mut msgid: Option<&str> = None;

    for line in content.lines() {
        if let Some(id) = parse_quoted_value(line, "msgid") {
            msgid = Some(id);
            continue;
        }
        if let (Some(value), Some(id)) = (parse_quoted_value(line, "msgstr"), msgid) {
            if !id.is_empty() {
                stats.total += 1;
                if value.is_empty() {
                    stats.missing += 1;
                }
            }
            msgid = None;
        }
    }

    stats
}

/// Replace every empty `msgstr` with its `msgid`.
///
/// Line endings are normalized to `\n` in the returned content.
pub fn fill_missing_with_source(content: &str) -> FilledPo {
    let mut lines: Vec<String> = Vec::new();
    let mut msgid: Option<String> = None;
    let mut replacements = 0;

    for line in content.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if let Some(id) = parse_quoted_value(line, "msgid") {
            msgid = Some(id.to_string());
            lines.push(line.to_string());
            continue;
        }

        match (parse_quoted_value(line, "msgstr"), msgid.take()) {
            (Some(""), Some(id)) if !id.is_empty() => {
                lines.push(format!("msgstr \"{}\"", escape_po(&id)));
                replacements += 1;
            }
            (Some(_), _) => lines.push(line.to_string()),
            (None, pending) => {
                msgid = pending;
                lines.push(line.to_string());
            }
        }
    }

    FilledPo {
        content: lines.join("\n"),
        replacements,
    }
}

/// Parameters for a translation completeness pass
#[derive(Debug, Clone)]
pub struct TranslateOptions {
    pub catalog_dir: PathBuf,
    pub source_locale: String,
    pub fill_source: bool,
    pub strict: bool,
    pub cwd: Option<PathBuf>,
}

impl TranslateOptions {
    pub fn new(catalog_dir: impl Into<PathBuf>, source_locale: impl Into<String>) -> Self {
        Self {
            catalog_dir: catalog_dir.into(),
            source_locale: source_locale.into(),
            fill_source: false,
            strict: false,
            cwd: None,
        }
    }

    pub fn with_fill_source(mut self, fill_source: bool) -> Self {
        self.fill_source = fill_source;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }
}

/// Totals over every target-locale catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TranslateReport {
    pub files: usize,
    pub total: usize,
    pub missing: usize,
    pub filled: usize,
}

/// Report translation completeness of every target-locale `.po` catalog,
/// optionally filling empty messages with the source text first.
///
/// In strict mode any remaining empty message is an error, returned after all
/// files have been reported.
#[must_use = "this function returns a Result that should be handled"]
pub fn translate_catalogs(
    options: &TranslateOptions,
    sink: &mut dyn FnMut(&str),
) -> Result<TranslateReport> {
    let cwd = options.cwd.as_deref();
    let targets: Vec<_> = list_catalog_files(&options.catalog_dir)?
        .into_iter()
        .filter(|file| file.kind == CatalogKind::Source && file.locale != options.source_locale)
        .collect();

    let mut report = TranslateReport::default();
    if targets.is_empty() {
        sink(&format!(
            "[i18n] no target locale po files found under {}",
            display_path(cwd, &options.catalog_dir)
        ));
        return Ok(report);
    }

    for target in &targets {
        let mut content = fs::read_to_string(&target.path)
            .map_err(|e| CatalogError::fs("read catalog file", &target.path, e))?;

        if options.fill_source {
            let filled = fill_missing_with_source(&content);
            if filled.replacements > 0 {
                fs::write(&target.path, &filled.content)
                    .map_err(|e| CatalogError::fs("write catalog file", &target.path, e))?;
                sink(&format!(
                    "[i18n] {}: filled {} empty msgstr with source text",
                    target.locale, filled.replacements
                ));
                report.filled += filled.replacements;
                content = filled.content;
            }
        }

        let stats = analyze_po(&content);
        report.files += 1;
        report.total += stats.total;
        report.missing += stats.missing;
        sink(&format!(
            "[i18n] {}: total={}, missing={}",
            display_path(cwd, &target.path),
            stats.total,
            stats.missing
        ));
    }

    if report.missing == 0 {
        sink("[i18n] all target locale messages are translated.");
        return Ok(report);
    }

    sink(&format!(
        "[i18n] translation is still incomplete: {} empty msgstr in target locales.",
        report.missing
    ));
    sink(&format!(
        "[i18n] edit target locale files (except **/{}.po), then compile catalogs if needed.",
        options.source_locale
    ));
    if options.strict {
        return Err(CatalogError::IncompleteTranslations {
            missing: report.missing,
        });
    }

    Ok(report)
}
