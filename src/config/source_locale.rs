/// Last-resort source locale
pub const FALLBACK_SOURCE_LOCALE: &str = "en";

/// The resolved source locale and the warnings produced on the way
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocale {
    pub locale: String,
    pub warnings: Vec<String>,
}

fn valid_locale(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Pick the configured source locale, else the default locale, else `en`.
///
/// Each fallback step adds a warning for the caller to print.
pub fn resolve_source_locale(configured: Option<&str>, default_locale: Option<&str>) -> SourceLocale {
    if let Some(locale) = valid_locale(configured) {
        return SourceLocale {
            locale,
            warnings: Vec::new(),
        };
    }

    let mut warnings =
        vec!["[i18n] source_locale in config is missing or invalid, falling back.".to_string()];

    if let Some(locale) = valid_locale(default_locale) {
        warnings.push(format!(
            "[i18n] using default_locale ({locale}) as source locale fallback."
        ));
        return SourceLocale { locale, warnings };
    }

    warnings.push(format!(
        "[i18n] default_locale is missing or invalid, using {FALLBACK_SOURCE_LOCALE} as final fallback."
    ));
    SourceLocale {
        locale: FALLBACK_SOURCE_LOCALE.to_string(),
        warnings,
    }
}
