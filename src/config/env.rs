/// Environment variable selecting dry-run mode for the cleanup pass
pub const DRY_RUN_ENV: &str = "I18N_DRY_RUN";

/// `1` and `true` (any case) enable dry-run; everything else, including unset, does not.
pub fn is_dry_run_value(value: Option<&str>) -> bool {
    value
        .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true"))
        .unwrap_or(false)
}

/// Read [`DRY_RUN_ENV`] from the process environment.
pub fn dry_run_from_env() -> bool {
    is_dry_run_value(std::env::var(DRY_RUN_ENV).ok().as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthy_values() {
        assert!(is_dry_run_value(Some("1")));
        assert!(is_dry_run_value(Some("true")));
        assert!(is_dry_run_value(Some("TRUE")));
        assert!(is_dry_run_value(Some("True")));
    }

    #[test]
    fn test_other_values_are_false() {
        assert!(!is_dry_run_value(None));
        assert!(!is_dry_run_value(Some("")));
        assert!(!is_dry_run_value(Some("0")));
        assert!(!is_dry_run_value(Some("yes")));
        assert!(!is_dry_run_value(Some(" true")));
    }
}
