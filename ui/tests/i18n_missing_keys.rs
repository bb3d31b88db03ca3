use std::collections::{BTreeSet, HashSet};

/// Translation completeness test.
/// Ensures every non‑fallback locale provides *at least* the keys present
/// in the fallback (en-US) `celacto-ui.ftl`, and that no file defines a key twice.
///
/// Lightweight parser: comment, blank and attribute lines are skipped and any
/// `key =` line counts as a message definition.
#[test]
fn all_locales_have_all_fallback_keys() {
    const EN_US: &str = include_str!("../i18n/en-US/celacto-ui.ftl");
    const ES_ES: &str = include_str!("../i18n/es-ES/celacto-ui.ftl");
    const FR_FR: &str = include_str!("../i18n/fr-FR/celacto-ui.ftl");

    let fallback_keys = extract_keys(EN_US);
    assert!(
        !fallback_keys.is_empty(),
        "Fallback (en-US) contains no keys."
    );
    assert_no_dup_keys(EN_US, "en-US");

    let locales: &[(&str, &str)] = &[("es-ES", ES_ES), ("fr-FR", FR_FR)];

    let mut failures = Vec::new();
    for (locale, src) in locales {
        assert_no_dup_keys(src, locale);

        let keys = extract_keys(src);
        let missing: BTreeSet<&String> = fallback_keys
            .iter()
            .filter(|k| !keys.contains(*k))
            .collect();

        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing
                    .into_iter()
                    .cloned()
                    .collect::<Vec<_>>()
                    .join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from en-US, then translate.",
            failures.join("\n\n")
        );
    }
}

#[test]
fn header_labels_are_defined_in_fallback() {
    const EN_US: &str = include_str!("../i18n/en-US/celacto-ui.ftl");
    let keys = extract_keys(EN_US);

    for entry in ui::nav::NAV_ENTRIES {
        assert!(keys.contains(entry.label_key), "missing {}", entry.label_key);
        for child in entry.children {
            assert!(keys.contains(child.label_key), "missing {}", child.label_key);
        }
    }
}

fn message_key(line: &str) -> Option<&str> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
        return None;
    }
    let key = line[..line.find('=')?].trim();
    let valid = !key.is_empty()
        && !key.contains(char::is_whitespace)
        && !key.starts_with('[')
        && !key.starts_with('-');
    valid.then_some(key)
}

fn extract_keys(src: &str) -> HashSet<String> {
    src.lines()
        .filter_map(message_key)
        .map(str::to_string)
        .collect()
}

fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();

    for line in src.lines() {
        if let Some(key) = message_key(line) {
            if !seen.insert(key) {
                dups.insert(format!("{key}  (line: \"{line}\")"));
            }
        }
    }

    if !dups.is_empty() {
        panic!(
            "Duplicate key definitions in {locale}:\n  {}",
            dups.into_iter().collect::<Vec<_>>().join("\n  ")
        );
    }
}

#[test]
fn fl_domain_matches_ftl_filename() {
    const CONFIG: &str = include_str!("../i18n.toml");
    let domain = CONFIG
        .lines()
        .find_map(|line| line.trim().strip_prefix("domain"))
        .and_then(|rest| rest.trim().strip_prefix('='))
        .map(|value| value.trim().trim_matches('"'))
        .expect("i18n.toml must pin the fluent domain");

    let fallback = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("i18n/en-US")
        .join(format!("{domain}.ftl"));
    assert!(fallback.exists(), "no fallback file at {fallback:?}");
}
