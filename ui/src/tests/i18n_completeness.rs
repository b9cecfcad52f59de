use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Canonical FTL file name per locale.
const FTL_FILENAME: &str = "fusionx-ui.ftl";

const I18N_DIR: &str = "i18n";

/// Message IDs defined in a Fluent file. Comments, terms (`-` prefix) and
/// blank lines are skipped; any `<id> =` line counts as a definition.
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('=').map(|(id, _)| id.trim()))
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Every `t!("...")` literal under `src_root`. Only direct literal first
/// arguments are found; `fl!` calls and computed IDs are not.
fn extract_translation_keys_from_source(src_root: &Path) -> HashSet<String> {
    let mut found = HashSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                stack.extend(read_dir.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        for (i, needle) in content.match_indices("t!(\"") {
            let rest = &content[i + needle.len()..];
            if let Some(end) = rest.find('"') {
                let key = &rest[..end];
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
            }
        }
    }

    found
}

fn locale_dirs(i18n_root: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(i18n_root)
        .map(|rd| {
            rd.flatten()
                .filter(|entry| entry.path().is_dir())
                .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
                .filter(|name| name.contains('-'))
                .collect()
        })
        .unwrap_or_default();
    dirs.sort();
    dirs
}

#[test]
fn referenced_keys_exist_in_every_locale() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let i18n_root = crate_root.join(I18N_DIR);
    let referenced = extract_translation_keys_from_source(&crate_root.join("src"));

    assert!(
        referenced.contains("nav-log-in"),
        "source scan found no navbar keys; did the t! macro name change?"
    );

    let locales = locale_dirs(&i18n_root);
    assert!(locales.iter().any(|l| l == "en-US"), "missing fallback locale en-US");

    let mut report = Vec::new();
    for locale in locales {
        let path = i18n_root.join(&locale).join(FTL_FILENAME);
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("failed to read {path:?}: {err}"));
        let keys = parse_ftl_keys(&content);

        let mut missing: Vec<_> = referenced.iter().filter(|k| !keys.contains(*k)).cloned().collect();
        if !missing.is_empty() {
            missing.sort();
            report.push(format!("  {locale}: {}", missing.join(", ")));
        }
    }

    if !report.is_empty() {
        panic!("Translation keys used in src/ but missing:\n{}", report.join("\n"));
    }
}
