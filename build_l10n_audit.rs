//! Build-time check that diagnostic keys and Fluent bundles agree.
//!
//! Every `NAME => "id",` entry of the `define_keys!` invocation in
//! `src/localization/keys.rs` must have a message in every bundle under
//! `locales/`, and every bundle message must be declared.

use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const KEYS_PATH: &str = "src/localization/keys.rs";
const INVOCATION: &str = "define_keys! {";
const LOCALES: [&str; 2] = ["en-US", "es-ES"];

/// Paths the audit reads, for `rerun-if-changed`.
pub(super) fn watched_paths() -> Vec<String> {
    let mut paths = vec![KEYS_PATH.to_owned()];
    paths.extend(LOCALES.iter().map(|locale| bundle_path(locale)));
    paths
}

fn bundle_path(locale: &str) -> String {
    format!("locales/{locale}/messages.ftl")
}

/// Compare declared keys with each bundle.
///
/// # Errors
///
/// Returns an error listing every missing and orphaned message, or when a
/// file cannot be read.
pub(super) fn audit_localization_keys() -> Result<(), Box<dyn Error>> {
    let declared = declared_keys(&fs::read_to_string(KEYS_PATH)?);
    if declared.is_empty() {
        return Err(format!("no keys declared in {KEYS_PATH}").into());
    }

    let mut report = String::new();
    for locale in LOCALES {
        let path = bundle_path(locale);
        let messages = bundle_messages(&fs::read_to_string(Path::new(&path))?);
        for missing in declared.difference(&messages) {
            writeln!(report, "- {locale}: missing `{missing}`")?;
        }
        for orphan in messages.difference(&declared) {
            writeln!(report, "- {locale}: `{orphan}` is not declared in {KEYS_PATH}")?;
        }
    }

    if report.is_empty() {
        Ok(())
    } else {
        Err(format!("localization key audit failed:\n{report}").into())
    }
}

/// Identifiers declared after the `define_keys!` invocation.
fn declared_keys(source: &str) -> BTreeSet<String> {
    let Some((_, body)) = source.split_once(INVOCATION) else {
        return BTreeSet::new();
    };
    body.lines()
        .map(str::trim)
        .filter(|line| !line.starts_with("//"))
        .filter_map(|line| line.split_once("=>"))
        .filter_map(|(_, value)| {
            let value = value.trim().trim_end_matches(',');
            value.strip_prefix('"')?.strip_suffix('"').map(str::to_owned)
        })
        .collect()
}

/// Message identifiers of a bundle.
///
/// Only lines starting in the first column can declare a message; indented
/// lines continue a value. Comments, attributes, and terms are skipped.
fn bundle_messages(source: &str) -> BTreeSet<String> {
    source
        .lines()
        .filter(|line| {
            line.chars()
                .next()
                .is_some_and(|first| first.is_ascii_alphabetic())
        })
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim().to_owned())
        .collect()
}
