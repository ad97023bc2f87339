//! Catalogue fixtures.

use anyhow::{Result, anyhow};
use relabel::strings::Catalog;

/// Catalogue used across the dispatch tests.
pub const SAMPLE_YAML: &str = r#"
placeholder: "(untitled)"
strings:
  MainTitle: "Hello {0}"
  Greeting: Hi
  Open:
    label: _Open
    tool-tip: Open a file
  Save:
    label: _Save
    tool-tip: "Save {0}"
  File: _File
  Edit: Edit
  Home: _Home
  Name: Name
  Size: Size
  Status: Ready
  Options: Options
  Details: Details
  Copy: Copy
  Paste:
    label: Paste
    tool-tip: Paste from the clipboard
  Search: _Search
  Confirm:
    title: Confirm
    message: "Delete {0}?"
  Identity: Identity
"#;

/// Deserialize a catalogue from YAML.
///
/// # Errors
///
/// Returns an error when the YAML is invalid or a template is malformed.
pub fn catalog_from_yaml(source: &str) -> Result<Catalog> {
    serde_saphyr::from_str(source).map_err(|err| anyhow!("parse catalogue YAML: {err}"))
}

/// The [`SAMPLE_YAML`] catalogue.
///
/// # Errors
///
/// Returns an error if the sample no longer parses.
pub fn sample_catalog() -> Result<Catalog> {
    catalog_from_yaml(SAMPLE_YAML)
}
