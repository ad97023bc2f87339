//! In-memory string store.

use indexmap::IndexMap;
use serde::Deserialize;

use super::{StringCollection, StringError, StringKind, StringStore};

/// An insertion-ordered, in-memory [`StringStore`].
///
/// Hosts usually embed a catalogue in their own configuration and
/// deserialize it with `serde`:
///
/// ```yaml
/// placeholder: "(untitled)"
/// strings:
///   Greeting: Hi
///   Save:
///     label: _Save
///     tool-tip: Save the current document
/// ```
///
/// # Examples
///
/// ```
/// use relabel::strings::{Catalog, StringKind, StringStore};
///
/// let catalog = Catalog::builder()
///     .label("Greeting", "Hello {0}")?
///     .build();
/// let bundle = catalog.resolve(Some("Greeting"))?;
/// let label = bundle.require(StringKind::Label, "Greeting")?;
/// assert_eq!(label.interpret(&["World"])?, "Hello World");
/// # Ok::<(), relabel::strings::StringError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Catalog {
    /// Bundle returned for the absent key.
    #[serde(default)]
    placeholder: StringCollection,
    #[serde(default)]
    strings: IndexMap<String, StringCollection>,
}

impl Catalog {
    /// Start building a catalogue.
    #[must_use]
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Number of keyed bundles, excluding the placeholder.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Returns `true` when no keyed bundles are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Iterate over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.strings.keys().map(String::as_str)
    }

    /// The bundle served for the absent key.
    #[must_use]
    pub const fn placeholder(&self) -> &StringCollection {
        &self.placeholder
    }
}

impl StringStore for Catalog {
    fn resolve(&self, key: Option<&str>) -> Result<StringCollection, StringError> {
        let Some(name) = key else {
            return Ok(self.placeholder.clone());
        };
        self.strings.get(name).cloned().ok_or_else(|| {
            tracing::debug!(key = name, "translation key missing from catalogue");
            StringError::key_not_found(name)
        })
    }
}

/// Builder for [`Catalog`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    catalog: Catalog,
}

impl CatalogBuilder {
    /// Register a bundle holding only a label.
    ///
    /// # Errors
    ///
    /// Returns [`StringError::InvalidTemplate`] when `label` is malformed.
    pub fn label(self, key: &str, label: &str) -> Result<Self, StringError> {
        let bundle = StringCollection::from_label(label)?;
        Ok(self.bundle(key, bundle))
    }

    /// Register a bundle with a label and a tooltip.
    ///
    /// # Errors
    ///
    /// Returns [`StringError::InvalidTemplate`] when either template is
    /// malformed.
    pub fn label_with_tooltip(
        self,
        key: &str,
        label: &str,
        tooltip: &str,
    ) -> Result<Self, StringError> {
        let bundle = StringCollection::from_label(label)?.with(StringKind::ToolTip, tooltip)?;
        Ok(self.bundle(key, bundle))
    }

    /// Register a dialog bundle with a title and a message.
    ///
    /// # Errors
    ///
    /// Returns [`StringError::InvalidTemplate`] when either template is
    /// malformed.
    pub fn dialog(self, key: &str, title: &str, message: &str) -> Result<Self, StringError> {
        let bundle = StringCollection::new()
            .with(StringKind::Title, title)?
            .with(StringKind::Message, message)?;
        Ok(self.bundle(key, bundle))
    }

    /// Register a prepared bundle, replacing any previous one for `key`.
    #[must_use]
    pub fn bundle(mut self, key: &str, bundle: StringCollection) -> Self {
        self.catalog.strings.insert(key.to_owned(), bundle);
        self
    }

    /// Set the label served for the absent key.
    ///
    /// # Errors
    ///
    /// Returns [`StringError::InvalidTemplate`] when `label` is malformed.
    pub fn placeholder(mut self, label: &str) -> Result<Self, StringError> {
        self.catalog.placeholder = StringCollection::from_label(label)?;
        Ok(self)
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> Catalog {
        self.catalog
    }
}
