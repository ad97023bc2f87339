//! String resolution protocol.
//!
//! A [`StringStore`] maps keys to [`StringCollection`] bundles. Each bundle
//! holds one [`TranslateableString`] per [`StringKind`] slot, and each template
//! can be interpreted with positional variables and queried for an
//! accelerator character. The tree dispatch engine only ever reads from the
//! store; it never caches or mutates bundles.

mod catalog;
mod error;
mod template;

pub use catalog::{Catalog, CatalogBuilder};
pub use error::{StringError, TemplateFault};
pub use template::{HOTKEY_MARKER, TranslateableString};

use std::fmt;

use indexmap::IndexMap;
use serde::Deserialize;

/// Sentinel that marks text as an explicit key rather than display text.
pub const EXPLICIT_KEY_MARKER: char = '$';

/// Named slot within a [`StringCollection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StringKind {
    /// Primary display text: labels, headers, content, titles.
    Label,
    /// Hover text shown alongside the label.
    #[serde(alias = "tooltip")]
    ToolTip,
    /// Caption of a dialog box.
    Title,
    /// Body text of a dialog box.
    Message,
}

impl StringKind {
    /// Stable lowercase name used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Label => "label",
            Self::ToolTip => "tool-tip",
            Self::Title => "title",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for StringKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A key used to look a bundle up in the store.
///
/// Implicit keys are the current text of a slot. Explicit keys are supplied
/// by the caller, or written into markup with the `$` sentinel; the store
/// always receives the name without the sentinel.
///
/// # Examples
///
/// ```
/// use relabel::strings::TranslationKey;
///
/// let key = TranslationKey::from_text("$MainTitle");
/// assert!(key.is_explicit());
/// assert_eq!(key.name(), "MainTitle");
///
/// let key = TranslationKey::from_text("Greeting");
/// assert!(!key.is_explicit());
/// assert_eq!(key.name(), "Greeting");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationKey<'a> {
    /// Key derived from the slot's existing display text.
    Implicit(&'a str),
    /// Key named explicitly, sentinel already removed.
    Explicit(&'a str),
}

impl<'a> TranslationKey<'a> {
    /// Interpret slot text as a key, honouring the `$` sentinel.
    #[must_use]
    pub fn from_text(text: &'a str) -> Self {
        text.strip_prefix(EXPLICIT_KEY_MARKER)
            .map_or(Self::Implicit(text), Self::Explicit)
    }

    /// Build an explicit key; a leading sentinel is tolerated and removed.
    #[must_use]
    pub fn explicit(name: &'a str) -> Self {
        Self::Explicit(name.strip_prefix(EXPLICIT_KEY_MARKER).unwrap_or(name))
    }

    /// The name passed to [`StringStore::resolve`].
    #[must_use]
    pub const fn name(self) -> &'a str {
        match self {
            Self::Implicit(name) | Self::Explicit(name) => name,
        }
    }

    /// Returns `true` for keys marked with the sentinel or given by a caller.
    #[must_use]
    pub const fn is_explicit(self) -> bool {
        matches!(self, Self::Explicit(_))
    }
}

impl fmt::Display for TranslationKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Implicit(name) => f.write_str(name),
            Self::Explicit(name) => write!(f, "{EXPLICIT_KEY_MARKER}{name}"),
        }
    }
}

/// A bundle of templates keyed by slot kind.
///
/// In a catalogue a bundle is written either as a bare string, which becomes
/// the [`StringKind::Label`], or as a table of kinds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawCollection")]
pub struct StringCollection {
    slots: IndexMap<StringKind, TranslateableString>,
}

impl StringCollection {
    /// Create an empty bundle.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: IndexMap::new(),
        }
    }

    /// Create a bundle holding only a label.
    ///
    /// # Errors
    ///
    /// Returns [`StringError::InvalidTemplate`] when `label` is malformed.
    pub fn from_label(label: &str) -> Result<Self, StringError> {
        Self::new().with(StringKind::Label, label)
    }

    /// Add or replace the template for `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`StringError::InvalidTemplate`] when `source` is malformed.
    pub fn with(mut self, kind: StringKind, source: &str) -> Result<Self, StringError> {
        self.slots.insert(kind, TranslateableString::parse(source)?);
        Ok(self)
    }

    /// Template for `kind`, if the bundle has one.
    #[must_use]
    pub fn get(&self, kind: StringKind) -> Option<&TranslateableString> {
        self.slots.get(&kind)
    }

    /// Returns `true` when the bundle has a template for `kind`.
    #[must_use]
    pub fn contains(&self, kind: StringKind) -> bool {
        self.slots.contains_key(&kind)
    }

    /// Template for `kind`, failing with [`StringError::MissingSlot`].
    ///
    /// # Errors
    ///
    /// Returns [`StringError::MissingSlot`] naming `key` when the slot is
    /// absent.
    pub fn require(&self, kind: StringKind, key: &str) -> Result<&TranslateableString, StringError> {
        self.get(kind)
            .ok_or_else(|| StringError::missing_slot(key, kind))
    }

    /// Interpret the template for `kind` when present.
    ///
    /// # Errors
    ///
    /// Propagates [`StringError::InterpolationArity`] from the template.
    pub fn interpret_optional<V: AsRef<str>>(
        &self,
        kind: StringKind,
        variables: &[V],
    ) -> Result<Option<String>, StringError> {
        self.get(kind)
            .map(|template| template.interpret(variables))
            .transpose()
    }

    /// Iterate over the slots in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (StringKind, &TranslateableString)> {
        self.slots.iter().map(|(kind, template)| (*kind, template))
    }
}

impl Default for StringCollection {
    /// A bundle whose label is the empty string.
    fn default() -> Self {
        let mut slots = IndexMap::new();
        slots.insert(StringKind::Label, TranslateableString::default());
        Self { slots }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCollection {
    Label(String),
    Slots(IndexMap<StringKind, String>),
}

impl TryFrom<RawCollection> for StringCollection {
    type Error = StringError;

    fn try_from(raw: RawCollection) -> Result<Self, Self::Error> {
        match raw {
            RawCollection::Label(label) => Self::from_label(&label),
            RawCollection::Slots(slots) => slots
                .into_iter()
                .try_fold(Self::new(), |bundle, (kind, source)| bundle.with(kind, &source)),
        }
    }
}

/// Read-only source of translation bundles.
///
/// Implementations own the backing data; lookups never mutate it.
pub trait StringStore {
    /// Resolve `key` into its bundle.
    ///
    /// `None` requests the designated default bundle, used as placeholder
    /// text for slots that are empty in the source tree.
    ///
    /// # Errors
    ///
    /// Returns [`StringError::KeyNotFound`] when `key` names no bundle. A
    /// `None` key must never fail this way.
    fn resolve(&self, key: Option<&str>) -> Result<StringCollection, StringError>;
}

impl<S: StringStore + ?Sized> StringStore for &S {
    fn resolve(&self, key: Option<&str>) -> Result<StringCollection, StringError> {
        (**self).resolve(key)
    }
}
