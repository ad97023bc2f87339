//! Options controlling how implicit keys are derived.

use serde::{Deserialize, Serialize};

/// Families of slots that share a key policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    /// Window titles.
    Title,
    /// Ribbon-style labels.
    Label,
    /// Headers: headered content, items holders, menu items, and columns.
    Header,
    /// Text content of content holders.
    Content,
    /// Text-display leaves.
    Text,
}

/// Which existing slot text may serve as a lookup key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeySource {
    /// Any current text is a key.
    #[default]
    AnyText,
    /// Only text starting with `$` is a key; other slots are left alone.
    MarkedOnly,
}

impl KeySource {
    /// Returns `true` when text of this kind of key may be looked up.
    #[must_use]
    pub const fn admits(self, explicit: bool) -> bool {
        match self {
            Self::AnyText => true,
            Self::MarkedOnly => explicit,
        }
    }
}

/// Key source per slot family.
///
/// # Examples
///
/// ```
/// use relabel::translate::{KeyPolicy, KeySource, SlotKind};
///
/// let policy = KeyPolicy::marked_text_display();
/// assert_eq!(policy.for_slot(SlotKind::Text), KeySource::MarkedOnly);
/// assert_eq!(policy.for_slot(SlotKind::Header), KeySource::AnyText);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct KeyPolicy {
    /// Window titles.
    pub title: KeySource,
    /// Ribbon-style labels.
    pub label: KeySource,
    /// Headers of every kind.
    pub header: KeySource,
    /// Content holders.
    pub content: KeySource,
    /// Text-display leaves.
    pub text: KeySource,
}

impl KeyPolicy {
    /// The same source for every slot family.
    #[must_use]
    pub const fn uniform(source: KeySource) -> Self {
        Self {
            title: source,
            label: source,
            header: source,
            content: source,
            text: source,
        }
    }

    /// Text-display leaves are translated only when marked with `$`.
    ///
    /// Free-form text blocks often hold content rather than keys; this
    /// preset leaves those alone.
    #[must_use]
    pub const fn marked_text_display() -> Self {
        Self {
            text: KeySource::MarkedOnly,
            ..Self::uniform(KeySource::AnyText)
        }
    }

    /// Key source for `slot`.
    #[must_use]
    pub const fn for_slot(&self, slot: SlotKind) -> KeySource {
        match slot {
            SlotKind::Title => self.title,
            SlotKind::Label => self.label,
            SlotKind::Header => self.header,
            SlotKind::Content => self.content,
            SlotKind::Text => self.text,
        }
    }
}

/// Options for a [`Translator`](super::Translator).
///
/// Serializable so hosts can keep them in their own configuration.
///
/// # Examples
///
/// ```
/// use relabel::translate::{KeySource, TranslateOptions};
///
/// let options: TranslateOptions =
///     serde_json::from_str(r#"{ "key-policy": { "text": "marked-only" } }"#)?;
/// assert_eq!(options.key_policy.text, KeySource::MarkedOnly);
/// assert_eq!(options.key_policy.title, KeySource::AnyText);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct TranslateOptions {
    /// How implicit keys are derived from current slot text.
    pub key_policy: KeyPolicy,
}

impl TranslateOptions {
    /// Options with the given key policy.
    #[must_use]
    pub const fn with_key_policy(key_policy: KeyPolicy) -> Self {
        Self { key_policy }
    }
}
