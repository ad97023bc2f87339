//! Error types for string resolution.
//!
//! Every variant describes a content defect: a key missing from the store, a
//! bundle without the requested slot, or a template that does not fit the
//! variables supplied to it.

// miette/thiserror derive expansion trips `unused_assignments` on some
// toolchains only, so `#[expect]` cannot be used here.
// FIXME(rust-lang/rust#130021): remove once upstream is fixed.
#![allow(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    unused_assignments
)]

use miette::Diagnostic;
use thiserror::Error;

use super::StringKind;
use crate::localization::{self, LocalizedMessage, keys};

/// Reasons a template fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateFault {
    /// A `{` was never closed.
    UnterminatedPlaceholder,
    /// A placeholder contained no index, as in `{}`.
    EmptyPlaceholder,
    /// A placeholder contained something other than decimal digits.
    NonNumericPlaceholder,
    /// A placeholder index too large for its variable count to be counted.
    IndexTooLarge,
    /// A lone `}` appeared outside a placeholder.
    UnmatchedClose,
}

impl TemplateFault {
    /// Localised description of the fault.
    #[must_use]
    pub const fn message(self) -> LocalizedMessage {
        localization::message(match self {
            Self::UnterminatedPlaceholder => keys::TEMPLATE_FAULT_UNTERMINATED,
            Self::EmptyPlaceholder => keys::TEMPLATE_FAULT_EMPTY,
            Self::NonNumericPlaceholder => keys::TEMPLATE_FAULT_NON_NUMERIC,
            Self::IndexTooLarge => keys::TEMPLATE_FAULT_INDEX_TOO_LARGE,
            Self::UnmatchedClose => keys::TEMPLATE_FAULT_UNMATCHED_CLOSE,
        })
    }
}

/// Errors raised while resolving keys or interpreting templates.
#[derive(Debug, Error, Diagnostic)]
pub enum StringError {
    /// The store has no bundle for the key.
    #[error("{message}")]
    #[diagnostic(code(relabel::strings::key_not_found))]
    KeyNotFound {
        /// The key as passed to the store, without the `$` sentinel.
        key: String,
        /// Localised error message.
        message: LocalizedMessage,
        /// Localised hint for resolving the error.
        #[help]
        help: LocalizedMessage,
    },

    /// The bundle exists but lacks the slot a rule needs.
    #[error("{message}")]
    #[diagnostic(code(relabel::strings::missing_slot))]
    MissingSlot {
        /// Key of the incomplete bundle.
        key: String,
        /// Slot the rule asked for.
        kind: StringKind,
        /// Localised error message.
        message: LocalizedMessage,
    },

    /// Fewer variables were supplied than the template's placeholders need.
    #[error("{message}")]
    #[diagnostic(code(relabel::strings::interpolation_arity))]
    InterpolationArity {
        /// Raw template text.
        template: String,
        /// Variables the template requires.
        expected: usize,
        /// Variables the caller supplied.
        supplied: usize,
        /// Localised error message.
        message: LocalizedMessage,
    },

    /// The template text could not be parsed.
    #[error("{message}")]
    #[diagnostic(code(relabel::strings::invalid_template))]
    InvalidTemplate {
        /// Raw template text.
        template: String,
        /// What was wrong with it.
        fault: TemplateFault,
        /// Localised error message.
        message: LocalizedMessage,
    },
}

impl StringError {
    /// Build a [`Self::KeyNotFound`] error for `key`.
    ///
    /// Stores implemented outside this crate use this to report lookup
    /// misses.
    #[must_use]
    pub fn key_not_found(key: &str) -> Self {
        Self::KeyNotFound {
            key: key.to_owned(),
            message: localization::message(keys::STRINGS_KEY_NOT_FOUND).with_arg("key", key),
            help: localization::message(keys::STRINGS_KEY_NOT_FOUND_HELP),
        }
    }

    /// Build a [`Self::MissingSlot`] error.
    #[must_use]
    pub fn missing_slot(key: &str, kind: StringKind) -> Self {
        Self::MissingSlot {
            key: key.to_owned(),
            kind,
            message: localization::message(keys::STRINGS_MISSING_SLOT)
                .with_arg("key", key)
                .with_arg("kind", kind.as_str()),
        }
    }

    pub(crate) fn interpolation_arity(template: &str, expected: usize, supplied: usize) -> Self {
        Self::InterpolationArity {
            template: template.to_owned(),
            expected,
            supplied,
            message: localization::message(keys::STRINGS_INTERPOLATION_ARITY)
                .with_arg("template", template)
                .with_arg("expected", expected)
                .with_arg("supplied", supplied),
        }
    }

    pub(crate) fn invalid_template(template: &str, fault: TemplateFault) -> Self {
        Self::InvalidTemplate {
            template: template.to_owned(),
            fault,
            message: localization::message(keys::STRINGS_INVALID_TEMPLATE)
                .with_arg("template", template)
                .with_arg("reason", fault.message()),
        }
    }
}
