//! Error types for tree translation.

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

use crate::localization::{self, LocalizedMessage, keys};
use crate::strings::StringError;

/// Errors that abort a translation pass.
///
/// Writes made before the failure are kept; there is no rollback.
#[derive(Debug, Error, Diagnostic)]
pub enum TranslateError {
    /// A lookup or interpolation failed.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Strings(#[from] StringError),

    /// The traversal reached a node whose shape has no rule.
    #[error("{message}")]
    #[diagnostic(code(relabel::translate::unsupported_node))]
    UnsupportedNodeType {
        /// Concrete type name reported by the node.
        type_name: &'static str,
        /// Localised error message.
        message: LocalizedMessage,
        /// Localised hint for resolving the error.
        #[help]
        help: LocalizedMessage,
    },
}

impl TranslateError {
    pub(crate) fn unsupported(type_name: &'static str) -> Self {
        Self::UnsupportedNodeType {
            type_name,
            message: localization::message(keys::TRANSLATE_UNSUPPORTED_NODE)
                .with_arg("type_name", type_name),
            help: localization::message(keys::TRANSLATE_UNSUPPORTED_NODE_HELP),
        }
    }

    pub(crate) fn explicit_unsupported(type_name: &'static str) -> Self {
        Self::UnsupportedNodeType {
            type_name,
            message: localization::message(keys::TRANSLATE_EXPLICIT_UNSUPPORTED)
                .with_arg("type_name", type_name),
            help: localization::message(keys::TRANSLATE_UNSUPPORTED_NODE_HELP),
        }
    }

    /// Type name of the offending node, for unsupported-node errors.
    #[must_use]
    pub const fn unsupported_type(&self) -> Option<&'static str> {
        match self {
            Self::UnsupportedNodeType { type_name, .. } => Some(type_name),
            Self::Strings(_) => None,
        }
    }
}
