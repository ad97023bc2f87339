//! Runtime localisation of live widget trees.
//!
//! Hosts describe their widgets through [`node::Element`], keep translations
//! in a [`strings::StringStore`] (such as [`strings::Catalog`]), and call
//! [`translate::Translator`] to replace each node's current text, treated as
//! a lookup key, with the resolved and interpolated translation. Tree
//! structure and node identity are never changed.
//!
//! Diagnostics are localised through Fluent; see [`localization`] and
//! [`locale_resolution`].

pub mod dialog;
pub mod locale_resolution;
pub mod localization;
pub mod node;
pub mod strings;
pub mod translate;

pub use dialog::{DialogPresenter, DialogText, Dialogs};
pub use strings::{Catalog, StringCollection, StringError, StringKind, StringStore};
pub use translate::{TranslateError, TranslateOptions, Translator};
