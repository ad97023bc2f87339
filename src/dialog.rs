//! Modal dialog text resolution.
//!
//! Dialog bundles carry a [`StringKind::Title`] and a
//! [`StringKind::Message`]. [`Dialogs`] resolves both and hands the pair to
//! the host's [`DialogPresenter`], which owns presentation and returns the
//! user's answer.

use std::error::Error;

use tracing::debug;

use crate::strings::{StringError, StringKind, StringStore, TranslationKey};

/// Resolved text of one dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogText {
    /// Window caption.
    pub title: String,
    /// Body text.
    pub message: String,
}

/// Host collaborator that shows modal dialogs.
///
/// Each method blocks until the user answers and returns `true` for an
/// affirmative answer.
pub trait DialogPresenter {
    /// Ask a yes/no question.
    fn question(&mut self, text: &DialogText) -> bool;

    /// Show a warning.
    fn warning(&mut self, text: &DialogText) -> bool;

    /// Show an error, with the underlying failure when there is one.
    fn error(&mut self, text: &DialogText, detail: Option<&(dyn Error + 'static)>) -> bool;

    /// Show an informational message.
    fn info(&mut self, text: &DialogText) -> bool;
}

/// Resolves dialog bundles and forwards them to a [`DialogPresenter`].
///
/// # Examples
///
/// ```
/// use relabel::dialog::{DialogPresenter, DialogText, Dialogs};
/// use relabel::strings::Catalog;
///
/// #[derive(Default)]
/// struct Shown(Vec<DialogText>);
///
/// impl DialogPresenter for Shown {
///     fn question(&mut self, text: &DialogText) -> bool {
///         self.0.push(text.clone());
///         true
///     }
///     fn warning(&mut self, _: &DialogText) -> bool { true }
///     fn error(&mut self, _: &DialogText, _: Option<&(dyn std::error::Error + 'static)>) -> bool { true }
///     fn info(&mut self, _: &DialogText) -> bool { true }
/// }
///
/// let catalog = Catalog::builder()
///     .dialog("ConfirmDelete", "Delete", "Delete {0}?")?
///     .build();
/// let mut dialogs = Dialogs::new(&catalog, Shown::default());
/// assert!(dialogs.question("ConfirmDelete", &["notes.txt"])?);
/// assert_eq!(dialogs.presenter().0[0].message, "Delete notes.txt?");
/// # Ok::<(), relabel::strings::StringError>(())
/// ```
#[derive(Debug)]
pub struct Dialogs<'s, S: StringStore + ?Sized, P> {
    store: &'s S,
    presenter: P,
}

impl<'s, S: StringStore + ?Sized, P: DialogPresenter> Dialogs<'s, S, P> {
    /// Pair a store with a presenter.
    #[must_use]
    pub const fn new(store: &'s S, presenter: P) -> Self {
        Self { store, presenter }
    }

    /// The wrapped presenter.
    #[must_use]
    pub const fn presenter(&self) -> &P {
        &self.presenter
    }

    /// The wrapped presenter, mutably.
    pub const fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Release the presenter.
    #[must_use]
    pub fn into_presenter(self) -> P {
        self.presenter
    }

    /// Resolve the title and message for `key`.
    ///
    /// A bundle without a title falls back to its label.
    ///
    /// # Errors
    ///
    /// Returns [`StringError::KeyNotFound`] for an unknown key,
    /// [`StringError::MissingSlot`] when the bundle has no message (or
    /// neither title nor label), and [`StringError::InterpolationArity`] when
    /// `variables` is too short.
    pub fn text<V: AsRef<str>>(&self, key: &str, variables: &[V]) -> Result<DialogText, StringError> {
        let name = TranslationKey::explicit(key).name();
        let bundle = self.store.resolve(Some(name))?;
        let title = bundle
            .get(StringKind::Title)
            .map_or_else(|| bundle.require(StringKind::Label, name), Ok)?
            .interpret(variables)?;
        let message = bundle
            .require(StringKind::Message, name)?
            .interpret(variables)?;
        Ok(DialogText { title, message })
    }

    /// Resolve `key` and ask a question.
    ///
    /// # Errors
    ///
    /// See [`Dialogs::text`]. The presenter is not called on failure.
    pub fn question<V: AsRef<str>>(&mut self, key: &str, variables: &[V]) -> Result<bool, StringError> {
        let text = self.text(key, variables)?;
        debug!(key, "showing question dialog");
        Ok(self.presenter.question(&text))
    }

    /// Resolve `key` and show a warning.
    ///
    /// # Errors
    ///
    /// See [`Dialogs::text`]. The presenter is not called on failure.
    pub fn warning<V: AsRef<str>>(&mut self, key: &str, variables: &[V]) -> Result<bool, StringError> {
        let text = self.text(key, variables)?;
        debug!(key, "showing warning dialog");
        Ok(self.presenter.warning(&text))
    }

    /// Resolve `key` and show an error with an optional failure detail.
    ///
    /// # Errors
    ///
    /// See [`Dialogs::text`]. The presenter is not called on failure.
    pub fn error<V: AsRef<str>>(
        &mut self,
        key: &str,
        variables: &[V],
        detail: Option<&(dyn Error + 'static)>,
    ) -> Result<bool, StringError> {
        let text = self.text(key, variables)?;
        debug!(key, has_detail = detail.is_some(), "showing error dialog");
        Ok(self.presenter.error(&text, detail))
    }

    /// Resolve `key` and show an informational message.
    ///
    /// # Errors
    ///
    /// See [`Dialogs::text`]. The presenter is not called on failure.
    pub fn info<V: AsRef<str>>(&mut self, key: &str, variables: &[V]) -> Result<bool, StringError> {
        let text = self.text(key, variables)?;
        debug!(key, "showing info dialog");
        Ok(self.presenter.info(&text))
    }
}
