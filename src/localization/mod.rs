//! Localised rendering of relabel's own diagnostics.
//!
//! Translating the host's widget tree goes through a [`StringStore`]; this
//! module is only concerned with the crate's error messages. It owns the
//! process-wide `Localizer` handle so errors can render translated copy
//! without threading a localiser through every call. The default uses the
//! embedded English catalogue; hosts override it with [`set_localizer`] or
//! [`crate::locale_resolution::install_from_environment`].
//!
//! [`StringStore`]: crate::strings::StringStore

mod fluent;
pub mod keys;

pub use fluent::build_localizer;

use ortho_config::{LocalizationArgs, Localizer};
use std::fmt;
use std::sync::{Arc, OnceLock, RwLock};

static LOCALIZER: OnceLock<RwLock<Arc<dyn Localizer>>> = OnceLock::new();

fn localizer_storage() -> &'static RwLock<Arc<dyn Localizer>> {
    LOCALIZER.get_or_init(|| RwLock::new(Arc::from(build_localizer(None))))
}

/// Install the localiser that renders [`StringError`] and [`TranslateError`]
/// messages.
///
/// Errors built before the call render through the new localiser too, since
/// their text is produced on display.
///
/// [`StringError`]: crate::strings::StringError
/// [`TranslateError`]: crate::translate::TranslateError
pub fn set_localizer(localizer: Arc<dyn Localizer>) {
    let mut guard = localizer_storage()
        .write()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    *guard = localizer;
}

/// The localiser diagnostics currently render through.
#[must_use]
pub fn localizer() -> Arc<dyn Localizer> {
    let guard = localizer_storage()
        .read()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    Arc::clone(&guard)
}

/// Reinstates the diagnostics localiser that was active before
/// [`set_localizer_scoped`].
pub struct LocalizerGuard {
    previous: Arc<dyn Localizer>,
}

impl Drop for LocalizerGuard {
    fn drop(&mut self) {
        set_localizer(Arc::clone(&self.previous));
    }
}

/// Render diagnostics through `new_localizer` until the guard drops.
///
/// Hosts use this to show one batch of translation failures in a
/// different language from the rest of the session.
#[must_use]
pub fn set_localizer_scoped(new_localizer: Arc<dyn Localizer>) -> LocalizerGuard {
    let previous = localizer();
    set_localizer(new_localizer);
    LocalizerGuard { previous }
}

/// Message text of a relabel diagnostic: a key from [`keys`] plus its
/// arguments, such as the missing translation key or the offending node type.
///
/// Nothing is looked up until the message is displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedMessage {
    key: &'static str,
    args: Vec<(&'static str, String)>,
}

impl LocalizedMessage {
    /// Create a message with no arguments.
    #[must_use]
    pub const fn new(key: &'static str) -> Self {
        Self {
            key,
            args: Vec::new(),
        }
    }

    /// The Fluent identifier this message renders.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Attach a named Fluent argument, for instance `key` or `type_name`.
    #[must_use]
    #[expect(
        clippy::needless_pass_by_value,
        reason = "Accepting owned values keeps call sites ergonomic for temporaries."
    )]
    pub fn with_arg(mut self, name: &'static str, value: impl ToString) -> Self {
        self.args.push((name, value.to_string()));
        self
    }

    fn args_map(&self) -> Option<LocalizationArgs<'_>> {
        if self.args.is_empty() {
            return None;
        }
        let mut args = LocalizationArgs::default();
        for (name, value) in &self.args {
            args.insert(*name, value.clone().into());
        }
        Some(args)
    }
}

impl fmt::Display for LocalizedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args = self.args_map();
        let rendered = localizer().message(self.key, args.as_ref(), self.key);
        f.write_str(&rendered)
    }
}

/// Shorthand for [`LocalizedMessage::new`].
#[must_use]
pub const fn message(key: &'static str) -> LocalizedMessage {
    LocalizedMessage::new(key)
}
