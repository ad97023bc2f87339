//! Serialised access to the process-wide diagnostics localiser.

use relabel::localization::{self, LocalizerGuard};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

static LOCALIZER_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Hold the lock while a test depends on the active localiser.
///
/// A poisoned lock is recovered: a failed test must not cascade.
pub fn localizer_test_lock() -> MutexGuard<'static, ()> {
    LOCALIZER_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Install the bundled catalogue for `locale` until the guard drops.
pub fn use_locale(locale: &str) -> LocalizerGuard {
    let localizer = localization::build_localizer(Some(locale));
    localization::set_localizer_scoped(Arc::from(localizer))
}

/// Install the English catalogue until the guard drops.
pub fn use_english() -> LocalizerGuard {
    use_locale("en-US")
}
