//! Locale selection for relabel diagnostics.
//!
//! `RELABEL_LOCALE` takes precedence over the system locale. Both sources
//! are injected so hosts and tests can supply their own.

use std::str::FromStr;
use std::sync::Arc;

use ortho_config::LanguageIdentifier;

use crate::localization;

/// Environment variable that overrides the diagnostics locale.
pub const RELABEL_LOCALE_ENV: &str = "RELABEL_LOCALE";

/// Read-only environment access used for locale resolution.
pub trait EnvProvider {
    /// Fetch the environment variable value for `key`.
    fn var(&self, key: &str) -> Option<String>;
}

/// Environment provider backed by the process environment.
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemEnv;

impl EnvProvider for SystemEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// System locale provider for the current host.
pub trait SystemLocale {
    /// Return the system locale string when available.
    fn system_locale(&self) -> Option<String>;
}

/// System locale provider backed by `sys-locale`.
#[derive(Debug, Default, Copy, Clone)]
pub struct SysLocale;

impl SystemLocale for SysLocale {
    fn system_locale(&self) -> Option<String> {
        sys_locale::get_locale()
    }
}

/// Normalize a raw locale string into a BCP 47 language tag.
///
/// Encoding suffixes (`.UTF-8`) and modifiers (`@euro`) are dropped and
/// underscores become hyphens.
///
/// # Examples
///
/// ```rust
/// use relabel::locale_resolution::normalize_locale_tag;
///
/// assert_eq!(normalize_locale_tag("es_ES.UTF-8"), Some("es-ES".to_owned()));
/// assert_eq!(normalize_locale_tag("en-GB"), Some("en-GB".to_owned()));
/// assert_eq!(normalize_locale_tag(""), None);
/// ```
#[must_use]
pub fn normalize_locale_tag(raw: &str) -> Option<String> {
    let stripped = raw.trim().split(['.', '@']).next().unwrap_or_default().trim();
    if stripped.is_empty() {
        return None;
    }
    LanguageIdentifier::from_str(&stripped.replace('_', "-"))
        .ok()
        .map(|lang| lang.to_string())
}

/// Resolve the diagnostics locale: `RELABEL_LOCALE`, then the system locale.
///
/// Returns `None` when neither source yields a valid tag, in which case
/// callers fall back to English.
#[must_use]
pub fn resolve_locale(env: &impl EnvProvider, system: &impl SystemLocale) -> Option<String> {
    let from_env = env.var(RELABEL_LOCALE_ENV);
    let from_system = system.system_locale();
    [from_env.as_deref(), from_system.as_deref()]
        .into_iter()
        .flatten()
        .find_map(normalize_locale_tag)
}

/// Install the diagnostics localiser for the locale of the current process.
///
/// Returns the locale that was selected, if any.
pub fn install_from_environment() -> Option<String> {
    let locale = resolve_locale(&SystemEnv, &SysLocale);
    tracing::debug!(locale = locale.as_deref(), "installing diagnostics localiser");
    localization::set_localizer(Arc::from(localization::build_localizer(
        locale.as_deref(),
    )));
    locale
}
