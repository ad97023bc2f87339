//! Fluent-backed localisers with an English fallback.

use ortho_config::LanguageIdentifier;
use ortho_config::{FluentLocalizer, FluentLocalizerBuilder, Localizer, NoOpLocalizer};
use std::str::FromStr;

const RELABEL_EN_US: &str = include_str!("../../locales/en-US/messages.ftl");
const RELABEL_ES_ES: &str = include_str!("../../locales/es-ES/messages.ftl");

/// Consults `primary` first and `fallback` for any message it lacks.
struct LayeredLocalizer {
    primary: Box<dyn Localizer>,
    fallback: Box<dyn Localizer>,
}

impl Localizer for LayeredLocalizer {
    fn lookup(
        &self,
        id: &str,
        args: Option<&ortho_config::LocalizationArgs<'_>>,
    ) -> Option<String> {
        self.primary
            .lookup(id, args)
            .or_else(|| self.fallback.lookup(id, args))
    }
}

fn english() -> Box<dyn Localizer> {
    FluentLocalizer::with_en_us_defaults([RELABEL_EN_US]).map_or_else(
        |_| {
            tracing::warn!("embedded English catalogue failed to load");
            Box::new(NoOpLocalizer::new()) as Box<dyn Localizer>
        },
        |localizer| Box::new(localizer) as Box<dyn Localizer>,
    )
}

fn bundled_resource(locale: &LanguageIdentifier) -> Option<&'static str> {
    match locale.language.as_str() {
        "es" => Some(RELABEL_ES_ES),
        _ => None,
    }
}

fn consumer(builder: FluentLocalizerBuilder, resource: &'static str) -> Option<Box<dyn Localizer>> {
    builder
        .with_consumer_resources([resource])
        .disable_defaults()
        .try_build()
        .ok()
        .map(|localizer| Box::new(localizer) as Box<dyn Localizer>)
}

/// Build a diagnostics localiser for `preferred_locale`.
///
/// Locales without a bundled catalogue, and unparsable tags, yield the
/// English localiser. Bundled locales fall back to English per message.
#[must_use]
pub fn build_localizer(preferred_locale: Option<&str>) -> Box<dyn Localizer> {
    let fallback = english();
    let Some(locale) = preferred_locale.and_then(|tag| LanguageIdentifier::from_str(tag).ok())
    else {
        return fallback;
    };
    let Some(resource) = bundled_resource(&locale) else {
        tracing::debug!(%locale, "no bundled diagnostics catalogue; using English");
        return fallback;
    };
    let Some(primary) = consumer(FluentLocalizer::builder(locale), resource) else {
        return fallback;
    };
    Box::new(LayeredLocalizer { primary, fallback })
}
