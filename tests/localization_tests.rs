//! Localised rendering of diagnostics and locale fallback.

use anyhow::{Result, ensure};
use miette::Diagnostic;
use relabel::localization::{self, keys};
use relabel::node::Capabilities;
use relabel::strings::{Catalog, StringError, StringKind};
use relabel::translate::Translator;
use rstest::rstest;
use serial_test::serial;
use test_support::error::display_error_chain;
use test_support::fluent::rendered;
use test_support::localizer::{localizer_test_lock, use_english, use_locale};
use test_support::widgets::Widget;

#[rstest]
#[serial]
fn key_not_found_renders_in_spanish() -> Result<()> {
    let _lock = localizer_test_lock();
    let _guard = use_locale("es-ES");
    let message = rendered(&StringError::key_not_found("Open"));
    ensure!(
        message == "no se encontró la clave de traducción `Open`",
        "expected Spanish translation, got: {message}"
    );
    Ok(())
}

#[rstest]
#[case("fr-FR")]
#[case("not a locale")]
#[serial]
fn unknown_locales_fall_back_to_english(#[case] locale: &str) -> Result<()> {
    let _lock = localizer_test_lock();
    let _guard = use_locale(locale);
    let message = rendered(&StringError::missing_slot("Greeting", StringKind::Message));
    ensure!(
        message == "translation `Greeting` has no message string",
        "expected English fallback, got: {message}"
    );
    Ok(())
}

#[rstest]
#[serial]
fn messages_render_in_the_locale_active_at_display_time() -> Result<()> {
    let _lock = localizer_test_lock();
    let _english = use_english();
    let err = StringError::key_not_found("Save");
    let _spanish = use_locale("es-ES");
    let message = rendered(&err);
    ensure!(message.starts_with("no se encontró"), "got: {message}");
    Ok(())
}

#[rstest]
#[serial]
fn unsupported_nodes_name_their_type() -> Result<()> {
    let _lock = localizer_test_lock();
    let _guard = use_english();
    let catalog = Catalog::default();
    let mut gauge = Widget::custom("Gauge", Capabilities::empty());
    let err = Translator::new(&catalog)
        .translate(&mut gauge)
        .expect_err("gauge has no rule");
    let chain = display_error_chain(&err);
    ensure!(
        chain == "cannot translate node of type `Gauge`",
        "unexpected message: {chain}"
    );
    ensure!(
        err.code().map(|code| code.to_string()).as_deref()
            == Some("relabel::translate::unsupported_node")
    );
    ensure!(err.help().is_some(), "a hint is attached");
    Ok(())
}

#[rstest]
#[serial]
fn string_errors_pass_through_translate_errors() -> Result<()> {
    let _lock = localizer_test_lock();
    let _guard = use_english();
    let catalog = Catalog::default();
    let mut text = Widget::text_block("Absent");
    let err = Translator::new(&catalog)
        .translate(&mut text)
        .expect_err("key is absent");
    ensure!(rendered(&err) == "translation key `Absent` was not found");
    ensure!(
        err.code().map(|code| code.to_string()).as_deref()
            == Some("relabel::strings::key_not_found")
    );
    Ok(())
}

#[rstest]
#[serial]
fn every_declared_key_has_an_english_message() -> Result<()> {
    let _lock = localizer_test_lock();
    let _guard = use_english();
    let localizer = localization::localizer();
    for key in keys::ALL_KEYS {
        ensure!(
            localizer.lookup(key, None).is_some(),
            "no English message for {key}"
        );
    }
    Ok(())
}
