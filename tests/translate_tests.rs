//! End-to-end behaviour of tree translation.

use anyhow::{Result, ensure};
use relabel::node::Capabilities;
use relabel::strings::{Catalog, StringError, StringStore};
use relabel::translate::{TranslateError, Translator};
use rstest::{fixture, rstest};
use test_support::RecordingStore;
use test_support::catalog::sample_catalog;
use test_support::widgets::Widget;

#[fixture]
fn catalog() -> Catalog {
    sample_catalog().expect("sample catalogue parses")
}

#[rstest]
fn window_title_interpolates_variables(catalog: Catalog) -> Result<()> {
    let mut window = Widget::window("$MainTitle", None);
    Translator::new(&catalog).translate_window_with(&mut window, &["World"])?;
    ensure!(
        window.text() == Some("Hello World"),
        "unexpected title {:?}",
        window.text()
    );
    Ok(())
}

#[rstest]
fn window_title_without_variables_reports_arity(catalog: Catalog) {
    let mut window = Widget::window("MainTitle", None);
    let err = Translator::new(&catalog)
        .translate_window(&mut window)
        .expect_err("title needs one variable");
    assert!(matches!(
        err,
        TranslateError::Strings(StringError::InterpolationArity {
            expected: 1,
            supplied: 0,
            ..
        })
    ));
    assert_eq!(window.text(), Some("MainTitle"));
}

#[rstest]
fn window_translates_title_then_content(catalog: Catalog) -> Result<()> {
    let store = RecordingStore::new(catalog);
    let mut window = Widget::window(
        "Greeting",
        Some(Widget::stack_panel([
            Widget::text_block("Edit").named("edit"),
        ])),
    );
    Translator::new(&store).translate_window(&mut window)?;
    ensure!(window.text() == Some("Hi"), "title {:?}", window.text());
    ensure!(window.text_of("edit") == Some("Edit"));
    ensure!(
        store.lookups() == vec![Some("Greeting".to_owned()), Some("Edit".to_owned())],
        "unexpected lookup order {:?}",
        store.lookups()
    );
    Ok(())
}

#[rstest]
fn panel_leaves_images_alone(catalog: Catalog) -> Result<()> {
    let store = RecordingStore::new(catalog);
    let mut panel = Widget::stack_panel([
        Widget::image().named("logo"),
        Widget::text_block("Greeting").named("greeting"),
    ]);
    let before = panel.find("logo").cloned();
    Translator::new(&store).translate(&mut panel)?;
    ensure!(panel.find("logo").cloned() == before, "image was modified");
    ensure!(panel.text_of("greeting") == Some("Hi"));
    ensure!(store.lookups() == vec![Some("Greeting".to_owned())]);
    Ok(())
}

#[rstest]
#[case("ProgressBar")]
#[case("ComboBox")]
#[case("Image")]
#[case("TreeView")]
#[case("Ellipse")]
#[case("PasswordBox")]
#[case("GridSplitter")]
#[case("ResizeGrip")]
fn excluded_leaves_are_not_looked_up(catalog: Catalog, #[case] type_name: &'static str) -> Result<()> {
    let store = RecordingStore::new(catalog);
    let mut leaf = Widget::excluded(type_name);
    let before = leaf.clone();
    Translator::new(&store).translate(&mut leaf)?;
    ensure!(leaf == before, "{type_name} was modified");
    ensure!(store.count() == 0, "{type_name} triggered a lookup");
    Ok(())
}

#[rstest]
fn unsupported_node_aborts_and_leaves_later_siblings(catalog: Catalog) {
    let store = RecordingStore::new(catalog);
    let mut panel = Widget::stack_panel([
        Widget::text_block("Greeting").named("first"),
        Widget::custom("Gauge", Capabilities::empty()),
        Widget::text_block("Status").named("last"),
    ]);
    let err = Translator::new(&store)
        .translate(&mut panel)
        .expect_err("gauge has no rule");
    assert_eq!(err.unsupported_type(), Some("Gauge"));
    assert!(err.to_string().contains("Gauge"), "message: {err}");
    assert_eq!(panel.text_of("first"), Some("Hi"));
    assert_eq!(panel.text_of("last"), Some("Status"), "Status would become Ready");
    assert_eq!(store.lookups(), vec![Some("Greeting".to_owned())]);
}

#[rstest]
fn missing_key_aborts_the_pass(catalog: Catalog) {
    let mut panel = Widget::stack_panel([Widget::text_block("Nonexistent")]);
    let err = Translator::new(&catalog)
        .translate(&mut panel)
        .expect_err("key is absent");
    assert!(matches!(
        err,
        TranslateError::Strings(StringError::KeyNotFound { ref key, .. }) if key == "Nonexistent"
    ));
}

#[rstest]
fn headered_content_is_idempotent_for_identity_entries(catalog: Catalog) -> Result<()> {
    let mut group = Widget::group_box(Some("Identity"), None);
    let translator = Translator::new(&catalog);
    translator.translate(&mut group)?;
    let first = group.text().map(str::to_owned);
    translator.translate(&mut group)?;
    ensure!(group.text().map(str::to_owned) == first);
    ensure!(first.as_deref() == Some("Identity"));
    Ok(())
}

#[rstest]
fn empty_items_holders_make_no_lookups(catalog: Catalog) -> Result<()> {
    let store = RecordingStore::new(catalog);
    let translator = Translator::new(&store);
    translator.translate(&mut Widget::menu([]))?;
    translator.translate(&mut Widget::list_box([]))?;
    translator.translate(&mut Widget::list_view(Some(&[][..]), []))?;
    translator.translate(&mut Widget::list_view(None, []))?;
    ensure!(store.count() == 0, "lookups: {:?}", store.lookups());
    Ok(())
}

#[rstest]
#[case(Widget::ribbon_button(Some("Open")))]
#[case(Widget::ribbon_check_box(Some("Open")))]
#[case(Widget::ribbon_toggle_button(Some("Open")))]
fn accelerator_marker_never_reaches_the_label(catalog: Catalog, #[case] mut button: Widget) -> Result<()> {
    Translator::new(&catalog).translate(&mut button)?;
    ensure!(button.text() == Some("Open"), "label {:?}", button.text());
    ensure!(button.key_tip() == Some('O'));
    ensure!(button.tooltip() == Some("Open a file"));
    Ok(())
}

#[rstest]
fn failed_tooltip_leaves_the_node_untouched(catalog: Catalog) {
    let mut button = Widget::ribbon_button(Some("Save"));
    let err = Translator::new(&catalog)
        .translate(&mut button)
        .expect_err("tooltip needs a variable");
    assert!(matches!(
        err,
        TranslateError::Strings(StringError::InterpolationArity { .. })
    ));
    assert_eq!(button.text(), Some("Save"));
    assert_eq!(button.key_tip(), None);
    assert_eq!(button.tooltip(), None);
}

#[rstest]
fn default_bundle_never_fails(catalog: Catalog) -> Result<()> {
    ensure!(catalog.resolve(None).is_ok());
    ensure!(matches!(
        catalog.resolve(Some("missingKey")),
        Err(StringError::KeyNotFound { .. })
    ));
    Ok(())
}

#[rstest]
fn translating_a_full_window(catalog: Catalog) -> Result<()> {
    let mut window = Widget::window(
        "Greeting",
        Some(Widget::grid([
            Widget::menu([Widget::menu_item(
                Some("File"),
                [Widget::menu_item(Some("Open"), []).named("open")],
            )
            .named("file")]),
            Widget::tab_control([Widget::tab_item(
                Some("Details"),
                Some(Widget::stack_panel([
                    Widget::button("Paste").named("paste"),
                    Widget::ribbon_text_box(Some("Search"), "typed").named("search"),
                    Widget::image(),
                ])),
            )
            .named("details")]),
            Widget::status_bar([Widget::status_bar_item(Some(
                Widget::text_block("Status").named("status"),
            ))]),
        ])),
    );
    Translator::new(&catalog).translate_window(&mut window)?;

    ensure!(window.text() == Some("Hi"));
    ensure!(window.text_of("file") == Some("File"));
    ensure!(window.text_of("open") == Some("Open"));
    ensure!(window.find("open").and_then(Widget::tooltip) == Some("Open a file"));
    ensure!(window.text_of("details") == Some("Details"));
    ensure!(window.text_of("paste") == Some("Paste"));
    ensure!(
        window.find("paste").and_then(Widget::tooltip) == Some("Paste from the clipboard")
    );
    ensure!(window.text_of("search") == Some("Search"));
    ensure!(window.find("search").map(Widget::value) == Some("typed"));
    ensure!(window.text_of("status") == Some("Ready"));
    Ok(())
}
