//! Per-shape dispatch rules and slot writes.

use anyhow::{Result, ensure};
use relabel::node::{Capabilities, Element, Rule, Shape};
use relabel::strings::Catalog;
use relabel::translate::{KeyPolicy, KeySource, TranslateError, TranslateOptions, Translator};
use rstest::{fixture, rstest};
use test_support::catalog::sample_catalog;
use test_support::widgets::{Child, MenuEntry, Widget};
use test_support::RecordingStore;

#[fixture]
fn store() -> RecordingStore<Catalog> {
    RecordingStore::new(sample_catalog().expect("sample catalogue parses"))
}

fn keys(store: &RecordingStore<Catalog>) -> Vec<Option<String>> {
    store.lookups()
}

fn key(name: &str) -> Option<String> {
    Some(name.to_owned())
}

#[rstest]
fn menu_items_recurse_before_their_own_header(store: RecordingStore<Catalog>) -> Result<()> {
    let mut menu = Widget::menu([Widget::menu_item(
        Some("File"),
        [Widget::menu_item(Some("Open"), []).named("open")],
    )
    .named("file")]);
    Translator::new(&store).translate(&mut menu)?;
    ensure!(keys(&store) == vec![key("Open"), key("File")], "{:?}", keys(&store));
    let open = menu.find("open").expect("open entry");
    ensure!(open.text() == Some("Open"));
    ensure!(open.tooltip() == Some("Open a file"));
    ensure!(open.key_tip().is_none(), "menu items take no accelerator");
    ensure!(menu.text_of("file") == Some("File"));
    Ok(())
}

#[rstest]
#[case(Some(""))]
#[case(None)]
fn menu_items_without_header_are_skipped(
    store: RecordingStore<Catalog>,
    #[case] header: Option<&str>,
) -> Result<()> {
    let mut item = Widget::menu_item(header, []);
    Translator::new(&store).translate(&mut item)?;
    ensure!(store.count() == 0);
    ensure!(item.text() == header);
    Ok(())
}

#[rstest]
fn null_generic_header_uses_the_default_bundle(store: RecordingStore<Catalog>) -> Result<()> {
    let mut group = Widget::tree_group(None, []);
    Translator::new(&store).translate(&mut group)?;
    ensure!(group.text() == Some("(untitled)"), "{:?}", group.text());
    ensure!(keys(&store) == vec![None]);
    Ok(())
}

#[rstest]
fn generic_header_is_looked_up(store: RecordingStore<Catalog>) -> Result<()> {
    let mut group = Widget::tree_group(Some("Options"), [Child::Data("row".to_owned())]);
    Translator::new(&store).translate(&mut group)?;
    ensure!(group.text() == Some("Options"));
    ensure!(keys(&store) == vec![key("Options")]);
    Ok(())
}

#[rstest]
fn ribbon_tab_header_feeds_the_key_tip(store: RecordingStore<Catalog>) -> Result<()> {
    let mut tab = Widget::ribbon_tab(Some("Home"), [Widget::ribbon_button(Some("Open"))]);
    Translator::new(&store).translate(&mut tab)?;
    ensure!(tab.text() == Some("Home"));
    ensure!(tab.key_tip() == Some('H'));
    ensure!(keys(&store) == vec![key("Open"), key("Home")]);
    Ok(())
}

#[rstest]
fn ribbon_tab_without_header_gets_placeholder(store: RecordingStore<Catalog>) -> Result<()> {
    let mut tab = Widget::ribbon_tab(None, []);
    Translator::new(&store).translate(&mut tab)?;
    ensure!(tab.text() == Some("(untitled)"));
    ensure!(tab.key_tip().is_none());
    Ok(())
}

#[rstest]
fn column_headers_resolve_with_placeholder_for_null(store: RecordingStore<Catalog>) -> Result<()> {
    let mut list = Widget::list_view(
        Some(&[Some("Name"), None, Some("Size")][..]),
        [Child::Data("row".to_owned())],
    );
    Translator::new(&store).translate(&mut list)?;
    ensure!(
        list.columns() == Some(vec![Some("Name"), Some("(untitled)"), Some("Size")]),
        "{:?}",
        list.columns()
    );
    ensure!(keys(&store) == vec![key("Name"), None, key("Size")]);
    Ok(())
}

#[rstest]
fn list_view_without_columns_is_tolerated(store: RecordingStore<Catalog>) -> Result<()> {
    let mut list = Widget::list_view(None, [Widget::text_block("Greeting").into()]);
    Translator::new(&store).translate(&mut list)?;
    ensure!(list.columns().is_none());
    ensure!(keys(&store) == vec![key("Greeting")]);
    Ok(())
}

#[rstest]
fn data_items_are_skipped(store: RecordingStore<Catalog>) -> Result<()> {
    let mut list = Widget::list_box([
        Child::Data("Greeting".to_owned()),
        Widget::text_block("Greeting").named("shown").into(),
    ]);
    Translator::new(&store).translate(&mut list)?;
    ensure!(list.children().first() == Some(&Child::Data("Greeting".to_owned())));
    ensure!(list.text_of("shown") == Some("Hi"));
    ensure!(store.count() == 1);
    Ok(())
}

#[rstest]
fn ribbon_menu_button_resolves_items_then_label(store: RecordingStore<Catalog>) -> Result<()> {
    let mut button = Widget::ribbon_menu_button(
        Some("Search"),
        [Widget::ribbon_button(Some("Copy")).named("copy").into()],
    );
    Translator::new(&store).translate(&mut button)?;
    ensure!(keys(&store) == vec![key("Copy"), key("Search")]);
    ensure!(button.text() == Some("Search"));
    ensure!(button.key_tip() == Some('S'));
    ensure!(button.text_of("copy") == Some("Copy"));
    Ok(())
}

#[rstest]
fn status_bar_items_recurse_into_their_content(store: RecordingStore<Catalog>) -> Result<()> {
    let mut bar = Widget::status_bar([
        Widget::status_bar_item(Some(Widget::text_block("Status").named("status"))),
        Widget::status_bar_item(None),
    ]);
    Translator::new(&store).translate(&mut bar)?;
    ensure!(bar.text_of("status") == Some("Ready"));
    Ok(())
}

#[rstest]
fn tab_items_resolve_header_then_content(store: RecordingStore<Catalog>) -> Result<()> {
    let mut tabs = Widget::tab_control([
        Widget::tab_item(Some("Details"), Some(Widget::text_block("Greeting").named("body")))
            .named("tab"),
        Widget::tab_item(None, None).named("blank"),
    ]);
    Translator::new(&store).translate(&mut tabs)?;
    ensure!(tabs.text_of("tab") == Some("Details"));
    ensure!(tabs.text_of("body") == Some("Hi"));
    ensure!(tabs.text_of("blank").is_none(), "null headers stay null");
    ensure!(keys(&store) == vec![key("Details"), key("Greeting")]);
    Ok(())
}

#[rstest]
fn decorators_and_user_controls_delegate(store: RecordingStore<Catalog>) -> Result<()> {
    let mut tree = Widget::stack_panel([
        Widget::border(Some(Widget::text_block("Greeting").named("framed"))),
        Widget::border(None),
        Widget::user_control(Some(Widget::label(Some("Edit")).named("inner"))),
        Widget::user_control_text("Greeting").named("plain"),
        Widget::user_control(None),
    ]);
    Translator::new(&store).translate(&mut tree)?;
    ensure!(tree.text_of("framed") == Some("Hi"));
    ensure!(tree.text_of("inner") == Some("Edit"));
    ensure!(tree.text_of("plain") == Some("Hi"));
    Ok(())
}

#[rstest]
fn buttons_resolve_tooltip_from_the_same_bundle(store: RecordingStore<Catalog>) -> Result<()> {
    let mut panel = Widget::stack_panel([
        Widget::button("Paste").named("paste"),
        Widget::button("Greeting").with_tooltip("keep").named("greet"),
        Widget::label(Some("Paste")).named("label"),
    ]);
    Translator::new(&store).translate(&mut panel)?;
    let paste = panel.find("paste").expect("paste button");
    ensure!(paste.text() == Some("Paste"));
    ensure!(paste.tooltip() == Some("Paste from the clipboard"));
    let greet = panel.find("greet").expect("greet button");
    ensure!(greet.text() == Some("Hi"));
    ensure!(greet.tooltip() == Some("keep"), "absent tooltip keeps old text");
    let label = panel.find("label").expect("label");
    ensure!(label.tooltip().is_none(), "labels have no tooltip slot");
    Ok(())
}

#[rstest]
fn node_content_is_recursed_into(store: RecordingStore<Catalog>) -> Result<()> {
    let mut button = Widget::button_with(Widget::text_block("Greeting").named("inner"));
    Translator::new(&store).translate(&mut button)?;
    ensure!(button.text().is_none());
    ensure!(button.text_of("inner") == Some("Hi"));
    ensure!(keys(&store) == vec![key("Greeting")]);
    Ok(())
}

#[rstest]
fn empty_content_is_skipped(store: RecordingStore<Catalog>) -> Result<()> {
    let mut label = Widget::label(None);
    Translator::new(&store).translate(&mut label)?;
    ensure!(store.count() == 0);
    Ok(())
}

#[rstest]
fn context_menus_resolve_before_the_node(store: RecordingStore<Catalog>) -> Result<()> {
    let mut label = Widget::label(Some("Greeting")).with_context_menu([
        MenuEntry::new("Copy"),
        MenuEntry::new("Paste"),
        MenuEntry::new(""),
    ]);
    Translator::new(&store).translate(&mut label)?;
    ensure!(keys(&store) == vec![key("Copy"), key("Paste"), key("Greeting")]);
    let entries = label.context_menu_entries();
    ensure!(entries[0].header.as_deref() == Some("Copy"));
    ensure!(entries[1].tooltip.as_deref() == Some("Paste from the clipboard"));
    ensure!(entries[2].header.as_deref() == Some(""));
    Ok(())
}

#[rstest]
fn context_menus_of_excluded_nodes_are_still_translated(
    store: RecordingStore<Catalog>,
) -> Result<()> {
    let mut image = Widget::image().with_context_menu([MenuEntry::new("Copy")]);
    Translator::new(&store).translate(&mut image)?;
    ensure!(keys(&store) == vec![key("Copy")]);
    Ok(())
}

#[rstest]
fn nested_windows_resolve_title_and_content(store: RecordingStore<Catalog>) -> Result<()> {
    let mut panel = Widget::stack_panel([Widget::window(
        "Greeting",
        Some(Widget::text_block("Edit").named("body")),
    )
    .named("child")]);
    Translator::new(&store).translate(&mut panel)?;
    ensure!(panel.text_of("child") == Some("Hi"));
    ensure!(panel.text_of("body") == Some("Edit"));
    Ok(())
}

#[rstest]
fn text_inputs_only_translate_a_bound_label(store: RecordingStore<Catalog>) -> Result<()> {
    let mut plain = Widget::text_box("Greeting");
    let mut ribbon = Widget::ribbon_text_box(Some("Search"), "Greeting");
    let mut unlabelled = Widget::ribbon_text_box(None, "Greeting");
    let translator = Translator::new(&store);
    translator.translate(&mut plain)?;
    translator.translate(&mut unlabelled)?;
    ensure!(store.count() == 0);
    translator.translate(&mut ribbon)?;
    ensure!(plain.value() == "Greeting");
    ensure!(ribbon.value() == "Greeting");
    ensure!(ribbon.text() == Some("Search"));
    ensure!(ribbon.key_tip() == Some('S'));
    Ok(())
}

#[rstest]
fn ribbon_buttons_without_label_are_skipped(store: RecordingStore<Catalog>) -> Result<()> {
    let mut button = Widget::ribbon_button(None);
    Translator::new(&store).translate(&mut button)?;
    ensure!(store.count() == 0);
    Ok(())
}

#[rstest]
fn empty_text_blocks_are_skipped(store: RecordingStore<Catalog>) -> Result<()> {
    let mut text = Widget::text_block("");
    Translator::new(&store).translate(&mut text)?;
    ensure!(store.count() == 0);
    Ok(())
}

#[rstest]
fn marked_text_display_only_translates_marked_text(
    store: RecordingStore<Catalog>,
) -> Result<()> {
    let options = TranslateOptions::with_key_policy(KeyPolicy::marked_text_display());
    let mut panel = Widget::stack_panel([
        Widget::text_block("Greeting").named("free"),
        Widget::text_block("$Greeting").named("marked"),
        Widget::label(Some("Greeting")).named("label"),
    ]);
    Translator::with_options(&store, options).translate(&mut panel)?;
    ensure!(panel.text_of("free") == Some("Greeting"));
    ensure!(panel.text_of("marked") == Some("Hi"));
    ensure!(panel.text_of("label") == Some("Hi"));
    ensure!(keys(&store) == vec![key("Greeting"), key("Greeting")]);
    Ok(())
}

#[rstest]
fn marked_only_everywhere_leaves_plain_text(store: RecordingStore<Catalog>) -> Result<()> {
    let options = TranslateOptions::with_key_policy(KeyPolicy::uniform(KeySource::MarkedOnly));
    let mut panel = Widget::stack_panel([
        Widget::button("Paste").named("plain"),
        Widget::button("$Paste").named("marked"),
        Widget::ribbon_button(Some("Open")).named("ribbon"),
    ]);
    Translator::with_options(&store, options).translate(&mut panel)?;
    ensure!(panel.text_of("plain") == Some("Paste"));
    ensure!(panel.find("plain").and_then(Widget::tooltip).is_none());
    ensure!(panel.text_of("marked") == Some("Paste"));
    ensure!(
        panel.find("marked").and_then(Widget::tooltip) == Some("Paste from the clipboard")
    );
    ensure!(panel.text_of("ribbon") == Some("Open"));
    ensure!(panel.find("ribbon").and_then(Widget::key_tip).is_none());
    ensure!(keys(&store) == vec![key("Paste")]);
    Ok(())
}

/// A node that claims a shape but will not lend it.
struct Stubborn;

impl Element for Stubborn {
    fn type_name(&self) -> &'static str {
        "Stubborn"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::TEXT_DISPLAY
    }

    fn shape(&mut self, _rule: Rule) -> Option<Shape<'_>> {
        None
    }
}

/// A node whose shape does not match its capabilities.
struct Mismatched(String);

impl Element for Mismatched {
    fn type_name(&self) -> &'static str {
        "Mismatched"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::PANEL
    }

    fn shape(&mut self, _rule: Rule) -> Option<Shape<'_>> {
        Some(Shape::TextDisplay(&mut self.0))
    }
}

#[rstest]
fn nodes_without_a_matching_shape_are_unsupported(store: RecordingStore<Catalog>) {
    let translator = Translator::new(&store);
    let err = translator
        .translate(&mut Stubborn)
        .expect_err("no shape is lent");
    assert_eq!(err.unsupported_type(), Some("Stubborn"));

    let mut mismatched = Mismatched("Greeting".to_owned());
    let err = translator
        .translate(&mut mismatched)
        .expect_err("shape disagrees with capabilities");
    assert!(matches!(err, TranslateError::UnsupportedNodeType { type_name: "Mismatched", .. }));
    assert_eq!(mismatched.0, "Greeting");
    assert_eq!(store.count(), 0);
}
