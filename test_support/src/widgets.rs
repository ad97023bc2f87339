//! A small reference widget toolkit implementing [`Element`].
//!
//! [`Widget`] models the node types of a desktop toolkit closely enough to
//! exercise every dispatch rule: windows, panels, buttons, ribbons, menus,
//! list views, tabs, status bars, decorators, user controls, excluded leaves,
//! and custom shapes. Each widget has one primary text slot whose meaning
//! depends on the type (title, label, header, content, or text).

use relabel::node::{
    Capabilities, Content, ContentView, Element, HeaderSlot, HeaderedContentView, Item, ItemsView,
    LabelSlots, MenuItemSlots, Rule, Shape, WindowView,
};

type C = Capabilities;

/// One entry of an items holder or panel.
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    /// A nested widget.
    Widget(Widget),
    /// A plain data item, never translated.
    Data(String),
}

impl From<Widget> for Child {
    fn from(widget: Widget) -> Self {
        Self::Widget(widget)
    }
}

/// An entry of a context menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    /// Header text.
    pub header: Option<String>,
    /// Tooltip text.
    pub tooltip: Option<String>,
}

impl MenuEntry {
    /// Entry with the given header and no tooltip.
    pub fn new(header: &str) -> Self {
        Self {
            header: Some(header.to_owned()),
            tooltip: None,
        }
    }
}

/// A reference widget.
#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    type_name: &'static str,
    caps: Capabilities,
    name: Option<String>,
    text: Option<String>,
    tooltip: Option<String>,
    key_tip: Option<char>,
    has_key_tip: bool,
    has_tooltip: bool,
    value: String,
    children: Vec<Child>,
    columns: Option<Vec<Option<String>>>,
    context_menu: Vec<MenuEntry>,
}

impl Widget {
    /// A widget with arbitrary capabilities and no slots filled.
    pub fn custom(type_name: &'static str, caps: Capabilities) -> Self {
        Self {
            type_name,
            caps,
            name: None,
            text: None,
            tooltip: None,
            key_tip: None,
            has_key_tip: false,
            has_tooltip: false,
            value: String::new(),
            children: Vec::new(),
            columns: None,
            context_menu: Vec::new(),
        }
    }

    fn with_text_slot(type_name: &'static str, caps: Capabilities, text: Option<&str>) -> Self {
        Self {
            text: text.map(str::to_owned),
            ..Self::custom(type_name, caps)
        }
    }

    fn containing(mut self, children: impl IntoIterator<Item = Child>) -> Self {
        self.children.extend(children);
        self
    }

    fn key_tipped(mut self) -> Self {
        self.has_key_tip = true;
        self.has_tooltip = true;
        self
    }

    fn tooltipped(mut self) -> Self {
        self.has_tooltip = true;
        self
    }

    /// Top-level window.
    pub fn window(title: &str, content: Option<Self>) -> Self {
        Self::with_text_slot("Window", C::WINDOW | C::CONTENT, Some(title))
            .containing(content.map(Child::from))
    }

    /// Vertical panel.
    pub fn stack_panel(children: impl IntoIterator<Item = Self>) -> Self {
        Self::custom("StackPanel", C::PANEL).containing(children.into_iter().map(Child::from))
    }

    /// Grid panel.
    pub fn grid(children: impl IntoIterator<Item = Self>) -> Self {
        Self::custom("Grid", C::PANEL).containing(children.into_iter().map(Child::from))
    }

    /// Read-only text.
    pub fn text_block(text: &str) -> Self {
        Self::with_text_slot("TextBlock", C::TEXT_DISPLAY, Some(text))
    }

    /// Content holder with text content.
    pub fn label(content: Option<&str>) -> Self {
        Self::with_text_slot("Label", C::CONTENT | C::CONTEXT_MENU, content)
    }

    /// Content holder whose content is a widget.
    pub fn label_with(content: Self) -> Self {
        Self::custom("Label", C::CONTENT | C::CONTEXT_MENU).containing([content.into()])
    }

    /// Button with text content and a tooltip slot.
    pub fn button(content: &str) -> Self {
        Self::with_text_slot("Button", C::CONTENT | C::CONTEXT_MENU, Some(content)).tooltipped()
    }

    /// Button whose content is a widget.
    pub fn button_with(content: Self) -> Self {
        Self::custom("Button", C::CONTENT | C::CONTEXT_MENU)
            .tooltipped()
            .containing([content.into()])
    }

    /// Ribbon button with label, tooltip and key tip.
    pub fn ribbon_button(label: Option<&str>) -> Self {
        Self::with_text_slot("RibbonButton", C::LABELLED | C::CONTENT, label).key_tipped()
    }

    /// Ribbon check box.
    pub fn ribbon_check_box(label: Option<&str>) -> Self {
        Self::with_text_slot("RibbonCheckBox", C::LABELLED | C::CONTENT, label).key_tipped()
    }

    /// Ribbon toggle button.
    pub fn ribbon_toggle_button(label: Option<&str>) -> Self {
        Self::with_text_slot("RibbonToggleButton", C::LABELLED | C::CONTENT, label).key_tipped()
    }

    /// Ribbon menu button: a labelled items holder.
    pub fn ribbon_menu_button(label: Option<&str>, items: impl IntoIterator<Item = Child>) -> Self {
        Self::with_text_slot("RibbonMenuButton", C::ITEMS | C::LABELLED, label)
            .key_tipped()
            .containing(items)
    }

    /// Ribbon text box: a text input with a bound label.
    pub fn ribbon_text_box(label: Option<&str>, value: &str) -> Self {
        Self {
            value: value.to_owned(),
            ..Self::with_text_slot("RibbonTextBox", C::TEXT_INPUT | C::LABELLED, label).key_tipped()
        }
    }

    /// Plain text input.
    pub fn text_box(value: &str) -> Self {
        Self {
            value: value.to_owned(),
            ..Self::custom("TextBox", C::TEXT_INPUT | C::CONTENT)
        }
    }

    /// Menu bar.
    pub fn menu(items: impl IntoIterator<Item = Self>) -> Self {
        Self::custom("Menu", C::ITEMS).containing(items.into_iter().map(Child::from))
    }

    /// Menu entry with optional sub-entries.
    pub fn menu_item(header: Option<&str>, items: impl IntoIterator<Item = Self>) -> Self {
        Self::with_text_slot("MenuItem", C::ITEMS | C::HEADERED | C::MENU_ITEM, header)
            .tooltipped()
            .containing(items.into_iter().map(Child::from))
    }

    /// Headered items holder with a generic header.
    pub fn tree_group(header: Option<&str>, items: impl IntoIterator<Item = Child>) -> Self {
        Self::with_text_slot("HeaderedItemsControl", C::ITEMS | C::HEADERED, header)
            .containing(items)
    }

    /// Ribbon tab whose header accelerator becomes the key tip.
    pub fn ribbon_tab(header: Option<&str>, items: impl IntoIterator<Item = Self>) -> Self {
        let mut tab = Self::with_text_slot("RibbonTab", C::ITEMS | C::HEADERED, header)
            .containing(items.into_iter().map(Child::from));
        tab.has_key_tip = true;
        tab
    }

    /// List box of widgets and data items.
    pub fn list_box(items: impl IntoIterator<Item = Child>) -> Self {
        Self::custom("ListBox", C::ITEMS).containing(items)
    }

    /// Tabular list view. `columns` of `None` means no column definitions.
    pub fn list_view(
        columns: Option<&[Option<&str>]>,
        items: impl IntoIterator<Item = Child>,
    ) -> Self {
        Self {
            columns: columns.map(|headers| {
                headers
                    .iter()
                    .map(|header| header.map(str::to_owned))
                    .collect()
            }),
            ..Self::custom("ListView", C::ITEMS | C::COLUMNS).containing(items)
        }
    }

    /// Tab strip.
    pub fn tab_control(tabs: impl IntoIterator<Item = Self>) -> Self {
        Self::custom("TabControl", C::TAB_STRIP).containing(tabs.into_iter().map(Child::from))
    }

    /// Headered content holder, as used for tabs.
    pub fn tab_item(header: Option<&str>, content: Option<Self>) -> Self {
        Self::with_text_slot("TabItem", C::CONTENT | C::HEADERED, header)
            .containing(content.map(Child::from))
    }

    /// Headered content holder with a frame.
    pub fn group_box(header: Option<&str>, content: Option<Self>) -> Self {
        Self::with_text_slot("GroupBox", C::CONTENT | C::HEADERED, header)
            .containing(content.map(Child::from))
    }

    /// Status bar.
    pub fn status_bar(items: impl IntoIterator<Item = Self>) -> Self {
        Self::custom("StatusBar", C::STATUS_BAR).containing(items.into_iter().map(Child::from))
    }

    /// Status bar entry wrapper.
    pub fn status_bar_item(content: Option<Self>) -> Self {
        Self::custom("StatusBarItem", C::STATUS_BAR_ITEM | C::CONTENT)
            .containing(content.map(Child::from))
    }

    /// Decorator around one child.
    pub fn border(child: Option<Self>) -> Self {
        Self::custom("Border", C::DECORATOR).containing(child.map(Child::from))
    }

    /// User-defined composite control.
    pub fn user_control(content: Option<Self>) -> Self {
        Self::custom("UserControl", C::COMPOSITE).containing(content.map(Child::from))
    }

    /// User-defined composite whose content is plain text.
    pub fn user_control_text(content: &str) -> Self {
        Self::with_text_slot("UserControl", C::COMPOSITE, Some(content))
    }

    /// Excluded leaf such as an image or progress bar.
    pub fn excluded(type_name: &'static str) -> Self {
        Self::custom(type_name, C::EXCLUDED)
    }

    /// Image leaf.
    pub fn image() -> Self {
        Self::excluded("Image")
    }

    /// Name the widget for [`Widget::find`].
    #[must_use]
    pub fn named(mut self, name: &str) -> Self {
        self.name = Some(name.to_owned());
        self
    }

    /// Set the initial tooltip.
    #[must_use]
    pub fn with_tooltip(mut self, tooltip: &str) -> Self {
        self.tooltip = Some(tooltip.to_owned());
        self
    }

    /// Attach a context menu.
    #[must_use]
    pub fn with_context_menu(mut self, entries: impl IntoIterator<Item = MenuEntry>) -> Self {
        self.context_menu.extend(entries);
        self
    }

    /// The primary text slot.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// The tooltip slot.
    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    /// The key tip slot.
    pub const fn key_tip(&self) -> Option<char> {
        self.key_tip
    }

    /// The editable value of a text input.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Column headers of a list view.
    pub fn columns(&self) -> Option<Vec<Option<&str>>> {
        self.columns
            .as_ref()
            .map(|columns| columns.iter().map(Option::as_deref).collect())
    }

    /// Context menu entries.
    pub fn context_menu_entries(&self) -> &[MenuEntry] {
        &self.context_menu
    }

    /// Direct children.
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    /// Depth-first search by name.
    pub fn find(&self, name: &str) -> Option<&Self> {
        if self.name.as_deref() == Some(name) {
            return Some(self);
        }
        self.children.iter().find_map(|child| match child {
            Child::Widget(widget) => widget.find(name),
            Child::Data(_) => None,
        })
    }

    /// Depth-first search by name, mutably.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Self> {
        if self.name.as_deref() == Some(name) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| match child {
            Child::Widget(widget) => widget.find_mut(name),
            Child::Data(_) => None,
        })
    }

    /// Text of the named widget, or `None` when it is absent or empty.
    pub fn text_of(&self, name: &str) -> Option<&str> {
        self.find(name).and_then(Self::text)
    }
}

fn widgets(children: &mut [Child]) -> Vec<&mut dyn Element> {
    children
        .iter_mut()
        .filter_map(|child| match child {
            Child::Widget(widget) => Some(widget as &mut dyn Element),
            Child::Data(_) => None,
        })
        .collect()
}

fn first_widget(children: &mut [Child]) -> Option<&mut dyn Element> {
    widgets(children).into_iter().next()
}

impl Element for Widget {
    fn type_name(&self) -> &'static str {
        self.type_name
    }

    fn capabilities(&self) -> Capabilities {
        self.caps
    }

    fn shape(&mut self, rule: Rule) -> Option<Shape<'_>> {
        let Self {
            caps,
            text,
            tooltip,
            key_tip,
            has_key_tip,
            has_tooltip,
            children,
            columns,
            ..
        } = self;
        let caps = *caps;
        let key_tip = has_key_tip.then_some(key_tip);
        let shape = match rule {
            Rule::Excluded | Rule::Unsupported => return None,
            Rule::TextInput => Shape::TextInput {
                label: caps
                    .contains(C::LABELLED)
                    .then(|| label_slots(text, tooltip, key_tip)),
            },
            Rule::Items => {
                let (header, label) = if caps.contains(C::HEADERED) {
                    (Some(header_slot(caps, text, tooltip, key_tip)), None)
                } else if caps.contains(C::LABELLED) {
                    (None, Some(label_slots(text, tooltip, key_tip)))
                } else {
                    (None, None)
                };
                let items = children
                    .iter_mut()
                    .map(|child| match child {
                        Child::Widget(widget) => Item::Node(widget),
                        Child::Data(_) => Item::Data,
                    })
                    .collect();
                let columns = if caps.contains(C::COLUMNS) {
                    columns.as_mut().map(|headers| headers.iter_mut().collect())
                } else {
                    None
                };
                Shape::Items(ItemsView {
                    items,
                    header,
                    columns,
                    label,
                })
            }
            Rule::Panel => Shape::Panel(widgets(children)),
            Rule::StatusBar => Shape::StatusBar(widgets(children)),
            Rule::TabStrip => Shape::TabStrip(widgets(children)),
            Rule::StatusBarItem => Shape::StatusBarItem(first_widget(children)),
            Rule::Decorator => Shape::Decorator(first_widget(children)),
            Rule::Window => Shape::Window(WindowView {
                title: text.get_or_insert_with(String::new),
                content: first_widget(children),
            }),
            Rule::Labelled => Shape::Labelled(label_slots(text, tooltip, key_tip)),
            Rule::HeaderedContent => Shape::HeaderedContent(HeaderedContentView {
                header: text,
                content: first_widget(children),
            }),
            Rule::Content => Shape::Content(ContentView {
                content: content_of(text, children),
                tooltip: has_tooltip.then_some(tooltip),
            }),
            Rule::TextDisplay => Shape::TextDisplay(text.get_or_insert_with(String::new)),
            Rule::Composite => Shape::Composite(content_of(text, children)),
        };
        Some(shape)
    }

    fn context_menu(&mut self) -> Vec<MenuItemSlots<'_>> {
        self.context_menu
            .iter_mut()
            .map(|entry| MenuItemSlots {
                header: &mut entry.header,
                tooltip: &mut entry.tooltip,
            })
            .collect()
    }
}

const fn label_slots<'a>(
    label: &'a mut Option<String>,
    tooltip: &'a mut Option<String>,
    key_tip: Option<&'a mut Option<char>>,
) -> LabelSlots<'a> {
    LabelSlots {
        label,
        tooltip,
        key_tip,
    }
}

fn header_slot<'a>(
    caps: Capabilities,
    header: &'a mut Option<String>,
    tooltip: &'a mut Option<String>,
    key_tip: Option<&'a mut Option<char>>,
) -> HeaderSlot<'a> {
    if caps.contains(C::MENU_ITEM) {
        return HeaderSlot::MenuItem(MenuItemSlots { header, tooltip });
    }
    match key_tip {
        Some(key_tip) => HeaderSlot::Tab { header, key_tip },
        None => HeaderSlot::Plain(header),
    }
}

fn content_of<'a>(text: &'a mut Option<String>, children: &'a mut [Child]) -> Content<'a> {
    match first_widget(children) {
        Some(child) => Content::Node(child),
        None => Content::Text(text),
    }
}
