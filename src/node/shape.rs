//! Typed views over the slots and children of one node.
//!
//! Each [`Shape`] variant carries write-capable accessors for exactly the
//! slots that shape owns, so the engine cannot write a slot a node does not
//! have.

use super::{Element, Rule};

/// A mutable text slot that may be empty.
pub type OptionalText<'a> = &'a mut Option<String>;

/// Slots of a ribbon-style labelled node.
#[derive(Debug)]
pub struct LabelSlots<'a> {
    /// Display label; `None` means the node has nothing to translate.
    pub label: OptionalText<'a>,
    /// Tooltip, overwritten only when the bundle has one.
    pub tooltip: OptionalText<'a>,
    /// Accelerator target. Nodes without a key tip leave this `None` and
    /// never receive the hotkey.
    pub key_tip: Option<&'a mut Option<char>>,
}

/// Slots of a menu entry: header and tooltip, no accelerator.
#[derive(Debug)]
pub struct MenuItemSlots<'a> {
    /// Header text; empty or absent headers are left alone.
    pub header: OptionalText<'a>,
    /// Tooltip, overwritten only when the bundle has one.
    pub tooltip: OptionalText<'a>,
}

/// The header of an items holder.
#[derive(Debug)]
pub enum HeaderSlot<'a> {
    /// Generic header.
    Plain(OptionalText<'a>),
    /// Header of a menu item, resolved through the menu-item rule.
    MenuItem(MenuItemSlots<'a>),
    /// Header of a ribbon tab, whose accelerator feeds the key tip.
    Tab {
        /// Header text.
        header: OptionalText<'a>,
        /// Accelerator target.
        key_tip: &'a mut Option<char>,
    },
}

/// One entry of an items holder.
pub enum Item<'a> {
    /// The entry is itself a node and is translated recursively.
    Node(&'a mut dyn Element),
    /// The entry is plain data and is skipped.
    Data,
}

/// An items holder.
pub struct ItemsView<'a> {
    /// Entries in enumeration order.
    pub items: Vec<Item<'a>>,
    /// Header, for headered items holders.
    pub header: Option<HeaderSlot<'a>>,
    /// Column headers of a tabular view; `None` when there are no column
    /// definitions at all.
    pub columns: Option<Vec<OptionalText<'a>>>,
    /// Ribbon-style label, for menu buttons.
    pub label: Option<LabelSlots<'a>>,
}

/// The content value of a content holder.
pub enum Content<'a> {
    /// Text content; `None` is empty content.
    Text(OptionalText<'a>),
    /// Content that is itself a node.
    Node(&'a mut dyn Element),
}

/// A content holder.
pub struct ContentView<'a> {
    /// The single content value.
    pub content: Content<'a>,
    /// Tooltip resolved from the same bundle as the content, for buttons.
    pub tooltip: Option<OptionalText<'a>>,
}

/// A headered content holder.
pub struct HeaderedContentView<'a> {
    /// Header text; absent headers are skipped.
    pub header: OptionalText<'a>,
    /// Content child.
    pub content: Option<&'a mut dyn Element>,
}

/// A window.
pub struct WindowView<'a> {
    /// Window title.
    pub title: &'a mut String,
    /// Root content node.
    pub content: Option<&'a mut dyn Element>,
}

/// The typed view a node exposes for its dispatch [`Rule`].
pub enum Shape<'a> {
    /// See [`Rule::TextInput`].
    TextInput {
        /// Bound label, if the input has one.
        label: Option<LabelSlots<'a>>,
    },
    /// See [`Rule::Items`].
    Items(ItemsView<'a>),
    /// See [`Rule::Panel`].
    Panel(Vec<&'a mut dyn Element>),
    /// See [`Rule::StatusBar`].
    StatusBar(Vec<&'a mut dyn Element>),
    /// See [`Rule::StatusBarItem`].
    StatusBarItem(Option<&'a mut dyn Element>),
    /// See [`Rule::TabStrip`].
    TabStrip(Vec<&'a mut dyn Element>),
    /// See [`Rule::Window`].
    Window(WindowView<'a>),
    /// See [`Rule::Labelled`].
    Labelled(LabelSlots<'a>),
    /// See [`Rule::HeaderedContent`].
    HeaderedContent(HeaderedContentView<'a>),
    /// See [`Rule::Content`].
    Content(ContentView<'a>),
    /// See [`Rule::TextDisplay`].
    TextDisplay(&'a mut String),
    /// See [`Rule::Decorator`].
    Decorator(Option<&'a mut dyn Element>),
    /// See [`Rule::Composite`].
    Composite(Content<'a>),
}

impl Shape<'_> {
    /// The rule this view belongs to.
    #[must_use]
    pub const fn rule(&self) -> Rule {
        match self {
            Self::TextInput { .. } => Rule::TextInput,
            Self::Items(_) => Rule::Items,
            Self::Panel(_) => Rule::Panel,
            Self::StatusBar(_) => Rule::StatusBar,
            Self::StatusBarItem(_) => Rule::StatusBarItem,
            Self::TabStrip(_) => Rule::TabStrip,
            Self::Window(_) => Rule::Window,
            Self::Labelled(_) => Rule::Labelled,
            Self::HeaderedContent(_) => Rule::HeaderedContent,
            Self::Content(_) => Rule::Content,
            Self::TextDisplay(_) => Rule::TextDisplay,
            Self::Decorator(_) => Rule::Decorator,
            Self::Composite(_) => Rule::Composite,
        }
    }
}
