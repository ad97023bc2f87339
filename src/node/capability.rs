//! Capability tags and the classification cascade.
//!
//! Node shapes overlap: a menu item is an items holder *and* headered, a
//! ribbon check box is labelled *and* a content holder. [`classify`] resolves
//! the overlap by checking rules in a fixed order and taking the first match.

bitflags::bitflags! {
    /// Capability tags a node reports about itself.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Capabilities: u32 {
        /// Carries no translatable text; never descended.
        const EXCLUDED        = 1 << 0;
        /// Editable text input whose content is never translated.
        const TEXT_INPUT      = 1 << 1;
        /// Generic list of items.
        const ITEMS           = 1 << 2;
        /// Has a header slot.
        const HEADERED        = 1 << 3;
        /// Holds an ordered list of child nodes.
        const PANEL           = 1 << 4;
        /// Status bar container.
        const STATUS_BAR      = 1 << 5;
        /// Wrapper around a single status bar entry.
        const STATUS_BAR_ITEM = 1 << 6;
        /// Tab strip container.
        const TAB_STRIP       = 1 << 7;
        /// Tabular view with column headers.
        const COLUMNS         = 1 << 8;
        /// Can own a context menu.
        const CONTEXT_MENU    = 1 << 9;
        /// Menu entry; headers go through the menu-item rule.
        const MENU_ITEM       = 1 << 10;
        /// Ribbon-style label with tooltip and key tip.
        const LABELLED        = 1 << 11;
        /// Holds a single content value.
        const CONTENT         = 1 << 12;
        /// Read-only text display.
        const TEXT_DISPLAY    = 1 << 13;
        /// Wraps exactly one child without text of its own.
        const DECORATOR       = 1 << 14;
        /// User-defined composite delegating to its content.
        const COMPOSITE       = 1 << 15;
        /// Top-level window with a title.
        const WINDOW          = 1 << 16;
    }
}

/// The dispatch rule selected for a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// No slots; recursion stops.
    Excluded,
    /// Text input; only a bound label is translated.
    TextInput,
    /// Items holder, optionally headered, with columns or a label.
    Items,
    /// Recurse into every child.
    Panel,
    /// Recurse into every status bar entry.
    StatusBar,
    /// Recurse into the single wrapped entry.
    StatusBarItem,
    /// Recurse into every tab.
    TabStrip,
    /// Title, then content.
    Window,
    /// Ribbon-style label, tooltip and key tip.
    Labelled,
    /// Header, then the single content child.
    HeaderedContent,
    /// Single content value, with an optional tooltip.
    Content,
    /// Single text slot.
    TextDisplay,
    /// Recurse into the single child.
    Decorator,
    /// Delegate to the content through the content rule.
    Composite,
    /// No rule applies.
    Unsupported,
}

/// Pick the dispatch rule for `caps`.
///
/// The order of the checks is significant and must not change: a node with
/// several tags is handled by the earliest rule that matches.
///
/// # Examples
///
/// ```
/// use relabel::node::{Capabilities, Rule, classify};
///
/// let menu_item = Capabilities::ITEMS | Capabilities::HEADERED | Capabilities::MENU_ITEM;
/// assert_eq!(classify(menu_item), Rule::Items);
/// assert_eq!(classify(Capabilities::EXCLUDED | Capabilities::CONTENT), Rule::Excluded);
/// assert_eq!(classify(Capabilities::CONTEXT_MENU), Rule::Unsupported);
/// ```
#[must_use]
pub fn classify(caps: Capabilities) -> Rule {
    const ORDER: [(Capabilities, Rule); 13] = [
        (Capabilities::EXCLUDED, Rule::Excluded),
        (Capabilities::TEXT_INPUT, Rule::TextInput),
        (Capabilities::ITEMS, Rule::Items),
        (Capabilities::PANEL, Rule::Panel),
        (Capabilities::STATUS_BAR, Rule::StatusBar),
        (Capabilities::STATUS_BAR_ITEM, Rule::StatusBarItem),
        (Capabilities::TAB_STRIP, Rule::TabStrip),
        (Capabilities::WINDOW, Rule::Window),
        (Capabilities::LABELLED, Rule::Labelled),
        (Capabilities::CONTENT, Rule::Content),
        (Capabilities::TEXT_DISPLAY, Rule::TextDisplay),
        (Capabilities::DECORATOR, Rule::Decorator),
        (Capabilities::COMPOSITE, Rule::Composite),
    ];
    ORDER
        .iter()
        .find(|(tag, _)| caps.contains(*tag))
        .map_or(Rule::Unsupported, |(_, rule)| refine(caps, *rule))
}

/// A headered content holder outranks the other content-holder shapes.
fn refine(caps: Capabilities, rule: Rule) -> Rule {
    match rule {
        Rule::Labelled | Rule::Content
            if caps.contains(Capabilities::HEADERED | Capabilities::CONTENT) =>
        {
            Rule::HeaderedContent
        }
        other => other,
    }
}
