//! The interface between the dispatch engine and a host widget tree.
//!
//! The host toolkit owns every node. It implements [`Element`] for its
//! widget handles: each node reports its [`Capabilities`], and when asked
//! for the [`Rule`] those capabilities classify to, lends out a [`Shape`]
//! borrowing exactly the slots and children that rule touches. The engine
//! never creates, removes, or reorders nodes.
//!
//! # Examples
//!
//! ```
//! use relabel::node::{Capabilities, Element, Rule, Shape};
//!
//! struct Caption {
//!     text: String,
//! }
//!
//! impl Element for Caption {
//!     fn type_name(&self) -> &'static str {
//!         "Caption"
//!     }
//!
//!     fn capabilities(&self) -> Capabilities {
//!         Capabilities::TEXT_DISPLAY
//!     }
//!
//!     fn shape(&mut self, rule: Rule) -> Option<Shape<'_>> {
//!         match rule {
//!             Rule::TextDisplay => Some(Shape::TextDisplay(&mut self.text)),
//!             _ => None,
//!         }
//!     }
//! }
//! ```

mod capability;
mod shape;

pub use capability::{Capabilities, Rule, classify};
pub use shape::{
    Content, ContentView, HeaderSlot, HeaderedContentView, Item, ItemsView, LabelSlots,
    MenuItemSlots, OptionalText, Shape, WindowView,
};

/// A node of the host widget tree.
pub trait Element {
    /// Concrete toolkit type name, reported when no rule applies.
    fn type_name(&self) -> &'static str;

    /// Capability tags used to select the dispatch rule.
    fn capabilities(&self) -> Capabilities;

    /// Lend the view for `rule`.
    ///
    /// The engine only asks for the rule [`classify`] returns for this
    /// node's capabilities. Returning `None`, or a shape of another rule,
    /// makes the node unsupported.
    fn shape(&mut self, rule: Rule) -> Option<Shape<'_>>;

    /// Entries of the attached context menu.
    fn context_menu(&mut self) -> Vec<MenuItemSlots<'_>> {
        Vec::new()
    }
}
