//! Tree dispatch engine.
//!
//! A [`Translator`] walks a host widget tree depth-first, asks each node for
//! its [`Capabilities`](crate::node::Capabilities), picks the first matching
//! [`Rule`] with [`classify`], and rewrites the slots that rule owns from the
//! [`StringStore`].
//!
//! Implicit passes use each slot's current text as its key and interpolate
//! no variables. [`Translator::translate_one`] instead applies one node's
//! rule with an explicit key and caller-supplied variables, without
//! recursing.
//!
//! Errors abort the pass. Slots written before the failure keep their new
//! text; there is no rollback.

mod error;
mod options;
mod rules;

pub use error::TranslateError;
pub use options::{KeyPolicy, KeySource, SlotKind, TranslateOptions};

use tracing::{debug, debug_span, trace};

use crate::node::{
    ContentView, Element, HeaderedContentView, Item, ItemsView, Rule, Shape, WindowView, classify,
};
use crate::strings::{StringStore, TranslationKey};
use rules::NO_VARIABLES;

/// Rewrites the display text of widget trees from a [`StringStore`].
///
/// # Examples
///
/// ```
/// use relabel::node::{Capabilities, Element, Rule, Shape};
/// use relabel::strings::Catalog;
/// use relabel::translate::Translator;
///
/// struct Caption(String);
///
/// impl Element for Caption {
///     fn type_name(&self) -> &'static str {
///         "Caption"
///     }
///     fn capabilities(&self) -> Capabilities {
///         Capabilities::TEXT_DISPLAY
///     }
///     fn shape(&mut self, rule: Rule) -> Option<Shape<'_>> {
///         (rule == Rule::TextDisplay).then(|| Shape::TextDisplay(&mut self.0))
///     }
/// }
///
/// let catalog = Catalog::builder().label("Greeting", "Hola")?.build();
/// let mut caption = Caption("Greeting".to_owned());
/// Translator::new(&catalog).translate(&mut caption)?;
/// assert_eq!(caption.0, "Hola");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Translator<'s, S: StringStore + ?Sized> {
    store: &'s S,
    options: TranslateOptions,
}

impl<'s, S: StringStore + ?Sized> Translator<'s, S> {
    /// Create a translator with default options.
    #[must_use]
    pub fn new(store: &'s S) -> Self {
        Self::with_options(store, TranslateOptions::default())
    }

    /// Create a translator with explicit options.
    #[must_use]
    pub const fn with_options(store: &'s S, options: TranslateOptions) -> Self {
        Self { store, options }
    }

    /// Options in effect.
    #[must_use]
    pub const fn options(&self) -> &TranslateOptions {
        &self.options
    }

    /// The backing store.
    #[must_use]
    pub const fn store(&self) -> &'s S {
        self.store
    }

    /// Translate a window: its title, then its content subtree.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError`] on the first failed lookup, interpolation,
    /// or unsupported node.
    pub fn translate_window(&self, window: &mut dyn Element) -> Result<(), TranslateError> {
        self.translate_window_with::<&str>(window, &[])
    }

    /// Translate a window, interpolating `variables` into its title.
    ///
    /// Content below the window is translated with implicit keys. A node
    /// that is not a window is translated as any other root.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError`] on the first failed lookup, interpolation,
    /// or unsupported node.
    pub fn translate_window_with<V: AsRef<str>>(
        &self,
        window: &mut dyn Element,
        variables: &[V],
    ) -> Result<(), TranslateError> {
        let _span = debug_span!("translate_window", root = window.type_name()).entered();
        if classify(window.capabilities()) != Rule::Window {
            return self.visit(window);
        }
        self.visit_contextual(window, variables)
    }

    /// Translate `node` and its whole subtree with implicit keys.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError`] on the first failed lookup, interpolation,
    /// or unsupported node. Later siblings are left untouched.
    pub fn translate(&self, node: &mut dyn Element) -> Result<(), TranslateError> {
        let _span = debug_span!("translate", root = node.type_name()).entered();
        self.visit(node)
    }

    /// Apply the rule for `node`'s shape once, with an explicit key.
    ///
    /// A leading `$` on `key` is accepted and ignored. The node's children
    /// are never visited. Excluded shapes are a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::UnsupportedNodeType`] for shapes that cannot
    /// take an explicit key, and [`TranslateError::Strings`] when the lookup
    /// or interpolation fails.
    pub fn translate_one<V: AsRef<str>>(
        &self,
        node: &mut dyn Element,
        key: &str,
        variables: &[V],
    ) -> Result<(), TranslateError> {
        let type_name = node.type_name();
        let explicit_key = TranslationKey::explicit(key);
        let _span =
            debug_span!("translate_one", node = type_name, key = explicit_key.name()).entered();
        let rule = classify(node.capabilities());
        match rule {
            Rule::Excluded => return Ok(()),
            Rule::Unsupported => return Err(TranslateError::unsupported(type_name)),
            _ => {}
        }
        let shape = node
            .shape(rule)
            .filter(|shape| shape.rule() == rule)
            .ok_or_else(|| TranslateError::unsupported(type_name))?;
        let explicit = Some(explicit_key);
        match shape {
            Shape::TextInput { label } => {
                if let Some(slots) = label {
                    self.label_rule(slots, explicit, variables)?;
                }
            }
            Shape::Labelled(slots) => self.label_rule(slots, explicit, variables)?,
            Shape::TextDisplay(text) => {
                self.text_rule(SlotKind::Text, text, explicit, variables)?;
            }
            Shape::Window(WindowView { title, .. }) => {
                self.text_rule(SlotKind::Title, title, explicit, variables)?;
            }
            Shape::HeaderedContent(HeaderedContentView { header, .. }) => {
                self.header_rule(header, explicit, variables)?;
            }
            Shape::Content(view) => {
                if self.content_rule(view, explicit, variables)?.is_some() {
                    return Err(TranslateError::explicit_unsupported(type_name));
                }
            }
            Shape::Items(_)
            | Shape::Panel(_)
            | Shape::StatusBar(_)
            | Shape::StatusBarItem(_)
            | Shape::TabStrip(_)
            | Shape::Decorator(_)
            | Shape::Composite(_) => return Err(TranslateError::explicit_unsupported(type_name)),
        }
        Ok(())
    }

    fn visit(&self, node: &mut dyn Element) -> Result<(), TranslateError> {
        self.visit_contextual::<&str>(node, NO_VARIABLES)
    }

    /// Visit one node. `title_variables` only reach a window title.
    fn visit_contextual<V: AsRef<str>>(
        &self,
        node: &mut dyn Element,
        title_variables: &[V],
    ) -> Result<(), TranslateError> {
        for entry in node.context_menu() {
            self.menu_item_rule(entry)?;
        }

        let type_name = node.type_name();
        let rule = classify(node.capabilities());
        trace!(node = type_name, ?rule, "dispatching");
        match rule {
            Rule::Excluded => {
                debug!(node = type_name, "excluded shape; not descending");
                return Ok(());
            }
            Rule::Unsupported => return Err(TranslateError::unsupported(type_name)),
            _ => {}
        }
        let Some(shape) = node.shape(rule).filter(|shape| shape.rule() == rule) else {
            return Err(TranslateError::unsupported(type_name));
        };

        match shape {
            Shape::TextInput { label } => {
                if let Some(slots) = label {
                    self.label_rule(slots, None, NO_VARIABLES)?;
                }
            }
            Shape::Items(view) => self.items(view)?,
            Shape::Panel(children) | Shape::StatusBar(children) | Shape::TabStrip(children) => {
                for child in children {
                    self.visit(child)?;
                }
            }
            Shape::StatusBarItem(child) | Shape::Decorator(child) => {
                if let Some(nested) = child {
                    self.visit(nested)?;
                }
            }
            Shape::Window(WindowView { title, content }) => {
                self.text_rule(SlotKind::Title, title, None, title_variables)?;
                if let Some(body) = content {
                    self.visit(body)?;
                }
            }
            Shape::Labelled(slots) => self.label_rule(slots, None, NO_VARIABLES)?,
            Shape::HeaderedContent(HeaderedContentView { header, content }) => {
                self.header_rule(header, None, NO_VARIABLES)?;
                if let Some(body) = content {
                    self.visit(body)?;
                }
            }
            Shape::Content(view) => self.content(view)?,
            Shape::TextDisplay(text) => self.text_rule(SlotKind::Text, text, None, NO_VARIABLES)?,
            Shape::Composite(content) => self.content(ContentView {
                content,
                tooltip: None,
            })?,
        }
        Ok(())
    }

    fn items(&self, view: ItemsView<'_>) -> Result<(), TranslateError> {
        let ItemsView {
            items,
            header,
            columns,
            label,
        } = view;
        for item in items {
            match item {
                Item::Node(child) => self.visit(child)?,
                Item::Data => trace!("skipping data item"),
            }
        }
        if let Some(slot) = header {
            self.items_header_rule(slot)?;
        }
        for column in columns.into_iter().flatten() {
            self.placeholder_or_lookup(column)?;
        }
        if let Some(slots) = label {
            self.label_rule(slots, None, NO_VARIABLES)?;
        }
        Ok(())
    }

    fn content(&self, view: ContentView<'_>) -> Result<(), TranslateError> {
        if let Some(child) = self.content_rule(view, None, NO_VARIABLES)? {
            self.visit(child)?;
        }
        Ok(())
    }
}
