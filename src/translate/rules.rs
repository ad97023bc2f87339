//! Slot rules: how one slot, or one small group of slots, is rewritten.
//!
//! Every rule computes all of its output text before writing anything, so a
//! failed lookup or interpolation leaves that node's slots untouched.

use tracing::{debug, trace};

use super::Translator;
use super::options::SlotKind;
use crate::node::{
    Content, ContentView, Element, HeaderSlot, LabelSlots, MenuItemSlots, OptionalText,
};
use crate::strings::{StringCollection, StringError, StringKind, StringStore, TranslationKey};

/// Variables used by implicit-key passes.
pub(super) const NO_VARIABLES: &[&str] = &[];

/// Name reported in diagnostics for the default bundle.
const PLACEHOLDER_NAME: &str = "(placeholder)";

/// A looked-up bundle with its label already interpreted.
struct Resolved {
    bundle: StringCollection,
    text: String,
    hotkey: Option<char>,
}

impl Resolved {
    fn tooltip<V: AsRef<str>>(&self, variables: &[V]) -> Result<Option<String>, StringError> {
        self.bundle.interpret_optional(StringKind::ToolTip, variables)
    }
}

impl<S: StringStore + ?Sized> Translator<'_, S> {
    /// Turn slot text into a key when the policy for `slot` admits it.
    fn derive<'k>(&self, slot: SlotKind, text: &'k str) -> Option<TranslationKey<'k>> {
        let key = TranslationKey::from_text(text);
        if self
            .options
            .key_policy
            .for_slot(slot)
            .admits(key.is_explicit())
        {
            Some(key)
        } else {
            debug!(?slot, text, "slot text is not a key under the current policy");
            None
        }
    }

    /// Look `key` up, or the default bundle for `None`, and interpret its
    /// label.
    fn resolve<V: AsRef<str>>(
        &self,
        key: Option<TranslationKey<'_>>,
        variables: &[V],
    ) -> Result<Resolved, StringError> {
        let bundle = self.store.resolve(key.map(TranslationKey::name))?;
        let name = key.map_or(PLACEHOLDER_NAME, TranslationKey::name);
        let label = bundle.require(StringKind::Label, name)?;
        let text = label.interpret(variables)?;
        let hotkey = label.hotkey();
        Ok(Resolved {
            bundle,
            text,
            hotkey,
        })
    }

    /// Ribbon-style label, tooltip and key tip.
    ///
    /// An absent label is skipped unless `explicit` names the key.
    pub(super) fn label_rule<V: AsRef<str>>(
        &self,
        slots: LabelSlots<'_>,
        explicit: Option<TranslationKey<'_>>,
        variables: &[V],
    ) -> Result<(), StringError> {
        let LabelSlots {
            label,
            tooltip,
            key_tip,
        } = slots;
        let key = match explicit {
            Some(key) => key,
            None => match label
                .as_deref()
                .and_then(|text| self.derive(SlotKind::Label, text))
            {
                Some(key) => key,
                None => return Ok(()),
            },
        };
        let resolved = self.resolve(Some(key), variables)?;
        let tip = resolved.tooltip(variables)?;
        trace!(slot = "label", key = key.name(), "writing label");
        if let (Some(target), Some(hotkey)) = (key_tip, resolved.hotkey) {
            *target = Some(hotkey);
        }
        *label = Some(resolved.text);
        if tip.is_some() {
            *tooltip = tip;
        }
        Ok(())
    }

    /// Menu entry header and tooltip. Never takes variables or an
    /// accelerator.
    pub(super) fn menu_item_rule(&self, slots: MenuItemSlots<'_>) -> Result<(), StringError> {
        let MenuItemSlots { header, tooltip } = slots;
        let Some(key) = header
            .as_deref()
            .filter(|text| !text.is_empty())
            .and_then(|text| self.derive(SlotKind::Header, text))
        else {
            return Ok(());
        };
        let resolved = self.resolve(Some(key), NO_VARIABLES)?;
        let tip = resolved.tooltip(NO_VARIABLES)?;
        trace!(slot = "menu-item", key = key.name(), "writing header");
        *header = Some(resolved.text);
        if tip.is_some() {
            *tooltip = tip;
        }
        Ok(())
    }

    /// Header of an items holder. A missing generic or tab header is
    /// replaced by the default bundle's label.
    pub(super) fn items_header_rule(&self, slot: HeaderSlot<'_>) -> Result<(), StringError> {
        match slot {
            HeaderSlot::MenuItem(slots) => self.menu_item_rule(slots),
            HeaderSlot::Plain(header) => self.placeholder_or_lookup(header),
            HeaderSlot::Tab { header, key_tip } => {
                if header.is_none() {
                    return self.placeholder_or_lookup(header);
                }
                let Some(key) = header
                    .as_deref()
                    .and_then(|text| self.derive(SlotKind::Header, text))
                else {
                    return Ok(());
                };
                let resolved = self.resolve(Some(key), NO_VARIABLES)?;
                trace!(slot = "tab-header", key = key.name(), "writing header");
                if let Some(hotkey) = resolved.hotkey {
                    *key_tip = Some(hotkey);
                }
                *header = Some(resolved.text);
                Ok(())
            }
        }
    }

    /// Column header, or any header whose absence means "use the default
    /// bundle".
    pub(super) fn placeholder_or_lookup(&self, header: OptionalText<'_>) -> Result<(), StringError> {
        let key = match header.as_deref() {
            None => None,
            Some(text) => match self.derive(SlotKind::Header, text) {
                Some(key) => Some(key),
                None => return Ok(()),
            },
        };
        let resolved = self.resolve(key, NO_VARIABLES)?;
        trace!(
            slot = "header",
            key = key.map_or(PLACEHOLDER_NAME, TranslationKey::name),
            "writing header"
        );
        *header = Some(resolved.text);
        Ok(())
    }

    /// Header of a headered content holder. An absent header is skipped
    /// unless `explicit` names the key.
    pub(super) fn header_rule<V: AsRef<str>>(
        &self,
        header: OptionalText<'_>,
        explicit: Option<TranslationKey<'_>>,
        variables: &[V],
    ) -> Result<(), StringError> {
        let key = match explicit {
            Some(key) => key,
            None => match header
                .as_deref()
                .and_then(|text| self.derive(SlotKind::Header, text))
            {
                Some(key) => key,
                None => return Ok(()),
            },
        };
        let resolved = self.resolve(Some(key), variables)?;
        trace!(slot = "header", key = key.name(), "writing header");
        *header = Some(resolved.text);
        Ok(())
    }

    /// Text content of a content holder, plus the tooltip when the view
    /// exposes one. Node content is handed back to the caller for
    /// recursion.
    pub(super) fn content_rule<'v, V: AsRef<str>>(
        &self,
        view: ContentView<'v>,
        explicit: Option<TranslationKey<'_>>,
        variables: &[V],
    ) -> Result<Option<&'v mut dyn Element>, StringError> {
        let ContentView { content, tooltip } = view;
        let text = match content {
            Content::Node(child) => return Ok(Some(child)),
            Content::Text(text) => text,
        };
        let key = match explicit {
            Some(key) => key,
            None => match text
                .as_deref()
                .and_then(|current| self.derive(SlotKind::Content, current))
            {
                Some(key) => key,
                None => return Ok(None),
            },
        };
        let resolved = self.resolve(Some(key), variables)?;
        let tip = if tooltip.is_some() {
            resolved.tooltip(variables)?
        } else {
            None
        };
        trace!(slot = "content", key = key.name(), "writing content");
        *text = Some(resolved.text);
        if let (Some(target), Some(tip)) = (tooltip, tip) {
            *target = Some(tip);
        }
        Ok(None)
    }

    /// A required text slot: text-display leaves and window titles. An
    /// empty slot is skipped unless `explicit` names the key.
    pub(super) fn text_rule<V: AsRef<str>>(
        &self,
        slot: SlotKind,
        target: &mut String,
        explicit: Option<TranslationKey<'_>>,
        variables: &[V],
    ) -> Result<(), StringError> {
        let key = match explicit {
            Some(key) => key,
            None if target.is_empty() => return Ok(()),
            None => match self.derive(slot, target) {
                Some(key) => key,
                None => return Ok(()),
            },
        };
        let resolved = self.resolve(Some(key), variables)?;
        trace!(?slot, key = key.name(), "writing text");
        *target = resolved.text;
        Ok(())
    }
}
