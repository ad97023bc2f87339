//! Fluent message identifiers used by relabel diagnostics.
//!
//! The build script audits this list against `locales/*/messages.ftl`, so
//! every entry needs a message in each bundle and vice versa.

macro_rules! define_keys {
    ($($(#[$meta:meta])* $name:ident => $value:literal,)+) => {
        $(
            $(#[$meta])*
            pub const $name: &str = $value;
        )+

        /// Every declared key, in declaration order.
        pub const ALL_KEYS: &[&str] = &[$($name),+];
    };
}

define_keys! {
    /// A key was not present in the string store.
    STRINGS_KEY_NOT_FOUND => "relabel-strings-key-not-found",
    /// Hint attached to missing-key diagnostics.
    STRINGS_KEY_NOT_FOUND_HELP => "relabel-strings-key-not-found-help",
    /// A bundle lacked the requested slot.
    STRINGS_MISSING_SLOT => "relabel-strings-missing-slot",
    /// A template received too few variables.
    STRINGS_INTERPOLATION_ARITY => "relabel-strings-interpolation-arity",
    /// A template failed to parse.
    STRINGS_INVALID_TEMPLATE => "relabel-strings-invalid-template",
    /// Placeholder opened but never closed.
    TEMPLATE_FAULT_UNTERMINATED => "relabel-template-fault-unterminated",
    /// Placeholder with no index.
    TEMPLATE_FAULT_EMPTY => "relabel-template-fault-empty",
    /// Placeholder index that is not a number.
    TEMPLATE_FAULT_NON_NUMERIC => "relabel-template-fault-non-numeric",
    /// Placeholder index too large to count variables for.
    TEMPLATE_FAULT_INDEX_TOO_LARGE => "relabel-template-fault-index-too-large",
    /// Closing brace without an opening brace.
    TEMPLATE_FAULT_UNMATCHED_CLOSE => "relabel-template-fault-unmatched-close",
    /// Traversal reached a node shape with no rule.
    TRANSLATE_UNSUPPORTED_NODE => "relabel-translate-unsupported-node",
    /// Hint attached to unsupported-node diagnostics.
    TRANSLATE_UNSUPPORTED_NODE_HELP => "relabel-translate-unsupported-node-help",
    /// An explicit key targeted a shape that cannot take one.
    TRANSLATE_EXPLICIT_UNSUPPORTED => "relabel-translate-explicit-unsupported",
}
