//! Normalisation of rendered Fluent text for plain assertions.

const FIRST_STRONG_ISOLATE: char = '\u{2068}';
const POP_DIRECTIONAL_ISOLATE: char = '\u{2069}';

/// Strip the bidi isolates Fluent wraps around interpolated values.
///
/// # Examples
///
/// ```
/// use test_support::fluent::normalize_fluent_isolates;
///
/// let raw = "translation key `\u{2068}Open\u{2069}` was not found";
/// assert_eq!(
///     normalize_fluent_isolates(raw),
///     "translation key `Open` was not found"
/// );
/// ```
#[must_use]
pub fn normalize_fluent_isolates(text: &str) -> String {
    text.replace([FIRST_STRONG_ISOLATE, POP_DIRECTIONAL_ISOLATE], "")
}

/// Render `value` and strip isolates in one step.
#[must_use]
pub fn rendered(value: &impl std::fmt::Display) -> String {
    normalize_fluent_isolates(&value.to_string())
}
