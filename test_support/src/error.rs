//! Flattening error chains for assertions.

use std::error::Error;

/// Render an error followed by each of its sources, joined by `": "`.
///
/// Fluent isolates are stripped so assertions can compare plain text.
pub fn display_error_chain(error: &(dyn Error + 'static)) -> String {
    std::iter::successors(Some(error), |current| (*current).source())
        .map(|link| crate::fluent::rendered(&link))
        .collect::<Vec<_>>()
        .join(": ")
}
