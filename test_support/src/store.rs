//! A string store wrapper that records every lookup.

use std::cell::RefCell;

use relabel::strings::{StringCollection, StringError, StringStore};

/// Forwards to an inner store and remembers the keys it was asked for.
#[derive(Debug)]
pub struct RecordingStore<S> {
    inner: S,
    lookups: RefCell<Vec<Option<String>>>,
}

impl<S: StringStore> RecordingStore<S> {
    /// Wrap `inner`.
    pub const fn new(inner: S) -> Self {
        Self {
            inner,
            lookups: RefCell::new(Vec::new()),
        }
    }

    /// Keys requested so far, `None` standing for the default bundle.
    pub fn lookups(&self) -> Vec<Option<String>> {
        self.lookups.borrow().clone()
    }

    /// Number of lookups so far.
    pub fn count(&self) -> usize {
        self.lookups.borrow().len()
    }

    /// Forget recorded lookups.
    pub fn clear(&self) {
        self.lookups.borrow_mut().clear();
    }
}

impl<S: StringStore> StringStore for RecordingStore<S> {
    fn resolve(&self, key: Option<&str>) -> Result<StringCollection, StringError> {
        self.lookups.borrow_mut().push(key.map(str::to_owned));
        self.inner.resolve(key)
    }
}
