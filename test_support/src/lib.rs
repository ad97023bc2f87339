//! Shared fixtures for relabel's integration tests.
//!
//! Provides a reference widget toolkit, recording doubles for the string
//! store and dialog presenter, localiser guards, and assertion helpers for
//! rendered diagnostics.

pub mod catalog;
pub mod error;
pub mod fluent;
pub mod localizer;
pub mod presenter;
pub mod store;
pub mod widgets;

pub use presenter::{DialogCall, RecordingPresenter};
pub use store::RecordingStore;
pub use widgets::{Child, MenuEntry, Widget};
