//! A dialog presenter that records what it was asked to show.

use std::error::Error;

use relabel::dialog::{DialogPresenter, DialogText};

/// One call to the presenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogCall {
    /// A question was asked.
    Question(DialogText),
    /// A warning was shown.
    Warning(DialogText),
    /// An error was shown, with the rendered detail if any.
    Error(DialogText, Option<String>),
    /// An informational message was shown.
    Info(DialogText),
}

/// Records calls and answers every dialog with a fixed value.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    /// Calls in order.
    pub calls: Vec<DialogCall>,
    /// Answer returned from every call.
    pub answer: bool,
}

impl RecordingPresenter {
    /// A presenter that answers `answer`.
    pub const fn answering(answer: bool) -> Self {
        Self {
            calls: Vec::new(),
            answer,
        }
    }
}

impl DialogPresenter for RecordingPresenter {
    fn question(&mut self, text: &DialogText) -> bool {
        self.calls.push(DialogCall::Question(text.clone()));
        self.answer
    }

    fn warning(&mut self, text: &DialogText) -> bool {
        self.calls.push(DialogCall::Warning(text.clone()));
        self.answer
    }

    fn error(&mut self, text: &DialogText, detail: Option<&(dyn Error + 'static)>) -> bool {
        self.calls
            .push(DialogCall::Error(text.clone(), detail.map(ToString::to_string)));
        self.answer
    }

    fn info(&mut self, text: &DialogText) -> bool {
        self.calls.push(DialogCall::Info(text.clone()));
        self.answer
    }
}
