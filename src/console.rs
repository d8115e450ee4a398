// console.rs

//! Submission pipeline tying the registry, transcript and recall together.

use crate::content;
use crate::error::LookupError;
use crate::fragment::Fragment;
use crate::history::{HistoryLog, RecallBuffer};
use crate::input::InputController;
use crate::registry::{normalize, CommandRegistry, Produced};

/// Key events the console reacts to. Anything else is plain text editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Submit,
    RecallPrev,
    RecallNext,
    Edit(String),
}

/// What a submission did to the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// A new entry landed at this index.
    Appended(usize),
    Cleared,
}

#[derive(Debug)]
pub struct Console {
    history: HistoryLog,
    recall: RecallBuffer,
    input: InputController,
    scroll_pending: bool,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    /// A fresh session with the welcome entry already in the transcript.
    pub fn new() -> Self {
        let mut history = HistoryLog::new();
        history.append(String::new(), content::welcome());
        Self {
            history,
            recall: RecallBuffer::new(),
            input: InputController::new(),
            scroll_pending: true,
        }
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn recall(&self) -> &RecallBuffer {
        &self.recall
    }

    pub fn input(&self) -> &InputController {
        &self.input
    }

    pub fn handle(&mut self, key: Key) -> Option<Change> {
        match key {
            Key::Submit => {
                let raw = self.input.take();
                Some(self.submit(&raw))
            }
            Key::RecallPrev => {
                self.input.recall_prev(&self.recall);
                None
            }
            Key::RecallNext => {
                self.input.recall_next(&self.recall);
                None
            }
            Key::Edit(text) => {
                self.input.edit(text);
                None
            }
        }
    }

    /// Dispatch one raw line. `clear`/`cls` wipe the transcript without
    /// leaving an entry behind; everything else appends exactly one entry.
    pub fn submit(&mut self, raw: &str) -> Change {
        let name = normalize(raw);
        let change = match CommandRegistry::lookup(&name) {
            Ok(Produced::ClearHistory) => {
                log::debug!("clearing {} transcript entries", self.history.len());
                self.history.clear();
                Change::Cleared
            }
            Ok(Produced::Fragment(output)) => {
                log::debug!("dispatched {name:?}");
                self.history.append(raw.to_string(), output);
                Change::Appended(self.history.len() - 1)
            }
            Err(_) => {
                let err = LookupError::UnrecognizedCommand { raw: raw.to_string() };
                self.history.append(raw.to_string(), Fragment::text(err.to_string()));
                Change::Appended(self.history.len() - 1)
            }
        };
        self.recall.add(raw.to_string());
        self.input.take();
        self.scroll_pending = true;
        change
    }

    /// Returns true once per transcript mutation.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_pending)
    }
}
