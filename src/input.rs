// input.rs

//! Edit buffer plus the up/down recall state machine.

use crate::history::RecallBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecallState {
    /// Fresh input, not looking at the recall buffer.
    #[default]
    Editing,
    /// Index into the recall buffer, always in bounds.
    Recalling(usize),
}

#[derive(Debug, Default)]
pub struct InputController {
    buffer: String,
    state: RecallState,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn state(&self) -> RecallState {
        self.state
    }

    /// Replace the buffer with edited text. The recall position is kept, so a
    /// following up/down press moves relative to the recalled entry.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    pub fn recall_prev(&mut self, recall: &RecallBuffer) {
        if recall.is_empty() {
            return;
        }
        let idx = match self.state {
            RecallState::Editing => recall.len() - 1,
            RecallState::Recalling(i) => i.saturating_sub(1),
        };
        self.show(recall, idx);
    }

    pub fn recall_next(&mut self, recall: &RecallBuffer) {
        let RecallState::Recalling(i) = self.state else {
            return;
        };
        if i + 1 >= recall.len() {
            self.reset();
        } else {
            self.show(recall, i + 1);
        }
    }

    /// Hand the buffer over for submission and go back to fresh editing.
    pub fn take(&mut self) -> String {
        self.state = RecallState::Editing;
        std::mem::take(&mut self.buffer)
    }

    fn show(&mut self, recall: &RecallBuffer, idx: usize) {
        match recall.get(idx) {
            Some(entry) => {
                self.buffer = entry.clone();
                self.state = RecallState::Recalling(idx);
            }
            None => self.reset(),
        }
    }

    fn reset(&mut self) {
        self.buffer.clear();
        self.state = RecallState::Editing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_of(items: &[&str]) -> RecallBuffer {
        let mut recall = RecallBuffer::new();
        for item in items {
            recall.add(item.to_string());
        }
        recall
    }

    #[test]
    fn prev_on_empty_buffer_is_noop() {
        let mut input = InputController::new();
        input.edit("typing");
        input.recall_prev(&RecallBuffer::new());
        assert_eq!(input.buffer(), "typing");
        assert_eq!(input.state(), RecallState::Editing);
    }

    #[test]
    fn next_while_editing_is_noop() {
        let recall = buffer_of(&["a"]);
        let mut input = InputController::new();
        input.edit("draft");
        input.recall_next(&recall);
        assert_eq!(input.buffer(), "draft");
        assert_eq!(input.state(), RecallState::Editing);
    }

    #[test]
    fn prev_clamps_at_oldest() {
        let recall = buffer_of(&["foo", "bar"]);
        let mut input = InputController::new();
        input.recall_prev(&recall);
        assert_eq!(input.state(), RecallState::Recalling(1));
        input.recall_prev(&recall);
        input.recall_prev(&recall);
        assert_eq!(input.state(), RecallState::Recalling(0));
        assert_eq!(input.buffer(), "foo");
    }

    #[test]
    fn next_past_newest_returns_to_editing() {
        let recall = buffer_of(&["foo"]);
        let mut input = InputController::new();
        input.recall_prev(&recall);
        input.recall_next(&recall);
        assert_eq!(input.state(), RecallState::Editing);
        assert_eq!(input.buffer(), "");
    }

    #[test]
    fn edit_keeps_recall_position() {
        let recall = buffer_of(&["foo", "bar", "baz"]);
        let mut input = InputController::new();
        input.recall_prev(&recall);
        input.recall_prev(&recall);
        input.edit("barX");
        assert_eq!(input.state(), RecallState::Recalling(1));
        input.recall_next(&recall);
        assert_eq!(input.buffer(), "baz");
    }

    #[test]
    fn take_resets_state() {
        let recall = buffer_of(&["foo"]);
        let mut input = InputController::new();
        input.recall_prev(&recall);
        assert_eq!(input.take(), "foo");
        assert_eq!(input.buffer(), "");
        assert_eq!(input.state(), RecallState::Editing);
    }
}
