//! The mission prompt: an input line with history recall.
//!
//! Knows nothing about missions. It turns keystrokes into either a line
//! to submit or a hint request, and leaves the engine to do the rest.

use crate::history::CommandHistory;

/// What the prompt wants done after Enter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAction {
    /// Submit this line, exactly as typed.
    Submit(String),

    /// The user typed `hint` or `help`.
    Hint,
}

#[derive(Debug, Default)]
pub struct Prompt {
    input: String,
    history: CommandHistory,
}

impl Prompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn on_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn on_backspace(&mut self) {
        self.input.pop();
    }

    /// Recall an older command into the line.
    pub fn on_up(&mut self) {
        if let Some(cmd) = self.history.recall_previous() {
            self.input = cmd.to_string();
        }
    }

    /// Recall a newer command, or clear the line past the newest.
    pub fn on_down(&mut self) {
        if let Some(cmd) = self.history.recall_next() {
            self.input = cmd.to_string();
        }
    }

    /// Handle Enter.
    ///
    /// Nothing happens while `busy` or when the line is blank. A bare
    /// `hint`/`help` is not recorded in history.
    pub fn on_enter(&mut self, busy: bool) -> Option<PromptAction> {
        if busy {
            return None;
        }
        let trimmed = self.input.trim();
        if trimmed.is_empty() {
            return None;
        }

        if trimmed.eq_ignore_ascii_case("hint") || trimmed.eq_ignore_ascii_case("help") {
            self.input.clear();
            return Some(PromptAction::Hint);
        }

        self.history.record(trimmed);
        let line = std::mem::take(&mut self.input);
        Some(PromptAction::Submit(line))
    }

    /// Clear the line and forget history, for a new run.
    pub fn reset(&mut self) {
        self.input.clear();
        self.history.reset();
    }
}
