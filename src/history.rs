//! Command history with up/down recall.
//!
//! The cursor is `None` when the user is on a fresh line. Walking up
//! stops at the oldest entry; walking down past the newest returns to a
//! fresh (empty) line.

#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl CommandHistory {
    /// Append a submitted command and return to a fresh line.
    ///
    /// Consecutive duplicates are kept; recall shows exactly what was typed.
    pub fn record(&mut self, command: impl Into<String>) {
        self.entries.push(command.into());
        self.cursor = None;
    }

    /// Step towards older entries.
    ///
    /// Returns `None` when there is no history at all.
    pub fn recall_previous(&mut self) -> Option<&str> {
        let last = self.entries.len().checked_sub(1)?;
        let index = match self.cursor {
            None => last,
            Some(i) => i.saturating_sub(1),
        };
        self.cursor = Some(index);
        self.entries.get(index).map(String::as_str)
    }

    /// Step towards newer entries.
    ///
    /// Returns `None` when already on a fresh line, and `Some("")` when
    /// stepping past the newest entry.
    pub fn recall_next(&mut self) -> Option<&str> {
        let i = self.cursor?;
        if i + 1 < self.entries.len() {
            self.cursor = Some(i + 1);
            self.entries.get(i + 1).map(String::as_str)
        } else {
            self.cursor = None;
            Some("")
        }
    }

    /// Forget everything.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }
}
