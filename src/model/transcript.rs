//! Transcript entries: the append-only record of a run.

use jiff::Timestamp;
use uuid::Uuid;

/// Who a transcript line is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    /// The simulated host: tool output, connection status, rejections.
    System,

    /// The trainee.
    User,

    /// The mission controller persona: briefings, verdicts, hints.
    Ai,
}

/// Severity or kind of a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
    #[allow(dead_code)] // Rendered, but no engine event emits it yet.
    Warning,
    Hint,
}

/// An immutable log record.
#[derive(Debug, Clone)]
pub struct TranscriptEntry {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
    pub created_at: Timestamp,
    pub severity: Option<Severity>,
}

impl TranscriptEntry {
    /// A fresh entry stamped with a new id and the current time.
    pub fn new(sender: Sender, text: impl Into<String>, severity: Option<Severity>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            text: text.into(),
            created_at: Timestamp::now(),
            severity,
        }
    }
}
