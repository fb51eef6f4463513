//! Mission screen: transcript, directive panel, and prompt.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap};

use crate::engine::{RunPhase, RunState};
use crate::model::{Sender, Severity, TranscriptEntry};
use crate::prompt::{Prompt, PromptAction};

use super::accent;

/// Lines moved per PageUp/PageDown.
const SCROLL_PAGE: usize = 5;

pub struct MissionScreen {
    prompt: Prompt,

    /// Lines scrolled back from the bottom of the transcript.
    scroll_back: usize,
}

impl MissionScreen {
    /// A fresh screen with an empty prompt and history.
    pub fn new() -> Self {
        Self {
            prompt: Prompt::new(),
            scroll_back: 0,
        }
    }

    pub fn on_char(&mut self, c: char) {
        self.prompt.on_char(c);
    }

    pub fn on_backspace(&mut self) {
        self.prompt.on_backspace();
    }

    pub fn on_up(&mut self) {
        self.prompt.on_up();
    }

    pub fn on_down(&mut self) {
        self.prompt.on_down();
    }

    /// Handle Enter. Submitting snaps the transcript back to the bottom.
    pub fn on_enter(&mut self, busy: bool) -> Option<PromptAction> {
        let action = self.prompt.on_enter(busy);
        if action.is_some() {
            self.scroll_back = 0;
        }
        action
    }

    pub fn on_page_up(&mut self) {
        self.scroll_back += SCROLL_PAGE;
    }

    pub fn on_page_down(&mut self) {
        self.scroll_back = self.scroll_back.saturating_sub(SCROLL_PAGE);
    }

    pub fn render(&self, frame: &mut Frame, state: &RunState, busy: bool) {
        let area = frame.area();
        let color = accent(state.domain);

        let chunks = Layout::vertical([
            Constraint::Length(2), // header
            Constraint::Min(0),    // transcript + panel
            Constraint::Length(1), // prompt
            Constraint::Length(1), // help
        ])
        .split(area);

        let muted = Style::default().fg(Color::DarkGray);

        // Header.
        let module = state
            .domain
            .map_or_else(|| "TERMINAL_IDLE".to_string(), |d| format!("MODULE: {d}"));
        let header = Paragraph::new(Line::from(vec![
            Span::styled(
                "MAINFRAME-99",
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  //  ", muted),
            Span::styled(module, Style::default().fg(color)),
        ]))
        .block(Block::default().padding(Padding::new(1, 0, 0, 0)));
        frame.render_widget(header, chunks[0]);

        let body = Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(chunks[1]);
        self.render_transcript(frame, body[0], state, color);
        render_panel(frame, body[1], state, color);

        // Prompt.
        let prompt = if busy {
            Line::from(vec![
                Span::styled(" MF-99: ", Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::styled("ESTABLISHING UPLINK...", Style::default().fg(color)),
            ])
        } else if state.phase == RunPhase::Complete {
            Line::from(Span::styled(" MISSION COMPLETE", Style::default().fg(Color::Green)))
        } else {
            Line::from(vec![
                Span::styled(" › ", Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::styled(self.prompt.input(), Style::default().fg(Color::White)),
                Span::styled("█", muted),
            ])
        };
        frame.render_widget(Paragraph::new(prompt), chunks[2]);

        let help = if state.phase == RunPhase::Complete {
            " esc return to selector  ctrl-c quit"
        } else {
            " ⏎ submit  ↑↓ history  tab hint  pgup/pgdn scroll  esc abort  ctrl-c quit"
        };
        frame.render_widget(Paragraph::new(Line::from(Span::styled(help, muted))), chunks[3]);
    }

    fn render_transcript(&self, frame: &mut Frame, area: Rect, state: &RunState, color: Color) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);

        let lines = transcript_lines(&state.transcript, inner.width as usize, color);
        let height = inner.height as usize;
        let bottom = lines.len().saturating_sub(self.scroll_back.min(lines.len()));
        let top = bottom.saturating_sub(height);

        let visible: Vec<Line> = lines[top..bottom].to_vec();
        frame.render_widget(Paragraph::new(visible).block(block), area);
    }
}

fn render_panel(frame: &mut Frame, area: Rect, state: &RunState, color: Color) {
    let chunks = Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).split(area);

    let label = Style::default().fg(color).add_modifier(Modifier::BOLD);
    let text = Style::default().fg(Color::Gray);
    let total = state.steps.len();

    let mut lines = Vec::new();
    match (state.phase, state.current_step()) {
        (RunPhase::Active, Some(step)) => {
            lines.push(Line::from(Span::styled(
                format!("STEP {}/{total}", step.index + 1),
                label,
            )));
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("OBJECTIVE", label)));
            lines.push(Line::from(Span::styled(step.objective.as_str(), text)));
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("TECHNICAL GUIDE", label)));
            lines.push(Line::from(Span::styled(step.technical_guide.as_str(), text)));
        }
        (RunPhase::Complete, _) => {
            lines.push(Line::from(Span::styled(format!("STEP {total}/{total}"), label)));
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "ALL DIRECTIVES COMPLETE",
                Style::default().fg(Color::Green),
            )));
        }
        _ => {
            lines.push(Line::from(Span::styled("NO ACTIVE DIRECTIVE", text)));
        }
    }

    let panel = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" DIRECTIVE ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(panel, chunks[0]);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" SYNC ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .percent(u16::from(state.progress_percent()))
        .label(format!("{}%", state.progress_percent()));
    frame.render_widget(gauge, chunks[1]);
}

/// Prefix shown before an entry's first line.
fn sender_prefix(sender: Sender) -> &'static str {
    match sender {
        Sender::Ai => "MF-99: ",
        Sender::System => "SYS: ",
        Sender::User => "> ",
    }
}

fn entry_style(entry: &TranscriptEntry, accent: Color) -> Style {
    let fg = match (entry.sender, entry.severity) {
        (Sender::User, _) => Color::White,
        (_, Some(Severity::Success)) => Color::Green,
        (_, Some(Severity::Error)) => Color::Red,
        (_, Some(Severity::Warning)) => Color::Yellow,
        (_, Some(Severity::Hint)) => Color::Cyan,
        (Sender::Ai, _) => accent,
        (Sender::System, _) => Color::Gray,
    };
    Style::default().fg(fg)
}

/// Lay out the transcript as display lines no wider than `width`.
///
/// Continuation lines are indented to sit under the text, not the prefix.
fn transcript_lines(entries: &[TranscriptEntry], width: usize, accent: Color) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for entry in entries {
        let style = entry_style(entry, accent);
        let prefix = sender_prefix(entry.sender);
        let indent = " ".repeat(prefix.chars().count());
        let room = width.saturating_sub(indent.len()).max(1);

        let mut first = true;
        for raw in entry.text.split('\n') {
            for chunk in wrap(raw, room) {
                let lead = if first {
                    Span::styled(prefix, style.add_modifier(Modifier::BOLD))
                } else {
                    Span::raw(indent.clone())
                };
                first = false;
                lines.push(Line::from(vec![lead, Span::styled(chunk, style)]));
            }
        }
    }
    lines
}

/// Split `text` into pieces of at most `width` characters.
/// An empty line stays one empty piece.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return vec![String::new()];
    }
    chars
        .chunks(width.max(1))
        .map(|c| c.iter().collect())
        .collect()
}
