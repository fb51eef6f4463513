//! Selector screen: pick a training domain.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, Padding, Paragraph};

use crate::engine::RunState;
use crate::model::{ExerciseDomain, Severity};

use super::{DEFAULT_ACCENT, accent};

pub struct SelectScreen {
    selected: usize,
}

impl SelectScreen {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    /// Start with `domain` highlighted.
    pub fn at(domain: ExerciseDomain) -> Self {
        let selected = ExerciseDomain::ALL
            .iter()
            .position(|d| *d == domain)
            .unwrap_or(0);
        Self { selected }
    }

    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < ExerciseDomain::ALL.len() {
            self.selected += 1;
        }
    }

    pub fn selected(&self) -> ExerciseDomain {
        ExerciseDomain::ALL[self.selected]
    }

    /// Render the selector. A failed load leaves its error at the end of
    /// the (idle) transcript; it is shown under the list.
    pub fn render(&self, frame: &mut Frame, state: &RunState) {
        let area = frame.area();

        let chunks = Layout::vertical([
            Constraint::Length(4), // title
            Constraint::Min(0),    // list
            Constraint::Length(1), // notice
            Constraint::Length(1), // help
        ])
        .split(area);

        let muted = Style::default().fg(Color::DarkGray);
        let title_style = Style::default()
            .fg(DEFAULT_ACCENT)
            .add_modifier(Modifier::BOLD);

        let title = Paragraph::new(vec![
            Line::from(Span::styled("MAINFRAME-99", title_style)),
            Line::from(Span::styled(
                "SYSTEM READY // SELECT TRAINING MODULE",
                Style::default().fg(DEFAULT_ACCENT),
            )),
        ])
        .block(Block::default().padding(Padding::new(2, 0, 1, 0)));
        frame.render_widget(title, chunks[0]);

        let items: Vec<ListItem> = ExerciseDomain::ALL
            .iter()
            .enumerate()
            .map(|(i, domain)| {
                let color = accent(Some(*domain));
                let (pointer, style) = if i == self.selected {
                    ("› ", Style::default().fg(color).add_modifier(Modifier::BOLD))
                } else {
                    ("  ", Style::default().fg(color))
                };
                ListItem::new(Line::from(vec![
                    Span::styled(pointer, style),
                    Span::styled(format!("{:<12}", domain.tag()), style),
                    Span::styled(format!("{:<22}", domain.label()), style),
                    Span::styled(domain.description(), muted),
                ]))
            })
            .collect();

        let list = List::new(items).block(Block::default().padding(Padding::new(2, 2, 1, 0)));
        frame.render_widget(list, chunks[1]);

        let failure = state
            .transcript
            .last()
            .filter(|e| !state.is_running() && e.severity == Some(Severity::Error));
        if let Some(entry) = failure {
            let notice = Paragraph::new(Line::from(Span::styled(
                format!(" {}", entry.text),
                Style::default().fg(Color::Red),
            )));
            frame.render_widget(notice, chunks[2]);
        }

        let help = Paragraph::new(Line::from(Span::styled(
            " ↑↓ navigate  ⏎ select  q quit",
            muted,
        )));
        frame.render_widget(help, chunks[3]);
    }
}
