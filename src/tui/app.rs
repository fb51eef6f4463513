//! Application loop and screen routing.

use std::io;
use std::time::Instant;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;

use crate::engine::Engine;
use crate::model::ExerciseDomain;
use crate::prompt::PromptAction;

use super::screens::{MissionScreen, SelectScreen};

/// Which screen is currently displayed.
enum Screen {
    Select(SelectScreen),
    Mission(MissionScreen),
}

/// Runs the TUI event loop until the user quits.
///
/// With `start`, the run begins on that domain instead of the selector.
pub fn run(engine: Engine, start: Option<ExerciseDomain>) -> io::Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, engine, start);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    mut engine: Engine,
    start: Option<ExerciseDomain>,
) -> io::Result<()> {
    let mut screen = match start {
        Some(domain) => begin(&mut engine, domain)
            .map_or_else(|| Screen::Select(SelectScreen::at(domain)), Screen::Mission),
        None => Screen::Select(SelectScreen::new()),
    };

    loop {
        engine.tick(Instant::now());

        terminal.draw(|frame| match &screen {
            Screen::Select(s) => s.render(frame, engine.state()),
            Screen::Mission(m) => m.render(frame, engine.state(), engine.is_busy()),
        })?;

        // Wake for the next queued line even without input.
        if let Some(due) = engine.next_due() {
            if !event::poll(due.saturating_duration_since(Instant::now()))? {
                continue;
            }
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if is_interrupt(key) {
            return Ok(());
        }

        match &mut screen {
            Screen::Select(select) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Up | KeyCode::Char('k') => select.move_up(),
                KeyCode::Down | KeyCode::Char('j') => select.move_down(),
                KeyCode::Enter => {
                    if let Some(mission) = begin(&mut engine, select.selected()) {
                        screen = Screen::Mission(mission);
                    }
                }
                _ => {}
            },
            Screen::Mission(mission) => match key.code {
                KeyCode::Esc => {
                    let domain = engine.state().domain;
                    engine.abort();
                    screen = Screen::Select(domain.map_or_else(SelectScreen::new, SelectScreen::at));
                }
                KeyCode::Tab => hint(&mut engine),
                KeyCode::Enter => {
                    if let Some(action) = mission.on_enter(engine.is_busy()) {
                        dispatch(&mut engine, action, Instant::now());
                    }
                }
                KeyCode::Backspace => mission.on_backspace(),
                KeyCode::Up => mission.on_up(),
                KeyCode::Down => mission.on_down(),
                KeyCode::PageUp => mission.on_page_up(),
                KeyCode::PageDown => mission.on_page_down(),
                KeyCode::Char(c) => mission.on_char(c),
                _ => {}
            },
        }
    }
}

/// Select `domain` and open a fresh mission screen, or stay put if the
/// content would not load. The engine has already logged the failure to
/// the transcript, which the selector shows.
fn begin(engine: &mut Engine, domain: ExerciseDomain) -> Option<MissionScreen> {
    match engine.select_domain(domain) {
        Ok(()) => Some(MissionScreen::new()),
        Err(e) => {
            tracing::warn!(%domain, error = %e, "could not start mission");
            None
        }
    }
}

/// Send what the prompt produced to the engine.
fn dispatch(engine: &mut Engine, action: PromptAction, now: Instant) {
    match action {
        PromptAction::Submit(line) => {
            if let Err(e) = engine.submit(&line, now) {
                tracing::debug!(error = %e, "submission ignored");
            }
        }
        PromptAction::Hint => hint(engine),
    }
}

fn hint(engine: &mut Engine) {
    if let Err(e) = engine.request_hint() {
        tracing::debug!(error = %e, "hint ignored");
    }
}

fn is_interrupt(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
