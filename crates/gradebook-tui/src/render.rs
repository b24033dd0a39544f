//! Pure view/render functions for the TUI.
//!
//! This module contains all rendering logic. Functions here:
//! - Take `&AppState` by immutable reference
//! - Draw to a ratatui Frame
//! - Never mutate state or return effects
//!
//! The one exception is hit-test geometry (tab bar, overlay box), which is
//! recorded in `Cell`s so the reducer can resolve mouse clicks.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::truncate_with_ellipsis;
use crate::courses::{CoursesFocus, render_courses};
use crate::notices::render_notices;
use crate::overlays::OverlayExt;
use crate::overlays::render_utils::{InputHint, hint_spans};
use crate::state::{AppState, TuiState};
use crate::statistics::render_statistics;
use crate::students::{StudentsFocus, render_students};
use crate::tabs::{Tab, render_tabs};

/// Height of the tab bar.
const TABS_HEIGHT: u16 = 1;

/// Height of status line.
const STATUS_HEIGHT: u16 = 1;

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let state = &app.tui;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TABS_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(state.notices.height()),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);

    state.tab_area.set(chunks[0]);
    render_tabs(&state.tabs, frame, chunks[0]);

    match state.tabs.active() {
        Tab::Students => render_students(&state.students, frame, chunks[1]),
        Tab::Courses => render_courses(&state.courses, frame, chunks[1]),
        Tab::Statistics => render_statistics(&state.statistics, frame, chunks[1]),
    }

    render_notices(&state.notices, frame, chunks[2]);
    render_status_line(state, app.overlay.is_some(), frame, chunks[3]);

    app.overlay.render(frame, area);
}

/// Key hints for whatever currently has focus.
fn focus_hints(state: &TuiState) -> Vec<InputHint<'static>> {
    let mut hints = Vec::new();
    match state.tabs.active() {
        Tab::Students => match state.students.focus {
            StudentsFocus::List => {
                hints.push(InputHint::new("↑↓", "select"));
                hints.push(InputHint::new("v", "grades"));
                hints.push(InputHint::new("d", "delete"));
                hints.push(InputHint::new("r", "reload"));
            }
            _ => hints.push(InputHint::new("Enter", "submit")),
        },
        Tab::Courses => match state.courses.focus {
            CoursesFocus::CourseList => {
                hints.push(InputHint::new("Enter", "select"));
                hints.push(InputHint::new("d", "delete"));
                hints.push(InputHint::new("r", "reload"));
            }
            CoursesFocus::CourseStudents => {
                hints.push(InputHint::new("↑↓", "select"));
                hints.push(InputHint::new("r", "remove"));
            }
            _ => hints.push(InputHint::new("Enter", "submit")),
        },
        Tab::Statistics => hints.push(InputHint::new("r", "reload")),
    }
    hints.push(InputHint::new("Tab", "focus"));
    hints.push(InputHint::new("F1-F3", "tabs"));
    hints.push(InputHint::new("Ctrl+C", "quit"));
    hints
}

fn render_status_line(
    state: &TuiState,
    overlay_open: bool,
    frame: &mut Frame,
    area: ratatui::layout::Rect,
) {
    let api = format!(" {} ", state.api_base);
    let mut spans = vec![Span::styled(
        truncate_with_ellipsis(&api, (area.width / 3) as usize),
        Style::default().fg(Color::Black).bg(Color::DarkGray),
    )];
    spans.push(Span::raw(" "));
    if !overlay_open {
        spans.extend(hint_spans(&focus_hints(state), Color::Cyan));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_initial_screen_shows_tabs_and_loading() {
        let mut app = AppState::new("http://localhost:8080/api", Duration::from_secs(3));
        crate::update::init(&mut app);
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal.draw(|frame| render(&app, frame)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("F1 Students"));
        assert!(text.contains("F3 Statistics"));
        assert!(text.contains("Loading student list..."));
        assert!(text.contains("http://localhost:8080/api"));
        assert_eq!(app.tui.tab_area.get().height, 1);
    }

    #[test]
    fn test_notice_region_takes_space_only_when_visible() {
        let mut app = AppState::new("http://localhost:8080/api", Duration::from_secs(3));
        app.tui.notices.error("Please enter Student ID");
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal.draw(|frame| render(&app, frame)).unwrap();

        assert!(screen_text(&terminal).contains("Please enter Student ID"));
    }
}
