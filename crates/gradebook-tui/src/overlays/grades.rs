//! Grade detail overlay for one student.

use std::cell::Cell;

use crossterm::event::{KeyCode, KeyEvent};
use gradebook_core::view::{GradeDetailView, NO_GRADE_RECORDS, NO_GRADES};
use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::OverlayUpdate;

const OVERLAY_WIDTH: u16 = 60;
const MAX_OVERLAY_HEIGHT: u16 = 24;

#[derive(Debug)]
pub struct GradesState {
    pub view: GradeDetailView,
    scroll: u16,
    /// Content box from the last render, for backdrop hit-testing.
    popup_area: Cell<Rect>,
}

impl GradesState {
    pub fn open(view: GradeDetailView) -> Self {
        Self {
            view,
            scroll: 0,
            popup_area: Cell::new(Rect::default()),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => OverlayUpdate::close(),
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
                OverlayUpdate::stay()
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let max = (detail_lines(&self.view).len() as u16).saturating_sub(1);
                self.scroll = (self.scroll + 1).min(max);
                OverlayUpdate::stay()
            }
            _ => OverlayUpdate::stay(),
        }
    }

    /// A click on the backdrop closes the overlay; clicks inside are ignored.
    pub fn handle_click(&self, column: u16, row: u16) -> OverlayUpdate {
        if self.popup_area.get().contains(Position::new(column, row)) {
            OverlayUpdate::stay()
        } else {
            OverlayUpdate::close()
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        use super::render_utils::{InputHint, OverlayConfig, render_overlay};

        let lines = detail_lines(&self.view);
        let height = (lines.len() as u16 + 3).min(MAX_OVERLAY_HEIGHT);
        let title = self.view.title();
        let hints = [
            InputHint::new("↑↓", "scroll"),
            InputHint::new("Esc", "close"),
        ];
        let layout = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: &title,
                border_color: Color::Cyan,
                width: OVERLAY_WIDTH,
                height,
                hints: &hints,
            },
        );
        self.popup_area.set(layout.popup);

        frame.render_widget(Paragraph::new(lines).scroll((self.scroll, 0)), layout.body);
    }
}

/// Summary block, blank line, then one block per grade group.
fn detail_lines(view: &GradeDetailView) -> Vec<Line<'static>> {
    let label_style = Style::default().fg(Color::DarkGray);
    let mut lines: Vec<Line<'static>> = view
        .summary
        .iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{label}: "), label_style),
                Span::styled(value.clone(), Style::default().fg(Color::White)),
            ])
        })
        .collect();
    lines.push(Line::default());

    if view.groups.is_empty() {
        lines.push(Line::from(Span::styled(NO_GRADE_RECORDS, label_style)));
        return lines;
    }

    for group in &view.groups {
        if let Some(heading) = &group.heading {
            lines.push(Line::from(Span::styled(
                heading.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        if group.grades.is_empty() {
            lines.push(Line::from(Span::styled(format!("  {NO_GRADES}"), label_style)));
        } else {
            lines.push(Line::from(format!("  {}", group.grades.join("  "))));
        }
    }
    lines
}
