//! Tab controller.
//!
//! Exactly one tab is active. Selecting a tab returns the load effect for its
//! panel; the caller passes the target tab explicitly, whether it came from a
//! key or a mouse click on the tab bar.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::effects::UiEffect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Students,
    Courses,
    Statistics,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Students, Tab::Courses, Tab::Statistics];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Students => "Students",
            Tab::Courses => "Courses",
            Tab::Statistics => "Statistics",
        }
    }

    fn key_label(self) -> &'static str {
        match self {
            Tab::Students => "F1",
            Tab::Courses => "F2",
            Tab::Statistics => "F3",
        }
    }

    /// Text drawn for this tab in the bar, padding included.
    fn label(self) -> String {
        format!(" {} {} ", self.key_label(), self.title())
    }

    /// The data load that entering this tab triggers.
    pub fn load_effect(self) -> UiEffect {
        match self {
            Tab::Students => UiEffect::LoadStudents,
            Tab::Courses => UiEffect::LoadCourses,
            Tab::Statistics => UiEffect::LoadStatistics,
        }
    }

    /// Resolves F1–F3 and Alt+1–3.
    pub fn from_key(key: KeyEvent) -> Option<Tab> {
        match key.code {
            KeyCode::F(n) => Self::from_number(n),
            KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::ALT) => {
                c.to_digit(10).and_then(|n| Self::from_number(n as u8))
            }
            _ => None,
        }
    }

    fn from_number(n: u8) -> Option<Tab> {
        match n {
            1 => Some(Tab::Students),
            2 => Some(Tab::Courses),
            3 => Some(Tab::Statistics),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TabState {
    active: Tab,
}

impl TabState {
    pub fn active(&self) -> Tab {
        self.active
    }

    /// Activates `tab` and returns its load effect.
    pub fn select(&mut self, tab: Tab) -> Vec<UiEffect> {
        self.active = tab;
        vec![tab.load_effect()]
    }
}

const SEPARATOR: &str = "│";

/// Returns the tab whose title covers `(column, row)` in a bar drawn at `area`.
pub fn tab_at(area: Rect, column: u16, row: u16) -> Option<Tab> {
    if row != area.y || column < area.x {
        return None;
    }
    let mut x = area.x;
    for tab in Tab::ALL {
        let width = tab.label().width() as u16;
        if column < x + width {
            return Some(tab);
        }
        x += width + SEPARATOR.width() as u16;
        if column < x {
            return None;
        }
    }
    None
}

pub fn render_tabs(state: &TabState, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    for (i, tab) in Tab::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(SEPARATOR, Style::default().fg(Color::DarkGray)));
        }
        let style = if tab == state.active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(tab.label(), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_tab_is_students() {
        assert_eq!(TabState::default().active(), Tab::Students);
    }

    #[test]
    fn test_select_returns_load_effect() {
        let mut tabs = TabState::default();
        assert_eq!(tabs.select(Tab::Courses), vec![UiEffect::LoadCourses]);
        assert_eq!(tabs.active(), Tab::Courses);
        assert_eq!(tabs.select(Tab::Statistics), vec![UiEffect::LoadStatistics]);
        assert_eq!(tabs.select(Tab::Students), vec![UiEffect::LoadStudents]);
    }

    #[test]
    fn test_from_key() {
        assert_eq!(
            Tab::from_key(KeyEvent::new(KeyCode::F(2), KeyModifiers::NONE)),
            Some(Tab::Courses)
        );
        assert_eq!(
            Tab::from_key(KeyEvent::new(KeyCode::Char('3'), KeyModifiers::ALT)),
            Some(Tab::Statistics)
        );
        assert_eq!(
            Tab::from_key(KeyEvent::new(KeyCode::Char('3'), KeyModifiers::NONE)),
            None
        );
        assert_eq!(
            Tab::from_key(KeyEvent::new(KeyCode::F(4), KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn test_tab_at_hit_testing() {
        let area = Rect::new(0, 0, 80, 1);
        // " F1 Students " spans columns 0..13, separator at 13.
        assert_eq!(tab_at(area, 0, 0), Some(Tab::Students));
        assert_eq!(tab_at(area, 12, 0), Some(Tab::Students));
        assert_eq!(tab_at(area, 13, 0), None);
        assert_eq!(tab_at(area, 14, 0), Some(Tab::Courses));
        assert_eq!(tab_at(area, 41, 0), Some(Tab::Statistics));
        assert_eq!(tab_at(area, 50, 0), None);
        assert_eq!(tab_at(area, 3, 1), None);
    }
}
