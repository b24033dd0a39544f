//! Single-line text input used by every form.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use super::text::truncate_start_with_ellipsis;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
}

impl TextField {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Appends pasted text without line breaks.
    pub fn paste(&mut self, text: &str) {
        self.value
            .extend(text.chars().filter(|c| !matches!(c, '\n' | '\r')));
    }

    /// Applies an editing key. Returns false when the key is not an edit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        match key.code {
            KeyCode::Char('u') if ctrl => {
                self.value.clear();
                true
            }
            KeyCode::Char(c) if !ctrl && !alt => {
                self.value.push(c);
                true
            }
            KeyCode::Backspace => {
                self.value.pop();
                true
            }
            _ => false,
        }
    }
}

/// Renders `label: value█`, highlighted when focused.
pub fn render_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    field: &TextField,
    placeholder: &str,
    focused: bool,
) {
    let label_text = format!("{label}: ");
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let max_text_width = (area.width as usize).saturating_sub(label_text.width() + 1);

    let mut spans = vec![Span::styled(label_text, label_style)];
    if field.value().is_empty() {
        if focused {
            spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
        }
        spans.push(Span::styled(
            truncate_start_with_ellipsis(placeholder, max_text_width),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(
            truncate_start_with_ellipsis(field.value(), max_text_width),
            Style::default().fg(Color::White),
        ));
        if focused {
            spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
