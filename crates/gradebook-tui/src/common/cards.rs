//! Student card list shared by the students panel and the course roster.

use gradebook_core::models::Student;
use gradebook_core::view::{CardScope, StudentCard, student_cards};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::{ListCursor, Remote, truncate_with_ellipsis};

const CARD_HEIGHT: usize = 2;

/// Placeholder text for each non-ready state of a list.
pub struct ListText {
    pub idle: &'static str,
    pub loading: &'static str,
    pub empty: &'static str,
}

pub fn panel_block(title: &str, focused: bool) -> Block<'static> {
    let color = if focused { Color::Cyan } else { Color::DarkGray };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(format!(" {title} "))
}

fn placeholder(text: String, color: Color) -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(text, Style::default().fg(color))))
}

#[allow(clippy::too_many_arguments)]
pub fn render_student_list(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    students: &Remote<Vec<Student>>,
    scope: CardScope,
    cursor: ListCursor,
    focused: bool,
    text: &ListText,
) {
    let block = panel_block(title, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let students = match students {
        Remote::Idle => {
            frame.render_widget(placeholder(text.idle.to_string(), Color::DarkGray), inner);
            return;
        }
        Remote::Loading => {
            frame.render_widget(placeholder(text.loading.to_string(), Color::DarkGray), inner);
            return;
        }
        Remote::Failed(error) => {
            frame.render_widget(placeholder(format!("Loading failed: {error}"), Color::Red), inner);
            return;
        }
        Remote::Ready(students) if students.is_empty() => {
            frame.render_widget(placeholder(text.empty.to_string(), Color::DarkGray), inner);
            return;
        }
        Remote::Ready(students) => students,
    };

    let cards = student_cards(students, scope);
    let per_page = (inner.height as usize / CARD_HEIGHT).max(1);
    let offset = cursor.index().saturating_sub(per_page - 1);

    let lines: Vec<Line> = cards
        .iter()
        .enumerate()
        .skip(offset)
        .take(per_page)
        .flat_map(|(i, card)| card_lines(card, focused && i == cursor.index(), inner.width))
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn card_lines(card: &StudentCard, selected: bool, width: u16) -> [Line<'static>; 2] {
    let marker = if selected { "▶ " } else { "  " };
    let title_style = if selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let hints: Vec<String> = card
        .actions
        .iter()
        .map(|action| {
            let (key, label) = action.hint();
            format!("{key} {label}")
        })
        .collect();
    let hints = hints.join(" • ");
    let title = format!("{marker}{}", card.title());
    let room = (width as usize).saturating_sub(title.width() + 1);
    let hints = if selected {
        truncate_with_ellipsis(&hints, room)
    } else {
        String::new()
    };
    let gap = (width as usize).saturating_sub(title.width() + hints.width());

    [
        Line::from(vec![
            Span::styled(title, title_style),
            Span::raw(" ".repeat(gap)),
            Span::styled(hints, Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(Span::styled(
            format!("    {}", card.summary()),
            Style::default().fg(Color::Gray),
        )),
    ]
}
