use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::state::{NoticeState, Severity};
use crate::common::truncate_with_ellipsis;

fn severity_style(severity: Severity) -> (&'static str, Style) {
    match severity {
        Severity::Success => ("✓", Style::default().fg(Color::Green)),
        Severity::Error => ("✗", Style::default().fg(Color::Red)),
    }
}

pub fn render_notices(state: &NoticeState, frame: &mut Frame, area: Rect) {
    if !state.is_visible() || area.height == 0 {
        return;
    }
    let max_width = (area.width as usize).saturating_sub(3);
    let lines: Vec<Line> = state
        .entries()
        .iter()
        .map(|notice| {
            let (icon, style) = severity_style(notice.severity);
            Line::from(vec![
                Span::styled(format!(" {icon} "), style),
                Span::styled(truncate_with_ellipsis(&notice.message, max_width), style),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}
