use gradebook_core::models::StatisticsSnapshot;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Row, Table};

use super::StatisticsState;
use crate::common::{Remote, panel_block};

pub fn render_statistics(state: &StatisticsState, frame: &mut Frame, area: Rect) {
    let block = panel_block("Statistics", true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let dim = Style::default().fg(Color::DarkGray);
    match &state.snapshot {
        Remote::Idle | Remote::Loading => {
            frame.render_widget(Paragraph::new(Span::styled("Loading statistics...", dim)), inner);
        }
        Remote::Failed(error) => {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    format!("Failed to load statistics: {error}"),
                    Style::default().fg(Color::Red),
                )),
                inner,
            );
        }
        Remote::Ready(snapshot) => render_snapshot(snapshot, frame, inner),
    }
}

fn summary_lines(snapshot: &StatisticsSnapshot) -> Vec<Line<'static>> {
    let dim = Style::default().fg(Color::DarkGray);
    let value = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let status_color = if snapshot.health.status.eq_ignore_ascii_case("UP") {
        Color::Green
    } else {
        Color::Red
    };
    vec![
        Line::from(vec![
            Span::styled("Total Courses: ", dim),
            Span::styled(snapshot.total_courses.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Total Enrollments: ", dim),
            Span::styled(snapshot.total_enrollments.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("System Status: ", dim),
            Span::styled(
                snapshot.health.status.clone(),
                Style::default().fg(status_color),
            ),
            Span::styled("  Version: ", dim),
            Span::styled(snapshot.health.version.clone(), value),
        ]),
    ]
}

fn render_snapshot(snapshot: &StatisticsSnapshot, frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(1)])
        .split(area);
    frame.render_widget(Paragraph::new(summary_lines(snapshot)), rows[0]);

    if snapshot.courses.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("No courses", Style::default().fg(Color::DarkGray))),
            rows[1],
        );
        return;
    }

    let header = Row::new(["Course ID", "Academic Year", "Students"]).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    let body = snapshot.courses.iter().map(|summary| {
        Row::new([
            summary.course.course_id.clone(),
            summary.course.academic_year.clone(),
            summary.student_count.to_string(),
        ])
    });
    let table = Table::new(
        body,
        [
            Constraint::Percentage(40),
            Constraint::Percentage(35),
            Constraint::Percentage(25),
        ],
    )
    .header(header);
    frame.render_widget(table, rows[1]);
}
