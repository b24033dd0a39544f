use gradebook_core::view::{CardScope, course_label, course_statistics_lines};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::state::{CoursesFocus, CoursesState};
use crate::common::{
    ListText, Remote, TextField, panel_block, render_field, render_student_list,
    truncate_with_ellipsis,
};

const ROSTER_TEXT: ListText = ListText {
    idle: "Please select a course to view student list",
    loading: "Loading course student list...",
    empty: "No students in this course",
};

pub fn render_courses(state: &CoursesState, frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(3)])
        .split(columns[0]);
    render_form(
        frame,
        left[0],
        "Create Course",
        &[
            ("Course ID", &state.new_course_id, CoursesFocus::NewCourseId),
            (
                "Academic Year",
                &state.new_academic_year,
                CoursesFocus::NewAcademicYear,
            ),
        ],
        state.focus,
    );
    render_course_list(state, frame, left[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(5),
        ])
        .split(columns[1]);
    render_course_statistics(state, frame, right[0]);
    render_form(
        frame,
        right[1],
        "Add Student to Course",
        &[(
            "Student ID",
            &state.enroll_student_id,
            CoursesFocus::EnrollStudentId,
        )],
        state.focus,
    );
    let roster_title = match &state.selected {
        Some(course_id) => format!("Students in {course_id}"),
        None => "Course Students".to_string(),
    };
    render_student_list(
        frame,
        right[2],
        &roster_title,
        &state.students,
        CardScope::Course,
        state.students_cursor,
        state.focus == CoursesFocus::CourseStudents,
        &ROSTER_TEXT,
    );
    render_form(
        frame,
        right[3],
        "Update Grades",
        &[
            ("Course ID", &state.update_course_id, CoursesFocus::UpdateCourseId),
            (
                "Student ID",
                &state.update_student_id,
                CoursesFocus::UpdateStudentId,
            ),
            ("Grades", &state.update_grades, CoursesFocus::UpdateGrades),
        ],
        state.focus,
    );
}

fn render_form(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    fields: &[(&str, &TextField, CoursesFocus)],
    focus: CoursesFocus,
) {
    let focused = fields.iter().any(|(_, _, f)| *f == focus);
    let block = panel_block(title, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    for (row, (label, field, field_focus)) in fields.iter().enumerate() {
        let row = row as u16;
        if row >= inner.height {
            break;
        }
        let placeholder = if *field_focus == CoursesFocus::UpdateGrades {
            "e.g. 70, 85.5, 100"
        } else {
            ""
        };
        render_field(
            frame,
            Rect::new(inner.x, inner.y + row, inner.width, 1),
            label,
            field,
            placeholder,
            *field_focus == focus,
        );
    }
}

fn render_course_list(state: &CoursesState, frame: &mut Frame, area: Rect) {
    let focused = state.focus == CoursesFocus::CourseList;
    let block = panel_block("Courses", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let dim = Style::default().fg(Color::DarkGray);
    let courses = match &state.list {
        Remote::Idle | Remote::Loading => {
            frame.render_widget(Paragraph::new(Span::styled("Loading course list...", dim)), inner);
            return;
        }
        Remote::Failed(error) => {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    format!("Loading failed: {error}"),
                    Style::default().fg(Color::Red),
                )),
                inner,
            );
            return;
        }
        Remote::Ready(courses) if courses.is_empty() => {
            frame.render_widget(Paragraph::new(Span::styled("No courses", dim)), inner);
            return;
        }
        Remote::Ready(courses) => courses,
    };

    let height = (inner.height as usize).max(1);
    let cursor = state.list_cursor.index();
    let offset = cursor.saturating_sub(height - 1);
    let max_width = (inner.width as usize).saturating_sub(4);
    let lines: Vec<Line> = courses
        .iter()
        .enumerate()
        .skip(offset)
        .take(height)
        .map(|(i, course)| {
            let under_cursor = focused && i == cursor;
            let marker = if under_cursor { "▶ " } else { "  " };
            let selected = state.is_selected(course.course_id());
            let style = match (under_cursor, selected) {
                (true, _) => Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                (false, true) => Style::default().fg(Color::Green),
                (false, false) => Style::default().fg(Color::White),
            };
            let bullet = if selected { "● " } else { "" };
            Line::from(vec![
                Span::styled(marker, style),
                Span::styled(
                    truncate_with_ellipsis(&format!("{bullet}{}", course_label(course)), max_width),
                    style,
                ),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_course_statistics(state: &CoursesState, frame: &mut Frame, area: Rect) {
    let title = match &state.selected {
        Some(course_id) => format!("Statistics - {course_id}"),
        None => "Course Statistics".to_string(),
    };
    let block = panel_block(&title, false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let dim = Style::default().fg(Color::DarkGray);
    let lines: Vec<Line> = match &state.statistics {
        Remote::Idle => vec![Line::from(Span::styled("Please select a course", dim))],
        Remote::Loading => vec![Line::from(Span::styled("Loading course statistics...", dim))],
        Remote::Failed(error) => vec![Line::from(Span::styled(
            format!("Loading failed: {error}"),
            Style::default().fg(Color::Red),
        ))],
        Remote::Ready(stats) => course_statistics_lines(stats)
            .into_iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(format!("{label}: "), dim),
                    Span::styled(value, Style::default().fg(Color::White)),
                ])
            })
            .collect(),
    };
    frame.render_widget(Paragraph::new(lines), inner);
}
