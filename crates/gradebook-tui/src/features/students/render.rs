use gradebook_core::view::CardScope;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::state::{StudentsFocus, StudentsState};
use crate::common::{ListText, panel_block, render_field, render_student_list};

const FORM_HEIGHT: u16 = 4;

const LIST_TEXT: ListText = ListText {
    idle: "Loading student list...",
    loading: "Loading student list...",
    empty: "No student data",
};

pub fn render_students(state: &StudentsState, frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(FORM_HEIGHT), Constraint::Min(3)])
        .split(area);
    let forms = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let focus = state.focus;

    let create_focused = focus == StudentsFocus::NewStudentId;
    let block = panel_block("Create Student", create_focused);
    let inner = block.inner(forms[0]);
    frame.render_widget(block, forms[0]);
    render_field(
        frame,
        Rect::new(inner.x, inner.y, inner.width, 1),
        "Student ID",
        &state.new_id,
        "e.g. S2024001, Enter to create",
        create_focused,
    );

    let grade_focused = matches!(
        focus,
        StudentsFocus::GradeStudentId | StudentsFocus::GradeValue
    );
    let block = panel_block("Add Grade", grade_focused);
    let inner = block.inner(forms[1]);
    frame.render_widget(block, forms[1]);
    render_field(
        frame,
        Rect::new(inner.x, inner.y, inner.width, 1),
        "Student ID",
        &state.grade_id,
        "",
        focus == StudentsFocus::GradeStudentId,
    );
    if inner.height > 1 {
        render_field(
            frame,
            Rect::new(inner.x, inner.y + 1, inner.width, 1),
            "Grade",
            &state.grade_value,
            "0-100, Enter to add",
            focus == StudentsFocus::GradeValue,
        );
    }

    render_student_list(
        frame,
        rows[1],
        "Students",
        &state.list,
        CardScope::Global,
        state.cursor,
        focus == StudentsFocus::List,
        &LIST_TEXT,
    );
}
