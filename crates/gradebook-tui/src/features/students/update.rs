//! Students feature reducer.
//!
//! Handles the create / add-grade forms, the student list, and the results of
//! student requests.

use crossterm::event::{KeyCode, KeyEvent};
use gradebook_core::validation::{parse_grade, required};
use gradebook_core::view::{format_number, grade_detail_view};

use super::state::{StudentsFocus, StudentsState};
use crate::common::Remote;
use crate::effects::UiEffect;
use crate::events::StudentUiEvent;
use crate::notices::NoticeState;
use crate::overlays::{ConfirmAction, OverlayRequest};

const ENTER_STUDENT_ID: &str = "Please enter Student ID";
const ENTER_GRADE: &str = "Please enter a grade";
const SELECT_STUDENT: &str = "Please select a student";

/// Handles a key while the students tab is active and no overlay is open.
pub fn handle_key(
    state: &mut StudentsState,
    notices: &mut NoticeState,
    key: KeyEvent,
) -> (Vec<UiEffect>, Option<OverlayRequest>) {
    match key.code {
        KeyCode::Tab => {
            state.focus = state.focus.next();
            return (vec![], None);
        }
        KeyCode::BackTab => {
            state.focus = state.focus.prev();
            return (vec![], None);
        }
        _ => {}
    }

    if state.focus == StudentsFocus::List {
        return handle_list_key(state, notices, key);
    }

    if key.code == KeyCode::Enter {
        let effects = if state.focus == StudentsFocus::NewStudentId {
            submit_create(state, notices)
        } else {
            submit_add_grade(state, notices)
        };
        return (effects, None);
    }

    if let Some(field) = state.focused_field_mut() {
        field.handle_key(key);
    }
    (vec![], None)
}

fn handle_list_key(
    state: &mut StudentsState,
    notices: &mut NoticeState,
    key: KeyEvent,
) -> (Vec<UiEffect>, Option<OverlayRequest>) {
    let len = state.list.ready().map_or(0, Vec::len);
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.cursor.move_up(),
        KeyCode::Down | KeyCode::Char('j') => state.cursor.move_down(len),
        KeyCode::Char('r') => return (vec![UiEffect::LoadStudents], None),
        KeyCode::Char('v') | KeyCode::Enter => {
            let Some(student) = state.selected() else {
                notices.error(SELECT_STUDENT);
                return (vec![], None);
            };
            return (view_grades(&student.student_id, notices), None);
        }
        KeyCode::Char('d') => {
            let Some(student) = state.selected() else {
                notices.error(SELECT_STUDENT);
                return (vec![], None);
            };
            let action = ConfirmAction::DeleteStudent {
                student_id: student.student_id.clone(),
            };
            return (vec![], Some(OverlayRequest::Confirm(action)));
        }
        _ => {}
    }
    (vec![], None)
}

fn submit_create(state: &StudentsState, notices: &mut NoticeState) -> Vec<UiEffect> {
    match required(state.new_id.value(), ENTER_STUDENT_ID) {
        Ok(student_id) => vec![UiEffect::CreateStudent {
            student_id: student_id.to_string(),
        }],
        Err(e) => {
            notices.error(e.to_string());
            vec![]
        }
    }
}

fn submit_add_grade(state: &StudentsState, notices: &mut NoticeState) -> Vec<UiEffect> {
    let validated = required(state.grade_id.value(), ENTER_STUDENT_ID).and_then(|student_id| {
        let token = required(state.grade_value.value(), ENTER_GRADE)?;
        Ok((student_id, parse_grade(token)?))
    });
    match validated {
        Ok((student_id, grade)) => vec![UiEffect::AddGrade {
            student_id: student_id.to_string(),
            grade,
        }],
        Err(e) => {
            notices.error(e.to_string());
            vec![]
        }
    }
}

fn view_grades(student_id: &str, notices: &mut NoticeState) -> Vec<UiEffect> {
    match required(student_id, ENTER_STUDENT_ID) {
        Ok(student_id) => vec![UiEffect::ViewGrades {
            student_id: student_id.to_string(),
        }],
        Err(e) => {
            notices.error(e.to_string());
            vec![]
        }
    }
}

/// Applies the result of a student request.
pub fn handle_student_event(
    state: &mut StudentsState,
    notices: &mut NoticeState,
    event: StudentUiEvent,
) -> (Vec<UiEffect>, Option<OverlayRequest>) {
    let effects = match event {
        StudentUiEvent::ListLoaded(result) => {
            if let Err(e) = &result {
                notices.error(format!("Failed to load student list: {e}"));
            }
            state.list = Remote::from(result);
            let len = state.list.ready().map_or(0, Vec::len);
            state.cursor.clamp(len);
            vec![]
        }
        StudentUiEvent::Created { student_id, result } => match result {
            Ok(()) => {
                notices.success(format!("Student {student_id} created successfully"));
                state.new_id.clear();
                vec![UiEffect::LoadStudents]
            }
            Err(e) => {
                notices.error(format!("Failed to create student: {e}"));
                vec![]
            }
        },
        StudentUiEvent::Deleted { student_id, result } => match result {
            Ok(()) => {
                notices.success(format!("Student {student_id} has been deleted"));
                vec![UiEffect::LoadStudents]
            }
            Err(e) => {
                notices.error(format!("Failed to delete student: {e}"));
                vec![]
            }
        },
        StudentUiEvent::GradeAdded {
            student_id,
            grade,
            result,
        } => match result {
            Ok(()) => {
                notices.success(format!(
                    "Grade {} added to student {student_id}",
                    format_number(Some(grade))
                ));
                state.grade_id.clear();
                state.grade_value.clear();
                vec![UiEffect::LoadStudents]
            }
            Err(e) => {
                notices.error(format!("Failed to add grade: {e}"));
                vec![]
            }
        },
        StudentUiEvent::GradesLoaded { student_id, result } => match result {
            Ok(detail) => {
                let view = grade_detail_view(&student_id, &detail);
                return (vec![], Some(OverlayRequest::Grades(view)));
            }
            Err(e) => {
                notices.error(format!("Failed to view grades: {e}"));
                vec![]
            }
        },
    };
    (effects, None)
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use gradebook_core::models::{GradeBreakdown, GradeDetail, Student, StudentStatistics};

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn last_notice(notices: &NoticeState) -> &str {
        notices
            .entries()
            .last()
            .map_or("", |notice| notice.message.as_str())
    }

    fn listed(ids: &[&str]) -> StudentsState {
        StudentsState {
            focus: StudentsFocus::List,
            list: Remote::Ready(ids.iter().map(|id| Student::new(*id)).collect()),
            ..StudentsState::default()
        }
    }

    #[test]
    fn test_create_requires_student_id() {
        let mut state = StudentsState::default();
        let mut notices = NoticeState::default();
        state.new_id.set("   ");

        let (effects, overlay) = handle_key(&mut state, &mut notices, key(KeyCode::Enter));

        assert!(effects.is_empty());
        assert!(overlay.is_none());
        assert_eq!(last_notice(&notices), "Please enter Student ID");
    }

    #[test]
    fn test_create_trims_and_emits_request() {
        let mut state = StudentsState::default();
        let mut notices = NoticeState::default();
        for c in " S1 ".chars() {
            handle_key(&mut state, &mut notices, key(KeyCode::Char(c)));
        }

        let (effects, _) = handle_key(&mut state, &mut notices, key(KeyCode::Enter));

        assert_eq!(
            effects,
            vec![UiEffect::CreateStudent {
                student_id: "S1".to_string()
            }]
        );
        assert!(!notices.is_visible());
    }

    #[test]
    fn test_add_grade_validation_messages() {
        let mut notices = NoticeState::default();
        let mut state = StudentsState {
            focus: StudentsFocus::GradeValue,
            ..StudentsState::default()
        };

        handle_key(&mut state, &mut notices, key(KeyCode::Enter));
        assert_eq!(last_notice(&notices), "Please enter Student ID");

        state.grade_id.set("S1");
        handle_key(&mut state, &mut notices, key(KeyCode::Enter));
        assert_eq!(last_notice(&notices), "Please enter a grade");

        state.grade_value.set("105");
        let (effects, _) = handle_key(&mut state, &mut notices, key(KeyCode::Enter));
        assert!(effects.is_empty());
        assert_eq!(last_notice(&notices), "Invalid grade value: 105");

        state.grade_value.set("88.5");
        let (effects, _) = handle_key(&mut state, &mut notices, key(KeyCode::Enter));
        assert_eq!(
            effects,
            vec![UiEffect::AddGrade {
                student_id: "S1".to_string(),
                grade: 88.5
            }]
        );
    }

    #[test]
    fn test_created_success_clears_and_reloads() {
        let mut state = StudentsState::default();
        let mut notices = NoticeState::default();
        state.new_id.set("S1");

        let (effects, _) = handle_student_event(
            &mut state,
            &mut notices,
            StudentUiEvent::Created {
                student_id: "S1".to_string(),
                result: Ok(()),
            },
        );

        assert_eq!(effects, vec![UiEffect::LoadStudents]);
        assert_eq!(state.new_id.value(), "");
        assert_eq!(last_notice(&notices), "Student S1 created successfully");
    }

    #[test]
    fn test_failed_delete_reports_error_text() {
        let mut state = listed(&["S1"]);
        let mut notices = NoticeState::default();

        let (effects, _) = handle_student_event(
            &mut state,
            &mut notices,
            StudentUiEvent::Deleted {
                student_id: "S1".to_string(),
                result: Err("HTTP error! status: 500".to_string()),
            },
        );

        assert!(effects.is_empty());
        assert_eq!(
            last_notice(&notices),
            "Failed to delete student: HTTP error! status: 500"
        );
    }

    #[test]
    fn test_grade_added_message_uses_natural_number() {
        let mut state = StudentsState::default();
        let mut notices = NoticeState::default();
        state.grade_id.set("S1");
        state.grade_value.set("90");

        let (effects, _) = handle_student_event(
            &mut state,
            &mut notices,
            StudentUiEvent::GradeAdded {
                student_id: "S1".to_string(),
                grade: 90.0,
                result: Ok(()),
            },
        );

        assert_eq!(effects, vec![UiEffect::LoadStudents]);
        assert_eq!(last_notice(&notices), "Grade 90 added to student S1");
        assert_eq!(state.grade_value.value(), "");
    }

    #[test]
    fn test_delete_key_asks_for_confirmation() {
        let mut state = listed(&["S1", "S2"]);
        let mut notices = NoticeState::default();
        handle_key(&mut state, &mut notices, key(KeyCode::Down));

        let (effects, overlay) = handle_key(&mut state, &mut notices, key(KeyCode::Char('d')));

        assert!(effects.is_empty());
        assert!(matches!(
            overlay,
            Some(OverlayRequest::Confirm(ConfirmAction::DeleteStudent { student_id })) if student_id == "S2"
        ));
    }

    #[test]
    fn test_view_grades_needs_a_selection() {
        let mut state = listed(&[]);
        let mut notices = NoticeState::default();

        let (effects, _) = handle_key(&mut state, &mut notices, key(KeyCode::Char('v')));

        assert!(effects.is_empty());
        assert_eq!(last_notice(&notices), "Please select a student");
    }

    #[test]
    fn test_grades_loaded_opens_overlay() {
        let mut state = StudentsState::default();
        let mut notices = NoticeState::default();
        let detail = GradeDetail {
            breakdown: GradeBreakdown::Flat(vec![75.0]),
            statistics: StudentStatistics::default(),
        };

        let (_, overlay) = handle_student_event(
            &mut state,
            &mut notices,
            StudentUiEvent::GradesLoaded {
                student_id: "S1".to_string(),
                result: Ok(detail),
            },
        );

        let Some(OverlayRequest::Grades(view)) = overlay else {
            panic!("expected grades overlay");
        };
        assert_eq!(view.title(), "Grades - S1");
    }

    #[test]
    fn test_failed_list_load_reports_error_text() {
        let mut state = StudentsState::default();
        let mut notices = NoticeState::default();

        handle_student_event(
            &mut state,
            &mut notices,
            StudentUiEvent::ListLoaded(Err("Request failed: connection refused".to_string())),
        );

        assert_eq!(
            state.list,
            Remote::Failed("Request failed: connection refused".to_string())
        );
        assert_eq!(
            last_notice(&notices),
            "Failed to load student list: Request failed: connection refused"
        );
    }
}
