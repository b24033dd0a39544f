//! Courses feature reducer.

use crossterm::event::{KeyCode, KeyEvent};
use gradebook_core::validation::{InputError, parse_grade_list, required};

use super::state::{CoursesFocus, CoursesState};
use crate::common::{ListCursor, Remote};
use crate::effects::UiEffect;
use crate::events::CourseUiEvent;
use crate::notices::NoticeState;
use crate::overlays::{ConfirmAction, OverlayRequest};

const FILL_COURSE: &str = "Please fill in Course ID and Academic Year";
const SELECT_COURSE: &str = "Please select a course";
const ENTER_STUDENT_ID: &str = "Please enter Student ID";
const FILL_ALL: &str = "Please fill in all fields";

/// Handles a key while the courses tab is active and no overlay is open.
pub fn handle_key(
    state: &mut CoursesState,
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

    match state.focus {
        CoursesFocus::CourseList => return handle_course_list_key(state, key),
        CoursesFocus::CourseStudents => return (handle_roster_key(state, notices, key), None),
        _ => {}
    }

    if key.code == KeyCode::Enter {
        let effects = match state.focus {
            CoursesFocus::NewCourseId | CoursesFocus::NewAcademicYear => {
                submit_create(state, notices)
            }
            CoursesFocus::EnrollStudentId => submit_enroll(state, notices),
            _ => submit_update_grades(state, notices),
        };
        return (effects, None);
    }

    if let Some(field) = state.focused_field_mut() {
        field.handle_key(key);
    }
    (vec![], None)
}

fn handle_course_list_key(
    state: &mut CoursesState,
    key: KeyEvent,
) -> (Vec<UiEffect>, Option<OverlayRequest>) {
    let len = state.list.ready().map_or(0, Vec::len);
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.list_cursor.move_up(),
        KeyCode::Down | KeyCode::Char('j') => state.list_cursor.move_down(len),
        KeyCode::Char('r') => return (vec![UiEffect::LoadCourses], None),
        KeyCode::Enter | KeyCode::Char(' ') => {
            let Some(course_id) = state.course_under_cursor().map(|c| c.course_id().to_string())
            else {
                return (vec![], None);
            };
            return (select_course(state, course_id), None);
        }
        KeyCode::Char('d') => {
            if let Some(course) = state.course_under_cursor() {
                let action = ConfirmAction::DeleteCourse {
                    course_id: course.course_id().to_string(),
                };
                return (vec![], Some(OverlayRequest::Confirm(action)));
            }
        }
        _ => {}
    }
    (vec![], None)
}

fn handle_roster_key(
    state: &mut CoursesState,
    notices: &mut NoticeState,
    key: KeyEvent,
) -> Vec<UiEffect> {
    let len = state.students.ready().map_or(0, Vec::len);
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.students_cursor.move_up(),
        KeyCode::Down | KeyCode::Char('j') => state.students_cursor.move_down(len),
        KeyCode::Char('r') => {
            let Some(course_id) = state.selected.clone() else {
                notices.error(SELECT_COURSE);
                return vec![];
            };
            if let Some(student) = state.student_under_cursor() {
                return vec![UiEffect::RemoveStudent {
                    course_id,
                    student_id: student.student_id.clone(),
                }];
            }
        }
        _ => {}
    }
    vec![]
}

/// Makes `course_id` the selected course and loads its roster and statistics.
fn select_course(state: &mut CoursesState, course_id: String) -> Vec<UiEffect> {
    if !state.is_selected(&course_id) {
        state.students_cursor = ListCursor::default();
    }
    state.update_course_id.set(course_id.clone());
    state.selected = Some(course_id);
    reload_selected(state)
}

/// Reloads the selected course's roster and statistics.
///
/// With no selection the roster falls back to its placeholder and nothing is
/// requested.
fn reload_selected(state: &mut CoursesState) -> Vec<UiEffect> {
    match &state.selected {
        Some(course_id) => vec![
            UiEffect::LoadCourseStudents {
                course_id: course_id.clone(),
            },
            UiEffect::LoadCourseStatistics {
                course_id: course_id.clone(),
            },
        ],
        None => {
            state.clear_selection();
            vec![]
        }
    }
}

fn submit_create(state: &CoursesState, notices: &mut NoticeState) -> Vec<UiEffect> {
    let validated = required(state.new_course_id.value(), FILL_COURSE).and_then(|course_id| {
        Ok((
            course_id,
            required(state.new_academic_year.value(), FILL_COURSE)?,
        ))
    });
    match validated {
        Ok((course_id, academic_year)) => vec![UiEffect::CreateCourse {
            course_id: course_id.to_string(),
            academic_year: academic_year.to_string(),
        }],
        Err(e) => {
            notices.error(e.to_string());
            vec![]
        }
    }
}

fn submit_enroll(state: &CoursesState, notices: &mut NoticeState) -> Vec<UiEffect> {
    let Some(course_id) = state.selected.as_deref() else {
        notices.error(SELECT_COURSE);
        return vec![];
    };
    match required(state.enroll_student_id.value(), ENTER_STUDENT_ID) {
        Ok(student_id) => vec![UiEffect::EnrollStudent {
            course_id: course_id.to_string(),
            student_id: student_id.to_string(),
        }],
        Err(e) => {
            notices.error(e.to_string());
            vec![]
        }
    }
}

fn submit_update_grades(state: &CoursesState, notices: &mut NoticeState) -> Vec<UiEffect> {
    match validate_update_grades(state) {
        Ok(effect) => vec![effect],
        Err(e) => {
            notices.error(e.to_string());
            vec![]
        }
    }
}

fn validate_update_grades(state: &CoursesState) -> Result<UiEffect, InputError> {
    let course_id = required(state.update_course_id.value(), FILL_ALL)?;
    let student_id = required(state.update_student_id.value(), FILL_ALL)?;
    let grades = parse_grade_list(required(state.update_grades.value(), FILL_ALL)?)?;
    Ok(UiEffect::UpdateCourseGrades {
        course_id: course_id.to_string(),
        student_id: student_id.to_string(),
        grades,
    })
}

/// Applies the result of a course request.
pub fn handle_course_event(
    state: &mut CoursesState,
    notices: &mut NoticeState,
    event: CourseUiEvent,
) -> Vec<UiEffect> {
    match event {
        CourseUiEvent::ListLoaded(result) => {
            if let Err(e) = &result {
                notices.error(format!("Failed to load course list: {e}"));
            }
            state.list = Remote::from(result);
            let len = state.list.ready().map_or(0, Vec::len);
            state.list_cursor.clamp(len);
            vec![]
        }
        CourseUiEvent::Created { course_id, result } => match result {
            Ok(()) => {
                notices.success(format!("Course {course_id} created successfully"));
                state.new_course_id.clear();
                state.new_academic_year.clear();
                vec![UiEffect::LoadCourses]
            }
            Err(e) => {
                notices.error(format!("Failed to create course: {e}"));
                vec![]
            }
        },
        CourseUiEvent::Deleted { course_id, result } => match result {
            Ok(()) => {
                notices.success(format!("Course {course_id} has been deleted"));
                if state.is_selected(&course_id) {
                    state.clear_selection();
                }
                if state.update_course_id.value().trim() == course_id {
                    state.update_course_id.clear();
                }
                vec![UiEffect::LoadCourses, UiEffect::LoadStatistics]
            }
            Err(e) => {
                notices.error(format!("Failed to delete course: {e}"));
                vec![]
            }
        },
        CourseUiEvent::StudentsLoaded { course_id, result } => {
            // A response for a course that is no longer selected is stale.
            if !state.is_selected(&course_id) {
                return vec![];
            }
            if let Err(e) = &result {
                notices.error(format!("Failed to load course student list: {e}"));
            }
            state.students = Remote::from(result);
            let len = state.students.ready().map_or(0, Vec::len);
            state.students_cursor.clamp(len);
            vec![]
        }
        CourseUiEvent::StatisticsLoaded { course_id, result } => {
            if !state.is_selected(&course_id) {
                return vec![];
            }
            if let Err(e) = &result {
                notices.error(format!("Failed to load course statistics: {e}"));
            }
            state.statistics = Remote::from(result);
            vec![]
        }
        CourseUiEvent::StudentEnrolled {
            course_id,
            student_id,
            result,
        } => match result {
            Ok(()) => {
                notices.success(format!(
                    "Student {student_id} has been added to course {course_id}"
                ));
                state.enroll_student_id.clear();
                let mut effects = reload_selected(state);
                effects.push(UiEffect::LoadCourses);
                effects
            }
            Err(e) => {
                notices.error(format!("Failed to add student to course: {e}"));
                vec![]
            }
        },
        CourseUiEvent::StudentRemoved {
            course_id,
            student_id,
            result,
        } => match result {
            Ok(()) => {
                notices.success(format!(
                    "Student {student_id} has been removed from course {course_id}"
                ));
                let mut effects = reload_selected(state);
                effects.push(UiEffect::LoadCourses);
                effects
            }
            Err(e) => {
                notices.error(format!("Failed to remove student from course: {e}"));
                vec![]
            }
        },
        CourseUiEvent::GradesUpdated {
            student_id, result, ..
        } => match result {
            Ok(()) => {
                notices.success(format!("Student {student_id}'s grades have been updated"));
                state.update_course_id.clear();
                state.update_student_id.clear();
                state.update_grades.clear();
                let mut effects = reload_selected(state);
                effects.push(UiEffect::LoadStudents);
                effects
            }
            Err(e) => {
                notices.error(format!("Failed to update grades: {e}"));
                vec![]
            }
        },
    }
}
