//! Courses panel state.

use gradebook_core::models::{CourseStatistics, CourseSummary, Student};

use crate::common::{ListCursor, Remote, TextField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoursesFocus {
    #[default]
    NewCourseId,
    NewAcademicYear,
    CourseList,
    EnrollStudentId,
    CourseStudents,
    UpdateCourseId,
    UpdateStudentId,
    UpdateGrades,
}

impl CoursesFocus {
    const ORDER: [CoursesFocus; 8] = [
        CoursesFocus::NewCourseId,
        CoursesFocus::NewAcademicYear,
        CoursesFocus::CourseList,
        CoursesFocus::EnrollStudentId,
        CoursesFocus::CourseStudents,
        CoursesFocus::UpdateCourseId,
        CoursesFocus::UpdateStudentId,
        CoursesFocus::UpdateGrades,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[derive(Debug, Clone, Default)]
pub struct CoursesState {
    pub focus: CoursesFocus,

    // "Create course" form
    pub new_course_id: TextField,
    pub new_academic_year: TextField,

    pub list: Remote<Vec<CourseSummary>>,
    pub list_cursor: ListCursor,
    /// Course whose roster and statistics are shown.
    pub selected: Option<String>,

    pub enroll_student_id: TextField,
    pub students: Remote<Vec<Student>>,
    pub students_cursor: ListCursor,
    pub statistics: Remote<CourseStatistics>,

    // "Update grades" form
    pub update_course_id: TextField,
    pub update_student_id: TextField,
    pub update_grades: TextField,
}

impl CoursesState {
    pub fn is_selected(&self, course_id: &str) -> bool {
        self.selected.as_deref() == Some(course_id)
    }

    pub fn course_under_cursor(&self) -> Option<&CourseSummary> {
        self.list
            .ready()
            .and_then(|courses| self.list_cursor.current(courses))
    }

    pub fn student_under_cursor(&self) -> Option<&Student> {
        self.students
            .ready()
            .and_then(|students| self.students_cursor.current(students))
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut TextField> {
        match self.focus {
            CoursesFocus::NewCourseId => Some(&mut self.new_course_id),
            CoursesFocus::NewAcademicYear => Some(&mut self.new_academic_year),
            CoursesFocus::EnrollStudentId => Some(&mut self.enroll_student_id),
            CoursesFocus::UpdateCourseId => Some(&mut self.update_course_id),
            CoursesFocus::UpdateStudentId => Some(&mut self.update_student_id),
            CoursesFocus::UpdateGrades => Some(&mut self.update_grades),
            CoursesFocus::CourseList | CoursesFocus::CourseStudents => None,
        }
    }

    /// Drops the selection and everything loaded for it.
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.students = Remote::Idle;
        self.students_cursor = ListCursor::default();
        self.statistics = Remote::Idle;
    }
}
