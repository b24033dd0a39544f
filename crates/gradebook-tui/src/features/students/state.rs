//! Students panel state.

use gradebook_core::models::Student;

use crate::common::{ListCursor, Remote, TextField};

/// Which part of the panel receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StudentsFocus {
    #[default]
    NewStudentId,
    GradeStudentId,
    GradeValue,
    List,
}

impl StudentsFocus {
    const ORDER: [StudentsFocus; 4] = [
        StudentsFocus::NewStudentId,
        StudentsFocus::GradeStudentId,
        StudentsFocus::GradeValue,
        StudentsFocus::List,
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
pub struct StudentsState {
    pub focus: StudentsFocus,
    /// "Create student" form.
    pub new_id: TextField,
    /// "Add grade" form.
    pub grade_id: TextField,
    pub grade_value: TextField,
    pub list: Remote<Vec<Student>>,
    pub cursor: ListCursor,
}

impl StudentsState {
    pub fn selected(&self) -> Option<&Student> {
        self.list
            .ready()
            .and_then(|students| self.cursor.current(students))
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut TextField> {
        match self.focus {
            StudentsFocus::NewStudentId => Some(&mut self.new_id),
            StudentsFocus::GradeStudentId => Some(&mut self.grade_id),
            StudentsFocus::GradeValue => Some(&mut self.grade_value),
            StudentsFocus::List => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles_both_ways() {
        let focus = StudentsFocus::default();
        assert_eq!(focus.prev(), StudentsFocus::List);
        assert_eq!(focus.next().next().next().next(), focus);
    }
}
