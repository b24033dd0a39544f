//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! Every variant except `Quit` is one backend call; the handler's result
//! comes back as a `UiEvent` through the inbox.

#[derive(Debug, Clone, PartialEq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    // Students
    LoadStudents,
    CreateStudent {
        student_id: String,
    },
    DeleteStudent {
        student_id: String,
    },
    AddGrade {
        student_id: String,
        grade: f64,
    },
    ViewGrades {
        student_id: String,
    },

    // Courses
    LoadCourses,
    CreateCourse {
        course_id: String,
        academic_year: String,
    },
    /// Cascades to the course's grade and enrollment records.
    DeleteCourse {
        course_id: String,
    },
    LoadCourseStudents {
        course_id: String,
    },
    LoadCourseStatistics {
        course_id: String,
    },
    EnrollStudent {
        course_id: String,
        student_id: String,
    },
    RemoveStudent {
        course_id: String,
        student_id: String,
    },
    UpdateCourseGrades {
        course_id: String,
        student_id: String,
        grades: Vec<f64>,
    },

    // Statistics
    LoadStatistics,
}
