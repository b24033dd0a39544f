//! UI events consumed by the reducer.
//!
//! Terminal input and ticks come from the runtime loop; everything else is
//! the result of an effect handler arriving through the inbox. Handler
//! results carry errors as display text so the reducer never sees I/O types.

use gradebook_core::models::{
    CourseStatistics, CourseSummary, GradeDetail, StatisticsSnapshot, Student,
};

pub type HandlerResult<T> = Result<T, String>;

#[derive(Debug)]
pub enum UiEvent {
    /// Periodic heartbeat; drives notice expiry and triggers a redraw.
    Tick,
    Terminal(crossterm::event::Event),
    Student(StudentUiEvent),
    Course(CourseUiEvent),
    Statistics(StatisticsUiEvent),
}

#[derive(Debug)]
pub enum StudentUiEvent {
    ListLoaded(HandlerResult<Vec<Student>>),
    Created {
        student_id: String,
        result: HandlerResult<()>,
    },
    Deleted {
        student_id: String,
        result: HandlerResult<()>,
    },
    GradeAdded {
        student_id: String,
        grade: f64,
        result: HandlerResult<()>,
    },
    GradesLoaded {
        student_id: String,
        result: HandlerResult<GradeDetail>,
    },
}

#[derive(Debug)]
pub enum CourseUiEvent {
    ListLoaded(HandlerResult<Vec<CourseSummary>>),
    Created {
        course_id: String,
        result: HandlerResult<()>,
    },
    Deleted {
        course_id: String,
        result: HandlerResult<()>,
    },
    StudentsLoaded {
        course_id: String,
        result: HandlerResult<Vec<Student>>,
    },
    StatisticsLoaded {
        course_id: String,
        result: HandlerResult<CourseStatistics>,
    },
    StudentEnrolled {
        course_id: String,
        student_id: String,
        result: HandlerResult<()>,
    },
    StudentRemoved {
        course_id: String,
        student_id: String,
        result: HandlerResult<()>,
    },
    GradesUpdated {
        course_id: String,
        student_id: String,
        result: HandlerResult<()>,
    },
}

#[derive(Debug)]
pub enum StatisticsUiEvent {
    Loaded(HandlerResult<StatisticsSnapshot>),
}
