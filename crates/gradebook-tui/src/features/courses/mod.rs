//! Courses panel: course list and selection, roster management, per-course
//! statistics, and bulk grade replacement.

mod render;
mod state;
mod update;

pub use render::render_courses;
pub use state::{CoursesFocus, CoursesState};
pub use update::{handle_course_event, handle_key};
