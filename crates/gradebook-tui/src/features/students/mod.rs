//! Students panel: create student, add grade, and the ranked student list.

mod render;
mod state;
mod update;

pub use render::render_students;
pub use state::{StudentsFocus, StudentsState};
pub use update::{handle_key, handle_student_event};
