//! Feature slices for the TUI (state/update/render per slice).

pub mod courses;
pub mod notices;
pub mod statistics;
pub mod students;
pub mod tabs;
