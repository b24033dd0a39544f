//! Shared helpers used by several feature slices.

mod cards;
mod field;
mod list;
mod remote;
pub mod text;

pub use cards::{ListText, panel_block, render_student_list};
pub use field::{TextField, render_field};
pub use list::ListCursor;
pub use remote::Remote;
pub use text::truncate_with_ellipsis;
