//! Notice region: transient messages stacked under the active panel.
//!
//! Entries expire on their own; the region takes no rows when empty.

mod render;
mod state;

pub use render::render_notices;
pub use state::{Notice, NoticeState, Severity};
