//! Application state composition.
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── tabs: TabState           (active tab)
//! │   ├── notices: NoticeState     (transient messages)
//! │   ├── students: StudentsState  (forms + student list)
//! │   ├── courses: CoursesState    (forms, course list, selection, roster)
//! │   └── statistics: StatisticsState
//! └── overlay: Option<Overlay>     (grade detail, confirmations)
//! ```
//!
//! State is split between `TuiState` and `Option<Overlay>` so overlay handlers
//! can take `&mut self` while the reducer still owns the rest.

use std::cell::Cell;
use std::time::Duration;

use ratatui::layout::Rect;

use crate::courses::CoursesState;
use crate::notices::NoticeState;
use crate::overlays::Overlay;
use crate::statistics::StatisticsState;
use crate::students::StudentsState;
use crate::tabs::TabState;

// ============================================================================
// AppState (Combined State)
// ============================================================================

pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    pub fn new(api_base: impl Into<String>, notice_timeout: Duration) -> Self {
        Self {
            tui: TuiState::new(api_base.into(), notice_timeout),
            overlay: None,
        }
    }
}

// ============================================================================
// TuiState
// ============================================================================

pub struct TuiState {
    pub should_quit: bool,
    pub tabs: TabState,
    pub notices: NoticeState,
    pub students: StudentsState,
    pub courses: CoursesState,
    pub statistics: StatisticsState,
    /// Shown in the status line.
    pub api_base: String,
    /// Tab bar area from the last render, for mouse hit-testing.
    pub tab_area: Cell<Rect>,
}

impl TuiState {
    pub fn new(api_base: String, notice_timeout: Duration) -> Self {
        Self {
            should_quit: false,
            tabs: TabState::default(),
            notices: NoticeState::new(notice_timeout),
            students: StudentsState::default(),
            courses: CoursesState::default(),
            statistics: StatisticsState::default(),
            api_base,
            tab_area: Cell::new(Rect::default()),
        }
    }
}
