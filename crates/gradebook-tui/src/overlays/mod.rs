//! Overlay modules for the TUI.
//!
//! Overlays are modal UI components that temporarily take over keyboard input.
//! Each overlay is self-contained: it owns its state, key handler, and render function.
//!
//! ## Module Structure
//!
//! - `grades.rs`: Grade detail for one student
//! - `confirm.rs`: Yes/no prompt before deleting a student or course
//! - `render_utils.rs`: Shared rendering utilities for overlays

pub mod confirm;
pub mod grades;
pub mod render_utils;

pub use confirm::{ConfirmAction, ConfirmState};
use crossterm::event::KeyEvent;
use gradebook_core::view::GradeDetailView;
pub use grades::GradesState;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::effects::UiEffect;

// ============================================================================
// OverlayRequest / OverlayTransition / OverlayUpdate
// ============================================================================

/// Requests to open a new overlay, returned by feature reducers.
#[derive(Debug)]
pub enum OverlayRequest {
    Grades(GradeDetailView),
    Confirm(ConfirmAction),
}

/// Transition returned by overlay key handlers.
#[derive(Debug)]
pub enum OverlayTransition {
    Stay,
    Close,
}

/// Update returned by overlay key handlers.
#[derive(Debug)]
pub struct OverlayUpdate {
    pub transition: OverlayTransition,
    pub effects: Vec<UiEffect>,
}

impl OverlayUpdate {
    fn new(transition: OverlayTransition) -> Self {
        Self {
            transition,
            effects: Vec::new(),
        }
    }

    pub fn stay() -> Self {
        Self::new(OverlayTransition::Stay)
    }

    pub fn close() -> Self {
        Self::new(OverlayTransition::Close)
    }

    #[must_use]
    pub fn with_ui_effects(mut self, effects: Vec<UiEffect>) -> Self {
        self.effects = effects;
        self
    }
}

// ============================================================================
// Overlay
// ============================================================================

#[derive(Debug)]
pub enum Overlay {
    Grades(GradesState),
    Confirm(ConfirmState),
}

impl Overlay {
    pub fn open(request: OverlayRequest) -> Self {
        match request {
            OverlayRequest::Grades(view) => Overlay::Grades(GradesState::open(view)),
            OverlayRequest::Confirm(action) => Overlay::Confirm(ConfirmState::open(action)),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        match self {
            Overlay::Grades(g) => g.render(frame, area),
            Overlay::Confirm(c) => c.render(frame, area),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        match self {
            Overlay::Grades(g) => g.handle_key(key),
            Overlay::Confirm(c) => c.handle_key(key),
        }
    }

    /// Left click at `(column, row)` while the overlay is open.
    pub fn handle_click(&self, column: u16, row: u16) -> OverlayUpdate {
        match self {
            Overlay::Grades(g) => g.handle_click(column, row),
            Overlay::Confirm(_) => OverlayUpdate::stay(),
        }
    }
}

// ============================================================================
// OverlayExt - Extension trait for Option<Overlay>
// ============================================================================

/// Extension trait for `Option<Overlay>` providing convenience render helpers.
pub trait OverlayExt {
    /// Renders the overlay if one is active.
    fn render(&self, frame: &mut Frame, area: Rect);
}

impl OverlayExt for Option<Overlay> {
    fn render(&self, frame: &mut Frame, area: Rect) {
        if let Some(overlay) = self {
            overlay.render(frame, area);
        }
    }
}
