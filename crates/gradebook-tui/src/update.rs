//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! This is the single source of truth for how events modify state.

use std::time::Instant;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::common::Remote;
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::overlays::{Overlay, OverlayRequest, OverlayTransition, OverlayUpdate};
use crate::state::{AppState, TuiState};
use crate::tabs::{Tab, tab_at};
use crate::{courses, statistics, students};

/// Effects for the first frame: both lists the opening screens need.
pub fn init(app: &mut AppState) -> Vec<UiEffect> {
    let effects = vec![UiEffect::LoadStudents, UiEffect::LoadCourses];
    mark_loading(&mut app.tui, &effects);
    effects
}

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    let effects = match event {
        UiEvent::Tick => {
            app.tui.notices.expire(Instant::now());
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::Student(event) => {
            let (effects, request) = students::handle_student_event(
                &mut app.tui.students,
                &mut app.tui.notices,
                event,
            );
            open_overlay(app, request);
            effects
        }
        UiEvent::Course(event) => {
            courses::handle_course_event(&mut app.tui.courses, &mut app.tui.notices, event)
        }
        UiEvent::Statistics(event) => statistics::handle_statistics_event(
            &mut app.tui.statistics,
            &mut app.tui.notices,
            event,
        ),
    };
    mark_loading(&mut app.tui, &effects);
    effects
}

/// Puts every panel an effect is about to refetch into its loading state.
fn mark_loading(tui: &mut TuiState, effects: &[UiEffect]) {
    for effect in effects {
        match effect {
            UiEffect::LoadStudents => tui.students.list = Remote::Loading,
            UiEffect::LoadCourses => tui.courses.list = Remote::Loading,
            UiEffect::LoadCourseStudents { .. } => tui.courses.students = Remote::Loading,
            UiEffect::LoadCourseStatistics { .. } => tui.courses.statistics = Remote::Loading,
            UiEffect::LoadStatistics => tui.statistics.snapshot = Remote::Loading,
            _ => {}
        }
    }
}

fn open_overlay(app: &mut AppState, request: Option<OverlayRequest>) {
    if let Some(request) = request {
        app.overlay = Some(Overlay::open(request));
    }
}

fn apply_overlay_update(app: &mut AppState, update: OverlayUpdate) -> Vec<UiEffect> {
    if matches!(update.transition, OverlayTransition::Close) {
        app.overlay = None;
    }
    update.effects
}

// ============================================================================
// Terminal input
// ============================================================================

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        Event::Paste(text) => {
            handle_paste(app, &text);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && matches!(key.code, KeyCode::Char('c' | 'q')) {
        return vec![UiEffect::Quit];
    }

    if let Some(overlay) = &mut app.overlay {
        let update = overlay.handle_key(key);
        return apply_overlay_update(app, update);
    }

    if let Some(tab) = Tab::from_key(key) {
        return app.tui.tabs.select(tab);
    }

    let tui = &mut app.tui;
    let (effects, request) = match tui.tabs.active() {
        Tab::Students => students::handle_key(&mut tui.students, &mut tui.notices, key),
        Tab::Courses => courses::handle_key(&mut tui.courses, &mut tui.notices, key),
        Tab::Statistics => (statistics::handle_key(key), None),
    };
    open_overlay(app, request);
    effects
}

fn handle_mouse(app: &mut AppState, mouse: MouseEvent) -> Vec<UiEffect> {
    if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
        return vec![];
    }

    if let Some(overlay) = &app.overlay {
        let update = overlay.handle_click(mouse.column, mouse.row);
        return apply_overlay_update(app, update);
    }

    match tab_at(app.tui.tab_area.get(), mouse.column, mouse.row) {
        Some(tab) => app.tui.tabs.select(tab),
        None => vec![],
    }
}

fn handle_paste(app: &mut AppState, text: &str) {
    if app.overlay.is_some() {
        return;
    }
    let field = match app.tui.tabs.active() {
        Tab::Students => app.tui.students.focused_field_mut(),
        Tab::Courses => app.tui.courses.focused_field_mut(),
        Tab::Statistics => None,
    };
    if let Some(field) = field {
        field.paste(text);
    }
}
