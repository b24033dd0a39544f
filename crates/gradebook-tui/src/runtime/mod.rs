//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! - Every effect except `Quit` spawns one handler on the tokio runtime
//! - The handler sends its result `UiEvent` to `inbox_tx`
//! - The loop drains `inbox_rx` each iteration, alongside terminal input
//!
//! Nothing orders independent requests: whichever response arrives last wins.

mod handlers;
mod inbox;

use std::future::Future;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use gradebook_core::api::ApiClient;
use gradebook_core::config::Config;
use inbox::{UiEventReceiver, UiEventSender};
use tokio::sync::mpsc;
use tracing::debug;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::terminal::{self, Tui};
use crate::{render, update};

/// Tick interval while the user is interacting (~60fps).
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Tick interval when idle. Notice expiry runs on this cadence.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Full-screen TUI runtime.
///
/// Owns the terminal, the state, and the API client. Terminal state is
/// restored on drop and on panic.
pub struct TuiRuntime {
    terminal: Tui,
    pub state: AppState,
    client: ApiClient,
    /// Inbox sender - handlers send events here.
    inbox_tx: UiEventSender,
    /// Inbox receiver - runtime drains this each frame.
    inbox_rx: UiEventReceiver,
    last_tick: Instant,
    /// Last terminal event, for fast ticks during interaction.
    last_terminal_event: Instant,
}

impl TuiRuntime {
    pub fn new(client: ApiClient, config: &Config) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let state = AppState::new(client.base_url(), config.notice_timeout());
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        let now = Instant::now();
        Ok(Self {
            terminal,
            state,
            client,
            inbox_tx,
            inbox_rx,
            last_tick: now,
            last_terminal_event: now,
        })
    }

    /// Runs the main event loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        terminal::enable_input_features()?;

        let effects = update::init(&mut self.state);
        self.execute_effects(effects);
        let result = self.event_loop();

        let _ = terminal::disable_input_features();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true; // Start dirty to ensure initial render

        while !self.state.tui.should_quit {
            let events = self.collect_events()?;

            for event in events {
                if matches!(&event, UiEvent::Terminal(_)) {
                    self.last_terminal_event = Instant::now();
                }
                // Only Tick triggers render - this caps frame rate at tick cadence
                if matches!(&event, UiEvent::Tick) {
                    dirty = true;
                }

                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        let tick_interval = if self.last_terminal_event.elapsed() < IDLE_POLL_DURATION {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        // Block until the next tick unless there is already work queued.
        let poll_duration = if events.is_empty() {
            tick_interval.saturating_sub(self.last_tick.elapsed())
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns a handler and sends its result event to the inbox.
    fn spawn_effect<F, Fut>(&self, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(f().await);
        });
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        debug!(?effect, "execute effect");
        let client = self.client.clone();
        match effect {
            UiEffect::Quit => {
                self.state.tui.should_quit = true;
            }

            // Students
            UiEffect::LoadStudents => {
                self.spawn_effect(move || handlers::students_load(client));
            }
            UiEffect::CreateStudent { student_id } => {
                self.spawn_effect(move || handlers::student_create(client, student_id));
            }
            UiEffect::DeleteStudent { student_id } => {
                self.spawn_effect(move || handlers::student_delete(client, student_id));
            }
            UiEffect::AddGrade { student_id, grade } => {
                self.spawn_effect(move || handlers::grade_add(client, student_id, grade));
            }
            UiEffect::ViewGrades { student_id } => {
                self.spawn_effect(move || handlers::grades_load(client, student_id));
            }

            // Courses
            UiEffect::LoadCourses => {
                self.spawn_effect(move || handlers::courses_load(client));
            }
            UiEffect::CreateCourse {
                course_id,
                academic_year,
            } => {
                self.spawn_effect(move || handlers::course_create(client, course_id, academic_year));
            }
            UiEffect::DeleteCourse { course_id } => {
                self.spawn_effect(move || handlers::course_delete(client, course_id));
            }
            UiEffect::LoadCourseStudents { course_id } => {
                self.spawn_effect(move || handlers::course_students_load(client, course_id));
            }
            UiEffect::LoadCourseStatistics { course_id } => {
                self.spawn_effect(move || handlers::course_statistics_load(client, course_id));
            }
            UiEffect::EnrollStudent {
                course_id,
                student_id,
            } => {
                self.spawn_effect(move || handlers::course_enroll(client, course_id, student_id));
            }
            UiEffect::RemoveStudent {
                course_id,
                student_id,
            } => {
                self.spawn_effect(move || {
                    handlers::course_remove_student(client, course_id, student_id)
                });
            }
            UiEffect::UpdateCourseGrades {
                course_id,
                student_id,
                grades,
            } => {
                self.spawn_effect(move || {
                    handlers::course_grades_update(client, course_id, student_id, grades)
                });
            }

            // Statistics
            UiEffect::LoadStatistics => {
                self.spawn_effect(move || handlers::statistics_load(client));
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
