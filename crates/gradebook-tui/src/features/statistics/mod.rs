//! Statistics panel: system-wide course figures and backend health.

mod render;

use crossterm::event::{KeyCode, KeyEvent};
use gradebook_core::models::StatisticsSnapshot;
pub use render::render_statistics;

use crate::common::Remote;
use crate::effects::UiEffect;
use crate::events::StatisticsUiEvent;
use crate::notices::NoticeState;

#[derive(Debug, Clone, Default)]
pub struct StatisticsState {
    pub snapshot: Remote<StatisticsSnapshot>,
}

pub fn handle_key(key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Char('r') => vec![UiEffect::LoadStatistics],
        _ => vec![],
    }
}

pub fn handle_statistics_event(
    state: &mut StatisticsState,
    notices: &mut NoticeState,
    event: StatisticsUiEvent,
) -> Vec<UiEffect> {
    match event {
        StatisticsUiEvent::Loaded(result) => {
            if let Err(e) = &result {
                notices.error(format!("Failed to load statistics: {e}"));
            }
            state.snapshot = Remote::from(result);
            vec![]
        }
    }
}
