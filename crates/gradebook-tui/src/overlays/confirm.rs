//! Yes/no confirmation before destructive requests.

use crossterm::event::{KeyCode, KeyEvent};
use gradebook_core::view::{delete_course_prompt, delete_student_prompt};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};

use super::OverlayUpdate;
use crate::effects::UiEffect;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteStudent { student_id: String },
    DeleteCourse { course_id: String },
}

impl ConfirmAction {
    fn prompt(&self) -> Vec<String> {
        match self {
            ConfirmAction::DeleteStudent { student_id } => delete_student_prompt(student_id),
            ConfirmAction::DeleteCourse { course_id } => delete_course_prompt(course_id),
        }
    }

    fn effect(&self) -> UiEffect {
        match self {
            ConfirmAction::DeleteStudent { student_id } => UiEffect::DeleteStudent {
                student_id: student_id.clone(),
            },
            ConfirmAction::DeleteCourse { course_id } => UiEffect::DeleteCourse {
                course_id: course_id.clone(),
            },
        }
    }
}

#[derive(Debug)]
pub struct ConfirmState {
    pub action: ConfirmAction,
}

impl ConfirmState {
    pub fn open(action: ConfirmAction) -> Self {
        Self { action }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        match key.code {
            KeyCode::Char('y' | 'Y') | KeyCode::Enter => {
                OverlayUpdate::close().with_ui_effects(vec![self.action.effect()])
            }
            KeyCode::Char('n' | 'N') | KeyCode::Esc => OverlayUpdate::close(),
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        use super::render_utils::{InputHint, OverlayConfig, render_overlay};

        let prompt = self.action.prompt();
        let hints = [InputHint::new("y", "confirm"), InputHint::new("n", "cancel")];
        let layout = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: "Confirm",
                border_color: Color::Yellow,
                width: 56,
                height: prompt.len() as u16 + 4,
                hints: &hints,
            },
        );

        let lines: Vec<Line> = prompt
            .into_iter()
            .map(|text| Line::styled(text, Style::default().fg(Color::White)))
            .collect();
        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: false }),
            layout.body,
        );
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::overlays::OverlayTransition;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_confirm_emits_delete() {
        let mut state = ConfirmState::open(ConfirmAction::DeleteCourse {
            course_id: "CS101".to_string(),
        });
        let update = state.handle_key(key(KeyCode::Char('y')));
        assert!(matches!(update.transition, OverlayTransition::Close));
        assert_eq!(
            update.effects,
            vec![UiEffect::DeleteCourse {
                course_id: "CS101".to_string()
            }]
        );
    }

    #[test]
    fn test_cancel_emits_nothing() {
        let mut state = ConfirmState::open(ConfirmAction::DeleteStudent {
            student_id: "S1".to_string(),
        });
        let update = state.handle_key(key(KeyCode::Esc));
        assert!(matches!(update.transition, OverlayTransition::Close));
        assert!(update.effects.is_empty());

        let update = state.handle_key(key(KeyCode::Char('x')));
        assert!(matches!(update.transition, OverlayTransition::Stay));
    }

    #[test]
    fn test_course_prompt_names_cascade() {
        let action = ConfirmAction::DeleteCourse {
            course_id: "CS101".to_string(),
        };
        let prompt = action.prompt().join("\n");
        assert!(prompt.contains("Delete course CS101?"));
        assert!(prompt.contains("grade records"));
        assert!(prompt.contains("enrollment records"));
    }
}
