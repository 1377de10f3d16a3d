// src/ui/systems.rs
use bevy::prelude::*;

use crate::document::events::DocumentOperationFeedback;
use crate::ui::UiFeedbackState;

/// Folds feedback events into the UI feedback line. The first success in a
/// batch wins over later errors so a completed operation is not hidden by a
/// stale rejection; errors are logged either way.
pub fn handle_ui_feedback(
    mut feedback_events: EventReader<DocumentOperationFeedback>,
    mut ui_feedback_state: ResMut<UiFeedbackState>,
) {
    let mut last_message = None;
    for event in feedback_events.read() {
        last_message = Some((event.message.clone(), event.is_error));
        if !event.is_error {
            break;
        }
    }
    if let Some((msg, is_error)) = last_message {
        ui_feedback_state.last_message = msg;
        ui_feedback_state.is_error = is_error;
        if is_error {
            warn!("UI Feedback (Error): {}", ui_feedback_state.last_message);
        } else {
            info!("UI Feedback: {}", ui_feedback_state.last_message);
        }
    }
}
