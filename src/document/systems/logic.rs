// src/document/systems/logic.rs
use bevy::prelude::*;

use super::io::save::save_default_document;
use crate::document::events::{
    DocumentOperationFeedback, RequestRestoreDefault, RequestSaveAsDefault,
    UpdateMetaFieldEvent, UpdateRowFieldEvent,
};
use crate::document::resources::DocumentState;

/// Replaces the live state with the in-memory default snapshot. This path is
/// synchronous and performs no IO — it is the "instant restore" the UI
/// advertises.
pub fn handle_restore_request(
    mut events: EventReader<RequestRestoreDefault>,
    mut doc: ResMut<DocumentState>,
    mut feedback_writer: EventWriter<DocumentOperationFeedback>,
) {
    if events.is_empty() {
        return;
    }
    events.clear();

    doc.restore_default();
    info!("Restored default working state ({} rows).", doc.rows.len());
    feedback_writer.write(DocumentOperationFeedback {
        message: "已恢复默认工作状态。".to_string(),
        is_error: false,
    });
}

/// Adopts the live state as the new default snapshot and persists it. The
/// in-memory snapshot is kept even when the durable write fails; the user is
/// warned in that case.
pub fn handle_save_as_default(
    mut events: EventReader<RequestSaveAsDefault>,
    mut doc: ResMut<DocumentState>,
    mut feedback_writer: EventWriter<DocumentOperationFeedback>,
) {
    if events.is_empty() {
        return;
    }
    events.clear();

    doc.adopt_live_as_default();
    match save_default_document(doc.default_rows(), doc.default_meta()) {
        Ok(()) => {
            feedback_writer.write(DocumentOperationFeedback {
                message: format!(
                    "设置成功！当前状态已于 {} 保存为默认恢复状态。",
                    chrono::Local::now().format("%H:%M:%S")
                ),
                is_error: false,
            });
        }
        Err(e) => {
            error!("Failed to persist default document: {}", e);
            feedback_writer.write(DocumentOperationFeedback {
                message: "默认状态已在内存中更新，但写入磁盘失败。".to_string(),
                is_error: true,
            });
        }
    }
}

/// Applies single-field row edits by id. Last write wins; an unknown id is
/// rejected with feedback and no state change.
pub fn handle_row_field_update(
    mut events: EventReader<UpdateRowFieldEvent>,
    mut doc: ResMut<DocumentState>,
    mut feedback_writer: EventWriter<DocumentOperationFeedback>,
) {
    for event in events.read() {
        match doc.row_mut(event.row_id) {
            Some(row) => {
                if event.field.get(row) != event.new_value {
                    event.field.apply(row, &event.new_value);
                    trace!(
                        "Updated row {} field '{}' ({} chars).",
                        event.row_id,
                        event.field,
                        event.new_value.chars().count()
                    );
                } else {
                    trace!(
                        "Row {} field '{}' unchanged. Skipping update.",
                        event.row_id,
                        event.field
                    );
                }
            }
            None => {
                warn!("Row update rejected: id {} not found.", event.row_id);
                feedback_writer.write(DocumentOperationFeedback {
                    message: format!("未找到编号为 {} 的行。", event.row_id),
                    is_error: true,
                });
            }
        }
    }
}

/// Applies single-field metadata edits.
pub fn handle_meta_field_update(
    mut events: EventReader<UpdateMetaFieldEvent>,
    mut doc: ResMut<DocumentState>,
) {
    for event in events.read() {
        if event.field.get(&doc.meta) != event.new_value {
            event.field.apply(&mut doc.meta, &event.new_value);
            trace!("Updated document meta field '{}'.", event.field);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::definitions::{DocumentMeta, MetaField, RowField, TableRow};
    use bevy::app::App;

    fn row(id: u32) -> TableRow {
        TableRow {
            id,
            serial_number: id,
            clause_number: format!("4.{}", id),
            opinion_content: format!("意见{}", id),
            modification_suggestion: format!("建议{}", id),
            proposing_unit: "某单位".to_string(),
            handling_opinion: "采纳".to_string(),
            remarks: String::new(),
        }
    }

    fn test_app() -> App {
        let mut app = App::new();
        app.add_event::<RequestRestoreDefault>()
            .add_event::<UpdateRowFieldEvent>()
            .add_event::<UpdateMetaFieldEvent>()
            .add_event::<DocumentOperationFeedback>();

        let mut doc = DocumentState::default();
        doc.seed((1..=10).map(row).collect(), DocumentMeta::default());
        app.insert_resource(doc);

        app.add_systems(
            Update,
            (
                handle_restore_request,
                handle_row_field_update,
                handle_meta_field_update,
            ),
        );
        app
    }

    fn drain_feedback(app: &mut App) -> Vec<DocumentOperationFeedback> {
        app.world_mut()
            .resource_mut::<Events<DocumentOperationFeedback>>()
            .drain()
            .collect()
    }

    #[test]
    fn row_update_event_changes_exactly_one_field() {
        let mut app = test_app();
        let before = app.world().resource::<DocumentState>().rows.clone();

        app.world_mut().send_event(UpdateRowFieldEvent {
            row_id: 3,
            field: RowField::ModificationSuggestion,
            new_value: "新的建议".to_string(),
        });
        app.update();

        let doc = app.world().resource::<DocumentState>();
        for (old, new) in before.iter().zip(doc.rows.iter()) {
            if old.id == 3 {
                assert_eq!(new.modification_suggestion, "新的建议");
            } else {
                assert_eq!(old, new);
            }
        }
        assert!(drain_feedback(&mut app).is_empty());
    }

    #[test]
    fn unknown_row_id_is_rejected_with_feedback() {
        let mut app = test_app();
        let before = app.world().resource::<DocumentState>().rows.clone();

        app.world_mut().send_event(UpdateRowFieldEvent {
            row_id: 99,
            field: RowField::Remarks,
            new_value: "x".to_string(),
        });
        app.update();

        assert_eq!(app.world().resource::<DocumentState>().rows, before);
        let feedback = drain_feedback(&mut app);
        assert_eq!(feedback.len(), 1);
        assert!(feedback[0].is_error);
    }

    #[test]
    fn restore_event_reverts_edits_and_resets_page() {
        let mut app = test_app();

        app.world_mut().send_event(UpdateRowFieldEvent {
            row_id: 1,
            field: RowField::OpinionContent,
            new_value: "已修改".to_string(),
        });
        app.update();
        {
            let mut doc = app.world_mut().resource_mut::<DocumentState>();
            doc.jump_to_page(2, 5).unwrap();
        }

        app.world_mut().send_event(RequestRestoreDefault);
        app.update();

        let doc = app.world().resource::<DocumentState>();
        assert_eq!(doc.rows, doc.default_rows());
        assert_eq!(doc.current_page, 1);
        let feedback = drain_feedback(&mut app);
        assert!(feedback.iter().any(|f| !f.is_error));
    }

    #[test]
    fn meta_update_event_changes_the_named_field() {
        let mut app = test_app();
        app.world_mut().send_event(UpdateMetaFieldEvent {
            field: MetaField::DraftingUnitValue,
            new_value: "某起草单位".to_string(),
        });
        app.update();

        let doc = app.world().resource::<DocumentState>();
        assert_eq!(doc.meta.drafting_unit_value, "某起草单位");
        assert_eq!(doc.meta.title, DocumentMeta::default().title);
    }
}
