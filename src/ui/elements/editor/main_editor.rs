// src/ui/elements/editor/main_editor.rs
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::document::definitions::MetaField;
use crate::document::events::{
    DocumentOperationFeedback, RequestInitiateTextImport, RequestRestoreDefault,
    RequestSaveAsDefault, UpdateMetaFieldEvent, UpdateRowFieldEvent,
};
use crate::document::resources::DocumentState;
use crate::settings::EditorSettings;
use crate::ui::{
    elements::{
        popups::{
            show_page_jump_popup, show_rows_per_page_popup, show_save_default_popup,
            show_shortcut_popup,
        },
        top_panel::show_top_panel,
    },
    shortcut, UiFeedbackState,
};

use super::state::{EditorWindowState, MetaDraft};
use super::status_bar::show_status_bar;
use super::table_body::document_table;

fn meta_text(field: MetaField, text: &str) -> egui::RichText {
    match field {
        MetaField::Title => egui::RichText::new(text).heading().strong(),
        MetaField::FooterNote => egui::RichText::new(text).small(),
        _ => egui::RichText::new(text),
    }
}

/// A header/footer field: label normally, focused text editor while its
/// draft is active. Commits as a single-field event on focus loss, discards
/// on Escape.
fn editable_meta_field(
    ui: &mut egui::Ui,
    state: &mut EditorWindowState,
    field: MetaField,
    current: &str,
    meta_update_writer: &mut EventWriter<UpdateMetaFieldEvent>,
) {
    let editing = matches!(&state.meta_draft, Some(draft) if draft.field == field);

    if !editing {
        let display = if current.is_empty() { "（点击填写）" } else { current };
        let response = ui.add(
            egui::Label::new(meta_text(field, display)).sense(egui::Sense::click()),
        );
        if response.clicked() {
            state.meta_draft = Some(MetaDraft {
                field,
                text: current.to_string(),
            });
            state.meta_draft_needs_focus = true;
        }
        return;
    }

    let needs_focus = std::mem::take(&mut state.meta_draft_needs_focus);
    let mut commit = false;
    let mut cancel = false;

    if let Some(draft) = state.meta_draft.as_mut() {
        let response = ui.add(
            egui::TextEdit::singleline(&mut draft.text).desired_width(280.0),
        );
        if needs_focus {
            response.request_focus();
        }
        if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
            cancel = true;
        } else if response.lost_focus() {
            commit = true;
        }
    }

    if cancel {
        state.meta_draft = None;
    } else if commit {
        if let Some(draft) = state.meta_draft.take() {
            meta_update_writer.write(UpdateMetaFieldEvent {
                field: draft.field,
                new_value: draft.text,
            });
        }
    }
}

/// The paper header above the table: centered title, project/drafting-unit
/// lines on the left, page info and contractor/date labels on the right.
fn document_header(
    ui: &mut egui::Ui,
    state: &mut EditorWindowState,
    doc: &DocumentState,
    settings: &EditorSettings,
    meta_update_writer: &mut EventWriter<UpdateMetaFieldEvent>,
) {
    ui.vertical_centered(|ui| {
        editable_meta_field(ui, state, MetaField::Title, &doc.meta.title, meta_update_writer);
    });
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.label("标准项目名称：");
                editable_meta_field(
                    ui,
                    state,
                    MetaField::ProjectName,
                    &doc.meta.project_name,
                    meta_update_writer,
                );
            });
            ui.horizontal(|ui| {
                ui.label(&doc.meta.drafting_unit_label);
                editable_meta_field(
                    ui,
                    state,
                    MetaField::DraftingUnitValue,
                    &doc.meta.drafting_unit_value,
                    meta_update_writer,
                );
            });
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            ui.vertical(|ui| {
                ui.label(format!(
                    "{} {} {} {} 页",
                    doc.meta.page_info_prefix,
                    doc.total_pages(settings.rows_per_page),
                    doc.meta.page_info_suffix,
                    doc.current_page
                ));
                ui.horizontal(|ui| {
                    ui.label(&doc.meta.contractor_label);
                    ui.label(&doc.meta.date_label);
                });
            });
        });
    });
}

#[allow(clippy::too_many_arguments)]
pub fn document_editor_ui(
    mut contexts: EguiContexts,
    mut state: ResMut<EditorWindowState>,
    mut doc: ResMut<DocumentState>,
    mut settings: ResMut<EditorSettings>,
    ui_feedback: Res<UiFeedbackState>,
    mut restore_writer: EventWriter<RequestRestoreDefault>,
    mut save_default_writer: EventWriter<RequestSaveAsDefault>,
    mut import_writer: EventWriter<RequestInitiateTextImport>,
    mut row_update_writer: EventWriter<UpdateRowFieldEvent>,
    mut meta_update_writer: EventWriter<UpdateMetaFieldEvent>,
    mut feedback_writer: EventWriter<DocumentOperationFeedback>,
) {
    let ctx = contexts.ctx_mut();

    // Shortcut dispatch first, so a matched key never reaches a widget.
    shortcut::dispatch_restore_shortcut(ctx, &state, &settings, &mut restore_writer);

    show_shortcut_popup(ctx, &mut state, &mut settings, &mut feedback_writer);
    show_rows_per_page_popup(ctx, &mut state, &mut settings, &mut doc, &mut feedback_writer);
    show_page_jump_popup(ctx, &mut state, &mut doc, &settings, &mut feedback_writer);
    show_save_default_popup(ctx, &mut state, &mut save_default_writer);

    show_status_bar(ctx, &doc, &settings);

    egui::CentralPanel::default().show(ctx, |ui| {
        show_top_panel(
            ui,
            &mut state,
            &mut doc,
            &mut settings,
            &mut restore_writer,
            &mut import_writer,
            &mut feedback_writer,
        );

        if !ui_feedback.last_message.is_empty() {
            let text_color = if ui_feedback.is_error {
                egui::Color32::RED
            } else {
                ui.style().visuals.text_color()
            };
            ui.colored_label(text_color, &ui_feedback.last_message);
        }
        ui.separator();

        document_header(ui, &mut state, &doc, &settings, &mut meta_update_writer);
        ui.add_space(6.0);

        document_table(ui, &mut state, &doc, &settings, &mut row_update_writer);

        ui.add_space(4.0);
        editable_meta_field(
            ui,
            &mut state,
            MetaField::FooterNote,
            &doc.meta.footer_note,
            &mut meta_update_writer,
        );
    });
}
