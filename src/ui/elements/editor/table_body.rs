// src/ui/elements/editor/table_body.rs
use bevy::prelude::*;
use bevy_egui::egui;
use egui_extras::{Column, TableBuilder};

use super::state::{CellDraft, EditorWindowState, PageScroll};
use crate::document::definitions::RowField;
use crate::document::events::UpdateRowFieldEvent;
use crate::document::resources::DocumentState;
use crate::settings::EditorSettings;

const EDITABLE_COLUMNS: [(RowField, &str); 6] = [
    (RowField::ClauseNumber, "标准章条编号"),
    (RowField::OpinionContent, "意见内容"),
    (RowField::ModificationSuggestion, "修改建议"),
    (RowField::ProposingUnit, "提出单位"),
    (RowField::HandlingOpinion, "处理意见"),
    (RowField::Remarks, "备注"),
];

fn is_text_column(field: RowField) -> bool {
    matches!(
        field,
        RowField::OpinionContent | RowField::ModificationSuggestion
    )
}

/// One table cell: a wrapped label normally, a focused text editor while a
/// draft for this cell is active. The draft commits as a single-field event
/// on focus loss and is discarded on Escape.
fn editable_cell(
    ui: &mut egui::Ui,
    state: &mut EditorWindowState,
    row_id: u32,
    field: RowField,
    current: &str,
    row_update_writer: &mut EventWriter<UpdateRowFieldEvent>,
) {
    let editing = matches!(
        &state.cell_draft,
        Some(draft) if draft.row_id == row_id && draft.field == field
    );

    if !editing {
        let label = egui::Label::new(current)
            .wrap()
            .sense(egui::Sense::click());
        if ui.add_sized(ui.available_size(), label).clicked() {
            state.cell_draft = Some(CellDraft {
                row_id,
                field,
                text: current.to_string(),
            });
            state.cell_draft_needs_focus = true;
        }
        return;
    }

    let needs_focus = std::mem::take(&mut state.cell_draft_needs_focus);
    let mut commit = false;
    let mut cancel = false;

    if let Some(draft) = state.cell_draft.as_mut() {
        let response = if is_text_column(field) {
            ui.add_sized(
                ui.available_size(),
                egui::TextEdit::multiline(&mut draft.text).desired_rows(3),
            )
        } else {
            ui.add(egui::TextEdit::singleline(&mut draft.text))
        };
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
        state.cell_draft = None;
    } else if commit {
        if let Some(draft) = state.cell_draft.take() {
            row_update_writer.write(UpdateRowFieldEvent {
                row_id: draft.row_id,
                field: draft.field,
                new_value: draft.text,
            });
        }
    }
}

/// Renders the paged seven-column table. Pagination slicing happens here via
/// `DocumentState::page_rows`; a pending page-transition scroll request is
/// consumed on this frame.
pub fn document_table(
    ui: &mut egui::Ui,
    state: &mut EditorWindowState,
    doc: &DocumentState,
    settings: &EditorSettings,
    row_update_writer: &mut EventWriter<UpdateRowFieldEvent>,
) {
    let text_style = egui::TextStyle::Body;
    let row_height = ui.text_style_height(&text_style) * 4.0;
    let page_rows = doc.page_rows(settings.rows_per_page);

    let mut table_builder = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .min_scrolled_height(0.0)
        .column(Column::exact(40.0))
        .column(Column::initial(80.0).at_least(50.0).clip(true))
        .column(Column::remainder().at_least(160.0).clip(true))
        .column(Column::remainder().at_least(160.0).clip(true))
        .column(Column::initial(110.0).at_least(60.0).clip(true))
        .column(Column::initial(90.0).at_least(60.0).clip(true))
        .column(Column::initial(80.0).at_least(50.0).clip(true));

    if let Some(scroll) = state.pending_scroll.take() {
        let (target_row, align) = match scroll {
            PageScroll::Top => (0, egui::Align::Min),
            PageScroll::Bottom => (page_rows.len().saturating_sub(1), egui::Align::Max),
        };
        table_builder = table_builder.scroll_to_row(target_row, Some(align));
    }

    table_builder
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("序号");
            });
            for (_, label) in EDITABLE_COLUMNS {
                header.col(|ui| {
                    ui.strong(label);
                });
            }
        })
        .body(|mut body| {
            for row_data in page_rows {
                body.row(row_height, |mut table_row| {
                    table_row.col(|ui| {
                        ui.label(row_data.serial_number.to_string());
                    });
                    for (field, _) in EDITABLE_COLUMNS {
                        table_row.col(|ui| {
                            editable_cell(
                                ui,
                                state,
                                row_data.id,
                                field,
                                field.get(row_data),
                                row_update_writer,
                            );
                        });
                    }
                });
            }
        });
}
