// src/document/systems/io/import.rs
use bevy::prelude::*;
use std::fs;
use std::path::PathBuf;

use crate::document::events::{
    DocumentOperationFeedback, RequestInitiateTextImport, RequestProcessImport,
};
use crate::document::resources::DocumentState;
use crate::document::sample;

/// Opens the native file dialog for a plain-text import. Blocking dialog in
/// the handling system, as is usual for a Bevy app.
pub fn handle_initiate_text_import(
    mut events: EventReader<RequestInitiateTextImport>,
    mut feedback_writer: EventWriter<DocumentOperationFeedback>,
    mut process_writer: EventWriter<RequestProcessImport>,
) {
    if events.is_empty() {
        return;
    }
    events.clear();
    info!("Text import initiated by UI.");

    let picked_file: Option<PathBuf> = rfd::FileDialog::new()
        .add_filter("Text files", &["txt"])
        .pick_file();

    match picked_file {
        Some(path) => {
            info!("File picked: '{}'. Sending request to process.", path.display());
            process_writer.write(RequestProcessImport { path });
        }
        None => {
            info!("File selection cancelled.");
            feedback_writer.write(DocumentOperationFeedback {
                message: "已取消选择文件。".to_string(),
                is_error: false,
            });
        }
    }
}

/// Reads the picked file whole, parses it into rows and replaces the live
/// document. Metadata is untouched; pagination resets inside `replace_rows`.
pub fn handle_process_import(
    mut events: EventReader<RequestProcessImport>,
    mut doc: ResMut<DocumentState>,
    mut feedback_writer: EventWriter<DocumentOperationFeedback>,
) {
    for event in events.read() {
        match fs::read_to_string(&event.path) {
            Ok(text) => {
                let rows = sample::parse_text_to_rows(&text);
                let row_count = rows.len();
                doc.replace_rows(rows);
                info!(
                    "Imported '{}' into {} rows.",
                    event.path.display(),
                    row_count
                );
                feedback_writer.write(DocumentOperationFeedback {
                    message: format!("已导入文本，生成 {} 行。", row_count),
                    is_error: false,
                });
            }
            Err(e) => {
                error!("Failed to read import file '{}': {}", event.path.display(), e);
                feedback_writer.write(DocumentOperationFeedback {
                    message: format!("读取文件失败：{}", e),
                    is_error: true,
                });
            }
        }
    }
}
