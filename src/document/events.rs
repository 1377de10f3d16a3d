// src/document/events.rs
use bevy::prelude::Event;
use std::path::PathBuf;

use super::definitions::{MetaField, RowField};

/// Sent by the restore button or the keyboard shortcut. Handled by
/// `systems::logic::handle_restore_request`.
#[derive(Event, Debug, Clone)]
pub struct RequestRestoreDefault;

/// Sent after the user confirms "save current view as default". Handled by
/// `systems::logic::handle_save_as_default`.
#[derive(Event, Debug, Clone)]
pub struct RequestSaveAsDefault;

/// Sent when the user picks "import text file" in the toolbar. Opens the
/// native file dialog in `systems::io::import`.
#[derive(Event, Debug, Clone)]
pub struct RequestInitiateTextImport;

/// Carries a picked text file into the import parser.
#[derive(Event, Debug, Clone)]
pub struct RequestProcessImport {
    pub path: PathBuf,
}

/// Commits one field of one row (matched by id), sent on cell focus loss.
#[derive(Event, Debug, Clone)]
pub struct UpdateRowFieldEvent {
    pub row_id: u32,
    pub field: RowField,
    pub new_value: String,
}

/// Commits one field of the document header/footer metadata.
#[derive(Event, Debug, Clone)]
pub struct UpdateMetaFieldEvent {
    pub field: MetaField,
    pub new_value: String,
}

/// Operation outcome surfaced to the user via the feedback line.
#[derive(Event, Debug, Clone)]
pub struct DocumentOperationFeedback {
    pub message: String,
    pub is_error: bool,
}
