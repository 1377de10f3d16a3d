// src/document/plugin.rs
use bevy::prelude::*;

use super::events::{
    DocumentOperationFeedback, RequestInitiateTextImport, RequestProcessImport,
    RequestRestoreDefault, RequestSaveAsDefault, UpdateMetaFieldEvent,
    UpdateRowFieldEvent,
};
use super::resources::DocumentState;
use super::systems;

// System sets for ordering: dialog-opening systems first, then everything
// that mutates the document state.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
enum DocumentSystemSet {
    UserInput,
    ApplyChanges,
}

/// Plugin owning the document data and all of its mutation paths.
pub struct DocumentPlugin;

impl Plugin for DocumentPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                DocumentSystemSet::UserInput,
                DocumentSystemSet::ApplyChanges.after(DocumentSystemSet::UserInput),
            ),
        );

        app.init_resource::<DocumentState>();

        app.add_event::<RequestRestoreDefault>()
            .add_event::<RequestSaveAsDefault>()
            .add_event::<RequestInitiateTextImport>()
            .add_event::<RequestProcessImport>()
            .add_event::<UpdateRowFieldEvent>()
            .add_event::<UpdateMetaFieldEvent>()
            .add_event::<DocumentOperationFeedback>();

        app.add_systems(
            Startup,
            systems::io::startup::load_or_generate_default_document,
        );

        app.add_systems(
            Update,
            (systems::io::import::handle_initiate_text_import,)
                .in_set(DocumentSystemSet::UserInput),
        );
        app.add_systems(
            Update,
            (
                systems::io::import::handle_process_import,
                systems::logic::handle_restore_request,
                systems::logic::handle_save_as_default,
                systems::logic::handle_row_field_update,
                systems::logic::handle_meta_field_update,
            )
                .chain()
                .in_set(DocumentSystemSet::ApplyChanges),
        );

        info!("DocumentPlugin initialized.");
    }
}
