// src/ui/mod.rs
use bevy::prelude::*;
use bevy_egui::EguiContextPass;

pub mod elements;
pub mod shortcut;
pub mod systems;

use crate::settings::{load_settings_startup, EditorSettings};
use elements::editor::main_editor::document_editor_ui;
use elements::editor::state::EditorWindowState;
use systems::handle_ui_feedback;

/// Last operation outcome shown in the feedback line under the toolbar.
#[derive(Resource, Default, Debug, Clone)]
pub struct UiFeedbackState {
    pub last_message: String,
    pub is_error: bool,
}

/// Plugin for the document editor UI.
pub struct EditorUiPlugin;

impl Plugin for EditorUiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiFeedbackState>()
            .init_resource::<EditorWindowState>()
            .init_resource::<EditorSettings>()
            .add_systems(Startup, load_settings_startup)
            .add_systems(Update, handle_ui_feedback)
            .add_systems(EguiContextPass, document_editor_ui);

        info!("EditorUiPlugin initialized.");
    }
}
