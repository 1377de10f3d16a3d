// src/ui/elements/editor/state.rs
use bevy::prelude::Resource;

use crate::document::definitions::{MetaField, RowField};

/// Scroll request produced by a page transition and consumed by the table on
/// the next render: forward transitions land at the top of the view,
/// backward ones at the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageScroll {
    Top,
    Bottom,
}

/// An in-progress cell edit. Lives only while the cell has focus; committed
/// as a single-field event on focus loss, discarded on Escape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellDraft {
    pub row_id: u32,
    pub field: RowField,
    pub text: String,
}

/// An in-progress edit of a document header/footer field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaDraft {
    pub field: MetaField,
    pub text: String,
}

/// Transient UI state: popup visibility, dialog draft inputs and pending
/// scroll/edit state. Nothing here is persisted.
#[derive(Resource, Debug, Default, Clone)]
pub struct EditorWindowState {
    pub show_shortcut_popup: bool,
    pub shortcut_input: String,

    pub show_rows_per_page_popup: bool,
    pub rows_per_page_input: String,

    pub show_page_jump_popup: bool,
    pub page_jump_input: String,

    pub show_save_default_popup: bool,

    pub pending_scroll: Option<PageScroll>,

    pub cell_draft: Option<CellDraft>,
    pub cell_draft_needs_focus: bool,
    pub meta_draft: Option<MetaDraft>,
    pub meta_draft_needs_focus: bool,
}

impl EditorWindowState {
    /// The restore shortcut is disabled while any popup claims input focus.
    pub fn any_popup_open(&self) -> bool {
        self.show_shortcut_popup
            || self.show_rows_per_page_popup
            || self.show_page_jump_popup
            || self.show_save_default_popup
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_popup_open_covers_every_dialog() {
        let mut state = EditorWindowState::default();
        assert!(!state.any_popup_open());

        for set in [
            |s: &mut EditorWindowState| s.show_shortcut_popup = true,
            |s: &mut EditorWindowState| s.show_rows_per_page_popup = true,
            |s: &mut EditorWindowState| s.show_page_jump_popup = true,
            |s: &mut EditorWindowState| s.show_save_default_popup = true,
        ] {
            state = EditorWindowState::default();
            set(&mut state);
            assert!(state.any_popup_open());
        }
    }
}
