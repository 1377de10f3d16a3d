pub mod io;

use bevy::log::{info, warn};
use bevy::prelude::{ResMut, Resource};
use serde::{Deserialize, Serialize};

fn default_restore_shortcut() -> String {
    "F9".to_string()
}

fn default_rows_per_page() -> usize {
    5
}

fn default_auto_scroll() -> bool {
    true
}

/// User-configurable editor settings, persisted as JSON in the platform
/// config directory. Each field carries its own serde default so a missing
/// or malformed field degrades independently of the others.
#[derive(Resource, Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct EditorSettings {
    /// Restore shortcut: a single letter (fires with Alt) or a named key
    /// such as "F9" or "Escape" (fires bare).
    #[serde(default = "default_restore_shortcut")]
    pub restore_shortcut: String,
    /// Client-side page size of the document table, always ≥ 1.
    #[serde(default = "default_rows_per_page")]
    pub rows_per_page: usize,
    /// Scroll the document view to the top/bottom on page changes.
    #[serde(default = "default_auto_scroll")]
    pub auto_scroll: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            restore_shortcut: default_restore_shortcut(),
            rows_per_page: default_rows_per_page(),
            auto_scroll: default_auto_scroll(),
        }
    }
}

/// Startup system: replaces the default settings with the persisted ones.
/// A missing file or a parse failure leaves the defaults in place.
pub fn load_settings_startup(mut settings: ResMut<EditorSettings>) {
    match io::load_settings_from_file::<EditorSettings>() {
        Ok(mut loaded) => {
            if loaded.rows_per_page == 0 {
                warn!("Stored rows_per_page is 0; clamping to 1.");
                loaded.rows_per_page = 1;
            }
            info!(
                "Editor settings loaded (shortcut '{}', {} rows per page).",
                loaded.restore_shortcut, loaded.rows_per_page
            );
            *settings = loaded;
        }
        Err(e) => {
            warn!("Failed to load editor settings: {}. Using defaults.", e);
        }
    }
}

/// Persists the settings. Returns whether the durable write succeeded so
/// callers can warn the user; the in-memory change stands either way.
pub fn persist(settings: &EditorSettings) -> bool {
    io::save_settings_to_file(settings).is_ok()
}

/// Single-character input pairs with the Alt-modifier rule, so it is stored
/// lowercase; anything longer ("F9", "Escape") is stored as typed.
pub fn normalize_shortcut(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.chars().count() == 1 {
        trimmed.to_lowercase()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_character_shortcut_normalizes_to_lowercase() {
        assert_eq!(normalize_shortcut("Q"), "q");
        assert_eq!(normalize_shortcut(" q "), "q");
    }

    #[test]
    fn named_keys_are_stored_as_typed() {
        assert_eq!(normalize_shortcut("F9"), "F9");
        assert_eq!(normalize_shortcut("Escape"), "Escape");
    }

    #[test]
    fn each_settings_field_degrades_independently() {
        let settings: EditorSettings =
            serde_json::from_str(r#"{"rows_per_page": 8}"#).unwrap();
        assert_eq!(settings.rows_per_page, 8);
        assert_eq!(settings.restore_shortcut, "F9");
        assert!(settings.auto_scroll);
    }
}
