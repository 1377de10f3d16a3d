// src/ui/shortcut.rs
//
// Restore-shortcut parsing and matching. A single letter pairs with a
// required Alt modifier (so typing into a cell can never trigger it); a
// named key such as "F9", "Enter" or "Escape" fires bare.

use bevy::prelude::*;
use bevy_egui::egui;

use crate::document::events::RequestRestoreDefault;
use crate::settings::EditorSettings;
use crate::ui::elements::editor::state::EditorWindowState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortcutBinding {
    pub key: egui::Key,
    pub alt_required: bool,
}

/// "f9" → "F9", "escape" → "Escape". Leaves multi-word names alone.
fn canonical_key_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

impl ShortcutBinding {
    /// Parses the stored shortcut string. Returns `None` for input no key is
    /// known by; an unparseable shortcut simply never fires.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let mut chars = trimmed.chars();
        let first = chars.next()?;
        if chars.next().is_none() {
            let name: String = first.to_uppercase().collect();
            return egui::Key::from_name(&name).map(|key| Self {
                key,
                alt_required: true,
            });
        }
        egui::Key::from_name(trimmed)
            .or_else(|| egui::Key::from_name(&canonical_key_name(trimmed)))
            .map(|key| Self {
                key,
                alt_required: false,
            })
    }

    /// A single-letter binding needs Alt held; other modifiers are not
    /// inspected. A named key matches on the key alone.
    pub fn is_match(&self, key: egui::Key, modifiers: egui::Modifiers) -> bool {
        key == self.key && (!self.alt_required || modifiers.alt)
    }
}

/// Human-readable form for tooltips and feedback ("Alt + Q", "F9").
pub fn describe(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.chars().count() == 1 {
        format!("Alt + {}", trimmed.to_uppercase())
    } else {
        trimmed.to_string()
    }
}

/// Runs once per frame at the top of the UI pass. Consumes the matching key
/// event (suppressing its default effect) and requests a restore. Disabled
/// while any popup is open so the shortcut cannot fire into a text field.
pub fn dispatch_restore_shortcut(
    ctx: &egui::Context,
    state: &EditorWindowState,
    settings: &EditorSettings,
    restore_writer: &mut EventWriter<RequestRestoreDefault>,
) {
    if state.any_popup_open() {
        return;
    }
    let Some(binding) = ShortcutBinding::parse(&settings.restore_shortcut) else {
        return;
    };

    let fired = ctx.input_mut(|input| {
        let mut hit = false;
        input.events.retain(|event| {
            if let egui::Event::Key {
                key,
                pressed: true,
                modifiers,
                ..
            } = event
            {
                if binding.is_match(*key, *modifiers) {
                    hit = true;
                    return false;
                }
            }
            true
        });
        hit
    });

    if fired {
        info!("Restore shortcut '{}' matched.", settings.restore_shortcut);
        restore_writer.write(RequestRestoreDefault);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_egui::egui::{Key, Modifiers};

    #[test]
    fn single_letter_requires_alt() {
        let binding = ShortcutBinding::parse("q").unwrap();
        assert_eq!(binding.key, Key::Q);
        assert!(binding.alt_required);

        assert!(binding.is_match(Key::Q, Modifiers::ALT));
        assert!(!binding.is_match(Key::Q, Modifiers::NONE));
        assert!(!binding.is_match(Key::A, Modifiers::ALT));
        // Alt plus another modifier still counts; only Alt is inspected.
        assert!(binding.is_match(Key::Q, Modifiers::ALT | Modifiers::CTRL));
    }

    #[test]
    fn function_key_fires_bare() {
        let binding = ShortcutBinding::parse("F9").unwrap();
        assert_eq!(binding.key, Key::F9);
        assert!(!binding.alt_required);

        assert!(binding.is_match(Key::F9, Modifiers::NONE));
        assert!(binding.is_match(Key::F9, Modifiers::SHIFT));
        assert!(!binding.is_match(Key::F8, Modifiers::NONE));
    }

    #[test]
    fn named_keys_parse_case_insensitively() {
        assert_eq!(ShortcutBinding::parse("escape").unwrap().key, Key::Escape);
        assert_eq!(ShortcutBinding::parse("f9").unwrap().key, Key::F9);
        assert_eq!(ShortcutBinding::parse("Enter").unwrap().key, Key::Enter);
    }

    #[test]
    fn unknown_input_never_fires() {
        assert!(ShortcutBinding::parse("").is_none());
        assert!(ShortcutBinding::parse("ctrl+q").is_none());
        assert!(ShortcutBinding::parse("  ").is_none());
    }

    #[test]
    fn describe_spells_out_the_alt_rule() {
        assert_eq!(describe("q"), "Alt + Q");
        assert_eq!(describe("F9"), "F9");
    }
}
