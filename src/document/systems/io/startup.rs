// src/document/systems/io/startup.rs
use bevy::prelude::*;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::{DEFAULT_META_FILE, DEFAULT_ROWS_FILE};
use crate::document::definitions::{DocumentMeta, TableRow};
use crate::document::resources::DocumentState;
use crate::document::sample;

/// Loads a stored JSON value, treating every failure mode as "absent":
/// missing file, unreadable file, or a payload that does not match the
/// expected shape. The caller supplies the fallback.
fn load_json_or_absent<T: DeserializeOwned>(path: &Path) -> Option<T> {
    match fs::read_to_string(path) {
        Ok(content) => {
            // Trim a potential BOM which would break JSON parsing.
            let trimmed = content.trim_start_matches('\u{FEFF}');
            match serde_json::from_str(trimmed) {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!(
                        "Stored document at '{}' failed shape validation: {}. Treating as absent.",
                        path.display(),
                        e
                    );
                    None
                }
            }
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("No saved default at '{}'.", path.display());
            None
        }
        Err(e) => {
            error!("Failed to read '{}': {}. Treating as absent.", path.display(), e);
            None
        }
    }
}

/// Startup system: seeds the live document and its default snapshot from the
/// saved default files, falling back to generated placeholder content.
pub fn load_or_generate_default_document(mut doc: ResMut<DocumentState>) {
    let base = super::get_default_data_base_path();

    let rows = match load_json_or_absent::<Vec<TableRow>>(&base.join(DEFAULT_ROWS_FILE)) {
        Some(rows) if !rows.is_empty() => {
            info!("Loaded saved default document ({} rows).", rows.len());
            rows
        }
        _ => {
            info!("Generating initial placeholder document.");
            sample::generate_initial_rows()
        }
    };

    let meta = load_json_or_absent::<DocumentMeta>(&base.join(DEFAULT_META_FILE))
        .unwrap_or_else(|| {
            info!("Using default document metadata.");
            DocumentMeta::default()
        });

    doc.seed(rows, meta);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "reviewtable_{}_{}",
            std::process::id(),
            name
        ));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn missing_file_is_absent() {
        let path = std::env::temp_dir().join("reviewtable_does_not_exist.json");
        assert!(load_json_or_absent::<Vec<TableRow>>(&path).is_none());
    }

    #[test]
    fn malformed_shape_is_absent() {
        let path = temp_file("bad_shape.json", r#"[{"id": "not a number"}]"#);
        assert!(load_json_or_absent::<Vec<TableRow>>(&path).is_none());
        let _ = fs::remove_file(path);
    }

    #[test]
    fn bom_prefixed_payload_still_parses() {
        let path = temp_file("bom.json", "\u{FEFF}[]");
        let rows: Option<Vec<TableRow>> = load_json_or_absent(&path);
        assert_eq!(rows, Some(Vec::new()));
        let _ = fs::remove_file(path);
    }
}
