// src/document/systems/io/save.rs
use std::fs;
use std::io::BufWriter;
use std::path::Path;

use bevy::log::info;
use serde::Serialize;

use super::{DocumentIoError, DEFAULT_META_FILE, DEFAULT_ROWS_FILE};
use crate::document::definitions::{DocumentMeta, TableRow};

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), DocumentIoError> {
    let file = fs::File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), value)?;
    Ok(())
}

/// Persists the default snapshot as two independent JSON files.
pub fn save_default_document(
    rows: &[TableRow],
    meta: &DocumentMeta,
) -> Result<(), DocumentIoError> {
    let base = super::get_default_data_base_path();
    fs::create_dir_all(&base)?;

    write_json(&base.join(DEFAULT_ROWS_FILE), &rows)?;
    write_json(&base.join(DEFAULT_META_FILE), meta)?;
    info!(
        "Saved default document ({} rows) to '{}'.",
        rows.len(),
        base.display()
    );
    Ok(())
}
