// src/document/systems/io/mod.rs

use bevy::prelude::error;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub mod import;
pub mod save;
pub mod startup;

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_ROWS_FILE: &str = "default_rows.json";
pub const DEFAULT_META_FILE: &str = "default_meta.json";

/// Failures while reading or writing the persisted document. Never fatal:
/// reads fall back to generated defaults, writes surface an error feedback.
#[derive(Error, Debug)]
pub enum DocumentIoError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The document data directory lives next to the executable.
pub fn get_default_data_base_path() -> PathBuf {
    let base_dir = if let Ok(exe_path) = std::env::current_exe() {
        exe_path.parent().map(|p| p.to_path_buf()).unwrap_or_else(|| {
            error!("Could not get parent directory of executable, using current working directory '.' instead.");
            PathBuf::from(".")
        })
    } else {
        error!("Failed to get current executable path, using current working directory '.' instead.");
        PathBuf::from(".")
    };
    base_dir.join(DEFAULT_DATA_DIR)
}
