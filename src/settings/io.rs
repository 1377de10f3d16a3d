use bevy::log::{error, info};
use directories_next::ProjectDirs;
use std::fs;
use std::io::{self, BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

const QUALIFIER: &str = "com";
const ORGANIZATION: &str = "ReviewTableOrg";
const APPLICATION: &str = "ReviewTableApp";
const CONFIG_FILE: &str = "app_settings.json";

fn get_config_path() -> io::Result<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION) {
        let config_dir = proj_dirs.config_dir();
        fs::create_dir_all(config_dir)?;
        Ok(config_dir.join(CONFIG_FILE))
    } else {
        Err(io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine project directories for app settings.",
        ))
    }
}

pub fn load_settings_from_path<T: for<'de> serde::de::Deserialize<'de> + Default>(
    path: &Path,
) -> io::Result<T> {
    match fs::File::open(path) {
        Ok(file) => {
            let reader = BufReader::new(file);
            match serde_json::from_reader(reader) {
                Ok(settings) => Ok(settings),
                Err(e) => {
                    error!("AppSettings: Failed to parse settings file {:?}: {}", path, e);
                    Err(io::Error::new(
                        ErrorKind::InvalidData,
                        format!("Failed to parse settings file: {}", e),
                    ))
                }
            }
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("AppSettings: Settings file not found at {:?}. Returning default.", path);
            Ok(Default::default())
        }
        Err(e) => {
            error!("AppSettings: Failed to open settings file {:?}: {}", path, e);
            Err(e)
        }
    }
}

pub fn save_settings_to_path<T: serde::Serialize>(settings: &T, path: &Path) -> io::Result<()> {
    let file = fs::File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, settings).map_err(|e| {
        error!("AppSettings: Failed to serialize settings to {:?}: {}", path, e);
        io::Error::other(e)
    })?;
    Ok(())
}

pub fn load_settings_from_file<T: for<'de> serde::de::Deserialize<'de> + Default>() -> io::Result<T>
{
    let config_file = get_config_path()?;
    info!("AppSettings: Attempting to load settings from {:?}", config_file);
    load_settings_from_path(&config_file)
}

pub fn save_settings_to_file<T: serde::Serialize>(settings: &T) -> io::Result<()> {
    let config_file = get_config_path()?;
    info!("AppSettings: Saving settings to {:?}", config_file);
    save_settings_to_path(settings, &config_file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::EditorSettings;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("reviewtable_settings_{}_{}", std::process::id(), name))
    }

    #[test]
    fn settings_round_trip_through_json_file() {
        let path = temp_path("roundtrip.json");
        let settings = EditorSettings {
            restore_shortcut: "q".to_string(),
            rows_per_page: 12,
            auto_scroll: false,
        };
        save_settings_to_path(&settings, &path).unwrap();
        let loaded: EditorSettings = load_settings_from_path(&path).unwrap();
        assert_eq!(loaded, settings);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn missing_settings_file_yields_defaults() {
        let path = temp_path("missing.json");
        let loaded: EditorSettings = load_settings_from_path(&path).unwrap();
        assert_eq!(loaded, EditorSettings::default());
    }

    #[test]
    fn corrupt_settings_file_is_an_error_not_a_panic() {
        let path = temp_path("corrupt.json");
        fs::write(&path, "{ not json").unwrap();
        let result: io::Result<EditorSettings> = load_settings_from_path(&path);
        assert!(result.is_err());
        let _ = fs::remove_file(path);
    }
}
