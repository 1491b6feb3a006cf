use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::Settings;

/// Errors produced while loading a settings file.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings file `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file `{path}`: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Load settings from `path`, or return the defaults when no path is given.
///
/// Nothing is read from disk unless a path is passed explicitly.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, SettingsError> {
    let Some(path) = path else {
        tracing::debug!("no settings file given, using defaults");
        return Ok(Settings::default());
    };

    let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = parse_settings(&text).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), ?settings, "loaded settings");
    Ok(settings)
}

fn parse_settings(text: &str) -> Result<Settings, toml::de::Error> {
    toml::from_str(text)
}
