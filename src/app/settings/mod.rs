pub mod read_settings;

// Re-export commonly used types/functions for convenience
pub use read_settings::{load_settings, SettingsError};

use serde::Deserialize;

use crate::fs_op::path::Separator;
use crate::report::LABEL;

/// Separator convention as written in a settings file or on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SeparatorChoice {
    /// Whatever the host platform uses.
    #[default]
    Native,
    Unix,
    Windows,
}

impl SeparatorChoice {
    pub fn resolve(self) -> Separator {
        match self {
            SeparatorChoice::Native => Separator::native(),
            SeparatorChoice::Unix => Separator::Unix,
            SeparatorChoice::Windows => Separator::Windows,
        }
    }
}

/// User-tunable settings. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Text printed before the joined path.
    pub label: String,
    pub separator: SeparatorChoice,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            label: LABEL.to_string(),
            separator: SeparatorChoice::default(),
        }
    }
}
