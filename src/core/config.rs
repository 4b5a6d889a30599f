//! User configuration for the shell front-end.
//!
//! Settings are read from `config.json` in the tar-shell config directory, or
//! from an explicit path given with `--config`. Every field is optional in
//! the file; missing ones take their defaults.

use crate::core::dirs::get_config_directory;
use crate::core::error::{Result, TarShellError};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_TREE_MARKER: &str = "|--";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ShellConfig {
    /// Colour the prompt and error messages
    pub color: bool,
    /// Indentation appended per level by `tree`
    pub tree_marker: String,
    /// Print startup script lines after the prompt as if they were typed
    pub echo_script: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            color: true,
            tree_marker: DEFAULT_TREE_MARKER.to_string(),
            echo_script: true,
        }
    }
}

impl ShellConfig {
    /// Load the user's config file, or defaults when there is none
    pub fn load() -> Result<Self> {
        let config_file = get_config_directory()?.join("config.json");

        if config_file.exists() {
            Self::load_from(&config_file)
        } else {
            log::debug!("No config file at {}, using defaults", config_file.display());
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| TarShellError::config_read_failed(path, e))?;
        let config = serde_json::from_str(&content)
            .map_err(|e| TarShellError::config_parse_failed(path, e))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}
