//! Frontend configuration loaded from `folio.toml`.

use std::fs;
use std::path::Path;

use folio_types::error::Result;
use serde::Deserialize;

/// Presentation settings for the interactive frontend.
///
/// All fields are optional in the file; a missing file yields the defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Prompt shown before the input line and echoed submissions.
    pub prompt: String,
    /// Base URL prepended to navigation paths when displaying them.
    pub site_base: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            prompt: "guest@portfolio:~$".to_string(),
            site_base: String::new(),
        }
    }
}

impl AppConfig {
    /// Load from a TOML file. A missing file falls back to the defaults;
    /// a malformed file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}
