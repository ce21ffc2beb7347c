//! Optional on-disk settings.
//!
//! Looked up at `<config dir>/beautify/config.toml` unless a path is given
//! explicitly. Every key is optional; CLI flags take precedence.
//!
//! ```toml
//! [formatter]
//! command = "/usr/local/bin/prettier"
//!
//! [clipboard]
//! enabled = true
//! read_command = ["wl-paste", "--no-newline"]
//! write_command = ["wl-copy"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub formatter: FormatterSettings,
    pub clipboard: ClipboardSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatterSettings {
    /// Path or name of the prettier executable.
    pub command: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClipboardSettings {
    /// `false` makes every clipboard read report a denied permission.
    pub enabled: bool,
    pub read_command: Option<Vec<String>>,
    pub write_command: Option<Vec<String>>,
}

impl Default for ClipboardSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            read_command: None,
            write_command: None,
        }
    }
}

/// Default settings file location, if the platform has a config directory.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("beautify").join("config.toml"))
}

impl Settings {
    /// Load settings.
    ///
    /// An explicit path must exist. The default path is optional and a
    /// missing file yields defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => {
                log::debug!("no settings file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let settings = Self::parse(&content)
            .with_context(|| format!("Failed to parse settings TOML: {}", path.display()))?;
        log::debug!("loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
