//! Loading [`FilenameOptions`] from TOML.
//!
//! Options live under a `[filename]` table so they can share a file with
//! other settings:
//!
//! ```toml
//! [filename]
//! platform = "windows"
//! max_len = 64
//! replacement_text = "_"
//! ```
//!
//! Every key is optional; missing keys take the [`FilenameOptions::default`]
//! values. A missing `[filename]` table yields the defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::options::FilenameOptions;

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    filename: FilenameOptions,
}

/// Loads options from a TOML file.
///
/// # Errors
///
/// Fails if the file cannot be read or parsed, or if the options are
/// inconsistent (see [`FilenameOptions::validate`]).
pub fn load(path: &Path) -> Result<FilenameOptions> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    from_toml_str(&content).with_context(|| format!("Invalid config in {}", path.display()))
}

/// Parses options from TOML text.
///
/// # Errors
///
/// Fails on malformed TOML, unknown keys or platform aliases, or
/// inconsistent length bounds.
pub fn from_toml_str(content: &str) -> Result<FilenameOptions> {
    let file: ConfigFile = toml::from_str(content).context("Failed to parse TOML")?;
    file.filename
        .validate()
        .context("Invalid filename options")?;
    Ok(file.filename)
}
