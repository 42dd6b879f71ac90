//! Loading an explicitly requested defcon.toml.
//!
//! The file is never searched for: it only applies when named with
//! `--settings`. Loading checks that the naming knobs produce valid C
//! identifiers and resolves relative paths against the file's directory.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use super::schema::DefconToml;

pub const SETTINGS_FILE: &str = "defcon.toml";

static IDENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

#[derive(Debug)]
pub enum SettingsError {
    Io(io::Error),
    Parse(toml::de::Error),
    /// `prefix` or `guard` would not yield a valid C identifier
    InvalidName { field: &'static str, value: String },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "failed to read settings file: {e}"),
            SettingsError::Parse(e) => write!(f, "failed to parse settings file: {e}"),
            SettingsError::InvalidName { field, value } => {
                write!(f, "output.{field} is not a valid C identifier: {value:?}")
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
            SettingsError::InvalidName { .. } => None,
        }
    }
}

impl From<io::Error> for SettingsError {
    fn from(e: io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<toml::de::Error> for SettingsError {
    fn from(e: toml::de::Error) -> Self {
        SettingsError::Parse(e)
    }
}

/// Read `path`, validate it and rebase its relative paths on its directory.
pub fn load_settings(path: &Path) -> Result<DefconToml, SettingsError> {
    let content = fs::read_to_string(path)?;
    let mut settings: DefconToml = toml::from_str(&content)?;

    check_names(&settings)?;

    if let Some(base) = path.parent() {
        rebase(&mut settings, base);
    }
    Ok(settings)
}

fn check_names(settings: &DefconToml) -> Result<(), SettingsError> {
    // An empty prefix is allowed: names are then emitted as declared
    if let Some(prefix) = &settings.output.prefix {
        if !prefix.is_empty() && !IDENT_RE.is_match(prefix) {
            return Err(SettingsError::InvalidName {
                field: "prefix",
                value: prefix.clone(),
            });
        }
    }
    if let Some(guard) = &settings.output.guard {
        if !IDENT_RE.is_match(guard) {
            return Err(SettingsError::InvalidName {
                field: "guard",
                value: guard.clone(),
            });
        }
    }
    Ok(())
}

fn rebase(settings: &mut DefconToml, base: &Path) {
    let paths: [&mut Option<PathBuf>; 3] = [
        &mut settings.input.config,
        &mut settings.output.header,
        &mut settings.output.makefile,
    ];
    for path in paths.into_iter().flatten() {
        if path.is_relative() {
            *path = base.join(&*path);
        }
    }
}
