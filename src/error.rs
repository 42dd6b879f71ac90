use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::ini;

/// Conditions that abort a run.
#[derive(Debug)]
pub enum DefconError {
    /// No definition file on the command line or in the settings file
    NoDefinitionFiles,
    /// The configuration file could not be read
    ReadConfig { path: PathBuf, source: io::Error },
    /// The configuration file is not a valid document
    ParseConfig {
        path: PathBuf,
        source: ini::ParseError,
    },
    /// A required key ended up without a value
    MissingValue { name: String },
}

impl fmt::Display for DefconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefconError::NoDefinitionFiles => write!(f, "no definition files"),
            DefconError::ReadConfig { path, source } => {
                write!(f, "{}: {source}", path.display())
            }
            DefconError::ParseConfig { path, source } => {
                write!(f, "{}: parse error: {source}", path.display())
            }
            DefconError::MissingValue { name } => write!(f, "key {name} requires a value!"),
        }
    }
}

impl std::error::Error for DefconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DefconError::ReadConfig { source, .. } => Some(source),
            DefconError::ParseConfig { source, .. } => Some(source),
            _ => None,
        }
    }
}
