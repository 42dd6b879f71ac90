use std::path::PathBuf;

use crate::render::{Artifact, RenderOptions};
use crate::resolve::DEFAULT_CONFIG_FILE;

/// Everything a run needs, after merging CLI and settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Definition files, applied in order
    pub definitions: Vec<PathBuf>,
    /// Configuration file with the actual values
    pub config: PathBuf,
    /// Headers and makefile fragments, in command-line order
    pub artifacts: Vec<Artifact>,
    pub suppress_undefined: bool,
    pub render: RenderOptions,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            definitions: Vec::new(),
            config: PathBuf::from(DEFAULT_CONFIG_FILE),
            artifacts: Vec::new(),
            suppress_undefined: false,
            render: RenderOptions::default(),
        }
    }
}
